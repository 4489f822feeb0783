//! OpenAPI documentation configuration.

use crate::controllers::catalog_controller::{Notification, Order, Product};
use crate::controllers::{HealthResponse, ReadinessResponse};
use roster_core::{ErrorResponse, FieldError, User, UserId};
use roster_service::CreateUserRequest;
use utoipa::OpenApi;

/// OpenAPI documentation for the Roster API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Roster API",
        version = "0.1.0",
        description = "User records with cache-aside reads, plus static order, product and notification catalogues",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    ),
    paths(
        // User endpoints
        crate::controllers::user_controller::list_users,
        crate::controllers::user_controller::create_user,
        crate::controllers::user_controller::get_user,
        crate::controllers::user_controller::delete_user,
        // Catalogue endpoints
        crate::controllers::catalog_controller::list_orders,
        crate::controllers::catalog_controller::list_products,
        crate::controllers::catalog_controller::list_notifications,
        // Health endpoints
        crate::controllers::health_controller::health_check,
        crate::controllers::health_controller::readiness_check,
        crate::controllers::health_controller::liveness_check,
    ),
    components(
        schemas(
            UserId,
            User,
            CreateUserRequest,
            ErrorResponse,
            FieldError,
            Order,
            Product,
            Notification,
            HealthResponse,
            ReadinessResponse,
        )
    ),
    tags(
        (name = "users", description = "User record endpoints"),
        (name = "catalog", description = "Static catalogue endpoints"),
        (name = "health", description = "Health check endpoints")
    )
)]
pub struct ApiDoc;
