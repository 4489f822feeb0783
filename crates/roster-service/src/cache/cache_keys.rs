//! Cache key generators for consistent key naming.

use roster_core::UserId;

/// Prefix for all cache keys to namespace them.
const CACHE_PREFIX: &str = "roster:cache";

/// Generate a cache key for a user by ID.
#[must_use]
pub fn user_by_id(id: UserId) -> String {
    format!("{}:user:id:{}", CACHE_PREFIX, id)
}

/// Pattern matching every cached user.
#[must_use]
pub fn all_users_pattern() -> String {
    format!("{}:user:id:*", CACHE_PREFIX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_by_id_key() {
        assert_eq!(user_by_id(UserId::new(42)), "roster:cache:user:id:42");
    }

    #[test]
    fn test_pattern_covers_user_keys() {
        let pattern = all_users_pattern();
        let prefix = pattern.trim_end_matches('*');
        assert!(user_by_id(UserId::new(7)).starts_with(prefix));
    }
}
