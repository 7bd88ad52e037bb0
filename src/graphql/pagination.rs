//! Shared pagination utilities for GraphQL resolvers
//!
//! This module provides constants and helper functions for consistent
//! skip/limit handling across resolvers.

/// Default page size for list fields when the caller omits `limit`
pub const DEFAULT_LIMIT: i32 = 10;

/// Default offset for list fields when the caller omits `skip`
pub const DEFAULT_SKIP: i32 = 0;

/// Clamp a limit to non-negative
///
/// No upper bound is applied; callers may request arbitrarily large pages.
#[inline]
pub fn clamp_limit(limit: i32) -> i64 {
    limit.max(0) as i64
}

/// Clamp a skip offset to non-negative
#[inline]
pub fn clamp_skip(skip: i32) -> i64 {
    skip.max(0) as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_limit_valid() {
        assert_eq!(clamp_limit(50), 50);
        assert_eq!(clamp_limit(0), 0);
    }

    #[test]
    fn test_clamp_limit_negative() {
        assert_eq!(clamp_limit(-5), 0);
    }

    #[test]
    fn test_clamp_limit_has_no_upper_bound() {
        assert_eq!(clamp_limit(i32::MAX), i32::MAX as i64);
    }

    #[test]
    fn test_clamp_skip_valid() {
        assert_eq!(clamp_skip(10), 10);
    }

    #[test]
    fn test_clamp_skip_negative() {
        assert_eq!(clamp_skip(-5), 0);
    }
}
