//! Argument checks shared by traversal request builders.

use crate::error::{check_argument, AppError};
use crate::structure::traverser::NO_LIMIT;

/// `value` must be strictly positive.
pub fn check_positive(value: i64, name: &str) -> Result<(), AppError> {
    check_argument(value > 0, || {
        format!("{} must be > 0, but got '{}'", name, value)
    })
}

/// Max degree must be non-negative or [`NO_LIMIT`].
pub fn check_degree(degree: i64) -> Result<(), AppError> {
    check_limit_named(degree, "Degree")
}

/// Capacity must be non-negative or [`NO_LIMIT`].
pub fn check_capacity(capacity: i64) -> Result<(), AppError> {
    check_limit_named(capacity, "Capacity")
}

/// Limit must be non-negative or [`NO_LIMIT`].
pub fn check_limit(limit: i64) -> Result<(), AppError> {
    check_limit_named(limit, "Limit")
}

/// Alpha must be in `(0, 1]`. NaN fails.
pub fn check_alpha(alpha: f64) -> Result<(), AppError> {
    check_argument(alpha > 0.0 && alpha <= 1.0, || {
        format!("The alpha must be in range (0, 1], but got '{}'", alpha)
    })
}

/// Skip degree must not be negative.
pub fn check_non_negative_skip_degree(skip_degree: i64) -> Result<(), AppError> {
    check_argument(skip_degree >= 0, || {
        format!("The skipped degree must be >= 0, but got '{}'", skip_degree)
    })
}

/// Skip degree is 0 (disabled) or at least a bounded `degree`.
pub fn check_skip_degree(skip_degree: i64, degree: i64) -> Result<(), AppError> {
    check_non_negative_skip_degree(skip_degree)?;
    if skip_degree > 0 {
        check_argument(degree != NO_LIMIT && skip_degree >= degree, || {
            format!(
                "The skipped degree must be >= max degree, but got skipped degree '{}' and max degree '{}'",
                skip_degree, degree
            )
        })?;
    }
    Ok(())
}

fn check_limit_named(value: i64, name: &str) -> Result<(), AppError> {
    check_argument(value == NO_LIMIT || value >= 0, || {
        format!(
            "{} must be >= 0 or == {}, but got: {}",
            name, NO_LIMIT, value
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_positive() {
        assert!(check_positive(1, "top").is_ok());
        let err = check_positive(0, "top").unwrap_err();
        assert_eq!(err.to_string(), "Invalid argument: top must be > 0, but got '0'");
        assert!(check_positive(-3, "min group count").is_err());
    }

    #[test]
    fn test_limits_accept_no_limit_sentinel() {
        for check in [check_degree, check_capacity, check_limit] {
            assert!(check(NO_LIMIT).is_ok());
            assert!(check(0).is_ok());
            assert!(check(10_000).is_ok());
            assert!(check(-2).is_err());
            assert!(check(i64::MIN).is_err());
        }
    }

    #[test]
    fn test_check_alpha_range() {
        assert!(check_alpha(1.0).is_ok());
        assert!(check_alpha(0.01).is_ok());
        assert!(check_alpha(0.0).is_err());
        assert!(check_alpha(-0.5).is_err());
        assert!(check_alpha(1.0001).is_err());
        assert!(check_alpha(f64::NAN).is_err());
    }

    #[test]
    fn test_check_skip_degree() {
        assert!(check_skip_degree(0, 100).is_ok());
        assert!(check_skip_degree(100, 100).is_ok());
        assert!(check_skip_degree(50, 100).is_err());
        assert!(check_skip_degree(-1, 100).is_err());
        assert!(check_skip_degree(5, NO_LIMIT).is_err());
        assert!(check_skip_degree(0, NO_LIMIT).is_ok());
    }

    #[test]
    fn test_check_non_negative_skip_degree() {
        assert!(check_non_negative_skip_degree(0).is_ok());
        assert!(check_non_negative_skip_degree(20_000).is_ok());
        assert!(check_non_negative_skip_degree(-5).is_err());
    }
}
