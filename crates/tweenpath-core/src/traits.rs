use crate::error::{CurveError, Result};

/// Validate a configuration before it is evaluated.
pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Reject a non-finite numeric field, naming it in the error.
pub fn ensure_finite(name: &str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(CurveError::invalid(format!(
            "{name} must be a finite number, got {value}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_finite() {
        assert!(ensure_finite("radius", 10.0).is_ok());
        assert!(ensure_finite("radius", -3.5).is_ok());

        let err = ensure_finite("radius", f64::NAN).unwrap_err();
        assert!(matches!(err, CurveError::InvalidConfiguration(_)));
        assert!(err.to_string().contains("radius"));

        assert!(ensure_finite("amp", f64::INFINITY).is_err());
    }
}
