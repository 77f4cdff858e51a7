//! Scalar input checks shared by the resolvers.

use crate::{TiError, TiResult};

/// Rejects NaN and ±∞.
pub fn ensure_finite(value: f64, what: &'static str) -> TiResult<f64> {
    if value.is_nan() || value.is_infinite() {
        return Err(TiError::NonFinite { what, value });
    }
    Ok(value)
}

/// Finite and strictly greater than zero.
pub fn ensure_positive(value: f64, what: &'static str) -> TiResult<f64> {
    match ensure_finite(value, what)? {
        v if v > 0.0 => Ok(v),
        v => Err(TiError::NonPositive { what, value: v }),
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn positive_values_pass_through(v in 1e-12_f64..1e12) {
            prop_assert_eq!(ensure_positive(v, "v"), Ok(v));
        }

        #[test]
        fn non_positive_values_are_rejected(v in -1e12_f64..=0.0) {
            let rejected = matches!(ensure_positive(v, "v"), Err(TiError::NonPositive { .. }));
            prop_assert!(rejected);
        }
    }
}
