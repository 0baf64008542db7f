//! Parameter checks shared by the step-size strategies.
//!
//! Every check returns [`LineSearchError::InvalidParameter`] naming the
//! offending field, so a misconfigured sweep fails before any run starts.
use crate::optimization::line_search::errors::{LineSearchError, LineSearchResult};

/// Require a finite, strictly positive value (step lengths, floors).
pub fn verify_positive(name: &'static str, value: f64) -> LineSearchResult<()> {
    if !value.is_finite() {
        return Err(LineSearchError::InvalidParameter {
            name,
            value,
            reason: "Value must be finite.",
        });
    }
    if value <= 0.0 {
        return Err(LineSearchError::InvalidParameter {
            name,
            value,
            reason: "Value must be positive.",
        });
    }
    Ok(())
}

/// Require `0 < value < 1` (Armijo `c1`, shrink factor `rho`).
pub fn verify_open_unit(name: &'static str, value: f64) -> LineSearchResult<()> {
    if !(value > 0.0 && value < 1.0) {
        return Err(LineSearchError::InvalidParameter {
            name,
            value,
            reason: "Value must lie in the open interval (0, 1).",
        });
    }
    Ok(())
}

/// Require `0 < c1 < c2 < 1` for the strong Wolfe conditions.
pub fn verify_wolfe_constants(c1: f64, c2: f64) -> LineSearchResult<()> {
    verify_open_unit("c1", c1)?;
    verify_open_unit("c2", c2)?;
    if c2 <= c1 {
        return Err(LineSearchError::InvalidParameter {
            name: "c2",
            value: c2,
            reason: "Curvature constant c2 must exceed c1.",
        });
    }
    Ok(())
}

/// Require a nonzero iteration budget.
pub fn verify_budget(name: &'static str, budget: usize) -> LineSearchResult<()> {
    if budget == 0 {
        return Err(LineSearchError::InvalidParameter {
            name,
            value: 0.0,
            reason: "Budget must be greater than zero.",
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    // Purpose
    // -------
    // Ensure the Wolfe constant ordering is enforced.
    //
    // Given
    // -----
    // - (c1, c2) = (1e-4, 0.9), (0.5, 0.5), (0.5, 1.0).
    //
    // Expect
    // ------
    // - Only the first pair is accepted; the others name `c2`.
    fn verify_wolfe_constants_enforces_ordering() {
        // Act
        let ok = verify_wolfe_constants(1e-4, 0.9);
        let equal = verify_wolfe_constants(0.5, 0.5);
        let upper = verify_wolfe_constants(0.5, 1.0);

        // Assert
        assert!(ok.is_ok());
        assert!(matches!(equal, Err(LineSearchError::InvalidParameter { name: "c2", .. })));
        assert!(matches!(upper, Err(LineSearchError::InvalidParameter { name: "c2", .. })));
    }

    #[test]
    // Purpose
    // -------
    // Ensure NaN is rejected by both scalar validators.
    //
    // Given
    // -----
    // - `NaN` passed as a step and as a unit-interval constant.
    //
    // Expect
    // ------
    // - Both return `InvalidParameter`.
    fn scalar_validators_reject_nan() {
        // Act
        let step = verify_positive("alpha", f64::NAN);
        let unit = verify_open_unit("rho", f64::NAN);

        // Assert
        assert!(step.is_err());
        assert!(unit.is_err());
    }
}
