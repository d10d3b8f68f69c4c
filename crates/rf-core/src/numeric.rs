use crate::CoreError;

/// Floating point type used throughout the system
pub type Real = f64;

/// One tolerance for everything
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        // Quantities are kg/day and litres/day; LP backends resolve to ~1e-8,
        // so 1e-6 absolute slack is comfortably above solver noise.
        Self {
            abs: 1e-6,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, CoreError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(CoreError::NonFinite { what, value: v })
    }
}

/// Finite and `>= 0`; the domain of every price, density and quantity here.
pub fn ensure_non_negative(v: Real, what: &'static str) -> Result<Real, CoreError> {
    let v = ensure_finite(v, what)?;
    if v < 0.0 {
        return Err(CoreError::Negative { what, value: v });
    }
    Ok(v)
}
