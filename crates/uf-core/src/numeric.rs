use crate::{UfError, UfResult};

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
        Self {
            abs: 1e-12,
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

pub fn ensure_finite(v: Real, what: &'static str) -> UfResult<Real> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(UfError::NonFinite { what, value: v })
    }
}

/// Render `v` with `digits` significant digits, shortest form.
///
/// Follows printf `%g` selection: exponential notation when the decimal
/// exponent is below -4 or at least `digits`, fixed notation otherwise,
/// trailing zeros trimmed in both.
pub fn format_sig(v: Real, digits: usize) -> String {
    debug_assert!(digits > 0);
    if !v.is_finite() {
        return v.to_string();
    }
    if v == 0.0 {
        return "0".to_string();
    }

    let exp = v.abs().log10().floor() as i32;
    if exp < -4 || exp >= digits as i32 {
        let s = format!("{:.*e}", digits - 1, v);
        match s.split_once('e') {
            Some((mantissa, exponent)) => format!("{}e{}", trim_trailing(mantissa), exponent),
            None => s,
        }
    } else {
        let decimals = (digits as i32 - 1 - exp).max(0) as usize;
        trim_trailing(&format!("{:.*}", decimals, v))
    }
}

fn trim_trailing(s: &str) -> String {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s.to_string()
    }
}
