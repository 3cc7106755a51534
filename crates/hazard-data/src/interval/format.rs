//! Text rendering shared by the interval containers' `Display` impls.
//!
//! Keys are printed as fixed-point bin centers, values in scientific
//! notation with a signed two-digit exponent:
//!
//! ```text
//!           [    0.50,     1.50]
//! [   1.00] [ 1.00e+00,  2.00e+00]
//! ```

// External dependencies
use core::fmt::{Display, Formatter, Result};
use num_traits::Float;

// Internal dependencies
use crate::primitives::validator::to_f64;

const DELIMITER: &str = ", ";

/// Padding before the key header of a table.
pub(crate) const TABLE_PREFIX: &str = "          ";

/// Padding before the key header of a volume.
pub(crate) const VOLUME_PREFIX: &str = "                    ";

/// Write `prefix` followed by a bracketed key list and a newline.
pub(crate) fn write_keys<T: Float>(f: &mut Formatter<'_>, prefix: &str, keys: &[T]) -> Result {
    write!(f, "{prefix}[")?;
    for (i, &k) in keys.iter().enumerate() {
        if i > 0 {
            write!(f, "{DELIMITER}")?;
        }
        write!(f, "{:8.2}", to_f64(k))?;
    }
    writeln!(f, "]")
}

/// Write a bracketed key label such as `[   1.00] `.
#[inline]
pub(crate) fn write_label<T: Float>(f: &mut Formatter<'_>, key: T) -> Result {
    write!(f, "[{:7.2}] ", to_f64(key))
}

/// Write a bracketed value list and a newline.
pub(crate) fn write_values<T: Float>(f: &mut Formatter<'_>, values: &[T]) -> Result {
    write!(f, "[")?;
    for (i, &v) in values.iter().enumerate() {
        if i > 0 {
            write!(f, "{DELIMITER}")?;
        }
        write!(f, "{}", Sci(to_f64(v)))?;
    }
    writeln!(f, "]")
}

// Scientific notation with two mantissa decimals and a signed exponent.
struct Sci(f64);

impl Display for Sci {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let v = self.0;
        if !v.is_finite() {
            return write!(f, "{:>9}", v);
        }
        let mut exp = if v == 0.0 {
            0
        } else {
            Float::floor(Float::log10(Float::abs(v))) as i32
        };
        let mut mantissa = v / Float::powi(10.0_f64, exp);
        // Rounding to two places may carry into the next decade.
        if Float::abs(Float::round(mantissa * 100.0) / 100.0) >= 10.0 {
            mantissa /= 10.0;
            exp += 1;
        }
        let sign = if exp < 0 { '-' } else { '+' };
        write!(f, "{:5.2}e{}{:02}", mantissa, sign, exp.abs())
    }
}
