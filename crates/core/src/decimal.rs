// -------------------------------------------------------------------------------------------------
//  Copyright (C) 2015-2026 Nautech Systems Pty Ltd. All rights reserved.
//  https://nautechsystems.io
//
//  Licensed under the GNU Lesser General Public License Version 3.0 (the "License");
//  You may not use this file except in compliance with the License.
//  You may obtain a copy of the License at https://www.gnu.org/licenses/lgpl-3.0.en.html
//
//  Unless required by applicable law or agreed to in writing, software
//  distributed under the License is distributed on an "AS IS" BASIS,
//  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//  See the License for the specific language governing permissions and
//  limitations under the License.
// -------------------------------------------------------------------------------------------------

//! Exact conversions and rounding for arbitrary-precision decimals.
//!
//! # Binary floats
//!
//! A binary float such as `3.14_f64` cannot hold the value 3.14. Rather than rounding the float
//! to some display precision (which would silently hide the representation error),
//! [`f64_to_decimal_exact`] expands the float into the decimal it actually denotes:
//!
//! ```text
//! 3.14_f64 -> 3.140000000000000124344978758017532527446746826171875
//! ```
//!
//! Every finite `f64` is `m * 2^e` for integers `m` and `e`, and `2^-n == 5^n / 10^n`, so the
//! expansion always terminates.

use bigdecimal::{BigDecimal, RoundingMode, Zero};
use num_bigint::BigInt;

use crate::correctness::check_in_range_inclusive_i64;

/// The largest absolute scale (decimal exponent) an amount may carry.
///
/// Covers the smallest subnormal `f64`, which expands to 1074 fractional digits.
pub const DECIMAL_MAX_SCALE: i64 = 4096;

/// The largest number of significant digits an amount may carry.
pub const DECIMAL_MAX_DIGITS: u64 = 8192;

const F64_FRACTION_BITS: u32 = 52;
const F64_FRACTION_MASK: u64 = (1 << F64_FRACTION_BITS) - 1;
const F64_EXPONENT_MASK: u64 = 0x7ff;
const F64_EXPONENT_BIAS: i64 = 1075; // 1023 + 52 fraction bits
const F64_SUBNORMAL_EXPONENT: i64 = -1074;

/// Converts a finite `f64` into the exact decimal value it represents.
///
/// Returns `None` for NaN and infinities, which have no decimal value.
#[must_use]
pub fn f64_to_decimal_exact(value: f64) -> Option<BigDecimal> {
    if !value.is_finite() {
        return None;
    }

    let bits = value.to_bits();
    let is_negative = bits >> 63 == 1;
    let biased_exponent = ((bits >> F64_FRACTION_BITS) & F64_EXPONENT_MASK) as i64;
    let fraction = bits & F64_FRACTION_MASK;

    if biased_exponent == 0 && fraction == 0 {
        return Some(BigDecimal::zero());
    }

    let (mantissa, exponent) = if biased_exponent == 0 {
        (fraction, F64_SUBNORMAL_EXPONENT)
    } else {
        (
            fraction | (1 << F64_FRACTION_BITS),
            biased_exponent - F64_EXPONENT_BIAS,
        )
    };

    let mut digits = BigInt::from(mantissa);
    let scale = if exponent >= 0 {
        digits <<= exponent as usize;
        0
    } else {
        let n = exponent.unsigned_abs();
        digits *= BigInt::from(5_u8).pow(n as u32);
        n as i64
    };

    if is_negative {
        digits = -digits;
    }

    Some(trim_trailing_zeros(&BigDecimal::new(digits, scale)))
}

/// Converts a finite `f32` into the exact decimal value it represents.
///
/// Widening `f32` to `f64` is lossless, so the result is exact.
#[must_use]
pub fn f32_to_decimal_exact(value: f32) -> Option<BigDecimal> {
    f64_to_decimal_exact(f64::from(value))
}

/// Checks the `value` can be rounded and rendered in plain notation.
///
/// A decimal such as `1e9223372036854775807` parses in constant space but has no printable
/// plain form, so both its scale and its digit count are bounded.
///
/// # Errors
///
/// Returns an error if the scale is outside [`-DECIMAL_MAX_SCALE`, `DECIMAL_MAX_SCALE`] or the
/// digit count exceeds [`DECIMAL_MAX_DIGITS`].
pub fn check_decimal_bounds(value: &BigDecimal, param: &str) -> anyhow::Result<()> {
    check_in_range_inclusive_i64(
        value.fractional_digit_count(),
        -DECIMAL_MAX_SCALE,
        DECIMAL_MAX_SCALE,
        param,
    )?;
    let digits = value.digits();
    if digits > DECIMAL_MAX_DIGITS {
        anyhow::bail!("invalid decimal for '{param}', {digits} digits exceeds {DECIMAL_MAX_DIGITS}")
    }
    Ok(())
}

/// Removes trailing fractional zeros without ever producing a negative scale.
#[must_use]
pub fn trim_trailing_zeros(value: &BigDecimal) -> BigDecimal {
    if value.is_zero() {
        return BigDecimal::zero();
    }

    let normalized = value.normalized();
    if normalized.fractional_digit_count() < 0 {
        normalized.with_scale(0)
    } else {
        normalized
    }
}

/// Rounds the magnitude of `value` to `decimal_places` using round-half-to-even and returns
/// the integer and fractional digit strings.
///
/// The fractional string is always exactly `decimal_places` long and the integer string is
/// never empty.
#[must_use]
pub fn round_half_even_digits(value: &BigDecimal, decimal_places: u8) -> (String, String) {
    let scale = i64::from(decimal_places);
    let rounded = value.abs().with_scale_round(scale, RoundingMode::HalfEven);
    let (int_val, exponent) = rounded.as_bigint_and_exponent();
    debug_assert_eq!(exponent, scale, "rounded scale mismatch");

    let places = usize::from(decimal_places);
    let mut digits = int_val.magnitude().to_string();
    if digits.len() <= places {
        digits = format!("{digits:0>width$}", width = places + 1);
    }

    let fraction = digits.split_off(digits.len() - places);
    (digits, fraction)
}
