//! Module with new-types wrapping basic rust types, giving them a particular meaning, to avoid
//! common mistakes when passing parameters to functions.
//!
//! These types have 0 overhead compared to the type being wrapped.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::commons::dispersion::StandardDev;
use crate::error::ParameterError;

/// The LWE dimensions for which the LWE estimator has been run.
pub const APPROVED_LWE_DIMENSIONS: [usize; 12] =
    [256, 512, 630, 650, 688, 710, 750, 800, 830, 1024, 2048, 4096];

/// The largest noise exponent magnitude that a supported coefficient type can hold.
pub const MAX_NOISE_MAGNITUDE: u32 = 127;

/// The number of scalar in an LWE mask, or the length of an LWE secret key.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub struct LweDimension(pub usize);

impl LweDimension {
    /// Return whether the dimension belongs to [`APPROVED_LWE_DIMENSIONS`].
    pub fn is_approved(&self) -> bool {
        APPROVED_LWE_DIMENSIONS.contains(&self.0)
    }
}

/// The number of coefficients of a polynomial.
///
/// Assuming a polynomial $a\_0 + a\_1X + /dots + a\_{N-1}X^{N-1}$, this new-type contains $N$.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub struct PolynomialSize(pub usize);

impl PolynomialSize {
    /// Return $\log\_2(N)$, or `None` if the size is not a power of two.
    pub fn log2(&self) -> Option<u32> {
        self.0.is_power_of_two().then(|| self.0.ilog2())
    }
}

/// The base 2 logarithm of the standard deviation of the error distribution.
///
/// The standard deviation is expressed relatively to the modulus, i.e. on the torus, so a valid
/// exponent is always negative: $\sigma = 2^p$ with $p < 0$.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub struct Log2StdDev(pub i32);

impl Log2StdDev {
    /// Return $|p|$.
    pub fn magnitude(&self) -> u32 {
        self.0.unsigned_abs()
    }

    /// Return $\sigma = 2^p$.
    pub fn to_standard_dev(&self) -> StandardDev {
        StandardDev::from_log_standard_dev(self.0 as f64)
    }
}

/// The estimated security of a parameter set, in bits of classical security against the
/// best-known lattice attacks.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub enum SecurityLevel {
    Bits80,
    Bits128,
}

impl SecurityLevel {
    pub const ALL: [Self; 2] = [Self::Bits80, Self::Bits128];

    pub const fn bits(&self) -> u32 {
        match self {
            Self::Bits80 => 80,
            Self::Bits128 => 128,
        }
    }

    pub const fn from_bits(bits: u32) -> Option<Self> {
        match bits {
            80 => Some(Self::Bits80),
            128 => Some(Self::Bits128),
            _ => None,
        }
    }
}

impl Display for SecurityLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} bits", self.bits())
    }
}

/// The unsigned integer width needed to store ciphertext coefficients without the noise
/// overflowing.
///
/// A $w$-bit coefficient discretizes the torus with a precision of $2^{-w}$, so a noise with
/// $\sigma = 2^p$ is only representable when $|p| < w$.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub enum CoefficientWidth {
    U32,
    U64,
    U128,
}

impl CoefficientWidth {
    pub const fn bits(&self) -> u32 {
        match self {
            Self::U32 => 32,
            Self::U64 => 64,
            Self::U128 => 128,
        }
    }

    /// Return the narrowest width able to hold a noise exponent of the given magnitude, or `None`
    /// when it is larger than [`MAX_NOISE_MAGNITUDE`].
    ///
    /// ```rust
    /// use tfhe_security_params::CoefficientWidth;
    ///
    /// assert_eq!(CoefficientWidth::for_noise_magnitude(31), Some(CoefficientWidth::U32));
    /// assert_eq!(CoefficientWidth::for_noise_magnitude(32), Some(CoefficientWidth::U64));
    /// assert_eq!(CoefficientWidth::for_noise_magnitude(105), Some(CoefficientWidth::U128));
    /// assert_eq!(CoefficientWidth::for_noise_magnitude(128), None);
    /// ```
    pub const fn for_noise_magnitude(magnitude: u32) -> Option<Self> {
        match magnitude {
            0..=31 => Some(Self::U32),
            32..=63 => Some(Self::U64),
            64..=MAX_NOISE_MAGNITUDE => Some(Self::U128),
            _ => None,
        }
    }
}

impl Display for CoefficientWidth {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-bit coefficients", self.bits())
    }
}

pub(crate) fn check_dimension(
    field: &'static str,
    dimension: usize,
) -> Result<LweDimension, ParameterError> {
    if dimension == 0 {
        return Err(ParameterError::InvalidDimension {
            field,
            value: dimension,
        });
    }
    Ok(LweDimension(dimension))
}

pub(crate) fn check_polynomial_size(
    field: &'static str,
    polynomial_size: usize,
) -> Result<PolynomialSize, ParameterError> {
    // 0 is not a power of two
    if !polynomial_size.is_power_of_two() {
        return Err(ParameterError::InvalidPolynomialSize {
            field,
            value: polynomial_size,
        });
    }
    Ok(PolynomialSize(polynomial_size))
}

/// Check the noise exponent and return it along with the width it requires.
pub(crate) fn check_noise_exponent(
    field: &'static str,
    log2_std_dev: i32,
) -> Result<(Log2StdDev, CoefficientWidth), ParameterError> {
    if log2_std_dev >= 0 {
        return Err(ParameterError::InvalidNoiseExponent {
            field,
            value: log2_std_dev,
        });
    }
    let log2_std_dev = Log2StdDev(log2_std_dev);
    let width = CoefficientWidth::for_noise_magnitude(log2_std_dev.magnitude()).ok_or(
        ParameterError::NoiseExponentOutOfRange {
            field,
            value: log2_std_dev.0,
            max: MAX_NOISE_MAGNITUDE,
        },
    )?;
    Ok((log2_std_dev, width))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_width_thresholds() {
        for magnitude in 0..=31 {
            assert_eq!(
                CoefficientWidth::for_noise_magnitude(magnitude),
                Some(CoefficientWidth::U32)
            );
        }
        assert_eq!(
            CoefficientWidth::for_noise_magnitude(32),
            Some(CoefficientWidth::U64)
        );
        assert_eq!(
            CoefficientWidth::for_noise_magnitude(63),
            Some(CoefficientWidth::U64)
        );
        assert_eq!(
            CoefficientWidth::for_noise_magnitude(64),
            Some(CoefficientWidth::U128)
        );
        assert_eq!(CoefficientWidth::for_noise_magnitude(128), None);
        assert_eq!(CoefficientWidth::for_noise_magnitude(u32::MAX), None);
    }

    #[test]
    fn test_width_is_monotonic() {
        let mut rng = rand::thread_rng();
        for _ in 0..1000 {
            let a: u32 = rng.gen_range(0..=MAX_NOISE_MAGNITUDE);
            let b: u32 = rng.gen_range(0..=MAX_NOISE_MAGNITUDE);
            let (small, large) = if a <= b { (a, b) } else { (b, a) };

            let small_width = CoefficientWidth::for_noise_magnitude(small).unwrap();
            let large_width = CoefficientWidth::for_noise_magnitude(large).unwrap();
            assert!(small_width <= large_width);
            // The noise has to stay strictly below the coefficient precision
            assert!(large < large_width.bits());
        }
    }

    #[test]
    fn test_security_level_bits() {
        for level in SecurityLevel::ALL {
            assert_eq!(SecurityLevel::from_bits(level.bits()), Some(level));
        }
        assert_eq!(SecurityLevel::from_bits(192), None);
        assert_eq!(SecurityLevel::Bits128.to_string(), "128 bits");
    }

    #[test]
    fn test_polynomial_size_log2() {
        assert_eq!(PolynomialSize(1).log2(), Some(0));
        assert_eq!(PolynomialSize(1024).log2(), Some(10));
        assert_eq!(PolynomialSize(3).log2(), None);
        assert_eq!(PolynomialSize(0).log2(), None);
    }

    #[test]
    fn test_approved_dimensions() {
        assert!(LweDimension(630).is_approved());
        assert!(LweDimension(4096).is_approved());
        assert!(!LweDimension(722).is_approved());
    }
}
