//! RLWE parameter sets.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::commons::dispersion::{DispersionParameter, ModularVariance, StandardDev, Variance};
use crate::commons::parameters::{
    check_dimension, check_noise_exponent, check_polynomial_size, CoefficientWidth, Log2StdDev,
    LweDimension, PolynomialSize,
};
use crate::error::ParameterError;

/// The security parameters for encryption with RLWE ciphertexts.
///
/// # Attributes
/// - `polynomial_size`: the number of coefficients in a polynomial, a power of two (a size of 1
///   degenerates to the LWE case)
/// - `dimension`: the size of an RLWE mask
/// - `log2_std_dev`: the log2 of the standard deviation used for the error normal distribution
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "SerializableRlweParameters", into = "SerializableRlweParameters")]
pub struct RlweParameters {
    polynomial_size: PolynomialSize,
    dimension: LweDimension,
    log2_std_dev: Log2StdDev,
    coefficient_width: CoefficientWidth,
}

#[derive(Serialize, Deserialize)]
struct SerializableRlweParameters {
    polynomial_size: usize,
    dimension: usize,
    log2_std_dev: i32,
}

impl TryFrom<SerializableRlweParameters> for RlweParameters {
    type Error = ParameterError;

    fn try_from(value: SerializableRlweParameters) -> Result<Self, Self::Error> {
        Self::new(value.polynomial_size, value.dimension, value.log2_std_dev)
    }
}

impl From<RlweParameters> for SerializableRlweParameters {
    fn from(value: RlweParameters) -> Self {
        Self {
            polynomial_size: value.polynomial_size.0,
            dimension: value.dimension.0,
            log2_std_dev: value.log2_std_dev.0,
        }
    }
}

impl RlweParameters {
    /// Instantiate a new set of RLWE parameters.
    ///
    /// # Errors
    ///
    /// * [`ParameterError::InvalidPolynomialSize`] if `polynomial_size` is not a power of 2
    /// * [`ParameterError::InvalidDimension`] if `dimension` is 0
    /// * [`ParameterError::InvalidNoiseExponent`] if `log2_std_dev` is not negative
    /// * [`ParameterError::NoiseExponentOutOfRange`] if no supported width holds the noise
    pub fn new(
        polynomial_size: usize,
        dimension: usize,
        log2_std_dev: i32,
    ) -> Result<Self, ParameterError> {
        let polynomial_size = check_polynomial_size("polynomial_size", polynomial_size)?;
        let dimension = check_dimension("dimension", dimension)?;
        let (log2_std_dev, coefficient_width) =
            check_noise_exponent("log2_std_dev", log2_std_dev)?;
        Ok(Self {
            polynomial_size,
            dimension,
            log2_std_dev,
            coefficient_width,
        })
    }

    pub fn polynomial_size(&self) -> PolynomialSize {
        self.polynomial_size
    }

    pub fn dimension(&self) -> LweDimension {
        self.dimension
    }

    pub fn log2_std_dev(&self) -> Log2StdDev {
        self.log2_std_dev
    }

    /// Return the coefficient width needed to hold the noise of this parameter set.
    pub fn required_coefficient_width(&self) -> CoefficientWidth {
        self.coefficient_width
    }

    pub fn standard_dev(&self) -> StandardDev {
        self.log2_std_dev.to_standard_dev()
    }

    pub fn variance(&self) -> Variance {
        self.standard_dev().get_variance()
    }

    pub fn modular_variance(&self) -> ModularVariance {
        self.standard_dev()
            .get_modular_variance(self.required_coefficient_width())
    }
}

impl Display for RlweParameters {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "RlweParameters {{ polynomial_size: {}, dimension: {}, log2_std_dev: {} }}",
            self.polynomial_size.0, self.dimension.0, self.log2_std_dev.0
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polynomial_size_must_be_power_of_two() {
        assert_eq!(
            RlweParameters::new(3, 256, -25),
            Err(ParameterError::InvalidPolynomialSize {
                field: "polynomial_size",
                value: 3
            })
        );
        assert!(matches!(
            RlweParameters::new(0, 256, -25),
            Err(ParameterError::InvalidPolynomialSize { value: 0, .. })
        ));
        for log2 in 0..12 {
            assert!(RlweParameters::new(1 << log2, 256, -25).is_ok());
        }
    }

    #[test]
    fn test_invalid_dimension_and_noise() {
        assert_eq!(
            RlweParameters::new(2, 0, -25),
            Err(ParameterError::InvalidDimension {
                field: "dimension",
                value: 0
            })
        );
        assert!(matches!(
            RlweParameters::new(2, 256, 0),
            Err(ParameterError::InvalidNoiseExponent { value: 0, .. })
        ));
        assert!(matches!(
            RlweParameters::new(2, 256, -200),
            Err(ParameterError::NoiseExponentOutOfRange { value: -200, .. })
        ));
    }

    #[test]
    fn test_accessors_and_width() {
        let params = RlweParameters::new(4, 256, -40).unwrap();
        assert_eq!(params.polynomial_size(), PolynomialSize(4));
        assert_eq!(params.dimension(), LweDimension(256));
        assert_eq!(params.log2_std_dev(), Log2StdDev(-40));
        assert_eq!(params.required_coefficient_width(), CoefficientWidth::U64);
        assert_eq!(params.standard_dev().0, 2_f64.powi(-40));
        assert_eq!(params.variance().0, 2_f64.powi(-80));
        assert_eq!(params.modular_variance().value, 2_f64.powi(48));
        assert_eq!(
            params.to_string(),
            "RlweParameters { polynomial_size: 4, dimension: 256, log2_std_dev: -40 }"
        );
    }

    #[test]
    fn test_deserialization_is_validated() {
        let params = RlweParameters::new(2, 512, -25).unwrap();
        let ser = bincode::serialize(&params).unwrap();
        let deser: RlweParameters = bincode::deserialize(&ser).unwrap();
        assert_eq!(deser, params);

        let forged = bincode::serialize(&(3usize, 512usize, -25i32)).unwrap();
        let deser: Result<RlweParameters, _> = bincode::deserialize(&forged);
        assert!(deser.is_err());
    }
}
