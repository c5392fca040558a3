//! LWE parameter sets.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::commons::dispersion::{DispersionParameter, ModularVariance, StandardDev, Variance};
use crate::commons::parameters::{
    check_dimension, check_noise_exponent, CoefficientWidth, Log2StdDev, LweDimension,
};
use crate::error::ParameterError;

/// The security parameters for encryption with LWE ciphertexts.
///
/// An instance can only be obtained through [`LweParameters::new`] (or by deserializing a value
/// that passes the same checks), so every instance satisfies:
///  * the dimension is strictly positive;
///  * the noise exponent is strictly negative and small enough for a supported coefficient width.
///
/// # Warning
///
/// Failing to fix the parameters properly would yield incorrect and insecure computation.
/// Unless you are a cryptographer who really knows the impact of each of those parameters, you
/// __must__ stick with the parameter sets of the [`Registry`](crate::Registry).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "SerializableLweParameters", into = "SerializableLweParameters")]
pub struct LweParameters {
    lwe_dimension: LweDimension,
    log2_std_dev: Log2StdDev,
    coefficient_width: CoefficientWidth,
}

#[derive(Serialize, Deserialize)]
struct SerializableLweParameters {
    dimension: usize,
    log2_std_dev: i32,
}

impl TryFrom<SerializableLweParameters> for LweParameters {
    type Error = ParameterError;

    fn try_from(value: SerializableLweParameters) -> Result<Self, Self::Error> {
        Self::new(value.dimension, value.log2_std_dev)
    }
}

impl From<LweParameters> for SerializableLweParameters {
    fn from(value: LweParameters) -> Self {
        Self {
            dimension: value.lwe_dimension.0,
            log2_std_dev: value.log2_std_dev.0,
        }
    }
}

impl LweParameters {
    /// Instantiate a new set of LWE parameters.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tfhe_security_params::{CoefficientWidth, LweParameters, ParameterError};
    ///
    /// let params = LweParameters::new(2048, -52).unwrap();
    /// assert_eq!(params.required_coefficient_width(), CoefficientWidth::U64);
    ///
    /// assert!(matches!(
    ///     LweParameters::new(0, -5),
    ///     Err(ParameterError::InvalidDimension { value: 0, .. })
    /// ));
    /// ```
    pub fn new(dimension: usize, log2_std_dev: i32) -> Result<Self, ParameterError> {
        let lwe_dimension = check_dimension("dimension", dimension)?;
        let (log2_std_dev, coefficient_width) =
            check_noise_exponent("log2_std_dev", log2_std_dev)?;
        Ok(Self {
            lwe_dimension,
            log2_std_dev,
            coefficient_width,
        })
    }

    pub fn lwe_dimension(&self) -> LweDimension {
        self.lwe_dimension
    }

    pub fn log2_std_dev(&self) -> Log2StdDev {
        self.log2_std_dev
    }

    /// Return the coefficient width needed to hold the noise of this parameter set.
    pub fn required_coefficient_width(&self) -> CoefficientWidth {
        self.coefficient_width
    }

    /// Return $\sigma = 2^{log2\\_std\\_dev}$.
    pub fn standard_dev(&self) -> StandardDev {
        self.log2_std_dev.to_standard_dev()
    }

    pub fn variance(&self) -> Variance {
        self.standard_dev().get_variance()
    }

    /// Return the variance scaled to coefficients of the required width.
    pub fn modular_variance(&self) -> ModularVariance {
        self.standard_dev()
            .get_modular_variance(self.required_coefficient_width())
    }
}

impl Display for LweParameters {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "LweParameters {{ dimension: {}, log2_std_dev: {} }}",
            self.lwe_dimension.0, self.log2_std_dev.0
        )
    }
}
