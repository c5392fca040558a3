//! Module containing noise distribution primitives.
//!
//! The noise of a parameter set is specified by the standard deviation of a gaussian
//! distribution, of the form $\sigma = 2^p$ with $p$ a negative integer. Depending on the
//! consumer, the same quantity is needed in different representations:
//!
//! + $\sigma$ can be encoded in the [`StandardDev`] type.
//! + $\sigma^2$ can be encoded in the [`Variance`] type.
//!
//! Both implement the [`DispersionParameter`] trait.

use serde::{Deserialize, Serialize};

use crate::commons::parameters::CoefficientWidth;

/// A trait for types representing distribution parameters.
pub trait DispersionParameter: Copy {
    /// Return the standard deviation of the distribution, i.e. $\sigma = 2^p$.
    fn get_standard_dev(&self) -> StandardDev;
    /// Return the variance of the distribution, i.e. $\sigma^2 = 2^{2p}$.
    fn get_variance(&self) -> Variance;
    /// For coefficients of width $w$ representing $\mathbb{Z}/2^w\mathbb{Z}$, return
    /// $2^{2(w+p)}$.
    fn get_modular_variance(&self, width: CoefficientWidth) -> ModularVariance;
}

fn width_to_modulus(width: CoefficientWidth) -> f64 {
    2.0f64.powi(width.bits() as i32)
}

/// A distribution parameter that uses the standard deviation as representation.
///
/// # Example:
///
/// ```rust
/// use tfhe_security_params::{CoefficientWidth, DispersionParameter, StandardDev};
/// let params = StandardDev::from_log_standard_dev(-25.);
/// assert_eq!(params.get_standard_dev().0, 2_f64.powf(-25.));
/// assert_eq!(params.get_variance().0, 2_f64.powf(-25.).powi(2));
/// assert_eq!(
///     params.get_modular_variance(CoefficientWidth::U32).value,
///     2_f64.powf(32. - 25.).powi(2)
/// );
/// ```
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct StandardDev(pub f64);

impl StandardDev {
    pub fn from_standard_dev(std: f64) -> Self {
        Self(std)
    }

    pub fn from_log_standard_dev(log_std: f64) -> Self {
        Self(2_f64.powf(log_std))
    }
}

impl DispersionParameter for StandardDev {
    fn get_standard_dev(&self) -> Self {
        *self
    }
    fn get_variance(&self) -> Variance {
        Variance(self.0.powi(2))
    }
    fn get_modular_variance(&self, width: CoefficientWidth) -> ModularVariance {
        ModularVariance {
            value: 2_f64.powf(2. * (width.bits() as f64 + self.0.log2())),
            modulus: width_to_modulus(width),
        }
    }
}

/// A distribution parameter that uses the variance as representation.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct Variance(pub f64);

/// A variance scaled to the modulus of the coefficients, along with that modulus.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct ModularVariance {
    pub value: f64,
    pub modulus: f64,
}

impl DispersionParameter for Variance {
    fn get_standard_dev(&self) -> StandardDev {
        StandardDev(self.0.sqrt())
    }
    fn get_variance(&self) -> Self {
        *self
    }
    fn get_modular_variance(&self, width: CoefficientWidth) -> ModularVariance {
        ModularVariance {
            value: 2_f64.powf(2. * (width.bits() as f64 + self.0.sqrt().log2())),
            modulus: width_to_modulus(width),
        }
    }
}
