//! Certified security parameter sets for LWE and RLWE encryption.
//!
//! This crate ships the table of parameter sets whose security has been estimated offline (with
//! the LWE estimator) for 80 and 128 bits of security, together with the types needed to handle
//! them safely:
//!
//!  * [`LweParameters`] and [`RlweParameters`], immutable values validated at construction;
//!  * [`Registry`], the name-addressable collection of certified parameter sets, built once and
//!    then shared by reference.
//!
//! ```rust
//! use tfhe_security_params::{CoefficientWidth, Registry, SecurityLevel};
//!
//! let registry = Registry::certified().unwrap();
//!
//! let params = registry.lookup_lwe("LWE128_630").unwrap();
//! assert_eq!(params.lwe_dimension().0, 630);
//! assert_eq!(params.required_coefficient_width(), CoefficientWidth::U32);
//!
//! let largest = registry.lwe().all(SecurityLevel::Bits128).last().unwrap();
//! assert_eq!(largest.0, "LWE128_4096");
//! ```
//!
//! Production code should bind to one named parameter set: iterating over a table is meant for
//! sweeps and benchmarks, and a future revision of the table would silently change what such an
//! iteration returns.

pub mod commons;
pub mod error;
pub mod lwe;
pub mod registry;
pub mod rlwe;
pub mod storage;

pub use crate::commons::dispersion::{DispersionParameter, ModularVariance, StandardDev, Variance};
pub use crate::commons::parameters::{
    CoefficientWidth, Log2StdDev, LweDimension, PolynomialSize, SecurityLevel,
};
pub use error::{
    ConsistencyViolation, Error, ParameterError, RegistryConsistencyError, Result, StorageError,
    UnknownParameterSetError, UnwrapResultExt,
};
pub use lwe::LweParameters;
pub use registry::{
    CertificationDate, CertifiedParameters, ParameterSet, ParameterTable, Provenance, Registry,
    TableRow, WidthAnnotation,
};
pub use rlwe::RlweParameters;
pub use storage::Named;

pub mod prelude {
    pub use crate::commons::dispersion::{DispersionParameter, StandardDev};
    pub use crate::commons::parameters::{
        CoefficientWidth, Log2StdDev, LweDimension, PolynomialSize, SecurityLevel,
    };
    pub use crate::error::{Error, ParameterError, Result, UnwrapResultExt};
    pub use crate::lwe::LweParameters;
    pub use crate::registry::{CertifiedParameters, ParameterSet, Registry};
    pub use crate::rlwe::RlweParameters;
}
