//! Error types returned by parameter construction, registry lookups and persistence.

use std::fmt::Display;

use thiserror::Error;

use crate::commons::parameters::CoefficientWidth;
use crate::registry::{CertificationDate, WidthAnnotation};

/// Unwrap 'Extension' trait
///
/// The goal of this trait is to add a method similar to `unwrap` to `Result<T, E>`
/// that uses the implementation of `Display` and not `Debug` as the
/// message in the panic.
///
/// Startup code is expected to use it on [`Registry::certified`](crate::Registry::certified): a
/// [`RegistryConsistencyError`] means the shipped table is wrong and must abort the process.
pub trait UnwrapResultExt<T> {
    fn unwrap_display(self) -> T;
}

impl<T, E> UnwrapResultExt<T> for std::result::Result<T, E>
where
    E: Display,
{
    #[track_caller]
    fn unwrap_display(self) -> T {
        match self {
            Ok(t) => t,
            Err(e) => panic!("{}", e),
        }
    }
}

/// Error returned when a parameter set is built from values violating its invariants.
///
/// Every variant carries the name of the offending field and the rejected value.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum ParameterError {
    #[error("invalid {field} {value}: a dimension must be strictly positive")]
    InvalidDimension { field: &'static str, value: usize },

    #[error("invalid {field} {value}: a polynomial size must be a power of two")]
    InvalidPolynomialSize { field: &'static str, value: usize },

    #[error("invalid {field} {value}: the noise exponent must be strictly negative")]
    InvalidNoiseExponent { field: &'static str, value: i32 },

    #[error("{field} {value} is out of range: its magnitude cannot exceed {max}")]
    NoiseExponentOutOfRange {
        field: &'static str,
        value: i32,
        max: u32,
    },
}

/// Error returned when a name is not present in a [`Registry`](crate::Registry).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown parameter set '{name}'")]
pub struct UnknownParameterSetError {
    pub name: String,
}

impl UnknownParameterSetError {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// The defect found in a literal table row.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConsistencyViolation {
    #[error("annotated as {declared} but the noise exponent requires {derived}")]
    WidthAnnotationMismatch {
        declared: WidthAnnotation,
        derived: CoefficientWidth,
    },

    #[error("the values of this entry are named '{expected}'")]
    NameMismatch { expected: String },

    #[error("the name is declared more than once")]
    DuplicateName,

    #[error("dimension {0} is not in the approved set")]
    UnapprovedDimension(usize),

    #[error("certified on {0}, which is not a calendar date")]
    InvalidCertificationDate(CertificationDate),

    #[error(transparent)]
    InvalidParameters(#[from] ParameterError),
}

/// Error raised while building a [`Registry`](crate::Registry) from its literal tables.
///
/// This is not caller-correctable: it points at a copy/paste mistake in a certified table, and the
/// process must not start with it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("inconsistent registry entry '{name}': {violation}")]
pub struct RegistryConsistencyError {
    pub name: String,
    pub violation: ConsistencyViolation,
}

impl RegistryConsistencyError {
    pub fn new(name: impl Into<String>, violation: impl Into<ConsistencyViolation>) -> Self {
        Self {
            name: name.into(),
            violation: violation.into(),
        }
    }
}

/// Error raised when saving or loading a parameter set.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] bincode::Error),

    #[error("expected a stored {expected}, found a stored {found}")]
    TypeMismatch {
        expected: &'static str,
        found: String,
    },
}

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Parameter(#[from] ParameterError),

    #[error(transparent)]
    UnknownParameterSet(#[from] UnknownParameterSetError),

    #[error(transparent)]
    RegistryConsistency(#[from] RegistryConsistencyError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
