//! Building blocks shared by the LWE and RLWE parameter types.

pub mod dispersion;
pub mod parameters;
