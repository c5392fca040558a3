use super::WidthAnnotation::{Unmarked, WarnU32, WarnU64};
use super::{TableRow, WidthAnnotation, LWE_ESTIMATOR_2020_09_15};
use crate::commons::parameters::SecurityLevel::{self, Bits128, Bits80};
use crate::rlwe::RlweParameters;

const fn row(
    name: &'static str,
    security_level: SecurityLevel,
    polynomial_size: usize,
    dimension: usize,
    log2_std_dev: i32,
    annotation: WidthAnnotation,
) -> TableRow<RlweParameters> {
    TableRow {
        name,
        security_level,
        values: (polynomial_size, dimension, log2_std_dev),
        annotation,
        provenance: LWE_ESTIMATOR_2020_09_15,
    }
}

/// The certified RLWE parameter sets.
///
/// Only the dimensions the estimator was run on are present for each polynomial size.
#[rustfmt::skip]
pub const RLWE_PARAMETER_TABLE: [TableRow<RlweParameters>; 15] = [
    // 128 bits of security, polynomial size 1
    row("RLWE128_256_1",  Bits128, 1,  256,   -5, Unmarked),
    row("RLWE128_512_1",  Bits128, 1,  512,  -11, Unmarked),
    row("RLWE128_1024_1", Bits128, 1, 1024,  -25, Unmarked),
    row("RLWE128_2048_1", Bits128, 1, 2048,  -52, WarnU32),
    row("RLWE128_4096_1", Bits128, 1, 4096, -105, WarnU64),
    // 128 bits of security, polynomial size 2
    row("RLWE128_256_2",  Bits128, 2,  256,  -11, Unmarked),
    row("RLWE128_512_2",  Bits128, 2,  512,  -25, Unmarked),
    // 128 bits of security, polynomial size 4
    row("RLWE128_256_4",  Bits128, 4,  256,  -25, Unmarked),
    // 80 bits of security, polynomial size 1
    row("RLWE80_256_1",   Bits80,  1,  256,   -9, Unmarked),
    row("RLWE80_512_1",   Bits80,  1,  512,  -19, Unmarked),
    row("RLWE80_1024_1",  Bits80,  1, 1024,  -40, WarnU32),
    row("RLWE80_2048_1",  Bits80,  1, 2048,  -82, WarnU64),
    // 80 bits of security, polynomial size 2
    row("RLWE80_256_2",   Bits80,  2,  256,  -19, Unmarked),
    row("RLWE80_512_2",   Bits80,  2,  512,  -40, WarnU32),
    // 80 bits of security, polynomial size 4
    row("RLWE80_256_4",   Bits80,  4,  256,  -40, WarnU32),
];
