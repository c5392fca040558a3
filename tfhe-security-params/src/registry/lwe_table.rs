use super::WidthAnnotation::{Unmarked, WarnU32, WarnU64};
use super::{TableRow, WidthAnnotation, LWE_ESTIMATOR_2020_09_15};
use crate::commons::parameters::SecurityLevel::{self, Bits128, Bits80};
use crate::lwe::LweParameters;

const fn row(
    name: &'static str,
    security_level: SecurityLevel,
    dimension: usize,
    log2_std_dev: i32,
    annotation: WidthAnnotation,
) -> TableRow<LweParameters> {
    TableRow {
        name,
        security_level,
        values: (dimension, log2_std_dev),
        annotation,
        provenance: LWE_ESTIMATOR_2020_09_15,
    }
}

/// The certified LWE parameter sets.
///
/// Changing a row requires a new estimator run: the values are not derived from each other and
/// missing dimensions must not be interpolated.
#[rustfmt::skip]
pub const LWE_PARAMETER_TABLE: [TableRow<LweParameters>; 23] = [
    // 128 bits of security
    row("LWE128_256",  Bits128,  256,   -5, Unmarked),
    row("LWE128_512",  Bits128,  512,  -11, Unmarked),
    row("LWE128_630",  Bits128,  630,  -14, Unmarked),
    row("LWE128_650",  Bits128,  650,  -15, Unmarked),
    row("LWE128_688",  Bits128,  688,  -16, Unmarked),
    row("LWE128_710",  Bits128,  710,  -17, Unmarked),
    row("LWE128_750",  Bits128,  750,  -18, Unmarked),
    row("LWE128_800",  Bits128,  800,  -19, Unmarked),
    row("LWE128_830",  Bits128,  830,  -20, Unmarked),
    row("LWE128_1024", Bits128, 1024,  -25, Unmarked),
    row("LWE128_2048", Bits128, 2048,  -52, WarnU32),
    row("LWE128_4096", Bits128, 4096, -105, WarnU64),
    // 80 bits of security
    row("LWE80_256",   Bits80,   256,   -9, Unmarked),
    row("LWE80_512",   Bits80,   512,  -19, Unmarked),
    row("LWE80_630",   Bits80,   630,  -24, Unmarked),
    row("LWE80_650",   Bits80,   650,  -25, Unmarked),
    row("LWE80_688",   Bits80,   688,  -26, Unmarked),
    row("LWE80_710",   Bits80,   710,  -27, Unmarked),
    row("LWE80_750",   Bits80,   750,  -29, Unmarked),
    row("LWE80_800",   Bits80,   800,  -31, Unmarked),
    row("LWE80_830",   Bits80,   830,  -32, WarnU32),
    row("LWE80_1024",  Bits80,  1024,  -40, WarnU32),
    row("LWE80_2048",  Bits80,  2048,  -82, WarnU64),
];
