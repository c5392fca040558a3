//! The registry of certified parameter sets.
//!
//! The registry holds two independent tables, one for LWE and one for RLWE parameter sets. Each
//! entry is addressed by a symbolic name encoding its security level and dimension, plus the
//! polynomial size for RLWE entries:
//!  * `LWE128_630` is the LWE parameter set of dimension 630 providing 128 bits of security;
//!  * `RLWE80_256_4` is the RLWE parameter set of dimension 256 and polynomial size 4 providing
//!    80 bits of security.
//!
//! The tables are built from literal rows, copied from the output of the LWE estimator. Building
//! them checks every row and fails with a [`RegistryConsistencyError`] if one of them is
//! inconsistent, e.g. when its width annotation does not match the width required by its noise.

use std::collections::HashMap;
use std::fmt::{Debug, Display, Formatter};

use crate::commons::parameters::{CoefficientWidth, LweDimension, SecurityLevel};
use crate::error::{
    ConsistencyViolation, ParameterError, RegistryConsistencyError, UnknownParameterSetError,
};
use crate::lwe::LweParameters;
use crate::rlwe::RlweParameters;

mod lwe_table;
mod rlwe_table;

pub use lwe_table::LWE_PARAMETER_TABLE;
pub use rlwe_table::RLWE_PARAMETER_TABLE;

/// The coefficient width a table row is annotated with.
///
/// The estimator output marks the entries whose noise does not fit a given integer type: a row
/// marked `WarnU32` cannot be used with 32-bit coefficients, a row marked `WarnU64` cannot be
/// used with 64-bit coefficients.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum WidthAnnotation {
    Unmarked,
    WarnU32,
    WarnU64,
}

impl WidthAnnotation {
    /// Return the coefficient width this annotation stands for.
    pub const fn implied_width(&self) -> CoefficientWidth {
        match self {
            Self::Unmarked => CoefficientWidth::U32,
            Self::WarnU32 => CoefficientWidth::U64,
            Self::WarnU64 => CoefficientWidth::U128,
        }
    }
}

impl Display for WidthAnnotation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unmarked => write!(f, "no warning"),
            Self::WarnU32 => write!(f, "'warning u32'"),
            Self::WarnU64 => write!(f, "'warning u64'"),
        }
    }
}

/// The day an estimator run certified a table entry.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CertificationDate {
    pub year: u16,
    pub month: u8,
    pub day: u8,
}

impl CertificationDate {
    pub const fn new(year: u16, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Whether the month and the day exist in the Gregorian calendar.
    pub const fn is_valid(&self) -> bool {
        let leap = (self.year % 4 == 0 && self.year % 100 != 0) || self.year % 400 == 0;
        let days_in_month = match self.month {
            1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
            4 | 6 | 9 | 11 => 30,
            2 if leap => 29,
            2 => 28,
            _ => return false,
        };
        self.day >= 1 && self.day <= days_in_month
    }
}

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

impl Display for CertificationDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let suffix = match (self.day % 10, self.day % 100) {
            (_, 11..=13) => "th",
            (1, _) => "st",
            (2, _) => "nd",
            (3, _) => "rd",
            _ => "th",
        };
        match MONTHS.get((self.month as usize).wrapping_sub(1)) {
            Some(month) if self.is_valid() => {
                write!(f, "{month} {}{suffix} {}", self.day, self.year)
            }
            _ => write!(f, "{}-{:02}-{:02}", self.year, self.month, self.day),
        }
    }
}

/// The estimator run that certified a table entry.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Provenance {
    pub estimator: &'static str,
    pub certified_on: CertificationDate,
}

impl Display for Provenance {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}", self.estimator, self.certified_on)
    }
}

/// The run of the LWE estimator all the shipped entries come from.
pub const LWE_ESTIMATOR_2020_09_15: Provenance = Provenance {
    estimator: "LWE estimator",
    certified_on: CertificationDate::new(2020, 9, 15),
};

/// One literal row of a parameter table, as copied from the estimator output.
#[derive(Copy, Clone, Debug)]
pub struct TableRow<P: CertifiedParameters> {
    pub name: &'static str,
    pub security_level: SecurityLevel,
    pub values: P::Literal,
    pub annotation: WidthAnnotation,
    pub provenance: Provenance,
}

/// Parameter types that can be stored in a [`ParameterTable`].
pub trait CertifiedParameters:
    Copy + PartialEq + Debug + Display + Send + Sync + 'static
{
    /// Short name of the scheme, used as the prefix of entry names.
    const SCHEME: &'static str;

    /// The raw numeric values of a table row.
    type Literal: Copy + Debug;

    fn from_literal(values: Self::Literal) -> Result<Self, ParameterError>;

    /// The name an entry holding these values must have at the given security level.
    fn canonical_name(&self, security_level: SecurityLevel) -> String;

    /// The key entries are sorted by: dimension first, then polynomial size.
    fn table_order(&self) -> (usize, usize);

    fn dimension(&self) -> LweDimension;

    fn required_coefficient_width(&self) -> CoefficientWidth;
}

impl CertifiedParameters for LweParameters {
    const SCHEME: &'static str = "LWE";

    /// `(dimension, log2_std_dev)`
    type Literal = (usize, i32);

    fn from_literal((dimension, log2_std_dev): Self::Literal) -> Result<Self, ParameterError> {
        Self::new(dimension, log2_std_dev)
    }

    fn canonical_name(&self, security_level: SecurityLevel) -> String {
        format!(
            "{}{}_{}",
            Self::SCHEME,
            security_level.bits(),
            self.lwe_dimension().0
        )
    }

    fn table_order(&self) -> (usize, usize) {
        (self.lwe_dimension().0, 1)
    }

    fn dimension(&self) -> LweDimension {
        self.lwe_dimension()
    }

    fn required_coefficient_width(&self) -> CoefficientWidth {
        Self::required_coefficient_width(self)
    }
}

impl CertifiedParameters for RlweParameters {
    const SCHEME: &'static str = "RLWE";

    /// `(polynomial_size, dimension, log2_std_dev)`
    type Literal = (usize, usize, i32);

    fn from_literal(
        (polynomial_size, dimension, log2_std_dev): Self::Literal,
    ) -> Result<Self, ParameterError> {
        Self::new(polynomial_size, dimension, log2_std_dev)
    }

    fn canonical_name(&self, security_level: SecurityLevel) -> String {
        format!(
            "{}{}_{}_{}",
            Self::SCHEME,
            security_level.bits(),
            Self::dimension(self).0,
            self.polynomial_size().0
        )
    }

    fn table_order(&self) -> (usize, usize) {
        (Self::dimension(self).0, self.polynomial_size().0)
    }

    fn dimension(&self) -> LweDimension {
        Self::dimension(self)
    }

    fn required_coefficient_width(&self) -> CoefficientWidth {
        Self::required_coefficient_width(self)
    }
}

#[derive(Copy, Clone, Debug)]
struct Entry<P> {
    name: &'static str,
    security_level: SecurityLevel,
    params: P,
    provenance: Provenance,
}

/// An immutable table of named parameter sets of one scheme.
#[derive(Clone, Debug)]
pub struct ParameterTable<P: CertifiedParameters> {
    // Sorted by `CertifiedParameters::table_order`
    entries: Vec<Entry<P>>,
    index: HashMap<&'static str, usize>,
}

impl<P: CertifiedParameters> ParameterTable<P> {
    /// Build a table from literal rows, checking each of them.
    pub fn from_rows(rows: &[TableRow<P>]) -> Result<Self, RegistryConsistencyError> {
        let mut entries = Vec::with_capacity(rows.len());
        for row in rows {
            let params = check_row(row).map_err(|violation| {
                let err = RegistryConsistencyError::new(row.name, violation);
                log::error!("{err}");
                err
            })?;
            entries.push(Entry {
                name: row.name,
                security_level: row.security_level,
                params,
                provenance: row.provenance,
            });
        }

        // Stable, so rows sharing an order key keep their literal order
        entries.sort_by_key(|entry| entry.params.table_order());

        let mut index = HashMap::with_capacity(entries.len());
        for (position, entry) in entries.iter().enumerate() {
            if index.insert(entry.name, position).is_some() {
                let err =
                    RegistryConsistencyError::new(entry.name, ConsistencyViolation::DuplicateName);
                log::error!("{err}");
                return Err(err);
            }
        }

        let table = Self { entries, index };
        for level in SecurityLevel::ALL {
            log::debug!(
                "{} table: {} entries at {level}",
                P::SCHEME,
                table.all(level).count()
            );
        }
        Ok(table)
    }

    fn entry(&self, name: &str) -> Result<&Entry<P>, UnknownParameterSetError> {
        log::trace!("looking up {} parameter set '{name}'", P::SCHEME);
        self.index
            .get(name)
            .map(|&position| &self.entries[position])
            .ok_or_else(|| UnknownParameterSetError::new(name))
    }

    /// Return the parameter set registered under `name`.
    pub fn lookup(&self, name: &str) -> Result<P, UnknownParameterSetError> {
        self.entry(name).map(|entry| entry.params)
    }

    /// Return the estimator run that certified the entry registered under `name`.
    pub fn provenance(&self, name: &str) -> Result<Provenance, UnknownParameterSetError> {
        self.entry(name).map(|entry| entry.provenance)
    }

    /// Return the security level of the entry registered under `name`.
    pub fn security_level(&self, name: &str) -> Result<SecurityLevel, UnknownParameterSetError> {
        self.entry(name).map(|entry| entry.security_level)
    }

    /// Iterate over the entries at the given security level, by increasing dimension and then by
    /// increasing polynomial size.
    ///
    /// The iterator is lazy and can be cloned to restart the sweep.
    pub fn all(
        &self,
        security_level: SecurityLevel,
    ) -> impl Iterator<Item = (&'static str, P)> + Clone + '_ {
        self.entries
            .iter()
            .filter(move |entry| entry.security_level == security_level)
            .map(|entry| (entry.name, entry.params))
    }

    /// Iterate over every entry, whatever its security level, in table order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, SecurityLevel, P)> + Clone + '_ {
        self.entries
            .iter()
            .map(|entry| (entry.name, entry.security_level, entry.params))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn check_row<P: CertifiedParameters>(row: &TableRow<P>) -> Result<P, ConsistencyViolation> {
    let params = P::from_literal(row.values)?;

    let expected = params.canonical_name(row.security_level);
    if row.name != expected {
        return Err(ConsistencyViolation::NameMismatch { expected });
    }

    let dimension = params.dimension();
    if !dimension.is_approved() {
        return Err(ConsistencyViolation::UnapprovedDimension(dimension.0));
    }

    let derived = params.required_coefficient_width();
    if row.annotation.implied_width() != derived {
        return Err(ConsistencyViolation::WidthAnnotationMismatch {
            declared: row.annotation,
            derived,
        });
    }

    let certified_on = row.provenance.certified_on;
    if !certified_on.is_valid() {
        return Err(ConsistencyViolation::InvalidCertificationDate(certified_on));
    }

    Ok(params)
}

/// A parameter set of either scheme, as returned by [`Registry::lookup`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ParameterSet {
    Lwe(LweParameters),
    Rlwe(RlweParameters),
}

impl ParameterSet {
    pub fn dimension(&self) -> LweDimension {
        match self {
            Self::Lwe(params) => params.lwe_dimension(),
            Self::Rlwe(params) => params.dimension(),
        }
    }

    pub fn required_coefficient_width(&self) -> CoefficientWidth {
        match self {
            Self::Lwe(params) => params.required_coefficient_width(),
            Self::Rlwe(params) => params.required_coefficient_width(),
        }
    }

    pub fn as_lwe(&self) -> Option<&LweParameters> {
        match self {
            Self::Lwe(params) => Some(params),
            Self::Rlwe(_) => None,
        }
    }

    pub fn as_rlwe(&self) -> Option<&RlweParameters> {
        match self {
            Self::Lwe(_) => None,
            Self::Rlwe(params) => Some(params),
        }
    }
}

impl Display for ParameterSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lwe(params) => write!(f, "{params}"),
            Self::Rlwe(params) => write!(f, "{params}"),
        }
    }
}

impl From<LweParameters> for ParameterSet {
    fn from(value: LweParameters) -> Self {
        Self::Lwe(value)
    }
}

impl From<RlweParameters> for ParameterSet {
    fn from(value: RlweParameters) -> Self {
        Self::Rlwe(value)
    }
}

/// The authoritative collection of certified parameter sets.
///
/// The registry is meant to be built once at startup and then shared by reference: it is never
/// modified after construction, so concurrent readers need no synchronization.
///
/// ```rust
/// use tfhe_security_params::{Registry, UnwrapResultExt};
///
/// let registry = Registry::certified().unwrap_display();
/// let params = registry.lookup("RLWE80_256_4").unwrap();
/// assert_eq!(params.dimension().0, 256);
/// assert_eq!(
///     registry.provenance("RLWE80_256_4").unwrap().to_string(),
///     "LWE estimator, September 15th 2020"
/// );
/// ```
#[derive(Clone, Debug)]
pub struct Registry {
    lwe: ParameterTable<LweParameters>,
    rlwe: ParameterTable<RlweParameters>,
}

impl Registry {
    /// Build the registry holding the parameter sets shipped with this crate.
    pub fn certified() -> Result<Self, RegistryConsistencyError> {
        Self::from_tables(&LWE_PARAMETER_TABLE, &RLWE_PARAMETER_TABLE)
    }

    /// Build a registry from caller supplied literal tables, with the same checks as
    /// [`Registry::certified`].
    pub fn from_tables(
        lwe_rows: &[TableRow<LweParameters>],
        rlwe_rows: &[TableRow<RlweParameters>],
    ) -> Result<Self, RegistryConsistencyError> {
        let registry = Self {
            lwe: ParameterTable::from_rows(lwe_rows)?,
            rlwe: ParameterTable::from_rows(rlwe_rows)?,
        };
        log::debug!(
            "registry ready: {} LWE and {} RLWE parameter sets",
            registry.lwe.len(),
            registry.rlwe.len()
        );
        Ok(registry)
    }

    pub fn lwe(&self) -> &ParameterTable<LweParameters> {
        &self.lwe
    }

    pub fn rlwe(&self) -> &ParameterTable<RlweParameters> {
        &self.rlwe
    }

    /// Return the parameter set registered under `name`, in either table.
    pub fn lookup(&self, name: &str) -> Result<ParameterSet, UnknownParameterSetError> {
        if self.rlwe.contains(name) {
            self.rlwe.lookup(name).map(ParameterSet::Rlwe)
        } else {
            self.lwe.lookup(name).map(ParameterSet::Lwe)
        }
    }

    pub fn lookup_lwe(&self, name: &str) -> Result<LweParameters, UnknownParameterSetError> {
        self.lwe.lookup(name)
    }

    pub fn lookup_rlwe(&self, name: &str) -> Result<RlweParameters, UnknownParameterSetError> {
        self.rlwe.lookup(name)
    }

    /// Return the estimator run that certified the entry registered under `name`.
    pub fn provenance(&self, name: &str) -> Result<Provenance, UnknownParameterSetError> {
        if self.rlwe.contains(name) {
            self.rlwe.provenance(name)
        } else {
            self.lwe.provenance(name)
        }
    }

    /// Return the security level of the entry registered under `name`.
    ///
    /// The security level is a property of the registry entry, not of the numeric values: two
    /// different parameter sets can both target 128 bits of security.
    pub fn security_level(&self, name: &str) -> Result<SecurityLevel, UnknownParameterSetError> {
        if self.rlwe.contains(name) {
            self.rlwe.security_level(name)
        } else {
            self.lwe.security_level(name)
        }
    }

    pub fn len(&self) -> usize {
        self.lwe.len() + self.rlwe.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lwe.is_empty() && self.rlwe.is_empty()
    }
}
