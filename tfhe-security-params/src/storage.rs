//! Persistence of single parameter sets.
//!
//! A file holds the type name of the stored parameter set followed by its values, both encoded
//! with `bincode`. Loading goes through the same checks as construction, so a file can never
//! produce a parameter set violating its invariants. Each read is bounded by
//! [`SERIALIZATION_LIMIT`], so a corrupted length prefix is an error and not an allocation.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use bincode::Options;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::StorageError;
use crate::lwe::LweParameters;
use crate::registry::ParameterSet;
use crate::rlwe::RlweParameters;

/// Types with a stable name, written in front of their serialized values.
pub trait Named {
    const NAME: &'static str;
}

impl Named for LweParameters {
    const NAME: &'static str = "tfhe_security_params::LweParameters";
}

impl Named for RlweParameters {
    const NAME: &'static str = "tfhe_security_params::RlweParameters";
}

/// The largest number of bytes read or written for the type name or for the values.
pub const SERIALIZATION_LIMIT: u64 = 1 << 10;

fn bincode_options() -> impl Options {
    // Same layout as `bincode::serialize`, with a bound
    bincode::DefaultOptions::new()
        .with_fixint_encoding()
        .allow_trailing_bytes()
        .with_limit(SERIALIZATION_LIMIT)
}

/// Write `params` to the file at `path`, replacing it if it exists.
pub fn save<P, Q>(params: &P, path: Q) -> Result<(), StorageError>
where
    P: Named + Serialize,
    Q: AsRef<Path>,
{
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);
    bincode_options().serialize_into(&mut writer, P::NAME)?;
    bincode_options().serialize_into(&mut writer, params)?;
    writer.flush()?;
    log::debug!("saved {} to {}", P::NAME, path.display());
    Ok(())
}

/// Read a parameter set of type `P` from the file at `path`.
pub fn load<P, Q>(path: Q) -> Result<P, StorageError>
where
    P: Named + DeserializeOwned,
    Q: AsRef<Path>,
{
    let path = path.as_ref();
    let mut reader = BufReader::new(File::open(path)?);
    let name: String = bincode_options().deserialize_from(&mut reader)?;
    if name != P::NAME {
        return Err(StorageError::TypeMismatch {
            expected: P::NAME,
            found: name,
        });
    }
    let params = bincode_options().deserialize_from(&mut reader)?;
    log::debug!("loaded {} from {}", P::NAME, path.display());
    Ok(params)
}

impl LweParameters {
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), StorageError> {
        save(self, path)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        load(path)
    }
}

impl RlweParameters {
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), StorageError> {
        save(self, path)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        load(path)
    }
}

impl ParameterSet {
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), StorageError> {
        match self {
            Self::Lwe(params) => params.save(path),
            Self::Rlwe(params) => params.save(path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();

        let lwe = LweParameters::new(830, -20).unwrap();
        let lwe_path = dir.path().join("lwe.bin");
        lwe.save(&lwe_path).unwrap();
        assert_eq!(LweParameters::load(&lwe_path).unwrap(), lwe);

        let rlwe = RlweParameters::new(2, 256, -11).unwrap();
        let rlwe_path = dir.path().join("rlwe.bin");
        ParameterSet::Rlwe(rlwe).save(&rlwe_path).unwrap();
        assert_eq!(RlweParameters::load(&rlwe_path).unwrap(), rlwe);
    }

    #[test]
    fn test_load_checks_type() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lwe.bin");
        LweParameters::new(256, -5).unwrap().save(&path).unwrap();

        match RlweParameters::load(&path) {
            Err(StorageError::TypeMismatch { expected, found }) => {
                assert_eq!(expected, RlweParameters::NAME);
                assert_eq!(found, LweParameters::NAME);
            }
            other => panic!("unexpected result {other:?}"),
        }
    }

    #[test]
    fn test_load_rejects_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("forged.bin");
        {
            let mut writer = BufWriter::new(File::create(&path).unwrap());
            bincode::serialize_into(&mut writer, LweParameters::NAME).unwrap();
            bincode::serialize_into(&mut writer, &(256usize, 0i32)).unwrap();
            writer.flush().unwrap();
        }

        assert!(matches!(
            LweParameters::load(&path),
            Err(StorageError::Serialization(_))
        ));
    }

    #[test]
    fn test_load_rejects_oversized_length_prefix() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("corrupted.bin");
        std::fs::write(&path, (1u64 << 62).to_le_bytes()).unwrap();

        match LweParameters::load(&path) {
            Err(StorageError::Serialization(err)) => {
                assert!(matches!(*err, bincode::ErrorKind::SizeLimit));
            }
            other => panic!("unexpected result {other:?}"),
        }
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            LweParameters::load(dir.path().join("missing.bin")),
            Err(StorageError::Io(_))
        ));
    }
}
