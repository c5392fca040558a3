use log::info;
use tfhe_security_params::{
    CertifiedParameters, CoefficientWidth, Error, ParameterTable, Registry, SecurityLevel,
};

pub fn audit(registry: &Registry) {
    audit_table(registry.lwe());
    audit_table(registry.rlwe());
    info!("{} parameter sets are consistent", registry.len());
}

fn audit_table<P: CertifiedParameters>(table: &ParameterTable<P>) {
    for level in SecurityLevel::ALL {
        let mut per_width = [0usize; 3];
        for (_, params) in table.all(level) {
            let slot = match params.required_coefficient_width() {
                CoefficientWidth::U32 => 0,
                CoefficientWidth::U64 => 1,
                CoefficientWidth::U128 => 2,
            };
            per_width[slot] += 1;
        }
        info!(
            "{} at {level}: {} on u32, {} on u64, {} on u128",
            P::SCHEME,
            per_width[0],
            per_width[1],
            per_width[2]
        );
    }
}

pub fn list(
    registry: &Registry,
    level: SecurityLevel,
    scheme: Option<&str>,
) -> Result<(), Error> {
    let mut lines = Vec::new();
    if scheme != Some("rlwe") {
        lines.extend(list_table(registry, registry.lwe(), level)?);
    }
    if scheme != Some("lwe") {
        lines.extend(list_table(registry, registry.rlwe(), level)?);
    }
    for line in lines {
        println!("{line}");
    }
    Ok(())
}

fn list_table<P: CertifiedParameters>(
    registry: &Registry,
    table: &ParameterTable<P>,
    level: SecurityLevel,
) -> Result<Vec<String>, Error> {
    table
        .all(level)
        .map(|(name, params)| -> Result<String, Error> {
            let provenance = registry.provenance(name)?;
            Ok(format!(
                "{name:<16} {params} [{}] ({provenance})",
                params.required_coefficient_width()
            ))
        })
        .collect()
}

pub fn export(registry: &Registry, name: &str, output: &str) -> Result<(), Error> {
    let params = registry.lookup(name)?;
    params.save(output)?;
    info!("{name} saved to {output}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_table_carries_provenance() {
        let registry = Registry::certified().unwrap();
        let lines = list_table(&registry, registry.lwe(), SecurityLevel::Bits128).unwrap();
        assert_eq!(lines.len(), registry.lwe().all(SecurityLevel::Bits128).count());
        let provenance = registry.provenance("LWE128_1024").unwrap().to_string();
        assert!(lines
            .iter()
            .any(|line| line.starts_with("LWE128_1024 ") && line.contains(&provenance)));
    }

    #[test]
    fn test_list_table_fails_on_unregistered_name() {
        let certified = Registry::certified().unwrap();
        let lwe_only = Registry::from_tables(
            tfhe_security_params::registry::LWE_PARAMETER_TABLE.as_slice(),
            &[],
        )
        .unwrap();
        assert!(list_table(&lwe_only, certified.rlwe(), SecurityLevel::Bits80).is_err());
    }
}
