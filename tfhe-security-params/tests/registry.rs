use tfhe_security_params::prelude::*;
use tfhe_security_params::registry::{CertificationDate, LWE_PARAMETER_TABLE};
use tfhe_security_params::UnknownParameterSetError;

fn registry() -> Registry {
    Registry::certified().unwrap_display()
}

#[test]
fn test_lookup_known_entries() {
    let registry = registry();

    let params = registry.lookup_lwe("LWE128_256").unwrap();
    assert_eq!(params, LweParameters::new(256, -5).unwrap());
    assert_eq!(params.required_coefficient_width(), CoefficientWidth::U32);

    let params = registry.lookup_lwe("LWE128_2048").unwrap();
    assert_eq!(params, LweParameters::new(2048, -52).unwrap());
    assert_eq!(params.required_coefficient_width(), CoefficientWidth::U64);

    let params = registry.lookup_rlwe("RLWE80_256_4").unwrap();
    assert_eq!(params, RlweParameters::new(4, 256, -40).unwrap());
    assert_eq!(params.polynomial_size(), PolynomialSize(4));
    assert_eq!(params.required_coefficient_width(), CoefficientWidth::U64);

    assert_eq!(
        registry.lookup("RLWE80_256_4").unwrap(),
        ParameterSet::Rlwe(params)
    );
    assert_eq!(
        registry.lookup("LWE80_2048").unwrap().required_coefficient_width(),
        CoefficientWidth::U128
    );
}

#[test]
fn test_lookup_is_deterministic() {
    let registry = registry();
    for (name, _, _) in registry.lwe().iter() {
        assert_eq!(registry.lookup(name).unwrap(), registry.lookup(name).unwrap());
    }
    for (name, _, _) in registry.rlwe().iter() {
        assert_eq!(registry.lookup(name).unwrap(), registry.lookup(name).unwrap());
    }

    // Two independently built registries agree
    let other = Registry::certified().unwrap();
    assert_eq!(
        registry.lookup("LWE80_750").unwrap(),
        other.lookup("LWE80_750").unwrap()
    );
}

#[test]
fn test_lookup_unknown_never_falls_back() {
    let registry = registry();
    for name in [
        "",
        "LWE128_257",
        "lwe128_256",
        "LWE128_256 ",
        "LWE96_256",
        "RLWE128_630_1",
        "RLWE128_256",
    ] {
        assert_eq!(
            registry.lookup(name),
            Err(UnknownParameterSetError::new(name))
        );
        assert!(registry.provenance(name).is_err());
        assert!(registry.security_level(name).is_err());
    }

    // The typed tables do not answer for each other
    assert!(registry.lookup_rlwe("LWE128_256").is_err());
    assert!(registry.lookup_lwe("RLWE128_256_1").is_err());
}

#[test]
fn test_all_is_ordered() {
    let registry = registry();

    let dimensions: Vec<_> = registry
        .lwe()
        .all(SecurityLevel::Bits128)
        .map(|(_, params)| params.lwe_dimension().0)
        .collect();
    assert_eq!(
        dimensions,
        [256, 512, 630, 650, 688, 710, 750, 800, 830, 1024, 2048, 4096]
    );

    let rlwe: Vec<_> = registry
        .rlwe()
        .all(SecurityLevel::Bits80)
        .map(|(name, _)| name)
        .collect();
    assert_eq!(
        rlwe,
        [
            "RLWE80_256_1",
            "RLWE80_256_2",
            "RLWE80_256_4",
            "RLWE80_512_1",
            "RLWE80_512_2",
            "RLWE80_1024_1",
            "RLWE80_2048_1",
        ]
    );

    for level in SecurityLevel::ALL {
        for (name, _) in registry.lwe().all(level) {
            assert_eq!(registry.security_level(name).unwrap(), level);
        }
    }
}

#[test]
fn test_all_is_restartable() {
    let registry = registry();
    let sweep = registry.lwe().all(SecurityLevel::Bits80);

    let first: Vec<_> = sweep.clone().collect();
    let second: Vec<_> = sweep.collect();
    assert_eq!(first, second);
    assert_eq!(first.len(), 11);
    assert_eq!(first.first().unwrap().0, "LWE80_256");
    assert_eq!(first.last().unwrap().0, "LWE80_2048");
}

#[test]
fn test_provenance() {
    let registry = registry();
    let provenance = registry.provenance("LWE128_630").unwrap();
    assert_eq!(provenance.to_string(), "LWE estimator, September 15th 2020");
    assert_eq!(provenance.estimator, "LWE estimator");
    assert!(provenance.certified_on >= CertificationDate::new(2020, 1, 1));
    assert_eq!(
        registry.provenance("RLWE128_4096_1").unwrap(),
        registry.provenance("LWE128_630").unwrap()
    );
}

#[test]
fn test_invariants_hold_for_every_entry() {
    let registry = registry();
    for (name, _, params) in registry.lwe().iter() {
        assert!(params.lwe_dimension().0 > 0, "{name}");
        assert!(params.log2_std_dev().0 < 0, "{name}");
        assert!(params.log2_std_dev().magnitude() < params.required_coefficient_width().bits());
    }
    for (name, _, params) in registry.rlwe().iter() {
        assert!(params.dimension().0 > 0, "{name}");
        assert!(params.polynomial_size().0.is_power_of_two(), "{name}");
        assert!(params.log2_std_dev().0 < 0, "{name}");
    }
}

#[test]
fn test_same_values_can_hold_different_levels() {
    // LWE80_650 and LWE128_1024 share their noise exponent but not their level: the level belongs
    // to the entry, not to the values.
    let registry = registry();
    let a = registry.lookup_lwe("LWE80_650").unwrap();
    let b = registry.lookup_lwe("LWE128_1024").unwrap();
    assert_eq!(a.log2_std_dev(), b.log2_std_dev());
    assert_ne!(
        registry.security_level("LWE80_650").unwrap(),
        registry.security_level("LWE128_1024").unwrap()
    );
}

#[test]
fn test_copied_table_with_wrong_annotation_fails() {
    let mut rows = LWE_PARAMETER_TABLE;
    let position = rows
        .iter()
        .position(|row| row.name == "LWE80_800")
        .unwrap();
    rows[position].annotation = tfhe_security_params::WidthAnnotation::WarnU32;

    let err = Registry::from_tables(&rows, &[]).unwrap_err();
    assert_eq!(err.name, "LWE80_800");
}

#[test]
fn test_registry_shared_between_threads() {
    let registry = std::sync::Arc::new(registry());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let registry = registry.clone();
            std::thread::spawn(move || registry.lookup_lwe("LWE128_710").unwrap())
        })
        .collect();
    for handle in handles {
        assert_eq!(
            handle.join().unwrap(),
            LweParameters::new(710, -17).unwrap()
        );
    }
}
