use bns_basis::{describe_basis, describe_system, serde_io, Basis, DigitSystem};
use bns_core::{BnsError, Resolution, Symmetry};

fn sample_system() -> DigitSystem {
    let resolution = Resolution::new(2, 1).unwrap();
    DigitSystem::new(resolution, Symmetry::Symmetric).unwrap()
}

#[test]
fn system_report_json_roundtrip() {
    let report = describe_system(&sample_system()).unwrap();
    let json = serde_io::system_to_json(&report).unwrap();
    let restored = serde_io::system_from_json(&json).unwrap();
    assert_eq!(report, restored);
    assert_eq!(report.digit_count, 3);
    assert_eq!(report.lattice_len, 8);
    assert_eq!(report.digit_indices, vec![-1, 0, 1]);
    assert_eq!(report.projected_basis_size, 7);
}

#[test]
fn system_report_bytes_roundtrip() {
    let report = describe_system(&sample_system()).unwrap();
    let bytes = serde_io::system_to_bytes(&report).unwrap();
    let restored = serde_io::system_from_bytes(&bytes).unwrap();
    assert_eq!(report, restored);
}

#[test]
fn basis_report_roundtrips_both_encodings() {
    let basis = Basis::build(sample_system());
    let report = describe_basis(&basis).unwrap();
    assert_eq!(report.basis_size, 7);
    assert_eq!(report.functions_per_order, vec![3, 3, 1]);

    let json = serde_io::basis_to_json(&report).unwrap();
    assert_eq!(report, serde_io::basis_from_json(&json).unwrap());

    let bytes = serde_io::basis_to_bytes(&report).unwrap();
    assert_eq!(report, serde_io::basis_from_bytes(&bytes).unwrap());
}

#[test]
fn report_hashes_are_deterministic() {
    let first = describe_system(&sample_system()).unwrap();
    let second = describe_system(&sample_system()).unwrap();
    assert!(!first.system_hash.is_empty());
    assert_eq!(first.system_hash, second.system_hash);

    let basis_a = describe_basis(&Basis::build(sample_system())).unwrap();
    let basis_b = describe_basis(&Basis::build(sample_system())).unwrap();
    assert_eq!(basis_a.basis_hash, basis_b.basis_hash);
    assert_ne!(basis_a.basis_hash, first.system_hash);
}

#[test]
fn variant_changes_the_canonical_hash() {
    let resolution = Resolution::new(2, 1).unwrap();
    let nonsym = DigitSystem::new(resolution, Symmetry::NonSymmetric).unwrap();
    let sym = DigitSystem::new(resolution, Symmetry::Symmetric).unwrap();
    let hash_a = describe_system(&nonsym).unwrap().system_hash;
    let hash_b = describe_system(&sym).unwrap().system_hash;
    assert_ne!(hash_a, hash_b);
}

#[test]
fn malformed_payloads_surface_serde_errors() {
    let err = serde_io::system_from_json("{\"symmetry\":\"Sideways\"}").unwrap_err();
    match err {
        BnsError::Serde(info) => assert_eq!(info.code, "system-deserialize"),
        other => panic!("expected Serde, got {other:?}"),
    }

    let err = serde_io::basis_from_bytes(&[0xFF, 0x00]).unwrap_err();
    match err {
        BnsError::Serde(info) => assert_eq!(info.code, "basis-decode"),
        other => panic!("expected Serde, got {other:?}"),
    }
}

#[test]
fn negative_resolution_payloads_are_rejected() {
    let report = describe_system(&sample_system()).unwrap();
    let json = serde_io::system_to_json(&report).unwrap();
    let tampered = json.replace("\"n_plus\": 2", "\"n_plus\": -2");
    assert_ne!(json, tampered);
    assert!(serde_io::system_from_json(&tampered).is_err());
}
