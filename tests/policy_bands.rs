use advisor_core::policy::{CreditBand, PolicyConfig, PolicyConfigError, PolicyTable};
use advisor_core::types::PolicyRangeError;

fn band(min_cgpa: f64, max_cgpa: f64, max_credits: u32) -> CreditBand {
    CreditBand {
        min_cgpa,
        max_cgpa,
        max_credits,
    }
}

fn standard_table() -> PolicyTable {
    PolicyTable::new(PolicyConfig {
        credit_limits: vec![band(0.0, 2.0, 12), band(2.0, 3.0, 15), band(3.0, 4.0, 18)],
        retake_failed_priority: false,
    })
    .unwrap()
}

#[test]
fn band_lookup_covers_the_full_domain() {
    let table = standard_table();

    assert_eq!(table.credit_cap_for(0.0).unwrap(), 12);
    assert_eq!(table.credit_cap_for(1.5).unwrap(), 12);
    // A shared boundary belongs to the higher band
    assert_eq!(table.credit_cap_for(2.0).unwrap(), 15);
    assert_eq!(table.credit_cap_for(2.999).unwrap(), 15);
    assert_eq!(table.credit_cap_for(3.0).unwrap(), 18);
    // The domain's upper endpoint stays valid
    assert_eq!(table.credit_cap_for(4.0).unwrap(), 18);
}

#[test]
fn band_lookup_rejects_out_of_domain_gpa() {
    let table = standard_table();

    assert_eq!(
        table.credit_cap_for(4.1),
        Err(PolicyRangeError { gpa: 4.1 })
    );
    assert_eq!(
        table.credit_cap_for(-0.001),
        Err(PolicyRangeError { gpa: -0.001 })
    );
    // NaN compares false against every band
    assert!(table.credit_cap_for(f64::NAN).is_err());
}

#[test]
fn retake_flag_is_a_pure_accessor() {
    assert!(!standard_table().retake_priority_enabled());

    let enabled = PolicyTable::new(PolicyConfig {
        credit_limits: vec![band(0.0, 4.0, 15)],
        retake_failed_priority: true,
    })
    .unwrap();
    assert!(enabled.retake_priority_enabled());
}

#[test]
fn config_retake_flag_defaults_off() {
    // Older policy files omit the key entirely
    let config: PolicyConfig = serde_json::from_str(
        r#"{
            "credit_limits": [
                {"min_cgpa": 0.0, "max_cgpa": 4.0, "max_credits": 18}
            ]
        }"#,
    )
    .unwrap();

    let table = PolicyTable::new(config).unwrap();
    assert!(!table.retake_priority_enabled());
    assert_eq!(table.credit_cap_for(3.2).unwrap(), 18);
}

#[test]
fn validation_rejects_empty_table() {
    let result = PolicyTable::new(PolicyConfig {
        credit_limits: Vec::new(),
        retake_failed_priority: false,
    });
    assert!(matches!(result, Err(PolicyConfigError::Empty)));
}

#[test]
fn validation_rejects_inverted_band() {
    let result = PolicyTable::new(PolicyConfig {
        credit_limits: vec![band(0.0, 2.0, 12), band(3.0, 2.5, 15)],
        retake_failed_priority: false,
    });
    assert!(matches!(
        result,
        Err(PolicyConfigError::InvertedBand { index: 1, .. })
    ));
}

#[test]
fn validation_rejects_gap_between_bands() {
    let result = PolicyTable::new(PolicyConfig {
        credit_limits: vec![band(0.0, 2.0, 12), band(2.5, 4.0, 15)],
        retake_failed_priority: false,
    });
    assert!(matches!(
        result,
        Err(PolicyConfigError::NotContiguous { index: 1, .. })
    ));
}

#[test]
fn validation_rejects_overlapping_bands() {
    let result = PolicyTable::new(PolicyConfig {
        credit_limits: vec![band(0.0, 2.5, 12), band(2.0, 4.0, 15)],
        retake_failed_priority: false,
    });
    assert!(matches!(
        result,
        Err(PolicyConfigError::NotContiguous { index: 1, .. })
    ));
}

#[test]
fn invariant_same_config_same_version() {
    let table1 = standard_table();
    let table2 = standard_table();

    assert_eq!(table1.version(), table2.version());
    assert!(table1.version().as_str().starts_with("sha256:"));
}

#[test]
fn invariant_version_tracks_config_changes() {
    let table = standard_table();

    let raised = PolicyTable::new(PolicyConfig {
        credit_limits: vec![band(0.0, 2.0, 12), band(2.0, 3.0, 15), band(3.0, 4.0, 21)],
        retake_failed_priority: false,
    })
    .unwrap();
    assert_ne!(table.version(), raised.version());

    let flagged = PolicyTable::new(PolicyConfig {
        credit_limits: vec![band(0.0, 2.0, 12), band(2.0, 3.0, 15), band(3.0, 4.0, 18)],
        retake_failed_priority: true,
    })
    .unwrap();
    assert_ne!(table.version(), flagged.version());
}

#[test]
fn bands_accessor_preserves_configured_order() {
    let table = standard_table();
    let caps: Vec<u32> = table.bands().iter().map(|b| b.max_credits).collect();
    assert_eq!(caps, vec![12, 15, 18]);
}
