//! Settings file loading and its effect on statement analysis.

use std::path::{Path, PathBuf};

use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;
use tax_cli::commands::AnalysisView;
use tax_cli::config::Settings;
use tax_core::Regime;
use tax_data::{Analysis, RawTransaction};

fn settings_fixture() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("test-data")
        .join("settings.toml")
}

fn debit(
    amount: &str,
    category: &str,
) -> RawTransaction {
    RawTransaction {
        description: Some(category.to_string()),
        amount: Some(amount.to_string()),
        kind: Some("Debit".to_string()),
        category: Some(category.to_string()),
    }
}

#[test]
fn test_fixture_overrides_every_section() {
    let settings = Settings::load(&settings_fixture()).expect("Failed to load settings");

    assert_eq!(settings.profile.age, 62);
    assert_eq!(settings.profile.regime, Regime::Old);
    assert_eq!(settings.logging.level, "info,tax_data=debug");
    assert_eq!(
        settings.logging.file,
        Some(PathBuf::from("tax-estimator.log"))
    );
}

#[test]
fn test_custom_patterns_widen_categorisation() {
    let settings = Settings::load(&settings_fixture()).expect("Failed to load settings");
    let records = vec![
        debit("40000", "ELSS"),
        debit("9000", "Mediclaim"),
        debit("2000", "Dining"),
    ];

    let custom = Analysis::from_records(records.clone(), &settings.category_rules().expect("rules"));
    let standard = Analysis::from_records(records, &Settings::default().category_rules().expect("rules"));

    assert_eq!(custom.totals.investments_80c, dec!(40000));
    assert_eq!(custom.totals.medical_80d, dec!(9000));
    assert_eq!(standard.totals.investments_80c, dec!(0));
    // "Mediclaim" already matches "medic"
    assert_eq!(standard.totals.medical_80d, dec!(9000));
}

#[test]
fn test_analysis_view_uses_settings_profile() {
    let settings = Settings::load(&settings_fixture()).expect("Failed to load settings");
    let analysis = Analysis::from_records(
        vec![RawTransaction {
            description: Some("Pension".to_string()),
            amount: Some("7,00,000".to_string()),
            kind: Some("Credit".to_string()),
            category: Some("Pension".to_string()),
        }],
        &settings.category_rules().expect("rules"),
    );

    let rendered = AnalysisView {
        analysis: &analysis,
        age: settings.profile.age,
        regime: settings.profile.regime,
    }
    .to_string();

    // Senior, old regime: taxable 6,50,000 over a 3,00,000 exemption
    // -> 10000 + 30000, plus cess
    assert!(rendered.contains("Old Regime tax      ₹41,600"));
    assert!(rendered.contains("80C: Invest ₹1,50,000.00 more"));
}
