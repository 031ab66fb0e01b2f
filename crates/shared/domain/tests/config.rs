use confdrift_domain::config::{FixtureManifest, VerifierSettings};
use confdrift_domain::exemption::{MatchKind, Side};
use serde_json::json;

#[test]
fn settings_default_to_resources_dir() {
    let settings = VerifierSettings::default();
    assert_eq!(settings.resource_roots, vec![std::path::PathBuf::from("resources")]);
}

#[test]
fn manifest_deserializes_partially() {
    let raw = json!({
        "document": "yarn-default.xml",
        "exemptions": { "code_prefix": ["yarn.timeline-service."], "doc_exact": ["yarn.nodemanager.hostname"] },
        "collision": { "filters": ["_PORT"] }
    });

    let manifest: FixtureManifest = serde_json::from_value(raw).expect("manifest deserialize");
    assert_eq!(manifest.document.as_deref(), Some("yarn-default.xml"));
    assert_eq!(manifest.collision.filters, vec!["_PORT".to_owned()]);
    assert!(manifest.strictness.error_if_missing_constants.is_none());

    let rules: Vec<_> = manifest.exemptions.rules().collect();
    assert_eq!(rules.len(), 2);
    assert_eq!((rules[0].side, rules[0].kind), (Side::Code, MatchKind::Prefix));
    assert_eq!((rules[1].side, rules[1].kind), (Side::Document, MatchKind::Exact));
}
