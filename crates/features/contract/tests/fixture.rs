use confdrift_contract::domain::config::FixtureManifest;
use confdrift_contract::{BindingSource, ContractError, FixtureConfig, VerifierBootstrap};
use confdrift_kernel::config::load_config;
use std::fs;
use tempfile::tempdir;

confdrift_contract::constants_class! {
    pub struct DemoConfiguration {
        pub const DEMO_PREFIX: &'static str = "demo.";
        pub const DEMO_ENABLED: &'static str = "demo.enabled";
        pub const DEMO_PORT: &'static str = "demo.port";
        pub const DEFAULT_DEMO_PORT: u16 = 9000;
        pub const DEMO_SITE_FILE: &'static str = "demo-site.xml";
        #[deprecated]
        pub const DEMO_LEGACY: &'static str = "demo.legacy";
    }
}

struct DemoFields;

impl VerifierBootstrap for DemoFields {
    fn initialize() -> Result<FixtureConfig, ContractError> {
        FixtureConfig::builder()
            .document("demo-default.xml")
            .class(DemoConfiguration)
            .collision_filter("_PORT")
            .strict()
            .build()
    }
}

#[test]
fn constants_class_lists_every_binding() {
    let bindings = DemoConfiguration.bindings().unwrap();
    let names: Vec<_> = bindings.iter().map(|b| b.name()).collect();
    assert_eq!(
        names,
        [
            "DEMO_PREFIX",
            "DEMO_ENABLED",
            "DEMO_PORT",
            "DEFAULT_DEMO_PORT",
            "DEMO_SITE_FILE",
            "DEMO_LEGACY"
        ]
    );

    let keys: Vec<_> = bindings.iter().filter_map(|b| b.key()).collect();
    assert_eq!(keys, ["demo.enabled", "demo.port", "demo.legacy"]);
    assert_eq!(DemoConfiguration.class_name(), "DemoConfiguration");
}

#[test]
fn bootstrap_produces_a_fresh_fixture() {
    let first = DemoFields::initialize().unwrap();
    let second = DemoFields::initialize().unwrap();

    assert_eq!(first.defaults_document_path(), second.defaults_document_path());
    assert!(first.collision().matches("DEFAULT_DEMO_PORT"));
    assert!(first.exemptions().is_empty());
    assert_eq!(first.constants_classes().len(), 1);
}

#[test]
fn manifest_extends_the_builder() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("demo.toml");
    fs::write(
        &path,
        r#"
document = "demo-overridden.xml"

[exemptions]
code_exact = ["demo.legacy"]
doc_prefix = ["hadoop.registry"]

[collision]
filters = ["_PORT", "_ADDRESS"]

[strictness]
error_if_missing_constants = false
"#,
    )?;
    let manifest: FixtureManifest = load_config(Some(&path))?;

    let fixture = FixtureConfig::builder()
        .document("demo-default.xml")
        .class(DemoConfiguration)
        .collision_filter("_PORT")
        .strict()
        .manifest(&manifest)
        .build()?;

    assert_eq!(fixture.defaults_document_path(), "demo-overridden.xml");
    assert!(fixture.exemptions().is_code_exact("demo.legacy"));
    assert!(fixture.exemptions().is_doc_prefixed("hadoop.registry.zk.quorum"));
    assert_eq!(fixture.collision().filters(), ["_PORT", "_ADDRESS"]);
    assert!(!fixture.error_if_missing_constants());
    assert!(fixture.error_if_missing_document_entry());
    Ok(())
}

#[test]
fn manifest_cannot_smuggle_an_empty_prefix() {
    let manifest = FixtureManifest {
        exemptions: confdrift_contract::domain::config::ExemptionManifest {
            code_prefix: vec![String::new()],
            ..Default::default()
        },
        ..Default::default()
    };

    let err = FixtureConfig::builder()
        .document("demo-default.xml")
        .class(DemoConfiguration)
        .strict()
        .manifest(&manifest)
        .build()
        .unwrap_err();
    assert!(matches!(err, ContractError::InvalidExemption { .. }));
}
