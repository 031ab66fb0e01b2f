use confdrift::fixtures;
use confdrift::prelude::*;

#[test]
fn default_build_ships_the_yarn_fixture() {
    assert!(fixtures::is_enabled("yarn"));
    assert!(!fixtures::is_enabled("hdfs"));
}

#[test]
fn enabled_fixtures_verify_clean() {
    let verdicts = confdrift::verify_enabled().unwrap();
    assert_eq!(verdicts.len(), fixtures::ENABLED.len());
    assert!(verdicts.iter().all(Verdict::is_pass));
}

#[test]
fn prelude_covers_an_ad_hoc_fixture() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("demo-default.xml"),
        "<configuration><property><name>demo.enabled</name><value>true</value></property></configuration>",
    )
    .unwrap();

    let config = FixtureConfig::builder()
        .document("demo-default.xml")
        .class(BindingTable::new("Demo").with("DEMO_ENABLED", "demo.enabled"))
        .exempt(ExemptionRule::doc_prefix("hadoop.registry"))
        .strict()
        .build()
        .unwrap();

    let verdict = Verifier::new(ResourceLocator::new([dir.path()])).verify(&config).unwrap();
    verdict.assert_pass();
}
