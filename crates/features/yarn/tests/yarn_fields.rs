use confdrift_engine::{EngineError, Verifier};
use confdrift_kernel::resources::ResourceLocator;
use confdrift_logger::{LevelFilter, Logger};
use confdrift_yarn::{DEFAULTS_DOCUMENT, RESOURCE_ROOT, YarnConfigurationFields};
use std::fs;
use std::path::Path;
use tempfile::{TempDir, tempdir};

fn init_logging() {
    let _ = Logger::builder()
        .name("yarn-fields")
        .test_writer(true)
        .level(LevelFilter::DEBUG)
        .init();
}

fn shipped_document() -> String {
    fs::read_to_string(Path::new(RESOURCE_ROOT).join(DEFAULTS_DOCUMENT)).unwrap()
}

/// Writes an edited copy of the shipped document and returns a verifier reading it.
fn edited(edit: impl FnOnce(String) -> String) -> (TempDir, Verifier) {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join(DEFAULTS_DOCUMENT), edit(shipped_document())).unwrap();
    let verifier = Verifier::new(ResourceLocator::new([dir.path()]));
    (dir, verifier)
}

#[test]
fn shipped_defaults_match_the_constants() {
    init_logging();
    let verdict = confdrift_yarn::verifier().verify_fixture::<YarnConfigurationFields>().unwrap();

    verdict.assert_pass();
    assert!(verdict.violations().is_empty(), "{}", verdict.report());
    assert!(verdict.stats().code_keys > 80);
    assert!(verdict.stats().exempted_code_keys > 0);
    assert!(verdict.stats().exempted_document_keys > 0);
    assert!(verdict.stats().collision_candidates > 20);
}

#[test]
fn removed_document_entry_is_reported() {
    init_logging();
    let (_dir, verifier) = edited(|xml| {
        xml.replace(
            "<name>yarn.resourcemanager.am.max-attempts</name>",
            "<name>yarn.renamed</name>",
        )
    });

    let verdict = verifier.verify_fixture::<YarnConfigurationFields>().unwrap();
    assert_eq!(
        verdict.missing_document_entries().collect::<Vec<_>>(),
        ["yarn.resourcemanager.am.max-attempts"]
    );
    assert_eq!(verdict.missing_constants().collect::<Vec<_>>(), ["yarn.renamed"]);

    let err = verdict.ensure().unwrap_err();
    assert!(matches!(err, EngineError::Drift { .. }));
    let rendered = err.to_string();
    assert!(rendered.contains("RM_AM_MAX_ATTEMPTS"));
    assert!(rendered.contains("yarn.renamed"));
}

#[test]
fn exempted_namespaces_tolerate_new_entries() {
    init_logging();
    let (_dir, verifier) = edited(|xml| {
        xml.replace(
            "</configuration>",
            "  <property><name>hadoop.registry.secure</name><value>false</value></property>\n\
             <property><name>yarn.timeline-service.version</name><value>1.0f</value></property>\n\
             </configuration>",
        )
    });

    verifier.verify_fixture::<YarnConfigurationFields>().unwrap().assert_pass();
}

#[test]
fn missing_shipped_document_is_a_bootstrap_error() {
    init_logging();
    let dir = tempdir().unwrap();
    let verifier = Verifier::new(ResourceLocator::new([dir.path()]));

    let err = verifier.verify_fixture::<YarnConfigurationFields>().unwrap_err();
    assert!(matches!(err, EngineError::Bootstrap { .. }));
}
