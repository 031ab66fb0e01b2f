use confdrift_contract::ExemptionRegistry;
use confdrift_contract::domain::exemption::ExemptionRule;
use proptest::prelude::*;

fn key() -> impl Strategy<Value = String> {
    "[a-z]{1,6}(\\.[a-z-]{1,8}){0,4}"
}

fn rule() -> impl Strategy<Value = ExemptionRule> {
    (key(), 0..4u8).prop_map(|(pattern, kind)| match kind {
        0 => ExemptionRule::code_exact(pattern),
        1 => ExemptionRule::code_prefix(pattern),
        2 => ExemptionRule::doc_exact(pattern),
        _ => ExemptionRule::doc_prefix(pattern),
    })
}

proptest! {
    #[test]
    fn applying_rules_twice_changes_nothing(
        rules in proptest::collection::vec(rule(), 0..16),
        probes in proptest::collection::vec(key(), 0..16),
    ) {
        let mut once = ExemptionRegistry::new();
        once.extend(rules.clone()).unwrap();

        let mut twice = ExemptionRegistry::new();
        twice.extend(rules.clone()).unwrap();
        twice.extend(rules).unwrap();

        prop_assert_eq!(once.rules(), twice.rules());
        for probe in &probes {
            prop_assert_eq!(once.code_side_exempt(probe), twice.code_side_exempt(probe));
            prop_assert_eq!(once.doc_side_exempt(probe), twice.doc_side_exempt(probe));
        }
    }

    #[test]
    fn prefix_subsumes_exact(candidate in key(), cut in 1usize..8, suffix in "[a-z.]{0,6}") {
        let cut = cut.min(candidate.len());
        let prefix = &candidate[..cut];

        let mut prefix_only = ExemptionRegistry::new();
        prefix_only.add_code_prefix(prefix).unwrap().add_doc_prefix(prefix).unwrap();

        prop_assert!(prefix_only.code_side_exempt(&candidate));
        prop_assert!(prefix_only.doc_side_exempt(&candidate));

        let descendant = format!("{candidate}{suffix}");
        prop_assert!(prefix_only.code_side_exempt(&descendant));

        let mut both = prefix_only.clone();
        both.add_code_exact(candidate.clone()).unwrap();
        prop_assert_eq!(
            both.code_side_exempt(&descendant),
            prefix_only.code_side_exempt(&descendant)
        );
    }
}

#[test]
fn prefix_that_is_a_full_key_matches_itself_and_descendants() {
    let mut registry = ExemptionRegistry::new();
    registry.add_code_prefix("yarn.nodemanager.resource.disk.enabled").unwrap();

    assert!(registry.is_code_prefixed("yarn.nodemanager.resource.disk.enabled"));
    assert!(registry.is_code_prefixed("yarn.nodemanager.resource.disk.enabled.extra"));
    assert!(!registry.is_code_exact("yarn.nodemanager.resource.disk.enabled"));
}

#[test]
fn timeline_prefixes_differ_per_side() {
    let mut registry = ExemptionRegistry::new();
    registry
        .add_code_prefix("yarn.timeline-service.")
        .unwrap()
        .add_doc_prefix("yarn.timeline-service")
        .unwrap();

    assert!(registry.code_side_exempt("yarn.timeline-service.enabled"));
    assert!(!registry.code_side_exempt("yarn.timeline-service"));
    assert!(registry.doc_side_exempt("yarn.timeline-service"));
    assert!(registry.doc_side_exempt("yarn.timeline-service-extra.key"));
}

#[test]
fn rules_are_listed_sorted() {
    let mut registry = ExemptionRegistry::new();
    registry
        .add_doc_exact("yarn.nodemanager.hostname")
        .unwrap()
        .add_code_prefix("yarn.app.container")
        .unwrap()
        .add_code_exact("yarn.resourcemanager.epoch")
        .unwrap();

    let rendered: Vec<String> = registry.rules().iter().map(ToString::to_string).collect();
    assert_eq!(
        rendered,
        [
            "code exact 'yarn.resourcemanager.epoch'",
            "code prefix 'yarn.app.container*'",
            "document exact 'yarn.nodemanager.hostname'",
        ]
    );
    assert_eq!(registry.len(), 3);
}
