use crate::document::DefaultsDocument;
use crate::error::{EngineError, EngineErrorExt};
use crate::verdict::{Verdict, VerdictStats, Violation};
use confdrift_contract::{FixtureConfig, VerifierBootstrap};
use confdrift_domain::binding::{ConstValue, ConstantBinding};
use confdrift_domain::config::VerifierSettings;
use confdrift_kernel::resources::ResourceLocator;
use std::collections::{BTreeMap, BTreeSet};
use tracing::{debug, info, warn};

/// Runs fixtures against their defaults documents.
///
/// The verifier only knows where documents live; everything else comes from the
/// [`FixtureConfig`].
#[derive(Debug, Clone)]
pub struct Verifier {
    locator: ResourceLocator,
}

impl Default for Verifier {
    fn default() -> Self {
        Self::from_settings(&VerifierSettings::default())
    }
}

impl Verifier {
    #[must_use]
    pub const fn new(locator: ResourceLocator) -> Self {
        Self { locator }
    }

    #[must_use]
    pub fn from_settings(settings: &VerifierSettings) -> Self {
        Self::new(ResourceLocator::new(settings.resource_roots.iter().cloned()))
    }

    #[must_use]
    pub const fn locator(&self) -> &ResourceLocator {
        &self.locator
    }

    /// Initializes fixture `B` and verifies it.
    ///
    /// # Errors
    /// Returns [`EngineError::Contract`] when the fixture cannot be initialized, otherwise
    /// whatever [`Verifier::verify`] returns.
    pub fn verify_fixture<B: VerifierBootstrap>(&self) -> Result<Verdict, EngineError> {
        let fixture = B::initialize().context("Fixture initialization")?;
        self.verify(&fixture)
    }

    /// Locates and parses the fixture's defaults document, then compares it with the
    /// fixture's constants classes.
    ///
    /// A verdict is returned even when it fails; call [`Verdict::ensure`] or
    /// [`Verdict::assert_pass`] to act on it.
    ///
    /// # Errors
    /// * [`EngineError::Bootstrap`] when the document is not found under any root.
    /// * [`EngineError::Io`], [`EngineError::Xml`] or [`EngineError::MalformedDocument`]
    ///   when it cannot be read.
    /// * [`EngineError::Contract`] when a constants class cannot enumerate its bindings.
    pub fn verify(&self, fixture: &FixtureConfig) -> Result<Verdict, EngineError> {
        let resource = fixture.defaults_document_path();
        info!(
            document = resource,
            classes = fixture.constants_classes().len(),
            "Verifying configuration contract"
        );

        let path = self.locator.locate(resource)?;
        let document = DefaultsDocument::open(&path)?;
        let verdict = compare(fixture, &document)?;

        info!(
            document = resource,
            violations = verdict.violations().len(),
            pass = verdict.is_pass(),
            "Verification finished"
        );
        Ok(verdict)
    }
}

/// Compares a fixture with an already parsed document.
///
/// # Errors
/// Returns [`EngineError::Contract`] when a constants class cannot enumerate its bindings.
pub fn compare(
    fixture: &FixtureConfig,
    document: &DefaultsDocument,
) -> Result<Verdict, EngineError> {
    let bindings = collect_bindings(fixture)?;
    let exemptions = fixture.exemptions();
    let mut stats = VerdictStats {
        bindings: bindings.len(),
        document_keys: document.len(),
        ..VerdictStats::default()
    };

    // key -> first symbol naming it
    let mut code_keys: BTreeMap<&str, &str> = BTreeMap::new();
    for binding in &bindings {
        if let Some(key) = binding.key() {
            code_keys.entry(key).or_insert_with(|| binding.name());
        }
    }
    stats.code_keys = code_keys.len();

    let mut violations = Vec::new();

    for (&key, &symbol) in &code_keys {
        if document.contains(key) {
            continue;
        }
        if exemptions.code_side_exempt(key) {
            debug!(key, symbol, "Code-side key exempted");
            stats.exempted_code_keys += 1;
            continue;
        }
        violations.push(Violation::MissingDocumentEntry {
            symbol: symbol.to_owned(),
            key: key.to_owned(),
        });
    }

    let document_keys: BTreeSet<&str> = document.keys().collect();
    for key in document_keys {
        if code_keys.contains_key(key) {
            continue;
        }
        if exemptions.doc_side_exempt(key) {
            debug!(key, "Document-side key exempted");
            stats.exempted_document_keys += 1;
            continue;
        }
        violations.push(Violation::MissingConstant { key: key.to_owned() });
    }

    let (collisions, candidates) = find_collisions(fixture, &bindings);
    stats.collision_candidates = candidates;
    violations.extend(collisions);

    let verdict = Verdict::new(
        fixture.defaults_document_path(),
        violations,
        fixture.error_if_missing_constants(),
        fixture.error_if_missing_document_entry(),
        stats,
    );

    for violation in verdict.non_fatal() {
        warn!(kind = violation.kind(), "{violation}");
    }

    Ok(verdict)
}

fn collect_bindings(fixture: &FixtureConfig) -> Result<Vec<ConstantBinding>, EngineError> {
    let mut bindings = Vec::new();
    for class in fixture.constants_classes() {
        let declared =
            class.bindings().context(format!("Enumerating bindings of {}", class.class_name()))?;
        debug!(class = class.class_name(), bindings = declared.len(), "Enumerated constants class");
        bindings.extend(declared);
    }
    Ok(bindings)
}

/// Groups the filtered bindings of all classes by rendered value, so `8080` and `"8080"`
/// land together. Every group with at least two distinct symbols is a collision.
fn find_collisions(
    fixture: &FixtureConfig,
    bindings: &[ConstantBinding],
) -> (Vec<Violation>, usize) {
    let filter = fixture.collision();
    if filter.is_empty() {
        return (Vec::new(), 0);
    }

    // rendered value -> (first declared value, symbols)
    let mut by_value: BTreeMap<String, (&ConstValue, BTreeSet<&str>)> = BTreeMap::new();
    let mut candidates = 0;
    for binding in bindings.iter().filter(|binding| filter.matches(binding.name())) {
        candidates += 1;
        by_value
            .entry(binding.value().to_string())
            .or_insert_with(|| (binding.value(), BTreeSet::new()))
            .1
            .insert(binding.name());
    }

    let collisions = by_value
        .into_values()
        .filter(|(_, symbols)| symbols.len() > 1)
        .map(|(value, symbols)| Violation::DefaultValueCollision {
            value: value.clone(),
            symbols: symbols.into_iter().map(str::to_owned).collect(),
        })
        .collect();

    (collisions, candidates)
}
