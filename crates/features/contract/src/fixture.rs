//! # Fixture Configuration
//!
//! [`FixtureConfig`] is the immutable bundle a verification run consumes: the defaults
//! document to read, the constants classes to enumerate, the exemption registry, the
//! collision filter and the two strictness flags.
//!
//! It is assembled with a typestate builder. The document path and at least one constants
//! class are enforced at compile time; the remaining invariants are checked by
//! [`FixtureConfigBuilder::build`].
//!
//! ```rust
//! use confdrift_contract::{BindingTable, FixtureConfig};
//! use confdrift_contract::domain::exemption::ExemptionRule;
//!
//! let fixture = FixtureConfig::builder()
//!     .document("yarn-default.xml")
//!     .class(BindingTable::new("Demo").with("A", "a.enabled"))
//!     .exempt(ExemptionRule::doc_prefix("hadoop.registry"))
//!     .collision_filter("_PORT")
//!     .strict()
//!     .build()
//!     .unwrap();
//!
//! assert!(fixture.exemptions().doc_side_exempt("hadoop.registry.rm.enabled"));
//! assert!(fixture.error_if_missing_constants());
//! ```

use crate::collision::CollisionFilter;
use crate::error::ContractError;
use crate::exemptions::ExemptionRegistry;
use crate::source::BindingSource;
use confdrift_domain::config::FixtureManifest;
use confdrift_domain::exemption::ExemptionRule;
use private::Sealed;
use std::sync::Arc;
use tracing::debug;

/// Everything one verification run needs. Built once, never mutated.
#[derive(Debug, Clone)]
pub struct FixtureConfig {
    document: String,
    classes: Vec<Arc<dyn BindingSource>>,
    exemptions: ExemptionRegistry,
    collision: CollisionFilter,
    error_if_missing_constants: bool,
    error_if_missing_document_entry: bool,
}

impl FixtureConfig {
    #[must_use = "The builder must be configured before it can produce a fixture."]
    pub fn builder() -> FixtureConfigBuilder {
        FixtureConfigBuilder { document: NoDocument, classes: NoClasses, parts: Parts::default() }
    }

    /// Resource path of the defaults document, relative to the resource roots.
    #[must_use]
    pub fn defaults_document_path(&self) -> &str {
        &self.document
    }

    #[must_use]
    pub fn constants_classes(&self) -> &[Arc<dyn BindingSource>] {
        &self.classes
    }

    #[must_use]
    pub const fn exemptions(&self) -> &ExemptionRegistry {
        &self.exemptions
    }

    #[must_use]
    pub const fn collision(&self) -> &CollisionFilter {
        &self.collision
    }

    /// A document entry with no matching constant fails the run.
    #[must_use]
    pub const fn error_if_missing_constants(&self) -> bool {
        self.error_if_missing_constants
    }

    /// A constant with no matching document entry fails the run.
    #[must_use]
    pub const fn error_if_missing_document_entry(&self) -> bool {
        self.error_if_missing_document_entry
    }
}

#[derive(Debug)]
pub struct NoDocument;
#[derive(Debug)]
pub struct WithDocument(String);
#[derive(Debug)]
pub struct NoClasses;
#[derive(Debug)]
pub struct WithClasses(Vec<Arc<dyn BindingSource>>);

mod private {
    pub trait Sealed {}
}
impl Sealed for NoDocument {}
impl Sealed for WithDocument {}
impl Sealed for NoClasses {}
impl Sealed for WithClasses {}

/// Builder state that does not change the type.
#[derive(Debug, Default)]
struct Parts {
    rules: Vec<ExemptionRule>,
    filters: Vec<String>,
    error_if_missing_constants: Option<bool>,
    error_if_missing_document_entry: Option<bool>,
}

/// Typestate builder for [`FixtureConfig`].
#[derive(Debug)]
pub struct FixtureConfigBuilder<D: Sealed = NoDocument, C: Sealed = NoClasses> {
    document: D,
    classes: C,
    parts: Parts,
}

impl<C: Sealed> FixtureConfigBuilder<NoDocument, C> {
    /// Sets the defaults document, as a path relative to the resource roots.
    pub fn document(self, path: impl Into<String>) -> FixtureConfigBuilder<WithDocument, C> {
        FixtureConfigBuilder {
            document: WithDocument(path.into()),
            classes: self.classes,
            parts: self.parts,
        }
    }
}

impl<D: Sealed> FixtureConfigBuilder<D, NoClasses> {
    /// Adds the first constants class.
    pub fn class(
        self,
        source: impl BindingSource + 'static,
    ) -> FixtureConfigBuilder<D, WithClasses> {
        self.shared_class(Arc::new(source))
    }

    /// Adds the first constants class from a shared handle.
    pub fn shared_class(
        self,
        source: Arc<dyn BindingSource>,
    ) -> FixtureConfigBuilder<D, WithClasses> {
        FixtureConfigBuilder {
            document: self.document,
            classes: WithClasses(vec![source]),
            parts: self.parts,
        }
    }
}

impl<D: Sealed> FixtureConfigBuilder<D, WithClasses> {
    /// Adds another constants class.
    #[must_use = "The builder must be configured before it can produce a fixture."]
    pub fn class(self, source: impl BindingSource + 'static) -> Self {
        self.shared_class(Arc::new(source))
    }

    #[must_use = "The builder must be configured before it can produce a fixture."]
    pub fn shared_class(mut self, source: Arc<dyn BindingSource>) -> Self {
        self.classes.0.push(source);
        self
    }
}

impl<D: Sealed, C: Sealed> FixtureConfigBuilder<D, C> {
    /// Queues an exemption; validated by `build`.
    #[must_use = "The builder must be configured before it can produce a fixture."]
    pub fn exempt(mut self, rule: ExemptionRule) -> Self {
        self.parts.rules.push(rule);
        self
    }

    /// Copies every rule of a prebuilt registry.
    #[must_use = "The builder must be configured before it can produce a fixture."]
    pub fn exemptions(mut self, registry: &ExemptionRegistry) -> Self {
        self.parts.rules.extend(registry.rules());
        self
    }

    /// Queues a collision filter substring; validated by `build`.
    #[must_use = "The builder must be configured before it can produce a fixture."]
    pub fn collision_filter(mut self, substring: impl Into<String>) -> Self {
        self.parts.filters.push(substring.into());
        self
    }

    #[must_use = "The builder must be configured before it can produce a fixture."]
    pub const fn error_if_missing_constants(mut self, enabled: bool) -> Self {
        self.parts.error_if_missing_constants = Some(enabled);
        self
    }

    #[must_use = "The builder must be configured before it can produce a fixture."]
    pub const fn error_if_missing_document_entry(mut self, enabled: bool) -> Self {
        self.parts.error_if_missing_document_entry = Some(enabled);
        self
    }

    /// Makes drift in both directions fatal.
    #[must_use = "The builder must be configured before it can produce a fixture."]
    pub const fn strict(self) -> Self {
        self.error_if_missing_constants(true).error_if_missing_document_entry(true)
    }
}

impl<C: Sealed> FixtureConfigBuilder<WithDocument, C> {
    /// Applies a declarative manifest on top of the current state.
    ///
    /// A manifest document path replaces the one already set; exemptions and filters are
    /// appended; strictness flags present in the manifest override the builder's.
    #[must_use = "The builder must be configured before it can produce a fixture."]
    pub fn manifest(mut self, manifest: &FixtureManifest) -> Self {
        if let Some(document) = &manifest.document {
            self.document = WithDocument(document.clone());
        }
        self.parts.rules.extend(manifest.exemptions.rules());
        self.parts.filters.extend(manifest.collision.filters.iter().cloned());
        if let Some(enabled) = manifest.strictness.error_if_missing_constants {
            self.parts.error_if_missing_constants = Some(enabled);
        }
        if let Some(enabled) = manifest.strictness.error_if_missing_document_entry {
            self.parts.error_if_missing_document_entry = Some(enabled);
        }
        self
    }
}

impl FixtureConfigBuilder<WithDocument, WithClasses> {
    /// Validates the configuration and freezes it.
    ///
    /// # Errors
    /// * [`ContractError::InvalidFixture`] for a blank document path, an empty class list, or
    ///   a strictness flag that was never set.
    /// * [`ContractError::InvalidExemption`] / [`ContractError::InvalidFilter`] for the first
    ///   queued rule or filter that is empty.
    pub fn build(self) -> Result<FixtureConfig, ContractError> {
        let Self { document: WithDocument(document), classes: WithClasses(classes), parts } = self;

        if document.trim().is_empty() {
            return Err(ContractError::InvalidFixture {
                message: "Defaults document path cannot be empty".into(),
                context: None,
            });
        }
        if classes.is_empty() {
            return Err(ContractError::InvalidFixture {
                message: "At least one constants class is required".into(),
                context: Some(document.into()),
            });
        }
        let (Some(error_if_missing_constants), Some(error_if_missing_document_entry)) =
            (parts.error_if_missing_constants, parts.error_if_missing_document_entry)
        else {
            return Err(ContractError::InvalidFixture {
                message: "Both strictness flags must be set explicitly".into(),
                context: Some(
                    "Call `error_if_missing_constants`, `error_if_missing_document_entry` or `strict`"
                        .into(),
                ),
            });
        };

        let mut exemptions = ExemptionRegistry::new();
        exemptions.extend(parts.rules)?;

        let mut collision = CollisionFilter::new();
        for filter in parts.filters {
            collision.add_filter(filter)?;
        }

        debug!(
            document = %document,
            classes = classes.len(),
            exemptions = exemptions.len(),
            filters = collision.filters().len(),
            error_if_missing_constants,
            error_if_missing_document_entry,
            "Fixture configured"
        );

        Ok(FixtureConfig {
            document,
            classes,
            exemptions,
            collision,
            error_if_missing_constants,
            error_if_missing_document_entry,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::BindingTable;

    fn table() -> BindingTable {
        BindingTable::new("Demo").with("A", "a.enabled")
    }

    #[test]
    fn unset_strictness_is_rejected() {
        let err = FixtureConfig::builder()
            .document("yarn-default.xml")
            .class(table())
            .error_if_missing_constants(true)
            .build()
            .unwrap_err();
        assert!(matches!(err, ContractError::InvalidFixture { .. }));
    }

    #[test]
    fn blank_document_is_rejected() {
        let err =
            FixtureConfig::builder().document("  ").class(table()).strict().build().unwrap_err();
        assert!(matches!(err, ContractError::InvalidFixture { .. }));
    }

    #[test]
    fn queued_rules_are_validated_on_build() {
        let err = FixtureConfig::builder()
            .document("yarn-default.xml")
            .class(table())
            .exempt(ExemptionRule::code_prefix(""))
            .strict()
            .build()
            .unwrap_err();
        assert!(matches!(err, ContractError::InvalidExemption { .. }));

        let err = FixtureConfig::builder()
            .document("yarn-default.xml")
            .class(table())
            .collision_filter("")
            .strict()
            .build()
            .unwrap_err();
        assert!(matches!(err, ContractError::InvalidFilter { .. }));
    }

    #[test]
    fn prebuilt_registry_is_copied() {
        let mut registry = ExemptionRegistry::new();
        registry.add_code_prefix("yarn.timeline-service.").unwrap();
        registry.add_doc_exact("yarn.nodemanager.hostname").unwrap();

        let fixture = FixtureConfig::builder()
            .document("yarn-default.xml")
            .class(table())
            .exemptions(&registry)
            .exempt(ExemptionRule::doc_prefix("hadoop.registry"))
            .strict()
            .build()
            .unwrap();

        let exemptions = fixture.exemptions();
        assert_eq!(exemptions.len(), 3);
        assert!(exemptions.code_side_exempt("yarn.timeline-service.ttl-ms"));
        assert!(exemptions.doc_side_exempt("yarn.nodemanager.hostname"));
        assert!(exemptions.doc_side_exempt("hadoop.registry.rm.enabled"));
    }

    #[test]
    fn classes_accumulate_in_order() {
        let fixture = FixtureConfig::builder()
            .class(table())
            .class(BindingTable::new("Other"))
            .document("yarn-default.xml")
            .error_if_missing_constants(false)
            .error_if_missing_document_entry(true)
            .build()
            .unwrap();

        let names: Vec<_> = fixture.constants_classes().iter().map(|c| c.class_name()).collect();
        assert_eq!(names, ["Demo", "Other"]);
        assert!(!fixture.error_if_missing_constants());
        assert!(fixture.error_if_missing_document_entry());
    }
}
