use crate::exemption::ExemptionRule;
use serde::Deserialize;
use std::path::PathBuf;

/// Declarative description of a fixture, loadable from any format the config loader reads.
///
/// Every section is optional; absent values leave the builder state untouched.
///
/// ```toml
/// document = "yarn-default.xml"
///
/// [exemptions]
/// code_prefix = ["yarn.timeline-service."]
/// doc_exact = ["yarn.nodemanager.hostname"]
///
/// [collision]
/// filters = ["_PORT"]
///
/// [strictness]
/// error_if_missing_constants = true
/// error_if_missing_document_entry = true
/// ```
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FixtureManifest {
    pub document: Option<String>,
    pub exemptions: ExemptionManifest,
    pub collision: CollisionManifest,
    pub strictness: StrictnessManifest,
}

/// The four exemption sets as plain lists.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ExemptionManifest {
    pub code_exact: Vec<String>,
    pub code_prefix: Vec<String>,
    pub doc_exact: Vec<String>,
    pub doc_prefix: Vec<String>,
}

impl ExemptionManifest {
    /// Flattens the lists into tagged rules.
    pub fn rules(&self) -> impl Iterator<Item = ExemptionRule> + '_ {
        let code_exact = self.code_exact.iter().map(ExemptionRule::code_exact);
        let code_prefix = self.code_prefix.iter().map(ExemptionRule::code_prefix);
        let doc_exact = self.doc_exact.iter().map(ExemptionRule::doc_exact);
        let doc_prefix = self.doc_prefix.iter().map(ExemptionRule::doc_prefix);
        code_exact.chain(code_prefix).chain(doc_exact).chain(doc_prefix)
    }
}

#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CollisionManifest {
    pub filters: Vec<String>,
}

#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StrictnessManifest {
    pub error_if_missing_constants: Option<bool>,
    pub error_if_missing_document_entry: Option<bool>,
}

/// Engine settings: where relative resource paths are resolved.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct VerifierSettings {
    /// Searched in order; the first root containing the document wins.
    pub resource_roots: Vec<PathBuf>,
}

impl Default for VerifierSettings {
    fn default() -> Self {
        Self { resource_roots: vec![PathBuf::from("resources")] }
    }
}
