use crate::error::ContractError;
use crate::fixture::FixtureConfig;

/// The single initialization entry point of a fixture.
///
/// Implementors describe their contract declaratively: which document, which constants
/// classes, which exemptions and filters, which strictness. The engine calls
/// [`VerifierBootstrap::initialize`] once per run and consumes the result.
///
/// ```rust
/// use confdrift_contract::{BindingTable, ContractError, FixtureConfig, VerifierBootstrap};
///
/// struct DemoFields;
///
/// impl VerifierBootstrap for DemoFields {
///     fn initialize() -> Result<FixtureConfig, ContractError> {
///         FixtureConfig::builder()
///             .document("demo-default.xml")
///             .class(BindingTable::new("Demo").with("DEMO_ENABLED", "demo.enabled"))
///             .strict()
///             .build()
///     }
/// }
///
/// let fixture = DemoFields::initialize().unwrap();
/// assert_eq!(fixture.defaults_document_path(), "demo-default.xml");
/// ```
pub trait VerifierBootstrap {
    /// Produces a fresh fixture.
    ///
    /// # Errors
    /// Any [`ContractError`] is a bootstrap failure and aborts the run.
    fn initialize() -> Result<FixtureConfig, ContractError>;
}
