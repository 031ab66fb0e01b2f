//! Facade crate for the `confdrift` verifier and its shipped fixtures.
//! Re-exports the domain, kernel, contract and engine crates.
//! Keep this crate thin: it should compose other crates, not implement verification logic.
//!
//! ## Usage
//! - Add `confdrift` with the desired feature flags (`yarn` is on by default).
//! - Import [`prelude`] in a test and call [`Verifier::verify_fixture`] with a bootstrap.

pub use confdrift_contract as contract;
pub use confdrift_domain as domain;
pub use confdrift_engine as engine;
pub use confdrift_kernel as kernel;
pub use confdrift_logger as logger;

pub use confdrift_engine::{Verdict, Verifier, Violation};

/// Everything a fixture test usually needs.
pub mod prelude {
    pub use confdrift_contract::{
        BindingSource, BindingTable, CollisionFilter, ContractError, ExemptionRegistry,
        FixtureConfig, VerifierBootstrap,
    };
    pub use confdrift_domain::binding::{ConstValue, ConstantBinding};
    pub use confdrift_domain::exemption::{ExemptionRule, MatchKind, Side};
    pub use confdrift_engine::{EngineError, Verdict, Verifier, Violation};
    pub use confdrift_kernel::resources::ResourceLocator;
    pub use confdrift_logger::{LevelFilter, Logger};
}

/// Fixture registry for runtime introspection.
pub mod fixtures {
    #[cfg(feature = "yarn")]
    pub use confdrift_yarn as yarn;

    /// Build-time enabled fixtures (by Cargo feature).
    pub const ENABLED: &[&str] = &[
        #[cfg(feature = "yarn")]
        "yarn",
    ];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

/// Verifies every fixture enabled at build time with its default verifier.
///
/// # Errors
/// Returns the first bootstrap failure, or [`engine::EngineError::Drift`] for the first
/// fixture whose verdict fails.
pub fn verify_enabled() -> Result<Vec<Verdict>, engine::EngineError> {
    let mut verdicts = Vec::new();

    // YARN
    #[cfg(feature = "yarn")]
    {
        let verdict =
            fixtures::yarn::verifier().verify_fixture::<fixtures::yarn::YarnConfigurationFields>()?;
        verdict.ensure()?;
        verdicts.push(verdict);
    }

    Ok(verdicts)
}
