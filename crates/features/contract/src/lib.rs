//! # Contract
//!
//! The fixture layer of a configuration-contract check: everything that describes *what*
//! must agree, none of the machinery that checks it.
//!
//! * [`ExemptionRegistry`]: four skip sets (exact and prefix, per side).
//! * [`CollisionFilter`]: substrings selecting constants for default-value collision checks.
//! * [`BindingSource`] and [`constants_class!`]: enumeration of a constants class.
//! * [`FixtureConfig`]: the immutable bundle handed to the engine, built with
//!   [`FixtureConfig::builder`].
//! * [`VerifierBootstrap`]: the initialization entry point implemented by each fixture.

mod bootstrap;
mod collision;
mod error;
pub mod exemptions;
pub mod fixture;
mod source;

pub use crate::bootstrap::VerifierBootstrap;
pub use crate::collision::CollisionFilter;
pub use crate::error::{ContractError, ContractErrorExt};
pub use crate::exemptions::ExemptionRegistry;
pub use crate::fixture::{FixtureConfig, FixtureConfigBuilder};
pub use crate::source::{BindingSource, BindingTable};
pub use confdrift_domain as domain;
