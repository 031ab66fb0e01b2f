//! # YARN
//!
//! The YARN configuration contract: the [`YarnConfiguration`] constants class, the shipped
//! `resources/yarn-default.xml`, and the [`YarnConfigurationFields`] fixture that keeps them
//! in sync.
//!
//! ```rust
//! use confdrift_yarn::YarnConfigurationFields;
//!
//! let verdict = confdrift_yarn::verifier().verify_fixture::<YarnConfigurationFields>().unwrap();
//! verdict.assert_pass();
//! ```

mod configuration;
mod fields;

pub use crate::configuration::YarnConfiguration;
pub use crate::fields::{DEFAULTS_DOCUMENT, YarnConfigurationFields};

use confdrift_engine::Verifier;
use confdrift_kernel::resources::ResourceLocator;

/// Directory holding this crate's defaults documents.
pub const RESOURCE_ROOT: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/resources");

/// A verifier that resolves documents from [`RESOURCE_ROOT`].
#[must_use]
pub fn verifier() -> Verifier {
    tracing::debug!(root = RESOURCE_ROOT, "Using bundled YARN resources");
    Verifier::new(ResourceLocator::new([RESOURCE_ROOT]))
}
