//! Kernel utilities shared by the engine and the fixtures.
//! Keep this crate lightweight: configuration loading and resource lookup only.
//!
//! ## Config loading
//! ```rust,no_run
//! use confdrift_kernel::config::load_config;
//! use confdrift_kernel::domain::config::FixtureManifest;
//!
//! let manifest: FixtureManifest = load_config(Some("confdrift")).unwrap_or_default();
//! ```
//!
//! ## Resource lookup
//! ```rust
//! use confdrift_kernel::resources::ResourceLocator;
//!
//! let locator = ResourceLocator::new(["resources", "src/test/resources"]);
//! assert_eq!(locator.roots().len(), 2);
//! ```

pub mod config;
pub mod resources;

pub use confdrift_domain as domain;
