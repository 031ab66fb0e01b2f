//! # Engine
//!
//! Compares the keys a fixture's constants classes declare with the keys its defaults
//! document lists, and checks filtered constants for shared default values.
//!
//! ```rust,no_run
//! use confdrift_engine::Verifier;
//! # use confdrift_engine::contract::{
//! #     BindingTable, ContractError, FixtureConfig, VerifierBootstrap,
//! # };
//! # struct DemoFields;
//! # impl VerifierBootstrap for DemoFields {
//! #     fn initialize() -> Result<FixtureConfig, ContractError> {
//! #         FixtureConfig::builder()
//! #             .document("demo-default.xml")
//! #             .class(BindingTable::new("Demo").with("DEMO_ENABLED", "demo.enabled"))
//! #             .strict()
//! #             .build()
//! #     }
//! # }
//!
//! let verdict = Verifier::default().verify_fixture::<DemoFields>().unwrap();
//! verdict.assert_pass();
//! ```
//!
//! Every run logs through `tracing`: per-key exemption decisions at `debug`, non-fatal drift
//! at `warn`, run boundaries at `info`.

pub mod document;
mod error;
pub mod verdict;
mod verifier;

pub use crate::document::DefaultsDocument;
pub use crate::error::{EngineError, EngineErrorExt};
pub use crate::verdict::{Verdict, VerdictStats, Violation};
pub use crate::verifier::{Verifier, compare};
pub use confdrift_contract as contract;
