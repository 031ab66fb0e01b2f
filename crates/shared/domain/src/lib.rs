//! # Domain Models
//!
//! Pure data types shared by the fixture layer and the comparison engine, with a single
//! dependency (`serde`). Keep it lean: no I/O and no comparison logic, just data and simple
//! helpers.

pub mod binding;
pub mod config;
pub mod constants;
pub mod document;
pub mod exemption;
