//! Ecosystem mapping directory service.
//!
//! Maps startup/MSME records between inconsistent spreadsheet schemas and a
//! canonical record shape, and exposes the record store over the documented
//! HTTP contract. The [`schema`] module carries the normalization and alias
//! tables every path shares; [`directory`] builds the record workflows and
//! router on top of an explicit record-store seam.

pub mod config;
pub mod directory;
pub mod error;
pub mod schema;
pub mod telemetry;
