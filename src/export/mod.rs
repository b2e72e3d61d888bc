//! Data export
//!
//! Serializes report output for external collaborators.

pub mod csv;

pub use csv::{export_matrix_csv, export_statement_csv};
