//! Input data binding
//!
//! Plots consume row-aligned columns from a [`Table`] supplied by the host.

pub mod table;

pub use table::Table;
