//! Named, row-aligned column storage
//!
//! The hosting framework binds input data as columns; plots look columns up
//! by name at recompute time. Numeric columns carry the plotted values,
//! text columns carry per-row labels for tooltips.

/// A table of named columns
///
/// Columns are independently sized; consistency between the columns a plot
/// binds is checked by the plot, not the table.
#[derive(Debug, Clone, Default)]
pub struct Table {
    numeric: Vec<(String, Vec<f64>)>,
    text: Vec<(String, Vec<String>)>,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style numeric column insertion
    pub fn with_column<S: Into<String>>(mut self, name: S, values: Vec<f64>) -> Self {
        self.set_column(name, values);
        self
    }

    /// Insert or replace a numeric column
    pub fn set_column<S: Into<String>>(&mut self, name: S, values: Vec<f64>) {
        let name = name.into();
        if let Some(slot) = self.numeric.iter_mut().find(|(n, _)| *n == name) {
            slot.1 = values;
        } else {
            self.numeric.push((name, values));
        }
    }

    /// Insert or replace a text column
    pub fn set_text_column<S: Into<String>>(&mut self, name: S, values: Vec<String>) {
        let name = name.into();
        if let Some(slot) = self.text.iter_mut().find(|(n, _)| *n == name) {
            slot.1 = values;
        } else {
            self.text.push((name, values));
        }
    }

    pub fn column(&self, name: &str) -> Option<&[f64]> {
        self.numeric
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_slice())
    }

    pub fn text_column(&self, name: &str) -> Option<&[String]> {
        self.text
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_slice())
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column(name).is_some()
    }
}
