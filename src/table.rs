use std::fs;
use std::path::Path;

use crate::config::{Display, TableFormat};
use crate::errors::RuntimeError;
use crate::structure::Structure;

/// Renders a [`Structure`] as text.
pub struct Table<'a> {
    structure: &'a Structure,
    pub format: TableFormat,
    pub display: Display,
}

impl<'a> Table<'a> {
    pub fn new(structure: &'a Structure, format: TableFormat, display: Display) -> Self {
        Table {
            structure,
            format,
            display,
        }
    }

    pub fn render(&self) -> String {
        match self.format {
            TableFormat::Csv => self.csv(),
            TableFormat::Markdown => self.markdown(),
        }
    }

    pub fn csv(&self) -> String {
        if self.structure.propositions.is_empty() {
            return String::new();
        }
        let mut lines = vec![self.structure.propositions.join(",")];
        lines.extend(self.rows().map(|values| values.join(",")));
        lines.join("\n") + "\n"
    }

    pub fn markdown(&self) -> String {
        let header = &self.structure.propositions;
        if header.is_empty() {
            return String::new();
        }
        let mut lines = vec![
            format!("| {} |", header.join(" | ")),
            format!("|{}", " --- |".repeat(header.len())),
        ];
        lines.extend(self.rows().map(|values| format!("| {} |", values.join(" | "))));
        lines.join("\n") + "\n"
    }

    /// Writes the rendered table to `path`.
    pub fn create(&self, path: &Path) -> Result<(), RuntimeError> {
        debug!("Writing {:?} table to {}", self.format, path.display());
        fs::write(path, self.render())?;
        Ok(())
    }

    fn rows(&self) -> impl Iterator<Item = Vec<String>> + '_ {
        (0..self.structure.rows).map(move |row| {
            self.structure
                .row(row)
                .unwrap_or_default()
                .iter()
                .map(|cell| self.format_value(cell.value))
                .collect()
        })
    }

    fn format_value(&self, value: bool) -> String {
        match (self.display, value) {
            (Display::Boolean, value) => value.to_string(),
            (Display::Number, true) => "1".to_string(),
            (Display::Number, false) => "0".to_string(),
        }
    }
}
