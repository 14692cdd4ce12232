//! Output formatting for list command results.

use crate::output::{render_columns, Outputable};
use crate::queries::listing::Listing;

impl Outputable for Listing {
    fn to_table(&self) -> String {
        let mut lines = Vec::new();

        let mut header = format!("{} ({} of {})", self.entity.name(), self.rows.len(), self.total);
        if !self.search.is_empty() {
            header.push_str(&format!(" matching '{}'", self.search));
        }
        lines.push(header);
        lines.push(String::new());

        if self.rows.is_empty() {
            lines.push("No records found.".to_string());
            return lines.join("\n");
        }

        let cells: Vec<Vec<String>> = self.rows.iter().map(|row| row.cells.clone()).collect();
        lines.extend(render_columns(&self.columns, &cells));

        lines.join("\n")
    }
}
