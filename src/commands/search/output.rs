//! Output formatting for search command results.

use crate::output::Outputable;
use crate::queries::search::FieldSearchResult;

impl Outputable for FieldSearchResult {
    fn to_table(&self) -> String {
        let mut lines = Vec::new();

        lines.push(format!("Search: {}", self.query));
        lines.push(String::new());

        if self.query.is_empty() {
            lines.push("Enter a query to search fields.".to_string());
            return lines.join("\n");
        }

        if self.fields.is_empty() {
            lines.push("No fields found.".to_string());
            return lines.join("\n");
        }

        lines.push(format!("Fields ({}):", self.fields.len()));
        for field in &self.fields {
            lines.push(format!("  {} [{} / {}]", field.name, field.domain, field.area));
            let subfields = self.subfields_for(&field.name);
            if subfields.is_empty() {
                lines.push("    (no subfields)".to_string());
            }
            for subfield in subfields {
                lines.push(format!("    - {}", subfield.name));
            }
        }

        lines.join("\n")
    }
}
