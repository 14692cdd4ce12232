//! Output formatting for import command results.

use crate::output::Outputable;
use crate::queries::import::ImportResult;

impl Outputable for ImportResult {
    fn to_table(&self) -> String {
        let mut output = String::new();

        if !self.created_relations.is_empty() {
            output.push_str(&format!("Created {} relations.\n\n", self.created_relations.len()));
        }

        output.push_str("Import Summary:\n");
        if self.sections.is_empty() {
            output.push_str("  Nothing to import.\n");
        }
        for section in &self.sections {
            output.push_str(&format!("  {}: {}\n", section.section, section.count));
        }
        output.push_str(&format!("  Total: {}\n", self.total()));

        output
    }
}
