//! Output formatting for show command results.

use super::execute::ShowResult;
use crate::output::Outputable;

fn cell(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Null => "-".to_string(),
        other => other.to_string(),
    }
}

impl Outputable for ShowResult {
    fn to_table(&self) -> String {
        let mut lines = Vec::new();

        lines.push(format!("{} {}", self.entity.name(), self.key));
        if let Some(display) = self.record.get("display").and_then(|d| d.as_str()) {
            lines.push(format!("  {}", display));
        }
        lines.push(String::new());

        if let Some(fields) = self.record.as_object() {
            let width = fields.keys().map(|k| k.len()).max().unwrap_or(0);
            for (name, value) in fields.iter().filter(|(name, _)| name.as_str() != "display") {
                lines.push(format!("  {:<width$}  {}", name, cell(value), width = width));
            }
        }

        lines.join("\n")
    }
}
