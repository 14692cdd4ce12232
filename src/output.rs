//! Output formatting for command results.
//!
//! Supports multiple output formats: table (human-readable), JSON, and toon.

use clap::ValueEnum;
use serde::Serialize;

/// Output format for command results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// Token-efficient toon format
    Toon,
}

/// Trait for types that can be formatted for output
pub trait Outputable: Serialize {
    /// Format as a human-readable table
    fn to_table(&self) -> String;

    /// Format according to the specified output format
    fn format(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Table => self.to_table(),
            OutputFormat::Json => serde_json::to_string_pretty(self).unwrap_or_default(),
            OutputFormat::Toon => {
                let json_value = serde_json::to_value(self).unwrap_or_default();
                toon::encode(&json_value, None)
            }
        }
    }
}

/// Render rows as left-aligned columns padded to the widest cell.
pub fn render_columns(headers: &[&str], rows: &[Vec<String>]) -> Vec<String> {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (idx, cell) in row.iter().enumerate() {
            if let Some(width) = widths.get_mut(idx) {
                *width = (*width).max(cell.chars().count());
            }
        }
    }

    let render = |cells: Vec<&str>| {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{:<width$}", cell, width = width))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(render(headers.to_vec()));
    lines.push(widths.iter().map(|w| "-".repeat(*w)).collect::<Vec<_>>().join("  "));
    for row in rows {
        lines.push(render(row.iter().map(String::as_str).collect()));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[derive(Serialize)]
    struct Greeting {
        name: String,
        count: usize,
    }

    impl Outputable for Greeting {
        fn to_table(&self) -> String {
            format!("Hello {} ({})", self.name, self.count)
        }
    }

    fn greeting() -> Greeting {
        Greeting {
            name: "Ada".to_string(),
            count: 2,
        }
    }

    #[rstest]
    fn test_table_format() {
        assert_eq!(greeting().format(OutputFormat::Table), "Hello Ada (2)");
    }

    #[rstest]
    fn test_json_format() {
        let output = greeting().format(OutputFormat::Json);
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["name"], "Ada");
        assert_eq!(parsed["count"], 2);
    }

    #[rstest]
    fn test_toon_format() {
        let output = greeting().format(OutputFormat::Toon);
        assert!(output.contains("name: Ada"));
        assert!(output.contains("count: 2"));
    }

    #[rstest]
    fn test_render_columns_pads_cells() {
        let rows = vec![
            vec!["Biology".to_string(), "2".to_string()],
            vec!["CS".to_string(), "10".to_string()],
        ];
        let lines = render_columns(&["name", "n"], &rows);
        assert_eq!(lines[0], "name     n");
        assert_eq!(lines[1], "-------  --");
        assert_eq!(lines[2], "Biology  2");
        assert_eq!(lines[3], "CS       10");
    }
}
