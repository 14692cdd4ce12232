//! Output formatting for delete command results.

use crate::output::Outputable;
use crate::store::{DeleteSummary, RelationCount};

fn section(output: &mut String, title: &str, counts: &[RelationCount]) {
    if counts.is_empty() {
        return;
    }
    output.push_str(&format!("\n{}:\n", title));
    for count in counts {
        output.push_str(&format!("  {}: {}\n", count.relation, count.count));
    }
}

impl Outputable for DeleteSummary {
    fn to_table(&self) -> String {
        let mut output = format!("Deleted {} {}\n", self.entity, self.key);

        section(&mut output, "Removed", &self.removed);
        section(&mut output, "Unlinked", &self.unlinked);
        section(&mut output, "Cleared references", &self.nulled);

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    const WORK_TABLE: &str = "\
Deleted research_work 1

Removed:
  research_work: 1
  mentor: 1

Cleared references:
  problem: 1
";

    #[fixture]
    fn work_summary() -> DeleteSummary {
        DeleteSummary {
            entity: "research_work".to_string(),
            key: "1".to_string(),
            removed: vec![
                RelationCount {
                    relation: "research_work",
                    count: 1,
                },
                RelationCount {
                    relation: "mentor",
                    count: 1,
                },
            ],
            unlinked: vec![],
            nulled: vec![RelationCount {
                relation: "problem",
                count: 1,
            }],
        }
    }

    crate::output_table_test! {
        test_name: test_to_table,
        fixture: work_summary,
        fixture_type: DeleteSummary,
        expected: WORK_TABLE,
    }

    crate::output_json_test! {
        test_name: test_format_json,
        fixture: work_summary,
        fixture_type: DeleteSummary,
        assertions: {
            "entity": "research_work",
            "key": "1",
        },
    }

    crate::output_toon_test! {
        test_name: test_format_toon,
        fixture: work_summary,
        fixture_type: DeleteSummary,
        contains: ["entity: research_work", "removed[2]"],
    }
}
