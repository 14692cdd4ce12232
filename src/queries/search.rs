//! Field search: case-insensitive substring match over a field's name,
//! domain, and area, with each match's subfields attached.

use std::collections::BTreeMap;
use std::error::Error;

use cozo::DataValue;
use serde::Serialize;

use crate::db::schema::FIELD;
use crate::db::{DatabaseBackend, Params};
use crate::models::{Field, Subfield};
use crate::queries::builder::{CompiledQuery, QueryBuilder};
use crate::store::{decode_sorted, subfields_of};

/// Columns a query is matched against.
pub const SEARCH_COLUMNS: [&str; 3] = ["name", "domain", "area"];

/// Matched fields in display order, and the subfields under each.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FieldSearchResult {
    pub query: String,
    pub fields: Vec<Field>,
    /// Keyed by field name
    pub subfields: BTreeMap<String, Vec<Subfield>>,
}

impl FieldSearchResult {
    pub fn subfields_for(&self, field: &str) -> &[Subfield] {
        self.subfields.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Query builder for fields matching a substring on any search column.
#[derive(Debug)]
pub struct FieldSearchQuery {
    pub query: String,
}

impl QueryBuilder for FieldSearchQuery {
    fn compile(&self) -> String {
        let columns = FIELD.column_names().join(", ");
        let tests = SEARCH_COLUMNS
            .iter()
            .map(|c| format!("str_includes(lowercase({}), needle)", c))
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "?[{cols}] := *field{{{cols}}},\n    needle = lowercase($query),\n    or({tests})\n:order domain, name",
            cols = columns,
            tests = tests,
        )
    }

    fn parameters(&self) -> Params {
        let mut params = Params::new();
        params.insert("query".to_string(), DataValue::Str(self.query.as_str().into()));
        params
    }
}

/// Run the field search. An empty query yields an empty result rather than
/// every field.
pub fn search_fields(db: &dyn DatabaseBackend, query: &str) -> Result<FieldSearchResult, Box<dyn Error>> {
    let mut result = FieldSearchResult {
        query: query.to_string(),
        ..FieldSearchResult::default()
    };
    if query.is_empty() {
        return Ok(result);
    }

    let compiled = CompiledQuery::from_builder(&FieldSearchQuery {
        query: query.to_string(),
    });
    let fields: Vec<Field> = decode_sorted(compiled.run(db)?.rows)?;

    for field in &fields {
        result.subfields.insert(field.name.clone(), subfields_of(db, &field.name)?);
    }
    result.fields = fields;

    tracing::debug!(query, matched = result.fields.len(), "field search");
    Ok(result)
}

/// Whether `field` would be returned for `query`.
pub fn field_matches(field: &Field, query: &str) -> bool {
    let needle = query.to_lowercase();
    [&field.name, &field.domain, &field.area]
        .iter()
        .any(|value| value.to_lowercase().contains(&needle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{create, list};
    use crate::test_utils::{directory_db, setup_store};
    use rstest::rstest;

    fn names(result: &FieldSearchResult) -> Vec<&str> {
        result.fields.iter().map(|f| f.name.as_str()).collect()
    }

    #[test]
    fn test_compiled_script() {
        let script = FieldSearchQuery { query: "bio".to_string() }.compile();
        assert!(script.starts_with("?[name, domain, area, field_type, created_at, updated_at] := *field{"));
        assert!(script.contains("str_includes(lowercase(area), needle)"));
        assert!(script.ends_with(":order domain, name"));
    }

    #[test]
    fn test_bio_matches_name_and_area() {
        let db = directory_db();
        let result = search_fields(db.as_ref(), "bio").unwrap();

        assert_eq!(result.query, "bio");
        assert_eq!(names(&result), vec!["Biology", "Neuroscience"]);

        let genetics: Vec<_> = result.subfields_for("Biology").iter().map(|s| s.name.as_str()).collect();
        assert_eq!(genetics, vec!["Ecology", "Genetics"]);
        let neuro: Vec<_> = result.subfields_for("Neuroscience").iter().map(|s| s.name.as_str()).collect();
        assert_eq!(neuro, vec!["Cognitive Neuroscience"]);
        assert_eq!(result.subfields.len(), 2);
    }

    #[test]
    fn test_empty_query_returns_nothing() {
        let db = directory_db();
        let result = search_fields(db.as_ref(), "").unwrap();
        assert!(result.is_empty());
        assert!(result.subfields.is_empty());
    }

    #[test]
    fn test_only_biology_among_biology_and_physics() {
        let db = setup_store();
        create(db.as_ref(), Field::new("Biology", "Life Sciences", "Biology", "Natural")).unwrap();
        create(db.as_ref(), Field::new("Physics", "Physical Sciences", "Physics", "Natural")).unwrap();
        create(db.as_ref(), Subfield::new("Genetics", "Biology", "Natural", "Life Sciences")).unwrap();
        create(db.as_ref(), Subfield::new("Optics", "Physics", "Natural", "Physical Sciences")).unwrap();

        let result = search_fields(db.as_ref(), "bio").unwrap();
        assert_eq!(names(&result), vec!["Biology"]);
        assert_eq!(result.subfields_for("Biology").len(), 1);
        assert_eq!(result.subfields_for("Biology")[0].name, "Genetics");
    }

    #[rstest]
    #[case("BIO")]
    #[case("sciences")]
    #[case("comp")]
    #[case("physics")]
    #[case("zzz")]
    #[case("e")]
    fn test_results_match_exactly_the_matching_fields(#[case] query: &str) {
        let db = directory_db();
        let result = search_fields(db.as_ref(), query).unwrap();

        let expected: Vec<String> = list::<Field>(db.as_ref())
            .unwrap()
            .into_iter()
            .filter(|f| field_matches(f, query))
            .map(|f| f.name)
            .collect();
        let actual: Vec<String> = result.fields.iter().map(|f| f.name.clone()).collect();
        assert_eq!(actual, expected);

        for field in &result.fields {
            let children = subfields_of(db.as_ref(), &field.name).unwrap();
            assert_eq!(result.subfields_for(&field.name), children.as_slice());
        }
    }

    #[test]
    fn test_field_without_subfields_maps_to_empty_list() {
        let db = setup_store();
        create(db.as_ref(), Field::new("Mathematics", "Formal Sciences", "Mathematics", "Formal")).unwrap();
        let result = search_fields(db.as_ref(), "math").unwrap();
        assert_eq!(names(&result), vec!["Mathematics"]);
        assert!(result.subfields_for("Mathematics").is_empty());
        assert!(result.subfields.contains_key("Mathematics"));
    }
}
