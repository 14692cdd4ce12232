//! Cozo Datalog compiler.
//!
//! Generates Cozo DDL (`:create relation { ... }`) and data scripts from
//! schema definitions. Output is deterministic so tests can compare strings.

use crate::db::schema::definition::SchemaRelation;

/// Compiler for generating CozoScript from schema definitions.
pub struct CozoCompiler;

impl CozoCompiler {
    /// Generate Cozo DDL for a single relation.
    ///
    /// Produces output in the format:
    /// ```cozo
    /// :create relation_name {
    ///     key_field1: Type1,
    ///     key_field2: Type2
    ///     =>
    ///     value_field1: Type1,
    ///     value_field2: Type2?
    /// }
    /// ```
    /// Relations without value fields omit the `=>` separator.
    pub fn compile_relation(relation: &SchemaRelation) -> String {
        let key_fields = relation
            .key_fields
            .iter()
            .map(|f| format!("    {}: {}", f.name, f.cozo_type()))
            .collect::<Vec<_>>()
            .join(",\n");

        if relation.value_fields.is_empty() {
            return format!(":create {} {{\n{}\n}}", relation.name, key_fields);
        }

        let value_fields = relation
            .value_fields
            .iter()
            .map(|f| format!("    {}: {}", f.name, f.cozo_type()))
            .collect::<Vec<_>>()
            .join(",\n");

        format!(
            ":create {} {{\n{}\n    =>\n{}\n}}",
            relation.name, key_fields, value_fields
        )
    }

    /// Generate Cozo :put statement for batch insert or replace.
    ///
    /// ```cozo
    /// ?[col1, col2, col3] <- [[val1, val2, val3], ...]
    /// :put table_name { key1 => col2, col3 }
    /// ```
    ///
    /// # Arguments
    /// * `relation` - The schema relation definition
    /// * `row_literals` - Pre-formatted row strings like `["Biology", "Life", 3]`
    pub fn compile_insert(relation: &SchemaRelation, row_literals: &[String]) -> String {
        format!(
            "?[{}] <- [{}]\n:put {} {{ {} }}",
            relation.column_names().join(", "),
            row_literals.join(", "),
            relation.name,
            Self::put_spec(relation),
        )
    }

    /// Generate a select of full rows, optionally filtered on one column
    /// bound to the `$value` parameter.
    ///
    /// ```cozo
    /// ?[col1, col2] := *table{col1, col2}, col2 = $value
    /// ```
    pub fn compile_select(relation: &SchemaRelation, filter_column: Option<&str>) -> String {
        let columns = relation.column_names().join(", ");
        let mut script = format!("?[{}] := *{}{{{}}}", columns, relation.name, columns);
        if let Some(column) = filter_column {
            script.push_str(&format!(", {} = $value", column));
        }
        script
    }

    /// Generate a select of key columns for rows whose `columns` equal the
    /// positional parameters `$p0`, `$p1`, ...
    ///
    /// ```cozo
    /// ?[key] := *table{key, col_a, col_b}, col_a = $p0, col_b = $p1
    /// ```
    pub fn compile_key_lookup(relation: &SchemaRelation, columns: &[&str]) -> String {
        let keys = relation.key_columns();
        let mut bindings: Vec<&str> = keys.clone();
        for column in columns {
            if !bindings.contains(column) {
                bindings.push(column);
            }
        }

        let mut script = format!(
            "?[{}] := *{}{{{}}}",
            keys.join(", "),
            relation.name,
            bindings.join(", ")
        );
        for (i, column) in columns.iter().enumerate() {
            script.push_str(&format!(", {} = $p{}", column, i));
        }
        script
    }

    /// Generate a select of full `target` rows reached through a link
    /// relation, starting from the link rows whose `from_column` equals `$value`.
    ///
    /// ```cozo
    /// ?[t1, t2] := *link{from: link_from, to: link_to}, link_from = $value,
    ///              *target{t1, t2}, t1 = link_to
    /// ```
    pub fn compile_linked(
        link: &SchemaRelation,
        from_column: &str,
        to_column: &str,
        target: &SchemaRelation,
    ) -> String {
        let columns = target.column_names().join(", ");
        let target_key = target.key_fields.first().map(|f| f.name).unwrap_or_default();
        format!(
            "?[{cols}] := *{link}{{{from}: link_from, {to}: link_to}}, link_from = $value, \
             *{target}{{{cols}}}, {key} = link_to",
            cols = columns,
            link = link.name,
            from = from_column,
            to = to_column,
            target = target.name,
            key = target_key,
        )
    }

    /// Generate Cozo :rm statement removing the rows with the given keys.
    ///
    /// ```cozo
    /// ?[key1, key2] <- [[k1, k2], ...]
    /// :rm table { key1, key2 }
    /// ```
    pub fn compile_remove(relation: &SchemaRelation, key_literals: &[String]) -> String {
        let key_columns = relation.key_columns().join(", ");
        format!(
            "?[{}] <- [{}]\n:rm {} {{ {} }}",
            key_columns,
            key_literals.join(", "),
            relation.name,
            key_columns,
        )
    }

    fn put_spec(relation: &SchemaRelation) -> String {
        let key_columns = relation.key_columns().join(", ");
        if relation.value_fields.is_empty() {
            return key_columns;
        }
        let value_columns = relation
            .value_fields
            .iter()
            .map(|f| f.name)
            .collect::<Vec<_>>()
            .join(", ");
        format!("{} => {}", key_columns, value_columns)
    }
}
