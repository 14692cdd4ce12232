//! Core schema definition types.
//!
//! Provides a small type system for describing the directory's relations.
//! The same definitions drive DDL generation, row encoding, referential
//! checks, uniqueness checks, and the delete cascade.

/// Represents a database data type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataType {
    /// String/text data. Decimals, dates, and timestamps are stored as strings.
    String,
    /// Integer data
    Int,
    /// Boolean data
    Bool,
}

impl DataType {
    /// Returns the Cozo type name for this data type.
    pub fn cozo_type(&self) -> &'static str {
        match self {
            DataType::String => "String",
            DataType::Int => "Int",
            DataType::Bool => "Bool",
        }
    }
}

/// Represents a field in a schema relation.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaField {
    /// Field name (e.g., "name", "researcher_id", "solves_problem")
    pub name: &'static str,

    /// Field data type
    pub data_type: DataType,

    /// Whether the column accepts null.
    pub nullable: bool,
}

impl SchemaField {
    pub const fn new(name: &'static str, data_type: DataType) -> Self {
        Self {
            name,
            data_type,
            nullable: false,
        }
    }

    pub const fn nullable(name: &'static str, data_type: DataType) -> Self {
        Self {
            name,
            data_type,
            nullable: true,
        }
    }

    /// Cozo column type, with `?` suffix for nullable columns.
    pub fn cozo_type(&self) -> String {
        if self.nullable {
            format!("{}?", self.data_type.cozo_type())
        } else {
            self.data_type.cozo_type().to_string()
        }
    }
}

/// What happens to a referencing row when its target row is deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnDelete {
    /// Delete the referencing row as well.
    Cascade,
    /// Keep the referencing row and null out the column.
    SetNull,
}

/// A foreign-key edge from a column of this relation to another relation.
///
/// The target is always identified by its single key column.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaRelationship {
    /// Column in the owning relation holding the reference
    pub column: &'static str,

    /// Target relation name
    pub target: &'static str,

    pub on_delete: OnDelete,
}

impl SchemaRelationship {
    pub const fn cascade(column: &'static str, target: &'static str) -> Self {
        Self {
            column,
            target,
            on_delete: OnDelete::Cascade,
        }
    }

    pub const fn set_null(column: &'static str, target: &'static str) -> Self {
        Self {
            column,
            target,
            on_delete: OnDelete::SetNull,
        }
    }
}

/// Represents a complete database relation/table.
#[derive(Debug, Clone)]
pub struct SchemaRelation {
    /// Relation name (e.g., "field", "research_work")
    pub name: &'static str,

    /// Fields that form the key (must be unique)
    pub key_fields: &'static [SchemaField],

    /// Fields that are associated values
    pub value_fields: &'static [SchemaField],

    /// Foreign-key edges to other relations
    pub relationships: &'static [SchemaRelationship],

    /// Column groups that must be unique across rows. Rows with a null in
    /// any column of a group are exempt.
    pub unique: &'static [&'static [&'static str]],
}

impl SchemaRelation {
    /// Returns all fields in this relation (key + value).
    pub fn all_fields(&self) -> impl Iterator<Item = &SchemaField> {
        self.key_fields.iter().chain(self.value_fields.iter())
    }

    /// Returns the total number of fields.
    pub fn field_count(&self) -> usize {
        self.key_fields.len() + self.value_fields.len()
    }

    /// Position of a column within a full row.
    pub fn column_index(&self, column: &str) -> Option<usize> {
        self.all_fields().position(|f| f.name == column)
    }

    pub fn key_columns(&self) -> Vec<&'static str> {
        self.key_fields.iter().map(|f| f.name).collect()
    }

    pub fn column_names(&self) -> Vec<&'static str> {
        self.all_fields().map(|f| f.name).collect()
    }

    /// The single key column of an entity relation, if the key is not composite.
    pub fn single_key(&self) -> Option<&'static SchemaField> {
        match self.key_fields {
            [only] => Some(only),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY_FIELDS: &[SchemaField] = &[SchemaField::new("work_id", DataType::Int)];
    const VALUE_FIELDS: &[SchemaField] = &[
        SchemaField::new("title", DataType::String),
        SchemaField::nullable("solves_problem", DataType::String),
    ];
    const RELATION: SchemaRelation = SchemaRelation {
        name: "work",
        key_fields: KEY_FIELDS,
        value_fields: VALUE_FIELDS,
        relationships: &[SchemaRelationship::set_null("solves_problem", "problem")],
        unique: &[&["solves_problem"]],
    };

    #[test]
    fn test_datatype_cozo_types() {
        assert_eq!(DataType::String.cozo_type(), "String");
        assert_eq!(DataType::Int.cozo_type(), "Int");
        assert_eq!(DataType::Bool.cozo_type(), "Bool");
    }

    #[test]
    fn test_nullable_field_type() {
        assert_eq!(VALUE_FIELDS[1].cozo_type(), "String?");
        assert_eq!(VALUE_FIELDS[0].cozo_type(), "String");
    }

    #[test]
    fn test_relationship_constructors() {
        let rel = SchemaRelationship::cascade("field", "field");
        assert_eq!(rel.on_delete, OnDelete::Cascade);
        assert_eq!(RELATION.relationships[0].on_delete, OnDelete::SetNull);
    }

    #[test]
    fn test_schema_relation_all_fields() {
        let names: Vec<_> = RELATION.all_fields().map(|f| f.name).collect();
        assert_eq!(names, vec!["work_id", "title", "solves_problem"]);
        assert_eq!(RELATION.field_count(), 3);
    }

    #[test]
    fn test_column_index() {
        assert_eq!(RELATION.column_index("work_id"), Some(0));
        assert_eq!(RELATION.column_index("solves_problem"), Some(2));
        assert_eq!(RELATION.column_index("missing"), None);
    }

    #[test]
    fn test_single_key() {
        assert_eq!(RELATION.single_key().map(|f| f.name), Some("work_id"));
    }
}
