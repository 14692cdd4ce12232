//! Generic persistence for directory entities.
//!
//! Every entity implements `Record`; the functions here do the rest:
//! id allocation, validation, referential and uniqueness checks, and the
//! `:put` itself.

use std::cmp::Ordering;

use cozo::DataValue;

use crate::db::schema::{CozoCompiler, SchemaRelation};
use crate::db::{row_literal, run_query, DatabaseBackend, Params};
use crate::models::values::now;
use crate::models::Timestamp;
use crate::validation::ValidationError;

use super::row::{display_key, IntoKey};
use super::sequence;
use super::StoreError;

/// A model type stored as one row of a relation.
pub trait Record: Sized {
    const RELATION: &'static SchemaRelation;

    /// Primary key cell.
    fn key(&self) -> DataValue;

    /// Mutable id for relations with allocated integer keys.
    fn auto_id(&mut self) -> Option<&mut i64> {
        None
    }

    /// Cells in relation column order.
    fn to_row(&self) -> Vec<DataValue>;

    fn from_row(row: &[DataValue]) -> Option<Self>;

    fn validate(&self) -> Result<(), ValidationError>;

    /// Refresh `updated_at`-style columns before a write.
    fn touch(&mut self, _now: Timestamp) {}

    /// Default list ordering.
    fn ordering(a: &Self, b: &Self) -> Ordering;
}

/// Insert a new record. Zero ids are allocated from the sequence.
pub fn create<R: Record>(db: &dyn DatabaseBackend, mut record: R) -> Result<R, StoreError> {
    record.validate()?;

    let relation = R::RELATION;
    if let Some(id) = record.auto_id() {
        if *id == 0 {
            *id = sequence::next_id(db, relation.name)?;
        } else {
            sequence::reserve(db, relation.name, *id)?;
        }
    }

    let key = record.key();
    if key_exists(db, relation, &key)? {
        return Err(StoreError::Unique {
            entity: relation.name,
            fields: relation.key_columns().join(", "),
            value: display_key(&key),
        });
    }

    record.touch(now());
    let row = record.to_row();
    check_integrity(db, relation, &row)?;
    put_rows(db, relation, &[row])?;

    tracing::debug!(relation = relation.name, key = %display_key(&key), "created record");
    Ok(record)
}

/// Write field changes to an existing record.
pub fn update<R: Record>(db: &dyn DatabaseBackend, mut record: R) -> Result<R, StoreError> {
    record.validate()?;

    let relation = R::RELATION;
    let key = record.key();
    if !key_exists(db, relation, &key)? {
        return Err(StoreError::NotFound {
            entity: relation.name,
            key: display_key(&key),
        });
    }

    record.touch(now());
    let row = record.to_row();
    check_integrity(db, relation, &row)?;
    put_rows(db, relation, &[row])?;

    tracing::debug!(relation = relation.name, key = %display_key(&key), "updated record");
    Ok(record)
}

pub fn get<R: Record>(db: &dyn DatabaseBackend, key: impl IntoKey) -> Result<Option<R>, StoreError> {
    let relation = R::RELATION;
    let key_column = relation.key_fields[0].name;
    let rows = fetch_rows(db, relation, Some((key_column, key.into_key())))?;
    rows.first().map(|row| decode::<R>(row)).transpose()
}

/// Like `get`, but a missing row is an error.
pub fn require<R: Record>(db: &dyn DatabaseBackend, key: impl IntoKey) -> Result<R, StoreError> {
    let key = key.into_key();
    get::<R>(db, &key)?.ok_or_else(|| StoreError::NotFound {
        entity: R::RELATION.name,
        key: display_key(&key),
    })
}

/// All records in default order.
pub fn list<R: Record>(db: &dyn DatabaseBackend) -> Result<Vec<R>, StoreError> {
    let rows = fetch_rows(db, R::RELATION, None)?;
    decode_sorted(rows)
}

/// Records whose `column` equals `value`, in default order.
pub fn list_where<R: Record>(
    db: &dyn DatabaseBackend,
    column: &str,
    value: impl IntoKey,
) -> Result<Vec<R>, StoreError> {
    let rows = fetch_rows(db, R::RELATION, Some((column, value.into_key())))?;
    decode_sorted(rows)
}

fn decode<R: Record>(row: &[DataValue]) -> Result<R, StoreError> {
    R::from_row(row).ok_or_else(|| StoreError::CorruptRow {
        relation: R::RELATION.name,
        row: row_literal(row),
    })
}

pub(crate) fn decode_sorted<R: Record>(rows: Vec<Vec<DataValue>>) -> Result<Vec<R>, StoreError> {
    let mut records = rows
        .iter()
        .map(|row| decode::<R>(row))
        .collect::<Result<Vec<_>, _>>()?;
    records.sort_by(R::ordering);
    Ok(records)
}

/// Full rows of a relation, optionally filtered on one column.
pub(crate) fn fetch_rows(
    db: &dyn DatabaseBackend,
    relation: &SchemaRelation,
    filter: Option<(&str, DataValue)>,
) -> Result<Vec<Vec<DataValue>>, StoreError> {
    let mut params = Params::new();
    let column = match filter {
        Some((column, value)) => {
            params.insert("value".to_string(), value);
            Some(column)
        }
        None => None,
    };
    let script = CozoCompiler::compile_select(relation, column);
    Ok(run_query(db, &script, params)?.rows)
}

/// Keys of rows whose columns equal the given values.
pub(crate) fn lookup_keys(
    db: &dyn DatabaseBackend,
    relation: &SchemaRelation,
    columns: &[&str],
    values: &[DataValue],
) -> Result<Vec<Vec<DataValue>>, StoreError> {
    let params: Params = values
        .iter()
        .enumerate()
        .map(|(i, v)| (format!("p{}", i), v.clone()))
        .collect();
    let script = CozoCompiler::compile_key_lookup(relation, columns);
    Ok(run_query(db, &script, params)?.rows)
}

pub(crate) fn key_exists(
    db: &dyn DatabaseBackend,
    relation: &SchemaRelation,
    key: &DataValue,
) -> Result<bool, StoreError> {
    let key_column = relation.key_fields[0].name;
    let rows = lookup_keys(db, relation, &[key_column], std::slice::from_ref(key))?;
    Ok(!rows.is_empty())
}

pub(crate) fn put_rows(
    db: &dyn DatabaseBackend,
    relation: &SchemaRelation,
    rows: &[Vec<DataValue>],
) -> Result<(), StoreError> {
    if rows.is_empty() {
        return Ok(());
    }
    let literals: Vec<String> = rows.iter().map(|row| row_literal(row)).collect();
    let script = CozoCompiler::compile_insert(relation, &literals);
    run_query(db, &script, Params::new())?;
    Ok(())
}

/// Referenced parents must exist and unique column groups must not collide
/// with another row.
pub(crate) fn check_integrity(
    db: &dyn DatabaseBackend,
    relation: &SchemaRelation,
    row: &[DataValue],
) -> Result<(), StoreError> {
    let cell = |column: &str| {
        relation
            .column_index(column)
            .and_then(|idx| row.get(idx))
            .cloned()
            .unwrap_or(DataValue::Null)
    };

    for edge in relation.relationships {
        let value = cell(edge.column);
        if value == DataValue::Null {
            continue;
        }
        let target = crate::db::schema::relation_by_name(edge.target).ok_or_else(|| {
            StoreError::Database(format!("Unknown relation: {}", edge.target))
        })?;
        if !key_exists(db, target, &value)? {
            return Err(StoreError::MissingReference {
                entity: relation.name,
                field: edge.column,
                target: edge.target,
                key: display_key(&value),
            });
        }
    }

    let own_key: Vec<DataValue> = relation.key_columns().into_iter().map(cell).collect();
    for group in relation.unique {
        let values: Vec<DataValue> = group.iter().map(|c| cell(*c)).collect();
        if values.iter().any(|v| *v == DataValue::Null) {
            continue;
        }
        let clashes = lookup_keys(db, relation, group, &values)?;
        if clashes.iter().any(|key| *key != own_key) {
            return Err(StoreError::Unique {
                entity: relation.name,
                fields: group.join(", "),
                value: values.iter().map(display_key).collect::<Vec<_>>().join(", "),
            });
        }
    }

    Ok(())
}
