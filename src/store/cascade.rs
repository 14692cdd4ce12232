//! Cascading delete along the foreign-key graph.
//!
//! The plan is built by walking every `SchemaRelationship` that targets a
//! doomed row: `Cascade` edges doom the referencing row too, `SetNull` edges
//! clear the referencing column. The whole plan is applied as one
//! multi-block script, which Cozo runs in a single transaction.

use std::collections::{BTreeMap, BTreeSet, VecDeque};

use cozo::DataValue;
use serde::Serialize;

use crate::db::schema::{CozoCompiler, OnDelete, SchemaRelation, ALL_RELATIONS};
use crate::db::{row_literal, run_query, DatabaseBackend, Params};
use crate::models::values::now;

use super::kind::EntityKind;
use super::record::{fetch_rows, key_exists, lookup_keys};
use super::row::{display_key, timestamp};
use super::StoreError;

/// Rows affected in one relation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelationCount {
    pub relation: &'static str,
    pub count: usize,
}

/// What a delete removed and cleared.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DeleteSummary {
    pub entity: String,
    pub key: String,
    /// Entity rows removed, including the requested one
    pub removed: Vec<RelationCount>,
    /// Link rows removed
    pub unlinked: Vec<RelationCount>,
    /// Rows kept with a reference cleared
    pub nulled: Vec<RelationCount>,
}

impl DeleteSummary {
    pub fn removed_in(&self, relation: &str) -> usize {
        count_in(&self.removed, relation)
    }

    pub fn unlinked_in(&self, relation: &str) -> usize {
        count_in(&self.unlinked, relation)
    }

    pub fn nulled_in(&self, relation: &str) -> usize {
        count_in(&self.nulled, relation)
    }

    pub fn total_removed(&self) -> usize {
        self.removed.iter().map(|c| c.count).sum()
    }
}

fn count_in(counts: &[RelationCount], relation: &str) -> usize {
    counts
        .iter()
        .find(|c| c.relation == relation)
        .map(|c| c.count)
        .unwrap_or(0)
}

/// Keys per relation, deduplicated by their literal form.
#[derive(Default)]
struct KeySet {
    rows: BTreeMap<&'static str, Vec<Vec<DataValue>>>,
    seen: BTreeSet<(&'static str, String)>,
}

impl KeySet {
    /// Returns false if the key was already present.
    fn insert(&mut self, relation: &'static str, key: Vec<DataValue>) -> bool {
        if !self.seen.insert((relation, row_literal(&key))) {
            return false;
        }
        self.rows.entry(relation).or_default().push(key);
        true
    }

    fn contains(&self, relation: &'static str, key: &[DataValue]) -> bool {
        self.seen.contains(&(relation, row_literal(key)))
    }

    fn get(&self, relation: &str) -> &[Vec<DataValue>] {
        self.rows.get(relation).map(Vec::as_slice).unwrap_or(&[])
    }
}

struct DeletePlan {
    doomed: KeySet,
    /// (relation, column) -> keys of rows whose column is cleared
    nulled: BTreeMap<(&'static str, &'static str), Vec<Vec<DataValue>>>,
}

fn plan(
    db: &dyn DatabaseBackend,
    root: &'static SchemaRelation,
    key: DataValue,
) -> Result<DeletePlan, StoreError> {
    let mut doomed = KeySet::default();
    let mut nulled: BTreeMap<(&'static str, &'static str), Vec<Vec<DataValue>>> = BTreeMap::new();
    let mut queue: VecDeque<(&'static SchemaRelation, DataValue)> = VecDeque::new();

    doomed.insert(root.name, vec![key.clone()]);
    queue.push_back((root, key));

    while let Some((target, key)) = queue.pop_front() {
        for relation in ALL_RELATIONS.iter().copied() {
            for edge in relation.relationships.iter().filter(|e| e.target == target.name) {
                let referencing = lookup_keys(db, relation, &[edge.column], std::slice::from_ref(&key))?;
                for row_key in referencing {
                    match edge.on_delete {
                        OnDelete::Cascade => {
                            if doomed.insert(relation.name, row_key.clone()) && relation.single_key().is_some() {
                                if let Some(child_key) = row_key.into_iter().next() {
                                    queue.push_back((relation, child_key));
                                }
                            }
                        }
                        OnDelete::SetNull => {
                            nulled.entry((relation.name, edge.column)).or_default().push(row_key);
                        }
                    }
                }
            }
        }
    }

    Ok(DeletePlan { doomed, nulled })
}

/// Delete an entity and everything that depends on it.
pub fn delete(db: &dyn DatabaseBackend, kind: EntityKind, key: DataValue) -> Result<DeleteSummary, StoreError> {
    let root = kind.relation();
    if !key_exists(db, root, &key)? {
        return Err(StoreError::NotFound {
            entity: root.name,
            key: display_key(&key),
        });
    }

    let plan = plan(db, root, key.clone())?;
    let mut blocks = Vec::new();
    let mut summary = DeleteSummary {
        entity: root.name.to_string(),
        key: display_key(&key),
        ..DeleteSummary::default()
    };

    let touched = now();
    for ((relation_name, column), keys) in &plan.nulled {
        let Some(relation) = crate::db::schema::relation_by_name(relation_name) else {
            continue;
        };
        let Some(column_idx) = relation.column_index(column) else {
            continue;
        };

        let updated_idx = relation.column_index("updated_at");
        let mut rows = Vec::new();
        for row_key in keys {
            if plan.doomed.contains(relation.name, row_key) {
                continue;
            }
            let key_column = relation.key_fields[0].name;
            let Some(first) = row_key.first() else { continue };
            for mut row in fetch_rows(db, relation, Some((key_column, first.clone())))? {
                if let Some(cell) = row.get_mut(column_idx) {
                    *cell = DataValue::Null;
                }
                if let Some(cell) = updated_idx.and_then(|idx| row.get_mut(idx)) {
                    *cell = timestamp(&touched);
                }
                rows.push(row_literal(&row));
            }
        }

        if !rows.is_empty() {
            summary.nulled.push(RelationCount {
                relation: relation.name,
                count: rows.len(),
            });
            blocks.push(CozoCompiler::compile_insert(relation, &rows));
        }
    }

    for relation in ALL_RELATIONS.iter().copied() {
        let keys = plan.doomed.get(relation.name);
        if keys.is_empty() {
            continue;
        }
        let literals: Vec<String> = keys.iter().map(|k| row_literal(k)).collect();
        blocks.push(CozoCompiler::compile_remove(relation, &literals));

        let count = RelationCount {
            relation: relation.name,
            count: keys.len(),
        };
        if relation.single_key().is_some() {
            summary.removed.push(count);
        } else {
            summary.unlinked.push(count);
        }
    }

    let script = blocks
        .iter()
        .map(|block| format!("{{\n{}\n}}", block))
        .collect::<Vec<_>>()
        .join("\n");
    run_query(db, &script, Params::new())?;

    tracing::info!(
        entity = root.name,
        key = %summary.key,
        removed = summary.total_removed(),
        "cascade delete applied"
    );
    Ok(summary)
}
