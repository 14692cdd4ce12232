//! Integer id allocation, one counter per relation.

use cozo::DataValue;

use crate::db::schema::SEQUENCE;
use crate::db::{extract_i64, int_value, str_value, DatabaseBackend};

use super::record::{fetch_rows, put_rows};
use super::StoreError;

/// Next id that would be handed out for `name`. Starts at 1.
pub fn peek(db: &dyn DatabaseBackend, name: &str) -> Result<i64, StoreError> {
    let rows = fetch_rows(db, &SEQUENCE, Some(("name", str_value(name))))?;
    Ok(rows
        .first()
        .and_then(|row| row.get(1))
        .and_then(extract_i64)
        .unwrap_or(1))
}

/// Take the next id for `name`.
pub fn next_id(db: &dyn DatabaseBackend, name: &str) -> Result<i64, StoreError> {
    let id = peek(db, name)?;
    store(db, name, id + 1)?;
    Ok(id)
}

/// Make sure an explicitly chosen id is never handed out later.
pub fn reserve(db: &dyn DatabaseBackend, name: &str, id: i64) -> Result<(), StoreError> {
    if id >= peek(db, name)? {
        store(db, name, id + 1)?;
    }
    Ok(())
}

fn store(db: &dyn DatabaseBackend, name: &str, next: i64) -> Result<(), StoreError> {
    let row: Vec<DataValue> = vec![str_value(name), int_value(next)];
    put_rows(db, &SEQUENCE, &[row])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::setup_store;

    #[test]
    fn test_ids_start_at_one_and_increase() {
        let db = setup_store();
        assert_eq!(next_id(&*db, "researcher").unwrap(), 1);
        assert_eq!(next_id(&*db, "researcher").unwrap(), 2);
        assert_eq!(next_id(&*db, "research_work").unwrap(), 1);
    }

    #[test]
    fn test_reserve_skips_past_explicit_id() {
        let db = setup_store();
        reserve(&*db, "researcher", 10).unwrap();
        assert_eq!(next_id(&*db, "researcher").unwrap(), 11);

        reserve(&*db, "researcher", 3).unwrap();
        assert_eq!(peek(&*db, "researcher").unwrap(), 12);
    }
}
