//! Execute tests for list command.

#[cfg(test)]
mod tests {
    use super::super::ListCmd;
    use crate::store::EntityKind;
    use rstest::{fixture, rstest};

    crate::directory_fixture! {
        fixture_name: populated_db,
    }

    crate::execute_test! {
        test_name: test_list_all_fields,
        fixture: populated_db,
        cmd: ListCmd {
            entity: EntityKind::Field,
            search: String::new(),
            limit: 100,
        },
        assertions: |result| {
            assert_eq!(result.total, 4);
            assert_eq!(result.columns[0], "name");
        },
    }

    // Search covers institution as well as name and email
    crate::execute_test! {
        test_name: test_list_researchers_by_institution,
        fixture: populated_db,
        cmd: ListCmd {
            entity: EntityKind::Researcher,
            search: "cambridge".to_string(),
            limit: 100,
        },
        assertions: |result| {
            assert_eq!(result.total, 1);
            assert_eq!(result.cell(0, "name"), Some("Alan Turing"));
        },
    }

    crate::execute_test! {
        test_name: test_list_limit,
        fixture: populated_db,
        cmd: ListCmd {
            entity: EntityKind::Subfield,
            search: String::new(),
            limit: 1,
        },
        assertions: |result| {
            assert_eq!(result.rows.len(), 1);
            assert_eq!(result.total, 6);
        },
    }

    crate::execute_no_match_test! {
        test_name: test_list_no_match,
        fixture: populated_db,
        cmd: ListCmd {
            entity: EntityKind::Problem,
            search: "cold fusion".to_string(),
            limit: 100,
        },
        empty_field: rows,
    }

    crate::execute_empty_db_test! {
        cmd_type: ListCmd,
        cmd: ListCmd {
            entity: EntityKind::Field,
            search: String::new(),
            limit: 100,
        },
    }
}
