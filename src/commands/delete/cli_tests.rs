//! CLI parsing tests for delete command.

#[cfg(test)]
mod tests {
    use crate::cli::Args;
    use crate::store::EntityKind;
    use clap::Parser;
    use rstest::rstest;

    crate::cli_option_test! {
        command: "delete",
        variant: Delete,
        test_name: test_delete_entity,
        args: ["research_work", "1"],
        field: entity,
        expected: EntityKind::ResearchWork,
    }

    crate::cli_option_test! {
        command: "delete",
        variant: Delete,
        test_name: test_delete_key_with_spaces,
        args: ["problem", "Protein Folding"],
        field: key,
        expected: "Protein Folding",
    }

    crate::cli_required_arg_test! {
        command: "delete",
        test_name: test_delete_requires_entity,
        required_arg: "<ENTITY>",
    }

    crate::cli_error_test! {
        command: "delete",
        test_name: test_delete_requires_key,
        args: ["field"],
    }
}
