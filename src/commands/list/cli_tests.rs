//! CLI parsing tests for list command using the test DSL.

#[cfg(test)]
mod tests {
    use crate::cli::Args;
    use crate::store::EntityKind;
    use clap::Parser;
    use rstest::rstest;

    crate::cli_defaults_test! {
        command: "list",
        variant: List,
        required_args: ["field"],
        defaults: {
            search: "",
            limit: 100,
        },
    }

    crate::cli_option_test! {
        command: "list",
        variant: List,
        test_name: test_list_with_search,
        args: ["researcher", "--search", "mit"],
        field: search,
        expected: "mit",
    }

    crate::cli_option_test! {
        command: "list",
        variant: List,
        test_name: test_list_snake_case_entity,
        args: ["funding_proposal"],
        field: entity,
        expected: EntityKind::FundingProposal,
    }

    crate::cli_limit_tests! {
        command: "list",
        variant: List,
        required_args: ["field"],
        limit: {
            field: limit,
            default: 100,
            max: 1000,
        },
    }

    crate::cli_required_arg_test! {
        command: "list",
        test_name: test_list_requires_entity,
        required_arg: "<ENTITY>",
    }

    crate::cli_error_test! {
        command: "list",
        test_name: test_list_rejects_unknown_entity,
        args: ["gadget"],
    }
}
