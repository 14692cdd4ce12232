//! CLI parsing tests for search command using the test DSL.

#[cfg(test)]
mod tests {
    use crate::cli::Args;
    use clap::Parser;
    use rstest::rstest;

    crate::cli_defaults_test! {
        command: "search",
        variant: Search,
        required_args: [],
        defaults: {
            query: "",
        },
    }

    crate::cli_option_test! {
        command: "search",
        variant: Search,
        test_name: test_search_with_query,
        args: ["--query", "bio"],
        field: query,
        expected: "bio",
    }

    crate::cli_option_test! {
        command: "search",
        variant: Search,
        test_name: test_search_with_short_query,
        args: ["-q", "Life Sciences"],
        field: query,
        expected: "Life Sciences",
    }

    #[rstest]
    fn test_search_accepts_global_format() {
        let args = Args::try_parse_from(["research_directory", "search", "-q", "bio", "-o", "json"]).unwrap();
        assert_eq!(args.format, crate::output::OutputFormat::Json);
    }
}
