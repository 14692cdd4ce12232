//! Declarative macros for generating CLI parsing, execute, and output tests.
//!
//! Instead of writing repetitive test functions, declare the test cases and
//! let the macro generate the actual test code.

/// Parse `research_directory <command> <args..>` and unwrap the expected
/// subcommand variant, panicking on a parse error or any other variant.
#[doc(hidden)]
#[macro_export]
macro_rules! parse_variant {
    ($variant:ident, [$($argv:expr),+ $(,)?]) => {{
        let argv: Vec<String> = vec![$($argv.to_string()),+];
        let parsed = Args::try_parse_from(std::iter::once("research_directory".to_string()).chain(argv))
            .unwrap_or_else(|e| panic!("parse failed: {e}"));
        match parsed.command {
            crate::commands::Command::$variant(cmd) => cmd,
            other => panic!("Expected {} command, got {:?}", stringify!($variant), other),
        }
    }};
}

/// Parse `research_directory <command> <args..>` expecting clap to reject it.
#[doc(hidden)]
#[macro_export]
macro_rules! parse_rejected {
    ([$($argv:expr),+ $(,)?]) => {{
        let argv: Vec<String> = vec![$($argv.to_string()),+];
        Args::try_parse_from(std::iter::once("research_directory".to_string()).chain(argv))
            .expect_err("arguments should be rejected")
    }};
}

/// Generate a test for default values when a command is invoked with minimal args.
#[macro_export]
macro_rules! cli_defaults_test {
    (
        command: $cmd:literal,
        variant: $variant:ident,
        required_args: [$($req_arg:literal),*],
        defaults: {
            $($def_field:ident : $def_expected:expr),* $(,)?
        } $(,)?
    ) => {
        #[rstest]
        fn test_defaults() {
            let cmd = $crate::parse_variant!($variant, [$cmd $(, $req_arg)*]);
            $(
                assert_eq!(cmd.$def_field, $def_expected, "default for {}", stringify!($def_field));
            )*
        }
    };
}

/// Generate a single CLI option test.
#[macro_export]
macro_rules! cli_option_test {
    (
        command: $cmd:literal,
        variant: $variant:ident,
        test_name: $test_name:ident,
        args: [$($arg:literal),+],
        field: $field:ident,
        expected: $expected:expr $(,)?
    ) => {
        #[rstest]
        fn $test_name() {
            let cmd = $crate::parse_variant!($variant, [$cmd, $($arg),+]);
            assert_eq!(cmd.$field, $expected, "value of {}", stringify!($field));
        }
    };
}

/// Generate `--limit` tests: the default, zero, and one past the maximum.
#[macro_export]
macro_rules! cli_limit_tests {
    (
        command: $cmd:literal,
        variant: $variant:ident,
        required_args: [$($req_arg:literal),*],
        limit: {
            field: $limit_field:ident,
            default: $limit_default:expr,
            max: $limit_max:expr $(,)?
        } $(,)?
    ) => {
        #[rstest]
        fn test_limit_default() {
            let cmd = $crate::parse_variant!($variant, [$cmd $(, $req_arg)*]);
            assert_eq!(cmd.$limit_field, $limit_default);
        }

        #[rstest]
        #[case(0)]
        #[case($limit_max + 1)]
        fn test_limit_out_of_range_rejected(#[case] limit: u32) {
            $crate::parse_rejected!([$cmd $(, $req_arg)*, "--limit", limit]);
        }
    };
}

/// Generate a test that verifies a command requires a specific argument.
///
/// # Example
///
/// ```ignore
/// cli_required_arg_test! {
///     command: "import",
///     test_name: test_requires_file,
///     required_arg: "--file",
/// }
/// ```
#[macro_export]
macro_rules! cli_required_arg_test {
    (
        command: $cmd:literal,
        test_name: $test_name:ident,
        required_arg: $arg:literal $(,)?
    ) => {
        #[rstest]
        fn $test_name() {
            let err = $crate::parse_rejected!([$cmd]);
            assert!(err.to_string().contains($arg), "error should mention {}", $arg);
        }
    };
}

/// Generate a test that verifies parsing fails with specific invalid args.
///
/// # Example
///
/// ```ignore
/// cli_error_test! {
///     command: "list",
///     test_name: test_unknown_entity_rejected,
///     args: ["gadget"],
/// }
/// ```
#[macro_export]
macro_rules! cli_error_test {
    (
        command: $cmd:literal,
        test_name: $test_name:ident,
        args: [$($arg:literal),+] $(,)?
    ) => {
        #[rstest]
        fn $test_name() {
            $crate::parse_rejected!([$cmd, $($arg),+]);
        }
    };
}

// =============================================================================
// Execute Test Macros
// =============================================================================

/// Generate the `populated_db` fixture: an in-memory store loaded with the
/// sample directory.
#[macro_export]
macro_rules! directory_fixture {
    (fixture_name: $name:ident $(,)?) => {
        #[fixture]
        fn $name() -> Box<dyn crate::db::DatabaseBackend> {
            crate::test_utils::directory_db()
        }
    };
}

/// Generate a test that runs a command against a fixture and checks the result.
#[macro_export]
macro_rules! execute_test {
    (
        test_name: $test_name:ident,
        fixture: $fixture:ident,
        cmd: $cmd:expr,
        assertions: |$result:ident| $body:block $(,)?
    ) => {
        #[rstest]
        fn $test_name($fixture: Box<dyn crate::db::DatabaseBackend>) {
            let $result = crate::test_utils::execute_cmd($cmd, $fixture.as_ref())
                .expect("Execute should succeed");
            $body
        }
    };
}

/// Generate a test that expects a command to produce an empty collection.
#[macro_export]
macro_rules! execute_no_match_test {
    (
        test_name: $test_name:ident,
        fixture: $fixture:ident,
        cmd: $cmd:expr,
        empty_field: $field:ident $(,)?
    ) => {
        #[rstest]
        fn $test_name($fixture: Box<dyn crate::db::DatabaseBackend>) {
            let result = crate::test_utils::execute_cmd($cmd, $fixture.as_ref())
                .expect("Execute should succeed");
            assert!(result.$field.is_empty(), concat!("Expected empty ", stringify!($field)));
        }
    };
}

/// Generate a test that verifies command execution against a database
/// without relations fails.
#[macro_export]
macro_rules! execute_empty_db_test {
    (
        cmd_type: $cmd_type:ty,
        cmd: $cmd:expr $(,)?
    ) => {
        #[rstest]
        fn test_empty_db() {
            let cmd: $cmd_type = $cmd;
            let result = crate::test_utils::execute_on_empty_db(cmd);
            assert!(result.is_err());
        }
    };
}

// =============================================================================
// Output Test Macros
// =============================================================================

/// Generate a test that verifies table output matches expected string.
///
/// Works with rstest fixtures by accepting a fixture parameter.
///
/// # Example
/// ```ignore
/// output_table_test! {
///     test_name: test_to_table_empty,
///     fixture: empty_result,
///     fixture_type: FieldSearchResult,
///     expected: EMPTY_TABLE,
/// }
/// ```
#[macro_export]
macro_rules! output_table_test {
    (
        test_name: $test_name:ident,
        fixture: $fixture:ident,
        fixture_type: $fixture_type:ty,
        expected: $expected:expr $(,)?
    ) => {
        #[rstest]
        fn $test_name($fixture: $fixture_type) {
            use crate::output::Outputable;
            assert_eq!($fixture.to_table(), $expected);
        }
    };
}

/// Generate a test that verifies JSON output is valid and contains expected fields.
///
/// # Example
/// ```ignore
/// output_json_test! {
///     test_name: test_format_json,
///     fixture: single_result,
///     fixture_type: FieldSearchResult,
///     assertions: {
///         "query": "bio",
///     },
/// }
/// ```
#[macro_export]
macro_rules! output_json_test {
    (
        test_name: $test_name:ident,
        fixture: $fixture:ident,
        fixture_type: $fixture_type:ty,
        assertions: { $($field:literal : $expected:expr),* $(,)? } $(,)?
    ) => {
        #[rstest]
        fn $test_name($fixture: $fixture_type) {
            use crate::output::{Outputable, OutputFormat};
            let output = $fixture.format(OutputFormat::Json);
            let parsed: serde_json::Value = serde_json::from_str(&output)
                .expect("Should produce valid JSON");
            $(
                assert_eq!(parsed[$field], $expected, concat!("JSON field mismatch: ", $field));
            )*
        }
    };
}

/// Generate a test that verifies Toon output contains expected strings.
#[macro_export]
macro_rules! output_toon_test {
    (
        test_name: $test_name:ident,
        fixture: $fixture:ident,
        fixture_type: $fixture_type:ty,
        contains: [$($needle:literal),* $(,)?] $(,)?
    ) => {
        #[rstest]
        fn $test_name($fixture: $fixture_type) {
            use crate::output::{Outputable, OutputFormat};
            let output = $fixture.format(OutputFormat::Toon);
            $(
                assert!(output.contains($needle), concat!("Toon output should contain: ", $needle));
            )*
        }
    };
}
