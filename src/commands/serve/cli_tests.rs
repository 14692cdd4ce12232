//! CLI parsing tests for serve command.

#[cfg(test)]
mod tests {
    use crate::cli::Args;
    use clap::Parser;
    use rstest::rstest;

    crate::cli_defaults_test! {
        command: "serve",
        variant: Serve,
        required_args: [],
        defaults: {
            bind: None,
        },
    }

    crate::cli_option_test! {
        command: "serve",
        variant: Serve,
        test_name: test_serve_with_bind,
        args: ["--bind", "0.0.0.0:8080"],
        field: bind,
        expected: Some("0.0.0.0:8080".to_string()),
    }
}
