//! CLI parsing tests for import command.

#[cfg(test)]
mod tests {
    use crate::cli::Args;
    use crate::test_utils::create_temp_json_file;
    use clap::Parser;
    use rstest::rstest;

    crate::cli_required_arg_test! {
        command: "import",
        test_name: test_import_requires_file,
        required_arg: "--file",
    }

    crate::cli_error_test! {
        command: "import",
        test_name: test_import_rejects_missing_file,
        args: ["--file", "/nonexistent/directory.json"],
    }

    #[rstest]
    fn test_import_accepts_existing_file() {
        let file = create_temp_json_file("{}");
        let path = file.path().to_str().unwrap();
        let args = Args::try_parse_from(["research_directory", "import", "-f", path]).unwrap();
        match args.command {
            crate::commands::Command::Import(cmd) => {
                assert_eq!(cmd.file, file.path());
            }
            _ => panic!("Expected Import command"),
        }
    }
}
