use super::*;
use crate::console::OutputMode;
use git2::{Commit, Oid, Repository, Signature};
use std::fs;
use tempfile::TempDir;

fn args() -> LintArgs {
    LintArgs {
        commit_message: None,
        file: None,
        hash: None,
        from_hash: None,
        to_hash: "HEAD".to_string(),
        skip_detail: false,
        hide_input: false,
        max_header_length: None,
        disable_max_header_length: false,
        strip_comments: false,
        config: None,
        fail_soft: false,
    }
}

fn message_args(message: &str) -> LintArgs {
    LintArgs {
        commit_message: Some(message.to_string()),
        ..args()
    }
}

struct Run {
    result: Result<(), CliError>,
    out: String,
    err: String,
}

fn run_in(dir: &Path, args: &LintArgs, mode: OutputMode) -> Run {
    let mut console = Console::new(mode, Vec::new(), Vec::new());
    let result = execute(args, dir, &mut console);
    let (out, err) = console.into_parts();

    Run {
        result,
        out: String::from_utf8(out).unwrap(),
        err: String::from_utf8(err).unwrap(),
    }
}

fn run_lint(args: &LintArgs) -> Run {
    let dir = tempfile::tempdir().unwrap();
    run_in(dir.path(), args, OutputMode::Normal)
}

fn commit(repo: &Repository, message: &str) -> Oid {
    let signature = Signature::now("Test User", "test@example.com").unwrap();
    let tree_id = repo.index().unwrap().write_tree().unwrap();
    let tree = repo.find_tree(tree_id).unwrap();
    let parents: Vec<Commit> = match repo.head() {
        Ok(head) => vec![head.peel_to_commit().unwrap()],
        Err(_) => Vec::new(),
    };
    let parent_refs: Vec<&Commit> = parents.iter().collect();

    repo.commit(
        Some("HEAD"),
        &signature,
        &signature,
        message,
        &tree,
        &parent_refs,
    )
    .unwrap()
}

fn repository_with(messages: &[&str]) -> (TempDir, Vec<Oid>) {
    let dir = tempfile::tempdir().unwrap();
    let repo = Repository::init(dir.path()).unwrap();
    let oids = messages.iter().map(|message| commit(&repo, message)).collect();
    (dir, oids)
}

#[test]
fn test_parse_max_header_length() {
    assert_eq!(parse_max_header_length("72"), Ok(72));
    assert!(parse_max_header_length("0").is_err());
    assert!(parse_max_header_length("-1").is_err());
    assert!(parse_max_header_length("abc").is_err());
}

#[test]
fn test_valid_message_prints_success() {
    let run = run_lint(&message_args("feat: add new feature"));

    assert!(run.result.is_ok());
    assert_eq!(run.out, "Commit validation: successful!\n");
    assert!(run.err.is_empty());
}

#[test]
fn test_invalid_message_prints_errors() {
    let run = run_lint(&message_args("feat(): add new feature"));

    assert!(matches!(run.result, Err(CliError::ValidationFailed(1))));
    assert!(run.out.is_empty());
    assert!(run
        .err
        .starts_with("⧗ Input:\nfeat(): add new feature\n\n✖ Found 1 error(s).\n- Scope cannot be empty.\n"));
    assert!(run.err.contains("Correct commit format:"));
}

#[test]
fn test_skip_detail_prints_generic_failure() {
    let run = run_lint(&LintArgs {
        skip_detail: true,
        ..message_args("feat:add new feature")
    });

    assert!(matches!(run.result, Err(CliError::ValidationFailed(1))));
    assert!(run.err.contains("Commit validation: failed!"));
    assert!(!run.err.contains("✖ Found"));
}

#[test]
fn test_hide_input() {
    let run = run_lint(&LintArgs {
        hide_input: true,
        ..message_args("feat:add new feature")
    });

    assert!(!run.err.contains("⧗ Input:"));
    assert!(run.err.contains("- Description must have a leading space."));
}

#[test]
fn test_fail_soft_reports_but_succeeds() {
    let run = run_lint(&LintArgs {
        fail_soft: true,
        ..message_args("invalid commit message")
    });

    assert!(run.result.is_ok());
    assert!(run
        .err
        .contains("- Commit message does not follow conventional commits format."));
}

#[test]
fn test_quiet_mode_prints_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let run = run_in(
        dir.path(),
        &message_args("invalid commit message"),
        OutputMode::Quiet,
    );

    assert!(matches!(run.result, Err(CliError::ValidationFailed(1))));
    assert!(run.out.is_empty());
    assert!(run.err.is_empty());
}

#[test]
fn test_verbose_mode_prints_progress() {
    let dir = tempfile::tempdir().unwrap();
    let run = run_in(
        dir.path(),
        &message_args("feat: add new feature"),
        OutputMode::Verbose,
    );

    assert!(run.out.contains("starting commitlint"));
    assert!(run.out.contains("checking commit message"));
    assert!(run.out.ends_with("Commit validation: successful!\n"));
}

#[test]
fn test_message_is_trimmed() {
    let run = run_lint(&message_args("\n  feat: add new feature  \n\n"));
    assert!(run.result.is_ok());
}

#[test]
fn test_max_header_length_override() {
    let run = run_lint(&LintArgs {
        max_header_length: Some(10),
        ..message_args("feat: add new feature")
    });

    assert!(run.err.contains("- Header length cannot exceed 10 characters."));

    let run = run_lint(&LintArgs {
        disable_max_header_length: true,
        ..message_args(&format!("feat: {}", "a".repeat(100)))
    });
    assert!(run.result.is_ok());
}

#[test]
fn test_config_file_in_working_directory_is_used() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join(".commitlint.toml"), "max_header_length = 10\n").unwrap();

    let run = run_in(
        dir.path(),
        &message_args("feat: add new feature"),
        OutputMode::Normal,
    );

    assert!(run.err.contains("- Header length cannot exceed 10 characters."));
}

#[test]
fn test_max_header_length_flag_overrides_disabled_check_in_file() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join(".commitlint.toml"),
        "disable_max_header_length = true\n",
    )
    .unwrap();

    let run = run_in(
        dir.path(),
        &LintArgs {
            max_header_length: Some(10),
            ..message_args("feat: add new feature")
        },
        OutputMode::Normal,
    );

    assert!(matches!(run.result, Err(CliError::ValidationFailed(1))));
    assert!(run.err.contains("- Header length cannot exceed 10 characters."));
}

#[test]
fn test_invalid_config_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join(".commitlint.toml"), "max_header_length = \"x\"\n").unwrap();

    let run = run_in(
        dir.path(),
        &message_args("feat: add new feature"),
        OutputMode::Normal,
    );

    assert!(matches!(run.result, Err(CliError::ConfigError(_))));
}

#[test]
fn test_file_input_strips_comments() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("COMMIT_EDITMSG"),
        "feat: add new feature\n# Please enter the commit message\n# ------------------------ >8 ------------------------\ndiff --git a/x b/x\n",
    )
    .unwrap();

    let run = run_in(
        dir.path(),
        &LintArgs {
            file: Some(PathBuf::from("COMMIT_EDITMSG")),
            ..args()
        },
        OutputMode::Normal,
    );

    assert!(run.result.is_ok(), "unexpected output: {}", run.err);
}

#[test]
fn test_file_input_shows_stripped_message() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("COMMIT_EDITMSG"),
        "feat():add new feature\n# a comment\n",
    )
    .unwrap();

    let run = run_in(
        dir.path(),
        &LintArgs {
            file: Some(PathBuf::from("COMMIT_EDITMSG")),
            ..args()
        },
        OutputMode::Normal,
    );

    assert!(run.err.starts_with("⧗ Input:\nfeat():add new feature\n\n✖ Found 2 error(s).\n"));
    assert!(!run.err.contains("# a comment"));
}

#[test]
fn test_missing_file_is_an_io_error() {
    let run = run_lint(&LintArgs {
        file: Some(PathBuf::from("does-not-exist.txt")),
        ..args()
    });

    assert!(matches!(run.result, Err(CliError::IoError(_))));
}

#[test]
fn test_hash_input() {
    let (dir, oids) = repository_with(&["feat: first", "feat(): second"]);

    let run = run_in(
        dir.path(),
        &LintArgs {
            hash: Some(oids[0].to_string()),
            ..args()
        },
        OutputMode::Normal,
    );
    assert!(run.result.is_ok());

    let run = run_in(
        dir.path(),
        &LintArgs {
            hash: Some("HEAD".to_string()),
            ..args()
        },
        OutputMode::Normal,
    );
    assert!(matches!(run.result, Err(CliError::ValidationFailed(1))));
}

#[test]
fn test_unknown_hash_is_a_git_error() {
    let (dir, _) = repository_with(&["feat: first"]);

    let run = run_in(
        dir.path(),
        &LintArgs {
            hash: Some("no-such-commit".to_string()),
            ..args()
        },
        OutputMode::Normal,
    );

    assert!(matches!(run.result, Err(CliError::GitError(_))));
}

#[test]
fn test_hash_range_counts_failed_commits() {
    let (dir, oids) = repository_with(&[
        "chore: setup",
        "feat: first",
        "feat(): second",
        "fix:third",
        "docs: fourth",
    ]);

    let run = run_in(
        dir.path(),
        &LintArgs {
            from_hash: Some(oids[1].to_string()),
            ..args()
        },
        OutputMode::Normal,
    );

    assert!(matches!(run.result, Err(CliError::ValidationFailed(2))));
    assert!(run.err.contains("- Scope cannot be empty."));
    assert!(run.err.contains("- Description must have a leading space."));
    assert!(!run.err.contains("chore: setup"));
}

#[test]
fn test_hash_range_all_valid() {
    let (dir, oids) = repository_with(&["feat: first", "fix: second", "docs: third"]);

    let run = run_in(
        dir.path(),
        &LintArgs {
            from_hash: Some(oids[0].to_string()),
            to_hash: oids[1].to_string(),
            ..args()
        },
        OutputMode::Normal,
    );

    assert!(run.result.is_ok());
    assert_eq!(run.out, "Commit validation: successful!\n");
}

#[test]
fn test_no_input_is_invalid_arguments() {
    let dir = tempfile::tempdir().unwrap();
    let mut console = Console::new(OutputMode::Normal, Vec::new(), Vec::new());

    let result = collect_input(&args(), dir.path(), &mut console);

    assert!(matches!(result, Err(CliError::InvalidArguments(_))));
}

#[test]
fn test_collect_input_range() {
    let (dir, oids) = repository_with(&["feat: first", "fix: second"]);
    let mut console = Console::new(OutputMode::Normal, Vec::new(), Vec::new());

    let input = collect_input(
        &LintArgs {
            from_hash: Some(oids[0].to_string()),
            ..args()
        },
        dir.path(),
        &mut console,
    )
    .unwrap();

    assert_eq!(
        input,
        Input::Range(vec!["feat: first".to_string(), "fix: second".to_string()])
    );
}
