use super::*;

fn buffered(mode: OutputMode) -> Console<Vec<u8>, Vec<u8>> {
    Console::new(mode, Vec::new(), Vec::new())
}

fn printed(console: Console<Vec<u8>, Vec<u8>>) -> (String, String) {
    let (out, err) = console.into_parts();
    (
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

#[test]
fn test_output_mode_from_flags() {
    assert_eq!(OutputMode::from_flags(false, false), OutputMode::Normal);
    assert_eq!(OutputMode::from_flags(true, false), OutputMode::Quiet);
    assert_eq!(OutputMode::from_flags(false, true), OutputMode::Verbose);
    assert_eq!(OutputMode::from_flags(true, true), OutputMode::Quiet);
}

#[test]
fn test_normal_mode_prints_success_and_errors() {
    let mut console = buffered(OutputMode::Normal);
    console.success("all good");
    console.error("something broke");
    console.verbose("details");

    let (out, err) = printed(console);
    assert_eq!(out, "all good\n");
    assert_eq!(err, "something broke\n");
}

#[test]
fn test_quiet_mode_prints_nothing() {
    let mut console = buffered(OutputMode::Quiet);
    console.success("all good");
    console.error("something broke");
    console.verbose("details");

    let (out, err) = printed(console);
    assert!(out.is_empty());
    assert!(err.is_empty());
}

#[test]
fn test_verbose_mode_prints_progress_to_stdout() {
    let mut console = buffered(OutputMode::Verbose);
    console.verbose("starting commitlint");
    console.success("all good");

    let (out, err) = printed(console);
    assert_eq!(out, "starting commitlint\nall good\n");
    assert!(err.is_empty());
}
