use std::io::{self, Stderr, Stdout, Write};

#[cfg(test)]
#[path = "console_tests.rs"]
mod tests;

/// How much the CLI prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Nothing is printed; only the exit code reports the outcome
    Quiet,

    /// Results and failures are printed
    Normal,

    /// Progress messages are printed as well
    Verbose,
}

impl OutputMode {
    /// Picks the mode from the `--quiet` and `--verbose` flags; quiet wins.
    pub fn from_flags(quiet: bool, verbose: bool) -> Self {
        if quiet {
            OutputMode::Quiet
        } else if verbose {
            OutputMode::Verbose
        } else {
            OutputMode::Normal
        }
    }
}

/// User-facing output. Success and progress go to `out`, failures to `err`.
///
/// Write failures, such as a closed pipe, are ignored.
pub struct Console<O: Write, E: Write> {
    mode: OutputMode,
    out: O,
    err: E,
}

impl Console<Stdout, Stderr> {
    pub fn stdio(mode: OutputMode) -> Self {
        Self::new(mode, io::stdout(), io::stderr())
    }
}

impl<O: Write, E: Write> Console<O, E> {
    pub fn new(mode: OutputMode, out: O, err: E) -> Self {
        Self { mode, out, err }
    }

    pub fn success(&mut self, message: &str) {
        if self.mode == OutputMode::Quiet {
            return;
        }

        let _ = writeln!(self.out, "{}", message);
    }

    pub fn error(&mut self, message: &str) {
        if self.mode == OutputMode::Quiet {
            return;
        }

        let _ = writeln!(self.err, "{}", message);
    }

    pub fn verbose(&mut self, message: &str) {
        if self.mode != OutputMode::Verbose {
            return;
        }

        let _ = writeln!(self.out, "{}", message);
    }

    /// Gives back the writers, mostly so tests can inspect what was printed.
    pub fn into_parts(self) -> (O, E) {
        (self.out, self.err)
    }
}
