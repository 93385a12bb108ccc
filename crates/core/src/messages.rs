//! Fixed console messages shared by the command-line front ends.

use indoc::indoc;

/// Printed when every linted message passed
pub const VALIDATION_SUCCESSFUL: &str = "Commit validation: successful!";

/// Printed instead of the itemized list when detailed checks were skipped
pub const VALIDATION_FAILED: &str = "Commit validation: failed!";

/// Reminder of the expected header shape, printed after a failure
pub const CORRECT_OUTPUT_FORMAT: &str = indoc! {"
    Correct commit format:
    ---------------------------------------
    <type>(<optional scope>): <description>
    ---------------------------------------
    For more details visit https://www.conventionalcommits.org/en/v1.0.0/"};
