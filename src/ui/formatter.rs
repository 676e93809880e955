//! Pure formatting functions for UI output.
//!
//! Everything here writes to stderr so stdout stays free for the version
//! outputs consumed by later build steps.

use console::style;

use crate::boundary::DerivationWarning;
use crate::output::{VersionOutputs, BUILD_NUMBER, SHORT_VERSION_STRING};

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    eprintln!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    eprintln!("{} {}", style("→").yellow(), message);
}

/// Display a derivation warning to the user.
pub fn display_warning(warning: &DerivationWarning) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), warning);
}

/// Render the derived values as a short summary block.
pub fn format_outputs(outputs: &VersionOutputs) -> String {
    format!(
        "{}\n  {}: {}\n  {}: {}",
        style("Derived versions:").bold(),
        SHORT_VERSION_STRING,
        style(&outputs.short_version).green(),
        BUILD_NUMBER,
        style(outputs.build_number).green()
    )
}

/// Display the derived values.
pub fn display_outputs(outputs: &VersionOutputs) {
    eprintln!("\n{}\n", format_outputs(outputs));
}
