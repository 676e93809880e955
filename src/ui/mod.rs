//! User interface module - progress and result reporting.
//!
//! - `formatter` - Pure formatting functions
//! - This module - Reporting a whole derivation

pub mod formatter;

pub use formatter::{
    display_error, display_outputs, display_status, display_success, display_warning,
    format_outputs,
};

use crate::analyzer::Derivation;

/// Report warnings and results of a derivation to the user.
pub fn report_derivation(derivation: &Derivation) {
    for warning in &derivation.warnings {
        display_warning(warning);
    }
    display_outputs(&derivation.outputs);
}
