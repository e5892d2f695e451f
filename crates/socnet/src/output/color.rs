//! Terminal styling for socnet output.
//!
//! Every helper returns the text unchanged when colors are disabled.
//! Styles in use:
//!   - green: a network file loaded
//!   - red: a load failed or menu input was rejected
//!   - yellow: an empty path or recommendation list, or no network loaded yet
//!   - cyan: user ids
//!   - dimmed: path arrows and mutual friend counts
//!   - bold: section headers

use crate::config::OutputConfig;
use colored::{ColoredString, Colorize};

fn paint(text: &str, config: &OutputConfig, style: fn(&str) -> ColoredString) -> String {
    if config.use_colors {
        style(text).to_string()
    } else {
        text.to_string()
    }
}

/// Style a success message (green).
pub fn success(text: &str, config: &OutputConfig) -> String {
    paint(text, config, |t| t.green())
}

/// Style an error message (red).
pub fn error(text: &str, config: &OutputConfig) -> String {
    paint(text, config, |t| t.red())
}

/// Style a warning (yellow).
pub fn warning(text: &str, config: &OutputConfig) -> String {
    paint(text, config, |t| t.yellow())
}

pub(crate) fn colorize_user(user: &str, config: &OutputConfig) -> String {
    paint(user, config, |t| t.cyan())
}

pub(crate) fn dimmed(text: &str, config: &OutputConfig) -> String {
    paint(text, config, |t| t.dimmed())
}

pub(crate) fn bold(text: &str, config: &OutputConfig) -> String {
    paint(text, config, |t| t.bold())
}
