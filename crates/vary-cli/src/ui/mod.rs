//! Terminal UI helpers: status lines on stderr and report formatting.
//!
//! # Examples
//!
//! ```no_run
//! use vary_cli::ui;
//!
//! ui::init_colors(false);
//! ui::info("Resolving variant...");
//! ui::success("Manifest written");
//! ```

mod format;
mod messages;

use std::sync::OnceLock;

pub use format::{format_resolved, format_variant_list};
pub use messages::{error, info, success, warning};

static COLORS: OnceLock<bool> = OnceLock::new();

/// Decide once whether status lines are colored.
///
/// `--no-color` wins; otherwise `NO_COLOR`, `FORCE_COLOR` and terminal
/// detection apply (see [`crate::logger::should_use_colors`]).
pub fn init_colors(no_color: bool) {
    let _ = COLORS.set(!no_color && crate::logger::should_use_colors());
}

pub(crate) fn colors_enabled() -> bool {
    *COLORS.get_or_init(crate::logger::should_use_colors)
}
