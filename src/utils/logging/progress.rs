//! Progress reporting for long-running generation and export stages
//!
//! Bars are drawn with indicatif. Quiet callers (tests, `--no-progress`)
//! get a hidden bar with the same API.

use indicatif::{ProgressBar, ProgressStyle};

/// Default style for a main progress bar
pub const DEFAULT_MAIN_TEMPLATE: &str =
    "{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len} ({per_sec}) {msg}";

/// Create a main progress bar with a standardized style
///
/// # Arguments
/// * `length` - Total length for the progress bar
/// * `description` - Optional description to display as the initial message
/// * `show` - Draw the bar; when false a hidden bar is returned
#[must_use]
pub fn create_main_progress_bar(length: u64, description: Option<&str>, show: bool) -> ProgressBar {
    let pb = if show {
        ProgressBar::new(length)
    } else {
        ProgressBar::hidden()
    };
    match ProgressStyle::default_bar().template(DEFAULT_MAIN_TEMPLATE) {
        Ok(style) => pb.set_style(style.progress_chars("#>-")),
        Err(e) => log::debug!("Falling back to default progress style: {e}"),
    }

    if let Some(desc) = description {
        pb.set_message(desc.to_string());
    }

    pb
}

/// Finish a progress bar and clear it from display
pub fn finish_and_clear(pb: &ProgressBar) {
    pb.finish_and_clear();
}
