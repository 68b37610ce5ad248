//! The "reading..." pause shown before a question goes to the provider.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use rand::Rng;

/// Lower bound of the thinking pause, in milliseconds.
const THINKING_MIN_MS: u64 = 400;

/// Upper bound of the thinking pause, exclusive.
const THINKING_MAX_MS: u64 = 700;

/// Spin up the reading indicator.
pub fn start() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
            .template("{spinner:.magenta} {msg}")
            .unwrap(),
    );
    spinner.set_message("reading...");
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
}

/// Wait out the randomized thinking window before any network call.
pub async fn pause() {
    let ms = rand::thread_rng().gen_range(THINKING_MIN_MS..THINKING_MAX_MS);
    tokio::time::sleep(Duration::from_millis(ms)).await;
}
