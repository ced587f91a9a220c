//! Progress reporting

use indicatif::{HumanBytes, ProgressBar, ProgressDrawTarget, ProgressStyle};

/// Single-line overwriting progress display for a mirror run.
///
/// The mirror core reports (visited, total) pairs through a callback; this
/// type owns the rendering so the core never touches the terminal.
pub struct SyncProgress {
    bar: ProgressBar,
}

impl SyncProgress {
    /// Create a progress display sized to the precomputed file total
    pub fn new(total: u64) -> Self {
        let bar = ProgressBar::new(total);
        if let Ok(style) =
            ProgressStyle::with_template("{bar:30.cyan/blue} Copied {pos}/{len} files")
        {
            bar.set_style(style.progress_chars("=>-"));
        }
        Self { bar }
    }

    /// Create a display that renders nothing (quiet mode)
    pub fn hidden(total: u64) -> Self {
        let bar = ProgressBar::with_draw_target(Some(total), ProgressDrawTarget::hidden());
        Self { bar }
    }

    /// Move the bar to the given visited count
    pub fn update(&self, visited: u64) {
        self.bar.set_position(visited);
    }

    /// Clear the bar and print the final summary line
    pub fn finish(&self, copied: u64, visited: u64, bytes: u64) {
        self.bar.finish_and_clear();
        if self.bar.is_hidden() {
            return;
        }
        println!(
            "{} copied {} of {} files ({})",
            console::style("Done:").green().bold(),
            copied,
            visited,
            HumanBytes(bytes)
        );
    }
}
