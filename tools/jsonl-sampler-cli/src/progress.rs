use indicatif::{ProgressBar, ProgressStyle};
use jsonl_sampler::prelude::Progress;

/// Resolution of the bar; library progress is a fraction.
const STEPS: u64 = 1000;

const TEMPLATE: &str = "  ⏳ {msg:<10} [{bar:40.cyan/blue}] {percent:>3}% ({elapsed})";

/// Draws library progress updates as a terminal progress bar on stderr.
pub struct BarProgress {
    bar: ProgressBar,
}

impl BarProgress {
    pub fn new(message: &'static str) -> Self {
        let style = ProgressStyle::with_template(TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=> ");

        let bar = ProgressBar::new(STEPS);
        bar.set_style(style);
        bar.set_message(message);
        Self { bar }
    }

    /// Removes the bar from the terminal.
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

impl Progress for BarProgress {
    fn report_progress(&self, progress: f64) {
        self.bar
            .set_position((progress.clamp(0.0, 1.0) * STEPS as f64).round() as u64);
    }
}
