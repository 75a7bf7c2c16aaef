use indicatif::{ProgressBar, ProgressStyle};
use tournament::Progress;

pub struct GamesProgressBar {
    bar: ProgressBar,
}

impl GamesProgressBar {
    pub fn new(num_games: usize) -> Result<Self, Box<dyn std::error::Error>> {
        let bar = ProgressBar::new(num_games as u64);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.cyan} {pos}/{len} [{wide_bar:.cyan/blue}] {elapsed_precise} | {msg}")?,
        );
        Ok(Self { bar })
    }

    /// For visual mode, where the board owns the terminal.
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    pub fn finish(&self) {
        self.bar.finish();
    }
}

impl Progress for GamesProgressBar {
    fn game_finished(&mut self, completed: usize, total: usize) {
        self.bar.set_message(format!("{}% done", 100 * completed / total.max(1)));
        self.bar.set_position(completed as u64);
    }
}
