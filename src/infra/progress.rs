use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};

use crate::infra::metrics::Phase;

/// A progress bar over the `batches` mini-batches of one phase.
pub fn phase_bar(phase: Phase, epoch: usize, batches: usize) -> Result<ProgressBar> {
    let bar = ProgressBar::new(batches as u64);
    bar.set_style(
        ProgressStyle::default_bar()
            .template("{prefix:>20} [{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len}")?,
    );
    bar.set_prefix(format!("{phase} epoch {epoch}"));
    Ok(bar)
}
