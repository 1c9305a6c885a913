use crate::error::Result;
use crate::pacing::Pacer;
use crate::ui::Console;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::io::Write;
use std::time::Duration;

const STEPS: u64 = 100;
const STEP: Duration = Duration::from_millis(30);

/// Transient spinner shown while "preparing" the show.
pub fn loading_screen<W, P>(console: &mut Console<W>, pacer: &mut P, target: ProgressDrawTarget) -> Result<()>
where
    W: Write,
    P: Pacer + ?Sized,
{
    console.clear()?;

    let bar = ProgressBar::with_draw_target(Some(STEPS), target);
    bar.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg:.magenta.bold}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    bar.set_message("Preparing the celebratory data matrix...");
    bar.enable_steady_tick(Duration::from_millis(100));

    let result = (0..STEPS).try_for_each(|_| {
        bar.inc(1);
        pacer.pause(STEP)
    });
    bar.finish_and_clear();
    result
}
