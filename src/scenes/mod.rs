//! The scripted parts of the show around the fireworks.

pub mod art;
pub mod finale;
pub mod letter;
pub mod loading;
pub mod skit;

use crate::error::Result;
use crate::pacing::Pacer;
use crate::palette::Tint;
use crate::ui::{Console, Style};
use std::io::Write;
use std::time::Duration;

/// One line of a timed script: printed bold, then held.
#[derive(Clone, Copy, Debug)]
pub struct Step {
    pub text: &'static str,
    pub tint: Tint,
    pub hold: Duration,
}

const fn step(text: &'static str, tint: Tint, hold_ms: u64) -> Step {
    Step {
        text,
        tint,
        hold: Duration::from_millis(hold_ms),
    }
}

pub fn play_steps<W, P>(console: &mut Console<W>, pacer: &mut P, steps: &[Step]) -> Result<()>
where
    W: Write,
    P: Pacer + ?Sized,
{
    for step in steps {
        console.line(step.text, Style::tint(step.tint).bold())?;
        pacer.pause(step.hold)?;
    }
    Ok(())
}
