//! The firework show: rockets climb, burst into particles, and every tick the
//! live units are composited into one 30x120 sky handed to a [`FrameSink`].

pub mod compositor;
pub mod particle;
pub mod unit;

use crate::error::Result;
use crate::pacing::Pacer;
use crate::rng::RandomSource;
use compositor::{FrameBuffer, SceneCompositor};
use std::time::{Duration, Instant};
use unit::FireworkUnit;

pub const TOTAL_TICKS: u32 = 90;
pub const TICK: Duration = Duration::from_millis(33);
pub const LAUNCH_ROW: u32 = 25;

/// Tick at which a volley goes up, and the columns it launches from.
pub type Volley = (u32, &'static [usize]);

pub const SCHEDULE: &[Volley] = &[
    (10, &[20, 40, 60, 80]),
    (25, &[30, 70]),
    (40, &[15, 45, 75, 95]),
    (55, &[35, 65]),
];

const FOOTER: &str = "🎈 Get ready for your special message! 🎈";

pub fn caption_for(tick: u32) -> &'static str {
    match tick {
        0..30 => "🎆 BIRTHDAY FIREWORKS SPECTACULAR! 🎆",
        30..60 => "✨ CELEBRATING YOU! ✨",
        _ => "🎉 LET THE CELEBRATION BEGIN! 🎉",
    }
}

pub fn footer_for(tick: u32) -> Option<&'static str> {
    (tick > 60).then_some(FOOTER)
}

/// Everything needed to draw one tick.
#[derive(Debug)]
pub struct Frame<'a> {
    pub tick: u32,
    pub caption: &'static str,
    pub sky: &'a FrameBuffer,
    pub footer: Option<&'static str>,
}

/// Something that can put a frame on screen.
pub trait FrameSink {
    fn present(&mut self, frame: &Frame<'_>) -> Result<()>;
}

/// Runs the launch schedule over a fixed number of ticks.
pub struct AnimationDirector<R> {
    rng: R,
    schedule: &'static [Volley],
    total_ticks: u32,
    units: Vec<FireworkUnit>,
    compositor: SceneCompositor,
}

impl<R: RandomSource> AnimationDirector<R> {
    pub fn new(rng: R) -> Self {
        Self::with_schedule(rng, SCHEDULE, TOTAL_TICKS)
    }

    pub fn with_schedule(rng: R, schedule: &'static [Volley], total_ticks: u32) -> Self {
        Self {
            rng,
            schedule,
            total_ticks,
            units: Vec::new(),
            compositor: SceneCompositor::new(),
        }
    }

    /// Simulate one tick: launch any scheduled volley, move every unit,
    /// composite, then drop burnt-out units.
    pub fn step(&mut self, tick: u32) -> Frame<'_> {
        let schedule = self.schedule;
        for (_, columns) in schedule.iter().filter(|(at, _)| *at == tick) {
            log::debug!("tick {tick}: launching {} rockets", columns.len());
            for &column in columns.iter() {
                self.units.push(FireworkUnit::new(&mut self.rng, column, LAUNCH_ROW));
            }
        }

        self.compositor.begin();
        for unit in &mut self.units {
            let layer = unit.update(&mut self.rng);
            self.compositor.merge(&layer);
        }
        self.units.retain(|unit| !unit.is_exhausted());

        Frame {
            tick,
            caption: caption_for(tick),
            sky: self.compositor.frame(),
            footer: footer_for(tick),
        }
    }

    /// Play the whole show into `sink`, holding each tick to `TICK`.
    /// Stops early, with `Interrupted`, when the pacer reports a stop.
    pub fn run<S, P>(&mut self, sink: &mut S, pacer: &mut P) -> Result<()>
    where
        S: FrameSink + ?Sized,
        P: Pacer + ?Sized,
    {
        for tick in 0..self.total_ticks {
            pacer.checkpoint()?;
            let started = Instant::now();

            let frame = self.step(tick);
            sink.present(&frame)?;

            pacer.pause(TICK.saturating_sub(started.elapsed()))?;
        }
        log::debug!("fireworks finished with {} units still live", self.units.len());
        Ok(())
    }

    #[cfg(test)]
    pub fn units(&self) -> &[FireworkUnit] {
        &self.units
    }
}
