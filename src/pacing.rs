use crate::error::{Result, ShowError};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

// Longest uninterrupted sleep; bounds Ctrl+C latency
const SLICE: Duration = Duration::from_millis(25);

/// Clock the show waits on between steps.
pub trait Pacer {
    /// Wait for `duration`, bailing out with `Interrupted` if a stop was requested.
    fn pause(&mut self, duration: Duration) -> Result<()>;

    /// Check for a pending stop without waiting.
    fn checkpoint(&mut self) -> Result<()> {
        self.pause(Duration::ZERO)
    }
}

/// Shared stop flag, raised by the Ctrl+C handler.
#[derive(Clone, Debug, Default)]
pub struct StopFlag(Arc<AtomicBool>);

impl StopFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn raise(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_raised(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    pub fn check(&self) -> Result<()> {
        if self.is_raised() {
            Err(ShowError::Interrupted)
        } else {
            Ok(())
        }
    }
}

pub struct InterruptiblePacer {
    stop: StopFlag,
}

impl InterruptiblePacer {
    pub fn new(stop: StopFlag) -> Self {
        Self { stop }
    }
}

impl Pacer for InterruptiblePacer {
    fn pause(&mut self, duration: Duration) -> Result<()> {
        let deadline = Instant::now() + duration;
        loop {
            self.stop.check()?;
            let now = Instant::now();
            if now >= deadline {
                return Ok(());
            }
            std::thread::sleep((deadline - now).min(SLICE));
        }
    }
}

/// Test pacer: records requested pauses and never sleeps.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingPacer {
    pub pauses: Vec<Duration>,
    pub interrupt_after: Option<usize>,
}

#[cfg(test)]
impl RecordingPacer {
    pub fn total(&self) -> Duration {
        self.pauses.iter().sum()
    }
}

#[cfg(test)]
impl Pacer for RecordingPacer {
    fn pause(&mut self, duration: Duration) -> Result<()> {
        self.checkpoint()?;
        self.pauses.push(duration);
        Ok(())
    }

    fn checkpoint(&mut self) -> Result<()> {
        match self.interrupt_after {
            Some(limit) if self.pauses.len() >= limit => Err(ShowError::Interrupted),
            _ => Ok(()),
        }
    }
}
