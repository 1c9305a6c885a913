use super::compositor::{Cell, Layer};
use super::particle::ParticleField;
use crate::palette::{ROCKET_MARKERS, ROCKET_TINT};
use crate::rng::RandomSource;

const MIN_BURST_ROW: u32 = 8;
const MAX_BURST_ROW: u32 = 15;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Ascending,
    Exploded,
}

/// A single firework: a rocket climbing one row per tick until it reaches
/// its burst row, then a particle cloud.
#[derive(Debug)]
pub struct FireworkUnit {
    column: usize,
    height: u32,
    burst_row: u32,
    phase: Phase,
    field: ParticleField,
}

impl FireworkUnit {
    pub fn new<R: RandomSource + ?Sized>(rng: &mut R, column: usize, launch_row: u32) -> Self {
        let burst_row = rng.int(MIN_BURST_ROW, MAX_BURST_ROW);
        Self::with_burst_row(column, launch_row, burst_row)
    }

    pub fn with_burst_row(column: usize, launch_row: u32, burst_row: u32) -> Self {
        Self {
            column,
            height: launch_row,
            burst_row,
            phase: Phase::Ascending,
            field: ParticleField::new(),
        }
    }

    /// Advance one tick in whatever phase the unit is in.
    pub fn update<R: RandomSource + ?Sized>(&mut self, rng: &mut R) -> Layer {
        match self.phase {
            Phase::Ascending => self.launch(rng),
            Phase::Exploded => self.advance(),
        }
    }

    /// Climb one row and draw the rocket, or burst once the burst row is
    /// reached. The burst tick draws nothing.
    pub fn launch<R: RandomSource + ?Sized>(&mut self, rng: &mut R) -> Layer {
        let mut layer = Layer::empty();
        if self.phase != Phase::Ascending {
            return layer;
        }

        if self.height > self.burst_row {
            self.height -= 1;
            let marker = if rng.coin() { ROCKET_MARKERS[0] } else { ROCKET_MARKERS[1] };
            layer.plot(self.column, self.height as usize, Cell::new(marker, ROCKET_TINT));
        } else {
            self.phase = Phase::Exploded;
            let spawned = self.field.spawn(rng, self.column as f32, self.height as f32);
            log::trace!("firework at column {} burst at row {} into {} particles", self.column, self.height, spawned);
        }
        layer
    }

    /// Move the burst particles one tick.
    pub fn advance(&mut self) -> Layer {
        if self.phase != Phase::Exploded {
            return Layer::empty();
        }
        self.field.advance()
    }

    /// Burst and burnt out; the director drops it.
    pub fn is_exhausted(&self) -> bool {
        self.phase == Phase::Exploded && self.field.is_empty()
    }

    #[cfg(test)]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[cfg(test)]
    pub fn column(&self) -> usize {
        self.column
    }

    #[cfg(test)]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[cfg(test)]
    pub fn burst_row(&self) -> u32 {
        self.burst_row
    }

    #[cfg(test)]
    pub fn field(&self) -> &ParticleField {
        &self.field
    }
}
