use super::compositor::{Cell, HEIGHT, Layer, WIDTH};
use crate::palette::{PARTICLE_GLYPHS, PARTICLE_TINTS, Tint};
use crate::rng::{RandomSource, pick};

const GRAVITY: f32 = 0.3;
// Velocity is applied in quarter steps so bursts spread over several ticks
const STEP_SCALE: f32 = 0.25;

const MIN_PARTICLES: u32 = 15;
const MAX_PARTICLES: u32 = 25;
const MIN_SPEED: f32 = 2.0;
const MAX_SPEED: f32 = 6.0;
const MIN_LIFE: u32 = 8;
const MAX_LIFE: u32 = 15;

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub life: u32,
    pub glyph: char,
    pub tint: Tint,
}

impl Particle {
    fn step(&mut self) {
        self.x += self.vx * STEP_SCALE;
        self.y += self.vy * STEP_SCALE;
        self.vy += GRAVITY;
        self.life -= 1;
    }

    /// Screen cell under the particle, if it is on screen.
    fn cell(&self) -> Option<(usize, usize)> {
        let on_screen = (0.0..WIDTH as f32).contains(&self.x) && (0.0..HEIGHT as f32).contains(&self.y);
        on_screen.then(|| (self.x as usize, self.y as usize))
    }
}

/// The burst of one firework.
#[derive(Debug, Default)]
pub struct ParticleField {
    particles: Vec<Particle>,
}

impl ParticleField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Burst at the origin: 15 to 25 particles flying out in random
    /// directions. Returns how many were created.
    pub fn spawn<R: RandomSource + ?Sized>(&mut self, rng: &mut R, origin_x: f32, origin_y: f32) -> usize {
        let count = rng.int(MIN_PARTICLES, MAX_PARTICLES) as usize;
        self.particles.reserve(count);

        for _ in 0..count {
            let angle = rng.uniform(0.0, 360.0).to_radians();
            let speed = rng.uniform(MIN_SPEED, MAX_SPEED);
            let tint = *pick(rng, &PARTICLE_TINTS);
            let life = rng.int(MIN_LIFE, MAX_LIFE);
            let glyph = *pick(rng, &PARTICLE_GLYPHS);

            self.particles.push(Particle {
                x: origin_x,
                y: origin_y,
                vx: speed * angle.cos(),
                vy: speed * angle.sin(),
                life,
                glyph,
                tint,
            });
        }
        count
    }

    #[cfg(test)]
    pub fn push(&mut self, particle: Particle) {
        self.particles.push(particle);
    }

    /// Move every particle one tick and draw the survivors. Particles that
    /// run out of life this tick are dropped without being drawn; off-screen
    /// particles keep ageing but are not drawn.
    pub fn advance(&mut self) -> Layer {
        let mut layer = Layer::empty();

        self.particles.retain_mut(|particle| {
            if particle.life == 0 {
                return false;
            }
            particle.step();
            if particle.life == 0 {
                return false;
            }
            if let Some((x, y)) = particle.cell() {
                layer.plot(x, y, Cell::new(particle.glyph, particle.tint));
            }
            true
        });

        layer
    }

    #[cfg(test)]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}
