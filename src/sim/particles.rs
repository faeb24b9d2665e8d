//! Time-limited point particles
//!
//! One generic collection handles exhaust, ground smoke and explosion debris;
//! only the emitter parameters differ. Particles are purely cosmetic and never
//! feed back into the rocket physics.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Which effect a particle collection renders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParticleKind {
    Exhaust,
    GroundSmoke,
    Explosion,
}

/// Per-tick motion rule applied to every particle of a collection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Drift {
    /// Stays where it was spawned
    Still,
    /// Falls a random distance in `min..max` each tick
    Fall { min: f32, max: f32 },
    /// Expands by `rate` each tick
    Grow { rate: f32 },
    /// Moves by its own spawn velocity each tick
    Ballistic,
}

/// Emission parameters for one particle kind
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EmitterParams {
    pub size_min: f32,
    pub size_max: f32,
    /// Ticks a particle lives after spawning
    pub initial_life: u32,
    pub drift: Drift,
    /// Anchor offset, uniform in `[-jitter, jitter]` per axis
    pub jitter: Vec2,
    /// Spawn velocity, uniform in `[-spread, spread]` per axis
    pub spread: f32,
    /// Alpha contributed by each remaining life tick (out of 255)
    pub alpha_per_life: f32,
}

impl ParticleKind {
    /// Default emitter parameters for this kind
    pub fn params(&self) -> EmitterParams {
        match self {
            ParticleKind::Exhaust => EmitterParams {
                size_min: 3.0,
                size_max: 6.0,
                initial_life: 30,
                drift: Drift::Fall { min: 1.0, max: 2.0 },
                jitter: Vec2::ZERO,
                spread: 0.0,
                alpha_per_life: 8.0,
            },
            ParticleKind::GroundSmoke => EmitterParams {
                size_min: 10.0,
                size_max: 20.0,
                initial_life: 60,
                drift: Drift::Grow { rate: 0.5 },
                jitter: Vec2::ZERO,
                spread: 0.0,
                alpha_per_life: 3.0,
            },
            ParticleKind::Explosion => EmitterParams {
                size_min: 4.0,
                size_max: 8.0,
                initial_life: 60,
                drift: Drift::Ballistic,
                jitter: Vec2::ZERO,
                spread: 2.0,
                alpha_per_life: 4.0,
            },
        }
    }
}

/// A single cosmetic particle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    /// Zero for kinds that do not move ballistically
    pub vel: Vec2,
    pub size: f32,
    /// Ticks remaining; the particle is dropped when this reaches 0
    pub life: u32,
}

impl Particle {
    /// Opacity in `[0, 1]`, proportional to remaining life
    #[inline]
    pub fn opacity(&self, alpha_per_life: f32) -> f32 {
        (self.life as f32 * alpha_per_life / 255.0).clamp(0.0, 1.0)
    }

    fn advance<R: Rng>(&mut self, drift: Drift, rng: &mut R) {
        match drift {
            Drift::Still => {}
            Drift::Fall { min, max } => self.pos.y += uniform(rng, min, max),
            Drift::Grow { rate } => self.size += rate,
            Drift::Ballistic => self.pos += self.vel,
        }
        self.life = self.life.saturating_sub(1);
    }
}

/// Renderer-facing view of a particle
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ParticleView {
    pub pos: Vec2,
    pub size: f32,
    pub opacity: f32,
}

/// A collection of particles sharing one set of emitter parameters
#[derive(Debug, Clone)]
pub struct ParticleSystem {
    kind: ParticleKind,
    params: EmitterParams,
    particles: Vec<Particle>,
}

impl ParticleSystem {
    pub fn new(kind: ParticleKind) -> Self {
        Self::with_params(kind, kind.params())
    }

    pub fn with_params(kind: ParticleKind, params: EmitterParams) -> Self {
        Self {
            kind,
            params,
            particles: Vec::new(),
        }
    }

    pub fn kind(&self) -> ParticleKind {
        self.kind
    }

    pub fn params(&self) -> &EmitterParams {
        &self.params
    }

    /// Append one particle near `anchor`
    pub fn spawn<R: Rng>(&mut self, anchor: Vec2, rng: &mut R) {
        let p = &self.params;
        let offset = Vec2::new(
            symmetric(rng, p.jitter.x),
            symmetric(rng, p.jitter.y),
        );
        let vel = Vec2::new(symmetric(rng, p.spread), symmetric(rng, p.spread));
        let size = uniform(rng, p.size_min, p.size_max);

        self.particles.push(Particle {
            pos: anchor + offset,
            vel,
            size,
            life: p.initial_life,
        });
    }

    /// Append `count` particles at once (one-shot bursts)
    pub fn spawn_burst<R: Rng>(&mut self, anchor: Vec2, count: usize, rng: &mut R) {
        self.particles.reserve(count);
        for _ in 0..count {
            self.spawn(anchor, rng);
        }
    }

    /// Advance every particle by one tick, then drop the expired ones
    pub fn tick<R: Rng>(&mut self, rng: &mut R) -> &[Particle] {
        let drift = self.params.drift;
        for particle in self.particles.iter_mut() {
            particle.advance(drift, rng);
        }
        self.particles.retain(|p| p.life > 0);
        &self.particles
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Positions, sizes and opacity hints for the renderer
    pub fn views(&self) -> Vec<ParticleView> {
        self.particles
            .iter()
            .map(|p| ParticleView {
                pos: p.pos,
                size: p.size,
                opacity: p.opacity(self.params.alpha_per_life),
            })
            .collect()
    }
}

/// Uniform sample in `[min, max)`; degenerates to `min` for empty ranges
#[inline]
fn uniform<R: Rng>(rng: &mut R, min: f32, max: f32) -> f32 {
    if max > min {
        rng.random_range(min..max)
    } else {
        min
    }
}

/// Uniform sample in `[-half, half]`
#[inline]
fn symmetric<R: Rng>(rng: &mut R, half: f32) -> f32 {
    if half > 0.0 {
        rng.random_range(-half..=half)
    } else {
        0.0
    }
}
