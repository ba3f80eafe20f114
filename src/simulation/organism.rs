//! A single mobile agent and its per-tick behaviors.

use glam::DVec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::SimulationConfig;
use super::geometry::{random_point, random_symmetric, reflect_off_bounds};

/// Species tag. Same-kind organisms flock together; different kinds fight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Yellow,
    Red,
    Blue,
}

impl Kind {
    pub const ALL: [Kind; 3] = [Kind::Yellow, Kind::Red, Kind::Blue];

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Organism {
    pub position: DVec2,
    pub velocity: DVec2,
    pub kind: Kind,
    pub energy: f64,
    pub age: u32,
}

impl Organism {
    pub fn new(position: DVec2, velocity: DVec2, kind: Kind, energy: f64) -> Self {
        Self {
            position,
            velocity,
            kind,
            energy,
            age: 0,
        }
    }

    /// Random placement, heading and kind, with the configured starting energy.
    pub fn spawn_random<R: Rng + ?Sized>(rng: &mut R, config: &SimulationConfig) -> Self {
        let position = random_point(rng, config.world_dimensions);
        let velocity = random_symmetric(rng, config.initial_speed);
        let kind = Kind::random(rng);
        Self::new(position, velocity, kind, config.initial_energy)
    }

    /// Integrates one step, then reflects off any arena edge that was crossed.
    pub fn move_within(&mut self, world_dimensions: (f64, f64)) {
        self.position += self.velocity;
        reflect_off_bounds(self.position, &mut self.velocity, world_dimensions);
    }

    /// Advances age and burns energy. Returns `false` once the organism has died.
    pub fn age_and_decay(&mut self, config: &SimulationConfig) -> bool {
        self.age = self.age.saturating_add(1);
        self.energy -= config.energy_decay;
        self.is_alive(config)
    }

    pub fn is_alive(&self, config: &SimulationConfig) -> bool {
        self.energy > 0.0 && self.age <= config.max_age
    }

    /// The cap only gates eating; the gain itself is never clipped.
    pub fn eat(&mut self, config: &SimulationConfig) {
        if self.energy < config.max_energy {
            self.energy += config.eat_energy_gain;
        }
    }

    /// Splits energy with a same-kind child appended to `sink`.
    ///
    /// Requires energy strictly above the reproduction threshold. The child is
    /// placed within `reproduction_offset` of the parent on each axis, starts
    /// with the parent's halved energy and draws a fresh velocity.
    pub fn reproduce<R: Rng + ?Sized>(
        &mut self,
        sink: &mut Vec<Organism>,
        config: &SimulationConfig,
        rng: &mut R,
    ) -> bool {
        if self.energy <= config.reproduction_energy {
            return false;
        }

        self.energy /= 2.0;
        let position = self.position + random_symmetric(rng, config.reproduction_offset);
        let velocity = random_symmetric(rng, config.initial_speed);
        sink.push(Organism::new(position, velocity, self.kind, self.energy));
        true
    }

    #[inline]
    pub fn distance_to(&self, point: DVec2) -> f64 {
        self.position.distance(point)
    }
}
