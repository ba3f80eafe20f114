//! The live organism collection and the four per-tick phases that act on it.
//!
//! Phases run in a fixed order: lifecycle, flocking, feeding, combat. Every phase
//! walks the collection in list order, and feeding and combat apply their effects
//! immediately, so later organisms in a pass see what earlier ones changed.

use bevy_ecs::prelude::*;
use glam::DVec2;
use rand::Rng;
use tracing::trace;

use crate::config::SimulationConfig;
use super::food::FoodField;
use super::organism::Organism;

/// Births and deaths produced by one lifecycle pass.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LifecycleOutcome {
    pub births: usize,
    pub deaths: usize,
}

#[derive(Resource, Debug, Clone, Default)]
pub struct Population {
    organisms: Vec<Organism>,
}

impl Population {
    pub fn new(organisms: Vec<Organism>) -> Self {
        Self { organisms }
    }

    pub fn spawn_initial<R: Rng + ?Sized>(config: &SimulationConfig, rng: &mut R) -> Self {
        let organisms = (0..config.initial_entity_count)
            .map(|_| Organism::spawn_random(rng, config))
            .collect();
        Self { organisms }
    }

    pub fn organisms(&self) -> &[Organism] {
        &self.organisms
    }

    pub fn push(&mut self, organism: Organism) {
        self.organisms.push(organism);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Organism> {
        self.organisms.iter()
    }

    pub fn len(&self) -> usize {
        self.organisms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.organisms.is_empty()
    }

    /// Moves, ages and culls every organism, then rolls survivors for reproduction.
    ///
    /// The list is rebuilt: survivors keep their relative order and each child
    /// lands directly behind its parent. Children do not roll this tick.
    pub fn run_lifecycle<R: Rng + ?Sized>(
        &mut self,
        config: &SimulationConfig,
        rng: &mut R,
    ) -> LifecycleOutcome {
        let previous = std::mem::take(&mut self.organisms);
        let mut next = Vec::with_capacity(previous.len());
        let mut offspring = Vec::new();
        let mut outcome = LifecycleOutcome::default();

        for mut organism in previous {
            organism.move_within(config.world_dimensions);
            if !organism.age_and_decay(config) {
                outcome.deaths += 1;
                continue;
            }

            if rng.gen::<f64>() < config.reproduce_probability
                && organism.reproduce(&mut offspring, config, rng)
            {
                outcome.births += 1;
                trace!(kind = ?organism.kind, energy = organism.energy, "Organism reproduced");
            }

            next.push(organism);
            next.append(&mut offspring);
        }

        self.organisms = next;
        outcome
    }

    /// Nudges each organism toward the centroid of same-kind neighbours within
    /// `cluster_radius` (itself included). Reads positions only.
    pub fn apply_cohesion(&mut self, config: &SimulationConfig) {
        for i in 0..self.organisms.len() {
            let me = &self.organisms[i];
            let (sum, count) = self
                .organisms
                .iter()
                .filter(|other| other.kind == me.kind && me.distance_to(other.position) < config.cluster_radius)
                .fold((DVec2::ZERO, 0usize), |(sum, count), other| (sum + other.position, count + 1));

            if count > 0 {
                let centroid = sum / count as f64;
                let nudge = (centroid - me.position) * config.cohesion_gain;
                self.organisms[i].velocity += nudge;
            }
        }
    }

    /// Each organism eats at most the first food item within `eat_radius`.
    /// Consumed items vanish at once, so earlier organisms get first pick.
    /// Returns how many items were consumed.
    pub fn feed(&mut self, food: &mut FoodField, config: &SimulationConfig) -> usize {
        let mut consumed = 0;
        for organism in &mut self.organisms {
            if let Some(index) = food.first_within(organism.position, config.eat_radius) {
                organism.eat(config);
                food.remove(index);
                consumed += 1;
            }
        }
        consumed
    }

    /// Visits every ordered pair of rival organisms within `attack_radius`.
    /// A strictly stronger attacker absorbs the defender's energy and leaves it at
    /// zero; updates apply immediately. Returns the number of organisms drained.
    pub fn resolve_combat(&mut self, config: &SimulationConfig) -> usize {
        let mut kills = 0;
        let count = self.organisms.len();

        for i in 0..count {
            for j in 0..count {
                let attacker = &self.organisms[i];
                let defender = &self.organisms[j];
                if attacker.kind == defender.kind
                    || attacker.distance_to(defender.position) >= config.attack_radius
                    || attacker.energy <= defender.energy
                {
                    continue;
                }

                let spoils = defender.energy;
                self.organisms[i].energy += spoils;
                self.organisms[j].energy = 0.0;
                if spoils > 0.0 {
                    kills += 1;
                    trace!(attacker = i, defender = j, spoils, "Organism drained a rival");
                }
            }
        }
        kills
    }
}
