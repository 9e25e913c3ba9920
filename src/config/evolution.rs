use super::traits::ConfigSection;
use crate::error::BytevolveError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvolutionConfig {
    pub population_size: usize,
    pub num_generations: usize,
    /// Length in bytes of every candidate program.
    pub code_length: usize,
    /// Per-byte replacement probability in [0, 1].
    pub mutation_rate: f64,
    pub tournament_size: usize,
    pub hall_of_fame_size: usize,
    /// Fixed RNG seed for reproducible runs; None seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            num_generations: 100,
            code_length: 100,
            mutation_rate: 0.20,
            tournament_size: 5,
            hall_of_fame_size: 10,
            seed: None,
        }
    }
}

impl ConfigSection for EvolutionConfig {
    fn section_name() -> &'static str {
        "evolution"
    }

    fn validate(&self) -> Result<(), BytevolveError> {
        if self.population_size < 1 {
            return Err(BytevolveError::Configuration(
                "Population size must be at least 1".to_string(),
            ));
        }
        if self.code_length < 1 {
            return Err(BytevolveError::Configuration(
                "Code length must be at least 1".to_string(),
            ));
        }
        if self.mutation_rate < 0.0 || self.mutation_rate > 1.0 {
            return Err(BytevolveError::Configuration(
                "Mutation rate must be between 0 and 1".to_string(),
            ));
        }
        if self.tournament_size < 1 {
            return Err(BytevolveError::Configuration(
                "Tournament size must be at least 1".to_string(),
            ));
        }
        if self.hall_of_fame_size < 1 {
            return Err(BytevolveError::Configuration(
                "Hall of fame size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
