use crate::config::EvolutionConfig;
use crate::engines::evaluation::Evaluator;
use crate::engines::generation::{
    genome::{Candidate, Genome},
    hall_of_fame::{get_canonical_code_string, EliteCandidate, HallOfFame},
    operators::{crossover, mutate, random_genome, tournament_selection},
};
use crate::error::{BytevolveError, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

/// Per-generation progress notifications.
pub trait ProgressCallback: Send {
    fn on_generation_start(&mut self, generation: usize);
    fn on_generation_complete(&mut self, generation: usize, best_fitness: u64, best_output: i64);
}

pub struct EvolutionEngine {
    config: EvolutionConfig,
    evaluator: Evaluator,
    hall_of_fame: HallOfFame,
    population: Vec<Candidate>,
    rng: StdRng,
}

impl EvolutionEngine {
    pub fn new(config: EvolutionConfig, evaluator: Evaluator) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let hall_of_fame = HallOfFame::new(config.hall_of_fame_size);

        Self {
            config,
            evaluator,
            hall_of_fame,
            population: Vec::new(),
            rng,
        }
    }

    /// Run the evolution process
    ///
    /// Initializes a random population, then evolves one generation at a
    /// time until a candidate reaches fitness 0 or the generation budget is
    /// exhausted. Returns the best-ever candidate.
    pub fn run<C: ProgressCallback>(&mut self, callback: &mut C) -> Result<EliteCandidate> {
        self.population = self.initialize_population();

        for generation in 0..self.config.num_generations {
            callback.on_generation_start(generation);

            self.evolve_generation();

            let best = self
                .hall_of_fame
                .best()
                .ok_or_else(|| {
                    BytevolveError::Generation("hall of fame empty after a generation".to_string())
                })?;
            let (best_fitness, best_output) = (best.fitness, best.output);

            log::debug!(
                "generation {}: best fitness {}, output {}",
                generation,
                best_fitness,
                best_output
            );
            callback.on_generation_complete(generation, best_fitness, best_output);

            if best_fitness == 0 {
                log::info!("solution found in generation {}", generation);
                break;
            }
        }

        self.hall_of_fame
            .best()
            .cloned()
            .ok_or_else(|| BytevolveError::Generation("no candidate was evaluated".to_string()))
    }

    fn initialize_population(&mut self) -> Vec<Candidate> {
        (0..self.config.population_size)
            .map(|_| Candidate::unevaluated(random_genome(self.config.code_length, &mut self.rng)))
            .collect()
    }

    /// One generation step: breed a full staging buffer from the current
    /// population, evaluate it, swap it in wholesale, then offer every new
    /// member to the hall of fame. Selection only ever reads the previous,
    /// fully evaluated generation.
    fn evolve_generation(&mut self) {
        let staged = self.breed_generation();
        let evaluated = self.evaluate_generation(staged);

        for (candidate, output) in &evaluated {
            let elite = EliteCandidate {
                code: candidate.code.clone(),
                fitness: candidate.fitness,
                output: *output,
                canonical_string: get_canonical_code_string(&candidate.code),
            };
            self.hall_of_fame.try_add(elite);
        }

        self.population = evaluated.into_iter().map(|(candidate, _)| candidate).collect();
    }

    /// Breed the next generation sequentially from the master RNG. Each
    /// child carries a pre-drawn seed for its evaluation run, so a fixed
    /// engine seed reproduces the whole run even under parallel evaluation.
    fn breed_generation(&mut self) -> Vec<(Genome, u64)> {
        (0..self.config.population_size)
            .map(|_| {
                let parent1 = tournament_selection(
                    &self.population,
                    self.config.tournament_size,
                    &mut self.rng,
                );
                let parent2 = tournament_selection(
                    &self.population,
                    self.config.tournament_size,
                    &mut self.rng,
                );

                let mut child = crossover(
                    &self.population[parent1].code,
                    &self.population[parent2].code,
                    &mut self.rng,
                );
                mutate(&mut child, self.config.mutation_rate, &mut self.rng);

                (child, self.rng.gen::<u64>())
            })
            .collect()
    }

    /// Evaluate a staged generation in parallel. Every evaluation owns its
    /// scratch machine and RNG and writes to a disjoint slot, so no
    /// coordination is needed beyond the join.
    fn evaluate_generation(&self, staged: Vec<(Genome, u64)>) -> Vec<(Candidate, i64)> {
        let evaluator = &self.evaluator;
        staged
            .into_par_iter()
            .map(|(code, seed)| {
                let mut rng = StdRng::seed_from_u64(seed);
                let evaluation = evaluator.evaluate(&code, &mut rng);
                (
                    Candidate {
                        code,
                        fitness: evaluation.fitness,
                    },
                    evaluation.output,
                )
            })
            .collect()
    }

    pub fn population(&self) -> &[Candidate] {
        &self.population
    }

    pub fn hall_of_fame(&self) -> &HallOfFame {
        &self.hall_of_fame
    }
}
