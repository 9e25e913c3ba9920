use crate::engines::execution::isa;
use crate::engines::execution::Opcode;
use crate::engines::generation::genome::{Candidate, Genome};
use rand::Rng;

/// Generate a random genome of `code_length` bytes. All but the final slot
/// draw from the non-halting opcode range; the final slot is forced to
/// `Halt` so every freshly initialized program terminates by construction.
pub fn random_genome<R: Rng>(code_length: usize, rng: &mut R) -> Genome {
    let mut code: Genome = (0..code_length.saturating_sub(1))
        .map(|_| isa::random_non_halt_opcode(rng))
        .collect();
    code.push(Opcode::Halt.as_byte());
    code
}

/// Tournament selection: sample `tournament_size` indices uniformly and
/// return the one with the lowest fitness seen (lower distance is better).
/// The incumbent only changes on a strictly lower fitness.
pub fn tournament_selection<R: Rng>(
    population: &[Candidate],
    tournament_size: usize,
    rng: &mut R,
) -> usize {
    let mut best_idx = rng.gen_range(0..population.len());
    let mut best_fitness = population[best_idx].fitness;

    for _ in 1..tournament_size {
        let idx = rng.gen_range(0..population.len());
        if population[idx].fitness < best_fitness {
            best_idx = idx;
            best_fitness = population[idx].fitness;
        }
    }

    best_idx
}

/// Single-point crossover: the child takes parent1's bytes before the cut
/// and parent2's bytes from the cut onward. Parents are never modified.
pub fn crossover<R: Rng>(parent1: &Genome, parent2: &Genome, rng: &mut R) -> Genome {
    let cut = rng.gen_range(0..parent1.len());
    crossover_at(parent1, parent2, cut)
}

/// Deterministic crossover at a given cut point. A cut of 0 copies
/// parent2 exactly; a cut of the full length copies parent1 exactly.
pub fn crossover_at(parent1: &Genome, parent2: &Genome, cut: usize) -> Genome {
    let mut child = parent1.clone();
    child[cut..].copy_from_slice(&parent2[cut..]);
    child
}

/// Mutation: independently for every byte, with probability
/// `mutation_rate`, replace it with a draw from the full opcode range
/// (`Halt` included). Replacements are independent draws and may repeat
/// the original byte.
pub fn mutate<R: Rng>(code: &mut Genome, mutation_rate: f64, rng: &mut R) {
    for byte in code.iter_mut() {
        if rng.gen::<f64>() < mutation_rate {
            *byte = isa::random_opcode(rng);
        }
    }
}
