use serde::{Deserialize, Serialize};

/// Genome representation for the evolved programs
///
/// A genome is a fixed-length sequence of opcode bytes executed directly by
/// the virtual machine. Operand bytes are not encoded separately: an
/// operand-carrying opcode reads the next byte of the same stream, so every
/// byte position is simultaneously a potential opcode and a potential
/// operand.
///
/// # Why a flat byte sequence?
///
/// Genetic operators work best on simple, linear structures:
/// - **Crossover**: swapping segments is trivial (slice copying)
/// - **Mutation**: replacing individual bytes is straightforward
/// - **No invalid states**: the machine's guard policy makes every byte
///   sequence executable, so any child is a legal program
pub type Genome = Vec<u8>;

/// Fitness assigned to candidates that have not been evaluated yet. The
/// worst representable distance, so any evaluated candidate beats it.
pub const UNEVALUATED: u64 = u64::MAX;

/// One member of the population: a program plus its evaluated fitness.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    pub code: Genome,
    pub fitness: u64,
}

impl Candidate {
    pub fn unevaluated(code: Genome) -> Self {
        Self {
            code,
            fitness: UNEVALUATED,
        }
    }
}
