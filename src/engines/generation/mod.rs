pub mod genome;
pub mod operators;
pub mod hall_of_fame;
pub mod evolution_engine;
pub mod progress;

pub use genome::{Candidate, Genome, UNEVALUATED};
pub use hall_of_fame::{EliteCandidate, HallOfFame};
pub use evolution_engine::{EvolutionEngine, ProgressCallback};
pub use progress::{ChannelProgressCallback, ConsoleProgressCallback, ProgressMessage};
