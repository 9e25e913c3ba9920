pub mod config;
pub mod engines;
pub mod error;

pub use config::{AppConfig, ConfigManager};
pub use engines::execution::{Machine, Opcode};
pub use engines::evaluation::Evaluator;
pub use engines::generation::{Candidate, EvolutionEngine, HallOfFame, ProgressCallback};
pub use error::{BytevolveError, Result};
