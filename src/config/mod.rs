pub mod traits;
pub mod evolution;
pub mod machine;
pub mod fitness;
pub mod manager;

pub use manager::{AppConfig, ConfigManager};
pub use evolution::EvolutionConfig;
pub use machine::MachineConfig;
pub use fitness::FitnessConfig;
