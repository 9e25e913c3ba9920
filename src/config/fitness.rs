use super::traits::ConfigSection;
use crate::error::BytevolveError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FitnessConfig {
    /// Value the evolved programs must write to output slot 0.
    pub target: i64,
}

impl Default for FitnessConfig {
    fn default() -> Self {
        // The default target is the sum of the default inputs.
        Self { target: 15 }
    }
}

impl ConfigSection for FitnessConfig {
    fn section_name() -> &'static str {
        "fitness"
    }

    fn validate(&self) -> Result<(), BytevolveError> {
        Ok(())
    }
}
