use super::traits::ConfigSection;
use crate::error::BytevolveError;
use serde::{Deserialize, Serialize};

/// Sizing and initial contents of the virtual machine's scratch memory.
/// Inputs are reloaded from `inputs` at the start of every execution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MachineConfig {
    pub stack_capacity: usize,
    pub inputs: Vec<i64>,
    pub output_size: usize,
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self {
            stack_capacity: 100,
            inputs: vec![1, 2, 3, 4, 5],
            output_size: 5,
        }
    }
}

impl ConfigSection for MachineConfig {
    fn section_name() -> &'static str {
        "machine"
    }

    fn validate(&self) -> Result<(), BytevolveError> {
        if self.stack_capacity < 1 {
            return Err(BytevolveError::Configuration(
                "Stack capacity must be at least 1".to_string(),
            ));
        }
        if self.inputs.is_empty() {
            return Err(BytevolveError::Configuration(
                "Input vector must not be empty".to_string(),
            ));
        }
        if self.output_size < 1 {
            return Err(BytevolveError::Configuration(
                "Output size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
