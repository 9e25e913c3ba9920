use crate::config::MachineConfig;
use crate::engines::execution::Machine;
use rand::Rng;

/// Fitness of one evaluated candidate: the absolute distance between
/// output slot 0 and the target. Zero is a perfect solution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluation {
    pub fitness: u64,
    pub output: i64,
}

/// Scores candidate programs against the numeric target. Each call builds
/// its own scratch machine, so evaluations of different candidates never
/// share stack or memory and can run on separate threads.
pub struct Evaluator {
    target: i64,
    machine_config: MachineConfig,
}

impl Evaluator {
    pub fn new(target: i64, machine_config: MachineConfig) -> Self {
        Self {
            target,
            machine_config,
        }
    }

    pub fn target(&self) -> i64 {
        self.target
    }

    pub fn evaluate<R: Rng>(&self, code: &[u8], rng: &mut R) -> Evaluation {
        let mut machine = Machine::new(&self.machine_config);
        machine.execute(code, rng);
        let output = machine.outputs()[0];
        Evaluation {
            fitness: output.wrapping_sub(self.target).unsigned_abs(),
            output,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engines::execution::Opcode;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn fitness_is_zero_iff_output_matches_target() {
        let evaluator = Evaluator::new(3, MachineConfig::default());
        let code = [
            Opcode::Load.as_byte(),
            0,
            Opcode::Load.as_byte(),
            1,
            Opcode::Add.as_byte(),
            Opcode::Write.as_byte(),
            0,
            Opcode::Halt.as_byte(),
        ];
        let mut rng = StdRng::seed_from_u64(1);
        let eval = evaluator.evaluate(&code, &mut rng);
        assert_eq!(eval.output, 3);
        assert_eq!(eval.fitness, 0);

        let off_target = Evaluator::new(10, MachineConfig::default());
        let eval = off_target.evaluate(&code, &mut rng);
        assert_eq!(eval.fitness, 7);
    }

    #[test]
    fn immediate_halt_scores_the_target_distance() {
        let evaluator = Evaluator::new(-15, MachineConfig::default());
        let code = [Opcode::Halt.as_byte()];
        let mut rng = StdRng::seed_from_u64(1);
        let eval = evaluator.evaluate(&code, &mut rng);
        assert_eq!(eval.output, 0);
        assert_eq!(eval.fitness, 15);
    }
}
