use bytevolve::config::{EvolutionConfig, MachineConfig};
use bytevolve::engines::evaluation::Evaluator;
use bytevolve::engines::execution::Opcode;
use bytevolve::engines::generation::{
    ChannelProgressCallback, EvolutionEngine, ProgressCallback, ProgressMessage,
};

/// Records the fitness trajectory the engine reports.
struct TestProgressCallback {
    history: Vec<(usize, u64, i64)>,
}

impl TestProgressCallback {
    fn new() -> Self {
        Self { history: Vec::new() }
    }
}

impl ProgressCallback for TestProgressCallback {
    fn on_generation_start(&mut self, _generation: usize) {}

    fn on_generation_complete(&mut self, generation: usize, best_fitness: u64, best_output: i64) {
        self.history.push((generation, best_fitness, best_output));
    }
}

fn small_config(seed: u64) -> EvolutionConfig {
    EvolutionConfig {
        population_size: 30,
        num_generations: 15,
        code_length: 24,
        mutation_rate: 0.20,
        tournament_size: 5,
        hall_of_fame_size: 5,
        seed: Some(seed),
    }
}

#[test]
fn best_fitness_is_monotonically_non_increasing() {
    let evaluator = Evaluator::new(15, MachineConfig::default());
    let mut engine = EvolutionEngine::new(small_config(1), evaluator);
    let mut callback = TestProgressCallback::new();

    let best = engine.run(&mut callback).unwrap();

    assert!(!callback.history.is_empty());
    for window in callback.history.windows(2) {
        assert!(window[1].1 <= window[0].1, "best fitness regressed");
    }
    let last = callback.history.last().unwrap();
    assert_eq!(best.fitness, last.1);
}

#[test]
fn population_is_replaced_wholesale_each_generation() {
    let config = small_config(2);
    let population_size = config.population_size;
    let code_length = config.code_length;
    let evaluator = Evaluator::new(15, MachineConfig::default());
    let mut engine = EvolutionEngine::new(config, evaluator);

    engine.run(&mut TestProgressCallback::new()).unwrap();

    assert_eq!(engine.population().len(), population_size);
    for candidate in engine.population() {
        assert_eq!(candidate.code.len(), code_length);
        assert_ne!(candidate.fitness, bytevolve::engines::generation::UNEVALUATED);
    }
}

#[test]
fn reported_fitness_matches_reported_output() {
    let target = 15i64;
    let evaluator = Evaluator::new(target, MachineConfig::default());
    let mut engine = EvolutionEngine::new(small_config(3), evaluator);
    let mut callback = TestProgressCallback::new();

    engine.run(&mut callback).unwrap();

    for (_, best_fitness, best_output) in &callback.history {
        assert_eq!(*best_fitness, (best_output - target).unsigned_abs());
    }
}

#[test]
fn singleton_population_with_unit_length_is_a_forced_halt() {
    // Population 1, code length 1: initialization forces the single slot to
    // HALT, and a zero mutation rate keeps it that way. The no-op program
    // scores the target's absolute value.
    let config = EvolutionConfig {
        population_size: 1,
        num_generations: 3,
        code_length: 1,
        mutation_rate: 0.0,
        tournament_size: 5,
        hall_of_fame_size: 1,
        seed: Some(4),
    };
    let evaluator = Evaluator::new(15, MachineConfig::default());
    let mut engine = EvolutionEngine::new(config, evaluator);

    let best = engine.run(&mut TestProgressCallback::new()).unwrap();

    assert_eq!(best.code, vec![Opcode::Halt.as_byte()]);
    assert_eq!(best.fitness, 15);
    assert_eq!(best.output, 0);
}

#[test]
fn run_stops_early_when_fitness_reaches_zero() {
    // Target 0: the bare HALT program already scores 0, so the run must
    // stop after the first generation.
    let config = EvolutionConfig {
        population_size: 1,
        num_generations: 50,
        code_length: 1,
        mutation_rate: 0.0,
        tournament_size: 5,
        hall_of_fame_size: 1,
        seed: Some(5),
    };
    let evaluator = Evaluator::new(0, MachineConfig::default());
    let mut engine = EvolutionEngine::new(config, evaluator);
    let mut callback = TestProgressCallback::new();

    let best = engine.run(&mut callback).unwrap();

    assert_eq!(best.fitness, 0);
    assert_eq!(callback.history.len(), 1);
}

#[test]
fn fixed_seed_reproduces_the_run() {
    let run = |seed| {
        let evaluator = Evaluator::new(15, MachineConfig::default());
        let mut engine = EvolutionEngine::new(small_config(seed), evaluator);
        let mut callback = TestProgressCallback::new();
        engine.run(&mut callback).unwrap();
        callback.history
    };

    assert_eq!(run(7), run(7));
}

#[test]
fn channel_callback_reports_every_generation() {
    let (sender, receiver) = std::sync::mpsc::channel();
    let evaluator = Evaluator::new(15, MachineConfig::default());
    let config = small_config(8);
    let generations = config.num_generations;
    let mut engine = EvolutionEngine::new(config, evaluator);
    let mut callback = ChannelProgressCallback::new(sender);

    engine.run(&mut callback).unwrap();
    drop(callback);

    let messages: Vec<ProgressMessage> = receiver.iter().collect();
    let starts = messages
        .iter()
        .filter(|m| matches!(m, ProgressMessage::GenerationStart(_)))
        .count();
    let completes = messages
        .iter()
        .filter(|m| matches!(m, ProgressMessage::GenerationComplete { .. }))
        .count();
    assert_eq!(starts, completes);
    assert!(completes >= 1 && completes <= generations);
}
