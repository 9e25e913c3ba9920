use anyhow::Context;
use bytevolve::config::ConfigManager;
use bytevolve::engines::evaluation::Evaluator;
use bytevolve::engines::execution::Opcode;
use bytevolve::engines::generation::{ConsoleProgressCallback, EvolutionEngine};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let manager = ConfigManager::new();
    if let Some(path) = std::env::args().nth(1) {
        manager
            .load_from_file(&path)
            .with_context(|| format!("loading config from {}", path))?;
    }
    let config = manager.get();

    let evaluator = Evaluator::new(config.fitness.target, config.machine.clone());
    let mut engine = EvolutionEngine::new(config.evolution.clone(), evaluator);

    let best = engine.run(&mut ConsoleProgressCallback)?;
    if best.fitness == 0 {
        println!("Target {} reached exactly", config.fitness.target);
    }

    println!("Best byte code sequence that achieved the target:");
    let rendered: Vec<String> = best
        .code
        .iter()
        .take_while(|&&byte| byte != Opcode::Halt.as_byte())
        .map(|byte| byte.to_string())
        .collect();
    println!("{}", rendered.join(" "));

    Ok(())
}
