use anyhow::Context;
use log::info;
use mazevolve::config::ConfigManager;
use mazevolve::engines::generation::{ConsoleProgress, EvolutionEngine};
use mazevolve::engines::maze;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let manager = ConfigManager::new();
    if let Some(path) = std::env::args().nth(1) {
        manager
            .load_from_file(&path)
            .with_context(|| format!("loading config from {}", path))?;
    }
    let config = manager.get();

    let maze = maze::generate(&config.maze);
    info!(
        "maze {}x{}, start {:?}, goal {:?}",
        maze.rows, maze.cols, maze.start, maze.goal
    );

    let mut engine = EvolutionEngine::new(config.ga);
    let outcome = engine.run(&maze, None, &mut ConsoleProgress)?;

    println!("{}", serde_json::to_string_pretty(&outcome)?);
    Ok(())
}
