use std::path::PathBuf;

use condroute::{FileLoader, MemoryDirectory, RouterInitializer};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .init();

    let path = std::env::args_os()
        .nth(1)
        .map_or_else(|| PathBuf::from("demos/router.yml"), PathBuf::from);

    let init = RouterInitializer::new(FileLoader, MemoryDirectory::new());
    let config = match init.initialize(&path) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("failed to load {}: {err}", path.display());
            std::process::exit(1);
        }
    };

    println!("{} condition(s), priority {}", config.conditions().len(), config.priority());
    println!("rule: {}", config.compile());

    for descriptor in init.directory().routers() {
        println!("{descriptor}");
    }
}
