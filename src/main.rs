use clap::Parser;
use log::info;
use title_tokenizer::{Config, determinism::seed_everything, load_tokenizer, pipeline};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let config = Config::parse();

    let mut seeds = seed_everything(config.seed);
    let tokenizer = load_tokenizer(&config.model)?;
    pipeline::run(&config, tokenizer.as_ref(), &mut seeds)?;

    info!("Done");
    Ok(())
}
