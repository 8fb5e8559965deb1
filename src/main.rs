use std::io;
use tracing::info;
use tracing_subscriber::EnvFilter;

use configvars::{session, storage, Result, Settings};

fn main() -> Result<()> {
    // logs go to stderr so they never interleave with the prompts
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let settings = Settings::load()?;
    info!(storage_dir = %settings.storage_dir().display(), "configvars starting");

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    let name = session::prompt_name(&mut input, &mut output)?;
    println!("{}", session::USAGE);
    let vars = session::collect(&mut input, &mut output)?;
    let path = storage::store(&name, &vars, &settings)?;
    println!("saved {} variable(s) to {}", vars.len(), path.display());
    Ok(())
}
