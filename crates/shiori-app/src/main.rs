use std::env;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use shiori_config::Config;
use shiori_core::dictionary::Dictionary;
use shiori_core::types::UserIntent;
use shiori_lang_japanese::DictionaryLoader;
use tracing_subscriber::EnvFilter;

mod controller;
mod events;
mod io;
mod lookup;
mod source;
mod state;
mod ui;

#[cfg(test)]
mod tests;

use self::controller::{AppController, TaskKind};
use self::source::BlockingSource;
use self::state::AppState;

/// Kanji and word reference browser
#[derive(Parser)]
#[command(name = "shiori", version)]
struct Args {
    /// JSON config profile
    #[arg(long)]
    config: Option<PathBuf>,

    /// Extra dictionary file, may be repeated
    #[arg(long = "dict")]
    dicts: Vec<String>,

    /// Search to open on startup
    query: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => Config::load(path)?.with_env(|key| env::var(key).ok()),
        None => Config::new(),
    };
    config.dictionary.additional_paths.extend(args.dicts);

    init_tracing(&config.log_filter);
    config.validate()?;

    let dictionary = DictionaryLoader::load_all(
        config.dictionary.enabled,
        &config.dictionary.additional_paths,
    );
    let metadata = dictionary.metadata();
    tracing::info!(
        "Dictionary {} v{} ({}): {} entries",
        metadata.name,
        metadata.version,
        metadata.language,
        metadata.entry_count
    );
    let source = Arc::new(BlockingSource::new(Arc::new(dictionary)));

    let state = Arc::new(AppState::new(config));
    let controller = AppController::new(state);

    if let Some(query) = args.query {
        controller.submit(UserIntent::SearchSubmitted(query)).await?;
    }

    let mut tasks = controller.spawn_tasks(source);

    // Run until the presenter has shown its last page
    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Shutdown requested");
                break;
            }
            joined = tasks.join_next() => match joined {
                Some(Ok((TaskKind::Presenter, Ok(())))) | None => {
                    tracing::info!("Presenter finished, shutting down");
                    break;
                }
                Some(Ok((kind, Ok(())))) => tracing::debug!("{:?} task finished", kind),
                Some(Ok((kind, Err(e)))) => {
                    tracing::error!("{:?} task failed: {e}", kind);
                    break;
                }
                Some(Err(e)) => {
                    tracing::error!("Task panicked: {e}");
                    break;
                }
            },
        }
    }

    controller.shutdown();
    tasks.shutdown().await;

    Ok(())
}

fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
