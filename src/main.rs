//! shell-forvo CLI entry point

use std::process::ExitCode;

use clap::Parser;

use shell_forvo::cli::{
    init_logging, load_merged_config, run_pronounce, Cli, Presenter, PronounceOptions,
    EXIT_USAGE_ERROR,
};
use shell_forvo::domain::config::AppConfig;
use shell_forvo::domain::lookup::LookupKey;
use shell_forvo::infrastructure::PlayerPreference;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let presenter = Presenter::new();

    let key = match LookupKey::new(cli.word.clone(), cli.lang.as_deref().unwrap_or("")) {
        Ok(key) => key,
        Err(e) => {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_USAGE_ERROR);
        }
    };

    // Build CLI config from args
    let cli_config = AppConfig {
        cache_dir: cli.cache_dir.clone(),
        search_url: cli.search_url.clone(),
        audio_url: cli.audio_url.clone(),
        user_agent: cli.user_agent.clone(),
        timeout_secs: cli.timeout,
    };

    let config = load_merged_config(cli_config);
    if let Err(e) = config.validate() {
        presenter.error(&e.to_string());
        return ExitCode::from(EXIT_USAGE_ERROR);
    }

    let options = PronounceOptions {
        key,
        no_cache: cli.no_cache,
        player: cli.player.map(PlayerPreference::from).unwrap_or_default(),
    };

    run_pronounce(options, config).await
}
