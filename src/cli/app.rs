//! Main app runner

use std::path::Path;
use std::process::ExitCode;

use crate::application::{
    PronounceCallbacks, PronounceError, PronounceInput, PronounceOutcome, PronounceUseCase,
};
use crate::domain::config::AppConfig;
use crate::infrastructure::{
    build_client, FsAudioCache, ForvoResolver, HttpDownloader, PlayerDispatcher,
};

use super::args::PronounceOptions;
use super::presenter::Presenter;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;
pub const EXIT_NETWORK_ERROR: u8 = 3;
pub const EXIT_NO_PLAYER: u8 = 4;

/// Fetch (or reuse) and play the pronunciation for one word
pub async fn run_pronounce(options: PronounceOptions, config: AppConfig) -> ExitCode {
    let presenter = Presenter::new();

    let cache_dir = match config.cache_dir_or_default() {
        Ok(dir) => dir,
        Err(e) => {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_USAGE_ERROR);
        }
    };

    let client = match build_client(config.user_agent_or_default(), config.timeout_or_default()) {
        Ok(c) => c,
        Err(e) => {
            presenter.error(&format!("Failed to create HTTP client: {}", e));
            return ExitCode::from(EXIT_ERROR);
        }
    };

    // Create adapters
    let resolver = match ForvoResolver::new(
        client.clone(),
        config.search_url_or_default(),
        config.audio_url_or_default(),
    ) {
        Ok(r) => r,
        Err(e) => {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_USAGE_ERROR);
        }
    };
    let downloader = HttpDownloader::new(client);
    let cache = FsAudioCache::new(cache_dir);
    let player = PlayerDispatcher::new(options.player);

    // Create use case
    let use_case = PronounceUseCase::new(resolver, downloader, cache, player);

    let input = PronounceInput {
        key: options.key.clone(),
        no_cache: options.no_cache,
    };

    let spinner = presenter.spinner();
    let callbacks = build_callbacks(&presenter, &spinner, &options);

    // Execute
    match use_case.execute(input, callbacks).await {
        Ok(PronounceOutcome::CacheHit { .. }) | Ok(PronounceOutcome::Temporary { .. }) => {
            ExitCode::from(EXIT_SUCCESS)
        }
        Ok(PronounceOutcome::Downloaded { path, .. }) => {
            presenter.success(&format!("Cached at `{}`", path.display()));
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            presenter.stop_spinner(&spinner);
            presenter.error(&e.to_string());
            ExitCode::from(exit_code_for(&e))
        }
    }
}

fn build_callbacks(
    presenter: &Presenter,
    spinner: &indicatif::ProgressBar,
    options: &PronounceOptions,
) -> PronounceCallbacks {
    let key = options.key.to_string();

    let on_cache_hit = {
        let presenter = presenter.clone();
        move |path: &Path| presenter.output(&format!("found cached audio `{}`", path.display()))
    };

    let on_resolve_start = {
        let (presenter, spinner) = (presenter.clone(), spinner.clone());
        move || presenter.start_spinner(&spinner, &format!("Looking up {}...", key))
    };

    let on_download_start = {
        let spinner = spinner.clone();
        move |_url: &str| spinner.set_message("Downloading audio...")
    };

    let on_download_end = {
        let (presenter, spinner) = (presenter.clone(), spinner.clone());
        move |size: &str| presenter.spinner_success(&spinner, &format!("Downloaded ({})", size))
    };

    let on_play_start = {
        let (presenter, spinner) = (presenter.clone(), spinner.clone());
        move |path: &Path| {
            presenter.stop_spinner(&spinner);
            tracing::debug!(path = %path.display(), "playing");
        }
    };

    PronounceCallbacks {
        on_cache_hit: Some(Box::new(on_cache_hit)),
        on_resolve_start: Some(Box::new(on_resolve_start)),
        on_download_start: Some(Box::new(on_download_start)),
        on_download_end: Some(Box::new(on_download_end)),
        on_play_start: Some(Box::new(on_play_start)),
    }
}

/// Map a pipeline failure to the process exit code
pub fn exit_code_for(error: &PronounceError) -> u8 {
    if error.is_network() {
        EXIT_NETWORK_ERROR
    } else if error.is_missing_player() {
        EXIT_NO_PLAYER
    } else {
        EXIT_ERROR
    }
}

/// Merge CLI values over the built-in defaults
pub fn load_merged_config(cli_config: AppConfig) -> AppConfig {
    // Merge: defaults < cli (clap already folds in the environment)
    AppConfig::defaults().merge(cli_config)
}
