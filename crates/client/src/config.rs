//! Client configuration read from the environment.
use std::env;
use std::path::PathBuf;

use runtime::TransitionPolicy;

/// Settings for one headless simulation run.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Directory holding `species.ron`, `config.toml` and `scenario.ron`.
    pub content_dir: PathBuf,
    pub turns: u64,
    /// Overrides the seed from `config.toml`.
    pub game_seed: Option<u64>,
    pub transition_policy: TransitionPolicy,
    /// Write logs to a daily file here instead of stderr.
    pub log_dir: Option<PathBuf>,
    /// Print each turn report as a JSON line.
    pub json_reports: bool,
    pub render_board: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            content_dir: PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/content")),
            turns: 20,
            game_seed: None,
            transition_policy: TransitionPolicy::default(),
            log_dir: None,
            json_reports: false,
            render_board: true,
        }
    }
}

impl ClientConfig {
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(dir) = read_env::<PathBuf>("FOODCHAIN_CONTENT_DIR") {
            config.content_dir = dir;
        }
        if let Some(turns) = read_env::<u64>("FOODCHAIN_TURNS") {
            config.turns = turns;
        }
        config.game_seed = read_env::<u64>("FOODCHAIN_SEED");
        if let Some(policy) = read_env::<TransitionPolicy>("FOODCHAIN_TRANSITION_POLICY") {
            config.transition_policy = policy;
        }
        config.log_dir = read_env::<PathBuf>("FOODCHAIN_LOG_DIR");
        if let Some(json) = read_env_bool("FOODCHAIN_JSON_REPORTS") {
            config.json_reports = json;
        }
        if let Some(render) = read_env_bool("FOODCHAIN_RENDER_BOARD") {
            config.render_board = render;
        }

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

fn read_env_bool(key: &str) -> Option<bool> {
    match env::var(key).ok()?.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
