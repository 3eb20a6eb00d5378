// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use std::env;

/// Environment variable that overrides the log filter (same syntax as `RUST_LOG`).
pub const LOG_ENV: &str = "CAKESTATE_LOG";

const DEFAULT_FILTER: &str = "warn";
const VERBOSE_FILTER: &str = "cakestate=debug,cakechain_cli=debug,cakechain_state=debug";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// `canonical_bytes_hex: ...` / `state_root_hex: ...` lines.
    #[default]
    Text,
    /// The full commitment as pretty JSON.
    Json,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunConfig {
    /// Print the parsed-state summary table before the hex lines.
    pub pretty: bool,
    pub format: OutputFormat,
    pub log_filter: String,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            pretty: false,
            format: OutputFormat::Text,
            log_filter: DEFAULT_FILTER.to_string(),
        }
    }
}

impl RunConfig {
    /// Picks the log filter: `CAKESTATE_LOG`, then `RUST_LOG`, then the
    /// verbose or quiet default.
    pub fn with_log_filter_from_env(mut self, verbose: bool) -> Self {
        self.log_filter = env::var(LOG_ENV)
            .or_else(|_| env::var("RUST_LOG"))
            .unwrap_or_else(|_| {
                let filter = if verbose { VERBOSE_FILTER } else { DEFAULT_FILTER };
                filter.to_string()
            });
        self
    }
}
