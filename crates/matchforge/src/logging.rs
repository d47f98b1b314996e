//! Log output for matcher evaluation.
//!
//! The engine emits `tracing` events:
//!
//! - **DEBUG**: size mismatches, pre-check short circuits, search results
//! - **TRACE**: individual assignment and displacement steps
//!
//! Nothing is printed unless a subscriber is installed, either by the host
//! application or by [`init`].

use std::sync::OnceLock;

use matchforge_config::LogConfig;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Environment variable holding filter directives, e.g.
/// `MATCHFORGE_LOG=matchforge_engine=trace`.
pub const ENV_VAR: &str = "MATCHFORGE_LOG";

/// Directives used when neither the environment nor the config sets any.
pub const DEFAULT_FILTER: &str = "matchforge_engine=warn";

static INIT: OnceLock<()> = OnceLock::new();

/// Installs a test-friendly subscriber with the default filter.
///
/// Safe to call multiple times - only the first call has effect. If another
/// global subscriber is already installed, that one is kept.
pub fn init() {
    init_with(&LogConfig::default());
}

/// Installs a test-friendly subscriber, falling back to `config.filter`
/// when [`ENV_VAR`] is unset.
pub fn init_with(config: &LogConfig) {
    INIT.get_or_init(|| {
        let directives = resolve_directives(std::env::var(ENV_VAR).ok(), config);
        let filter = EnvFilter::builder().parse_lossy(directives);

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_test_writer())
            .try_init();
    });
}

fn resolve_directives(env: Option<String>, config: &LogConfig) -> String {
    env.filter(|d| !d.trim().is_empty())
        .or_else(|| config.filter.clone())
        .unwrap_or_else(|| DEFAULT_FILTER.to_string())
}
