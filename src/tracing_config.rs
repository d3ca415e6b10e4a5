//! Opt-in diagnostics. `PHP2JS_LOG` takes `RUST_LOG`-style directives
//! (`debug`, `php2js_emitter=trace`); `PHP2JS_LOG_FORMAT=tree` nests each
//! event under the file being converted. Output goes to stderr so it never
//! mixes with JavaScript written to stdout.

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Layer, Registry, fmt};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    /// Indented by span via `tracing-tree`.
    Tree,
}

impl LogFormat {
    /// Anything but `tree` is `Text`.
    pub fn parse(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("tree") {
            Self::Tree
        } else {
            Self::Text
        }
    }
}

/// Install the global subscriber if `PHP2JS_LOG` is set.
pub fn init_tracing() {
    let Ok(directives) = std::env::var("PHP2JS_LOG") else {
        return;
    };
    let format = LogFormat::parse(&std::env::var("PHP2JS_LOG_FORMAT").unwrap_or_default());

    let output: Box<dyn Layer<Registry> + Send + Sync> = match format {
        LogFormat::Tree => tracing_tree::HierarchicalLayer::new(2)
            .with_writer(std::io::stderr)
            .with_targets(true)
            .boxed(),
        LogFormat::Text => fmt::layer().with_writer(std::io::stderr).boxed(),
    };
    Registry::default()
        .with(output)
        .with(EnvFilter::builder().parse_lossy(directives))
        .init();
}

#[cfg(test)]
#[path = "../tests/tracing_config_tests.rs"]
mod tests;
