#[cfg(feature = "trace")]
use std::path::Path;
#[cfg(feature = "trace")]
use std::sync::Once;

#[cfg(feature = "trace")]
static INIT: Once = Once::new();

/// Keeps the background trace writer alive. Dropping it flushes what is buffered.
#[must_use = "dropping the guard stops the trace writer"]
pub struct TraceGuard {
    #[cfg(feature = "trace")]
    _worker: Option<tracing_appender::non_blocking::WorkerGuard>,
}

#[cfg(feature = "trace")]
fn env_filter() -> tracing_subscriber::EnvFilter {
    tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("ojo_core=debug,ojo_cli=debug"))
}

/// JSON lines into `log_dir/ojosama-trace.jsonl`, or human-readable lines on stderr.
///
/// Only the first call installs a subscriber; later calls return an inert guard.
#[cfg(feature = "trace")]
pub fn init_tracing(log_dir: Option<&Path>) -> TraceGuard {
    let mut worker = None;
    INIT.call_once(|| match log_dir {
        Some(dir) => {
            let file_appender = tracing_appender::rolling::never(dir, "ojosama-trace.jsonl");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            worker = Some(guard);

            tracing_subscriber::fmt()
                .json()
                .with_writer(non_blocking)
                .with_target(true)
                .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
                .with_env_filter(env_filter())
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_env_filter(env_filter())
                .init();
        }
    });
    TraceGuard { _worker: worker }
}

#[cfg(not(feature = "trace"))]
pub fn init_tracing(_log_dir: Option<&std::path::Path>) -> TraceGuard {
    TraceGuard {}
}
