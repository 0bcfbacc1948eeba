use tracing::Level;
use tracing_subscriber::{fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt};

/// Prints the store spans (`get_one`, `create`, seeding) with their timings when they close.
///
/// Log lines keep flowing through `env_logger`; this subscriber only sees `tracing` spans.
pub fn init_tracing_subscriber(trace_spans: bool) {
    if !trace_spans {
        return;
    }

    let tracing_subscriber_info = tracing_subscriber::filter::LevelFilter::from_level(Level::INFO);

    tracing_subscriber::registry()
        .with(tracing_subscriber_info)
        .with(tracing_subscriber::fmt::layer().with_span_events(FmtSpan::CLOSE))
        .init();
}
