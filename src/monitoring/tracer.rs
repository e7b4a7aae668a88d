/*!
 * Structured Tracing
 * Subscriber setup and per-transaction spans using the tracing crate
 */

use crate::core::types::{AccountId, Pid};
use std::time::Instant;
use tracing::{debug, info, span, Level};
use tracing_subscriber::{fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize structured tracing
///
/// Output goes to stderr so it never interleaves with shell tables on stdout.
///
/// Environment variables:
/// - RUST_LOG: Set log level (default: info)
/// - BANK_TRACE_JSON: Enable JSON output (default: false)
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let use_json = std::env::var("BANK_TRACE_JSON")
        .map(|v| v == "1" || v == "true")
        .unwrap_or(false);

    let registry = tracing_subscriber::registry().with(env_filter);

    if use_json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_thread_names(true)
                    .with_current_span(true)
                    .with_span_list(true),
            )
            .init();
        info!("Structured tracing initialized with JSON output");
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_line_number(true)
                    .with_file(true)
                    .with_span_events(FmtSpan::CLOSE)
                    .compact(),
            )
            .init();
        info!("Structured tracing initialized");
    }
}

/// Span covering one submitted transaction
pub struct TransactionSpan {
    span: tracing::Span,
    start: Instant,
}

impl TransactionSpan {
    pub fn new(kind: &str, account_id: AccountId) -> Self {
        let span = span!(
            Level::DEBUG,
            "transaction",
            kind = kind,
            account_id = account_id,
            pid = tracing::field::Empty,
            result = tracing::field::Empty,
            error = tracing::field::Empty,
        );

        Self {
            span,
            start: Instant::now(),
        }
    }

    /// Enter the span context
    pub fn enter(&self) -> tracing::span::Entered<'_> {
        self.span.enter()
    }

    pub fn record_pid(&self, pid: Pid) {
        self.span.record("pid", pid);
    }

    pub fn record_result(&self, success: bool) {
        self.span.record("result", if success { "success" } else { "error" });
    }

    pub fn record_error(&self, error: &str) {
        self.span.record("error", error);
        self.span.record("result", "error");
    }
}

impl Drop for TransactionSpan {
    fn drop(&mut self) {
        let _entered = self.span.enter();
        debug!(
            wall_us = self.start.elapsed().as_micros() as u64,
            "transaction finished"
        );
    }
}
