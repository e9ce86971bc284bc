use std::path::Path;
use tracing::{info, subscriber::set_default};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt;

use crate::{
    data::{PriceFrame, PriceRecord},
    error::ReturnsError,
    returns::ReturnsCalculator,
};

pub struct TracingGuards {
    _subscriber_guard: tracing::subscriber::DefaultGuard,
    _worker_guard: WorkerGuard,
}

/// Routes DEBUG+ events emitted on the current thread to `tests/logs/<test_name>.log`.
pub fn setup_test_tracing(test_name: &str) -> TracingGuards {
    let log_dir = Path::new("tests/logs");
    if !log_dir.exists() {
        std::fs::create_dir_all(log_dir).unwrap();
    }

    let file_appender = tracing_appender::rolling::never(log_dir, format!("{}.log", test_name));
    let (non_blocking, worker_guard) = tracing_appender::non_blocking(file_appender);

    let subscriber = fmt::Subscriber::builder()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_level(true)
        .with_target(true)
        .with_thread_ids(true)
        .with_thread_names(true)
        .with_max_level(tracing::Level::DEBUG)
        .finish();

    let subscriber_guard = set_default(subscriber);

    TracingGuards {
        _subscriber_guard: subscriber_guard,
        _worker_guard: worker_guard,
    }
}

/// Builds a frame of daily records starting on 2021-01-01, one per close price.
pub fn daily_frame(closes: &[f64]) -> PriceFrame {
    let records = closes
        .iter()
        .enumerate()
        .map(|(i, close)| {
            let day = chrono::NaiveDate::from_ymd_opt(2021, 1, 1)
                .and_then(|d| d.checked_add_days(chrono::Days::new(i as u64)))
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default();
            PriceRecord::new(day, *close)
        })
        .collect::<Vec<_>>();
    PriceFrame::from_records(&records)
}

pub fn setup_default_calculator(
    test_name: &str,
    closes: &[f64],
) -> (Result<ReturnsCalculator, ReturnsError>, TracingGuards) {
    let guards = setup_test_tracing(test_name);
    info!("-----------------");
    info!("Test: {}", test_name);
    info!("-----------------");
    let frame = daily_frame(closes);
    (ReturnsCalculator::new(&frame), guards)
}
