//! The insert loop and its MySQL runner.

use crate::args::{CommonPopulateArgs, MySQLPopulateArgs};
use crate::error::MySQLPopulatorError;
use crate::insert::table_name;
use crate::sink::{MySQLSink, RowSink};
use idbench_generator::{GeneratorError, IdGenerator};
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// A progress line is logged for every row index divisible by this.
pub const PROGRESS_INTERVAL: u64 = 10_000;

/// Metrics from a populate operation.
#[derive(Debug, Clone, Default)]
pub struct PopulateMetrics {
    /// Number of rows inserted.
    pub rows_inserted: u64,
    /// Number of progress lines logged.
    pub progress_reports: u64,
    /// Wall-clock time of the insert loop.
    pub total_duration: Duration,
}

impl PopulateMetrics {
    /// Calculate rows per second.
    pub fn rows_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.rows_inserted as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }
}

/// Build the run's generator from the CLI arguments.
pub fn build_generator(args: &CommonPopulateArgs) -> Result<IdGenerator, GeneratorError> {
    let generator = IdGenerator::new(args.mode, args.seed);
    match args.snowflake_node {
        Some(node) => generator.with_snowflake_node(node),
        None => Ok(generator),
    }
}

/// Generate `count` rows and insert them into `sink` one at a time.
///
/// Stops at the first failed insert; rows already inserted stay in place.
pub async fn populate<S: RowSink + ?Sized>(
    sink: &mut S,
    generator: &mut IdGenerator,
    count: u64,
) -> Result<PopulateMetrics, MySQLPopulatorError> {
    let kind = generator.kind();
    let mut metrics = PopulateMetrics::default();

    let start_time = Instant::now();
    for _ in 0..count {
        let row = generator.next_row()?;
        sink.insert(&row).await?;
        metrics.rows_inserted += 1;

        if row.index % PROGRESS_INTERVAL == 0 {
            info!("Inserted {} rows", metrics.rows_inserted);
            metrics.progress_reports += 1;
        }
    }
    metrics.total_duration = start_time.elapsed();

    info!(
        "Inserted {} rows ({} mode) in {:?} ({:.2} rows/sec)",
        metrics.rows_inserted,
        kind,
        metrics.total_duration,
        metrics.rows_per_second()
    );

    Ok(metrics)
}

/// Run the insert loop against `sink`, then close it.
///
/// The sink is closed whether or not the loop succeeded; a loop error takes
/// precedence over a close error.
pub async fn populate_then_close<S: RowSink>(
    mut sink: S,
    generator: &mut IdGenerator,
    count: u64,
) -> Result<PopulateMetrics, MySQLPopulatorError> {
    let result = populate(&mut sink, generator, count).await;
    let closed = sink.close().await;

    match (result, closed) {
        (Ok(metrics), Ok(())) => Ok(metrics),
        (Ok(_), Err(e)) => Err(e),
        (Err(e), Ok(())) => Err(e),
        (Err(e), Err(close_err)) => {
            warn!("Failed to close row sink: {}", close_err);
            Err(e)
        }
    }
}

/// Connect to MySQL, run the insert loop, and release the connection.
pub async fn run_populate(args: &MySQLPopulateArgs) -> Result<PopulateMetrics, MySQLPopulatorError> {
    let mut generator = build_generator(&args.common)?;
    let kind = generator.kind();

    if let Some(node) = generator.snowflake_node() {
        info!("Using snowflake node {}", node);
    }

    let sink = MySQLSink::connect(&args.mysql_connection_string, kind).await?;

    info!(
        "Populating `{}` with {} rows (mode={})",
        table_name(kind),
        args.common.count,
        kind
    );

    populate_then_close(sink, &mut generator, args.common.count).await
}
