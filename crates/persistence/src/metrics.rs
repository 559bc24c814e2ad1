//! Store-level metrics for the PostgreSQL backend.
//!
//! Every repository query is timed under its own name and tagged with
//! whether it succeeded. Pool occupancy is sampled by the health endpoint.

use metrics::{gauge, histogram};
use sqlx::PgPool;
use std::time::Instant;

const QUERY_SECONDS: &str = "mentor_hub_store_query_seconds";

/// Connection counts taken from a pool at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolStats {
    pub size: u32,
    pub idle: u32,
}

impl PoolStats {
    pub fn sample(pool: &PgPool) -> Self {
        Self {
            size: pool.size(),
            idle: u32::try_from(pool.num_idle()).unwrap_or(u32::MAX),
        }
    }

    /// Connections checked out by a query. Idle can briefly exceed size while
    /// the pool is shrinking.
    pub fn in_use(&self) -> u32 {
        self.size.saturating_sub(self.idle)
    }

    pub fn publish(&self) {
        gauge!("mentor_hub_store_connections", "state" => "in_use").set(f64::from(self.in_use()));
        gauge!("mentor_hub_store_connections", "state" => "idle").set(f64::from(self.idle));
    }
}

/// Sample the pool and publish its gauges.
pub fn record_pool_metrics(pool: &PgPool) {
    PoolStats::sample(pool).publish();
}

/// Times one repository query.
///
/// ```ignore
/// let timer = QueryTimer::new("list_mentors");
/// let result = sqlx::query_as::<_, MentorEntity>(...).fetch_all(&self.pool).await;
/// timer.finish(result)
/// ```
pub struct QueryTimer {
    query: &'static str,
    start: Instant,
}

impl QueryTimer {
    pub fn new(query: &'static str) -> Self {
        Self {
            query,
            start: Instant::now(),
        }
    }

    /// Records the elapsed time and hands the query result back unchanged.
    pub fn finish<T, E>(self, result: Result<T, E>) -> Result<T, E> {
        let outcome = if result.is_ok() { "ok" } else { "error" };
        histogram!(QUERY_SECONDS, "query" => self.query, "outcome" => outcome)
            .record(self.start.elapsed().as_secs_f64());
        result
    }
}
