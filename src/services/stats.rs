//! Dashboard statistics service

use sqlx::Row;

use crate::{
    api::stats::{BookingStats, CatalogStats, StatsResponse, SubmissionStats, TimeSeriesEntry},
    error::AppResult,
    repository::Repository,
};

#[derive(Clone)]
pub struct StatsService {
    repository: Repository,
}

impl StatsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Assemble the dashboard statistics document
    pub async fn get_stats(&self) -> AppResult<StatsResponse> {
        let catalog = CatalogStats {
            attractions: self.repository.attractions.count_active().await?,
            hotels: self.repository.hotels.count_active().await?,
            transport: self.repository.transport.count_active().await?,
        };

        let submissions = self.submission_stats().await?;
        let bookings = self.booking_stats().await?;
        let bookings_by_month = self.monthly_bookings().await?;

        Ok(StatsResponse {
            catalog,
            submissions,
            bookings,
            bookings_by_month,
        })
    }

    async fn submission_stats(&self) -> AppResult<SubmissionStats> {
        let pool = &self.repository.pool;
        let rows = sqlx::query("SELECT status, COUNT(*) AS count FROM travel_submissions GROUP BY status")
            .fetch_all(pool)
            .await?;

        let mut stats = SubmissionStats::default();
        for row in rows {
            let status: String = row.get("status");
            let count: i64 = row.get("count");
            stats.total += count;
            match status.as_str() {
                "pending" => stats.pending = count,
                "processing" => stats.processing = count,
                "completed" => stats.completed = count,
                "cancelled" => stats.cancelled = count,
                _ => {}
            }
        }
        Ok(stats)
    }

    async fn booking_stats(&self) -> AppResult<BookingStats> {
        let pool = &self.repository.pool;
        let rows = sqlx::query("SELECT status, COUNT(*) AS count FROM bookings GROUP BY status")
            .fetch_all(pool)
            .await?;

        let mut stats = BookingStats::default();
        for row in rows {
            let status: String = row.get("status");
            let count: i64 = row.get("count");
            stats.total += count;
            match status.as_str() {
                "pending" => stats.pending = count,
                "confirmed" => stats.confirmed = count,
                "completed" => stats.completed = count,
                "cancelled" => stats.cancelled = count,
                _ => {}
            }
        }

        stats.total_downloads = sqlx::query_scalar::<_, i64>(
            "SELECT COALESCE(SUM(download_count), 0)::bigint FROM bookings",
        )
        .fetch_one(pool)
        .await?;

        Ok(stats)
    }

    /// Bookings created per month over the trailing 12 months
    async fn monthly_bookings(&self) -> AppResult<Vec<TimeSeriesEntry>> {
        let pool = &self.repository.pool;
        let rows = sqlx::query(
            r#"
            SELECT to_char(date_trunc('month', created_at), 'YYYY-MM') AS month,
                   COUNT(*) AS count
            FROM bookings
            WHERE created_at >= date_trunc('month', NOW()) - INTERVAL '11 months'
            GROUP BY 1
            ORDER BY 1
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| TimeSeriesEntry {
                month: row.get("month"),
                count: row.get("count"),
            })
            .collect())
    }
}
