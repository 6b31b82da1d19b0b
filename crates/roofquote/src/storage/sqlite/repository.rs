//! SQLite repository implementation.
//!
//! Implements `QuoteRepository` from `roofquote_core::storage` using SQLite.
//! All statements run on the single `tokio_rusqlite` connection thread, which
//! serializes writers.

use std::collections::BTreeMap;

use async_trait::async_trait;
use rusqlite::types::FromSql;
use tokio_rusqlite::Connection;

use roofquote_core::quote::{
    round_to_cents, FilterOptions, NewQuote, Quote, QuoteFilter, StatsFilter, SummaryStats,
};
use roofquote_core::storage::{QuoteRepository, RepositoryError, Result};

use super::conversions::{roof_size_to_sql, row_to_quote};
use super::error::map_tokio_rusqlite_error;
use super::filters::{build_where_clause, WhereClause};
use super::schema;

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// Runs a single-column query and collects the (nullable) text values.
fn distinct_column(
    conn: &rusqlite::Connection,
    sql: &str,
) -> std::result::Result<Vec<Option<String>>, tokio_rusqlite::Error> {
    let mut stmt = conn.prepare(sql).map_err(wrap_err)?;
    let rows = stmt
        .query_map([], |row| row.get::<_, Option<String>>(0))
        .map_err(wrap_err)?;

    let mut values = Vec::new();
    for row_result in rows {
        values.push(row_result.map_err(wrap_err)?);
    }
    Ok(values)
}

/// SQLite-based quote repository.
pub struct SqliteRepository {
    conn: Connection,
}

impl SqliteRepository {
    /// Opens a file-based database, creating the file and schema if needed.
    pub async fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        let repo = Self { conn };
        repo.init_schema().await?;

        tracing::debug!(path, "Opened SQLite quote store");

        Ok(repo)
    }

    /// Creates a repository with an in-memory database.
    ///
    /// Useful for testing - data is lost when the connection is dropped.
    pub async fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        let repo = Self { conn };
        repo.init_schema().await?;

        Ok(repo)
    }

    /// Runs a `GROUP BY` template and collects (group, aggregate) pairs.
    /// The templates already key NULL groups, so every group is distinct.
    async fn grouped<T>(
        &self,
        template: &'static str,
        filter: &StatsFilter,
    ) -> Result<BTreeMap<String, T>>
    where
        T: FromSql + Send + 'static,
    {
        let WhereClause { sql, values } = build_where_clause(&filter.conditions());
        let query = schema::with_where(template, &sql);

        self.conn
            .call(move |conn| {
                let mut stmt = conn.prepare(&query).map_err(wrap_err)?;
                let rows = stmt
                    .query_map(rusqlite::params_from_iter(values.iter()), |row| {
                        Ok((row.get::<_, String>(0)?, row.get::<_, T>(1)?))
                    })
                    .map_err(wrap_err)?;

                let mut groups = BTreeMap::new();
                for row_result in rows {
                    let (key, value) = row_result.map_err(wrap_err)?;
                    groups.insert(key, value);
                }
                Ok(groups)
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }
}

#[async_trait]
impl QuoteRepository for SqliteRepository {
    async fn init_schema(&self) -> Result<()> {
        self.conn
            .call(|conn| {
                conn.execute_batch(schema::CREATE_TABLES).map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }

    async fn create_quote(&self, quote: &NewQuote) -> Result<i64> {
        let contractor_name = quote.contractor_name.clone();
        let company = quote.company.clone();
        let roof_size = roof_size_to_sql(quote.roof_size.as_ref());
        let roof_type = quote.roof_type.clone();
        let city = quote.city.clone();
        let state = quote.state.clone();
        let project_date = quote.project_date.clone();

        self.conn
            .call(move |conn| {
                conn.execute(
                    schema::INSERT_QUOTE,
                    rusqlite::params![
                        contractor_name,
                        company,
                        roof_size,
                        roof_type,
                        city,
                        state,
                        project_date
                    ],
                )
                .map_err(wrap_err)?;
                Ok(conn.last_insert_rowid())
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }

    async fn list_quotes(&self, filter: &QuoteFilter) -> Result<Vec<Quote>> {
        let WhereClause { sql, values } = build_where_clause(&filter.conditions());
        let query = schema::with_where(schema::SELECT_QUOTES, &sql);

        self.conn
            .call(move |conn| {
                let mut stmt = conn.prepare(&query).map_err(wrap_err)?;
                let rows = stmt
                    .query_map(rusqlite::params_from_iter(values.iter()), row_to_quote)
                    .map_err(wrap_err)?;

                let mut quotes = Vec::new();
                for row_result in rows {
                    quotes.push(row_result.map_err(wrap_err)?);
                }
                Ok(quotes)
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }

    async fn filter_options(&self) -> Result<FilterOptions> {
        self.conn
            .call(|conn| {
                Ok(FilterOptions {
                    states: distinct_column(conn, schema::SELECT_DISTINCT_STATES)?,
                    roof_types: distinct_column(conn, schema::SELECT_DISTINCT_ROOF_TYPES)?,
                    dates: distinct_column(conn, schema::SELECT_DISTINCT_DATES)?,
                })
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }

    async fn summary(&self, filter: &StatsFilter) -> Result<SummaryStats> {
        let WhereClause { sql, values } = build_where_clause(&filter.conditions());
        let totals_query = schema::with_where(schema::SUMMARY_TOTALS, &sql);
        let common_query = schema::with_where(schema::MOST_COMMON_ROOF_TYPE, &sql);

        self.conn
            .call(move |conn| {
                let (total, average) = conn
                    .query_row(
                        &totals_query,
                        rusqlite::params_from_iter(values.iter()),
                        |row| Ok((row.get::<_, i64>(0)?, row.get::<_, Option<f64>>(1)?)),
                    )
                    .map_err(wrap_err)?;

                let most_common = match conn.query_row(
                    &common_query,
                    rusqlite::params_from_iter(values.iter()),
                    |row| row.get::<_, Option<String>>(0),
                ) {
                    Ok(roof_type) => Some(roof_type),
                    Err(rusqlite::Error::QueryReturnedNoRows) => None,
                    Err(e) => return Err(wrap_err(e)),
                };

                Ok(SummaryStats::from_aggregates(total, average, most_common))
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }

    async fn count_by_state(&self, filter: &StatsFilter) -> Result<BTreeMap<String, i64>> {
        self.grouped(schema::COUNT_BY_STATE, filter).await
    }

    async fn average_size_by_roof_type(
        &self,
        filter: &StatsFilter,
    ) -> Result<BTreeMap<String, f64>> {
        let groups = self
            .grouped::<Option<f64>>(schema::AVERAGE_SIZE_BY_ROOF_TYPE, filter)
            .await?;

        Ok(groups
            .into_iter()
            .map(|(roof_type, average)| (roof_type, round_to_cents(average.unwrap_or(0.0))))
            .collect())
    }

    async fn monthly_trend(&self, filter: &StatsFilter) -> Result<BTreeMap<String, i64>> {
        self.grouped(schema::MONTHLY_TREND, filter).await
    }

    async fn ping(&self) -> Result<()> {
        self.conn
            .call(|conn| {
                conn.query_row(schema::PING, [], |row| row.get::<_, i64>(0))
                    .map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }

    async fn close(&self) -> Result<()> {
        self.conn
            .clone()
            .close()
            .await
            .map_err(map_tokio_rusqlite_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roofquote_core::quote::{RoofSize, NO_ROOF_TYPE};

    async fn repo_with(quotes: Vec<NewQuote>) -> SqliteRepository {
        let repo = SqliteRepository::new_in_memory().await.unwrap();
        for quote in &quotes {
            repo.create_quote(quote).await.unwrap();
        }
        repo
    }

    fn quote(state: &str, roof_type: &str, size: i64, date: &str) -> NewQuote {
        NewQuote::default()
            .with_state(state)
            .with_roof_type(roof_type)
            .with_roof_size(size)
            .with_project_date(date)
    }

    // ==================== Store Initialization ====================

    #[tokio::test]
    async fn test_init_schema_is_idempotent() {
        let repo = repo_with(vec![quote("TX", "Metal", 100, "2023-01-05")]).await;

        repo.init_schema().await.unwrap();
        repo.init_schema().await.unwrap();

        let quotes = repo.list_quotes(&QuoteFilter::default()).await.unwrap();
        assert_eq!(quotes.len(), 1);
    }

    // ==================== Submission & Listing ====================

    #[tokio::test]
    async fn test_create_assigns_increasing_ids() {
        let repo = SqliteRepository::new_in_memory().await.unwrap();

        let first = repo.create_quote(&NewQuote::default()).await.unwrap();
        let second = repo.create_quote(&NewQuote::default()).await.unwrap();

        assert!(second > first);
    }

    #[tokio::test]
    async fn test_create_and_list_preserves_fields() {
        let submitted = NewQuote::default()
            .with_contractor_name("Dana Reyes")
            .with_company("Summit Roofing")
            .with_roof_size(2400)
            .with_roof_type("Asphalt Shingle")
            .with_city("Austin")
            .with_state("TX")
            .with_project_date("2024-03-18");
        let repo = repo_with(vec![submitted.clone()]).await;

        let quotes = repo.list_quotes(&QuoteFilter::default()).await.unwrap();

        assert_eq!(quotes.len(), 1);
        let stored = quotes[0].clone();
        assert_eq!(stored, Quote::from_new(stored.id, submitted));
    }

    #[tokio::test]
    async fn test_absent_fields_are_stored_as_null() {
        let repo = repo_with(vec![NewQuote::default().with_city("Denver")]).await;

        let quotes = repo.list_quotes(&QuoteFilter::default()).await.unwrap();

        assert_eq!(quotes[0].city.as_deref(), Some("Denver"));
        assert!(quotes[0].state.is_none());
        assert!(quotes[0].roof_size.is_none());
    }

    #[tokio::test]
    async fn test_roof_size_text_is_coerced_or_kept() {
        let repo = repo_with(vec![
            NewQuote::default().with_roof_size("1500"),
            NewQuote::default().with_roof_size("about 2000"),
        ])
        .await;

        let quotes = repo.list_quotes(&QuoteFilter::default()).await.unwrap();

        assert_eq!(quotes[0].roof_size, Some(RoofSize::from(1500)));
        assert_eq!(quotes[1].roof_size, Some(RoofSize::from("about 2000")));
    }

    #[tokio::test]
    async fn test_list_returns_insertion_order() {
        let repo = repo_with(vec![
            quote("WA", "Metal", 1, "2023-01-01"),
            quote("AK", "Metal", 2, "2023-01-01"),
            quote("MI", "Metal", 3, "2023-01-01"),
        ])
        .await;

        let quotes = repo.list_quotes(&QuoteFilter::default()).await.unwrap();
        let states: Vec<_> = quotes.iter().map(|q| q.state.clone().unwrap()).collect();

        assert_eq!(states, vec!["WA", "AK", "MI"]);
    }

    #[tokio::test]
    async fn test_list_filters_are_exact_and_combined() {
        let repo = repo_with(vec![
            quote("TX", "Metal", 100, "2023-01-01"),
            quote("tx", "Metal", 100, "2023-01-01"),
            quote("TX", "Tile", 100, "2023-01-01"),
        ])
        .await;

        let by_state = repo
            .list_quotes(&QuoteFilter {
                state: Some("TX".to_string()),
                roof_type: None,
            })
            .await
            .unwrap();
        assert_eq!(by_state.len(), 2);
        assert!(by_state.iter().all(|q| q.state.as_deref() == Some("TX")));

        let both = repo
            .list_quotes(&QuoteFilter {
                state: Some("TX".to_string()),
                roof_type: Some("Tile".to_string()),
            })
            .await
            .unwrap();
        assert_eq!(both.len(), 1);
        assert_eq!(both[0].roof_type.as_deref(), Some("Tile"));
    }

    // ==================== Filter Enumeration ====================

    #[tokio::test]
    async fn test_filter_options_sorted_and_distinct() {
        let repo = repo_with(vec![
            quote("TX", "Tile", 100, "2023-05-01"),
            quote("CA", "Metal", 100, "2024-01-15"),
            quote("TX", "Metal", 100, "2023-05-01"),
            quote("AZ", "Asphalt", 100, "2023-05-02"),
        ])
        .await;

        let options = repo.filter_options().await.unwrap();

        let some = |v: &[&str]| v.iter().map(|s| Some(s.to_string())).collect::<Vec<_>>();
        assert_eq!(options.states, some(&["AZ", "CA", "TX"]));
        assert_eq!(options.roof_types, some(&["Asphalt", "Metal", "Tile"]));
        assert_eq!(
            options.dates,
            some(&["2024-01-15", "2023-05-02", "2023-05-01"])
        );
    }

    #[tokio::test]
    async fn test_filter_options_keep_nulls() {
        let repo = repo_with(vec![
            NewQuote::default().with_state("NV"),
            NewQuote::default(),
        ])
        .await;

        let options = repo.filter_options().await.unwrap();

        assert_eq!(options.states, vec![None, Some("NV".to_string())]);
        assert_eq!(options.roof_types, vec![None]);
    }

    // ==================== Statistics ====================

    #[tokio::test]
    async fn test_summary_without_data() {
        let repo = SqliteRepository::new_in_memory().await.unwrap();

        let summary = repo.summary(&StatsFilter::default()).await.unwrap();

        assert_eq!(summary.total_projects, 0);
        assert_eq!(summary.average_roof_size, 0.0);
        assert_eq!(summary.common_roof_type.as_deref(), Some(NO_ROOF_TYPE));
    }

    #[tokio::test]
    async fn test_summary_average_and_mode() {
        let repo = repo_with(vec![
            quote("TX", "Metal", 100, "2023-01-01"),
            quote("TX", "Metal", 200, "2023-02-01"),
            quote("CA", "Metal", 300, "2023-03-01"),
            quote("CA", "Tile", 1000, "2024-03-01"),
        ])
        .await;

        let all = repo.summary(&StatsFilter::default()).await.unwrap();
        assert_eq!(all.total_projects, 4);
        assert_eq!(all.average_roof_size, 400.0);
        assert_eq!(all.common_roof_type.as_deref(), Some("Metal"));

        let year_2023 = repo
            .summary(&StatsFilter::default().with_year("2023"))
            .await
            .unwrap();
        assert_eq!(year_2023.total_projects, 3);
        assert_eq!(year_2023.average_roof_size, 200.0);
    }

    #[tokio::test]
    async fn test_summary_rounds_average() {
        let repo = repo_with(vec![
            quote("TX", "Metal", 100, "2023-01-01"),
            quote("TX", "Metal", 100, "2023-01-01"),
            quote("TX", "Metal", 101, "2023-01-01"),
        ])
        .await;

        let summary = repo.summary(&StatsFilter::default()).await.unwrap();

        assert_eq!(summary.average_roof_size, 100.33);
    }

    #[tokio::test]
    async fn test_summary_average_tie_rounds_to_even() {
        let mut quotes = vec![quote("TX", "Metal", 100, "2023-01-01"); 7];
        quotes.push(quote("TX", "Metal", 101, "2023-01-01"));
        let repo = repo_with(quotes).await;

        let summary = repo.summary(&StatsFilter::default()).await.unwrap();

        assert_eq!(summary.average_roof_size, 100.12);
    }

    #[tokio::test]
    async fn test_summary_tie_break_is_lexicographic() {
        let repo = repo_with(vec![
            quote("TX", "Tile", 100, "2023-01-01"),
            quote("TX", "Asphalt", 100, "2023-01-01"),
            quote("TX", "Tile", 100, "2023-01-01"),
            quote("TX", "Asphalt", 100, "2023-01-01"),
        ])
        .await;

        let summary = repo.summary(&StatsFilter::default()).await.unwrap();

        assert_eq!(summary.common_roof_type.as_deref(), Some("Asphalt"));
    }

    #[tokio::test]
    async fn test_summary_with_filter_matching_nothing() {
        let repo = repo_with(vec![quote("TX", "Metal", 100, "2023-01-01")]).await;

        let summary = repo
            .summary(&StatsFilter::default().with_state("ZZ"))
            .await
            .unwrap();

        assert_eq!(summary.total_projects, 0);
        assert_eq!(summary.common_roof_type.as_deref(), Some(NO_ROOF_TYPE));
    }

    #[tokio::test]
    async fn test_count_by_state_with_year_filter() {
        let repo = repo_with(vec![
            quote("TX", "Metal", 100, "2023-01-01"),
            quote("TX", "Metal", 100, "2023-07-14"),
            quote("CA", "Metal", 100, "2022-12-31"),
            quote("OR", "Metal", 100, "2023-11-30"),
        ])
        .await;

        let counts = repo
            .count_by_state(&StatsFilter::default().with_year("2023"))
            .await
            .unwrap();

        assert_eq!(counts.len(), 2);
        assert_eq!(counts["TX"], 2);
        assert_eq!(counts["OR"], 1);
        assert!(!counts.contains_key("CA"));
    }

    #[tokio::test]
    async fn test_malformed_dates_never_match_year() {
        let repo = repo_with(vec![
            quote("TX", "Metal", 100, "2023/01/01"),
            quote("TX", "Metal", 100, "someday"),
        ])
        .await;

        let counts = repo
            .count_by_state(&StatsFilter::default().with_year("2023"))
            .await
            .unwrap();

        assert!(counts.is_empty());
    }

    #[tokio::test]
    async fn test_average_size_by_roof_type() {
        let repo = repo_with(vec![
            quote("TX", "Metal", 100, "2023-01-01"),
            quote("TX", "Metal", 201, "2023-01-01"),
            quote("TX", "Tile", 300, "2023-01-01"),
            NewQuote::default().with_roof_type("Slate"),
        ])
        .await;

        let averages = repo
            .average_size_by_roof_type(&StatsFilter::default())
            .await
            .unwrap();

        assert_eq!(averages["Metal"], 150.5);
        assert_eq!(averages["Tile"], 300.0);
        assert_eq!(averages["Slate"], 0.0);
    }

    #[tokio::test]
    async fn test_monthly_trend_is_ascending() {
        let repo = repo_with(vec![
            quote("TX", "Metal", 100, "2024-02-10"),
            quote("TX", "Metal", 100, "2023-11-01"),
            quote("TX", "Metal", 100, "2024-02-28"),
            quote("TX", "Metal", 100, "2023-01-09"),
        ])
        .await;

        let trend = repo.monthly_trend(&StatsFilter::default()).await.unwrap();
        let months: Vec<_> = trend.keys().cloned().collect();

        assert_eq!(months, vec!["2023-01", "2023-11", "2024-02"]);
        assert_eq!(trend["2024-02"], 2);
    }

    #[tokio::test]
    async fn test_grouped_null_values_use_null_key() {
        let repo = repo_with(vec![
            NewQuote::default().with_project_date("2023-04-01"),
            quote("TX", "Metal", 100, "2023-04-02"),
        ])
        .await;

        let counts = repo.count_by_state(&StatsFilter::default()).await.unwrap();

        assert_eq!(counts["null"], 1);
        assert_eq!(counts["TX"], 1);
    }

    #[tokio::test]
    async fn test_null_and_literal_null_groups_are_merged() {
        let repo = repo_with(vec![
            NewQuote::default().with_roof_type("Metal").with_roof_size(100),
            quote("null", "null", 200, "2023-04-02"),
            quote("null", "null", 600, "2023-04-09"),
        ])
        .await;
        let filter = StatsFilter::default();

        let counts = repo.count_by_state(&filter).await.unwrap();
        assert_eq!(counts.len(), 1);
        assert_eq!(counts["null"], 3);

        let averages = repo.average_size_by_roof_type(&filter).await.unwrap();
        assert_eq!(averages["Metal"], 100.0);
        assert_eq!(averages["null"], 400.0);

        let months = repo.monthly_trend(&filter).await.unwrap();
        assert_eq!(months["null"], 1);
        assert_eq!(months["2023-04"], 2);
        assert_eq!(months.values().sum::<i64>(), 3);
    }

    // ==================== Lifecycle ====================

    #[tokio::test]
    async fn test_ping() {
        let repo = SqliteRepository::new_in_memory().await.unwrap();
        repo.ping().await.unwrap();
    }

    #[tokio::test]
    async fn test_close_rejects_further_queries() {
        let repo = SqliteRepository::new_in_memory().await.unwrap();

        repo.close().await.unwrap();
        let result = repo.list_quotes(&QuoteFilter::default()).await;

        assert!(matches!(result, Err(RepositoryError::ConnectionFailed(_))));
    }

    #[tokio::test]
    async fn test_file_backed_store_persists_across_reopen() {
        let path = std::env::temp_dir().join(format!(
            "roofquote-test-{}-{}.db",
            std::process::id(),
            rand::random::<u32>()
        ));
        let path_str = path.to_string_lossy().to_string();

        let repo = SqliteRepository::new(&path_str).await.unwrap();
        repo.create_quote(&quote("UT", "Metal", 900, "2024-06-01"))
            .await
            .unwrap();
        repo.close().await.unwrap();

        let reopened = SqliteRepository::new(&path_str).await.unwrap();
        let quotes = reopened.list_quotes(&QuoteFilter::default()).await.unwrap();
        reopened.close().await.unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(quotes.len(), 1);
        assert_eq!(quotes[0].state.as_deref(), Some("UT"));
    }
}
