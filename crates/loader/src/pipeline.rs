//! The load sequence: fetch, map, bulk-save and commit each resource in
//! foreign-key order.

use jph_core::resource::Resource;
use jph_fetcher::RecordSource;
use sqlx::{PgConnection, Postgres, Transaction};

use crate::batch::Batch;
use crate::error::LoadError;
use crate::report::LoadReport;
use crate::session::{LoadSession, TransactionMode};
use crate::state::LoadState;

/// Drives one run over a [`RecordSource`].
pub struct Loader<S> {
    source: S,
}

impl<S: RecordSource> Loader<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Load all six resources through `session`.
    ///
    /// Stops at the first error of any kind. The in-flight transaction is
    /// rolled back explicitly before the error is returned; in
    /// [`TransactionMode::PerResource`] the resources committed before the
    /// failure remain in the database.
    pub async fn run(&self, session: &LoadSession) -> Result<LoadReport, LoadError> {
        let mut report = LoadReport::new(session.mode());
        tracing::info!(mode = %session.mode(), "Starting data processing");

        match session.mode() {
            TransactionMode::PerResource => self.run_per_resource(session, &mut report).await?,
            TransactionMode::Single => self.run_single(session, &mut report).await?,
        }

        report.finish();
        tracing::info!(
            rows = report.total_inserted(),
            state = %LoadState::Done,
            "Data processing completed"
        );
        Ok(report)
    }

    async fn run_per_resource(
        &self,
        session: &LoadSession,
        report: &mut LoadReport,
    ) -> Result<(), LoadError> {
        let mut state = LoadState::Init.advance();

        while let LoadState::Loading(resource) = state {
            let mut tx = session
                .pool()
                .begin()
                .await
                .map_err(|source| LoadError::Database { resource, source })?;

            match self.load_step(resource, &mut tx).await {
                Ok((fetched, inserted)) => {
                    tx.commit()
                        .await
                        .map_err(|source| LoadError::Database { resource, source })?;
                    tracing::info!(%resource, rows = inserted, "Saved and committed");
                    report.record(resource, fetched, inserted);
                }
                Err(e) => {
                    roll_back(tx, state).await;
                    return Err(e);
                }
            }

            state = state.advance();
        }

        Ok(())
    }

    async fn run_single(
        &self,
        session: &LoadSession,
        report: &mut LoadReport,
    ) -> Result<(), LoadError> {
        let mut tx = session
            .pool()
            .begin()
            .await
            .map_err(LoadError::Transaction)?;
        let mut state = LoadState::Init.advance();

        while let LoadState::Loading(resource) = state {
            match self.load_step(resource, &mut tx).await {
                Ok((fetched, inserted)) => {
                    tracing::info!(%resource, rows = inserted, "Saved, awaiting final commit");
                    report.record(resource, fetched, inserted);
                }
                Err(e) => {
                    roll_back(tx, state).await;
                    return Err(e);
                }
            }

            state = state.advance();
        }

        tx.commit().await.map_err(LoadError::Transaction)?;
        tracing::info!(rows = report.total_inserted(), "Committed all resources");
        Ok(())
    }

    /// Fetch, map and stage one resource on `conn`. Returns the number of
    /// records fetched and rows written.
    async fn load_step(
        &self,
        resource: Resource,
        conn: &mut PgConnection,
    ) -> Result<(usize, u64), LoadError> {
        let records = self
            .source
            .fetch(resource)
            .await
            .map_err(|source| LoadError::Fetch { resource, source })?;
        let fetched = records.len();

        let batch = Batch::map(resource, records)?;
        let inserted = batch
            .insert(conn)
            .await
            .map_err(|source| LoadError::Database { resource, source })?;

        Ok((fetched, inserted))
    }
}

/// Best-effort rollback of the transaction open when `failed_at` failed.
async fn roll_back(tx: Transaction<'_, Postgres>, failed_at: LoadState) {
    let state = failed_at.fail();
    tracing::warn!(%failed_at, %state, "Rolling back in-flight work");

    if let Err(e) = tx.rollback().await {
        tracing::warn!(error = %e, "Rollback failed");
    }

    tracing::debug!(state = %state.advance(), "Load session closed");
}
