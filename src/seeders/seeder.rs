use std::collections::HashMap;
use std::path::PathBuf;

use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};

use crate::db::SeedSession;
use crate::error::SeedError;
use super::constants::SeedTable;
use super::loader::{DataLoader, SeedFile};
use super::preparer::{preparer_for, Preparer};

/// Outcome of one seeding run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SeedReport {
    pub succeeded: usize,
    pub failed: usize,
    pub dry_run: bool,
}

/// Loads fixture files and inserts their rows in dependency order.
pub struct Seeder {
    models: Option<Vec<String>>,
    dry_run: bool,
    loader: DataLoader,
}

impl Seeder {
    /// `models` limits the run to the named tables; `None` seeds everything.
    pub fn new(
        data_folder: impl Into<PathBuf>,
        models: Option<Vec<String>>,
        dry_run: bool,
    ) -> Result<Self, SeedError> {
        Ok(Self {
            models,
            dry_run,
            loader: DataLoader::new(data_folder)?,
        })
    }

    pub fn get_file_patterns(&self) -> Vec<String> {
        file_patterns(self.models.as_deref())
    }

    /// Orders files by the seed order; tables outside it go last.
    pub fn order_seed_data(seed_data: Vec<SeedFile>) -> Vec<SeedFile> {
        let mut data_by_table: HashMap<String, SeedFile> = HashMap::new();
        let mut arrival: Vec<String> = Vec::new();

        for item in seed_data {
            let table_name = item.table_name.clone();
            if data_by_table.insert(table_name.clone(), item).is_some() {
                tracing::warn!("Table '{}' provided more than once, using the last file", table_name);
            } else {
                arrival.push(table_name);
            }
        }

        let mut ordered_data = Vec::with_capacity(data_by_table.len());

        for table in SeedTable::ORDER {
            tracing::debug!("ordering for table '{}'", table.table_name());
            match data_by_table.remove(table.table_name()) {
                Some(item) => ordered_data.push(item),
                None => tracing::debug!("Table '{}' in seed order but no data provided", table.table_name()),
            }
        }

        for table_name in arrival {
            if let Some(item) = data_by_table.remove(&table_name) {
                tracing::warn!("Table '{}' not in seed order, adding at end", table_name);
                ordered_data.push(item);
            }
        }

        ordered_data
    }

    /// Seeds one table inside a savepoint. Failures are logged, rolled back
    /// and reported as `false` so the remaining tables still run.
    pub async fn seed_table(txn: &DatabaseTransaction, table_data: &SeedFile) -> bool {
        let table_name = table_data.table_name.as_str();

        if table_data.data.is_empty() {
            tracing::info!("No data to seed for table '{}'", table_name);
            return true;
        }

        let Some(preparer) = preparer_for(table_name) else {
            tracing::warn!("No preparer found for table '{}'", table_name);
            return false;
        };

        let savepoint = match txn.begin().await {
            Ok(savepoint) => savepoint,
            Err(e) => {
                tracing::error!("Could not open savepoint for '{}': {}", table_name, e);
                return false;
            }
        };

        let result = match insert_prepared(&savepoint, preparer, table_data).await {
            Ok(inserted) => savepoint.commit().await.map(|_| inserted).map_err(SeedError::from),
            Err(e) => {
                if let Err(rollback_err) = savepoint.rollback().await {
                    tracing::error!("Rollback of '{}' failed: {}", table_name, rollback_err);
                }
                Err(e)
            }
        };

        match result {
            Ok(0) => true,
            Ok(inserted) => {
                tracing::info!("Successfully seeded {} records into '{}'", inserted, table_name);
                true
            }
            Err(SeedError::Db(e)) if e.sql_err().is_some() => {
                tracing::error!("Integrity error seeding '{}': {}", table_name, e);
                false
            }
            Err(SeedError::Db(e)) => {
                tracing::error!("Database error seeding '{}': {}", table_name, e);
                false
            }
            Err(e) => {
                tracing::error!("Unexpected error seeding '{}': {}", table_name, e);
                false
            }
        }
    }

    /// Runs the whole pipeline in one transaction; a dry run rolls it back.
    pub async fn run(&self, db: &DatabaseConnection) -> Result<SeedReport, SeedError> {
        let mut report = SeedReport {
            dry_run: self.dry_run,
            ..SeedReport::default()
        };

        let file_patterns = self.get_file_patterns();
        let seed_data = self.loader.load_data(&file_patterns)?;

        if seed_data.is_empty() {
            tracing::warn!("No data files found to seed in {}", self.loader.data_folder().display());
            return Ok(report);
        }

        let ordered_data = Self::order_seed_data(seed_data);

        let session = SeedSession::begin(db).await.map_err(|e| {
            tracing::error!("Session error: {}", e);
            e
        })?;

        for table_data in &ordered_data {
            if Self::seed_table(session.txn(), table_data).await {
                report.succeeded += 1;
            } else {
                report.failed += 1;
            }
        }

        tracing::info!(
            "Seeding complete: {} successful, {} failed",
            report.succeeded,
            report.failed
        );

        session.finish(self.dry_run).await.map_err(|e| {
            tracing::error!("Session error: {}", e);
            e
        })?;

        if self.dry_run {
            tracing::info!("Dry run completed - no changes were committed");
        }

        Ok(report)
    }
}

async fn insert_prepared(
    txn: &DatabaseTransaction,
    preparer: &dyn Preparer,
    table_data: &SeedFile,
) -> Result<u64, SeedError> {
    let rows = preparer.prepare(txn, &table_data.data).await?;
    if rows.is_empty() {
        tracing::info!("No records prepared for table '{}'", table_data.table_name);
        return Ok(0);
    }
    Ok(rows.insert_all(txn).await?)
}

/// File stems for the requested models. Unknown names are dropped; if none
/// remain, everything is loaded.
pub fn file_patterns(models: Option<&[String]>) -> Vec<String> {
    let models = match models {
        Some(models) if !models.is_empty() => models,
        _ => return vec!["*".to_string()],
    };

    let patterns: Vec<String> = models
        .iter()
        .filter_map(|model| {
            let table = SeedTable::from_model_name(model);
            if table.is_none() {
                tracing::warn!("Unknown model '{}', skipping", model);
            }
            table
        })
        .map(|table| table.file_stem().to_string())
        .collect();

    if patterns.is_empty() {
        tracing::warn!("No valid models found in: {:?}", models);
        return vec!["*".to_string()];
    }

    patterns
}
