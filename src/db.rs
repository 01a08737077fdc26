use std::time::Duration;

use sea_orm::{
    ConnectOptions, Database, DatabaseConnection, DatabaseTransaction, DbErr, TransactionTrait,
};

use crate::config::Config;

/// Opens the connection pool. SQL statements are only logged in debug mode.
pub async fn connect(config: &Config) -> Result<DatabaseConnection, DbErr> {
    let mut opt = ConnectOptions::new(config.database_url.clone());
    opt.test_before_acquire(true)
        .connect_timeout(Duration::from_secs(10))
        .sqlx_logging(config.debug);

    tracing::debug!("Connecting to database (sql logging: {})", config.debug);
    Database::connect(opt).await
}

/// One seeding transaction. Dropping it without `finish` rolls everything back.
pub struct SeedSession {
    txn: DatabaseTransaction,
}

impl SeedSession {
    pub async fn begin(db: &DatabaseConnection) -> Result<Self, DbErr> {
        let txn = db.begin().await?;
        Ok(Self { txn })
    }

    pub fn txn(&self) -> &DatabaseTransaction {
        &self.txn
    }

    pub async fn finish(self, dry_run: bool) -> Result<(), DbErr> {
        if dry_run {
            tracing::info!("Dry run mode: Rolling back changes");
            self.txn.rollback().await
        } else {
            self.txn.commit().await?;
            tracing::info!("Changes committed to database");
            Ok(())
        }
    }
}
