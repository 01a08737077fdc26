use sea_orm_migration::prelude::*;
use migration::Migrator;

// Reads DATABASE_URL; run `migration up` before seeding.
#[async_std::main]
async fn main() {
    cli::run_cli(Migrator).await;
}
