use migration::Migrator;
use sea_orm_migration::cli;

#[tokio::main]
async fn main() {
    // DATABASE_URL selects the target database
    cli::run_cli(Migrator).await;
}
