//! userbase - HTTP service for the users table
//!
//! Waits for PostgreSQL, then serves CRUD over `/api/users`. Exits
//! non-zero when the database cannot be reached within the retry budget.

use anyhow::Result;
use clap::Parser;

mod commands;
mod tracing_setup;

use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(
    name = "userbase",
    author,
    version,
    about = "Users CRUD API over PostgreSQL",
    long_about = "Serve list/create/update/delete for the users table. The database \
                  connection string is read from --database-url, DB_DSN, or a .env file."
)]
struct Cli {
    /// Debug logging (when RUST_LOG is not set)
    #[arg(long)]
    debug: bool,

    #[command(flatten)]
    serve: commands::serve::ServeArgs,
}

#[tokio::main]
async fn main() -> Result<()> {
    // .env is optional
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    tracing_setup::init(&TracingConfig { debug: cli.debug }).ok();

    commands::run_serve(cli.serve).await
}
