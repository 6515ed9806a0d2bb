//! Prints the tables of the `public` schema and the columns of the main tables.

use supabase_schema_check::config::Config;
use supabase_schema_check::inspector::SchemaInspector;
use supabase_schema_check::logging::init_tracing;
use supabase_schema_check::supabase_client::SupabaseRestClient;

/// Main entry point for the schema check.
///
/// Exits with status 1 before any request is sent when `SUPABASE_URL` or
/// `SUPABASE_ANON_KEY` is missing. Per-table failures are printed and do not
/// affect the exit status.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing()?;

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            println!("❌ SUPABASE_URL or SUPABASE_ANON_KEY is not set. ({})", e);
            std::process::exit(1);
        }
    };

    let client = SupabaseRestClient::new(config.supabase_url.clone(), &config.anon_key)?;
    let inspector = SchemaInspector::new(client);

    let mut stdout = std::io::stdout();
    inspector.run(&mut stdout).await?;

    Ok(())
}
