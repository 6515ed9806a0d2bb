//! Utility to survey which tables exist and print the column layout of the whole schema.

use supabase_schema_check::config::Config;
use supabase_schema_check::inspector::{SchemaInspector, SURVEY_TABLES};
use supabase_schema_check::logging::init_tracing;
use supabase_schema_check::supabase_client::SupabaseRestClient;

/// Main entry point for the table survey.
///
/// Uses `SUPABASE_SERVICE_KEY` when set so RLS-protected tables are visible,
/// falling back to the anon key.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing()?;

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            println!("❌ {}", e);
            std::process::exit(1);
        }
    };

    if config.service_key.is_none() {
        tracing::warn!("SUPABASE_SERVICE_KEY not set, surveying with the anon key");
    }

    let client = SupabaseRestClient::new(config.supabase_url.clone(), config.survey_key())?;
    let inspector = SchemaInspector::new(client).with_tables(&SURVEY_TABLES);

    let mut stdout = std::io::stdout();
    inspector.survey(&mut stdout).await?;

    Ok(())
}
