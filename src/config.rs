use crate::errors::AppError;

pub const SUPABASE_URL_VAR: &str = "SUPABASE_URL";
pub const SUPABASE_ANON_KEY_VAR: &str = "SUPABASE_ANON_KEY";
pub const SUPABASE_SERVICE_KEY_VAR: &str = "SUPABASE_SERVICE_KEY";

#[derive(Debug, Clone)]
pub struct Config {
    pub supabase_url: String,
    pub anon_key: String,
    pub service_key: Option<String>, // Only the table survey uses it
}

impl Config {
    /// Loads `.env` (if any) and reads the Supabase credentials from the process environment.
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// Missing and blank values are treated the same way. The values themselves
    /// are passed through untouched.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &str| -> Result<String, AppError> {
            lookup(name)
                .filter(|value| !value.trim().is_empty())
                .ok_or_else(|| {
                    AppError::Config(format!("{} environment variable required", name))
                })
        };

        let config = Self {
            supabase_url: required(SUPABASE_URL_VAR)?,
            anon_key: required(SUPABASE_ANON_KEY_VAR)?,
            service_key: lookup(SUPABASE_SERVICE_KEY_VAR).filter(|s| !s.trim().is_empty()),
        };

        // Never log key material
        tracing::debug!("Supabase URL: {}", config.supabase_url);
        if config.service_key.is_some() {
            tracing::debug!("Service key configured");
        }

        Ok(config)
    }

    /// Key for the wider table survey: the service key when present, the anon key otherwise.
    pub fn survey_key(&self) -> &str {
        self.service_key.as_deref().unwrap_or(&self.anon_key)
    }
}
