//! Backend Configuration
//!
//! Connection settings for the managed backend's REST interface.

use std::env;

/// Supabase-style REST endpoint settings
#[derive(Debug, Clone)]
pub struct BackendConfig {
    /// Project base URL, e.g. `https://xyz.supabase.co`
    pub base_url: String,
    /// Anonymous API key sent as `apikey` and bearer token
    pub anon_key: String,
}

impl BackendConfig {
    /// Read settings from the environment, falling back to values baked in
    /// at compile time.
    pub fn from_env() -> Self {
        let base_url = env::var("SUPABASE_URL")
            .ok()
            .or_else(|| option_env!("SUPABASE_URL").map(str::to_string))
            .unwrap_or_default();
        let anon_key = env::var("SUPABASE_ANON_KEY")
            .ok()
            .or_else(|| option_env!("SUPABASE_ANON_KEY").map(str::to_string))
            .unwrap_or_default();

        if base_url.is_empty() {
            log::warn!("SUPABASE_URL is not set; place fetches will fail");
        }

        Self { base_url, anon_key }
    }

    pub fn new(base_url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            anon_key: anon_key.into(),
        }
    }
}
