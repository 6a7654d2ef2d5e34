use anyhow::Result;

/// Default relay host; overridable so tests can point at a mock server.
pub const DEFAULT_RELAY_BASE_URL: &str = "https://formspree.io";

/// Fallback administrative contact shown on the site when none is configured.
pub const DEFAULT_CONTACT_EMAIL: &str = "info@institute.example.org";

#[derive(Debug, Clone)]
pub struct Config {
    // Form relay
    pub relay_base_url: String,
    pub relay_form_id: Option<String>,

    // Contact
    pub contact_email: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            relay_base_url: std::env::var("RELAY_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_RELAY_BASE_URL.to_string()),

            // Deliberately optional here: a missing form ID must surface as
            // a submission failure at submit time, not a startup failure.
            relay_form_id: std::env::var("RELAY_FORM_ID")
                .ok()
                .filter(|v| !v.is_empty()),

            contact_email: std::env::var("CONTACT_EMAIL")
                .unwrap_or_else(|_| DEFAULT_CONTACT_EMAIL.to_string()),
        })
    }
}
