//! Operator CLI: submit a registration described in a JSON file to the
//! live relay. Used to verify relay configuration end to end.

use anyhow::{Context, Result};
use institute_forms::config::Config;
use institute_forms::dialog::FormDialog;
use institute_forms::i18n::LanguageCode;
use institute_forms::notify::LogNotifier;
use institute_forms::registration::EventContext;
use institute_forms::schema::FormVariant;
use serde::Deserialize;
use std::collections::BTreeMap;
use tracing::info;

#[derive(Debug, Deserialize)]
struct SubmissionRequest {
    variant: FormVariant,
    context: EventContext,
    #[serde(default)]
    language: Option<String>,
    #[serde(default)]
    fields: BTreeMap<String, String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("institute_forms=info".parse()?),
        )
        .init();

    let path = std::env::args()
        .nth(1)
        .context("Usage: institute-forms <submission.json>")?;
    let raw = std::fs::read_to_string(&path).with_context(|| format!("Failed to read {}", path))?;
    let request: SubmissionRequest =
        serde_json::from_str(&raw).context("Invalid submission file")?;

    let config = Config::from_env()?;
    let client = reqwest::Client::new();

    let lang = request
        .language
        .as_deref()
        .and_then(LanguageCode::from_code)
        .unwrap_or(LanguageCode::En);

    let schema = request.variant.schema();
    info!("Submitting {} for '{}'", schema.registration_type, request.context.title);

    let mut dialog = FormDialog::open(schema, request.context, lang);
    for (name, value) in &request.fields {
        dialog.set_field(name, value.clone());
    }

    if dialog.submit(&config, &client, &LogNotifier).await {
        info!("Relay accepted the submission");
        Ok(())
    } else {
        anyhow::bail!("Submission failed")
    }
}
