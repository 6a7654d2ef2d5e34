//! Transport: one multipart POST per submission to the configured relay.

use crate::config::Config;
use anyhow::{Context, Result};
use reqwest::multipart::Form;
use tracing::error;

/// Submit a built form to the relay endpoint.
///
/// Success is defined purely by an HTTP-level ok status; the response body
/// is never parsed. A missing form identifier fails before any network
/// call and is indistinguishable from a transport failure for the caller.
pub async fn submit(config: &Config, client: &reqwest::Client, form: Form) -> Result<()> {
    let form_id = match &config.relay_form_id {
        Some(id) => id,
        None => {
            error!("RELAY_FORM_ID is not configured; dropping submission");
            anyhow::bail!("relay form ID not configured");
        }
    };

    let url = format!("{}/f/{}", config.relay_base_url.trim_end_matches('/'), form_id);

    let response = client
        .post(&url)
        .header("Accept", "application/json")
        .multipart(form)
        .send()
        .await
        .context("Failed to send request to form relay")?;

    if !response.status().is_success() {
        anyhow::bail!("Form relay error ({})", response.status());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::multipart::Form;

    fn config_without_form_id() -> Config {
        Config {
            relay_base_url: "http://127.0.0.1:1".to_string(),
            relay_form_id: None,
            contact_email: "admin@example.org".to_string(),
        }
    }

    #[tokio::test]
    async fn test_missing_form_id_fails_without_network_call() {
        // Base URL points at a closed port: an attempted request would
        // surface as a connection error, not the configuration message.
        let config = config_without_form_id();
        let client = reqwest::Client::new();

        let err = submit(&config, &client, Form::new())
            .await
            .expect_err("should fail");
        assert!(err.to_string().contains("not configured"));
    }

    #[tokio::test]
    async fn test_connection_error_is_contextualized() {
        let config = Config {
            relay_form_id: Some("test-form".to_string()),
            ..config_without_form_id()
        };
        let client = reqwest::Client::new();

        let err = submit(&config, &client, Form::new())
            .await
            .expect_err("should fail");
        assert!(err.to_string().contains("form relay"));
    }
}
