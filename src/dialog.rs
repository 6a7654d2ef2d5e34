//! Form dialog state machine: one generic engine for all three variants.
//!
//! A dialog owns its field state exclusively. Submission runs
//! validate -> build payload -> single relay call; field state survives a
//! failed submission so the user can retry, and is reset only on success.
//! The busy flag is cleared unconditionally after either outcome.

use crate::config::Config;
use crate::i18n::{LanguageCode, TranslationTable};
use crate::notify::Notifier;
use crate::payload;
use crate::registration::{CvFile, CvRejection, EventContext, ExperienceLevel};
use crate::relay;
use crate::schema::{FieldMap, ValidationIssue, VariantSchema};
use tracing::{info, warn};

pub struct FormDialog {
    schema: &'static VariantSchema,
    context: EventContext,
    lang: LanguageCode,
    fields: FieldMap,
    attachment: Option<CvFile>,
    open: bool,
    busy: bool,
}

impl FormDialog {
    /// Open a dialog for one variant with the context the page supplies.
    pub fn open(schema: &'static VariantSchema, context: EventContext, lang: LanguageCode) -> Self {
        Self {
            schema,
            context,
            lang,
            fields: schema.initial_fields(),
            attachment: None,
            open: true,
            busy: false,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn schema(&self) -> &'static VariantSchema {
        self.schema
    }

    pub fn field(&self, name: &str) -> &str {
        self.fields.get(name).map(String::as_str).unwrap_or("")
    }

    pub fn attachment(&self) -> Option<&CvFile> {
        self.attachment.as_ref()
    }

    /// Set a field value. Names not in the schema are ignored.
    pub fn set_field(&mut self, name: &str, value: impl Into<String>) {
        if let Some(rule) = self.schema.rule(name) {
            self.fields.insert(rule.name, value.into());
        }
    }

    pub fn set_experience_level(&mut self, level: ExperienceLevel) {
        self.set_field("experience_level", level.label());
    }

    /// Offer a file as the CV attachment.
    ///
    /// A rejected selection notifies the user and leaves any previously
    /// accepted attachment in place; it is dropped, not cleared. Variants
    /// without a file input ignore the offer entirely.
    pub fn attach_cv(
        &mut self,
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: Vec<u8>,
        notifier: &dyn Notifier,
    ) -> bool {
        if !self.schema.accepts_attachment {
            return false;
        }

        match CvFile::new(file_name, content_type, bytes) {
            Ok(cv) => {
                self.attachment = Some(cv);
                true
            }
            Err(rejection) => {
                warn!("CV selection rejected: {}", rejection);
                let message = match rejection {
                    CvRejection::TooLarge { .. } => {
                        self.text("forms.cv.too_large", "CV file must be 5 MB or smaller.")
                    }
                    CvRejection::UnsupportedType { .. } => {
                        self.text("forms.cv.unsupported", "Please upload a PDF or Word document.")
                    }
                };
                notifier.error(&message);
                false
            }
        }
    }

    /// Close the dialog. Refused while a submission is in flight.
    pub fn request_close(&mut self) -> bool {
        if self.busy {
            return false;
        }
        self.open = false;
        true
    }

    /// Run one submission. Returns `true` on relay-confirmed success.
    ///
    /// Validation failures never reach the transport and never touch the
    /// busy flag. All transport-level outcomes (non-ok status, network
    /// fault, missing relay configuration) surface as the same generic
    /// failure notification; details stay in the log.
    pub async fn submit(
        &mut self,
        config: &Config,
        client: &reqwest::Client,
        notifier: &dyn Notifier,
    ) -> bool {
        if let Err(issues) = self.schema.validate(&self.fields) {
            let message = if issues.iter().any(|i| matches!(i, ValidationIssue::Missing(_))) {
                self.text(
                    "forms.validation.required",
                    "Please fill in all required fields.",
                )
            } else {
                self.text(
                    "forms.validation.motivation_length",
                    "Your motivation statement must be at least 50 characters.",
                )
            };
            notifier.error(&message);
            return false;
        }

        self.busy = true;

        let form = payload::build_form(
            self.schema,
            &self.context,
            &self.fields,
            self.attachment.as_ref(),
        );
        let outcome = relay::submit(config, client, form).await;

        let succeeded = match outcome {
            Ok(()) => {
                info!(
                    "{} submitted for '{}'",
                    self.schema.registration_type, self.context.title
                );
                self.fields = self.schema.initial_fields();
                self.attachment = None;
                self.open = false;
                notifier.success(&self.text(
                    "forms.notifications.success",
                    "Registration submitted successfully!",
                ));
                true
            }
            Err(e) => {
                warn!(
                    "{} submission failed: {:#}",
                    self.schema.registration_type, e
                );
                notifier.error(&self.text(
                    "forms.notifications.failure",
                    "Submission failed. Please try again.",
                ));
                false
            }
        };

        // Cleared on every path out of Submitting.
        self.busy = false;
        succeeded
    }

    fn text(&self, path: &str, default: &str) -> String {
        TranslationTable::get().text(self.lang, path, default)
    }
}
