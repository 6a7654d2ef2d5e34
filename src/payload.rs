//! Transport payload construction: the formatted message body and the
//! multipart form sent to the relay.

use crate::registration::{CvFile, EventContext};
use crate::schema::{FieldMap, VariantSchema};
use chrono::Utc;
use reqwest::multipart::{Form, Part};

/// Fixed source label embedded in every message body.
pub const SOURCE_LABEL: &str = "Institute Website";

/// Fixed multipart field name for the CV attachment.
pub const CV_FIELD_NAME: &str = "cv";

/// Placeholder for optional fields whose rule declares none of its own.
const DEFAULT_PLACEHOLDER: &str = "Not specified";

/// Machine-oriented subject line naming the event/program.
pub fn subject_line(context: &EventContext) -> String {
    format!("New Registration: {}", context.title)
}

/// Human-formatted plain-text message body.
///
/// Optional fields that were left empty render as their placeholder so the
/// administrator reading the relayed email sees an explicit "Not specified"
/// rather than a blank line.
pub fn format_message(schema: &VariantSchema, context: &EventContext, fields: &FieldMap) -> String {
    let mut body = String::new();

    body.push_str(&format!("=== {} ===\n\n", schema.section_header));
    body.push_str(&format!("Event: {}\n", context.title));
    body.push_str(&format!("Date: {}\n", context.date));
    if let Some(price) = &context.price {
        body.push_str(&format!("Price: {}\n", price));
    }

    body.push_str("\n--- Applicant Details ---\n");
    for rule in schema.fields {
        let value = fields.get(rule.name).map(String::as_str).unwrap_or("");
        let rendered = if value.is_empty() {
            rule.empty_placeholder.unwrap_or(DEFAULT_PLACEHOLDER)
        } else {
            value
        };
        body.push_str(&format!("{}: {}\n", rule.label, rendered));
    }

    body.push_str(&format!(
        "\nSubmitted: {}\n",
        Utc::now().format("%Y-%m-%d %H:%M UTC")
    ));
    body.push_str(&format!("Source: {}", SOURCE_LABEL));

    body
}

/// Build the multipart form for one submission.
///
/// The relay renders `message` for the administrator; the flat `name` /
/// `email` / `phone` / `registration_type` fields duplicate the identity
/// data for the relay's own indexing. `_subject`, `_replyto` and
/// `_template` are relay control fields.
pub fn build_form(
    schema: &VariantSchema,
    context: &EventContext,
    fields: &FieldMap,
    attachment: Option<&CvFile>,
) -> Form {
    let field = |name: &str| fields.get(name).cloned().unwrap_or_default();

    let mut form = Form::new()
        .text("_subject", subject_line(context))
        .text("_replyto", field("email"))
        .text("_template", "table")
        .text("message", format_message(schema, context, fields))
        .text("name", field("full_name"))
        .text("email", field("email"))
        .text("phone", field("phone"))
        .text("registration_type", schema.registration_type);

    if let Some(cv) = attachment {
        // Content type was validated against the whitelist at selection
        // time, so this parse cannot fail.
        let part = Part::bytes(cv.bytes.clone())
            .file_name(cv.file_name.clone())
            .mime_str(&cv.content_type)
            .expect("whitelisted content type");
        form = form.part(CV_FIELD_NAME, part);
    }

    form
}
