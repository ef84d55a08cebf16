//! Form fields addressable from the REPL

use content_request_domain::{FormFields, FormVariant};
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("Unknown field '{0}'. Type /help for the field list")]
    Unknown(String),

    #[error("The {variant} form has no {label} field")]
    NotCollected {
        label: &'static str,
        variant: FormVariant,
    },

    #[error("Target Word Count must be a whole number, got '{0}'")]
    InvalidNumber(String),
}

/// One input of the content request form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    TopicTitle,
    PrimaryKeyword,
    Email,
    TargetWordCount,
    TargetAudience,
    ClientName,
    AdditionalDetails,
    WebhookUrl,
}

const ALL_FIELDS: [FormField; 8] = [
    FormField::TopicTitle,
    FormField::PrimaryKeyword,
    FormField::Email,
    FormField::TargetWordCount,
    FormField::TargetAudience,
    FormField::ClientName,
    FormField::AdditionalDetails,
    FormField::WebhookUrl,
];

impl FormField {
    /// Fields shown for `variant`, in display order
    pub fn for_variant(variant: FormVariant) -> Vec<FormField> {
        let mut fields: Vec<FormField> = ALL_FIELDS
            .into_iter()
            .filter(|f| f.is_collected_by(variant))
            .collect();
        // The webhook URL leads the generic form
        if variant.collects_webhook_url() {
            fields.retain(|f| *f != FormField::WebhookUrl);
            fields.insert(0, FormField::WebhookUrl);
        }
        fields
    }

    pub fn is_collected_by(&self, variant: FormVariant) -> bool {
        match self {
            FormField::Email => variant.collects_email(),
            FormField::TargetAudience => variant.collects_target_audience(),
            FormField::WebhookUrl => variant.collects_webhook_url(),
            _ => true,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FormField::TopicTitle => "Topic/Title",
            FormField::PrimaryKeyword => "Primary Keyword",
            FormField::Email => "Email Address",
            FormField::TargetWordCount => "Target Word Count",
            FormField::TargetAudience => "Target Audience",
            FormField::ClientName => "Client Name",
            FormField::AdditionalDetails => "Additional Details",
            FormField::WebhookUrl => "Webhook URL",
        }
    }

    /// Short name accepted by `/set`
    pub fn key(&self) -> &'static str {
        match self {
            FormField::TopicTitle => "topic",
            FormField::PrimaryKeyword => "keyword",
            FormField::Email => "email",
            FormField::TargetWordCount => "words",
            FormField::TargetAudience => "audience",
            FormField::ClientName => "client",
            FormField::AdditionalDetails => "details",
            FormField::WebhookUrl => "url",
        }
    }

    pub fn value(&self, fields: &FormFields) -> String {
        match self {
            FormField::TopicTitle => fields.topic_title.clone(),
            FormField::PrimaryKeyword => fields.primary_keyword.clone(),
            FormField::Email => fields.email.clone(),
            FormField::TargetWordCount => fields.target_word_count.to_string(),
            FormField::TargetAudience => fields.target_audience.clone(),
            FormField::ClientName => fields.client_name.clone(),
            FormField::AdditionalDetails => fields.additional_details.clone(),
            FormField::WebhookUrl => fields.webhook_url.clone(),
        }
    }

    /// Store `value` into `fields`, refusing fields `variant` does not show.
    ///
    /// The client name is stored as given; resolving it against the
    /// directory is the caller's job.
    pub fn assign(
        &self,
        fields: &mut FormFields,
        variant: FormVariant,
        value: &str,
    ) -> Result<(), FieldError> {
        if !self.is_collected_by(variant) {
            return Err(FieldError::NotCollected {
                label: self.label(),
                variant,
            });
        }

        let value = value.to_string();
        match self {
            FormField::TopicTitle => fields.topic_title = value,
            FormField::PrimaryKeyword => fields.primary_keyword = value,
            FormField::Email => fields.email = value,
            FormField::TargetWordCount => {
                fields.target_word_count = value
                    .trim()
                    .parse()
                    .map_err(|_| FieldError::InvalidNumber(value.clone()))?;
            }
            FormField::TargetAudience => fields.target_audience = value,
            FormField::ClientName => fields.client_name = value,
            FormField::AdditionalDetails => fields.additional_details = value,
            FormField::WebhookUrl => fields.webhook_url = value,
        }
        Ok(())
    }
}

impl FromStr for FormField {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "topic" | "title" | "topic_title" => Ok(FormField::TopicTitle),
            "keyword" | "primary_keyword" => Ok(FormField::PrimaryKeyword),
            "email" => Ok(FormField::Email),
            "words" | "word_count" | "target_word_count" => Ok(FormField::TargetWordCount),
            "audience" | "target_audience" => Ok(FormField::TargetAudience),
            "client" | "client_name" => Ok(FormField::ClientName),
            "details" | "additional_details" => Ok(FormField::AdditionalDetails),
            "url" | "webhook" | "webhook_url" => Ok(FormField::WebhookUrl),
            _ => Err(FieldError::Unknown(s.to_string())),
        }
    }
}
