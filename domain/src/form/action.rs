//! The submit event.

use crate::request::entities::FormFields;

/// A single "send this request" event.
///
/// Carries a snapshot of the form fields at the moment the user pressed
/// submit. The handler takes it by value, so one action can only ever
/// produce one submission attempt, no matter how often the UI redraws.
#[derive(Debug)]
pub struct SubmitAction {
    fields: FormFields,
}

impl SubmitAction {
    pub fn new(fields: FormFields) -> Self {
        Self { fields }
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    pub fn into_fields(self) -> FormFields {
        self.fields
    }
}
