use crate::flow::Msg;

/// Shown once an email has been submitted. Nothing to fill in.
#[derive(Debug, Clone, Default)]
pub struct ConfirmationStep {
    pub sent_to: String,
}

impl ConfirmationStep {
    pub fn new(sent_to: &str) -> Self {
        Self {
            sent_to: sent_to.to_string(),
        }
    }

    pub fn change_email(&self) -> Msg {
        Msg::GoBackToEmail
    }
}
