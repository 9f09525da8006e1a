use tracing::debug;

use crate::{flow::Msg, form, validate::validate_email};

/// Email entry, reached from the phone step.
#[derive(Debug, Clone, Default)]
pub struct EmailStep {
    pub form: form::Value<String>,
}

impl EmailStep {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prefills the field with a previously submitted address.
    pub fn with_address(address: &str) -> Self {
        let mut step = Self::new();
        if !address.is_empty() {
            step.on_update(address.to_string());
        }
        step
    }

    pub fn on_update(&mut self, address: String) {
        self.form.edit(address, validate_email);
    }

    pub fn can_submit(&self) -> bool {
        self.form.is_submittable()
    }

    pub fn submit(&mut self) -> Option<Msg> {
        match validate_email(&self.form.value) {
            Ok(address) => Some(Msg::SubmitEmail(address)),
            Err(e) => {
                debug!("email step: submit rejected");
                self.form.valid = false;
                self.form.warning = Some(e.warning());
                None
            }
        }
    }

    pub fn use_phone(&self) -> Msg {
        Msg::GoBackToPhone
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit() {
        let mut step = EmailStep::new();
        step.on_update("a@".to_string());
        assert!(!step.can_submit());
        assert_eq!(step.submit(), None);

        step.on_update(" a@example.com".to_string());
        assert!(step.can_submit());
        assert_eq!(
            step.submit(),
            Some(Msg::SubmitEmail("a@example.com".to_string()))
        );
        assert_eq!(step.use_phone(), Msg::GoBackToPhone);
    }

    #[test]
    fn test_with_address() {
        let step = EmailStep::with_address("a@example.com");
        assert_eq!(step.form.value, "a@example.com");
        assert!(step.can_submit());

        let step = EmailStep::with_address("");
        assert_eq!(step.form, form::Value::default());
    }
}
