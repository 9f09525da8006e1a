use tracing::debug;

use crate::{
    flow::Msg,
    form,
    validate::{validate_phone, PHONE_LEN},
};

/// Phone number entry, the first step of the flow.
#[derive(Debug, Clone, Default)]
pub struct PhoneStep {
    pub form: form::Value<String>,
}

impl PhoneStep {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_update(&mut self, number: String) {
        self.form
            .edit(super::truncate(number, PHONE_LEN), validate_phone);
    }

    pub fn can_submit(&self) -> bool {
        self.form.is_submittable()
    }

    /// Returns the event carrying the number, or flags the field if it is invalid.
    pub fn submit(&mut self) -> Option<Msg> {
        match validate_phone(&self.form.value) {
            Ok(number) => Some(Msg::SubmitPhone(number)),
            Err(e) => {
                debug!("phone step: submit rejected");
                self.form.valid = false;
                self.form.warning = Some(e.warning());
                None
            }
        }
    }

    pub fn use_email(&self) -> Msg {
        Msg::GoToEmailView
    }
}
