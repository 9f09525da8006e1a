use tracing::{debug, info};

use crate::{
    flow::Msg,
    form,
    validate::{validate_otp, ValidationError, OTP_LEN},
};

/// One-time code entry, displayed once a phone number has been submitted.
#[derive(Debug, Clone, Default)]
pub struct OtpStep {
    pub form: form::Value<String>,
}

impl OtpStep {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the edited code. Completes the step as soon as six digits are in.
    pub fn on_update(&mut self, code: String) -> Option<Msg> {
        let code = super::truncate(code.trim().to_string(), OTP_LEN);
        let all_numerical = code.chars().all(|c| c.is_ascii_digit());
        self.form = form::Value {
            warning: (!all_numerical).then(|| ValidationError::NonNumericOtp.warning()),
            valid: all_numerical,
            value: code,
        };
        if self.form.value.chars().count() == OTP_LEN {
            self.submit()
        } else {
            None
        }
    }

    pub fn submit(&mut self) -> Option<Msg> {
        match validate_otp(&self.form.value) {
            Ok(_) => {
                // The code is not verified against any server.
                info!("otp step: code submitted");
                Some(Msg::CompleteOtp)
            }
            Err(e) => {
                debug!("otp step: submit rejected");
                self.form.valid = false;
                self.form.warning = Some(e.warning());
                None
            }
        }
    }

    pub fn change_phone(&self) -> Msg {
        Msg::GoBackToPhone
    }
}
