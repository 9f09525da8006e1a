//! Forms displayed by each step of the login modal.
//!
//! A step owns its field, validates edits and turns user actions into flow
//! [`Msg`](crate::flow::Msg)s. Nothing invalid leaves a step.

pub mod confirmation;
pub mod email;
pub mod otp;
pub mod phone;

pub use confirmation::ConfirmationStep;
pub use email::EmailStep;
pub use otp::OtpStep;
pub use phone::PhoneStep;

/// Keeps at most `max` characters, like an input with a `maxlength`.
fn truncate(input: String, max: usize) -> String {
    if input.chars().count() > max {
        input.chars().take(max).collect()
    } else {
        input
    }
}
