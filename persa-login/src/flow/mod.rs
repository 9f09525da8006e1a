//! Login flow view-state machine.
//!
//! The flow decides which step of the login modal is displayed and carries the
//! data collected so far from one step to the next. It performs no validation:
//! each step's form checks its own input before raising a [`Msg`].

pub mod message;
pub mod update;

pub use message::{Msg, Signal};
pub use update::{LoginFlowController, Transition};

/// Step currently displayed inside the login modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Phone,
    Otp,
    Email,
    EmailConfirmation,
}

/// Login flow state. Never mutated in place, every event produces a new value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LoginFlowState {
    pub view: View,
    /// Set when the phone step is completed, cleared when going back to it.
    pub phone_number: String,
    /// Set when the email step is completed, only cleared by a full reset.
    pub submitted_email: String,
}

impl LoginFlowState {
    /// State of a freshly opened modal.
    pub fn initial() -> Self {
        Self::default()
    }

    pub fn is_initial(&self) -> bool {
        *self == Self::initial()
    }
}
