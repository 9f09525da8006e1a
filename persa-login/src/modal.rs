//! Login modal session.
//!
//! The open flag belongs to the page hosting the modal. Opening builds a fresh
//! [`Session`], closing drops it, so nothing survives from one opening to the
//! next.

use tracing::{debug, info};

use crate::{
    flow::{LoginFlowController, LoginFlowState, Msg, Signal, View},
    screen::Screen,
    steps::{ConfirmationStep, EmailStep, OtpStep, PhoneStep},
};

/// User input coming from the rendering layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    PhoneEdited(String),
    PhoneSubmitted,
    UseEmail,
    OtpEdited(String),
    OtpSubmitted,
    ChangePhone,
    EmailEdited(String),
    EmailSubmitted,
    UsePhone,
    ChangeEmail,
    Reset,
}

/// Form of the step currently displayed.
#[derive(Debug, Clone)]
pub enum Step {
    Phone(PhoneStep),
    Otp(OtpStep),
    Email(EmailStep),
    Confirmation(ConfirmationStep),
}

impl Step {
    /// Builds a blank form for the view of `state`.
    fn for_state(state: &LoginFlowState) -> Self {
        match state.view {
            View::Phone => Step::Phone(PhoneStep::new()),
            View::Otp => Step::Otp(OtpStep::new()),
            View::Email => Step::Email(EmailStep::with_address(&state.submitted_email)),
            View::EmailConfirmation => {
                Step::Confirmation(ConfirmationStep::new(&state.submitted_email))
            }
        }
    }
}

/// One opening of the modal.
#[derive(Debug)]
pub struct Session {
    flow: LoginFlowController,
    step: Step,
}

impl Session {
    pub fn new() -> Self {
        let flow = LoginFlowController::new();
        let step = Step::for_state(flow.state());
        Self { flow, step }
    }

    pub fn state(&self) -> &LoginFlowState {
        self.flow.state()
    }

    pub fn step(&self) -> &Step {
        &self.step
    }

    pub fn update(&mut self, message: Message) -> Option<Signal> {
        let msg = match (&mut self.step, message) {
            (_, Message::Reset) => Some(Msg::Reset),
            (Step::Phone(step), Message::PhoneEdited(number)) => {
                step.on_update(number);
                None
            }
            (Step::Phone(step), Message::PhoneSubmitted) => step.submit(),
            (Step::Phone(step), Message::UseEmail) => Some(step.use_email()),
            (Step::Otp(step), Message::OtpEdited(code)) => step.on_update(code),
            (Step::Otp(step), Message::OtpSubmitted) => step.submit(),
            (Step::Otp(step), Message::ChangePhone) => Some(step.change_phone()),
            (Step::Email(step), Message::EmailEdited(address)) => {
                step.on_update(address);
                None
            }
            (Step::Email(step), Message::EmailSubmitted) => step.submit(),
            (Step::Email(step), Message::UsePhone) => Some(step.use_phone()),
            (Step::Confirmation(step), Message::ChangeEmail) => Some(step.change_email()),
            (_, message) => {
                debug!(
                    "login modal: {:?} is not handled by the {:?} view",
                    message,
                    self.flow.view()
                );
                None
            }
        };

        let msg = msg?;
        let signal = self.flow.update(msg);
        // Forms are remounted whenever the flow moves.
        self.step = Step::for_state(self.flow.state());
        signal
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Default)]
pub struct LoginModal {
    session: Option<Session>,
}

impl LoginModal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }

    /// Follows the open flag owned by the host.
    pub fn set_open(&mut self, open: bool) {
        match (open, self.session.is_some()) {
            (true, false) => {
                debug!("login modal: opened");
                self.session = Some(Session::new());
            }
            (false, true) => {
                debug!("login modal: closed");
                self.session = None;
            }
            _ => {}
        }
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn state(&self) -> Option<&LoginFlowState> {
        self.session.as_ref().map(Session::state)
    }

    /// Forwards `message` to the open session. The modal closes itself on
    /// [`Signal::CloseModal`], the host must then lower its open flag.
    pub fn update(&mut self, message: Message) -> Option<Signal> {
        let signal = self.session.as_mut()?.update(message);
        if signal == Some(Signal::CloseModal) {
            info!("login modal: login completed");
            self.session = None;
        }
        signal
    }

    pub fn render(&self) -> Option<Screen> {
        self.session
            .as_ref()
            .map(|s| Screen::new(s.state(), s.step()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_modal() -> LoginModal {
        let mut modal = LoginModal::new();
        modal.set_open(true);
        modal
    }

    #[test]
    fn opening_starts_from_initial_state() {
        let mut modal = LoginModal::new();
        assert!(!modal.is_open());
        assert!(modal.state().is_none());

        modal.set_open(true);
        assert_eq!(modal.state(), Some(&LoginFlowState::initial()));

        modal.update(Message::UseEmail);
        modal.set_open(false);
        assert!(!modal.is_open());
        modal.set_open(true);
        assert_eq!(modal.state(), Some(&LoginFlowState::initial()));
    }

    #[test]
    fn reopening_an_open_modal_keeps_the_session() {
        let mut modal = open_modal();
        modal.update(Message::UseEmail);
        modal.set_open(true);
        assert_eq!(modal.state().map(|s| s.view), Some(View::Email));
    }

    #[test]
    fn phone_login_closes_the_modal() {
        let mut modal = open_modal();
        modal.update(Message::PhoneEdited("09123456789".to_string()));
        assert_eq!(modal.update(Message::PhoneSubmitted), None);
        let state = modal.state().unwrap();
        assert_eq!(state.view, View::Otp);
        assert_eq!(state.phone_number, "09123456789");

        assert_eq!(modal.update(Message::OtpEdited("12345".to_string())), None);
        assert_eq!(
            modal.update(Message::OtpEdited("123456".to_string())),
            Some(Signal::CloseModal)
        );
        assert!(!modal.is_open());
        assert_eq!(modal.update(Message::Reset), None);
    }

    #[test]
    fn invalid_phone_does_not_reach_the_flow() {
        let mut modal = open_modal();
        modal.update(Message::PhoneEdited("0812345678".to_string()));
        modal.update(Message::PhoneSubmitted);
        assert_eq!(modal.state().map(|s| s.view), Some(View::Phone));
        match modal.session().map(Session::step) {
            Some(Step::Phone(step)) => assert!(!step.form.valid),
            step => panic!("unexpected step: {:?}", step),
        }
    }

    #[test]
    fn email_login_round_trip() {
        let mut modal = open_modal();
        modal.update(Message::UseEmail);
        modal.update(Message::EmailEdited("a@example.com".to_string()));
        modal.update(Message::EmailSubmitted);
        let state = modal.state().unwrap();
        assert_eq!(state.view, View::EmailConfirmation);
        assert_eq!(state.submitted_email, "a@example.com");

        modal.update(Message::ChangeEmail);
        assert_eq!(modal.state().map(|s| s.view), Some(View::Email));
        // The previous address is displayed again.
        match modal.session().map(Session::step) {
            Some(Step::Email(step)) => {
                assert_eq!(step.form.value, "a@example.com");
                assert!(step.can_submit());
            }
            step => panic!("unexpected step: {:?}", step),
        }
        assert!(modal.is_open());
    }

    #[test]
    fn going_back_to_phone_clears_the_phone_form() {
        let mut modal = open_modal();
        modal.update(Message::PhoneEdited("09123456789".to_string()));
        modal.update(Message::PhoneSubmitted);
        modal.update(Message::ChangePhone);
        let state = modal.state().unwrap();
        assert_eq!(state.view, View::Phone);
        assert!(state.phone_number.is_empty());
        match modal.session().map(Session::step) {
            Some(Step::Phone(step)) => assert!(step.form.value.is_empty()),
            step => panic!("unexpected step: {:?}", step),
        }
    }

    #[test]
    fn messages_for_hidden_steps_are_ignored() {
        let mut modal = open_modal();
        assert_eq!(modal.update(Message::OtpEdited("123456".to_string())), None);
        assert_eq!(modal.update(Message::ChangeEmail), None);
        assert_eq!(modal.update(Message::EmailSubmitted), None);
        assert_eq!(modal.state(), Some(&LoginFlowState::initial()));
    }

    #[test]
    fn reset_from_any_step() {
        let mut modal = open_modal();
        modal.update(Message::UseEmail);
        modal.update(Message::EmailEdited("a@example.com".to_string()));
        modal.update(Message::EmailSubmitted);
        assert_eq!(modal.update(Message::Reset), None);
        assert_eq!(modal.state(), Some(&LoginFlowState::initial()));
        assert!(modal.is_open());
    }
}
