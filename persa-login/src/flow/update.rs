use super::{LoginFlowState, Msg, Signal, View};
use tracing::debug;

/// Result of applying one event to a state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: LoginFlowState,
    pub signal: Option<Signal>,
}

impl Transition {
    fn to(state: LoginFlowState) -> Self {
        Self {
            state,
            signal: None,
        }
    }
}

impl LoginFlowState {
    /// Computes the state following `msg`. Pure, `self` is left untouched.
    pub fn next(&self, msg: &Msg) -> Transition {
        match msg {
            Msg::SubmitPhone(number) => Transition::to(Self {
                view: View::Otp,
                phone_number: number.clone(),
                ..self.clone()
            }),
            Msg::SubmitEmail(address) => Transition::to(Self {
                view: View::EmailConfirmation,
                submitted_email: address.clone(),
                ..self.clone()
            }),
            Msg::GoToEmailView | Msg::GoBackToEmail => Transition::to(Self {
                view: View::Email,
                ..self.clone()
            }),
            Msg::GoBackToPhone => Transition::to(Self {
                view: View::Phone,
                phone_number: String::new(),
                ..self.clone()
            }),
            Msg::CompleteOtp if self.view == View::Otp => Transition {
                state: Self::initial(),
                signal: Some(Signal::CloseModal),
            },
            // A code completed outside of the otp step is stale.
            Msg::CompleteOtp => Transition::to(self.clone()),
            Msg::Reset => Transition::to(Self::initial()),
        }
    }
}

/// Owns the flow state of one modal session.
#[derive(Debug, Default)]
pub struct LoginFlowController {
    state: LoginFlowState,
}

impl LoginFlowController {
    pub fn new() -> Self {
        Self {
            state: LoginFlowState::initial(),
        }
    }

    pub fn state(&self) -> &LoginFlowState {
        &self.state
    }

    pub fn view(&self) -> View {
        self.state.view
    }

    /// Applies `msg` and returns the signal the host has to act upon, if any.
    pub fn update(&mut self, msg: Msg) -> Option<Signal> {
        let Transition { state, signal } = self.state.next(&msg);
        debug!(
            "login flow: {} {:?} -> {:?}",
            msg.name(),
            self.state.view,
            state.view
        );
        self.state = state;
        signal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PHONE: &str = "09123456789";
    const EMAIL: &str = "a@example.com";

    fn all_msgs() -> Vec<Msg> {
        vec![
            Msg::SubmitPhone(PHONE.to_string()),
            Msg::GoToEmailView,
            Msg::SubmitEmail(EMAIL.to_string()),
            Msg::GoBackToPhone,
            Msg::GoBackToEmail,
            Msg::CompleteOtp,
            Msg::Reset,
        ]
    }

    fn state_in(view: View) -> LoginFlowState {
        LoginFlowState {
            view,
            phone_number: PHONE.to_string(),
            submitted_email: EMAIL.to_string(),
        }
    }

    const ALL_VIEWS: [View; 4] = [View::Phone, View::Otp, View::Email, View::EmailConfirmation];

    #[test]
    fn submit_phone_goes_to_otp() {
        let t = LoginFlowState::initial().next(&Msg::SubmitPhone(PHONE.to_string()));
        assert_eq!(t.state.view, View::Otp);
        assert_eq!(t.state.phone_number, PHONE);
        assert_eq!(t.signal, None);
    }

    #[test]
    fn submit_email_goes_to_confirmation() {
        let email = LoginFlowState::initial().next(&Msg::GoToEmailView).state;
        let t = email.next(&Msg::SubmitEmail(EMAIL.to_string()));
        assert_eq!(t.state.view, View::EmailConfirmation);
        assert_eq!(t.state.submitted_email, EMAIL);
        assert_eq!(t.signal, None);
    }

    #[test]
    fn go_back_to_phone_always_clears_phone_number() {
        for view in ALL_VIEWS {
            let t = state_in(view).next(&Msg::GoBackToPhone);
            assert_eq!(t.state.view, View::Phone);
            assert!(t.state.phone_number.is_empty());
            assert_eq!(t.signal, None);
        }
    }

    #[test]
    fn go_back_to_email_keeps_submitted_email() {
        let t = state_in(View::EmailConfirmation).next(&Msg::GoBackToEmail);
        assert_eq!(t.state.view, View::Email);
        assert_eq!(t.state.submitted_email, EMAIL);
    }

    #[test]
    fn complete_otp_resets_and_signals_close() {
        let mut flow = LoginFlowController::new();
        assert_eq!(flow.update(Msg::SubmitPhone(PHONE.to_string())), None);
        assert_eq!(flow.update(Msg::CompleteOtp), Some(Signal::CloseModal));
        assert!(flow.state().is_initial());
        // The signal is emitted once, the next completion is stale.
        assert_eq!(flow.update(Msg::CompleteOtp), None);
    }

    #[test]
    fn complete_otp_outside_otp_is_a_noop() {
        for view in [View::Phone, View::Email, View::EmailConfirmation] {
            let state = state_in(view);
            let t = state.next(&Msg::CompleteOtp);
            assert_eq!(t.state, state);
            assert_eq!(t.signal, None);
        }
    }

    #[test]
    fn reset_yields_initial_state_and_is_idempotent() {
        for view in ALL_VIEWS {
            let once = state_in(view).next(&Msg::Reset).state;
            assert!(once.is_initial());
            assert_eq!(once.next(&Msg::Reset).state, once);
        }
        let mut flow = LoginFlowController::new();
        flow.update(Msg::GoToEmailView);
        assert_eq!(flow.update(Msg::Reset), None);
        assert_eq!(flow.state(), &LoginFlowState::initial());
    }

    #[test]
    fn next_does_not_touch_the_previous_state() {
        let before = state_in(View::Otp);
        let copy = before.clone();
        for msg in all_msgs() {
            let _ = before.next(&msg);
            assert_eq!(before, copy);
        }
    }

    #[test]
    fn phone_email_round_trip_leaves_no_phone_number() {
        let mut flow = LoginFlowController::new();
        flow.update(Msg::GoToEmailView);
        flow.update(Msg::GoBackToPhone);
        flow.update(Msg::GoToEmailView);
        assert_eq!(flow.view(), View::Email);
        assert!(flow.state().phone_number.is_empty());
    }

    #[test]
    fn submitted_email_survives_back_to_phone() {
        let mut flow = LoginFlowController::new();
        flow.update(Msg::GoToEmailView);
        flow.update(Msg::SubmitEmail(EMAIL.to_string()));
        flow.update(Msg::GoBackToEmail);
        flow.update(Msg::GoBackToPhone);
        assert_eq!(flow.view(), View::Phone);
        assert_eq!(flow.state().submitted_email, EMAIL);
    }

    #[test]
    fn every_event_sequence_stays_within_the_four_views() {
        // Exhaustive over all sequences of length 3.
        let msgs = all_msgs();
        for a in &msgs {
            for b in &msgs {
                for c in &msgs {
                    let mut flow = LoginFlowController::new();
                    let mut closes = 0;
                    for msg in [a, b, c] {
                        let was_otp = flow.view() == View::Otp;
                        if let Some(Signal::CloseModal) = flow.update(msg.clone()) {
                            assert!(was_otp);
                            assert!(flow.state().is_initial());
                            closes += 1;
                        }
                        assert!(ALL_VIEWS.contains(&flow.view()));
                        if flow.view() == View::Phone {
                            assert!(flow.state().phone_number.is_empty());
                        }
                    }
                    assert!(closes <= 1);
                }
            }
        }
    }
}
