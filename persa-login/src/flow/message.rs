/// Events accepted by the login flow.
///
/// Payloads are trusted: the phone number and email address are validated by
/// the step that raises the event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    SubmitPhone(String),
    GoToEmailView,
    SubmitEmail(String),
    GoBackToPhone,
    GoBackToEmail,
    CompleteOtp,
    Reset,
}

impl Msg {
    /// Event name used in traces, payloads are left out.
    pub fn name(&self) -> &'static str {
        match self {
            Msg::SubmitPhone(_) => "SubmitPhone",
            Msg::GoToEmailView => "GoToEmailView",
            Msg::SubmitEmail(_) => "SubmitEmail",
            Msg::GoBackToPhone => "GoBackToPhone",
            Msg::GoBackToEmail => "GoBackToEmail",
            Msg::CompleteOtp => "CompleteOtp",
            Msg::Reset => "Reset",
        }
    }
}

/// Notification sent to the host alongside a new state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    /// The host must dismiss the modal.
    CloseModal,
}
