//! What the modal shows for its current step, independent of any UI toolkit.

use crate::{
    copy,
    flow::LoginFlowState,
    form,
    modal::{Message, Step},
};

/// A clickable element and the message it sends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    pub label: &'static str,
    pub message: Message,
}

impl Action {
    fn new(label: &'static str, message: Message) -> Self {
        Self { label, message }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Body {
    Phone {
        field: form::Value<String>,
        placeholder: &'static str,
        can_submit: bool,
    },
    Otp {
        field: form::Value<String>,
        resend: &'static str,
    },
    Email {
        field: form::Value<String>,
        placeholder: &'static str,
        can_submit: bool,
    },
    Confirmation {
        heading: &'static str,
        sent_to_label: &'static str,
        sent_to: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screen {
    /// `None` when the header is hidden.
    pub title: Option<&'static str>,
    pub description: Option<String>,
    pub body: Body,
    pub actions: Vec<Action>,
    pub terms: bool,
}

impl Screen {
    pub fn new(state: &LoginFlowState, step: &Step) -> Self {
        let (body, actions) = match step {
            Step::Phone(step) => (
                Body::Phone {
                    field: step.form.clone(),
                    placeholder: copy::phone::PLACEHOLDER,
                    can_submit: step.can_submit(),
                },
                vec![Action::new(copy::phone::USE_EMAIL, Message::UseEmail)],
            ),
            Step::Otp(step) => (
                Body::Otp {
                    field: step.form.clone(),
                    resend: copy::otp::RESEND_COUNTDOWN,
                },
                vec![Action::new(copy::otp::CHANGE_PHONE, Message::ChangePhone)],
            ),
            Step::Email(step) => (
                Body::Email {
                    field: step.form.clone(),
                    placeholder: copy::email::PLACEHOLDER,
                    can_submit: step.can_submit(),
                },
                vec![Action::new(copy::email::USE_PHONE, Message::UsePhone)],
            ),
            Step::Confirmation(step) => (
                Body::Confirmation {
                    heading: copy::confirmation::HEADING,
                    sent_to_label: copy::confirmation::SENT_TO,
                    sent_to: step.sent_to.clone(),
                },
                vec![Action::new(
                    copy::confirmation::CHANGE_EMAIL,
                    Message::ChangeEmail,
                )],
            ),
        };

        let header = copy::shows_header(state.view);
        Self {
            title: header.then(|| copy::title(state)),
            description: if header {
                copy::description(state)
            } else {
                None
            },
            body,
            actions,
            terms: copy::shows_terms(state.view),
        }
    }
}
