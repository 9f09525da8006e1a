//! Text displayed by the login modal, keyed by view.

use crate::flow::{LoginFlowState, View};

pub const BRAND: &str = "پرسا ای\u{200c}آی";

pub const PHONE_SUBTITLE: &str = "پرسا همه کاراتو انجام میده";
pub const EMAIL_SUBTITLE: &str = "آدرس ایمیل خودتون رو وارد کنید";

pub const TERMS_PREFIX: &str = "با ورود به پرسا ای آی، شما";
pub const TERMS_LINK: &str = "قوانین و مقررات";
pub const TERMS_SUFFIX: &str = "استفاده را می\u{200c}پذیرید";
pub const TERMS_URL: &str = "/contactUs";

pub mod phone {
    pub const USE_EMAIL: &str = "ورود با ایمیل";
    pub const SEPARATOR: &str = "یا از طریق";
    pub const PLACEHOLDER: &str = "ورود با شماره تلفن";
}

pub mod otp {
    /// The countdown is not running, the text is fixed.
    pub const RESEND_COUNTDOWN: &str = "ارسال مجدد کد تا ۱:۲۳ دیگر";
    pub const CHANGE_PHONE: &str = "تغییر شمارۀ موبایل";
}

pub mod email {
    pub const PLACEHOLDER: &str = "ورود با ایمیل";
    pub const USE_PHONE: &str = "ورود با شماره تلفن";
}

pub mod confirmation {
    pub const HEADING: &str = "!ایمیلتو چک کن تا وارد بشی";
    pub const SENT_TO: &str = "ارسال شده به:";
    pub const CHANGE_EMAIL: &str = "تغییر آدرس ایمیل";
}

pub fn title(state: &LoginFlowState) -> &'static str {
    match state.view {
        View::EmailConfirmation => confirmation::HEADING,
        View::Phone | View::Otp | View::Email => BRAND,
    }
}

pub fn description(state: &LoginFlowState) -> Option<String> {
    match state.view {
        View::Phone => Some(PHONE_SUBTITLE.to_string()),
        View::Otp => Some(format!(
            "کد تایید ارسال شده به شمارۀ {} را وارد کنید",
            state.phone_number
        )),
        View::Email => Some(EMAIL_SUBTITLE.to_string()),
        View::EmailConfirmation => None,
    }
}

/// Logo, title and description are replaced by the confirmation card.
pub fn shows_header(view: View) -> bool {
    view != View::EmailConfirmation
}

pub fn shows_terms(view: View) -> bool {
    view != View::EmailConfirmation
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn otp_description_interpolates_phone_number() {
        let state = LoginFlowState {
            view: View::Otp,
            phone_number: "09123456789".to_string(),
            submitted_email: String::new(),
        };
        let description = description(&state).unwrap();
        assert!(description.contains("09123456789"));
        assert_eq!(title(&state), BRAND);
    }

    #[test]
    fn confirmation_has_its_own_title_and_no_header() {
        let state = LoginFlowState {
            view: View::EmailConfirmation,
            ..LoginFlowState::initial()
        };
        assert_eq!(title(&state), confirmation::HEADING);
        assert_eq!(description(&state), None);
        assert!(!shows_header(View::EmailConfirmation));
        assert!(!shows_terms(View::EmailConfirmation));
        for view in [View::Phone, View::Otp, View::Email] {
            assert!(shows_header(view));
            assert!(shows_terms(view));
        }
    }

    #[test]
    fn fixed_descriptions() {
        let mut state = LoginFlowState::initial();
        assert_eq!(description(&state), Some(PHONE_SUBTITLE.to_string()));
        state.view = View::Email;
        assert_eq!(description(&state), Some(EMAIL_SUBTITLE.to_string()));
    }
}
