//! Field rules evaluated by the step forms before an event reaches the flow.

use email_address::{EmailAddress, Options};

/// Every mobile number starts with this prefix.
pub const PHONE_PREFIX: &str = "09";
pub const PHONE_LEN: usize = 11;
pub const OTP_LEN: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("{}", self.warning())]
pub enum ValidationError {
    InvalidPhone,
    InvalidEmail,
    IncompleteOtp,
    NonNumericOtp,
}

impl ValidationError {
    /// Warning displayed under the field.
    pub fn warning(&self) -> &'static str {
        match self {
            Self::InvalidPhone => "Phone number must be a valid 11-digit number starting with 09.",
            Self::InvalidEmail => "Invalid email address.",
            Self::IncompleteOtp => "Your one-time password must be 6 characters.",
            Self::NonNumericOtp => "Code must contains only 6 numbers",
        }
    }
}

/// Returns the trimmed number if it is 11 digits starting with `09`.
pub fn validate_phone(input: &str) -> Result<String, ValidationError> {
    let number = input.trim();
    if number.len() == PHONE_LEN
        && number.starts_with(PHONE_PREFIX)
        && number.chars().all(|c| c.is_ascii_digit())
    {
        Ok(number.to_string())
    } else {
        Err(ValidationError::InvalidPhone)
    }
}

/// Returns the trimmed address if it is RFC compliant and has a top level domain.
pub fn validate_email(input: &str) -> Result<String, ValidationError> {
    let address = input.trim();
    EmailAddress::parse_with_options(address, Options::default().with_required_tld())
        .map(|_| address.to_string())
        .map_err(|_| ValidationError::InvalidEmail)
}

/// Returns the trimmed code if it is exactly 6 digits.
///
/// A non digit character is reported before a wrong length.
pub fn validate_otp(input: &str) -> Result<String, ValidationError> {
    let code = input.trim();
    if !code.chars().all(|c| c.is_ascii_digit()) {
        Err(ValidationError::NonNumericOtp)
    } else if code.chars().count() != OTP_LEN {
        Err(ValidationError::IncompleteOtp)
    } else {
        Ok(code.to_string())
    }
}
