use chrono::NaiveDate;
use regex::Regex;
use std::sync::OnceLock;

pub const PASSWORD_MISMATCH: &str = "Passwords do not match";
pub const INVALID_EMAIL: &str = "Please enter a valid email address";
pub const FUTURE_DATE_REQUIRED: &str = "Please select a future date";
pub const PAST_DATE_REQUIRED: &str = "Please select a past date";

/// One point each for: 8+ chars, 12+ chars, lowercase, uppercase, digit,
/// and anything outside `[A-Za-z0-9]`.
pub fn password_strength(password: &str) -> u8 {
    let length = password.chars().count();
    let checks = [
        length >= 8,
        length >= 12,
        password.chars().any(|c| c.is_ascii_lowercase()),
        password.chars().any(|c| c.is_ascii_uppercase()),
        password.chars().any(|c| c.is_ascii_digit()),
        password.chars().any(|c| !c.is_ascii_alphanumeric()),
    ];
    checks.iter().filter(|passed| **passed).count() as u8
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordStrength {
    VeryWeak,
    Weak,
    Good,
    Strong,
}

impl PasswordStrength {
    pub fn from_score(score: u8) -> Self {
        match score {
            0 | 1 => PasswordStrength::VeryWeak,
            2 | 3 => PasswordStrength::Weak,
            4 | 5 => PasswordStrength::Good,
            _ => PasswordStrength::Strong,
        }
    }

    pub fn of(password: &str) -> Self {
        Self::from_score(password_strength(password))
    }

    pub fn label(&self) -> &'static str {
        match self {
            PasswordStrength::VeryWeak => "Very Weak",
            PasswordStrength::Weak => "Weak",
            PasswordStrength::Good => "Good",
            PasswordStrength::Strong => "Strong",
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            PasswordStrength::VeryWeak => "text-danger",
            PasswordStrength::Weak => "text-warning",
            PasswordStrength::Good => "text-info",
            PasswordStrength::Strong => "text-success",
        }
    }
}

pub fn check_password_confirmation(password: &str, confirmation: &str) -> Result<(), &'static str> {
    if password == confirmation {
        Ok(())
    } else {
        Err(PASSWORD_MISMATCH)
    }
}

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"))
}

pub fn is_valid_email(email: &str) -> bool {
    email_pattern().is_match(email)
}

/// Empty input passes; presence is the form's `required` attribute's job.
pub fn check_email(email: &str) -> Result<(), &'static str> {
    if email.is_empty() || is_valid_email(email) {
        Ok(())
    } else {
        Err(INVALID_EMAIL)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateConstraint {
    #[default]
    Any,
    Future,
    Past,
}

pub fn check_date(
    selected: NaiveDate,
    today: NaiveDate,
    constraint: DateConstraint,
) -> Result<(), &'static str> {
    match constraint {
        DateConstraint::Future if selected <= today => Err(FUTURE_DATE_REQUIRED),
        DateConstraint::Past if selected > today => Err(PAST_DATE_REQUIRED),
        _ => Ok(()),
    }
}

/// Parses an `<input type="date">` value.
pub fn parse_input_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}
