use crate::domain::model::{ContactForm, LoginForm, MembershipForm, OfferingId, SignupForm};
use crate::utils::error::{GymError, Result};
use regex::Regex;
use std::sync::LazyLock;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern"));
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[1-9]\d{0,15}$").expect("phone pattern"));
static PHONE_NOISE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s\-()]").expect("phone noise pattern"));
static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z\s]+$").expect("name pattern"));

const SPECIAL_CHARS: &str = "!@#$%^&*(),.?\":{}|<>";
const MIN_PASSWORD_LEN: usize = 8;

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// 允許空白、連字號與括號，例如 `+1 (555) 123-4567`
pub fn is_valid_phone(phone: &str) -> bool {
    let digits = PHONE_NOISE_RE.replace_all(phone, "");
    PHONE_RE.is_match(&digits)
}

pub fn is_valid_name(name: &str) -> bool {
    name.trim().chars().count() >= 2 && NAME_RE.is_match(name)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordStrength {
    Weak,
    Medium,
    Strong,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordChecks {
    pub length: bool,
    pub uppercase: bool,
    pub lowercase: bool,
    pub number: bool,
    pub special: bool,
}

impl PasswordChecks {
    pub fn score(&self) -> usize {
        [
            self.length,
            self.uppercase,
            self.lowercase,
            self.number,
            self.special,
        ]
        .iter()
        .filter(|passed| **passed)
        .count()
    }

    pub fn strength(&self) -> PasswordStrength {
        match self.score() {
            0..=2 => PasswordStrength::Weak,
            3 | 4 => PasswordStrength::Medium,
            _ => PasswordStrength::Strong,
        }
    }
}

pub fn password_checks(password: &str) -> PasswordChecks {
    PasswordChecks {
        length: password.chars().count() >= MIN_PASSWORD_LEN,
        uppercase: password.chars().any(|c| c.is_ascii_uppercase()),
        lowercase: password.chars().any(|c| c.is_ascii_lowercase()),
        number: password.chars().any(|c| c.is_ascii_digit()),
        special: password.chars().any(|c| SPECIAL_CHARS.contains(c)),
    }
}

pub fn validate_membership_form(form: &MembershipForm) -> Vec<String> {
    let mut errors = Vec::new();

    if form.full_name.trim().is_empty() {
        errors.push("Full name is required".to_string());
    }
    if form.email.trim().is_empty() {
        errors.push("Email is required".to_string());
    }
    if !is_valid_email(&form.email) {
        errors.push("Please enter a valid email".to_string());
    }
    if form.phone.trim().is_empty() {
        errors.push("Phone number is required".to_string());
    }
    if !is_valid_phone(&form.phone) {
        errors.push("Please enter a valid phone number".to_string());
    }
    if form.plan_type.is_empty() {
        errors.push("Please select a membership plan".to_string());
    }

    errors
}

pub fn validate_contact_form(form: &ContactForm) -> Vec<String> {
    let mut errors = Vec::new();

    if form.name.trim().is_empty() {
        errors.push("Name is required".to_string());
    }
    if form.email.trim().is_empty() {
        errors.push("Email is required".to_string());
    }
    if !is_valid_email(&form.email) {
        errors.push("Please enter a valid email".to_string());
    }
    if form.message.trim().is_empty() {
        errors.push("Message is required".to_string());
    }

    errors
}

pub fn validate_login_form(form: &LoginForm) -> Vec<String> {
    let mut errors = Vec::new();
    push_credential_errors(&mut errors, &form.email, &form.password);
    errors
}

pub fn validate_signup_form(form: &SignupForm) -> Vec<String> {
    let mut errors = Vec::new();
    push_credential_errors(&mut errors, &form.email, &form.password);

    if !is_valid_name(&form.first_name) {
        errors.push("Please enter a valid first name".to_string());
    }
    if !is_valid_name(&form.last_name) {
        errors.push("Please enter a valid last name".to_string());
    }
    if !is_valid_phone(&form.phone) {
        errors.push("Please enter a valid phone number".to_string());
    }
    if form.password != form.confirm_password {
        errors.push("Passwords do not match".to_string());
    }
    if password_checks(&form.password).score() < 3 {
        errors.push(
            "Password is too weak. Include uppercase, lowercase, numbers, and special characters"
                .to_string(),
        );
    }

    errors
}

fn push_credential_errors(errors: &mut Vec<String>, email: &str, password: &str) {
    if !is_valid_email(email) {
        errors.push("Please enter a valid email address".to_string());
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        errors.push("Password must be at least 8 characters long".to_string());
    }
}

/// Turns a list of form errors into a `ValidationError`, or `Ok` when empty.
pub fn into_result(errors: Vec<String>) -> Result<()> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(GymError::ValidationError { errors })
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(GymError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(GymError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// Program ids start at 1; `0` is reserved for "no selection".
pub fn validate_program_id(id: OfferingId) -> Result<()> {
    if id.0 == 0 {
        return Err(GymError::InvalidConfigValueError {
            field: "programs.id".to_string(),
            value: id.to_string(),
            reason: "Program id must be 1 or greater".to_string(),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(GymError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_email() {
        assert!(is_valid_email("ahmed@aogym.com"));
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("ahmed@aogym"));
        assert!(!is_valid_email("ahmed osman@aogym.com"));
    }

    #[test]
    fn test_is_valid_phone() {
        assert!(is_valid_phone("+1 (555) 123-4567"));
        assert!(is_valid_phone("5551234567"));
        assert!(!is_valid_phone("0551234567"));
        assert!(!is_valid_phone("phone"));
        assert!(!is_valid_phone(""));
    }

    #[test]
    fn test_is_valid_name() {
        assert!(is_valid_name("Omar"));
        assert!(is_valid_name("Mary Ann"));
        assert!(!is_valid_name("O"));
        assert!(!is_valid_name("R2D2"));
    }

    #[test]
    fn test_password_strength() {
        assert_eq!(password_checks("abc").strength(), PasswordStrength::Weak);
        assert_eq!(password_checks("abcdefgh1").strength(), PasswordStrength::Medium);
        assert_eq!(password_checks("Abcdefg1!").score(), 5);
        assert_eq!(password_checks("Abcdefg1!").strength(), PasswordStrength::Strong);
    }

    #[test]
    fn test_validate_membership_form() {
        let form = MembershipForm {
            full_name: "Amina Yusuf".to_string(),
            email: "amina@aogym.com".to_string(),
            phone: "+15551234567".to_string(),
            plan_type: "premium".to_string(),
        };
        assert!(validate_membership_form(&form).is_empty());

        let errors = validate_membership_form(&MembershipForm::default());
        assert_eq!(
            errors,
            vec![
                "Full name is required",
                "Email is required",
                "Please enter a valid email",
                "Phone number is required",
                "Please enter a valid phone number",
                "Please select a membership plan",
            ]
        );
    }

    #[test]
    fn test_validate_signup_form() {
        let mut form = SignupForm {
            first_name: "Omar".to_string(),
            last_name: "Mohamed".to_string(),
            email: "omar@aogym.com".to_string(),
            phone: "+1 555 000 1111".to_string(),
            password: "Sup3rSecret!".to_string(),
            confirm_password: "Sup3rSecret!".to_string(),
        };
        assert!(validate_signup_form(&form).is_empty());

        form.confirm_password = "different".to_string();
        assert_eq!(validate_signup_form(&form), vec!["Passwords do not match"]);

        form.password = "aaaaaaaa".to_string();
        form.confirm_password = "aaaaaaaa".to_string();
        assert_eq!(
            validate_signup_form(&form),
            vec!["Password is too weak. Include uppercase, lowercase, numbers, and special characters"]
        );
    }

    #[test]
    fn test_validate_login_form() {
        let form = LoginForm {
            email: "bad".to_string(),
            password: "short".to_string(),
        };
        assert_eq!(validate_login_form(&form).len(), 2);
        assert!(matches!(
            into_result(validate_login_form(&form)),
            Err(GymError::ValidationError { ref errors }) if errors.len() == 2
        ));
        assert!(into_result(Vec::new()).is_ok());
    }

    #[test]
    fn test_validate_program_id() {
        assert!(validate_program_id(OfferingId(1)).is_ok());
        assert!(matches!(
            validate_program_id(OfferingId(0)),
            Err(GymError::InvalidConfigValueError { ref field, .. }) if field == "programs.id"
        ));
    }
}
