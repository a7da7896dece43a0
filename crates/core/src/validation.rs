//! Pre-submission form checks.
//!
//! Advisory only: the API re-validates everything server-side. Checks
//! run in a fixed order and stop at the first failure, so the user sees
//! one message at a time, and a failed check means no request is made.

use crate::errors::CoreError;

/// The symbols accepted as a password's "special character".
pub const PASSWORD_SYMBOLS: &str = "!@#$%^&*(),.?\":{}|<>";

/// Minimum password length, counted in characters.
pub const PASSWORD_MIN_CHARS: usize = 8;

/// What the signup form submits.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SignupForm {
    pub full_name: String,
    pub email: String,
    pub password: String,
}

/// What the login form submits.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Check a signup form: name, then email, then password.
pub fn validate_signup(form: &SignupForm) -> Result<(), CoreError> {
    validate_full_name(&form.full_name)?;
    validate_email(&form.email)?;
    validate_signup_password(&form.password)?;
    Ok(())
}

/// Check a login form: email, then password.
pub fn validate_login(form: &LoginForm) -> Result<(), CoreError> {
    validate_email(&form.email)?;
    validate_login_password(&form.password)?;
    Ok(())
}

/// ASCII letters and whitespace only, non-empty.
pub fn validate_full_name(name: &str) -> Result<(), CoreError> {
    let ok = !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphabetic() || c.is_whitespace());
    if ok {
        Ok(())
    } else {
        Err(CoreError::Validation(
            "Full Name should only contain alphabets.".to_string(),
        ))
    }
}

/// Conventional `local@domain.tld` shape: exactly one `@`, no
/// whitespace anywhere, and a dot inside the domain.
pub fn validate_email(email: &str) -> Result<(), CoreError> {
    if is_valid_email(email) {
        Ok(())
    } else {
        Err(CoreError::Validation(
            "Please enter a valid email address.".to_string(),
        ))
    }
}

fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    // A dot with at least one character on each side of it.
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// Signup password policy: 8+ characters with an uppercase letter, a
/// digit, and a symbol from [`PASSWORD_SYMBOLS`].
pub fn validate_signup_password(password: &str) -> Result<(), CoreError> {
    let ok = password.chars().count() >= PASSWORD_MIN_CHARS
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_digit())
        && password.chars().any(|c| PASSWORD_SYMBOLS.contains(c));
    if ok {
        Ok(())
    } else {
        Err(CoreError::Validation(
            "Password must be 8+ characters with an uppercase letter, a number, and a symbol."
                .to_string(),
        ))
    }
}

/// Login password policy. Unlike signup, no digit is required; the two
/// policies are intentionally kept distinct until product says
/// otherwise.
pub fn validate_login_password(password: &str) -> Result<(), CoreError> {
    let ok = password.chars().count() >= PASSWORD_MIN_CHARS
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| PASSWORD_SYMBOLS.contains(c));
    if ok {
        Ok(())
    } else {
        Err(CoreError::Validation(
            "Password must be 8+ characters with at least one uppercase letter and one symbol."
                .to_string(),
        ))
    }
}
