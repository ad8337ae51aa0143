use contracts::system::users::{PasswordChangeRequest, MIN_PASSWORD_LEN};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordError {
    #[error("Informe a senha atual")]
    MissingCurrent,
    #[error("As senhas não coincidem")]
    Mismatch,
    #[error("A nova senha deve ter no mínimo {MIN_PASSWORD_LEN} caracteres")]
    TooShort,
}

/// Checks the change-password form before anything is sent.
///
/// Mismatch is reported before length.
pub fn validate_password_change(
    current: &str,
    new_password: &str,
    confirmation: &str,
) -> Result<PasswordChangeRequest, PasswordError> {
    if current.is_empty() {
        return Err(PasswordError::MissingCurrent);
    }
    if new_password != confirmation {
        return Err(PasswordError::Mismatch);
    }
    // UTF-16 units, same as the browser's `value.length`
    if new_password.encode_utf16().count() < MIN_PASSWORD_LEN {
        return Err(PasswordError::TooShort);
    }
    Ok(PasswordChangeRequest {
        current_password: current.to_string(),
        new_password: new_password.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_mismatch_first() {
        assert_eq!(
            validate_password_change("old", "abc", "abd").unwrap_err(),
            PasswordError::Mismatch
        );
    }

    #[test]
    fn rejects_short_password() {
        let err = validate_password_change("old", "12345", "12345").unwrap_err();
        assert_eq!(err, PasswordError::TooShort);
        assert_eq!(
            err.to_string(),
            "A nova senha deve ter no mínimo 6 caracteres"
        );
    }

    #[test]
    fn requires_current_password() {
        assert_eq!(
            validate_password_change("", "123456", "123456").unwrap_err(),
            PasswordError::MissingCurrent
        );
    }

    #[test]
    fn accepts_valid_change() {
        let req = validate_password_change("old-secret", "nova123", "nova123").unwrap();
        assert_eq!(req.current_password, "old-secret");
        assert_eq!(req.new_password, "nova123");
    }

    #[test]
    fn length_counts_characters() {
        // six characters, more than six bytes
        assert!(validate_password_change("x", "çãéíõú", "çãéíõú").is_ok());
    }

    #[test]
    fn length_counts_utf16_units() {
        // each emoji is a surrogate pair
        assert!(validate_password_change("old", "😀😀😀", "😀😀😀").is_ok());
        assert_eq!(
            validate_password_change("old", "😀😀", "😀😀").unwrap_err(),
            PasswordError::TooShort
        );
    }
}
