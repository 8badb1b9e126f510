use crate::application::error::{ApplicationError, ApplicationResult};

pub(super) const MIN_PASSWORD_LENGTH: usize = 6;
pub(super) const MAX_PASSWORD_LENGTH: usize = 120;

pub(super) fn validate_password(password: &str) -> ApplicationResult<()> {
    let length = password.chars().count();
    if !(MIN_PASSWORD_LENGTH..=MAX_PASSWORD_LENGTH).contains(&length) {
        return Err(ApplicationError::validation(format!(
            "password must be between {MIN_PASSWORD_LENGTH} and {MAX_PASSWORD_LENGTH} characters"
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_bounds() {
        assert!(validate_password("abcdef").is_ok());
        assert!(validate_password(&"x".repeat(120)).is_ok());
    }

    #[test]
    fn rejects_outside_bounds() {
        assert!(validate_password("abcde").is_err());
        assert!(validate_password(&"x".repeat(121)).is_err());
    }

    #[test]
    fn counts_characters_not_bytes() {
        assert!(validate_password("密码密码密码").is_ok());
    }
}
