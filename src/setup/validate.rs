pub const API_KEY_PREFIX: &str = "sk-";
pub const API_KEY_MIN_LEN: usize = 20;

/// Why a candidate API key was rejected. Checks run in this order and the
/// first failure wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiKeyError {
    Missing,
    WrongPrefix,
    TooShort,
}

impl std::fmt::Display for ApiKeyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiKeyError::Missing => write!(f, "API key is required"),
            ApiKeyError::WrongPrefix => {
                write!(f, "API key must start with `{API_KEY_PREFIX}`")
            }
            ApiKeyError::TooShort => {
                write!(f, "API key must be at least {API_KEY_MIN_LEN} characters")
            }
        }
    }
}

/// Pure format check for the CLI tool credential. No I/O, no side effects.
pub fn validate_api_key(candidate: &str) -> Result<(), ApiKeyError> {
    if candidate.is_empty() {
        return Err(ApiKeyError::Missing);
    }
    if !candidate.starts_with(API_KEY_PREFIX) {
        return Err(ApiKeyError::WrongPrefix);
    }
    if candidate.chars().count() < API_KEY_MIN_LEN {
        return Err(ApiKeyError::TooShort);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_candidate_takes_priority_over_prefix() {
        assert_eq!(validate_api_key(""), Err(ApiKeyError::Missing));
    }

    #[test]
    fn candidates_without_prefix_are_rejected() {
        assert_eq!(
            validate_api_key("pk-0123456789abcdef0123456789"),
            Err(ApiKeyError::WrongPrefix)
        );
        assert_eq!(validate_api_key("x"), Err(ApiKeyError::WrongPrefix));
    }

    #[test]
    fn short_prefixed_candidates_are_rejected() {
        assert_eq!(validate_api_key("sk-short"), Err(ApiKeyError::TooShort));
        assert_eq!(
            validate_api_key("sk-0123456789abcdef"),
            Err(ApiKeyError::TooShort)
        );
    }

    #[test]
    fn prefix_plus_twenty_characters_is_accepted() {
        let key = format!("sk-{}", "a".repeat(20));
        assert_eq!(validate_api_key(&key), Ok(()));
    }
}
