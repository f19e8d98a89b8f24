use vibestack::setup::validate::{validate_api_key, ApiKeyError};

#[test]
fn setup_validate_module_rejects_empty_before_prefix() {
    assert_eq!(validate_api_key(""), Err(ApiKeyError::Missing));
}

#[test]
fn setup_validate_module_rejects_missing_prefix() {
    for candidate in ["key-0123456789abcdef0123", "SK-0123456789abcdef0123", "s"] {
        assert_eq!(
            validate_api_key(candidate),
            Err(ApiKeyError::WrongPrefix),
            "candidate: {candidate}"
        );
    }
}

#[test]
fn setup_validate_module_rejects_short_prefixed_keys() {
    assert_eq!(validate_api_key("sk-"), Err(ApiKeyError::TooShort));
    assert_eq!(validate_api_key("sk-0123456789abcdef"), Err(ApiKeyError::TooShort));
}

#[test]
fn setup_validate_module_accepts_prefix_plus_twenty_characters() {
    let key = format!("sk-{}", "x".repeat(20));
    assert_eq!(validate_api_key(&key), Ok(()));
}

#[test]
fn setup_validate_module_reasons_render_inline_messages() {
    assert_eq!(ApiKeyError::Missing.to_string(), "API key is required");
    assert_eq!(
        ApiKeyError::WrongPrefix.to_string(),
        "API key must start with `sk-`"
    );
    assert_eq!(
        ApiKeyError::TooShort.to_string(),
        "API key must be at least 20 characters"
    );
}
