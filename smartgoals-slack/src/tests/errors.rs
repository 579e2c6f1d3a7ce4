use crate::SlackError;

#[test]
fn test_channel_not_found_code() {
    let error = SlackError::from_api_code("channel_not_found");
    assert!(matches!(error, SlackError::ChannelNotFound));
    assert!(!error.is_auth());
}

#[test]
fn test_invalid_auth_code() {
    let error = SlackError::from_api_code("invalid_auth");
    assert!(matches!(error, SlackError::InvalidAuth));
    assert!(error.is_auth());
}

#[test]
fn test_token_revoked_code() {
    let error = SlackError::from_api_code("token_revoked");
    assert!(matches!(error, SlackError::TokenRevoked));
    assert!(error.is_auth());
}

#[test]
fn test_unknown_code_falls_back_to_generic() {
    let error = SlackError::from_api_code("ratelimited");
    match error {
        SlackError::Api(code) => assert_eq!(code, "ratelimited"),
        other => panic!("expected generic Api error, got {other:?}"),
    }
}
