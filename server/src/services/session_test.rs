use super::*;

#[test]
fn token_is_64_hex_chars() {
    let token = generate_token();
    assert_eq!(token.len(), 64);
    assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn tokens_are_unique() {
    assert_ne!(generate_token(), generate_token());
}

#[test]
fn bytes_to_hex_pads_low_bytes() {
    assert_eq!(bytes_to_hex(&[0x00, 0x0f, 0xff]), "000fff");
}

#[test]
fn demo_credentials_verify() {
    assert!(verify_credentials("admin", "abc123"));
}

#[test]
fn wrong_credentials_rejected() {
    assert!(!verify_credentials("admin", "wrong"));
    assert!(!verify_credentials("root", "abc123"));
    assert!(!verify_credentials("", ""));
    assert!(!verify_credentials("Admin", "abc123"));
}

#[tokio::test]
async fn create_validate_delete_round_trip() {
    let store = SessionStore::new();
    let token = store.create("admin").await;

    let user = store.validate(&token).await.expect("session should exist");
    assert_eq!(user.username, "admin");

    store.delete(&token).await;
    assert!(store.validate(&token).await.is_none());
}

#[tokio::test]
async fn unknown_token_is_invalid() {
    let store = SessionStore::new();
    assert!(store.validate("deadbeef").await.is_none());
}

#[tokio::test]
async fn sessions_are_independent() {
    let store = SessionStore::new();
    let a = store.create("admin").await;
    let b = store.create("admin").await;
    assert_ne!(a, b);

    store.delete(&a).await;
    assert!(store.validate(&b).await.is_some());
}
