// SPDX-License-Identifier: MIT

//! JWT authentication tests.
//!
//! These tests verify that JWT tokens created by the auth routes can be
//! decoded by the auth middleware, catching compatibility issues early.

use fitlog::middleware::auth::{create_jwt, Claims};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use std::time::{SystemTime, UNIX_EPOCH};

#[test]
fn test_jwt_roundtrip() {
    // A token created by `create_jwt` must decode with the middleware's
    // Claims structure and algorithm. If either side changes, this fails.

    let signing_key = b"test_signing_key_32_bytes_long!!";
    let user_id = "2f4c9a36-9f6e-4b7a-9a44-0d8c79a5e011";

    let token = create_jwt(user_id, signing_key).expect("Failed to create JWT");

    let key = DecodingKey::from_secret(signing_key);
    let validation = Validation::new(Algorithm::HS256);

    let token_data = decode::<Claims>(&token, &key, &validation)
        .expect("Failed to decode JWT - check Claims struct compatibility");

    assert_eq!(token_data.claims.sub, user_id);
    assert!(token_data.claims.exp > 0);
    assert!(token_data.claims.iat > 0);
    assert!(token_data.claims.exp > token_data.claims.iat);
}

#[test]
fn test_jwt_rejects_wrong_key() {
    let token = create_jwt("user-1", b"test_signing_key_32_bytes_long!!").unwrap();

    let key = DecodingKey::from_secret(b"a_completely_different_key_here!");
    let validation = Validation::new(Algorithm::HS256);

    assert!(decode::<Claims>(&token, &key, &validation).is_err());
}

#[test]
fn test_jwt_expiration_is_future() {
    let signing_key = b"test_signing_key_32_bytes_long!!";
    let token = create_jwt("user-1", signing_key).unwrap();

    let key = DecodingKey::from_secret(signing_key);
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = false; // We'll check manually

    let token_data = decode::<Claims>(&token, &key, &validation).unwrap();

    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_secs() as usize;

    // Token should expire at least 6 days in the future
    assert!(
        token_data.claims.exp > now + 86400 * 6,
        "Token expiration should be ~7 days in the future"
    );
}
