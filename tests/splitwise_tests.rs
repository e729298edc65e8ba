// Copyright (c) 2025 Spendlog Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use spendlog::splitwise::UserPayload;

#[test]
fn current_user_payload_parses() {
    let raw = r#"{
        "user": {
            "id": 42,
            "first_name": "Ada",
            "last_name": "Lovelace",
            "email": "ada@example.com",
            "registration_status": "confirmed"
        }
    }"#;
    let payload: UserPayload = serde_json::from_str(raw).unwrap();
    assert_eq!(payload.user.id, 42);
    assert_eq!(payload.user.first_name.as_deref(), Some("Ada"));
    assert_eq!(payload.user.last_name.as_deref(), Some("Lovelace"));
}

#[test]
fn current_user_payload_tolerates_missing_names() {
    let payload: UserPayload = serde_json::from_str(r#"{"user":{"id":7}}"#).unwrap();
    assert_eq!(payload.user.id, 7);
    assert_eq!(payload.user.first_name, None);
    assert_eq!(payload.user.last_name, None);
}
