//! Test data helpers for creating backend payloads
//!
//! Builders for the JSON documents the mock backend returns, with
//! generated names and emails where the exact value does not matter.

use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::Name;
use fake::Fake;
use serde_json::{json, Value};

pub const TEST_TOKEN: &str = "test-token-123";
pub const ADMIN_TOKEN: &str = "admin-token-456";

/// A user document as the backend returns it
pub fn user_json(id: &str, role: &str, created_at: &str) -> Value {
    let name: String = Name().fake();
    let email: String = SafeEmail().fake();
    json!({
        "_id": id,
        "name": name,
        "email": email,
        "role": role,
        "createdAt": created_at,
    })
}

/// A user document with a fixed name
pub fn named_user_json(id: &str, name: &str, role: &str) -> Value {
    json!({
        "_id": id,
        "name": name,
        "email": format!("{}@example.com", id),
        "role": role,
    })
}

/// A campaign document with a populated creator
pub fn campaign_json(id: &str, title: &str, status: &str, created_at: &str) -> Value {
    json!({
        "_id": id,
        "title": title,
        "description": format!("{} description", title),
        "budget": 2500,
        "status": status,
        "images": [format!("uploads/{}.jpg", id)],
        "createdBy": { "_id": "brand1", "name": "Brand Co", "email": "brand@example.com" },
        "createdAt": created_at,
    })
}

pub fn influencer_json(id: &str, name: &str, category: &str, followers: u64) -> Value {
    json!({
        "_id": id,
        "name": name,
        "age": 26,
        "followers": followers,
        "description": format!("{} creator", category),
        "categories": [category],
        "socialLinks": { "instagram": format!("https://instagram.com/{}", id) },
        "media": [format!("uploads/{}.jpg", id)],
    })
}
