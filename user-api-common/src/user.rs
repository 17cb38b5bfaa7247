//! User records and the request bodies that create or replace them.

use std::hash::{Hash, Hasher};

use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

/// Store-assigned user identifier.
pub type UserId = u64;

/// A user record as held by the store and rendered on the wire.
///
/// Two records are equal when they share both `id` and `username`; the
/// remaining fields are mutable state, not identity.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub active: bool,
}

impl User {
    /// First and last name joined by a single space.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl PartialEq for User {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.username == other.username
    }
}

impl Eq for User {}

impl Hash for User {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
        self.username.hash(state);
    }
}

// Hand-written so the derived `fullName` goes out with every record.
impl Serialize for User {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("User", 7)?;
        s.serialize_field("id", &self.id)?;
        s.serialize_field("username", &self.username)?;
        s.serialize_field("email", &self.email)?;
        s.serialize_field("firstName", &self.first_name)?;
        s.serialize_field("lastName", &self.last_name)?;
        s.serialize_field("active", &self.active)?;
        s.serialize_field("fullName", &self.full_name())?;
        s.end()
    }
}

/// Body of `POST /users` and `PUT /users/{id}`.
///
/// Text fields are optional here so that a missing field is reported as a
/// field-level validation error instead of a parse failure. Unknown keys,
/// including `id` and `fullName`, are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default = "default_true")]
    pub active: bool,
}

impl Default for UserRequest {
    fn default() -> Self {
        Self {
            username: None,
            email: None,
            first_name: None,
            last_name: None,
            active: true,
        }
    }
}

impl From<UserDraft> for UserRequest {
    fn from(draft: UserDraft) -> Self {
        Self {
            username: Some(draft.username),
            email: Some(draft.email),
            first_name: Some(draft.first_name),
            last_name: Some(draft.last_name),
            active: draft.active,
        }
    }
}

/// A validated candidate record, ready to be handed to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDraft {
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub active: bool,
}

impl UserDraft {
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            active: true,
        }
    }

    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn john() -> User {
        User {
            id: 1,
            username: "johndoe".to_string(),
            email: "john.doe@example.com".to_string(),
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            active: true,
        }
    }

    #[test]
    fn test_full_name() {
        assert_eq!(john().full_name(), "John Doe");
    }

    #[test]
    fn test_user_serializes_camel_case_with_full_name() {
        let json = serde_json::to_value(john()).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["firstName"], "John");
        assert_eq!(json["lastName"], "Doe");
        assert_eq!(json["active"], true);
        assert_eq!(json["fullName"], "John Doe");
        assert!(json.get("first_name").is_none());
    }

    #[test]
    fn test_user_deserialize_ignores_full_name() {
        let json = r#"{"id":7,"username":"x","email":"x@y.io","firstName":"A","lastName":"B","active":false,"fullName":"nope"}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, 7);
        assert!(!user.active);
        assert_eq!(user.full_name(), "A B");
    }

    #[test]
    fn test_equality_is_id_and_username() {
        let a = john();
        let mut b = john();
        b.email = "other@example.com".to_string();
        b.active = false;
        assert_eq!(a, b);

        b.username = "johnny".to_string();
        assert_ne!(a, b);
    }

    #[test]
    fn test_request_defaults_active_to_true() {
        let request: UserRequest =
            serde_json::from_str(r#"{"username":"alice","id":99}"#).unwrap();
        assert_eq!(request.username.as_deref(), Some("alice"));
        assert!(request.email.is_none());
        assert!(request.active);
    }

    #[test]
    fn test_request_from_draft() {
        let draft = UserDraft::new("alice", "alice@example.com", "Alice", "Wonder").with_active(false);
        let request = UserRequest::from(draft);
        assert_eq!(request.first_name.as_deref(), Some("Alice"));
        assert!(!request.active);
    }
}
