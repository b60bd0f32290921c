//! User record and request payload

use std::fmt;

use serde::de::{self, IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

/// A row of the `users` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
}

/// Fields written by create and update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
}

/// Request body for `POST /api/users` and `PUT /api/users/{id}`.
///
/// Keys match case-insensitively (`"Name"` sets `name`) and the last
/// non-null duplicate wins. Every field may be absent or `null`; missing strings
/// become `""` and a missing id becomes `0`. Unknown keys are ignored, and
/// a bare `null` body decodes to an all-empty payload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserPayload {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub email: Option<String>,
}

impl<'de> Deserialize<'de> for UserPayload {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(PayloadVisitor)
    }
}

struct PayloadVisitor;

impl<'de> Visitor<'de> for PayloadVisitor {
    type Value = UserPayload;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a JSON object with id, name and email")
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(UserPayload::default())
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut payload = UserPayload::default();

        while let Some(key) = map.next_key::<String>()? {
            if key.eq_ignore_ascii_case("id") {
                payload.id = map.next_value::<Option<_>>()?.or(payload.id);
            } else if key.eq_ignore_ascii_case("name") {
                payload.name = map.next_value::<Option<_>>()?.or(payload.name);
            } else if key.eq_ignore_ascii_case("email") {
                payload.email = map.next_value::<Option<_>>()?.or(payload.email);
            } else {
                map.next_value::<IgnoredAny>()?;
            }
        }

        Ok(payload)
    }
}

impl UserPayload {
    /// Fields to persist. Any client-supplied id is dropped.
    pub fn to_new_user(&self) -> NewUser {
        NewUser {
            name: self.name.clone().unwrap_or_default(),
            email: self.email.clone().unwrap_or_default(),
        }
    }

    /// The payload as a `User`, exactly as submitted.
    ///
    /// Update responses echo this rather than re-reading the row, so the
    /// id is the one from the body, not from the path.
    pub fn into_echo(self) -> User {
        User {
            id: self.id.unwrap_or_default(),
            name: self.name.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
        }
    }
}
