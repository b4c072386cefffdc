//! User data entities
//!
//! Records are loosely shaped on the wire; the Rust types keep explicit
//! presence for every optional field.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Envelope kind answered with the fixed acknowledgement.
pub const TEST_KIND: &str = "test";

/// User record returned by lookups.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: u64,
    pub name: String,
    pub status: String,
}

impl UserRecord {
    /// The record every lookup returns.
    pub fn fixture() -> Self {
        Self {
            id: 1,
            name: "john".to_string(),
            status: "active".to_string(),
        }
    }
}

/// Username accepted by authentication.
pub const ADMIN_USERNAME: &str = "admin";
/// Password accepted by authentication.
pub const ADMIN_PASSWORD: &str = "password";

/// Exact literal comparison against the single accepted pair.
pub fn credentials_match(username: &str, password: &str) -> bool {
    username == ADMIN_USERNAME && password == ADMIN_PASSWORD
}

/// Username / password pair.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthCredentials {
    pub username: String,
    pub password: String,
}

impl AuthCredentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn is_valid(&self) -> bool {
        credentials_match(&self.username, &self.password)
    }
}

/// Wire key holding the envelope kind.
const TYPE_KEY: &str = "type";

/// Loosely shaped data record with an optional `type`.
///
/// A string `type` always lives in `kind`; every other field, including a
/// `type` that is not a string, is carried verbatim in `fields`. Typed
/// construction, deserialization and `from_map` all go through the same rule,
/// so the record round-trips unchanged and never holds two `type` keys.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct DataEnvelope {
    kind: Option<String>,
    fields: Map<String, Value>,
}

impl DataEnvelope {
    pub fn of_kind(kind: impl Into<String>) -> Self {
        Self::default().with_field(TYPE_KEY, Value::String(kind.into()))
    }

    /// Builder-style method to add a field
    ///
    /// Setting `type` replaces any previous kind.
    pub fn with_field(mut self, key: impl Into<String>, value: Value) -> Self {
        let key = key.into();
        if key == TYPE_KEY {
            self.kind = None;
            self.fields.remove(TYPE_KEY);
            match value {
                Value::String(kind) => self.kind = Some(kind),
                other => {
                    self.fields.insert(key, other);
                }
            }
        } else {
            self.fields.insert(key, value);
        }
        self
    }

    /// Build from a JSON object without rejecting a non-string `type`.
    pub fn from_map(map: Map<String, Value>) -> Self {
        map.into_iter()
            .fold(Self::default(), |envelope, (key, value)| {
                envelope.with_field(key, value)
            })
    }

    /// The string `type`, if any.
    pub fn kind(&self) -> Option<&str> {
        self.kind.as_deref()
    }

    /// Fields other than a string `type`.
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    pub fn field(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn is_test(&self) -> bool {
        self.kind() == Some(TEST_KIND)
    }
}

impl From<Map<String, Value>> for DataEnvelope {
    fn from(map: Map<String, Value>) -> Self {
        Self::from_map(map)
    }
}

impl From<DataEnvelope> for Map<String, Value> {
    fn from(envelope: DataEnvelope) -> Self {
        let mut map = envelope.fields;
        if let Some(kind) = envelope.kind {
            map.insert(TYPE_KEY.to_string(), Value::String(kind));
        }
        map
    }
}

/// Fixed acknowledgement `{"success": true}`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuccessAck {
    pub success: bool,
}

impl SuccessAck {
    pub const OK: Self = Self { success: true };
}

/// Result of envelope processing.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ProcessedData {
    /// Fixed acknowledgement for test envelopes
    Ack(SuccessAck),
    /// The input envelope, returned as received
    PassThrough(DataEnvelope),
}

impl ProcessedData {
    pub fn is_ack(&self) -> bool {
        matches!(self, Self::Ack(_))
    }

    pub fn into_envelope(self) -> Option<DataEnvelope> {
        match self {
            Self::Ack(_) => None,
            Self::PassThrough(envelope) => Some(envelope),
        }
    }
}
