use crate::prelude::*;
use std::collections::BTreeMap;

///
/// TimestampFields
/// The three timestamp column names a base class declares.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct TimestampFields {
    pub created_at: String,
    pub updated_at: String,
    pub deleted_at: String,
}

impl TimestampFields {
    /// Whether `name` is any of the three timestamp columns.
    #[must_use]
    pub fn matches(&self, name: &str) -> bool {
        name == self.created_at || name == self.updated_at || name == self.deleted_at
    }
}

impl Default for TimestampFields {
    fn default() -> Self {
        Self {
            created_at: "created_at".to_string(),
            updated_at: "updated_at".to_string(),
            deleted_at: "deleted_at".to_string(),
        }
    }
}

///
/// TimestampLookup
/// Caller-supplied table mapping a base-class identifier to its timestamp
/// column names. Replaces runtime reflection over the base class.
///

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(transparent)]
pub struct TimestampLookup(BTreeMap<String, TimestampFields>);

impl TimestampLookup {
    pub fn insert(&mut self, base_class: impl Into<String>, fields: TimestampFields) {
        self.0.insert(base_class.into(), fields);
    }

    /// Resolve the timestamp names for `base_class`.
    ///
    /// An unknown base class is non-fatal: a diagnostic is emitted and the
    /// conventional `created_at`/`updated_at`/`deleted_at` names are used.
    #[must_use]
    pub fn resolve(&self, base_class: &str) -> TimestampFields {
        self.0.get(base_class).cloned().unwrap_or_else(|| {
            tracing::warn!(base_class, "base class not found, using default timestamp fields");
            TimestampFields::default()
        })
    }
}
