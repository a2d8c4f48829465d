//! Validated FSA actions, dispatchable through a store

use crate::fsa::VALID_KEYS;
use crate::value::{Value, ValueMap};
use reflow_core::Action;
use thiserror::Error;

/// Why a value failed FSA validation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FsaError {
    #[error("action is not a key/value record, got {0}")]
    NotARecord(&'static str),

    #[error("`type` field is missing or not a string")]
    BadType,

    #[error("unexpected key `{0}`")]
    UnexpectedKey(String),
}

/// An action validated against the FSA shape
///
/// Construction goes through the builder methods or through
/// `TryFrom<Value>`, so a held `FsaAction` always has a string `type` and
/// only the conventional keys. It implements [`reflow_core::Action`] with
/// the `type` field as its kind, so dynamically-shaped actions can be fed
/// to a typed store after boundary validation.
#[derive(Debug, Clone, PartialEq)]
pub struct FsaAction {
    fields: ValueMap,
}

impl FsaAction {
    /// Create an action with only a `type` field.
    pub fn new(action_type: impl Into<String>) -> Self {
        let mut fields = ValueMap::new();
        fields.insert("type".to_string(), Value::String(action_type.into()));
        Self { fields }
    }

    /// Attach a payload.
    pub fn with_payload(mut self, payload: impl Into<Value>) -> Self {
        self.fields.insert("payload".to_string(), payload.into());
        self
    }

    /// Attach metadata.
    pub fn with_meta(mut self, meta: impl Into<Value>) -> Self {
        self.fields.insert("meta".to_string(), meta.into());
        self
    }

    /// Mark this action as an error action (conventionally the payload then
    /// describes the error).
    pub fn with_error(mut self, error: bool) -> Self {
        self.fields.insert("error".to_string(), Value::Bool(error));
        self
    }

    /// The `type` discriminator.
    pub fn action_type(&self) -> &str {
        // A string `type` is guaranteed by construction.
        self.fields
            .get("type")
            .and_then(Value::as_str)
            .unwrap_or("")
    }

    /// The `payload` field, if present.
    pub fn payload(&self) -> Option<&Value> {
        self.fields.get("payload")
    }

    /// The `meta` field, if present.
    pub fn meta(&self) -> Option<&Value> {
        self.fields.get("meta")
    }

    /// Whether the `error` field is literally `true`.
    pub fn is_error(&self) -> bool {
        matches!(self.fields.get("error"), Some(Value::Bool(true)))
    }

    /// Give the underlying record back as a [`Value`].
    pub fn into_value(self) -> Value {
        Value::Map(self.fields)
    }
}

impl TryFrom<Value> for FsaAction {
    type Error = FsaError;

    fn try_from(value: Value) -> Result<Self, FsaError> {
        let type_name = value.type_name();
        let Value::Map(fields) = value else {
            return Err(FsaError::NotARecord(type_name));
        };
        if !matches!(fields.get("type"), Some(Value::String(_))) {
            return Err(FsaError::BadType);
        }
        if let Some(key) = fields.keys().find(|key| !VALID_KEYS.contains(&key.as_str())) {
            return Err(FsaError::UnexpectedKey(key.clone()));
        }
        Ok(Self { fields })
    }
}

impl Action for FsaAction {
    fn kind(&self) -> &str {
        self.action_type()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reflow_core::Store;

    #[test]
    fn test_builder_shape() {
        let action = FsaAction::new("ADD_TODO")
            .with_payload("buy milk")
            .with_meta(Value::Null);

        assert_eq!(action.action_type(), "ADD_TODO");
        assert_eq!(action.payload(), Some(&Value::String("buy milk".into())));
        assert_eq!(action.meta(), Some(&Value::Null));
        assert!(!action.is_error());
        assert!(crate::is_fsa(&action.into_value()));
    }

    #[test]
    fn test_error_flag() {
        let action = FsaAction::new("ADD_TODO_FAILED")
            .with_payload("disk full")
            .with_error(true);

        assert!(action.is_error());
        assert!(crate::is_error(&action.into_value()));
    }

    #[test]
    fn test_try_from_accepts_what_is_fsa_accepts() {
        let good = FsaAction::new("X").with_payload(1i64).into_value();
        assert!(crate::is_fsa(&good));
        assert!(FsaAction::try_from(good).is_ok());
    }

    #[test]
    fn test_try_from_names_the_violated_rule() {
        assert_eq!(
            FsaAction::try_from(Value::String("X".into())),
            Err(FsaError::NotARecord("string"))
        );

        let mut no_type = ValueMap::new();
        no_type.insert("payload".to_string(), 1i64.into());
        assert_eq!(
            FsaAction::try_from(Value::Map(no_type)),
            Err(FsaError::BadType)
        );

        let mut extra = ValueMap::new();
        extra.insert("type".to_string(), "X".into());
        extra.insert("extra".to_string(), 1i64.into());
        assert_eq!(
            FsaAction::try_from(Value::Map(extra)),
            Err(FsaError::UnexpectedKey("extra".to_string()))
        );
    }

    #[test]
    fn test_dispatch_through_store() {
        let tally = |state: Option<&i64>, action: &FsaAction| {
            let state = state.copied().unwrap_or(0);
            match action.action_type() {
                "INCREMENT" => state + 1,
                "DECREMENT" => state - 1,
                _ => state,
            }
        };
        let store = Store::new(tally, FsaAction::new("INIT")).unwrap();

        store.dispatch(FsaAction::new("INCREMENT")).unwrap();
        assert_eq!(store.get_state(), 1);

        store.dispatch(FsaAction::new("DECREMENT")).unwrap();
        assert_eq!(store.get_state(), 0);

        store.dispatch(FsaAction::new("NOOP")).unwrap();
        assert_eq!(store.get_state(), 0);
    }
}
