//! Flux standard action shape predicates

use crate::value::Value;

/// The only keys an FSA record may contain.
pub(crate) const VALID_KEYS: [&str; 4] = ["type", "payload", "error", "meta"];

/// True iff `action` is a plain key/value record with a string-valued
/// `type` and no keys outside `type`, `payload`, `error`, `meta`.
pub fn is_fsa(action: &Value) -> bool {
    let Value::Map(map) = action else {
        return false;
    };
    matches!(map.get("type"), Some(Value::String(_)))
        && map.keys().all(|key| VALID_KEYS.contains(&key.as_str()))
}

/// True iff `action` is an FSA whose `error` field is `true`.
pub fn is_error(action: &Value) -> bool {
    let Value::Map(map) = action else {
        return false;
    };
    is_fsa(action) && matches!(map.get("error"), Some(Value::Bool(true)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::ValueMap;

    fn record(fields: &[(&str, Value)]) -> Value {
        let mut map = ValueMap::new();
        for (key, value) in fields {
            map.insert(key.to_string(), value.clone());
        }
        Value::Map(map)
    }

    #[test]
    fn test_minimal_fsa() {
        assert!(is_fsa(&record(&[("type", "X".into())])));
    }

    #[test]
    fn test_all_optional_fields_allowed() {
        let action = record(&[
            ("type", "X".into()),
            ("payload", 1i64.into()),
            ("error", false.into()),
            ("meta", Value::Null),
        ]);
        assert!(is_fsa(&action));
    }

    #[test]
    fn test_extra_key_rejected() {
        let action = record(&[("type", "X".into()), ("extra", 1i64.into())]);
        assert!(!is_fsa(&action));
    }

    #[test]
    fn test_non_string_type_rejected() {
        assert!(!is_fsa(&record(&[("type", 1i64.into())])));
    }

    #[test]
    fn test_missing_type_rejected() {
        assert!(!is_fsa(&record(&[("payload", 1i64.into())])));
    }

    #[test]
    fn test_non_record_rejected() {
        assert!(!is_fsa(&Value::String("X".into())));
        assert!(!is_fsa(&Value::Null));
        assert!(!is_fsa(&Value::List(vec!["X".into()])));
    }

    #[test]
    fn test_is_error() {
        assert!(is_error(&record(&[
            ("type", "X".into()),
            ("error", true.into()),
        ])));
        assert!(!is_error(&record(&[
            ("type", "X".into()),
            ("error", false.into()),
        ])));
        // `error` must literally be the boolean true.
        assert!(!is_error(&record(&[
            ("type", "X".into()),
            ("error", "true".into()),
        ])));
        assert!(!is_error(&record(&[("type", "X".into())])));
        // Not an FSA at all, so not an error action either.
        assert!(!is_error(&record(&[
            ("type", 1i64.into()),
            ("error", true.into()),
        ])));
    }
}
