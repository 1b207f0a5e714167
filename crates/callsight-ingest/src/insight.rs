//! Per-row annotation record.

use serde::{Deserialize, Serialize};

/// Insight fields derived from one utterance row. Every field starts absent
/// and is only ever set by a detector, never cleared; absent fields are
/// omitted from the serialized value so the `insight` CSV cell stays sparse.
///
/// `manager_is_ok` is set by the aggregator on exactly one row per dialogue
/// (the first one in table order).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insight {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub greeting: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub farewell: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub introduce: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manager_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manager_is_ok: Option<bool>,
}

impl Insight {
    pub fn is_empty(&self) -> bool {
        self.greeting.is_none()
            && self.farewell.is_none()
            && self.introduce.is_none()
            && self.manager_name.is_none()
            && self.company_name.is_none()
            && self.manager_is_ok.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_insight_serializes_to_empty_object() {
        let json = serde_json::to_string(&Insight::default()).unwrap();
        assert_eq!(json, "{}");
    }

    #[test]
    fn absent_fields_are_omitted() {
        let insight = Insight {
            greeting: Some(true),
            manager_name: Some("Анна".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_string(&insight).unwrap();
        assert_eq!(json, r#"{"greeting":true,"manager_name":"Анна"}"#);
    }
}
