//! Trigger and grounding source models.

use schemars::schema::RootSchema;
use schemars::{schema_for, JsonSchema};
use serde::{Deserialize, Serialize};
use serde_json::Number;

/// When a trigger occurs, as reported by the model.
///
/// Models are asked for `MM:SS`/`HH:MM:SS` text but sometimes answer with a
/// raw number of seconds, so both shapes are accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum TriggerTimestamp {
    /// Textual timestamp (`MM:SS`, `HH:MM:SS`, or digits)
    Text(String),
    /// Raw seconds
    Seconds(Number),
}

impl TriggerTimestamp {
    /// Build a numeric timestamp. Returns `None` for NaN or infinite values.
    pub fn from_f64(seconds: f64) -> Option<Self> {
        Number::from_f64(seconds).map(Self::Seconds)
    }
}

impl From<&str> for TriggerTimestamp {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for TriggerTimestamp {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for TriggerTimestamp {
    fn from(value: i64) -> Self {
        Self::Seconds(Number::from(value))
    }
}

impl std::fmt::Display for TriggerTimestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text(s) => write!(f, "{}", s),
            Self::Seconds(n) => write!(f, "{}", n),
        }
    }
}

/// One identified ASMR stimulus and when it occurs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Trigger {
    /// Description of the trigger (e.g. "gentle tapping")
    pub trigger: String,

    /// When the trigger occurs
    pub timestamp: TriggerTimestamp,
}

impl Trigger {
    pub fn new(trigger: impl Into<String>, timestamp: impl Into<TriggerTimestamp>) -> Self {
        Self {
            trigger: trigger.into(),
            timestamp: timestamp.into(),
        }
    }
}

/// JSON Schema for the trigger array a model is expected to return.
pub fn trigger_list_schema() -> RootSchema {
    schema_for!(Vec<Trigger>)
}

/// Web citation inside a grounding chunk.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebSource {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// A citation the model reports having used.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroundingSource {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub web: Option<WebSource>,
}

impl GroundingSource {
    pub fn web(uri: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            web: Some(WebSource {
                uri: Some(uri.into()),
                title: Some(title.into()),
            }),
        }
    }

    /// Returns `(uri, title)` when both are present and non-empty.
    pub fn link(&self) -> Option<(&str, &str)> {
        let web = self.web.as_ref()?;
        let uri = web.uri.as_deref().filter(|u| !u.is_empty())?;
        let title = web.title.as_deref().filter(|t| !t.is_empty())?;
        Some((uri, title))
    }

    /// True when the source can be rendered as a link.
    pub fn is_renderable(&self) -> bool {
        self.link().is_some()
    }
}

/// Output of one analysis request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub triggers: Vec<Trigger>,

    #[serde(default)]
    pub sources: Vec<GroundingSource>,
}

impl AnalysisResult {
    /// Sources that carry both a URI and a title.
    pub fn renderable_sources(&self) -> impl Iterator<Item = &GroundingSource> {
        self.sources.iter().filter(|s| s.is_renderable())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timestamp_deserializes_text_and_number() {
        let text: TriggerTimestamp = serde_json::from_str("\"01:23\"").unwrap();
        assert_eq!(text, TriggerTimestamp::from("01:23"));

        let number: TriggerTimestamp = serde_json::from_str("5").unwrap();
        assert_eq!(number, TriggerTimestamp::from(5i64));
        assert_eq!(serde_json::to_string(&number).unwrap(), "5");
    }

    #[test]
    fn test_timestamp_rejects_other_shapes() {
        assert!(serde_json::from_str::<TriggerTimestamp>("null").is_err());
        assert!(serde_json::from_str::<TriggerTimestamp>("[1]").is_err());
        assert!(serde_json::from_str::<TriggerTimestamp>("true").is_err());
    }

    #[test]
    fn test_trigger_list_schema() {
        let schema = serde_json::to_value(trigger_list_schema()).unwrap();
        assert_eq!(schema["type"], "array");
        assert_eq!(schema["items"]["$ref"], "#/definitions/Trigger");

        let trigger = &schema["definitions"]["Trigger"];
        assert_eq!(trigger["required"], serde_json::json!(["timestamp", "trigger"]));
        assert_eq!(trigger["properties"]["trigger"]["type"], "string");

        let timestamp = serde_json::to_string(&schema["definitions"]["TriggerTimestamp"]).unwrap();
        assert!(timestamp.contains("\"string\""));
        assert!(timestamp.contains("\"number\""));
    }

    #[test]
    fn test_grounding_source_link() {
        let source = GroundingSource::web("http://a", "A");
        assert_eq!(source.link(), Some(("http://a", "A")));

        let missing_web = GroundingSource::default();
        assert!(!missing_web.is_renderable());

        let missing_title: GroundingSource =
            serde_json::from_str(r#"{"web":{"uri":"http://b"}}"#).unwrap();
        assert!(!missing_title.is_renderable());

        let empty_uri = GroundingSource::web("", "Title");
        assert!(!empty_uri.is_renderable());
    }

    #[test]
    fn test_renderable_sources_filters_incomplete() {
        let sources: Vec<GroundingSource> = serde_json::from_str(
            r#"[{"web":{"uri":"http://a","title":"A"}},{"web":null},{}]"#,
        )
        .unwrap();
        let result = AnalysisResult {
            triggers: vec![],
            sources,
        };

        let rendered: Vec<_> = result.renderable_sources().collect();
        assert_eq!(rendered.len(), 1);
        assert_eq!(rendered[0].link(), Some(("http://a", "A")));
    }
}
