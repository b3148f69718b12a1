use serde::Deserialize;
use serde_json::Value;

/// Badge shown for items the server did not attribute to a strategy.
pub const DEFAULT_SOURCE: &str = "Hybrid";

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RecommendationItem {
    pub title: String,
    #[serde(default)]
    pub genres: String,
    pub score: f64,
    #[serde(default)]
    pub source: Option<String>,
}

impl RecommendationItem {
    pub fn source_label(&self) -> &str {
        match self.source.as_deref() {
            Some(source) if !source.is_empty() => source,
            _ => DEFAULT_SOURCE,
        }
    }

    /// Score as a whole percentage, rounded half away from zero.
    pub fn match_percent(&self) -> i64 {
        (self.score * 100.0).round() as i64
    }
}

/// Body returned by `/recommend` on every status.
///
/// `detail` is left untyped: error handlers usually send a string, but
/// request validation failures carry a list of objects.
#[derive(Debug, Default, Deserialize)]
pub struct RecommendResponse {
    #[serde(default)]
    pub data: Option<Vec<RecommendationItem>>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub detail: Option<Value>,
}

impl RecommendResponse {
    pub fn detail_text(&self) -> Option<&str> {
        match &self.detail {
            Some(Value::String(detail)) if !detail.is_empty() => Some(detail),
            _ => None,
        }
    }

    pub fn message_text(&self) -> Option<&str> {
        self.message.as_deref().filter(|m| !m.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(score: f64, source: Option<&str>) -> RecommendationItem {
        RecommendationItem {
            title: "Inception".to_string(),
            genres: "Sci-Fi".to_string(),
            score,
            source: source.map(str::to_string),
        }
    }

    #[test]
    fn source_defaults_to_hybrid() {
        assert_eq!(item(0.5, None).source_label(), "Hybrid");
        assert_eq!(item(0.5, Some("")).source_label(), "Hybrid");
        assert_eq!(item(0.5, Some("Content")).source_label(), "Content");
    }

    #[test]
    fn match_percent_rounds_to_nearest() {
        assert_eq!(item(0.873, None).match_percent(), 87);
        assert_eq!(item(0.875, None).match_percent(), 88);
        assert_eq!(item(0.0, None).match_percent(), 0);
        assert_eq!(item(1.0, None).match_percent(), 100);
    }

    #[test]
    fn missing_source_deserializes_as_none() {
        let parsed: RecommendationItem =
            serde_json::from_str(r#"{"title":"Up","genres":"Animation","score":0.5}"#).unwrap();
        assert_eq!(parsed.source, None);
        assert_eq!(parsed.source_label(), "Hybrid");
    }

    #[test]
    fn non_string_detail_is_ignored() {
        let parsed: RecommendResponse =
            serde_json::from_str(r#"{"detail":[{"loc":["query","title"],"msg":"field required"}]}"#)
                .unwrap();
        assert_eq!(parsed.detail_text(), None);

        let parsed: RecommendResponse =
            serde_json::from_str(r#"{"detail":"Movie not found"}"#).unwrap();
        assert_eq!(parsed.detail_text(), Some("Movie not found"));
    }
}
