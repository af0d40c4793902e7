use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Number of consensus / divergence points shown per analysis.
const DISPLAY_POINTS: usize = 3;

/// Body of `POST /query`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct QueryInput {
    pub project_id: String,
    pub model_id: String,
    pub query: String,
}

/// One piece of evidence backing an analysis.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Evidence {
    pub reason: String,
    #[serde(default)]
    pub evidence_citation: String,
    #[serde(default)]
    pub perspective_source: String,
    /// Confidence in `0.0..=1.0`.
    #[serde(default)]
    pub confidence: f64,
}

/// Argument strengths and agreement lists from debate-style methods.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct DebateSummary {
    #[serde(default)]
    pub perspective_a_strength: f64,
    #[serde(default)]
    pub perspective_b_strength: f64,
    #[serde(default)]
    pub consensus_areas: Vec<String>,
    #[serde(default)]
    pub unresolved_disagreements: Vec<String>,
}

/// Structured analysis returned by `POST /query` and stored in history.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct QueryResponse {
    /// Neutrality score in `0..=100`; low leans toward variant A, high toward B.
    pub score: f64,
    pub alignment: String,
    #[serde(default)]
    pub justifications: Vec<Evidence>,
    #[serde(default)]
    pub identified_devices: Vec<String>,
    /// Uncertainty as a percentage.
    #[serde(default)]
    pub uncertainty: f64,
    #[serde(default)]
    pub reasoning: String,
    /// Variant → preference weight. Weights need not sum to 1.
    #[serde(default)]
    pub biases: IndexMap<String, f64>,
    #[serde(default)]
    pub approach_used: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consensus_areas: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disagreement_areas: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debate_summary: Option<DebateSummary>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl QueryResponse {
    /// Consensus points to display: the top-level list, else the debate
    /// summary's, capped at three.
    #[must_use]
    pub fn consensus(&self) -> Option<&[String]> {
        self.consensus_areas
            .as_deref()
            .or_else(|| {
                self.debate_summary
                    .as_ref()
                    .map(|summary| summary.consensus_areas.as_slice())
            })
            .map(|points| &points[..points.len().min(DISPLAY_POINTS)])
    }

    /// Divergence points to display: the top-level list, else the debate
    /// summary's unresolved disagreements, capped at three.
    #[must_use]
    pub fn divergence(&self) -> Option<&[String]> {
        self.disagreement_areas
            .as_deref()
            .or_else(|| {
                self.debate_summary
                    .as_ref()
                    .map(|summary| summary.unresolved_disagreements.as_slice())
            })
            .map(|points| &points[..points.len().min(DISPLAY_POINTS)])
    }

    /// Backend-reported failure embedded in an otherwise successful response.
    #[must_use]
    pub fn backend_error(&self) -> Option<&str> {
        self.error.as_deref().filter(|e| !e.trim().is_empty())
    }
}

impl AsRef<Self> for QueryResponse {
    fn as_ref(&self) -> &Self {
        self
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn minimal() -> QueryResponse {
        serde_json::from_str(r#"{"score": 50, "alignment": "neutral"}"#).unwrap()
    }

    #[test]
    fn minimal_payload_fills_defaults() {
        let response = minimal();
        assert!(response.justifications.is_empty());
        assert!(response.biases.is_empty());
        assert!(response.consensus().is_none());
        assert!(response.backend_error().is_none());
    }

    #[test]
    fn consensus_prefers_top_level_list() {
        let mut response = minimal();
        response.consensus_areas = Some(vec!["top".into()]);
        response.debate_summary = Some(DebateSummary {
            perspective_a_strength: 0.4,
            perspective_b_strength: 0.6,
            consensus_areas: vec!["debate".into()],
            unresolved_disagreements: vec![],
        });
        assert_eq!(response.consensus(), Some(&["top".to_string()][..]));
    }

    #[test]
    fn divergence_falls_back_to_debate_summary_and_caps_at_three() {
        let mut response = minimal();
        response.debate_summary = Some(DebateSummary {
            perspective_a_strength: 0.5,
            perspective_b_strength: 0.5,
            consensus_areas: vec![],
            unresolved_disagreements: vec![
                "one".into(),
                "two".into(),
                "three".into(),
                "four".into(),
            ],
        });
        assert_eq!(response.divergence().map(<[String]>::len), Some(3));
        assert_eq!(response.divergence().unwrap()[2], "three");
    }

    #[test]
    fn blank_backend_error_is_ignored() {
        let mut response = minimal();
        response.error = Some("   ".into());
        assert!(response.backend_error().is_none());
        response.error = Some("model offline".into());
        assert_eq!(response.backend_error(), Some("model offline"));
    }

    #[test]
    fn bias_map_preserves_backend_order() {
        let response: QueryResponse = serde_json::from_str(
            r#"{"score": 70, "alignment": "leans_b", "biases": {"variant_b": 0.7, "variant_a": 0.3}}"#,
        )
        .unwrap();
        let keys: Vec<&str> = response.biases.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["variant_b", "variant_a"]);
    }
}
