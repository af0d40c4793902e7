//! Derived display values for query analyses.
//!
//! Everything here is pure: thresholds, shares and labels the renderers use
//! to present a [`QueryResponse`] without re-deriving the rules at each call
//! site.

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::Serialize;

use crate::entities::QueryResponse;

/// Share of `b` in `a + b`, as a percentage.
///
/// Falls back to an even split (`50.0`) when the total is not positive.
#[must_use]
pub fn relative_share(a: f64, b: f64) -> f64 {
    let total = a + b;
    if total > 0.0 { b / total * 100.0 } else { 50.0 }
}

/// Format a `0.0..=1.0` weight as a one-decimal percentage.
#[must_use]
pub fn percent(weight: f64) -> String {
    format!("{:.1}%", weight * 100.0)
}

/// Turn a backend identifier (`leans_variant_b`) into display text.
#[must_use]
pub fn humanize_label(label: &str) -> String {
    label.replace('_', " ")
}

// ---------------------------------------------------------------------------
// BiasBreakdown
// ---------------------------------------------------------------------------

/// How a bias map is presented.
///
/// Exactly two variants are compared head to head; any other cardinality is
/// shown as one bar per variant.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BiasBreakdown {
    TwoParty {
        a: (String, f64),
        b: (String, f64),
        /// `b`'s share of the combined weight, in percent.
        b_share: f64,
        /// Variant with the stronger preference. Ties go to `b`.
        leader: String,
        /// `|a - b|` in percentage points.
        preference_gap: f64,
    },
    Multi { entries: Vec<(String, f64)> },
}

impl BiasBreakdown {
    #[must_use]
    pub fn from_biases(biases: &IndexMap<String, f64>) -> Self {
        if biases.len() != 2 {
            return Self::Multi {
                entries: biases.iter().map(|(k, v)| (k.clone(), *v)).collect(),
            };
        }

        let mut entries = biases.iter();
        let (Some((name_a, &a)), Some((name_b, &b))) = (entries.next(), entries.next()) else {
            return Self::Multi {
                entries: Vec::new(),
            };
        };

        let leader = if a > b { name_a } else { name_b };
        Self::TwoParty {
            a: (name_a.clone(), a),
            b: (name_b.clone(), b),
            b_share: relative_share(a, b),
            leader: leader.clone(),
            preference_gap: (a - b).abs() * 100.0,
        }
    }

    /// One-line summary of a two-party comparison.
    #[must_use]
    pub fn summary(&self) -> Option<String> {
        match self {
            Self::TwoParty {
                leader,
                preference_gap,
                ..
            } => Some(format!(
                "The model shows a {preference_gap:.1}% stronger preference for {leader} based on the provided context."
            )),
            Self::Multi { .. } => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Bands
// ---------------------------------------------------------------------------

/// Which side a neutrality score falls on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    VariantA,
    Balanced,
    VariantB,
}

impl ScoreBand {
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score <= 40.0 {
            Self::VariantA
        } else if score >= 60.0 {
            Self::VariantB
        } else {
            Self::Balanced
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::VariantA => "Variant A Focus",
            Self::Balanced => "Balanced",
            Self::VariantB => "Variant B Focus",
        }
    }
}

/// Severity of a single bias weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BiasLevel {
    Low,
    Moderate,
    High,
}

impl BiasLevel {
    #[must_use]
    pub fn from_weight(weight: f64) -> Self {
        if weight < 0.2 {
            Self::Low
        } else if weight < 0.4 {
            Self::Moderate
        } else {
            Self::High
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Moderate => "Moderate",
            Self::High => "High",
        }
    }
}

#[must_use]
pub fn uncertainty_is_high(uncertainty: f64) -> bool {
    uncertainty > 20.0
}

/// Order analyses (or records carrying one) from highest to lowest
/// neutrality score. Equal scores keep their relative order.
pub fn sort_by_score_desc<T: AsRef<QueryResponse>>(items: &mut [T]) {
    items.sort_by(|a, b| b.as_ref().score.total_cmp(&a.as_ref().score));
}

// ---------------------------------------------------------------------------
// Timestamps
// ---------------------------------------------------------------------------

/// Human-readable age of a backend timestamp relative to `now`.
///
/// Accepts RFC 3339 and naive `YYYY-MM-DDTHH:MM:SS[.f]` (read as UTC).
/// Anything else is returned verbatim.
#[must_use]
pub fn relative_age(timestamp: &str, now: DateTime<Utc>) -> String {
    let Some(then) = parse_timestamp(timestamp) else {
        return timestamp.to_string();
    };

    let seconds = (now - then).num_seconds();
    if seconds < 0 {
        return String::from("just now");
    }

    let (value, unit) = match seconds {
        0..60 => return String::from("just now"),
        60..3_600 => (seconds / 60, "minute"),
        3_600..86_400 => (seconds / 3_600, "hour"),
        _ => (seconds / 86_400, "day"),
    };
    let plural = if value == 1 { "" } else { "s" };
    format!("{value} {unit}{plural} ago")
}

fn parse_timestamp(timestamp: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(timestamp)
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
        .or_else(|| {
            chrono::NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%dT%H:%M:%S%.f")
                .ok()
                .map(|naive| naive.and_utc())
        })
}
