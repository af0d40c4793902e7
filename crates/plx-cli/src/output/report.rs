//! Human-readable reports for table mode.

use chrono::{DateTime, Utc};
use plx_core::analysis::{
    BiasBreakdown, BiasLevel, humanize_label, percent, relative_age, uncertainty_is_high,
};
use plx_core::entities::HistoryItem;
use plx_core::responses::{AnalysisResponse, ProjectPage};

/// Full analysis of one query: score, bias, reasoning, debate, evidence.
#[must_use]
pub fn analysis(report: &AnalysisResponse) -> String {
    let response = &report.response;
    let mut lines = vec![
        format!("Query        {}", report.query),
        format!(
            "Score        {} / 100  ({}, {})",
            response.score,
            humanize_label(&response.alignment),
            report.band.label()
        ),
        format!("Method       {}", humanize_label(&response.approach_used)),
        format!(
            "Uncertainty  {}%{}",
            response.uncertainty,
            if uncertainty_is_high(response.uncertainty) {
                "  (high)"
            } else {
                ""
            }
        ),
    ];

    let devices = if response.identified_devices.is_empty() {
        String::from("None detected")
    } else {
        response
            .identified_devices
            .iter()
            .map(|d| humanize_label(d))
            .collect::<Vec<_>>()
            .join(", ")
    };
    lines.push(format!("Rhetoric     {devices}"));

    lines.push(String::new());
    lines.push(String::from("Bias"));
    lines.extend(bias_lines(&report.breakdown));

    if !response.reasoning.is_empty() {
        lines.push(String::new());
        lines.push(String::from("Reasoning"));
        lines.extend(response.reasoning.lines().map(|l| format!("  {l}")));
    }

    if let Some(debate) = &response.debate_summary {
        lines.push(String::new());
        lines.push(String::from("Debate dynamics"));
        lines.push(format!(
            "  Perspective A  {:.0}%",
            debate.perspective_a_strength * 100.0
        ));
        lines.push(format!(
            "  Perspective B  {:.0}%",
            debate.perspective_b_strength * 100.0
        ));
    }

    for (title, points) in [
        ("Consensus", response.consensus()),
        ("Divergence", response.divergence()),
    ] {
        if let Some(points) = points.filter(|p| !p.is_empty()) {
            lines.push(String::new());
            lines.push(title.to_string());
            lines.extend(points.iter().map(|p| format!("  - {p}")));
        }
    }

    if !response.justifications.is_empty() {
        lines.push(String::new());
        lines.push(String::from("Evidence"));
        for evidence in &response.justifications {
            lines.push(format!(
                "  [{} {}] {}",
                humanize_label(&evidence.perspective_source),
                percent(evidence.confidence),
                evidence.reason
            ));
            if !evidence.evidence_citation.is_empty() {
                lines.push(format!("      \"{}\"", evidence.evidence_citation));
            }
        }
    }

    lines.join("\n")
}

fn bias_lines(breakdown: &BiasBreakdown) -> Vec<String> {
    match breakdown {
        BiasBreakdown::TwoParty {
            a, b, b_share, ..
        } => {
            let mut lines = vec![
                weight_line(&a.0, a.1),
                weight_line(&b.0, b.1),
                format!("  {}", share_bar(*b_share, 30)),
            ];
            lines.extend(breakdown.summary().map(|s| format!("  {s}")));
            lines
        }
        BiasBreakdown::Multi { entries } if entries.is_empty() => {
            vec![String::from("  No bias weights reported")]
        }
        BiasBreakdown::Multi { entries } => entries
            .iter()
            .map(|(name, weight)| weight_line(name, *weight))
            .collect(),
    }
}

fn weight_line(name: &str, weight: f64) -> String {
    format!(
        "  {:<12} {:>6}  {}",
        humanize_label(name),
        percent(weight),
        BiasLevel::from_weight(weight).label()
    )
}

/// `A ███████░░░ B` with the filled part proportional to `b_share`.
fn share_bar(b_share: f64, width: usize) -> String {
    let clamped = b_share.clamp(0.0, 100.0);
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    let filled = ((clamped / 100.0) * width as f64).round() as usize;
    format!(
        "A {}{} B",
        "░".repeat(width - filled),
        "█".repeat(filled)
    )
}

/// Project detail: metadata, readiness, variants, scraped files, methods, history.
#[must_use]
pub fn project_page(page: &ProjectPage, now: DateTime<Utc>) -> String {
    let info = &page.info;
    let mut lines = vec![format!(
        "{}  [{}]",
        info.project_name,
        page.status.status.as_str().to_uppercase()
    )];
    let mut byline = format!("by {}", info.creator_name);
    if !info.tags.is_empty() {
        byline.push_str(&format!("  #{}", info.tags.join(" #")));
    }
    lines.push(byline);
    if !info.description.is_empty() {
        lines.push(info.description.clone());
    }

    if !page.is_ready() {
        lines.push(String::new());
        lines.push(format!(
            "Sources are still being scraped. Run `plx project watch {}` to follow progress.",
            page.project_id
        ));
        lines.extend(page.status.log_lines().into_iter().map(|l| format!("  {l}")));
    }

    lines.push(String::new());
    lines.push(String::from("Variants"));
    for (name, snippets) in &info.variants {
        lines.push(format!("  {} ({})", humanize_label(name), snippets.len()));
        lines.extend(snippets.iter().map(|s| format!("    - {}", first_line(s))));
    }

    lines.push(String::new());
    lines.push(String::from("Scraped data"));
    if page.scraped.is_empty() {
        lines.push(String::from("  No scraped data available"));
    } else {
        for (name, files) in &page.scraped.variants {
            let names: Vec<&str> = files.iter().map(|f| f.filename.as_str()).collect();
            lines.push(format!("  {}: {}", humanize_label(name), names.join(", ")));
        }
    }

    lines.push(String::new());
    lines.push(String::from("Analysis methods"));
    lines.extend(page.models.iter().map(|m| {
        if m.description.is_empty() {
            format!("  {}", m.model_id)
        } else {
            format!("  {}  {}", m.model_id, m.description)
        }
    }));

    if !page.history.is_empty() {
        lines.push(String::new());
        lines.push(String::from("History"));
        lines.extend(history_rows(&page.history, now).into_iter().map(|row| {
            format!("  {}  {}  ({}, {}, {})", row[0], row[1], row[2], row[3], row[4])
        }));
    }

    lines.join("\n")
}

/// `[id, query, alignment, method, age]` per history item.
#[must_use]
pub fn history_rows(items: &[HistoryItem], now: DateTime<Utc>) -> Vec<Vec<String>> {
    items
        .iter()
        .map(|item| {
            vec![
                item.id.clone(),
                item.query.clone(),
                humanize_label(&item.response.alignment),
                humanize_label(&item.model_id),
                relative_age(&item.timestamp, now),
            ]
        })
        .collect()
}

fn first_line(text: &str) -> &str {
    text.lines().next().unwrap_or_default()
}
