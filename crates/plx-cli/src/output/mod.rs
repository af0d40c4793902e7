use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;
use crate::ui;

pub mod report;
pub mod table;

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => render_generic_table(&serde_json::to_value(value)?),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

/// Print `value` as JSON, or as the text produced by `report` in table mode.
pub fn output_report<T: Serialize>(
    value: &T,
    format: OutputFormat,
    report: impl FnOnce(&T) -> String,
) -> anyhow::Result<()> {
    if format == OutputFormat::Table {
        println!("{}", report(value));
        return Ok(());
    }
    output(value, format)
}

/// Print `rows` as a table in table mode, otherwise `value` as JSON.
pub fn output_rows<T: Serialize>(
    value: &T,
    format: OutputFormat,
    headers: &[&str],
    rows: &[Vec<String>],
) -> anyhow::Result<()> {
    if format != OutputFormat::Table {
        return output(value, format);
    }
    if rows.is_empty() {
        println!("(no rows)");
    } else {
        println!("{}", table::render_table(headers, rows, table_options()));
    }
    Ok(())
}

fn table_options() -> table::TableOptions {
    let prefs = ui::prefs();
    table::TableOptions {
        max_width: prefs.term_width,
        color: prefs.table_color,
    }
}

fn render_generic_table(value: &Value) -> anyhow::Result<String> {
    let options = table_options();
    let rendered = match value {
        Value::Array(items) if items.is_empty() => String::from("(no rows)"),
        Value::Array(items) if items.iter().all(Value::is_object) => {
            let mut headers: Vec<&str> = Vec::new();
            for key in items.iter().filter_map(Value::as_object).flat_map(|m| m.keys()) {
                if !headers.contains(&key.as_str()) {
                    headers.push(key);
                }
            }
            let rows: Vec<Vec<String>> = items
                .iter()
                .filter_map(Value::as_object)
                .map(|map| {
                    headers
                        .iter()
                        .map(|h| map.get(*h).map_or_else(|| "-".to_string(), cell))
                        .collect()
                })
                .collect();
            table::render_table(&headers, &rows, options)
        }
        Value::Array(items) => {
            let rows: Vec<Vec<String>> = items.iter().map(|v| vec![cell(v)]).collect();
            table::render_table(&["value"], &rows, options)
        }
        Value::Object(map) => {
            let rows: Vec<Vec<String>> = map
                .iter()
                .map(|(key, value)| vec![key.clone(), cell(value)])
                .collect();
            table::render_table(&["field", "value"], &rows, options)
        }
        scalar => cell(scalar),
    };
    Ok(rendered)
}

fn cell(value: &Value) -> String {
    match value {
        Value::String(v) => v.clone(),
        Value::Array(items) if items.iter().all(Value::is_string) => items
            .iter()
            .filter_map(Value::as_str)
            .collect::<Vec<_>>()
            .join(", "),
        other => other.to_string(),
    }
}
