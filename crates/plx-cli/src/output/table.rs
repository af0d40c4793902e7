//! Plain aligned tables.

const MIN_WIDTH: usize = 4;
const GAP: &str = "  ";

#[derive(Clone, Copy, Debug, Default)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

/// Render rows under `headers`, padding each column to its widest cell.
///
/// Missing cells render as `-`. When `max_width` is set the widest columns
/// are shrunk first and truncated cells end in `…`.
#[must_use]
pub fn render_table(headers: &[&str], rows: &[Vec<String>], options: TableOptions) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| char_len(h)).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(char_len(cell));
        }
    }
    if let Some(max_width) = options.max_width {
        shrink_to(&mut widths, max_width);
    }

    let header_line = join_cells(headers.iter().map(|h| (*h).to_string()), &widths, false);
    let divider = "-".repeat(char_len(&header_line));
    let mut lines = vec![header_line, divider];
    for row in rows {
        let cells = (0..widths.len()).map(|i| row.get(i).map_or_else(|| "-".to_string(), Clone::clone));
        lines.push(join_cells(cells, &widths, options.color));
    }
    lines.join("\n")
}

fn join_cells(cells: impl Iterator<Item = String>, widths: &[usize], color: bool) -> String {
    cells
        .zip(widths)
        .map(|(cell, &width)| {
            let text = truncate(&cell, width);
            let pad = " ".repeat(width.saturating_sub(char_len(&text)));
            let text = if color { colorize(&text) } else { text };
            format!("{text}{pad}")
        })
        .collect::<Vec<_>>()
        .join(GAP)
        .trim_end()
        .to_string()
}

fn shrink_to(widths: &mut [usize], max_width: usize) {
    let gaps = widths.len().saturating_sub(1) * GAP.len();
    while widths.iter().sum::<usize>() + gaps > max_width {
        let Some(widest) = widths
            .iter_mut()
            .filter(|w| **w > MIN_WIDTH)
            .max_by_key(|w| **w)
        else {
            break;
        };
        *widest -= 1;
    }
}

fn truncate(value: &str, width: usize) -> String {
    if char_len(value) <= width {
        return value.to_string();
    }
    let mut out: String = value.chars().take(width.saturating_sub(1)).collect();
    out.push('…');
    out
}

fn char_len(value: &str) -> usize {
    value.chars().count()
}

fn colorize(value: &str) -> String {
    let code = match value.to_ascii_lowercase().as_str() {
        "ready" | "success" => "32",
        "scraping" | "initializing..." => "33",
        "failure" | "unknown" => "31",
        _ => return value.to_string(),
    };
    format!("\u{1b}[{code}m{value}\u{1b}[0m")
}
