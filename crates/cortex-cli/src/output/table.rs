use serde_json::Value;

/// One fixed-width table column.
#[derive(Clone, Copy, Debug)]
pub struct Column {
    pub header: &'static str,
    /// Top-level field read from each row object.
    pub field: &'static str,
    pub width: usize,
}

impl Column {
    #[must_use]
    pub const fn new(header: &'static str, field: &'static str, width: usize) -> Self {
        Self {
            header,
            field,
            width,
        }
    }
}

/// Render `value` with a fixed column spec.
///
/// An array yields one row per element, an object a single row, and
/// anything else no rows. The header and divider are always present.
#[must_use]
pub fn render_spec_table(columns: &[Column], value: &Value) -> String {
    let rows: Vec<&Value> = match value {
        Value::Array(items) => items.iter().collect(),
        Value::Object(_) => vec![value],
        _ => Vec::new(),
    };

    let header_line = format_line(
        columns
            .iter()
            .map(|column| (column.header.to_string(), column.width)),
    );
    let divider = "-".repeat(header_line.chars().count());

    let mut lines = Vec::with_capacity(2 + rows.len());
    lines.push(header_line);
    lines.push(divider);
    for row in rows {
        lines.push(format_line(
            columns
                .iter()
                .map(|column| (cell_text(row.get(column.field)), column.width)),
        ));
    }
    lines.join("\n")
}

fn format_line(cells: impl Iterator<Item = (String, usize)>) -> String {
    let line = cells
        .map(|(text, width)| pad(&truncate_text(&text, width), width))
        .collect::<Vec<_>>()
        .join("  ");
    line.trim_end().to_string()
}

fn cell_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
    }
}

fn truncate_text(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    if width <= 1 {
        return "…".to_string();
    }

    let mut out: String = value.chars().take(width - 1).collect();
    out.push('…');
    out
}

fn pad(value: &str, width: usize) -> String {
    let pad = width.saturating_sub(value.chars().count());
    format!("{value}{}", " ".repeat(pad))
}
