//! Output formatting helpers for human-readable and JSON output.

use lobby::Session;

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Human,
    Json,
}

impl OutputFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json { Self::Json } else { Self::Human }
    }
}

/// Render a table with aligned columns.
///
/// `headers` and each row in `rows` must have the same length.
pub fn format_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let col_count = headers.len();
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate().take(col_count) {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let mut lines = vec![render_row(headers, &widths)];
    for row in rows {
        let cells: Vec<&str> = row.iter().take(col_count).map(String::as_str).collect();
        lines.push(render_row(&cells, &widths));
    }
    lines.join("\n")
}

fn render_row(cells: &[&str], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}

/// Rows for the online-players table: name, clash ID and presence status.
pub fn online_rows(sessions: &[Session], now_millis: u64) -> Vec<Vec<String>> {
    sessions
        .iter()
        .map(|s| {
            vec![
                s.name.clone(),
                s.clash_id.clone(),
                format!("Online • {}", s.elapsed_label(now_millis)),
            ]
        })
        .collect()
}

/// JSON view of a session with its login time and status spelled out.
pub fn online_json(session: &Session, now_millis: u64) -> serde_json::Value {
    let login_at = chrono::DateTime::from_timestamp_millis(session.login_time as i64)
        .map(|dt| dt.to_rfc3339());
    serde_json::json!({
        "name": session.name,
        "clashId": session.clash_id,
        "loginTime": session.login_time,
        "loginAt": login_at,
        "minutesOnline": session.minutes_online(now_millis),
        "status": session.elapsed_label(now_millis),
    })
}
