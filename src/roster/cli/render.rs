//! # Rendering Module
//!
//! Turns `CmdResult` data into terminal text. Every function returns a `String` so the
//! output can be tested without a terminal; the handlers decide when to print.
//!
//! Layout calculations (width, truncation, padding) use `unicode-width` so names with
//! wide characters still line up. Colors come from `colored`, which disables itself
//! when stdout is not a terminal or `NO_COLOR` is set.

use chrono::{DateTime, Utc};
use colored::Colorize;
use roster::api::{CmdMessage, MessageLevel};
use roster::index::DisplayRecord;
use roster::view::Pagination;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const POS_WIDTH: usize = 5;
const NAME_WIDTH: usize = 22;
const EMAIL_WIDTH: usize = 30;
const ROLE_WIDTH: usize = 14;
const DATE_WIDTH: usize = 10;

pub fn render_messages(messages: &[CmdMessage]) -> String {
    let mut out = String::new();
    for message in messages {
        let line = match message.level {
            MessageLevel::Info => message.content.dimmed(),
            MessageLevel::Success => message.content.green(),
            MessageLevel::Warning => message.content.yellow(),
        };
        out.push_str(&format!("{}\n", line));
    }
    out
}

pub fn print_messages(messages: &[CmdMessage]) {
    let output = render_messages(messages);
    if !output.is_empty() {
        print!("{}", output);
    }
}

/// Renders one page of records as a table, followed by the pager.
pub fn render_record_table(records: &[DisplayRecord], pagination: Option<&Pagination>) -> String {
    let mut out = String::new();

    if records.is_empty() {
        out.push_str(&empty_message(pagination));
        out.push('\n');
        return out;
    }

    let header = format!(
        "{}{}{}{}{}",
        pad_cell("#", POS_WIDTH),
        pad_cell("Name", NAME_WIDTH),
        pad_cell("Email", EMAIL_WIDTH),
        pad_cell("Role", ROLE_WIDTH),
        "Created"
    );
    out.push_str(&format!("{}\n", header.bold()));

    for dr in records {
        let pos = pad_cell(&format!("{}.", dr.position), POS_WIDTH);
        out.push_str(&format!(
            "{}{}{}{}{}\n",
            pos.yellow(),
            pad_cell(&dr.record.name, NAME_WIDTH),
            pad_cell(&dr.record.email, EMAIL_WIDTH),
            pad_cell(&dr.record.role, ROLE_WIDTH),
            format_date(dr.record.created_at).dimmed()
        ));
    }

    if let Some(p) = pagination {
        let pager = render_pager(p);
        if !pager.is_empty() {
            out.push('\n');
            out.push_str(&pager);
            out.push('\n');
        }
    }

    out
}

fn empty_message(pagination: Option<&Pagination>) -> String {
    match pagination {
        Some(p) if p.total_matches > 0 && p.is_out_of_range() => format!(
            "Page {} is past the end ({} {}).",
            p.page,
            p.total_pages,
            if p.total_pages == 1 { "page" } else { "pages" }
        ),
        Some(p) if !p.search.is_empty() => format!("No records match '{}'.", p.search),
        _ => "No records found.".to_string(),
    }
}

/// `Page 2 of 3 · 12 records   1 [2] 3`, with the current page highlighted.
/// Empty when everything fits on one page.
pub fn render_pager(pagination: &Pagination) -> String {
    if pagination.total_pages <= 1 {
        return String::new();
    }

    let numbers: Vec<String> = pagination
        .page_numbers()
        .into_iter()
        .map(|n| {
            if pagination.is_current(n) {
                format!("[{}]", n).blue().bold().to_string()
            } else {
                n.to_string()
            }
        })
        .collect();

    let summary = format!(
        "Page {} of {} · {} {}",
        pagination.page,
        pagination.total_pages,
        pagination.total_matches,
        if pagination.total_matches == 1 {
            "record"
        } else {
            "records"
        }
    );

    format!("{}   {}", summary.dimmed(), numbers.join(" "))
}

/// Full details of each record, separated by blank lines.
pub fn render_record_details(records: &[DisplayRecord]) -> String {
    let mut out = String::new();
    for (i, dr) in records.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&format!(
            "{} {}\n",
            format!("{}.", dr.position).yellow(),
            dr.record.name.bold()
        ));
        out.push_str(&format!("   email:   {}\n", dr.record.email));
        out.push_str(&format!("   role:    {}\n", dr.record.role));
        out.push_str(&format!(
            "   created: {} ({})\n",
            dr.record.created_at.format("%Y-%m-%d %H:%M"),
            format_time_ago(dr.record.created_at)
        ));
        out.push_str(&format!("   id:      {}\n", dr.record.id.to_string().dimmed()));
    }
    out
}

fn pad_cell(s: &str, width: usize) -> String {
    let text = truncate_to_width(s, width.saturating_sub(1));
    let padding = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(padding))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    let limit = max_width.saturating_sub(1);

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

fn format_date(timestamp: DateTime<Utc>) -> String {
    format!(
        "{:<width$}",
        timestamp.format("%Y-%m-%d").to_string(),
        width = DATE_WIDTH
    )
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    timeago::Formatter::new().convert(duration.to_std().unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster::model::Record;

    fn plain() {
        colored::control::set_override(false);
    }

    fn display(position: usize, name: &str, email: &str, role: &str) -> DisplayRecord {
        DisplayRecord {
            position,
            record: Record::new(name.into(), email.into(), role.into()),
        }
    }

    fn pagination(page: usize, total_pages: usize, total_matches: usize, search: &str) -> Pagination {
        Pagination {
            search: search.into(),
            page,
            page_size: 5,
            total_pages,
            total_matches,
        }
    }

    #[test]
    fn test_render_empty_list() {
        plain();
        assert_eq!(render_record_table(&[], None).trim(), "No records found.");
    }

    #[test]
    fn test_render_empty_search() {
        plain();
        let p = pagination(1, 0, 0, "zzz");
        assert_eq!(
            render_record_table(&[], Some(&p)).trim(),
            "No records match 'zzz'."
        );
    }

    #[test]
    fn test_render_page_past_end() {
        plain();
        let p = pagination(4, 3, 12, "");
        assert_eq!(
            render_record_table(&[], Some(&p)).trim(),
            "Page 4 is past the end (3 pages)."
        );
    }

    #[test]
    fn test_render_rows() {
        plain();
        let rows = vec![
            display(1, "Ann", "a@x.com", "Admin"),
            display(7, "Bob", "b@x.com", "Member"),
        ];
        let output = render_record_table(&rows, None);
        let lines: Vec<&str> = output.lines().collect();

        assert!(lines[0].starts_with("#"));
        assert!(lines[0].contains("Email"));
        assert!(lines[1].starts_with("1.   Ann"));
        assert!(lines[1].contains("a@x.com"));
        assert!(lines[2].starts_with("7.   Bob"));
        assert!(lines[2].contains("Member"));
    }

    #[test]
    fn test_long_names_are_truncated() {
        plain();
        let long = "A".repeat(60);
        let output = render_record_table(&[display(1, &long, "a@x.com", "Admin")], None);
        assert!(output.contains('…'));
        assert!(!output.contains(&long));
    }

    #[test]
    fn test_pager_marks_current_page() {
        plain();
        let pager = render_pager(&pagination(2, 3, 12, ""));
        assert_eq!(pager, "Page 2 of 3 · 12 records   1 [2] 3");
    }

    #[test]
    fn test_pager_hidden_for_single_page() {
        assert!(render_pager(&pagination(1, 1, 4, "")).is_empty());
    }

    #[test]
    fn test_render_details() {
        plain();
        let output = render_record_details(&[display(3, "Ann", "a@x.com", "Admin")]);
        assert!(output.starts_with("3. Ann"));
        assert!(output.contains("email:   a@x.com"));
        assert!(output.contains("role:    Admin"));
        assert!(output.contains("   created: "));
    }

    #[test]
    fn test_render_messages() {
        plain();
        let output = render_messages(&[
            CmdMessage::success("Record added: Ann"),
            CmdMessage::warning("No record matches 9"),
        ]);
        assert_eq!(output, "Record added: Ann\nNo record matches 9\n");
    }

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("short", 10), "short");
        assert_eq!(truncate_to_width("abcdefghij", 5), "abcd…");
    }
}
