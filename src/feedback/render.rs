use chrono::{Local, TimeZone};

use crate::config::Messages;
use crate::feedback::models::FeedbackRecord;
use crate::feedback::repository::latest;

/// Escapes text for insertion into HTML element content or attribute values.
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Falls back to the stored text when it is not a valid timestamp.
pub fn format_timestamp<Tz: TimeZone>(record: &FeedbackRecord, tz: &Tz, messages: &Messages) -> String
where
    Tz::Offset: std::fmt::Display,
{
    match record.created_at() {
        Some(at) => at.with_timezone(tz).format(messages.timestamp_format).to_string(),
        None => record.created_at.clone(),
    }
}

fn render_item<Tz: TimeZone>(record: &FeedbackRecord, tz: &Tz, messages: &Messages) -> String
where
    Tz::Offset: std::fmt::Display,
{
    format!(
        r#"<div class="item"><strong>{}</strong> — <small>{}: {} • {}</small><div class="item-message">{}</div></div>"#,
        escape_html(&record.name),
        messages.rating_label,
        escape_html(&record.rating),
        escape_html(&format_timestamp(record, tz, messages)),
        escape_html(&record.message),
    )
}

pub fn render_feedback_list_in<Tz: TimeZone>(
    records: &[FeedbackRecord],
    limit: usize,
    tz: &Tz,
    messages: &Messages,
) -> String
where
    Tz::Offset: std::fmt::Display,
{
    if records.is_empty() {
        return format!(r#"<div class="item">{}</div>"#, escape_html(messages.empty_list));
    }
    latest(records, limit)
        .map(|record| render_item(record, tz, messages))
        .collect()
}

/// Markup for the feedback list, timestamps in the browser's local time.
pub fn render_feedback_list(records: &[FeedbackRecord], limit: usize, messages: &Messages) -> String {
    render_feedback_list_in(records, limit, &Local, messages)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Locale;
    use chrono::Utc;

    fn record(name: &str, message: &str, created_at: &str) -> FeedbackRecord {
        FeedbackRecord {
            name: name.to_string(),
            email: String::new(),
            message: message.to_string(),
            rating: "5".to_string(),
            created_at: created_at.to_string(),
        }
    }

    #[test]
    fn escapes_all_special_characters() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
        assert_eq!(escape_html("plain text"), "plain text");
    }

    #[test]
    fn empty_log_renders_empty_state() {
        let messages = Locale::Indonesian.messages();
        assert_eq!(
            render_feedback_list_in(&[], 5, &Utc, &messages),
            r#"<div class="item">Belum ada feedback.</div>"#
        );
    }

    #[test]
    fn renders_single_item() {
        let messages = Locale::Indonesian.messages();
        let html = render_feedback_list_in(
            &[record("Ana", "Great trip", "2026-10-19T08:30:05.000Z")],
            5,
            &Utc,
            &messages,
        );
        assert_eq!(
            html,
            r#"<div class="item"><strong>Ana</strong> — <small>Rating: 5 • 19/10/2026, 08.30.05</small><div class="item-message">Great trip</div></div>"#
        );
    }

    #[test]
    fn script_in_message_is_escaped() {
        let messages = Locale::Indonesian.messages();
        let html = render_feedback_list_in(
            &[record("<b>Eve</b>", "<script>alert(1)</script>", "2026-10-19T08:30:05.000Z")],
            5,
            &Utc,
            &messages,
        );
        assert!(!html.contains("<script>"));
        assert!(!html.contains("<b>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(html.contains("&lt;b&gt;Eve&lt;/b&gt;"));
    }

    #[test]
    fn shows_last_five_newest_first() {
        let messages = Locale::English.messages();
        let records: Vec<_> = (1..=7)
            .map(|i| record(&format!("user{}", i), "hi", &format!("2026-10-1{}T10:00:00.000Z", i)))
            .collect();

        let html = render_feedback_list_in(&records, 5, &Utc, &messages);

        assert_eq!(html.matches(r#"<div class="item">"#).count(), 5);
        assert!(!html.contains("user1<") && !html.contains("user2<"));
        let positions: Vec<_> = ["user7", "user6", "user5", "user4", "user3"]
            .iter()
            .map(|name| html.find(&format!("<strong>{}</strong>", name)).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(html.contains("10/17/2026, 10:00:00 AM"));
    }

    #[test]
    fn invalid_timestamp_shows_raw_value() {
        let messages = Locale::Indonesian.messages();
        let html = render_feedback_list_in(&[record("Ana", "hi", "yesterday <3")], 5, &Utc, &messages);
        assert!(html.contains("• yesterday &lt;3</small>"));
    }
}
