use crate::fetch::Record;

use super::escape::escape;

/// One content card. Missing or mistyped fields fall back to defaults at
/// construction; rendering never errors.
#[derive(Debug, Clone, Default)]
pub struct SectionRecord {
    pub order: i64,
    pub title: Option<String>,
    pub body: Option<String>,
    pub highlight: bool,
    pub bullets: [Option<String>; 3],
}

impl SectionRecord {
    pub fn from_record(rec: &Record) -> Self {
        SectionRecord {
            order: rec.number("order").unwrap_or(0),
            title: rec.text("title").map(str::to_string),
            body: rec.text("body").map(str::to_string),
            highlight: rec.boolean("highlight"),
            bullets: [
                rec.text("bullet1").map(str::to_string),
                rec.text("bullet2").map(str::to_string),
                rec.text("bullet3").map(str::to_string),
            ],
        }
    }
}

/// Render all cards, ascending by `order` (stable: input sequence breaks
/// ties), joined with a newline. Every input record produces a card.
pub fn render_cards(records: &[SectionRecord]) -> String {
    let mut sorted: Vec<&SectionRecord> = records.iter().collect();
    sorted.sort_by_key(|r| r.order);
    sorted
        .iter()
        .map(|r| render_card(r))
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_card(rec: &SectionRecord) -> String {
    let class = if rec.highlight { "card highlight" } else { "card" };

    // Non-empty bullets in slot order; the <ul> is omitted entirely when
    // all slots are empty or absent.
    let items: Vec<String> = rec
        .bullets
        .iter()
        .filter_map(|b| b.as_deref())
        .filter(|b| !b.is_empty())
        .map(|b| format!("    <li>{}</li>", escape(Some(b))))
        .collect();
    let list = if items.is_empty() {
        String::new()
    } else {
        format!("\n  <ul>\n{}\n  </ul>", items.join("\n"))
    };

    format!(
        "<section class=\"{}\">\n  <h2>{}</h2>\n  <p>{}</p>{}\n</section>",
        class,
        escape(rec.title.as_deref()),
        escape(rec.body.as_deref()),
        list
    )
}

// ── Tests ──
