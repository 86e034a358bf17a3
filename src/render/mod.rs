pub mod cards;
pub mod escape;
pub mod page;

use crate::fetch::Record;

/// Full rendering pipeline: raw table records → typed models → sorted card
/// fragment → complete document string. Pure; all I/O stays in main.
pub fn render_site(globals: &[Record], sections: &[Record]) -> String {
    let settings = page::GlobalSettings::from_records(globals);
    let records: Vec<cards::SectionRecord> = sections
        .iter()
        .map(cards::SectionRecord::from_record)
        .collect();
    let fragment = cards::render_cards(&records);
    page::assemble_page(&settings, &fragment)
}

// ── Tests ──
