use crate::fetch::Record;

use super::escape::escape;

/// Document title when neither the SEO title nor the hero title is set.
pub const DEFAULT_TITLE: &str = "My Site";

/// Page-level settings from the Globals table. All fields optional; absent
/// values render as empty strings.
#[derive(Debug, Clone, Default)]
pub struct GlobalSettings {
    pub hero_title: Option<String>,
    pub hero_subtitle: Option<String>,
    pub footer_text: Option<String>,
    pub seo_title: Option<String>,
    pub seo_description: Option<String>,
}

impl GlobalSettings {
    /// Settings live on the first record of the Globals table; an empty
    /// table yields all-absent settings.
    pub fn from_records(records: &[Record]) -> Self {
        let Some(rec) = records.first() else {
            return Self::default();
        };
        GlobalSettings {
            hero_title: rec.text("heroTitle").map(str::to_string),
            hero_subtitle: rec.text("heroSubtitle").map(str::to_string),
            footer_text: rec.text("footerText").map(str::to_string),
            seo_title: rec.text("seoTitle").map(str::to_string),
            seo_description: rec.text("seoDescription").map(str::to_string),
        }
    }

    // First non-empty wins: an empty (not just absent) SEO title still
    // falls through to the hero title, then the fixed default.
    fn document_title(&self) -> &str {
        [self.seo_title.as_deref(), self.hero_title.as_deref()]
            .into_iter()
            .flatten()
            .find(|t| !t.is_empty())
            .unwrap_or(DEFAULT_TITLE)
    }
}

/// Fill the document template with the settings and the pre-rendered card
/// fragment. Pure string assembly; the fragment is inserted verbatim (it is
/// already escaped internally).
pub fn assemble_page(globals: &GlobalSettings, cards: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <meta name="description" content="{description}">
  <title>{title}</title>
  <link rel="stylesheet" href="styles.css">
</head>
<body>
  <header>
    <h1>{hero_title}</h1>
    <p>{hero_subtitle}</p>
  </header>
  <main>
{cards}
  </main>
  <footer>
    <p>{footer}</p>
  </footer>
</body>
</html>
"#,
        description = escape(globals.seo_description.as_deref()),
        title = escape(Some(globals.document_title())),
        hero_title = escape(globals.hero_title.as_deref()),
        hero_subtitle = escape(globals.hero_subtitle.as_deref()),
        cards = cards,
        footer = escape(globals.footer_text.as_deref()),
    )
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(seo: Option<&str>, hero: Option<&str>) -> GlobalSettings {
        GlobalSettings {
            seo_title: seo.map(str::to_string),
            hero_title: hero.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn seo_title_wins_when_non_empty() {
        let html = assemble_page(&settings(Some("SEO"), Some("Hero")), "");
        assert!(html.contains("<title>SEO</title>"));
    }

    #[test]
    fn empty_seo_title_falls_through_to_hero() {
        let html = assemble_page(&settings(Some(""), Some("Welcome")), "");
        assert!(html.contains("<title>Welcome</title>"));
    }

    #[test]
    fn default_title_when_both_unset_or_empty() {
        let html = assemble_page(&settings(None, None), "");
        assert!(html.contains(&format!("<title>{}</title>", DEFAULT_TITLE)));

        let html = assemble_page(&settings(Some(""), Some("")), "");
        assert!(html.contains(&format!("<title>{}</title>", DEFAULT_TITLE)));
    }

    #[test]
    fn title_is_escaped() {
        let html = assemble_page(&settings(None, Some("Tom & Jerry")), "");
        assert!(html.contains("<title>Tom &amp; Jerry</title>"));
    }

    #[test]
    fn description_is_escaped_into_meta_tag() {
        let globals = GlobalSettings {
            seo_description: Some(r#"Say "hello" <now>"#.to_string()),
            ..Default::default()
        };
        let html = assemble_page(&globals, "");
        assert!(html
            .contains(r#"<meta name="description" content="Say &quot;hello&quot; &lt;now&gt;">"#));
    }

    #[test]
    fn absent_fields_render_empty_not_none() {
        let html = assemble_page(&GlobalSettings::default(), "");
        assert!(html.contains("<h1></h1>"));
        assert!(html.contains(r#"<meta name="description" content="">"#));
        assert!(!html.contains("None"));
    }

    #[test]
    fn cards_fragment_inserted_verbatim() {
        let fragment = "<section class=\"card\">\n  <h2>A</h2>\n  <p>B</p>\n</section>";
        let html = assemble_page(&GlobalSettings::default(), fragment);
        assert!(html.contains(fragment));
    }

    #[test]
    fn fixed_metadata_always_present() {
        let html = assemble_page(&GlobalSettings::default(), "");
        assert!(html.contains(r#"<meta charset="utf-8">"#));
        assert!(html.contains(r#"<meta name="viewport" content="width=device-width, initial-scale=1">"#));
        assert!(html.contains(r#"<link rel="stylesheet" href="styles.css">"#));
    }

    #[test]
    fn from_records_reads_first_record() {
        let records: Vec<crate::fetch::Record> = serde_json::from_value(serde_json::json!([
            {"id": "rec1", "fields": {"heroTitle": "Hi", "footerText": "Bye"}},
            {"id": "rec2", "fields": {"heroTitle": "ignored"}}
        ]))
        .unwrap();
        let globals = GlobalSettings::from_records(&records);
        assert_eq!(globals.hero_title.as_deref(), Some("Hi"));
        assert_eq!(globals.footer_text.as_deref(), Some("Bye"));
        assert_eq!(globals.seo_title, None);

        let empty = GlobalSettings::from_records(&[]);
        assert_eq!(empty.hero_title, None);
    }
}
