//! Escaped HTML rendering of the panel view.
//!
//! Every interpolated field goes through `quick_xml`'s escaping, including
//! the link's `href`, so a hostile title or source in the feed cannot inject
//! markup. The outbound link opens a new browsing context and carries
//! `rel="noopener noreferrer"` to cut the opener handle and the referrer.

use std::fmt::Write;

use quick_xml::escape::escape;

use crate::panel::{Card, PanelView};

/// Render the panel as an HTML fragment: the status area followed by the
/// results container with one card per item, in view order.
pub fn render_fragment(view: &PanelView) -> String {
    let mut html = String::new();
    writeln!(html, r#"<div id="info">{}</div>"#, escape(&view.status)).unwrap();
    writeln!(html, r#"<div id="resultado">"#).unwrap();
    for card in &view.cards {
        push_card(&mut html, card);
    }
    writeln!(html, "</div>").unwrap();
    html
}

/// Render the panel as a complete standalone page with the card styles
/// inlined, suitable for writing straight to a file.
pub fn render_page(view: &PanelView) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="pt-BR">
<head>
<meta charset="utf-8">
<title>Notícias E&amp;P</title>
<style>
body {{ font-family: sans-serif; margin: 2rem; }}
.card {{ border: 1px solid #ccc; border-left: 6px solid #ccc; border-radius: 4px; padding: 0.75rem; margin: 0.5rem 0; }}
.card-high {{ border-left-color: #c0392b; }}
.card-medium {{ border-left-color: #e67e22; }}
.card-date {{ color: #666; font-size: 0.85rem; }}
.card-title {{ font-weight: bold; margin: 0.25rem 0; }}
.card-source {{ font-style: italic; }}
.card-relevancia {{ font-size: 0.85rem; }}
</style>
</head>
<body>
{}</body>
</html>
"#,
        render_fragment(view)
    )
}

fn push_card(html: &mut String, card: &Card) {
    let class = match card.tier.css_class() {
        Some(tier_class) => format!("card {tier_class}"),
        None => "card".to_string(),
    };
    writeln!(html, r#"  <div class="{class}">"#).unwrap();
    writeln!(html, r#"    <div class="card-date">{}</div>"#, escape(&card.date)).unwrap();
    writeln!(html, r#"    <div class="card-title">{}</div>"#, escape(&card.title)).unwrap();
    writeln!(html, r#"    <div class="card-source">{}</div>"#, escape(&card.source)).unwrap();
    writeln!(
        html,
        r#"    <div class="card-relevancia">Relevância: {}</div>"#,
        card.relevance
    )
    .unwrap();
    writeln!(
        html,
        r#"    <a href="{}" target="_blank" rel="noopener noreferrer">Ler matéria completa →</a>"#,
        escape(&card.link)
    )
    .unwrap();
    writeln!(html, "  </div>").unwrap();
}
