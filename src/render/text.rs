//! Plain-text rendering of the panel view for the terminal.

use std::fmt::Write;

use crate::panel::PanelView;

/// Render the status line followed by one block per card, in view order.
pub fn render(view: &PanelView) -> String {
    let mut out = String::new();
    writeln!(out, "{}", view.status).unwrap();

    for card in &view.cards {
        writeln!(out).unwrap();
        writeln!(out, "{} | {}", card.date, card.source).unwrap();
        writeln!(out, "{}", card.title).unwrap();
        writeln!(out, "Relevância: {} ({})", card.relevance, card.tier).unwrap();
        writeln!(out, "{}", card.link).unwrap();
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NewsItem;
    use crate::panel::Card;

    #[test]
    fn test_render_lists_cards_after_status() {
        let view = PanelView {
            status: "royalties | Últimos 7 dias | Total encontrado: 1".to_string(),
            cards: vec![Card::from(NewsItem {
                date: "01/05/2024".to_string(),
                title: "A".to_string(),
                source: "X".to_string(),
                relevance: 8.0,
                link: "http://a".to_string(),
            })],
        };

        let text = render(&view);
        assert!(text.starts_with("royalties | Últimos 7 dias | Total encontrado: 1\n"));
        assert!(text.contains("01/05/2024 | X"));
        assert!(text.contains("Relevância: 8 (high)"));
        assert!(text.contains("http://a"));
    }

    #[test]
    fn test_render_empty_view_is_just_the_status() {
        let view = PanelView {
            status: "Erro ao buscar notícias.".to_string(),
            cards: vec![],
        };
        assert_eq!(render(&view), "Erro ao buscar notícias.\n");
    }
}
