use crate::app::state::AppTextArea;
use crate::domain::models::Template;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

pub const INPUT_LABEL: &str = "Choose some templates";
pub const INPUT_PLACEHOLDER: &str = "Start typing...";
pub const NO_MATCHES: &str = "No matching templates";
pub const MAX_MENU_ROWS: usize = 10;

/// Rows the open menu needs, borders included.
#[must_use]
pub fn menu_height(candidates: usize) -> u16 {
    candidates.clamp(1, MAX_MENU_ROWS) as u16 + 2
}

/// First visible row so that `highlight` stays on screen.
#[must_use]
pub fn menu_offset(highlight: Option<usize>, len: usize, visible: usize) -> usize {
    match highlight {
        Some(idx) if visible > 0 && idx >= visible => (idx + 1 - visible).min(len.saturating_sub(visible)),
        _ => 0,
    }
}

pub struct QueryInput<'a, 'b> {
    pub text_area: &'a AppTextArea<'b>,
    pub focused: bool,
    pub theme: &'a Theme,
}

impl Widget for QueryInput<'_, '_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (border, title_style) = if self.focused {
            (self.theme.border_focus, self.theme.title_focus)
        } else {
            (self.theme.border, self.theme.title)
        };
        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(format!(" {INPUT_LABEL} "), title_style),
                Span::raw(" "),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border);

        let inner = block.inner(area);
        block.render(area, buf);
        if inner.width == 0 || inner.height == 0 {
            return;
        }

        if self.text_area.text().is_empty() && !self.focused {
            Paragraph::new(Span::styled(INPUT_PLACEHOLDER, self.theme.placeholder))
                .render(inner, buf);
        } else {
            Widget::render(self.text_area, inner, buf);
        }
    }
}

pub struct CandidateMenu<'a> {
    pub candidates: &'a [&'a Template],
    pub highlight: Option<usize>,
    pub query: &'a str,
    pub theme: &'a Theme,
}

impl Widget for CandidateMenu<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        Clear.render(area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border_focus)
            .style(self.theme.menu);
        let inner = block.inner(area);
        block.render(area, buf);

        if self.candidates.is_empty() {
            Paragraph::new(Span::styled(NO_MATCHES, self.theme.dimmed)).render(inner, buf);
            return;
        }

        let visible = inner.height as usize;
        let offset = menu_offset(self.highlight, self.candidates.len(), visible);
        let prefix_len = self.query.chars().count();

        let lines: Vec<Line> = self
            .candidates
            .iter()
            .enumerate()
            .skip(offset)
            .take(visible)
            .map(|(i, template)| {
                if Some(i) == self.highlight {
                    return Line::from(Span::styled(
                        format!(" {} ", template.name),
                        self.theme.menu_highlight,
                    ))
                    .style(self.theme.menu_highlight);
                }
                let split = template
                    .name
                    .char_indices()
                    .nth(prefix_len)
                    .map_or(template.name.len(), |(idx, _)| idx);
                let (matched, rest) = template.name.split_at(split);
                Line::from(vec![
                    Span::raw(" "),
                    Span::styled(matched, self.theme.menu_match),
                    Span::styled(rest, self.theme.menu),
                ])
            })
            .collect();

        Paragraph::new(lines).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_offset_follows_highlight() {
        assert_eq!(menu_offset(None, 50, 10), 0);
        assert_eq!(menu_offset(Some(3), 50, 10), 0);
        assert_eq!(menu_offset(Some(10), 50, 10), 1);
        assert_eq!(menu_offset(Some(49), 50, 10), 40);
    }

    #[test]
    fn test_menu_height_is_capped() {
        assert_eq!(menu_height(0), 3);
        assert_eq!(menu_height(4), 6);
        assert_eq!(menu_height(400), MAX_MENU_ROWS as u16 + 2);
    }

    #[test]
    fn test_empty_menu_shows_no_matches() {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 30, 3);
        let mut buf = Buffer::empty(area);
        CandidateMenu {
            candidates: &[],
            highlight: None,
            query: "zz",
            theme: &theme,
        }
        .render(area, &mut buf);
        let row: String = (0..area.width).map(|x| buf[(x, 1)].symbol()).collect();
        assert!(row.contains(NO_MATCHES));
    }
}
