use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Cell, Clear, Row, Table, Widget},
};

use super::helpers::{centered_rect, draw_drop_shadow};

const SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Search",
        &[
            (" type", "Filter templates by prefix"),
            (" \u{2193} / \u{2191}", "Move the highlight"),
            (" Enter", "Add the highlighted template"),
            (" Esc", "Close the list, then clear the query"),
        ],
    ),
    (
        "Selected",
        &[
            (" \u{2190} / \u{2192}", "Move between chips"),
            (" x / Del", "Remove the chip"),
        ],
    ),
    (
        "Output",
        &[
            (" j / k", "Scroll"),
            (" PgDn / PgUp", "Scroll a page"),
            (" y / Ctrl-y", "Copy to clipboard"),
        ],
    ),
    (
        "General",
        &[
            (" Tab / S-Tab", "Cycle focus"),
            (" ? / F1", "Toggle this help"),
            (" q / Ctrl-c", "Quit"),
        ],
    ),
];

pub struct HelpModal<'a> {
    pub theme: &'a Theme,
}

impl Widget for HelpModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let help_area = centered_rect(60, 80, area);
        if help_area.width == 0 || help_area.height == 0 {
            return;
        }
        draw_drop_shadow(buf, help_area, area);
        Clear.render(help_area, buf);

        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(" HELP - KEYBINDINGS ", self.theme.title_focus),
                Span::raw(" "),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border_focus);

        let mut rows = Vec::new();
        for (i, (section, bindings)) in SECTIONS.iter().enumerate() {
            if i > 0 {
                rows.push(Row::new(vec![Cell::from(""), Cell::from("")]));
            }
            rows.push(Row::new(vec![
                Cell::from(Span::styled(*section, self.theme.title)),
                Cell::from(""),
            ]));
            for (keys, desc) in *bindings {
                rows.push(Row::new(vec![
                    Cell::from(Span::styled(*keys, self.theme.footer_key)),
                    Cell::from(Span::styled(*desc, self.theme.output_text)),
                ]));
            }
        }

        Table::new(rows, [Constraint::Length(16), Constraint::Min(10)])
            .block(block)
            .column_spacing(2)
            .render(help_area, buf);
    }
}
