use crate::app::state::AppState;
use crate::theme::Theme;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

const SEP_RIGHT: &str = "\u{e0b0}";

pub struct Header<'a> {
    pub state: &'a AppState<'a>,
    pub theme: &'a Theme,
}

impl Header<'_> {
    fn stats_text(&self) -> String {
        let state = self.state;
        let mut text = format!(
            " {} templates \u{b7} {} selected ",
            state.catalog.len(),
            state.selections.len()
        );
        if state.is_loading() {
            text.push_str(&format!("\u{b7} {} {} downloading ", state.spinner(), state.pending.len()));
        }
        text
    }
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let logo_bg = self.theme.header_logo.bg.unwrap_or(Color::Reset);
        let stats_bg = self.theme.header_stats.bg.unwrap_or(Color::Reset);
        let base_bg = self.theme.header.bg.unwrap_or(Color::Reset);

        let spans = vec![
            Span::styled(" GAAS ", self.theme.header_logo),
            Span::styled(SEP_RIGHT, Style::default().fg(logo_bg).bg(stats_bg)),
            Span::styled(self.stats_text(), self.theme.header_stats),
            Span::styled(SEP_RIGHT, Style::default().fg(stats_bg).bg(base_bg)),
        ];

        Paragraph::new(Line::from(spans))
            .style(self.theme.header)
            .render(area, buf);
    }
}
