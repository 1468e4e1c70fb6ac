use crate::app::state::{AppState, CatalogStatus};
use crate::theme::Theme;
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

pub const FETCHING_TEXT: &str = "Fetching templates...";
pub const EMPTY_CATALOG_TEXT: &str = "No templates available";

const LOGO: [&str; 5] = [
    r"  __ _  __ _  __ _ ___ ",
    r" / _` |/ _` |/ _` / __|",
    r"| (_| | (_| | (_| \__ \",
    r" \__, |\__,_|\__,_|___/",
    r" |___/                 ",
];

/// Full-screen view shown while there is no catalog to pick from.
pub struct Splash<'a> {
    pub app_state: &'a AppState<'a>,
    pub theme: &'a Theme,
}

impl Widget for Splash<'_> {
    fn render(self, area: Rect, buf: &mut ratatui::buffer::Buffer) {
        let mut lines: Vec<Line> = LOGO
            .iter()
            .map(|l| Line::from(Span::styled(*l, self.theme.header_logo)))
            .collect();
        lines.push(Line::from(""));

        match &self.app_state.catalog_status {
            CatalogStatus::Loading => lines.push(Line::from(vec![
                Span::styled(self.app_state.spinner(), self.theme.status_busy),
                Span::raw(" "),
                Span::raw(FETCHING_TEXT),
            ])),
            CatalogStatus::Failed(err) => {
                lines.push(Line::from(Span::styled(
                    "Could not load the template list.",
                    self.theme.status_error,
                )));
                lines.push(Line::from(""));
                lines.push(Line::from(Span::styled(err.as_str(), self.theme.dimmed)));
            }
            CatalogStatus::Loaded => lines.push(Line::from(Span::styled(
                EMPTY_CATALOG_TEXT,
                self.theme.status_warn,
            ))),
        }

        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::raw("Press "),
            Span::styled("q", self.theme.footer_key),
            Span::raw(" or "),
            Span::styled("Esc", self.theme.footer_key),
            Span::raw(" to quit"),
        ]));

        let height = lines.len() as u16 + 2;
        let centered_area = Rect {
            x: area.x,
            y: (area.y + area.height / 2)
                .saturating_sub(height / 2)
                .max(area.y),
            width: area.width,
            height: height.min(area.height),
        };

        if centered_area.width > 0 && centered_area.height > 0 {
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .render(centered_area, buf);
        }
    }
}
