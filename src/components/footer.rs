use crate::app::state::{AppState, Focus};
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub struct FooterItem {
    pub key: &'static str,
    pub desc: &'static str,
}

pub struct FooterGroup {
    pub name: &'static str,
    pub items: Vec<FooterItem>,
}

const fn item(key: &'static str, desc: &'static str) -> FooterItem {
    FooterItem { key, desc }
}

pub struct Footer<'a> {
    pub state: &'a AppState<'a>,
    pub theme: &'a Theme,
}

impl Footer<'_> {
    fn get_groups(&self) -> Vec<FooterGroup> {
        let state = self.state;
        if state.last_error.is_some() {
            return vec![FooterGroup {
                name: "ERROR",
                items: vec![item("Esc", "dismiss")],
            }];
        }
        if state.show_help {
            return vec![FooterGroup {
                name: "HELP",
                items: vec![item("q/Esc/?", "close")],
            }];
        }
        if !state.shows_controller() {
            return vec![FooterGroup {
                name: "APP",
                items: vec![item("q", "quit")],
            }];
        }

        let mut groups = match state.focus {
            Focus::Input => vec![FooterGroup {
                name: "SEARCH",
                items: vec![
                    item("\u{2191}/\u{2193}", "move"),
                    item("ENTER", "add"),
                    item("Esc", "close"),
                ],
            }],
            Focus::Chips => vec![FooterGroup {
                name: "CHIPS",
                items: vec![item("h/l", "move"), item("x", "remove"), item("/", "search")],
            }],
            Focus::Output => vec![FooterGroup {
                name: "OUTPUT",
                items: vec![item("j/k", "scroll"), item("y", "copy"), item("/", "search")],
            }],
        };
        groups.push(FooterGroup {
            name: "APP",
            items: vec![
                item("Tab", "focus"),
                item("F1", "help"),
                item("Ctrl-c", "quit"),
            ],
        });
        groups
    }
}

impl Widget for Footer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = self.theme;
        let state = self.state;

        let status_span = if let Some(err) = &state.last_error {
            Span::styled(format!("  ERROR: {}  ", err.message), theme.status_error)
        } else if state.is_loading() {
            Span::styled(
                format!("  {} LOADING {}  ", state.spinner(), state.pending.len()),
                theme.status_busy,
            )
        } else if let Some(msg) = &state.status_message {
            Span::styled(format!("  {msg}  "), theme.status_info)
        } else {
            Span::styled("  READY  ", theme.status_ready)
        };

        let mut spans = vec![status_span, Span::raw("  ")];

        let available_width = area.width.saturating_sub(4) as usize;
        let mut current_width = spans.iter().map(Span::width).sum::<usize>();

        for group in self.get_groups() {
            let Some(first) = group.items.first() else {
                continue;
            };
            let first_item_width = first.key.len() + first.desc.len() + 4;
            if current_width + first_item_width > available_width {
                break;
            }

            if area.width > 100 {
                let label = Span::styled(format!("{}: ", group.name), theme.footer_text);
                if current_width + label.width() + first_item_width < available_width {
                    current_width += label.width();
                    spans.push(label);
                }
            }

            for item in group.items {
                let key_str = format!(" {} ", item.key);
                let desc_str = format!(" {} ", item.desc);
                let item_width = Span::raw(key_str.as_str()).width() + desc_str.len();
                if current_width + item_width + 1 > available_width {
                    break;
                }
                spans.push(Span::styled(key_str, theme.footer_key));
                spans.push(Span::styled(desc_str, theme.footer_text));
                spans.push(Span::raw(" "));
                current_width += item_width + 1;
            }
            spans.push(Span::raw("  "));
            current_width += 2;
        }

        Paragraph::new(Line::from(spans))
            .style(theme.footer)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::{ErrorSeverity, ErrorState};

    fn render_line(state: &AppState) -> String {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 120, 1);
        let mut buf = Buffer::empty(area);
        Footer {
            state,
            theme: &theme,
        }
        .render(area, &mut buf);
        (0..area.width).map(|x| buf[(x, 0)].symbol()).collect()
    }

    #[test]
    fn test_ready_when_idle() {
        let state = AppState::default();
        assert!(render_line(&state).contains("READY"));
    }

    #[test]
    fn test_error_replaces_hints() {
        let state = AppState {
            last_error: Some(ErrorState::new("boom".to_string(), ErrorSeverity::Error)),
            ..Default::default()
        };
        let line = render_line(&state);
        assert!(line.contains("ERROR: boom"));
        assert!(line.contains("dismiss"));
    }
}
