use crate::app::output::OutputContent;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

pub struct OutputView<'a> {
    pub content: &'a OutputContent,
    pub scroll: u16,
    pub focused: bool,
    pub spinner: &'a str,
    pub theme: &'a Theme,
}

impl OutputView<'_> {
    fn lines(&self) -> Vec<Line<'_>> {
        match self.content {
            OutputContent::Loading => vec![Line::from(vec![
                Span::styled(self.spinner, self.theme.status_busy),
                Span::raw(" "),
                Span::styled(self.content.text(), self.theme.placeholder),
            ])],
            OutputContent::Placeholder => {
                vec![Line::from(Span::styled(self.content.text(), self.theme.placeholder))]
            }
            OutputContent::Templates(text) => text
                .lines()
                .map(|line| {
                    let style = if line.starts_with("##### ") {
                        self.theme.output_heading
                    } else if line.starts_with('#') {
                        self.theme.output_comment
                    } else {
                        self.theme.output_text
                    };
                    Line::from(Span::styled(line, style))
                })
                .collect(),
        }
    }
}

impl Widget for OutputView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (border, title_style) = if self.focused {
            (self.theme.border_focus, self.theme.title_focus)
        } else {
            (self.theme.border, self.theme.title)
        };
        let mut block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(" .gitignore ", title_style),
                Span::raw(" "),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border);

        if matches!(self.content, OutputContent::Templates(_)) {
            block = block.title_bottom(Line::from(vec![
                Span::raw(" "),
                Span::styled("j/k", self.theme.footer_key),
                Span::raw(": scroll "),
                Span::styled("y", self.theme.footer_key),
                Span::raw(": copy "),
            ]));
        }

        let lines = self.lines();
        let max_scroll = u16::try_from(lines.len().saturating_sub(1)).unwrap_or(u16::MAX);
        Paragraph::new(lines)
            .block(block)
            .scroll((self.scroll.min(max_scroll), 0))
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(view: OutputView, area: Rect) -> Vec<String> {
        let mut buf = Buffer::empty(area);
        view.render(area, &mut buf);
        (0..area.height)
            .map(|y| (0..area.width).map(|x| buf[(x, y)].symbol()).collect())
            .collect()
    }

    #[test]
    fn test_headings_are_styled() {
        let theme = Theme::default();
        let content = OutputContent::Templates("\n\n##### Node\n\nnode_modules/".to_string());
        let area = Rect::new(0, 0, 30, 8);
        let mut buf = Buffer::empty(area);
        OutputView {
            content: &content,
            scroll: 0,
            focused: false,
            spinner: "",
            theme: &theme,
        }
        .render(area, &mut buf);
        assert_eq!(buf[(1, 3)].symbol(), "#");
        assert_eq!(buf[(1, 3)].fg, theme.output_heading.fg.unwrap());
    }

    #[test]
    fn test_scroll_skips_lines() {
        let theme = Theme::default();
        let content = OutputContent::Templates("a\nb\nc".to_string());
        let rendered = rows(
            OutputView {
                content: &content,
                scroll: 2,
                focused: true,
                spinner: "",
                theme: &theme,
            },
            Rect::new(0, 0, 10, 4),
        );
        assert!(rendered[1].starts_with("│c"));
    }

    #[test]
    fn test_stale_scroll_keeps_loading_visible() {
        let theme = Theme::default();
        let rendered = rows(
            OutputView {
                content: &OutputContent::Loading,
                scroll: 40,
                focused: false,
                spinner: "*",
                theme: &theme,
            },
            Rect::new(0, 0, 30, 3),
        );
        assert!(rendered[1].contains("Loading..."));
    }

    #[test]
    fn test_placeholder_text() {
        let theme = Theme::default();
        let rendered = rows(
            OutputView {
                content: &OutputContent::Placeholder,
                scroll: 0,
                focused: false,
                spinner: "",
                theme: &theme,
            },
            Rect::new(0, 0, 30, 3),
        );
        assert!(rendered[1].contains("Choose a template"));
    }
}
