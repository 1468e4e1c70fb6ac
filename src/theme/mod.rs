use ratatui::style::{Modifier, Style};

pub mod nord;
pub mod palette;

pub use palette::{dim_color, Palette};

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub border: Style,
    pub border_focus: Style,
    pub title: Style,
    pub title_focus: Style,

    pub header_logo: Style,
    pub header_stats: Style,
    pub header: Style,

    pub footer_key: Style,
    pub footer_text: Style,
    pub footer: Style,

    pub status_ready: Style,
    pub status_busy: Style,
    pub status_info: Style,
    pub status_warn: Style,
    pub status_error: Style,

    pub placeholder: Style,
    pub menu: Style,
    pub menu_highlight: Style,
    pub menu_match: Style,

    pub chip: Style,
    pub chip_pending: Style,
    pub chip_focus: Style,
    pub chip_remove: Style,

    pub output_heading: Style,
    pub output_comment: Style,
    pub output_text: Style,

    pub dimmed: Style,
}

impl Theme {
    #[must_use]
    pub fn from_palette(p: &Palette) -> Self {
        Self {
            border: Style::default().fg(p.surface2),
            border_focus: Style::default().fg(p.blue),
            title: Style::default().bg(p.surface0).fg(p.text),
            title_focus: Style::default()
                .bg(p.green)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),

            header_logo: Style::default()
                .bg(p.blue)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            header_stats: Style::default().bg(p.surface0).fg(p.subtext0),
            header: Style::default().bg(p.base).fg(p.text),

            footer_key: Style::default()
                .bg(p.surface0)
                .fg(p.blue)
                .add_modifier(Modifier::BOLD),
            footer_text: Style::default().bg(p.crust).fg(p.subtext0),
            footer: Style::default().bg(p.crust).fg(p.subtext0),

            status_ready: Style::default()
                .bg(p.green)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            status_busy: Style::default()
                .bg(p.mauve)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            status_info: Style::default()
                .bg(p.blue)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            status_warn: Style::default()
                .bg(p.yellow)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            status_error: Style::default()
                .bg(p.red)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),

            placeholder: Style::default().fg(p.overlay0).add_modifier(Modifier::DIM),
            menu: Style::default().bg(p.mantle).fg(p.text),
            menu_highlight: Style::default()
                .bg(p.blue)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            menu_match: Style::default().fg(p.yellow).add_modifier(Modifier::BOLD),

            chip: Style::default().bg(p.surface1).fg(p.text),
            chip_pending: Style::default()
                .bg(dim_color(p.mauve, 0.35))
                .fg(p.subtext0)
                .add_modifier(Modifier::ITALIC),
            chip_focus: Style::default()
                .bg(p.blue)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            chip_remove: Style::default().fg(p.red).add_modifier(Modifier::BOLD),

            output_heading: Style::default().fg(p.peach).add_modifier(Modifier::BOLD),
            output_comment: Style::default().fg(p.teal),
            output_text: Style::default().fg(p.text),

            dimmed: Style::default().fg(p.overlay0).add_modifier(Modifier::DIM),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_palette(&nord::NORD)
    }
}
