use crate::app::state::Chip;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

const REMOVE_GLYPH: &str = "\u{2715} ";
const EMPTY_HINT: &str = "Nothing selected";

/// Screen cells of one chip: the whole chip and its remove button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChipArea {
    pub area: Rect,
    pub remove: Rect,
}

#[must_use]
pub fn chip_label(chip: &Chip, spinner: &str) -> String {
    if chip.pending {
        format!(" {spinner} {} ", chip.name)
    } else {
        format!(" {} ", chip.name)
    }
}

fn chip_width(label: &str) -> u16 {
    let width = Span::raw(label).width() + Span::raw(REMOVE_GLYPH).width();
    u16::try_from(width).unwrap_or(u16::MAX)
}

/// Flows chips left to right, wrapping at the right edge. Chips that do not
/// fit vertically are left out.
#[must_use]
pub fn chip_layout(labels: &[String], area: Rect) -> Vec<ChipArea> {
    let mut areas = Vec::with_capacity(labels.len());
    let (mut x, mut y) = (area.x, area.y);

    for label in labels {
        let width = chip_width(label).min(area.width);
        if x > area.x && x.saturating_add(width) > area.right() {
            x = area.x;
            y += 1;
        }
        if y >= area.bottom() {
            break;
        }
        let chip = Rect::new(x, y, width, 1);
        let remove_width = (REMOVE_GLYPH.chars().count() as u16).min(width);
        areas.push(ChipArea {
            area: chip,
            remove: Rect::new(chip.right() - remove_width, y, remove_width, 1),
        });
        x = x.saturating_add(width + 1);
    }
    areas
}

/// Rows needed to show every chip in `width` columns.
#[must_use]
pub fn chip_rows(labels: &[String], width: u16) -> u16 {
    if labels.is_empty() || width == 0 {
        return 1;
    }
    // Every chip takes at most one row
    let tall = Rect::new(0, 0, width, u16::try_from(labels.len()).unwrap_or(u16::MAX));
    chip_layout(labels, tall)
        .last()
        .map_or(1, |last| last.area.y + 1)
}

pub struct ChipRow<'a> {
    pub chips: &'a [Chip<'a>],
    pub labels: &'a [String],
    pub cursor: Option<usize>,
    pub focused: bool,
    pub theme: &'a Theme,
}

impl Widget for ChipRow<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (border, title_style) = if self.focused {
            (self.theme.border_focus, self.theme.title_focus)
        } else {
            (self.theme.border, self.theme.title)
        };
        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(format!(" SELECTED ({}) ", self.chips.len()), title_style),
                Span::raw(" "),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border);
        let inner = block.inner(area);
        block.render(area, buf);

        if self.chips.is_empty() {
            Paragraph::new(Span::styled(EMPTY_HINT, self.theme.dimmed)).render(inner, buf);
            return;
        }

        let areas = chip_layout(self.labels, inner);
        for (i, (chip, cells)) in self.chips.iter().zip(&areas).enumerate() {
            let style = if self.focused && self.cursor == Some(i) {
                self.theme.chip_focus
            } else if chip.pending {
                self.theme.chip_pending
            } else {
                self.theme.chip
            };
            let line = Line::from(vec![
                Span::styled(self.labels[i].as_str(), style),
                Span::styled(REMOVE_GLYPH, style.patch(self.theme.chip_remove)),
            ]);
            Paragraph::new(line).render(cells.area, buf);
        }
    }
}
