//! Clickable UI components.
//!
//! Each component renders and registers its own click targets, so the rows a
//! player sees and the rows that respond to taps cannot drift apart.

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::style::{Color, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Paragraph};
use ratzilla::ratatui::Frame;

use crate::clicker::actions::ClickAction;
use crate::input::ClickState;

// ── TabBar ─────────────────────────────────────────────────────

/// A single-row tab bar.
///
/// ```ignore
/// TabBar::new(" │ ")
///     .tab("Game", style, ClickAction::SelectTab(Tab::Game))
///     .render(f, area, &mut cs);
/// ```
pub struct TabBar<'a> {
    tabs: Vec<(String, Style, ClickAction)>,
    separator: &'a str,
    block: Option<Block<'a>>,
}

impl<'a> TabBar<'a> {
    pub fn new(separator: &'a str) -> Self {
        Self {
            tabs: Vec::new(),
            separator,
            block: None,
        }
    }

    pub fn tab(mut self, label: impl Into<String>, style: Style, action: ClickAction) -> Self {
        self.tabs.push((label.into(), style, action));
        self
    }

    /// Wrap the bar in a block; targets are placed inside its borders.
    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }

    pub fn render(self, f: &mut Frame, area: Rect, cs: &mut ClickState) {
        let sep_width = Line::from(self.separator).width() as u16;
        let mut spans: Vec<Span> = Vec::new();
        let mut widths: Vec<(u16, ClickAction)> = Vec::new();

        for (i, (label, style, action)) in self.tabs.into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(self.separator, Style::default().fg(Color::DarkGray)));
            }
            let padded = format!(" {} ", label);
            widths.push((Line::from(padded.as_str()).width() as u16, action));
            spans.push(Span::styled(padded, style));
        }

        let inner = match &self.block {
            Some(block) => block.inner(area),
            None => area,
        };
        let paragraph = match self.block {
            Some(block) => Paragraph::new(Line::from(spans)).block(block),
            None => Paragraph::new(Line::from(spans)),
        };
        f.render_widget(paragraph, area);

        // Full outer height keeps taps on the border rows working.
        cs.register_tab_targets(&widths, sep_width, inner.x, area.y, inner.width, area.height.max(1));
    }
}

// ── ClickableList ──────────────────────────────────────────────

/// Lines paired with the actions of the rows that should respond to taps.
///
/// ```ignore
/// let mut cl = ClickableList::new();
/// cl.push(Line::from("Header"));
/// cl.push_clickable(Line::from(" [1] Cursor"), ClickAction::Buy(0));
/// cl.register_targets(area, &mut cs, 1, 1);
/// f.render_widget(Paragraph::new(cl.into_lines()).block(block), area);
/// ```
pub struct ClickableList<'a> {
    lines: Vec<Line<'a>>,
    /// `(line_index, action)` pairs.
    actions: Vec<(u16, ClickAction)>,
}

impl<'a> ClickableList<'a> {
    pub fn new() -> Self {
        Self {
            lines: Vec::new(),
            actions: Vec::new(),
        }
    }

    /// Add a non-clickable line.
    pub fn push(&mut self, line: Line<'a>) {
        self.lines.push(line);
    }

    /// Add a line that triggers `action` when its row is tapped.
    pub fn push_clickable(&mut self, line: Line<'a>, action: ClickAction) {
        self.actions.push((self.lines.len() as u16, action));
        self.lines.push(line);
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn into_lines(self) -> Vec<Line<'a>> {
        self.lines
    }

    /// Register one row target per clickable line, one line per row.
    ///
    /// `top_offset` / `bottom_offset` are the rows taken by borders. Lines
    /// that fall below the visible area get no target.
    pub fn register_targets(&self, area: Rect, cs: &mut ClickState, top_offset: u16, bottom_offset: u16) {
        let content_y = area.y + top_offset;
        let content_end = area.y + area.height.saturating_sub(bottom_offset);
        for &(line_idx, action) in &self.actions {
            let row = content_y + line_idx;
            if row < content_end {
                cs.add_row_target(area, row, action);
            }
        }
    }
}

impl Default for ClickableList<'_> {
    fn default() -> Self {
        Self::new()
    }
}

/// Text progress bar: `ratio` of `width` cells filled.
pub fn progress_bar(ratio: f64, width: usize) -> String {
    let filled = ((ratio.clamp(0.0, 1.0) * width as f64).round() as usize).min(width);
    "█".repeat(filled) + &"░".repeat(width - filled)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clickable_list_registers_only_clickable_rows() {
        let mut cl = ClickableList::new();
        cl.push(Line::from("header"));
        cl.push_clickable(Line::from("item 0"), ClickAction::Buy(0));
        cl.push_clickable(Line::from("item 1"), ClickAction::Buy(1));
        cl.push(Line::from("footer"));
        assert_eq!(cl.len(), 4);

        // Borders::ALL → one row above and below the content
        let area = Rect::new(0, 5, 80, 10);
        let mut cs = ClickState::new();
        cl.register_targets(area, &mut cs, 1, 1);

        assert_eq!(cs.targets.len(), 2);
        assert_eq!(cs.hit_test(3, 6), None);
        assert_eq!(cs.hit_test(3, 7), Some(ClickAction::Buy(0)));
        assert_eq!(cs.hit_test(3, 8), Some(ClickAction::Buy(1)));
    }

    #[test]
    fn clickable_list_clips_to_area() {
        let mut cl = ClickableList::new();
        for i in 0..10 {
            cl.push_clickable(Line::from(format!("row {}", i)), ClickAction::Buy(i));
        }
        let area = Rect::new(0, 0, 40, 5); // 3 content rows
        let mut cs = ClickState::new();
        cl.register_targets(area, &mut cs, 1, 1);
        assert_eq!(cs.targets.len(), 3);
        assert_eq!(cs.hit_test(0, 3), Some(ClickAction::Buy(2)));
    }

    #[test]
    fn progress_bar_fills_proportionally() {
        assert_eq!(progress_bar(0.0, 4), "░░░░");
        assert_eq!(progress_bar(0.5, 4), "██░░");
        assert_eq!(progress_bar(1.0, 4), "████");
        assert_eq!(progress_bar(3.0, 4), "████");
    }
}
