//! Shared input handling: coordinate conversion, click targets, and event types.

use ratzilla::ratatui::layout::Rect;

use crate::clicker::actions::ClickAction;

/// Input normalized from keyboard, mouse, and touch sources.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// A key press from keyboard.
    Key(char),
    /// A click/tap on a registered target.
    Click(ClickAction),
}

/// A region on screen that triggers an action when tapped/clicked.
#[derive(Debug, Clone)]
pub struct ClickTarget {
    /// Hit region in terminal cell coordinates.
    pub rect: Rect,
    pub action: ClickAction,
}

/// Shared state between the render loop and the click handler.
///
/// Targets are rebuilt on every frame; the click handler only reads them.
pub struct ClickState {
    pub targets: Vec<ClickTarget>,
    pub terminal_cols: u16,
    pub terminal_rows: u16,
}

impl ClickState {
    pub fn new() -> Self {
        Self {
            targets: Vec::new(),
            terminal_cols: 0,
            terminal_rows: 0,
        }
    }

    pub fn clear_targets(&mut self) {
        self.targets.clear();
    }

    pub fn add_click_target(&mut self, rect: Rect, action: ClickAction) {
        self.targets.push(ClickTarget { rect, action });
    }

    /// Register a full-row target at `row`, clipped to `area`.
    pub fn add_row_target(&mut self, area: Rect, row: u16, action: ClickAction) {
        if row >= area.y && row < area.y + area.height {
            self.add_click_target(Rect::new(area.x, row, area.width, 1), action);
        }
    }

    /// Register targets for a horizontal tab bar.
    ///
    /// `tab_widths` holds `(display_width, action)` per padded label. Each
    /// target covers its label plus half of each neighbouring separator; the
    /// first and last tabs stretch to the edges of `total_width`.
    pub fn register_tab_targets(
        &mut self,
        tab_widths: &[(u16, ClickAction)],
        separator_width: u16,
        x: u16,
        y: u16,
        total_width: u16,
        height: u16,
    ) {
        if tab_widths.is_empty() || total_width == 0 {
            return;
        }
        let half_sep = separator_width / 2;
        let last = tab_widths.len() - 1;
        let mut start: u16 = 0;
        for (i, &(w, action)) in tab_widths.iter().enumerate() {
            let left = if i == 0 { 0 } else { start.saturating_sub(separator_width - half_sep) };
            let right = if i == last { total_width } else { start + w + half_sep };
            let width = right.min(total_width).saturating_sub(left);
            if width > 0 {
                self.add_click_target(Rect::new(x + left, y, width, height), action);
            }
            start += w + separator_width;
        }
    }

    /// Hit-test a cell against all targets. Later registrations are drawn on
    /// top, so they win when targets overlap.
    pub fn hit_test(&self, col: u16, row: u16) -> Option<ClickAction> {
        self.targets.iter().rev().find_map(|t| {
            let r = &t.rect;
            let inside = col >= r.x && col < r.x + r.width && row >= r.y && row < r.y + r.height;
            inside.then_some(t.action)
        })
    }
}

impl Default for ClickState {
    fn default() -> Self {
        Self::new()
    }
}

/// Whether a screen width (in columns) should use the narrow layout.
pub fn is_narrow_layout(width: u16) -> bool {
    width < 80
}

/// Convert a pixel offset along one axis to a cell index.
///
/// `offset` is relative to the grid container's edge, `extent` is the
/// container's pixel size along that axis, `cells` the cell count.
/// Returns `None` outside the grid or for degenerate inputs.
pub fn pixel_to_cell(offset: f64, extent: f64, cells: u16) -> Option<u16> {
    if extent <= 0.0 || cells == 0 || offset < 0.0 {
        return None;
    }
    let cell = (offset / (extent / cells as f64)) as u16;
    (cell < cells).then_some(cell)
}
