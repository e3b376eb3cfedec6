//! Clicker rendering: header, tab bar, one panel per tab, and overlays for
//! floating numbers and toasts. Reads only the engine snapshot.

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratzilla::ratatui::Frame;

use crate::input::{is_narrow_layout, ClickState};
use crate::progression::{AchievementKind, Snapshot};
use crate::widgets::{progress_bar, ClickableList, TabBar};

use super::actions::{ClickAction, Tab};
use super::logic::format_number;
use super::state::{ClickerState, ToastKind};

const COOKIE_ART: [&str; 5] = [
    "╭─────────╮",
    "│ ●   ●  ●│",
    "│   ●   ● │",
    "│●   ●  ● │",
    "╰─────────╯",
];

const COOKIE_PRESSED_ART: [&str; 5] = [
    "           ",
    "╭─────────╮",
    "│ ○  ○  ○ │",
    "│○   ○  ○ │",
    "╰─────────╯",
];

/// Owned counts shown under the cookie.
const GAME_TAB_UPGRADES: usize = 3;

const TOAST_WIDTH: u16 = 30;

pub fn render(
    snap: &Snapshot,
    state: &ClickerState,
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let (main_area, log_area) = if is_narrow_layout(area.width) {
        (area, None)
    } else {
        let h_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(area);
        (h_chunks[0], Some(h_chunks[1]))
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // header
            Constraint::Length(3), // tab bar
            Constraint::Min(5),    // panel
        ])
        .split(main_area);

    render_header(snap, f, chunks[0]);
    render_tab_bar(state, f, chunks[1], click_state, log_area.is_some());
    match state.tab {
        Tab::Game => render_game(snap, state, f, chunks[2], click_state),
        Tab::Shop => render_shop(snap, f, chunks[2], click_state),
        Tab::Achievements => render_achievements(snap, f, chunks[2]),
        Tab::Guide => render_guide(f, chunks[2], click_state),
    }

    if let Some(log_area) = log_area {
        render_log(state, f, log_area);
    }
    render_toasts(state, f, main_area);
}

fn render_header(snap: &Snapshot, f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(vec![
            Span::styled(
                format!("🍪 {}", format_number(snap.total.floor())),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  +{}/click", format_number(snap.yield_per_action)),
                Style::default().fg(Color::Cyan),
            ),
        ]),
        Line::from(Span::styled(
            format!(
                "Earned {} · Clicks {} · Awards {}/{}",
                format_number(snap.lifetime_earned.floor()),
                snap.actions_performed,
                snap.unlocked_count,
                snap.achievements.len()
            ),
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Cookie Clicker "),
    );
    f.render_widget(widget, area);
}

fn render_tab_bar(
    state: &ClickerState,
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
    show_keys: bool,
) {
    let mut bar = TabBar::new("│").block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    for &tab in Tab::all() {
        let style = if tab == state.tab {
            Style::default().fg(Color::Black).bg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Cyan)
        };
        let label = if show_keys {
            format!("{} ({})", tab.label(), tab.key())
        } else {
            tab.label().to_string()
        };
        bar = bar.tab(label, style, ClickAction::SelectTab(tab));
    }
    let mut cs = click_state.borrow_mut();
    bar.render(f, area, &mut cs);
}

fn render_game(
    snap: &Snapshot,
    state: &ClickerState,
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let flashing = state.click_flash_ms > 0.0;
    let art = if flashing { &COOKIE_PRESSED_ART } else { &COOKIE_ART };
    let cookie_style = if flashing {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Yellow)
    };

    let mut cl = ClickableList::new();
    for row in art {
        cl.push_clickable(Line::from(Span::styled(*row, cookie_style)), ClickAction::Cookie);
    }
    cl.push(Line::from(""));
    cl.push_clickable(
        Line::from(Span::styled(
            " [C] Click the cookie ",
            Style::default().fg(Color::Black).bg(Color::Yellow).add_modifier(Modifier::BOLD),
        )),
        ClickAction::Cookie,
    );
    cl.push(Line::from(""));
    for upgrade in snap.upgrades.iter().take(GAME_TAB_UPGRADES) {
        cl.push(Line::from(vec![
            Span::styled(format!("{} ", upgrade.display_name), Style::default().fg(Color::White)),
            Span::styled(format!("×{}", upgrade.owned_count), Style::default().fg(Color::Green)),
        ]));
    }

    {
        let mut cs = click_state.borrow_mut();
        cl.register_targets(area, &mut cs, 1, 1);
    }

    let border_color = if flashing { Color::Yellow } else { Color::DarkGray };
    let widget = Paragraph::new(cl.into_lines())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border_color)),
        );
    f.render_widget(widget, area);

    // Particles rise from the bottom edge of the cookie art.
    let base_y = area.y + 1 + COOKIE_ART.len() as u16;
    render_particles(state, f, area, base_y);
}

fn render_particles(state: &ClickerState, f: &mut Frame, area: Rect, base_y: u16) {
    let center_x = area.x + area.width / 2;
    for particle in &state.particles {
        let progress = particle.progress();
        let rise = (progress * 5.0) as u16;
        let y = base_y.saturating_sub(1 + rise);
        let x = (center_x as i16 + particle.col_offset).max(area.x as i16) as u16;
        let color = if progress < 1.0 / 3.0 {
            Color::White
        } else if progress < 2.0 / 3.0 {
            Color::Yellow
        } else {
            Color::DarkGray
        };

        if y > area.y && y < area.y + area.height && x < area.x + area.width {
            let width = (particle.text.chars().count() as u16).min(area.x + area.width - x);
            if width > 0 {
                let style = Style::default().fg(color).add_modifier(Modifier::BOLD);
                let widget = Paragraph::new(Span::styled(particle.text.as_str(), style));
                f.render_widget(widget, Rect::new(x, y, width, 1));
            }
        }
    }
}

fn render_shop(snap: &Snapshot, f: &mut Frame, area: Rect, click_state: &Rc<RefCell<ClickState>>) {
    let mut cl = ClickableList::new();
    for (i, upgrade) in snap.upgrades.iter().enumerate() {
        let (name_style, price_style) = if upgrade.affordable {
            (
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                Style::default().fg(Color::Green),
            )
        } else {
            (Style::default().fg(Color::DarkGray), Style::default().fg(Color::Red))
        };
        let key_label = if i < 9 { format!("[{}]", i + 1) } else { "   ".to_string() };
        cl.push_clickable(
            Line::from(vec![
                Span::styled(format!(" {} ", key_label), Style::default().fg(Color::Cyan)),
                Span::styled(format!("{:<10}", upgrade.display_name), name_style),
                Span::styled(format!("{:>8}", format_number(upgrade.price_now)), price_style),
                Span::styled(
                    format!("  +{}/click  ×{}", format_number(upgrade.yield_delta), upgrade.owned_count),
                    Style::default().fg(Color::DarkGray),
                ),
            ]),
            ClickAction::Buy(i),
        );
        cl.push_clickable(
            Line::from(Span::styled(
                format!("     {}", upgrade.description),
                Style::default().fg(Color::DarkGray),
            )),
            ClickAction::Buy(i),
        );
    }

    {
        let mut cs = click_state.borrow_mut();
        cl.register_targets(area, &mut cs, 1, 1);
    }

    let widget = Paragraph::new(cl.into_lines()).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Magenta))
            .title(" Shop "),
    );
    f.render_widget(widget, area);
}

fn render_achievements(snap: &Snapshot, f: &mut Frame, area: Rect) {
    let bar_width = (area.width.saturating_sub(12) as usize).clamp(4, 20);
    let mut lines = Vec::new();
    for a in &snap.achievements {
        let (mark, style) = if a.unlocked {
            ("★", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        } else {
            ("☆", Style::default().fg(Color::DarkGray))
        };
        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", mark), style),
            Span::styled(a.display_name.as_str(), style),
            Span::styled(format!("  {}", a.description), Style::default().fg(Color::DarkGray)),
        ]));
        let goal = match a.kind {
            AchievementKind::TotalCurrency => "cookies",
            AchievementKind::TotalUpgradesOwned => "upgrades",
        };
        lines.push(Line::from(vec![
            Span::styled(
                format!("   {} ", progress_bar(a.progress_ratio, bar_width)),
                Style::default().fg(if a.unlocked { Color::Green } else { Color::Blue }),
            ),
            Span::styled(
                format!("{:>3}% of {} {}", (a.progress_ratio * 100.0).floor(), format_number(a.threshold), goal),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
    }

    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow))
            .title(format!(" Awards {}/{} ", snap.unlocked_count, snap.achievements.len())),
    );
    f.render_widget(widget, area);
}

fn render_guide(f: &mut Frame, area: Rect, click_state: &Rc<RefCell<ClickState>>) {
    let heading = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
    let body = Style::default().fg(Color::White);
    let hint = Style::default().fg(Color::Yellow);

    let mut cl = ClickableList::new();
    cl.push(Line::from(Span::styled(" Clicking", heading)));
    cl.push(Line::from(Span::styled("  Each click adds your per-click yield.", body)));
    cl.push_clickable(Line::from(Span::styled("  [C] or Space clicks the cookie", hint)), ClickAction::Cookie);
    cl.push(Line::from(""));
    cl.push(Line::from(Span::styled(" Upgrades", heading)));
    cl.push(Line::from(Span::styled("  Each one raises your yield for good.", body)));
    cl.push(Line::from(Span::styled("  Prices grow 15% with every copy owned.", body)));
    cl.push_clickable(
        Line::from(Span::styled("  [S] Shop, then 1-9 to buy", hint)),
        ClickAction::SelectTab(Tab::Shop),
    );
    cl.push(Line::from(""));
    cl.push(Line::from(Span::styled(" Awards", heading)));
    cl.push(Line::from(Span::styled("  Reach a balance or an upgrade count to unlock.", body)));
    cl.push(Line::from(Span::styled("  Spending never takes an award away.", body)));
    cl.push_clickable(
        Line::from(Span::styled("  [A] Awards shows your progress", hint)),
        ClickAction::SelectTab(Tab::Achievements),
    );

    {
        let mut cs = click_state.borrow_mut();
        cl.register_targets(area, &mut cs, 1, 1);
    }

    let widget = Paragraph::new(cl.into_lines()).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Guide "),
    );
    f.render_widget(widget, area);
}

fn render_log(state: &ClickerState, f: &mut Frame, area: Rect) {
    let visible = area.height.saturating_sub(2) as usize;

    // Newest first
    let lines: Vec<Line> = state
        .log
        .iter()
        .rev()
        .take(visible)
        .enumerate()
        .map(|(i, entry)| {
            let style = match (entry.is_important, i < 3) {
                (true, true) => Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                (true, false) => Style::default().fg(Color::Yellow),
                (false, true) => Style::default().fg(Color::White),
                (false, false) => Style::default().fg(Color::DarkGray),
            };
            Line::from(Span::styled(entry.text.as_str(), style))
        })
        .collect();

    let widget = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Blue))
                .title(" Log "),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(widget, area);
}

/// Toasts stack in the top-right corner, newest at the bottom.
fn render_toasts(state: &ClickerState, f: &mut Frame, area: Rect) {
    if state.toasts.is_empty() {
        return;
    }
    let width = TOAST_WIDTH.min(area.width);
    let height = (state.toasts.len() as u16 + 2).min(area.height);
    let rect = Rect::new(area.x + area.width - width, area.y, width, height);

    let lines: Vec<Line> = state
        .toasts
        .iter()
        .map(|toast| {
            let style = match toast.kind {
                ToastKind::Purchase => Style::default().fg(Color::Green),
                ToastKind::Rejected => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ToastKind::Achievement => Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            };
            Line::from(Span::styled(toast.text.as_str(), style))
        })
        .collect();

    f.render_widget(Clear, rect);
    f.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::White)),
        ),
        rect,
    );
}
