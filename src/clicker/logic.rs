//! Turns engine results into UI feedback and runs the UI timers.

use crate::progression::{ActionReport, Achievement, ProgressionError, PurchaseReport};

use super::state::{
    ClickerState, Particle, ToastKind, CLICK_FLASH_MS, MAX_PARTICLES, PARTICLE_LIFETIME_MS,
};

/// Advance every UI timer by `elapsed_ms`.
pub fn advance(state: &mut ClickerState, elapsed_ms: f64) {
    state.click_flash_ms = (state.click_flash_ms - elapsed_ms).max(0.0);
    for p in &mut state.particles {
        p.remaining_ms -= elapsed_ms;
    }
    state.particles.retain(|p| p.remaining_ms > 0.0);
    state.toasts.advance(elapsed_ms);
}

/// Flash, spawn a floating "+N", and announce any unlocks.
pub fn record_action(state: &mut ClickerState, report: &ActionReport) {
    state.click_flash_ms = CLICK_FLASH_MS;

    let col_offset = (state.next_random() % 13) as i16 - 6; // -6..+6
    state.particles.push(Particle {
        text: format!("+{}", format_number(report.delta)),
        col_offset,
        remaining_ms: PARTICLE_LIFETIME_MS,
    });
    if state.particles.len() > MAX_PARTICLES {
        state.particles.remove(0);
    }

    record_unlocks(state, &report.unlocked);
}

pub fn record_purchase(state: &mut ClickerState, result: &Result<PurchaseReport, ProgressionError>) {
    match result {
        Ok(report) => {
            let p = &report.purchase;
            state
                .toasts
                .push(ToastKind::Purchase, format!("{} ({})", p.display_name, p.owned_count));
            state.add_log(
                &format!(
                    "Bought {} for {} → {}/click",
                    p.display_name,
                    format_number(p.price_paid),
                    format_number(p.yield_per_action)
                ),
                false,
            );
            record_unlocks(state, &report.unlocked);
        }
        Err(ProgressionError::InsufficientFunds { shortfall, .. }) => {
            state
                .toasts
                .push(ToastKind::Rejected, format!("need {} more", format_number(*shortfall)));
        }
        Err(err) => {
            state.add_log(&format!("Purchase failed: {}", err), false);
        }
    }
}

fn record_unlocks(state: &mut ClickerState, unlocked: &[Achievement]) {
    for achievement in unlocked {
        state
            .toasts
            .push(ToastKind::Achievement, format!("★ {}", achievement.display_name));
        state.add_log(
            &format!("★ Achievement unlocked: {}", achievement.display_name),
            true,
        );
    }
}

/// Format a number with commas (e.g. 1234567 → "1,234,567").
pub fn format_number(n: f64) -> String {
    if n < 0.0 {
        return format!("-{}", format_number(-n));
    }
    let rounded = (n * 10.0).round() / 10.0;
    let int_part = rounded.floor() as u64;
    let tenth = ((rounded - int_part as f64) * 10.0).round() as u8;

    let digits = int_part.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    if tenth > 0 {
        format!("{}.{}", grouped, tenth)
    } else {
        grouped
    }
}
