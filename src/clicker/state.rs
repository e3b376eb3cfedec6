//! Presentation-side state: everything the UI remembers that the engine does
//! not. Timers count down in milliseconds fed from the frame clock.

use std::collections::VecDeque;

use super::actions::Tab;

pub const PARTICLE_LIFETIME_MS: f64 = 1000.0;
pub const CLICK_FLASH_MS: f64 = 200.0;
pub const MAX_PARTICLES: usize = 20;
pub const MAX_TOASTS: usize = 4;
pub const MAX_LOG_ENTRIES: usize = 50;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Purchase,
    /// Purchase rejected for lack of funds.
    Rejected,
    Achievement,
}

impl ToastKind {
    pub fn lifetime_ms(&self) -> f64 {
        match self {
            ToastKind::Purchase | ToastKind::Rejected => 2000.0,
            ToastKind::Achievement => 3000.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub kind: ToastKind,
    pub text: String,
    pub remaining_ms: f64,
}

/// Short-lived notifications, newest last. Holds at most [`MAX_TOASTS`].
#[derive(Debug, Default)]
pub struct ToastQueue {
    toasts: VecDeque<Toast>,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, kind: ToastKind, text: impl Into<String>) {
        self.toasts.push_back(Toast {
            kind,
            text: text.into(),
            remaining_ms: kind.lifetime_ms(),
        });
        while self.toasts.len() > MAX_TOASTS {
            self.toasts.pop_front();
        }
    }

    pub fn advance(&mut self, elapsed_ms: f64) {
        for toast in &mut self.toasts {
            toast.remaining_ms -= elapsed_ms;
        }
        self.toasts.retain(|t| t.remaining_ms > 0.0);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

/// Floating "+N" text rising from the cookie.
#[derive(Clone, Debug)]
pub struct Particle {
    pub text: String,
    /// Column offset from the center of the cookie display.
    pub col_offset: i16,
    pub remaining_ms: f64,
}

impl Particle {
    /// 0.0 when spawned, approaching 1.0 as it expires.
    pub fn progress(&self) -> f64 {
        (1.0 - self.remaining_ms / PARTICLE_LIFETIME_MS).clamp(0.0, 1.0)
    }
}

#[derive(Clone, Debug)]
pub struct LogEntry {
    pub text: String,
    pub is_important: bool,
}

pub struct ClickerState {
    pub tab: Tab,
    pub toasts: ToastQueue,
    /// Message log, oldest first.
    pub log: Vec<LogEntry>,
    pub particles: Vec<Particle>,
    /// Remaining click flash (ms).
    pub click_flash_ms: f64,
    /// xorshift state for particle spread.
    pub rng_state: u32,
}

impl ClickerState {
    pub fn new() -> Self {
        Self {
            tab: Tab::Game,
            toasts: ToastQueue::new(),
            log: Vec::new(),
            particles: Vec::new(),
            click_flash_ms: 0.0,
            rng_state: 42,
        }
    }

    pub fn add_log(&mut self, text: &str, is_important: bool) {
        self.log.push(LogEntry {
            text: text.to_string(),
            is_important,
        });
        if self.log.len() > MAX_LOG_ENTRIES {
            self.log.remove(0);
        }
    }

    pub fn next_random(&mut self) -> u32 {
        let mut x = self.rng_state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.rng_state = x;
        x
    }
}

impl Default for ClickerState {
    fn default() -> Self {
        Self::new()
    }
}
