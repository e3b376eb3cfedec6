//! Semantic actions for clicker click targets.
//!
//! Registered during render and dispatched back through `InputEvent::Click`.

/// Which panel is showing below the header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tab {
    Game,
    Shop,
    Achievements,
    Guide,
}

impl Tab {
    /// All tabs in display order.
    pub fn all() -> &'static [Tab] {
        &[Tab::Game, Tab::Shop, Tab::Achievements, Tab::Guide]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Game => "Game",
            Tab::Shop => "Shop",
            Tab::Achievements => "Awards",
            Tab::Guide => "Guide",
        }
    }

    pub fn key(&self) -> char {
        match self {
            Tab::Game => 'g',
            Tab::Shop => 's',
            Tab::Achievements => 'a',
            Tab::Guide => 'h',
        }
    }

    pub fn from_key(key: char) -> Option<Tab> {
        Tab::all().iter().copied().find(|t| t.key() == key)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickAction {
    /// Perform one action (click the cookie).
    Cookie,
    SelectTab(Tab),
    /// Buy the upgrade at this catalog index.
    Buy(usize),
}

/// Keys `1`..`9` map to catalog indices 0..8.
pub fn buy_index_for_key(key: char) -> Option<usize> {
    match key {
        '1'..='9' => Some(key as usize - '1' as usize),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tab_keys_round_trip() {
        for tab in Tab::all() {
            assert_eq!(Tab::from_key(tab.key()), Some(*tab));
        }
        assert_eq!(Tab::from_key('x'), None);
    }

    #[test]
    fn digit_keys_map_to_indices() {
        assert_eq!(buy_index_for_key('1'), Some(0));
        assert_eq!(buy_index_for_key('6'), Some(5));
        assert_eq!(buy_index_for_key('0'), None);
        assert_eq!(buy_index_for_key('c'), None);
    }
}
