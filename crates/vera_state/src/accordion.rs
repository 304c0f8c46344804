//! Open-item bookkeeping for `Accordion`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
/// How many items may be open at once.
pub enum AccordionMode {
    /// At most one item. When not `collapsible`, the open item cannot be closed directly.
    Single {
        /// Whether the open item may be closed, leaving none open.
        collapsible: bool,
    },
    /// Any number of items.
    Multiple,
}

impl Default for AccordionMode {
    fn default() -> Self {
        Self::Single { collapsible: true }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
/// Open accordion items.
pub struct AccordionState {
    mode: AccordionMode,
    open: Vec<String>,
}

impl AccordionState {
    /// All items closed.
    pub fn new(mode: AccordionMode) -> Self {
        Self {
            mode,
            open: Vec::new(),
        }
    }

    /// Starts with `items` open; single mode keeps only the first.
    pub fn with_open<I, S>(mode: AccordionMode, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut open = items.into_iter().map(Into::into).collect::<Vec<String>>();
        if matches!(mode, AccordionMode::Single { .. }) {
            open.truncate(1);
        }
        Self { mode, open }
    }

    /// Returns `true` when `item` is expanded.
    pub fn is_open(&self, item: &str) -> bool {
        self.open.iter().any(|open| open == item)
    }

    /// Expanded items.
    pub fn open_items(&self) -> &[String] {
        &self.open
    }

    /// Toggles `item`. Returns whether it is open afterwards.
    pub fn toggle(&mut self, item: &str) -> bool {
        if self.is_open(item) {
            if let AccordionMode::Single { collapsible: false } = self.mode {
                return true;
            }
            self.open.retain(|open| open != item);
            return false;
        }
        if let AccordionMode::Single { .. } = self.mode {
            self.open.clear();
        }
        self.open.push(item.to_string());
        true
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn single_mode_closes_siblings() {
        let mut state = AccordionState::new(AccordionMode::default());
        assert!(state.toggle("shipping"));
        assert!(state.toggle("returns"));
        assert_eq!(state.open_items(), ["returns".to_string()]);
        assert!(!state.toggle("returns"));
        assert!(state.open_items().is_empty());
    }

    #[test]
    fn non_collapsible_single_keeps_last_item_open() {
        let mut state =
            AccordionState::with_open(AccordionMode::Single { collapsible: false }, ["a", "b"]);
        assert_eq!(state.open_items(), ["a".to_string()]);
        assert!(state.toggle("a"));
        assert!(state.is_open("a"));
    }

    #[test]
    fn multiple_mode_tracks_items_independently() {
        let mut state = AccordionState::new(AccordionMode::Multiple);
        state.toggle("a");
        state.toggle("b");
        assert!(state.is_open("a") && state.is_open("b"));
        state.toggle("a");
        assert!(!state.is_open("a"));
        assert!(state.is_open("b"));
    }
}
