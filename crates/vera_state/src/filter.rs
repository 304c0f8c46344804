//! Option filtering and selection state for `Combobox` and `MultiSelect`.

use serde::{Deserialize, Serialize};

use crate::StateError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// One selectable entry.
pub struct SelectOption {
    /// Stable value submitted on selection.
    pub value: String,
    /// Display label.
    pub label: String,
    /// Disabled options render but cannot be highlighted or selected.
    #[serde(default)]
    pub disabled: bool,
}

impl SelectOption {
    /// Enabled option.
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            disabled: false,
        }
    }

    /// Marks the option disabled.
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    fn matches(&self, needle: &str) -> bool {
        self.label.to_lowercase().contains(needle) || self.value.to_lowercase().contains(needle)
    }
}

/// Options whose label or value contains `query`, case-insensitively.
///
/// A blank query returns every option in its original order.
pub fn filter_options<'a>(options: &'a [SelectOption], query: &str) -> Vec<&'a SelectOption> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return options.iter().collect();
    }
    options.iter().filter(|option| option.matches(&needle)).collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Badge labels that fit plus the count folded into "+N more".
pub struct BadgeOverflow {
    /// Labels rendered as individual badges.
    pub visible: Vec<String>,
    /// Remaining selected values.
    pub hidden: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
/// Values picked in a `MultiSelect`, in selection order.
pub struct MultiSelection {
    selected: Vec<String>,
    max_selected: Option<usize>,
}

impl MultiSelection {
    /// Unbounded selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Selection capped at `max_selected` values.
    pub fn with_limit(max_selected: usize) -> Self {
        Self {
            selected: Vec::new(),
            max_selected: Some(max_selected),
        }
    }

    /// Selected values in selection order.
    pub fn selected(&self) -> &[String] {
        &self.selected
    }

    /// Returns `true` when `value` is selected.
    pub fn contains(&self, value: &str) -> bool {
        self.selected.iter().any(|selected| selected == value)
    }

    /// Returns `true` when no further values can be added.
    pub fn is_full(&self) -> bool {
        self.max_selected
            .map(|limit| self.selected.len() >= limit)
            .unwrap_or(false)
    }

    /// Adds `value` or removes it if already selected. Returns whether it is now selected.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::SelectionLimit`] when adding would exceed the limit.
    pub fn toggle(&mut self, value: &str) -> Result<bool, StateError> {
        if self.contains(value) {
            self.remove(value);
            return Ok(false);
        }
        if let Some(limit) = self.max_selected.filter(|_| self.is_full()) {
            return Err(StateError::SelectionLimit { limit });
        }
        self.selected.push(value.to_string());
        Ok(true)
    }

    /// Removes `value`. Returns `true` when it was selected.
    pub fn remove(&mut self, value: &str) -> bool {
        let before = self.selected.len();
        self.selected.retain(|selected| selected != value);
        before != self.selected.len()
    }

    /// Clears the selection.
    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Splits selected labels into visible badges and an overflow count.
    ///
    /// Values missing from `options` show their raw value.
    pub fn badges(&self, options: &[SelectOption], max_visible: usize) -> BadgeOverflow {
        let visible = self
            .selected
            .iter()
            .take(max_visible)
            .map(|value| {
                options
                    .iter()
                    .find(|option| option.value == *value)
                    .map(|option| option.label.clone())
                    .unwrap_or_else(|| value.clone())
            })
            .collect::<Vec<_>>();
        BadgeOverflow {
            hidden: self.selected.len() - visible.len(),
            visible,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
/// Popover, search and keyboard-highlight state of a single-value `Combobox`.
pub struct ComboboxState {
    /// Whether the option list is showing.
    pub open: bool,
    /// Current search text.
    pub query: String,
    /// Committed value, if any.
    pub value: Option<String>,
    /// Index into the filtered options of the highlighted entry.
    pub highlighted: Option<usize>,
}

impl ComboboxState {
    /// Opens or closes the list. Closing clears the search.
    pub fn set_open(&mut self, open: bool) {
        self.open = open;
        if !open {
            self.query.clear();
            self.highlighted = None;
        }
    }

    /// Replaces the search text, opening the list and clearing the highlight.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.open = true;
        self.highlighted = None;
    }

    /// Options visible for the current search.
    pub fn visible<'a>(&self, options: &'a [SelectOption]) -> Vec<&'a SelectOption> {
        filter_options(options, &self.query)
    }

    /// Moves the highlight to the next enabled visible option, wrapping around.
    pub fn highlight_next(&mut self, options: &[SelectOption]) {
        self.step_highlight(options, true);
    }

    /// Moves the highlight to the previous enabled visible option, wrapping around.
    pub fn highlight_previous(&mut self, options: &[SelectOption]) {
        self.step_highlight(options, false);
    }

    fn step_highlight(&mut self, options: &[SelectOption], forward: bool) {
        let visible = self.visible(options);
        let len = visible.len();
        if len == 0 {
            self.highlighted = None;
            return;
        }
        let mut index = match (self.highlighted, forward) {
            (Some(current), true) => (current + 1) % len,
            (Some(current), false) => (current + len - 1) % len,
            (None, true) => 0,
            (None, false) => len - 1,
        };
        for _ in 0..len {
            if !visible[index].disabled {
                self.highlighted = Some(index);
                self.open = true;
                return;
            }
            index = if forward {
                (index + 1) % len
            } else {
                (index + len - 1) % len
            };
        }
        self.highlighted = None;
    }

    /// Commits the highlighted option and closes the list.
    ///
    /// Re-committing the current value clears it. Returns the new value.
    pub fn commit(&mut self, options: &[SelectOption]) -> Option<String> {
        let picked = self
            .highlighted
            .and_then(|index| self.visible(options).get(index).copied())
            .filter(|option| !option.disabled)
            .map(|option| option.value.clone());
        if let Some(picked) = picked {
            self.select(&picked);
        }
        self.set_open(false);
        self.value.clone()
    }

    /// Selects `value` directly, toggling it off when already selected.
    pub fn select(&mut self, value: &str) {
        if self.value.as_deref() == Some(value) {
            self.value = None;
        } else {
            self.value = Some(value.to_string());
        }
    }

    /// Label of the committed value.
    pub fn selected_label<'a>(&self, options: &'a [SelectOption]) -> Option<&'a str> {
        let value = self.value.as_deref()?;
        options
            .iter()
            .find(|option| option.value == value)
            .map(|option| option.label.as_str())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn frameworks() -> Vec<SelectOption> {
        vec![
            SelectOption::new("next", "Next.js"),
            SelectOption::new("svelte", "SvelteKit"),
            SelectOption::new("nuxt", "Nuxt.js").disabled(),
            SelectOption::new("remix", "Remix"),
            SelectOption::new("astro", "Astro"),
        ]
    }

    fn values(options: &[&SelectOption]) -> Vec<String> {
        options.iter().map(|option| option.value.clone()).collect()
    }

    #[test]
    fn filtering_is_case_insensitive_on_label_and_value() {
        let options = frameworks();
        assert_eq!(values(&filter_options(&options, "  JS ")), vec!["next", "nuxt"]);
        assert_eq!(values(&filter_options(&options, "vel")), vec!["svelte"]);
        assert_eq!(filter_options(&options, "").len(), options.len());
        assert!(filter_options(&options, "angular").is_empty());
    }

    #[test]
    fn multi_selection_toggles_and_enforces_limit() {
        let mut selection = MultiSelection::with_limit(2);
        assert_eq!(selection.toggle("next"), Ok(true));
        assert_eq!(selection.toggle("remix"), Ok(true));
        assert!(selection.is_full());
        assert_eq!(
            selection.toggle("astro"),
            Err(StateError::SelectionLimit { limit: 2 })
        );

        assert_eq!(selection.toggle("next"), Ok(false));
        assert_eq!(selection.toggle("astro"), Ok(true));
        assert_eq!(selection.selected(), ["remix".to_string(), "astro".to_string()]);

        assert!(selection.remove("remix"));
        assert!(!selection.remove("remix"));
        selection.clear();
        assert!(selection.selected().is_empty());
    }

    #[test]
    fn badges_fold_overflow_into_count() {
        let options = frameworks();
        let mut selection = MultiSelection::new();
        for value in ["next", "svelte", "astro", "legacy"] {
            selection.toggle(value).expect("unbounded");
        }

        assert_eq!(
            selection.badges(&options, 2),
            BadgeOverflow {
                visible: vec!["Next.js".to_string(), "SvelteKit".to_string()],
                hidden: 2,
            }
        );
        assert_eq!(selection.badges(&options, 10).visible[3], "legacy");
    }

    #[test]
    fn highlight_skips_disabled_options_and_wraps() {
        let options = frameworks();
        let mut combobox = ComboboxState::default();
        combobox.set_query("js");

        combobox.highlight_next(&options);
        assert_eq!(combobox.highlighted, Some(0));
        combobox.highlight_next(&options);
        assert_eq!(combobox.highlighted, Some(0));

        combobox.set_query("");
        combobox.highlight_previous(&options);
        assert_eq!(combobox.highlighted, Some(4));
        combobox.highlight_previous(&options);
        combobox.highlight_previous(&options);
        assert_eq!(combobox.highlighted, Some(1));
    }

    #[test]
    fn commit_selects_then_toggles_off() {
        let options = frameworks();
        let mut combobox = ComboboxState::default();
        combobox.set_query("rem");
        combobox.highlight_next(&options);

        assert_eq!(combobox.commit(&options), Some("remix".to_string()));
        assert!(!combobox.open);
        assert!(combobox.query.is_empty());
        assert_eq!(combobox.selected_label(&options), Some("Remix"));

        combobox.set_query("rem");
        combobox.highlight_next(&options);
        assert_eq!(combobox.commit(&options), None);
    }

    #[test]
    fn commit_without_highlight_keeps_value() {
        let options = frameworks();
        let mut combobox = ComboboxState::default();
        combobox.select("astro");
        combobox.set_open(true);
        assert_eq!(combobox.commit(&options), Some("astro".to_string()));
    }
}
