//! Tab selection synced to a URL query parameter.
//!
//! Query strings follow `application/x-www-form-urlencoded` rules, the same ones
//! `URLSearchParams` applies in the browser, so malformed escapes are kept literally
//! instead of failing the parse.

use serde::{Deserialize, Serialize};

/// Query parameter the showcase syncs its section tabs to.
pub const DEFAULT_TAB_PARAM: &str = "tab";

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
/// Ordered query-string parameters.
pub struct QueryParams(Vec<(String, String)>);

impl QueryParams {
    /// Parses `search` with or without its leading `?`.
    pub fn parse(search: &str) -> Self {
        let raw = search.strip_prefix('?').unwrap_or(search);
        Self(
            form_urlencoded::parse(raw.as_bytes())
                .map(|(key, value)| (key.into_owned(), value.into_owned()))
                .collect(),
        )
    }

    /// First value for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(candidate, _)| candidate == key)
            .map(|(_, value)| value.as_str())
    }

    /// Sets `key` in place of its first occurrence, dropping any repeats.
    pub fn set(&mut self, key: &str, value: &str) {
        match self.0.iter().position(|(candidate, _)| candidate == key) {
            Some(index) => {
                self.0[index].1 = value.to_string();
                let mut seen = 0usize;
                self.0.retain(|(candidate, _)| {
                    if candidate != key {
                        return true;
                    }
                    seen += 1;
                    seen == 1
                });
            }
            None => self.0.push((key.to_string(), value.to_string())),
        }
    }

    /// Removes every occurrence of `key`.
    pub fn remove(&mut self, key: &str) {
        self.0.retain(|(candidate, _)| candidate != key);
    }

    /// Returns `true` when no parameters remain.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Serializes to a `location.search` value: empty, or `?` followed by the pairs.
    pub fn to_search(&self) -> String {
        if self.0.is_empty() {
            return String::new();
        }
        let mut serializer = form_urlencoded::Serializer::for_suffix(String::from("?"), 1);
        for (key, value) in &self.0 {
            serializer.append_pair(key, value);
        }
        serializer.finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Selected tab and the query parameter it is mirrored into.
pub struct TabsState {
    /// Currently selected tab value.
    pub value: String,
    /// Query parameter carrying the selection.
    pub param: String,
    /// Tab selected when the parameter is absent.
    pub default_value: String,
}

impl TabsState {
    /// Restores the selection from `search`, ignoring values that name no known tab.
    pub fn from_query(search: &str, param: &str, tabs: &[&str], default_value: &str) -> Self {
        let value = QueryParams::parse(search)
            .get(param)
            .filter(|value| tabs.contains(value))
            .unwrap_or(default_value)
            .to_string();
        Self {
            value,
            param: param.to_string(),
            default_value: default_value.to_string(),
        }
    }

    /// Selects `value` and returns the updated `location.search` for `search`.
    ///
    /// Selecting the default tab removes the parameter so canonical URLs stay clean.
    /// Unrelated parameters keep their order.
    pub fn select(&mut self, value: &str, search: &str) -> String {
        self.value = value.to_string();
        let mut params = QueryParams::parse(search);
        if self.value == self.default_value {
            params.remove(&self.param);
        } else {
            params.set(&self.param, &self.value);
        }
        params.to_search()
    }

    /// Returns `true` when `value` is the selected tab.
    pub fn is_selected(&self, value: &str) -> bool {
        self.value == value
    }
}

/// Roving-focus target for a tab-list key press, `None` for unrelated keys.
pub fn next_tab_index(current: usize, len: usize, key: &str) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let current = current.min(len - 1);
    match key {
        "ArrowRight" | "ArrowDown" => Some((current + 1) % len),
        "ArrowLeft" | "ArrowUp" => Some((current + len - 1) % len),
        "Home" => Some(0),
        "End" => Some(len - 1),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const TABS: [&str; 3] = ["overview", "usage", "api"];

    #[test]
    fn query_parsing_decodes_plus_and_percent_escapes() {
        let params = QueryParams::parse("?q=hello+world&path=%2Fdocs&broken=%zz");
        assert_eq!(params.get("q"), Some("hello world"));
        assert_eq!(params.get("path"), Some("/docs"));
        assert_eq!(params.get("broken"), Some("%zz"));
        assert_eq!(params.get("missing"), None);
    }

    #[test]
    fn set_replaces_first_occurrence_and_drops_repeats() {
        let mut params = QueryParams::parse("a=1&tab=x&b=2&tab=y");
        params.set("tab", "usage");
        assert_eq!(params.to_search(), "?a=1&tab=usage&b=2");

        params.set("c", "a b");
        assert_eq!(params.to_search(), "?a=1&tab=usage&b=2&c=a+b");
    }

    #[test]
    fn empty_params_serialize_to_empty_search() {
        let mut params = QueryParams::parse("?tab=api");
        params.remove("tab");
        assert!(params.is_empty());
        assert_eq!(params.to_search(), "");
    }

    #[test]
    fn restores_known_tab_from_query() {
        let state = TabsState::from_query("?page=2&tab=api", DEFAULT_TAB_PARAM, &TABS, "overview");
        assert_eq!(state.value, "api");
        assert!(state.is_selected("api"));
    }

    #[test]
    fn unknown_tab_falls_back_to_default() {
        let state = TabsState::from_query("?tab=nope", DEFAULT_TAB_PARAM, &TABS, "overview");
        assert_eq!(state.value, "overview");
    }

    #[test]
    fn selecting_updates_query_and_preserves_other_params() {
        let mut state = TabsState::from_query("?page=2", DEFAULT_TAB_PARAM, &TABS, "overview");

        let search = state.select("usage", "?page=2");
        assert_eq!(search, "?page=2&tab=usage");
        assert_eq!(state.value, "usage");

        let search = state.select("overview", &search);
        assert_eq!(search, "?page=2");
    }

    #[test]
    fn roving_focus_wraps_around() {
        assert_eq!(next_tab_index(2, 3, "ArrowRight"), Some(0));
        assert_eq!(next_tab_index(0, 3, "ArrowLeft"), Some(2));
        assert_eq!(next_tab_index(1, 3, "Home"), Some(0));
        assert_eq!(next_tab_index(1, 3, "End"), Some(2));
        assert_eq!(next_tab_index(1, 3, "Enter"), None);
        assert_eq!(next_tab_index(0, 0, "ArrowRight"), None);
    }
}
