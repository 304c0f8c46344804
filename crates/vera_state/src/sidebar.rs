//! Sidebar collapse state and its cookie persistence format.

use serde::{Deserialize, Serialize};

/// Cookie holding the desktop expanded/collapsed state.
pub const SIDEBAR_COOKIE_NAME: &str = "sidebar_state";
/// Seven days, in seconds.
pub const SIDEBAR_COOKIE_MAX_AGE: u32 = 60 * 60 * 24 * 7;
/// Key toggling the sidebar together with Ctrl or Meta.
pub const SIDEBAR_KEYBOARD_SHORTCUT: &str = "b";
/// Viewports narrower than this use the off-canvas mobile sidebar.
pub const MOBILE_BREAKPOINT_PX: u32 = 768;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Desktop expansion plus the separate mobile sheet state.
pub struct SidebarState {
    /// Whether the desktop sidebar is expanded.
    pub expanded: bool,
    /// Whether the mobile off-canvas sheet is open.
    pub mobile_open: bool,
}

impl Default for SidebarState {
    fn default() -> Self {
        Self {
            expanded: true,
            mobile_open: false,
        }
    }
}

impl SidebarState {
    /// Restores the desktop state from a `document.cookie` style header.
    ///
    /// Missing or unparseable values fall back to expanded.
    pub fn from_cookie_header(header: &str) -> Self {
        let expanded = header
            .split(';')
            .filter_map(|pair| pair.trim().split_once('='))
            .find(|(name, _)| *name == SIDEBAR_COOKIE_NAME)
            .and_then(|(_, value)| value.trim().parse::<bool>().ok())
            .unwrap_or(true);
        Self {
            expanded,
            mobile_open: false,
        }
    }

    /// Cookie assignment persisting the desktop state.
    pub fn cookie_value(&self) -> String {
        format!(
            "{SIDEBAR_COOKIE_NAME}={}; path=/; max-age={SIDEBAR_COOKIE_MAX_AGE}",
            self.expanded
        )
    }

    /// Flips the mobile sheet on mobile viewports and the desktop state otherwise.
    ///
    /// Returns `true` when the desktop state changed and should be persisted.
    pub fn toggle(&mut self, is_mobile: bool) -> bool {
        if is_mobile {
            self.mobile_open = !self.mobile_open;
            false
        } else {
            self.expanded = !self.expanded;
            true
        }
    }

    /// Sets the desktop state. Returns `true` when it changed.
    pub fn set_expanded(&mut self, expanded: bool) -> bool {
        let changed = self.expanded != expanded;
        self.expanded = expanded;
        changed
    }

    /// `data-state` token for the desktop sidebar.
    pub fn state_token(&self) -> &'static str {
        if self.expanded {
            "expanded"
        } else {
            "collapsed"
        }
    }
}

/// Returns `true` for the Ctrl/Cmd+B toggle chord.
pub fn is_toggle_shortcut(key: &str, ctrl: bool, meta: bool) -> bool {
    (ctrl || meta) && key.eq_ignore_ascii_case(SIDEBAR_KEYBOARD_SHORTCUT)
}

/// Returns `true` when `width_px` should use the mobile sidebar.
pub fn is_mobile_width(width_px: u32) -> bool {
    width_px < MOBILE_BREAKPOINT_PX
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn cookie_value_round_trips_through_header() {
        let collapsed = SidebarState {
            expanded: false,
            mobile_open: true,
        };
        assert_eq!(
            collapsed.cookie_value(),
            "sidebar_state=false; path=/; max-age=604800"
        );

        let header = "theme=dark; sidebar_state=false; other=1";
        assert_eq!(
            SidebarState::from_cookie_header(header),
            SidebarState {
                expanded: false,
                mobile_open: false,
            }
        );
    }

    #[test]
    fn missing_or_malformed_cookie_defaults_to_expanded() {
        assert!(SidebarState::from_cookie_header("").expanded);
        assert!(SidebarState::from_cookie_header("sidebar_state=maybe").expanded);
        assert!(SidebarState::from_cookie_header("sidebar_state_old=false").expanded);
    }

    #[test]
    fn toggle_targets_mobile_sheet_on_small_viewports() {
        let mut state = SidebarState::default();

        assert!(!state.toggle(true));
        assert!(state.mobile_open);
        assert!(state.expanded);

        assert!(state.toggle(false));
        assert!(!state.expanded);
        assert_eq!(state.state_token(), "collapsed");
    }

    #[test]
    fn set_expanded_reports_changes_only() {
        let mut state = SidebarState::default();
        assert!(!state.set_expanded(true));
        assert!(state.set_expanded(false));
    }

    #[test]
    fn shortcut_requires_modifier() {
        assert!(is_toggle_shortcut("b", true, false));
        assert!(is_toggle_shortcut("B", false, true));
        assert!(!is_toggle_shortcut("b", false, false));
        assert!(!is_toggle_shortcut("n", true, false));
    }

    #[test]
    fn breakpoint_is_exclusive() {
        assert!(is_mobile_width(767));
        assert!(!is_mobile_width(768));
    }
}
