//! Inline stroke icons used by the primitives.

use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Icon glyphs available to primitives and consumers.
pub enum IconName {
    /// Left-pointing chevron.
    ChevronLeft,
    /// Right-pointing chevron.
    ChevronRight,
    /// Down-pointing chevron.
    ChevronDown,
    /// Stacked up/down chevrons for select triggers.
    ChevronsUpDown,
    /// Check mark.
    Check,
    /// Horizontal bar.
    Minus,
    /// Close cross.
    X,
    /// Three horizontal dots.
    Ellipsis,
    /// Sidebar panel toggle.
    PanelLeft,
    /// Magnifier.
    Search,
    /// Head and shoulders.
    User,
}

impl IconName {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::ChevronLeft => "chevron-left",
            Self::ChevronRight => "chevron-right",
            Self::ChevronDown => "chevron-down",
            Self::ChevronsUpDown => "chevrons-up-down",
            Self::Check => "check",
            Self::Minus => "minus",
            Self::X => "x",
            Self::Ellipsis => "ellipsis",
            Self::PanelLeft => "panel-left",
            Self::Search => "search",
            Self::User => "user",
        }
    }

    /// SVG path data on a 24x24 grid.
    fn path(self) -> &'static str {
        match self {
            Self::ChevronLeft => "m15 18-6-6 6-6",
            Self::ChevronRight => "m9 18 6-6-6-6",
            Self::ChevronDown => "m6 9 6 6 6-6",
            Self::ChevronsUpDown => "m7 15 5 5 5-5M7 9l5-5 5 5",
            Self::Check => "M20 6 9 17l-5-5",
            Self::Minus => "M5 12h14",
            Self::X => "M18 6 6 18M6 6l12 12",
            Self::Ellipsis => "M5 12h.01M12 12h.01M19 12h.01",
            Self::PanelLeft => "M3 3h18v18H3zM9 3v18",
            Self::Search => "m21 21-4.3-4.3M11 19a8 8 0 1 0 0-16 8 8 0 0 0 0 16",
            Self::User => "M19 21v-2a4 4 0 0 0-4-4H9a4 4 0 0 0-4 4v2M12 11a4 4 0 1 0 0-8 4 4 0 0 0 0 8",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Rendered icon size.
pub enum IconSize {
    /// 12px.
    Xs,
    /// 16px.
    #[default]
    Sm,
    /// 20px.
    Md,
    /// 32px.
    Lg,
}

impl IconSize {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }

    fn pixels(self) -> u8 {
        match self {
            Self::Xs => 12,
            Self::Sm => 16,
            Self::Md => 20,
            Self::Lg => 32,
        }
    }
}

#[component]
/// Decorative icon. Give the surrounding control an accessible label.
pub fn Icon(icon: IconName, #[prop(default = IconSize::Sm)] size: IconSize) -> impl IntoView {
    let pixels = size.pixels();
    view! {
        <svg
            class="ui-icon"
            width=pixels
            height=pixels
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
            focusable="false"
            data-ui-icon=icon.token()
            data-ui-size=size.token()
        >
            <path d=icon.path()></path>
        </svg>
    }
}
