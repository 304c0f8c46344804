//! Vera UI primitives and the shared token vocabulary they emit.

use leptos::ev::{KeyboardEvent, MouseEvent};
use leptos::*;

use crate::{Icon, IconName, IconSize};

mod controls;
mod data_display;
mod layout;
mod navigation;
mod overlays;
mod pagination;
mod selection;
mod sidebar;

pub use controls::{Button, Checkbox, SelectField, Switch, TextField};
pub use data_display::{
    initials, Avatar, Badge, Card, EmptyState, Heading, Table, TableBody, TableCaption, TableCell,
    TableHead, TableHeader, TableRow, Text,
};
pub use layout::Stack;
pub use navigation::{Accordion, AccordionItem, TabItem, TabPanel, Tabs};
pub use overlays::{provide_toaster, use_toaster, PopoverSurface, Toaster, ToasterHandle};
pub use pagination::{range_label, Pagination};
pub use selection::{Combobox, MultiSelect};
pub use sidebar::{
    use_sidebar, Sidebar, SidebarContent, SidebarContext, SidebarGroup, SidebarItem,
    SidebarProvider, SidebarTrigger,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Button visual variants.
pub enum ButtonVariant {
    /// Solid primary action.
    #[default]
    Default,
    /// Muted secondary action.
    Secondary,
    /// Bordered action on a transparent background.
    Outline,
    /// Borderless action that only shows a surface on hover.
    Ghost,
    /// Destructive action.
    Destructive,
    /// Inline text link.
    Link,
}

impl ButtonVariant {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Secondary => "secondary",
            Self::Outline => "outline",
            Self::Ghost => "ghost",
            Self::Destructive => "destructive",
            Self::Link => "link",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Button sizing tokens.
pub enum ButtonSize {
    /// Dense button.
    Sm,
    /// Default button.
    #[default]
    Md,
    /// Large button.
    Lg,
    /// Square icon-only button.
    Icon,
}

impl ButtonSize {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Icon => "icon",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Badge visual variants.
pub enum BadgeVariant {
    /// Solid badge.
    #[default]
    Default,
    /// Muted badge.
    Secondary,
    /// Destructive badge.
    Destructive,
    /// Bordered badge.
    Outline,
}

impl BadgeVariant {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Secondary => "secondary",
            Self::Destructive => "destructive",
            Self::Outline => "outline",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Text roles.
pub enum TextRole {
    /// Body text.
    #[default]
    Body,
    /// Label text.
    Label,
    /// Caption text.
    Caption,
    /// Title text.
    Title,
    /// Monospace/code text.
    Code,
}

impl TextRole {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Body => "body",
            Self::Label => "label",
            Self::Caption => "caption",
            Self::Title => "title",
            Self::Code => "code",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Text tone.
pub enum TextTone {
    /// Foreground text.
    #[default]
    Primary,
    /// Muted foreground text.
    Muted,
    /// Destructive text.
    Destructive,
}

impl TextTone {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Muted => "muted",
            Self::Destructive => "destructive",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Layout gap tokens.
pub enum LayoutGap {
    /// No gap.
    None,
    /// Small gap.
    Sm,
    /// Default gap.
    #[default]
    Md,
    /// Large gap.
    Lg,
}

impl LayoutGap {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Cross-axis alignment tokens.
pub enum LayoutAlign {
    /// Stretch/fill alignment.
    #[default]
    Stretch,
    /// Start alignment.
    Start,
    /// Center alignment.
    Center,
    /// End alignment.
    End,
}

impl LayoutAlign {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Stretch => "stretch",
            Self::Start => "start",
            Self::Center => "center",
            Self::End => "end",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Main-axis justification tokens.
pub enum LayoutJustify {
    /// Start justification.
    #[default]
    Start,
    /// Center justification.
    Center,
    /// Space between items.
    Between,
    /// End justification.
    End,
}

impl LayoutJustify {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Center => "center",
            Self::Between => "between",
            Self::End => "end",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Flow direction of a [`Stack`].
pub enum StackDirection {
    /// Column.
    #[default]
    Vertical,
    /// Row.
    Horizontal,
}

impl StackDirection {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Vertical => "vertical",
            Self::Horizontal => "horizontal",
        }
    }
}

pub(crate) fn merge_layout_class(base: &'static str, layout_class: Option<&'static str>) -> String {
    match layout_class {
        Some(layout_class) if !layout_class.is_empty() => format!("{base} {layout_class}"),
        _ => base.to_string(),
    }
}

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

pub(crate) fn open_token(open: bool) -> &'static str {
    if open {
        "open"
    } else {
        "closed"
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn layout_class_is_appended_only_when_present() {
        assert_eq!(merge_layout_class("ui-button", None), "ui-button");
        assert_eq!(merge_layout_class("ui-button", Some("")), "ui-button");
        assert_eq!(
            merge_layout_class("ui-button", Some("docs-cta")),
            "ui-button docs-cta"
        );
    }

    #[test]
    fn state_tokens_match_stylesheet_contract() {
        assert_eq!(bool_token(true), "true");
        assert_eq!(open_token(false), "closed");
        assert_eq!(ButtonVariant::default().token(), "default");
        assert_eq!(ButtonSize::Icon.token(), "icon");
        assert_eq!(BadgeVariant::Outline.token(), "outline");
        assert_eq!(StackDirection::Horizontal.token(), "horizontal");
    }
}
