//! Headless view-state logic shared by the Vera UI primitives.
//!
//! Everything in this crate is target independent: no DOM access, no timers, no
//! storage. Leptos components in `vera_ui` own the side effects and call into these
//! types to decide what to render and what to persist.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod accordion;
mod error;
pub mod filter;
pub mod pagination;
pub mod sidebar;
pub mod tabs;
pub mod toast;

pub use accordion::{AccordionMode, AccordionState};
pub use error::StateError;
pub use filter::{filter_options, BadgeOverflow, ComboboxState, MultiSelection, SelectOption};
pub use pagination::{
    clamp_page, compute_window, total_pages, EllipsisSlot, PageToken, PageWindow,
    PaginationConfig, PaginationState, DEFAULT_PAGE_SIZE_OPTIONS,
};
pub use sidebar::{is_mobile_width, is_toggle_shortcut, SidebarState};
pub use tabs::{next_tab_index, QueryParams, TabsState, DEFAULT_TAB_PARAM};
pub use toast::{
    reduce_toasts, Toast, ToastAction, ToastConfig, ToastEffect, ToastId, ToastQueue, ToastUpdate,
    ToastVariant,
};
