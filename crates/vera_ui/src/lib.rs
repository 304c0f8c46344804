//! Vera UI component library for Leptos.
//!
//! The crate owns the reusable primitives, a centralized icon API, and the stable
//! `data-ui-*` DOM contract consumed by the stylesheet layer. View-state decisions
//! (page windows, toast queues, selection limits, tab query sync) live in
//! [`vera_state`]; components here wire them to signals and browser side effects.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod icon;
pub mod persistence;
mod primitives;

pub use icon::{Icon, IconName, IconSize};
pub use primitives::{
    initials, provide_toaster, range_label, use_sidebar, use_toaster, Accordion, AccordionItem,
    Avatar, Badge, BadgeVariant, Button, ButtonSize, ButtonVariant, Card, Checkbox, Combobox,
    EmptyState, Heading, LayoutAlign, LayoutGap, LayoutJustify, MultiSelect, Pagination,
    PopoverSurface, SelectField, Sidebar, SidebarContent, SidebarContext, SidebarGroup,
    SidebarItem, SidebarProvider, SidebarTrigger, Stack, StackDirection, Switch, TabItem,
    TabPanel, Table, TableBody, TableCaption, TableCell, TableHead, TableHeader, TableRow, Tabs,
    Text, TextField, TextRole, TextTone, Toaster, ToasterHandle,
};

/// Convenience imports for crates composing the primitive set.
pub mod prelude {
    pub use crate::{
        initials, provide_toaster, range_label, use_sidebar, use_toaster, Accordion,
        AccordionItem, Avatar, Badge, BadgeVariant, Button, ButtonSize, ButtonVariant, Card,
        Checkbox, Combobox, EmptyState, Heading, Icon, IconName, IconSize, LayoutAlign,
        LayoutGap, LayoutJustify, MultiSelect, Pagination, PopoverSurface, SelectField, Sidebar,
        SidebarContent, SidebarContext, SidebarGroup, SidebarItem, SidebarProvider,
        SidebarTrigger, Stack, StackDirection, Switch, TabItem, TabPanel, Table, TableBody,
        TableCaption, TableCell, TableHead, TableHeader, TableRow, Tabs, Text, TextField,
        TextRole, TextTone, Toaster, ToasterHandle,
    };
    pub use vera_state::{
        AccordionMode, SelectOption, ToastConfig, ToastId, ToastUpdate, ToastVariant,
    };
}
