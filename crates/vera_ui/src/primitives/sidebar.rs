use vera_state::{is_mobile_width, is_toggle_shortcut, SidebarState};

use super::*;
use crate::persistence;

#[derive(Clone, Copy)]
/// Shared sidebar state installed by [`SidebarProvider`].
pub struct SidebarContext {
    /// Desktop expansion and mobile sheet state.
    pub state: RwSignal<SidebarState>,
    /// Whether the viewport is below the mobile breakpoint.
    pub is_mobile: Signal<bool>,
}

impl SidebarContext {
    fn detached() -> Self {
        Self {
            state: create_rw_signal(SidebarState::default()),
            is_mobile: Signal::derive(|| false),
        }
    }

    /// Toggles the mobile sheet or the desktop sidebar depending on the viewport.
    pub fn toggle(&self) {
        let is_mobile = self.is_mobile.get_untracked();
        self.state.update(|state| {
            state.toggle(is_mobile);
        });
    }

    /// Sets the desktop state.
    pub fn set_expanded(&self, expanded: bool) {
        self.state.update(|state| {
            state.set_expanded(expanded);
        });
    }

    /// Whether the sidebar currently shows its full contents.
    pub fn is_visible(&self) -> bool {
        if self.is_mobile.get() {
            self.state.with(|state| state.mobile_open)
        } else {
            self.state.with(|state| state.expanded)
        }
    }
}

/// Returns the nearest sidebar context, or a detached desktop one outside a provider.
pub fn use_sidebar() -> SidebarContext {
    use_context::<SidebarContext>().unwrap_or_else(|| {
        logging::warn!("sidebar rendered outside SidebarProvider");
        SidebarContext::detached()
    })
}

#[component]
/// Owns sidebar state, its cookie persistence, the Ctrl/Cmd+B shortcut, and viewport
/// tracking for every sidebar part rendered inside it.
pub fn SidebarProvider(
    /// Initial desktop state. Read from the `sidebar_state` cookie when omitted.
    #[prop(optional)]
    default_open: Option<bool>,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let mut initial = persistence::load_sidebar_state();
    if let Some(open) = default_open {
        initial.set_expanded(open);
    }
    let state = create_rw_signal(initial);

    let width = create_rw_signal(persistence::viewport_width());
    let is_mobile = Signal::derive(move || width.get().is_some_and(is_mobile_width));
    let context = SidebarContext { state, is_mobile };
    provide_context(context);

    let resize = window_event_listener(ev::resize, move |_| {
        width.set(persistence::viewport_width());
    });
    let shortcut = window_event_listener(ev::keydown, move |ev| {
        if is_toggle_shortcut(&ev.key(), ev.ctrl_key(), ev.meta_key()) {
            ev.prevent_default();
            context.toggle();
        }
    });
    on_cleanup(move || {
        resize.remove();
        shortcut.remove();
    });

    create_effect(move |previous: Option<bool>| {
        let expanded = state.with(|state| state.expanded);
        if previous.is_some_and(|previous| previous != expanded) {
            if let Err(err) = persistence::persist_sidebar_state(&state.get_untracked()) {
                logging::warn!("sidebar state not persisted: {err}");
            }
        }
        expanded
    });

    create_effect(move |_| {
        if !is_mobile.get() && state.with_untracked(|state| state.mobile_open) {
            state.update(|state| state.mobile_open = false);
        }
    });

    view! {
        <div
            class=merge_layout_class("ui-sidebar-provider", layout_class)
            data-ui-primitive="true"
            data-ui-kind="sidebar-provider"
            data-ui-state=move || state.with(|state| state.state_token())
            data-ui-mobile=move || bool_token(is_mobile.get())
        >
            {children()}
        </div>
    }
}

#[component]
/// Collapsible navigation column. Collapses to an icon rail on desktop and becomes an
/// off-canvas sheet below the mobile breakpoint.
pub fn Sidebar(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(into, default = "Sidebar".to_string())] aria_label: String,
    children: Children,
) -> impl IntoView {
    let sidebar = use_sidebar();
    let SidebarContext { state, is_mobile } = sidebar;
    let sheet_open = Signal::derive(move || is_mobile.get() && state.with(|state| state.mobile_open));

    view! {
        <Show when=move || sheet_open.get() fallback=|| ()>
            <div
                class="ui-sidebar-backdrop"
                data-ui-slot="backdrop"
                aria-hidden="true"
                on:click=move |_| state.update(|state| state.mobile_open = false)
            ></div>
        </Show>
        <aside
            class=merge_layout_class("ui-sidebar", layout_class)
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="sidebar"
            data-ui-state=move || state.with(|state| state.state_token())
            data-ui-variant=move || if is_mobile.get() { "sheet" } else { "rail" }
            data-ui-open=move || open_token(sidebar.is_visible())
        >
            {children()}
        </aside>
    }
}

#[component]
/// Button toggling the nearest sidebar.
pub fn SidebarTrigger(#[prop(optional)] layout_class: Option<&'static str>) -> impl IntoView {
    let sidebar = use_sidebar();

    view! {
        <Button
            variant=ButtonVariant::Ghost
            size=ButtonSize::Icon
            layout_class=layout_class.unwrap_or("ui-sidebar-trigger")
            ui_slot="sidebar-trigger"
            aria_label="Toggle sidebar"
            aria_expanded=Signal::derive(move || sidebar.is_visible())
            on_click=Callback::new(move |_| sidebar.toggle())
        >
            <Icon icon=IconName::PanelLeft />
        </Button>
    }
}

#[component]
/// Scrollable body of a [`Sidebar`].
pub fn SidebarContent(children: Children) -> impl IntoView {
    view! {
        <div class="ui-sidebar-content" data-ui-slot="content">
            {children()}
        </div>
    }
}

#[component]
/// Labelled group of sidebar items.
pub fn SidebarGroup(
    #[prop(optional, into)] label: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <section class="ui-sidebar-group" data-ui-slot="group">
            {label.map(|label| view! { <h4 data-ui-slot="group-label">{label}</h4> })}
            <ul role="list">{children()}</ul>
        </section>
    }
}

#[component]
/// Navigation entry. Shows only its icon while the desktop sidebar is collapsed.
pub fn SidebarItem(
    #[prop(into)] label: String,
    #[prop(optional)] icon: Option<IconName>,
    #[prop(optional, into)] active: MaybeSignal<bool>,
    #[prop(optional)] on_select: Option<Callback<()>>,
) -> impl IntoView {
    let sidebar = use_sidebar();
    let show_label = Signal::derive(move || sidebar.is_mobile.get() || sidebar.state.with(|state| state.expanded));
    let active = Signal::derive(move || active.get());

    view! {
        <li data-ui-slot="item">
            <Button
                variant=ButtonVariant::Ghost
                ui_slot="sidebar-item"
                aria_label=label.clone()
                aria_current=Signal::derive(move || {
                    if active.get() { "page".to_string() } else { String::new() }
                })
                selected=active
                leading_icon=icon.unwrap_or(IconName::ChevronRight)
                on_click=Callback::new(move |_| {
                    if let Some(on_select) = on_select.as_ref() {
                        on_select.call(());
                    }
                    if sidebar.is_mobile.get_untracked() {
                        sidebar.state.update(|state| state.mobile_open = false);
                    }
                })
            >
                <span data-ui-slot="label" hidden=move || !show_label.get()>
                    {label}
                </span>
            </Button>
        </li>
    }
}
