use vera_state::{next_tab_index, AccordionMode, AccordionState, TabsState};

use super::*;
use crate::persistence;

#[derive(Clone, Copy)]
struct AccordionContext {
    state: RwSignal<AccordionState>,
}

#[component]
/// Stack of collapsible sections sharing one open-item policy.
pub fn Accordion(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(default = AccordionMode::default())] mode: AccordionMode,
    /// Items expanded on first render.
    #[prop(optional)]
    default_open: Vec<String>,
    children: Children,
) -> impl IntoView {
    let state = create_rw_signal(AccordionState::with_open(mode, default_open));
    provide_context(AccordionContext { state });

    view! {
        <div
            class=merge_layout_class("ui-accordion", layout_class)
            data-ui-primitive="true"
            data-ui-kind="accordion"
            data-ui-variant=match mode {
                AccordionMode::Single { .. } => "single",
                AccordionMode::Multiple => "multiple",
            }
        >
            {children()}
        </div>
    }
}

#[component]
/// One collapsible section of an [`Accordion`].
pub fn AccordionItem(
    #[prop(into)] value: String,
    #[prop(into)] title: String,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    children: ChildrenFn,
) -> impl IntoView {
    let Some(AccordionContext { state }) = use_context::<AccordionContext>() else {
        logging::warn!("accordion item `{value}` rendered outside an accordion");
        return ().into_view();
    };

    let trigger_id = format!("accordion-trigger-{value}");
    let content_id = format!("accordion-content-{value}");
    let region_id = content_id.clone();
    let labelled_by = trigger_id.clone();
    let item = store_value(value);
    let open = Signal::derive(move || {
        item.with_value(|value| state.with(|state| state.is_open(value)))
    });

    view! {
        <div
            class="ui-accordion-item"
            data-ui-primitive="true"
            data-ui-kind="accordion-item"
            data-ui-state=move || open_token(open.get())
        >
            <h3 data-ui-slot="heading">
                <Button
                    layout_class="ui-accordion-trigger"
                    ui_slot="trigger"
                    variant=ButtonVariant::Ghost
                    id=trigger_id
                    aria_controls=content_id
                    aria_expanded=open
                    disabled=disabled
                    trailing_icon=IconName::ChevronDown
                    on_click=Callback::new(move |_| {
                        item.with_value(|value| state.update(|state| {
                            state.toggle(value);
                        }));
                    })
                >
                    {title}
                </Button>
            </h3>
            <Show when=move || open.get() fallback=|| ()>
                <div
                    id=region_id.clone()
                    role="region"
                    aria-labelledby=labelled_by.clone()
                    data-ui-slot="content"
                >
                    {children()}
                </div>
            </Show>
        </div>
    }
    .into_view()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Trigger definition for [`Tabs`].
pub struct TabItem {
    /// Value matched by [`TabPanel`] and written to the query parameter.
    pub value: &'static str,
    /// Trigger label.
    pub label: &'static str,
    /// Disabled triggers are skipped by keyboard navigation.
    pub disabled: bool,
}

impl TabItem {
    /// Enabled tab.
    pub const fn new(value: &'static str, label: &'static str) -> Self {
        Self {
            value,
            label,
            disabled: false,
        }
    }

    /// Marks the tab disabled.
    pub const fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }
}

/// Index of the tab a navigation key moves focus to, skipping disabled tabs.
///
/// `Home` and `End` land on the first and last enabled tab. Returns `None` for other keys
/// or when every tab is disabled.
pub(crate) fn next_enabled_tab(items: &[TabItem], current: usize, key: &str) -> Option<usize> {
    let len = items.len();
    let (mut index, step) = match key {
        "Home" => (0, "ArrowRight"),
        "End" => (len.checked_sub(1)?, "ArrowLeft"),
        _ => (next_tab_index(current, len, key)?, key),
    };
    for _ in 0..len {
        if items.get(index).is_some_and(|item| !item.disabled) {
            return Some(index);
        }
        index = next_tab_index(index, len, step)?;
    }
    None
}

#[derive(Clone, Copy)]
struct TabsContext {
    selected: Memo<String>,
    id_prefix: &'static str,
}

#[component]
/// Tab list with panels, optionally mirrored into a URL query parameter.
///
/// With `query_param` set, the initial tab is read from `location.search` and every
/// selection rewrites the parameter through `history.replaceState`, so reloads and shared
/// links land on the same tab. Selecting the default tab removes the parameter.
pub fn Tabs(
    items: Vec<TabItem>,
    #[prop(optional)] default_value: Option<&'static str>,
    #[prop(optional)] query_param: Option<&'static str>,
    #[prop(default = "tabs")] id_prefix: &'static str,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] on_change: Option<Callback<String>>,
    children: Children,
) -> impl IntoView {
    let default_value = default_value
        .or_else(|| items.first().map(|item| item.value))
        .unwrap_or_default();
    let initial = match query_param {
        Some(param) => {
            let values = items.iter().map(|item| item.value).collect::<Vec<_>>();
            TabsState::from_query(
                &persistence::current_search(),
                param,
                &values,
                default_value,
            )
        }
        None => TabsState {
            value: default_value.to_string(),
            param: String::new(),
            default_value: default_value.to_string(),
        },
    };

    let state = create_rw_signal(initial);
    let selected = create_memo(move |_| state.with(|state| state.value.clone()));
    provide_context(TabsContext {
        selected,
        id_prefix,
    });

    let select = move |value: &'static str| {
        if selected.get_untracked() == value {
            return;
        }
        match query_param {
            Some(_) => {
                let search = state
                    .try_update(|state| state.select(value, &persistence::current_search()))
                    .unwrap_or_default();
                if let Err(err) = persistence::replace_search(&search) {
                    logging::warn!("tab query sync failed: {err}");
                }
            }
            None => state.update(|state| state.value = value.to_string()),
        }
        if let Some(on_change) = on_change.as_ref() {
            on_change.call(value.to_string());
        }
    };

    let keyboard_items = items.clone();
    let on_keydown = move |ev: KeyboardEvent| {
        let current = selected.with_untracked(|selected| {
            keyboard_items
                .iter()
                .position(|item| item.value == selected.as_str())
                .unwrap_or(0)
        });
        if let Some(next) = next_enabled_tab(&keyboard_items, current, &ev.key()) {
            ev.prevent_default();
            select(keyboard_items[next].value);
        }
    };

    let triggers = items
        .into_iter()
        .map(|item| {
            let is_selected = Signal::derive(move || selected.with(|selected| selected == item.value));
            view! {
                <Button
                    role="tab"
                    id=format!("{id_prefix}-tab-{}", item.value)
                    aria_controls=format!("{id_prefix}-panel-{}", item.value)
                    aria_selected=is_selected
                    selected=is_selected
                    tabindex=Signal::derive(move || if is_selected.get() { 0 } else { -1 })
                    disabled=item.disabled
                    variant=ButtonVariant::Ghost
                    ui_slot="tab"
                    on_click=Callback::new(move |_| select(item.value))
                >
                    {item.label}
                </Button>
            }
        })
        .collect_view();

    view! {
        <div
            class=merge_layout_class("ui-tabs", layout_class)
            data-ui-primitive="true"
            data-ui-kind="tabs"
            data-ui-synced=bool_token(query_param.is_some())
        >
            <div
                class="ui-tab-list"
                role="tablist"
                aria-label=aria_label
                data-ui-kind="tab-list"
                on:keydown=on_keydown
            >
                {triggers}
            </div>
            {children()}
        </div>
    }
}

#[component]
/// Content shown while its tab is selected. Must be rendered inside [`Tabs`].
pub fn TabPanel(value: &'static str, children: ChildrenFn) -> impl IntoView {
    let Some(TabsContext {
        selected,
        id_prefix,
    }) = use_context::<TabsContext>()
    else {
        logging::warn!("tab panel `{value}` rendered outside tabs");
        return ().into_view();
    };

    view! {
        <Show when=move || selected.with(|selected| selected == value) fallback=|| ()>
            <div
                class="ui-tab-panel"
                role="tabpanel"
                tabindex="0"
                id=format!("{id_prefix}-panel-{value}")
                aria-labelledby=format!("{id_prefix}-tab-{value}")
                data-ui-kind="tab-panel"
            >
                {children()}
            </div>
        </Show>
    }
    .into_view()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn tabs() -> Vec<TabItem> {
        vec![
            TabItem::new("overview", "Overview").disabled(),
            TabItem::new("usage", "Usage"),
            TabItem::new("props", "Props").disabled(),
            TabItem::new("api", "API"),
        ]
    }

    #[test]
    fn arrow_keys_skip_disabled_tabs_and_wrap() {
        let items = tabs();
        assert_eq!(next_enabled_tab(&items, 1, "ArrowRight"), Some(3));
        assert_eq!(next_enabled_tab(&items, 3, "ArrowRight"), Some(1));
        assert_eq!(next_enabled_tab(&items, 1, "ArrowLeft"), Some(3));
        assert_eq!(next_enabled_tab(&items, 3, "ArrowUp"), Some(1));
    }

    #[test]
    fn home_and_end_land_on_enabled_edges() {
        let items = tabs();
        assert_eq!(next_enabled_tab(&items, 3, "Home"), Some(1));
        assert_eq!(next_enabled_tab(&items, 1, "End"), Some(3));
    }

    #[test]
    fn other_keys_and_fully_disabled_lists_do_nothing() {
        let items = tabs();
        assert_eq!(next_enabled_tab(&items, 1, "Enter"), None);

        let disabled = vec![
            TabItem::new("a", "A").disabled(),
            TabItem::new("b", "B").disabled(),
        ];
        assert_eq!(next_enabled_tab(&disabled, 0, "ArrowRight"), None);
        assert_eq!(next_enabled_tab(&disabled, 0, "End"), None);
        assert_eq!(next_enabled_tab(&[], 0, "Home"), None);
    }
}
