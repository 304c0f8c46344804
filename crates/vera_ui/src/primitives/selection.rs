use vera_state::{ComboboxState, MultiSelection, SelectOption};

use super::*;

fn option_id(id_prefix: &str, value: &str) -> String {
    format!("{id_prefix}-option-{value}")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListKey {
    Next,
    Previous,
    Commit,
    Close,
    Erase,
}

fn list_key(key: &str) -> Option<ListKey> {
    match key {
        "ArrowDown" => Some(ListKey::Next),
        "ArrowUp" => Some(ListKey::Previous),
        "Enter" => Some(ListKey::Commit),
        "Escape" => Some(ListKey::Close),
        "Backspace" => Some(ListKey::Erase),
        _ => None,
    }
}

/// Value of the highlighted option if it can be picked.
fn highlighted_value(state: &ComboboxState, options: &[SelectOption]) -> Option<String> {
    let index = state.highlighted?;
    state
        .visible(options)
        .get(index)
        .filter(|option| !option.disabled)
        .map(|option| option.value.clone())
}

fn active_descendant(id_prefix: &str, state: &ComboboxState, options: &[SelectOption]) -> String {
    state
        .highlighted
        .and_then(|index| state.visible(options).get(index).copied())
        .map(|option| option_id(id_prefix, &option.value))
        .unwrap_or_default()
}

#[component]
/// Searchable single-value select.
///
/// Arrow keys move the highlight over enabled matches, Enter commits it, and Escape
/// closes the list. Picking the current value again clears it.
pub fn Combobox(
    options: Vec<SelectOption>,
    #[prop(default = None)] default_value: Option<String>,
    #[prop(into, default = "Select an option…".to_string())] placeholder: String,
    #[prop(into, default = "Search…".to_string())] search_placeholder: String,
    #[prop(into, default = "No results.".to_string())] empty_label: String,
    #[prop(default = "combobox")] id_prefix: &'static str,
    #[prop(optional)] on_change: Option<Callback<Option<String>>>,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    let options = store_value(options);
    let state = create_rw_signal(ComboboxState {
        value: default_value,
        ..ComboboxState::default()
    });
    let open = Signal::derive(move || state.with(|state| state.open));
    let visible = create_memo(move |_| {
        state.with(|state| {
            options.with_value(|options| {
                state.visible(options).into_iter().cloned().collect::<Vec<_>>()
            })
        })
    });
    let listbox_id = format!("{id_prefix}-listbox");

    let emit = move |value: Option<String>| {
        if let Some(on_change) = on_change.as_ref() {
            on_change.call(value);
        }
    };
    let pick = move |value: String| {
        let next = state
            .try_update(|state| {
                state.select(&value);
                state.set_open(false);
                state.value.clone()
            })
            .flatten();
        emit(next);
    };

    let on_keydown = Callback::new(move |ev: KeyboardEvent| {
        let Some(key) = list_key(&ev.key()) else {
            return;
        };
        match key {
            ListKey::Next => {
                ev.prevent_default();
                options.with_value(|options| state.update(|state| state.highlight_next(options)));
            }
            ListKey::Previous => {
                ev.prevent_default();
                options.with_value(|options| {
                    state.update(|state| state.highlight_previous(options))
                });
            }
            ListKey::Commit => {
                ev.prevent_default();
                let before = state.with_untracked(|state| state.value.clone());
                let after = options
                    .with_value(|options| state.try_update(|state| state.commit(options)))
                    .flatten();
                if after != before {
                    emit(after);
                }
            }
            ListKey::Close => state.update(|state| state.set_open(false)),
            ListKey::Erase => {}
        }
    });

    view! {
        <div
            class=merge_layout_class("ui-combobox", layout_class)
            data-ui-primitive="true"
            data-ui-kind="combobox"
            data-ui-state=move || open_token(open.get())
        >
            <Button
                variant=ButtonVariant::Outline
                role="combobox"
                ui_slot="trigger"
                aria_controls=listbox_id.clone()
                aria_expanded=open
                aria_haspopup="listbox"
                trailing_icon=IconName::ChevronsUpDown
                on_click=Callback::new(move |_| {
                    state.update(|state| {
                        let next = !state.open;
                        state.set_open(next);
                    })
                })
            >
                <span data-ui-slot="value">
                    {move || {
                        options
                            .with_value(|options| {
                                state.with(|state| state.selected_label(options).map(str::to_string))
                            })
                            .unwrap_or_else(|| placeholder.clone())
                    }}
                </span>
            </Button>
            <PopoverSurface open=open>
                <TextField
                    ui_slot="search"
                    placeholder=search_placeholder
                    aria_label="Search options"
                    aria_controls=listbox_id.clone()
                    aria_activedescendant=Signal::derive(move || {
                        state.with(|state| {
                            options.with_value(|options| active_descendant(id_prefix, state, options))
                        })
                    })
                    value=Signal::derive(move || state.with(|state| state.query.clone()))
                    on_input=Callback::new(move |query: String| state.update(|state| state.set_query(query)))
                    on_keydown=on_keydown
                />
                <ul id=listbox_id role="listbox" data-ui-slot="listbox">
                    {move || {
                        let matches = visible.get();
                        if matches.is_empty() {
                            return view! {
                                <li role="presentation" data-ui-slot="empty">{empty_label.clone()}</li>
                            }
                            .into_view();
                        }
                        matches
                            .into_iter()
                            .enumerate()
                            .map(|(index, option)| {
                                let SelectOption { value, label, disabled } = option;
                                let dom_id = option_id(id_prefix, &value);
                                let highlighted = Signal::derive(move || {
                                    state.with(|state| state.highlighted == Some(index))
                                });
                                let selected = {
                                    let value = value.clone();
                                    Signal::derive(move || {
                                        state.with(|state| state.value.as_deref() == Some(value.as_str()))
                                    })
                                };
                                view! {
                                    <li
                                        id=dom_id
                                        role="option"
                                        aria-selected=move || bool_token(selected.get())
                                        aria-disabled=bool_token(disabled)
                                        data-ui-slot="option"
                                        data-ui-state=move || if highlighted.get() { "highlighted" } else { "idle" }
                                        on:click=move |_| {
                                            if !disabled {
                                                pick(value.clone());
                                            }
                                        }
                                    >
                                        <span data-ui-slot="check" aria-hidden="true">
                                            {move || selected.get().then(|| view! {
                                                <Icon icon=IconName::Check size=IconSize::Xs />
                                            })}
                                        </span>
                                        {label}
                                    </li>
                                }
                            })
                            .collect_view()
                    }}
                </ul>
            </PopoverSurface>
        </div>
    }
}

#[component]
/// Searchable multi-value select with badge summary.
///
/// At most `max_badges` labels render as badges; the rest collapse into a `+N more`
/// badge. With `max_selected`, further picks are rejected until something is removed.
pub fn MultiSelect(
    options: Vec<SelectOption>,
    #[prop(optional)] default_selected: Vec<String>,
    #[prop(optional)] max_selected: Option<usize>,
    #[prop(default = 3)] max_badges: usize,
    #[prop(into, default = "Select options…".to_string())] placeholder: String,
    #[prop(into, default = "Search…".to_string())] search_placeholder: String,
    #[prop(into, default = "No results.".to_string())] empty_label: String,
    #[prop(default = "multi-select")] id_prefix: &'static str,
    #[prop(optional)] on_change: Option<Callback<Vec<String>>>,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    let mut initial = max_selected
        .map(MultiSelection::with_limit)
        .unwrap_or_default();
    for value in &default_selected {
        if let Err(err) = initial.toggle(value) {
            logging::warn!("default selection `{value}` dropped: {err}");
        }
    }

    let options = store_value(options);
    let selection = create_rw_signal(initial);
    let list = create_rw_signal(ComboboxState::default());
    let open = Signal::derive(move || list.with(|list| list.open));
    let visible = create_memo(move |_| {
        list.with(|list| {
            options.with_value(|options| {
                list.visible(options).into_iter().cloned().collect::<Vec<_>>()
            })
        })
    });
    let badges = create_memo(move |_| {
        selection.with(|selection| options.with_value(|options| selection.badges(options, max_badges)))
    });
    let listbox_id = format!("{id_prefix}-listbox");

    let emit = move || {
        if let Some(on_change) = on_change.as_ref() {
            on_change.call(selection.with_untracked(|selection| selection.selected().to_vec()));
        }
    };
    let toggle_value = move |value: String| {
        match selection.try_update(|selection| selection.toggle(&value)) {
            Some(Ok(_)) => emit(),
            Some(Err(err)) => logging::warn!("selection of `{value}` rejected: {err}"),
            None => {}
        }
    };

    let on_keydown = Callback::new(move |ev: KeyboardEvent| {
        let Some(key) = list_key(&ev.key()) else {
            return;
        };
        match key {
            ListKey::Next => {
                ev.prevent_default();
                options.with_value(|options| list.update(|list| list.highlight_next(options)));
            }
            ListKey::Previous => {
                ev.prevent_default();
                options.with_value(|options| list.update(|list| list.highlight_previous(options)));
            }
            ListKey::Commit => {
                ev.prevent_default();
                let picked = list.with_untracked(|list| {
                    options.with_value(|options| highlighted_value(list, options))
                });
                if let Some(value) = picked {
                    toggle_value(value);
                }
            }
            ListKey::Close => list.update(|list| list.set_open(false)),
            ListKey::Erase => {
                if !list.with_untracked(|list| list.query.is_empty()) {
                    return;
                }
                let last = selection.with_untracked(|selection| selection.selected().last().cloned());
                if let Some(last) = last {
                    selection.update(|selection| {
                        selection.remove(&last);
                    });
                    emit();
                }
            }
        }
    });

    view! {
        <div
            class=merge_layout_class("ui-multi-select", layout_class)
            data-ui-primitive="true"
            data-ui-kind="multi-select"
            data-ui-state=move || open_token(open.get())
            data-ui-full=move || bool_token(selection.with(|selection| selection.is_full()))
        >
            <Button
                variant=ButtonVariant::Outline
                role="combobox"
                ui_slot="trigger"
                aria_controls=listbox_id.clone()
                aria_expanded=open
                aria_haspopup="listbox"
                trailing_icon=IconName::ChevronsUpDown
                on_click=Callback::new(move |_| {
                    list.update(|list| {
                        let next = !list.open;
                        list.set_open(next);
                    })
                })
            >
                <span data-ui-slot="value">
                    {move || {
                        let overflow = badges.get();
                        if overflow.visible.is_empty() {
                            return placeholder.clone().into_view();
                        }
                        let hidden = overflow.hidden;
                        view! {
                            {overflow
                                .visible
                                .into_iter()
                                .map(|label| view! {
                                    <Badge variant=BadgeVariant::Secondary ui_slot="selected">{label}</Badge>
                                })
                                .collect_view()}
                            {(hidden > 0).then(|| view! {
                                <Badge variant=BadgeVariant::Outline ui_slot="overflow">
                                    {format!("+{hidden} more")}
                                </Badge>
                            })}
                        }
                        .into_view()
                    }}
                </span>
            </Button>
            <PopoverSurface open=open>
                <TextField
                    ui_slot="search"
                    placeholder=search_placeholder
                    aria_label="Search options"
                    aria_controls=listbox_id.clone()
                    aria_activedescendant=Signal::derive(move || {
                        list.with(|list| {
                            options.with_value(|options| active_descendant(id_prefix, list, options))
                        })
                    })
                    value=Signal::derive(move || list.with(|list| list.query.clone()))
                    on_input=Callback::new(move |query: String| list.update(|list| list.set_query(query)))
                    on_keydown=on_keydown
                />
                <ul
                    id=listbox_id
                    role="listbox"
                    aria-multiselectable="true"
                    data-ui-slot="listbox"
                >
                    {move || {
                        let matches = visible.get();
                        if matches.is_empty() {
                            return view! {
                                <li role="presentation" data-ui-slot="empty">{empty_label.clone()}</li>
                            }
                            .into_view();
                        }
                        matches
                            .into_iter()
                            .enumerate()
                            .map(|(index, option)| {
                                let SelectOption { value, label, disabled } = option;
                                let dom_id = option_id(id_prefix, &value);
                                let highlighted = Signal::derive(move || {
                                    list.with(|list| list.highlighted == Some(index))
                                });
                                let selected = {
                                    let value = value.clone();
                                    Signal::derive(move || selection.with(|selection| selection.contains(&value)))
                                };
                                let blocked = Signal::derive(move || {
                                    disabled || (!selected.get() && selection.with(|selection| selection.is_full()))
                                });
                                view! {
                                    <li
                                        id=dom_id
                                        role="option"
                                        aria-selected=move || bool_token(selected.get())
                                        aria-disabled=move || bool_token(blocked.get())
                                        data-ui-slot="option"
                                        data-ui-state=move || if highlighted.get() { "highlighted" } else { "idle" }
                                        on:click=move |_| {
                                            if !disabled {
                                                toggle_value(value.clone());
                                            }
                                        }
                                    >
                                        <Checkbox
                                            checked=selected
                                            disabled=blocked
                                            aria_label=label.clone()
                                        />
                                        {label}
                                    </li>
                                }
                            })
                            .collect_view()
                    }}
                </ul>
                <Show when=move || selection.with(|selection| !selection.selected().is_empty()) fallback=|| ()>
                    <Button
                        variant=ButtonVariant::Ghost
                        size=ButtonSize::Sm
                        ui_slot="clear"
                        on_click=Callback::new(move |_| {
                            selection.update(|selection| selection.clear());
                            emit();
                        })
                    >
                        "Clear selection"
                    </Button>
                </Show>
            </PopoverSurface>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn frameworks() -> Vec<SelectOption> {
        vec![
            SelectOption::new("leptos", "Leptos"),
            SelectOption::new("yew", "Yew").disabled(),
            SelectOption::new("dioxus", "Dioxus"),
        ]
    }

    #[test]
    fn list_keys_cover_navigation_and_commit() {
        assert_eq!(list_key("ArrowDown"), Some(ListKey::Next));
        assert_eq!(list_key("ArrowUp"), Some(ListKey::Previous));
        assert_eq!(list_key("Enter"), Some(ListKey::Commit));
        assert_eq!(list_key("Escape"), Some(ListKey::Close));
        assert_eq!(list_key("Backspace"), Some(ListKey::Erase));
        assert_eq!(list_key("Tab"), None);
    }

    #[test]
    fn highlighted_value_skips_disabled_options() {
        let options = frameworks();
        let mut state = ComboboxState::default();
        assert_eq!(highlighted_value(&state, &options), None);

        state.highlighted = Some(1);
        assert_eq!(highlighted_value(&state, &options), None);

        state.highlight_next(&options);
        assert_eq!(highlighted_value(&state, &options).as_deref(), Some("dioxus"));
    }

    #[test]
    fn active_descendant_tracks_filtered_highlight() {
        let options = frameworks();
        let mut state = ComboboxState::default();
        assert_eq!(active_descendant("fw", &state, &options), "");

        state.set_query("diox");
        state.highlight_next(&options);
        assert_eq!(active_descendant("fw", &state, &options), "fw-option-dioxus");
    }
}
