use super::*;

/// `aria-checked` value for a tri-state checkbox.
pub(crate) fn checked_token(checked: bool, indeterminate: bool) -> &'static str {
    if indeterminate {
        "mixed"
    } else {
        bool_token(checked)
    }
}

#[component]
/// Button with variant, size and state tokens plus optional icon slots.
pub fn Button(
    #[prop(default = ButtonVariant::Default)] variant: ButtonVariant,
    #[prop(default = ButtonSize::Md)] size: ButtonSize,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] role: Option<String>,
    #[prop(optional, into)] aria_label: MaybeSignal<String>,
    #[prop(optional, into)] aria_controls: MaybeSignal<String>,
    #[prop(optional, into)] aria_expanded: Option<MaybeSignal<bool>>,
    #[prop(optional, into)] aria_selected: Option<MaybeSignal<bool>>,
    #[prop(optional, into)] aria_haspopup: MaybeSignal<String>,
    #[prop(optional, into)] aria_current: MaybeSignal<String>,
    #[prop(optional, into)] tabindex: MaybeSignal<i32>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] selected: MaybeSignal<bool>,
    #[prop(optional)] leading_icon: Option<IconName>,
    #[prop(optional)] trailing_icon: Option<IconName>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    #[prop(optional)] on_keydown: Option<Callback<KeyboardEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class=merge_layout_class("ui-button", layout_class)
            id=id
            role=role
            aria-label=move || Some(aria_label.get()).filter(|label| !label.is_empty())
            aria-controls=move || Some(aria_controls.get()).filter(|id| !id.is_empty())
            aria-expanded=move || aria_expanded.map(|expanded| bool_token(expanded.get()))
            aria-haspopup=move || Some(aria_haspopup.get()).filter(|kind| !kind.is_empty())
            aria-current=move || Some(aria_current.get()).filter(|current| !current.is_empty())
            aria-selected=move || aria_selected.map(|selected| bool_token(selected.get()))
            tabindex=move || tabindex.get()
            disabled=move || disabled.get()
            data-ui-primitive="true"
            data-ui-kind="button"
            data-ui-slot=ui_slot
            data-ui-variant=variant.token()
            data-ui-size=size.token()
            data-ui-state=move || if selected.get() { "active" } else { "idle" }
            data-ui-disabled=move || bool_token(disabled.get())
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
            on:keydown=move |ev| {
                if let Some(on_keydown) = on_keydown.as_ref() {
                    on_keydown.call(ev);
                }
            }
        >
            {leading_icon.map(|icon| view! { <Icon icon size=IconSize::Sm /> })}
            {children()}
            {trailing_icon.map(|icon| view! { <Icon icon size=IconSize::Sm /> })}
        </button>
    }
}

#[component]
/// Tri-state checkbox rendered as `role="checkbox"` so it can show an indeterminate mark.
pub fn Checkbox(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] aria_label: MaybeSignal<String>,
    #[prop(optional, into)] checked: MaybeSignal<bool>,
    #[prop(optional, into)] indeterminate: MaybeSignal<bool>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    /// Receives the requested checked state. Indeterminate boxes request `true`.
    #[prop(optional)]
    on_toggle: Option<Callback<bool>>,
) -> impl IntoView {
    let toggle = move || {
        if disabled.get_untracked() {
            return;
        }
        let next = indeterminate.get_untracked() || !checked.get_untracked();
        if let Some(on_toggle) = on_toggle.as_ref() {
            on_toggle.call(next);
        }
    };

    view! {
        <button
            type="button"
            class=merge_layout_class("ui-checkbox", layout_class)
            id=id
            role="checkbox"
            aria-label=move || aria_label.get()
            aria-checked=move || checked_token(checked.get(), indeterminate.get())
            disabled=move || disabled.get()
            data-ui-primitive="true"
            data-ui-kind="checkbox"
            data-ui-state=move || {
                if indeterminate.get() {
                    "indeterminate"
                } else if checked.get() {
                    "checked"
                } else {
                    "unchecked"
                }
            }
            data-ui-disabled=move || bool_token(disabled.get())
            on:click=move |_| toggle()
        >
            <span data-ui-slot="indicator" aria-hidden="true">
                {move || {
                    if indeterminate.get() {
                        Some(view! { <Icon icon=IconName::Minus size=IconSize::Xs /> }.into_view())
                    } else if checked.get() {
                        Some(view! { <Icon icon=IconName::Check size=IconSize::Xs /> }.into_view())
                    } else {
                        None
                    }
                }}
            </span>
        </button>
    }
}

#[component]
/// On/off switch with `role="switch"` semantics.
pub fn Switch(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] aria_label: MaybeSignal<String>,
    #[prop(optional, into)] checked: MaybeSignal<bool>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] on_toggle: Option<Callback<bool>>,
) -> impl IntoView {
    let handle_toggle = move || {
        if disabled.get_untracked() {
            return;
        }
        if let Some(on_toggle) = on_toggle.as_ref() {
            on_toggle.call(!checked.get_untracked());
        }
    };

    view! {
        <button
            type="button"
            class=merge_layout_class("ui-switch", layout_class)
            id=id
            role="switch"
            aria-label=move || aria_label.get()
            aria-checked=move || bool_token(checked.get())
            disabled=move || disabled.get()
            data-ui-primitive="true"
            data-ui-kind="switch"
            data-ui-state=move || if checked.get() { "checked" } else { "unchecked" }
            data-ui-disabled=move || bool_token(disabled.get())
            on:click=move |_| handle_toggle()
        >
            <span data-ui-slot="thumb"></span>
        </button>
    }
}

#[component]
/// Single-line text input.
pub fn TextField(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional, into)] aria_controls: Option<String>,
    #[prop(optional, into)] aria_activedescendant: MaybeSignal<String>,
    #[prop(optional)] role: Option<&'static str>,
    #[prop(optional)] input_type: Option<&'static str>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    #[prop(optional)] node_ref: NodeRef<html::Input>,
    #[prop(optional, into)] value: MaybeSignal<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] on_input: Option<Callback<String>>,
    #[prop(optional)] on_keydown: Option<Callback<KeyboardEvent>>,
) -> impl IntoView {
    view! {
        <input
            class=merge_layout_class("ui-input", layout_class)
            id=id
            placeholder=placeholder
            aria-label=aria_label
            aria-controls=aria_controls
            aria-activedescendant=move || Some(aria_activedescendant.get()).filter(|id| !id.is_empty())
            role=role
            autocomplete="off"
            type=input_type.unwrap_or("text")
            node_ref=node_ref
            prop:value=move || value.get()
            disabled=move || disabled.get()
            data-ui-primitive="true"
            data-ui-kind="input"
            data-ui-slot=ui_slot
            data-ui-disabled=move || bool_token(disabled.get())
            on:input=move |ev| {
                if let Some(on_input) = on_input.as_ref() {
                    on_input.call(event_target_value(&ev));
                }
            }
            on:keydown=move |ev| {
                if let Some(on_keydown) = on_keydown.as_ref() {
                    on_keydown.call(ev);
                }
            }
        />
    }
}

#[component]
/// Native select populated from `(value, label)` pairs.
pub fn SelectField(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    options: Vec<(String, String)>,
    #[prop(optional, into)] value: MaybeSignal<String>,
    #[prop(optional)] on_change: Option<Callback<String>>,
) -> impl IntoView {
    let value = Signal::derive(move || value.get());
    let options = options
        .into_iter()
        .map(|(option_value, label)| {
            let selected_value = option_value.clone();
            view! {
                <option
                    value=option_value
                    selected=move || value.get() == selected_value
                >
                    {label}
                </option>
            }
        })
        .collect_view();

    view! {
        <select
            class=merge_layout_class("ui-select", layout_class)
            id=id
            aria-label=aria_label
            prop:value=move || value.get()
            data-ui-primitive="true"
            data-ui-kind="select"
            data-ui-slot=ui_slot
            on:change=move |ev| {
                if let Some(on_change) = on_change.as_ref() {
                    on_change.call(event_target_value(&ev));
                }
            }
        >
            {options}
        </select>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indeterminate_wins_over_checked() {
        assert_eq!(checked_token(true, true), "mixed");
        assert_eq!(checked_token(true, false), "true");
        assert_eq!(checked_token(false, false), "false");
    }
}
