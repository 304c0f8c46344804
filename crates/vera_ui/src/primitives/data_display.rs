use super::*;

/// Up to two uppercase initials for an avatar fallback.
///
/// Uses the first letter of the first and last words, so "Ada King Lovelace" gives "AL".
pub fn initials(name: &str) -> String {
    let mut words = name.split_whitespace();
    let first = words.next().and_then(|word| word.chars().next());
    let last = words.last().and_then(|word| word.chars().next());
    first
        .into_iter()
        .chain(last)
        .flat_map(char::to_uppercase)
        .collect()
}

#[component]
/// Bordered card surface.
pub fn Card(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional, into)] description: Option<String>,
    children: Children,
) -> impl IntoView {
    let has_header = title.is_some() || description.is_some();
    view! {
        <article
            class=merge_layout_class("ui-card", layout_class)
            data-ui-primitive="true"
            data-ui-kind="card"
            data-ui-slot=ui_slot
        >
            {has_header.then(|| view! {
                <header data-ui-slot="header">
                    {title.map(|title| view! { <h3 data-ui-slot="title">{title}</h3> })}
                    {description.map(|description| view! { <p data-ui-slot="description">{description}</p> })}
                </header>
            })}
            <div data-ui-slot="content">{children()}</div>
        </article>
    }
}

#[component]
/// Inline text with role and tone tokens.
pub fn Text(
    #[prop(default = TextRole::Body)] role: TextRole,
    #[prop(default = TextTone::Primary)] tone: TextTone,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <span
            class=merge_layout_class("ui-text", layout_class)
            data-ui-primitive="true"
            data-ui-kind="text"
            data-ui-variant=role.token()
            data-ui-tone=tone.token()
        >
            {children()}
        </span>
    }
}

#[component]
/// Section heading.
pub fn Heading(
    #[prop(default = TextRole::Title)] role: TextRole,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <h2
            class=merge_layout_class("ui-heading", layout_class)
            data-ui-primitive="true"
            data-ui-kind="heading"
            data-ui-variant=role.token()
        >
            {children()}
        </h2>
    }
}

#[component]
/// Compact status badge.
pub fn Badge(
    #[prop(default = BadgeVariant::Default)] variant: BadgeVariant,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <span
            class=merge_layout_class("ui-badge", layout_class)
            data-ui-primitive="true"
            data-ui-kind="badge"
            data-ui-slot=ui_slot
            data-ui-variant=variant.token()
        >
            {children()}
        </span>
    }
}

#[component]
/// Circular avatar that falls back to initials when the image is missing or fails to load.
pub fn Avatar(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] src: Option<String>,
    /// Person or entity name, used for `alt` text and the initials fallback.
    #[prop(into)]
    name: String,
    #[prop(default = IconSize::Lg)] size: IconSize,
) -> impl IntoView {
    let failed = create_rw_signal(src.is_none());
    let fallback = initials(&name);

    view! {
        <span
            class=merge_layout_class("ui-avatar", layout_class)
            data-ui-primitive="true"
            data-ui-kind="avatar"
            data-ui-size=size.token()
            data-ui-state=move || if failed.get() { "fallback" } else { "image" }
        >
            {src.map(|src| view! {
                <img
                    data-ui-slot="image"
                    src=src
                    alt=name.clone()
                    hidden=move || failed.get()
                    on:error=move |_| failed.set(true)
                />
            })}
            <Show when=move || failed.get() fallback=|| ()>
                <span data-ui-slot="fallback" aria-hidden="true">{fallback.clone()}</span>
            </Show>
        </span>
    }
}

#[component]
/// Placeholder block for empty collections.
pub fn EmptyState(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] icon: Option<IconName>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-empty-state", layout_class)
            data-ui-primitive="true"
            data-ui-kind="empty-state"
        >
            {icon.map(|icon| view! { <Icon icon size=IconSize::Lg /> })}
            {children()}
        </div>
    }
}

#[component]
/// Scrollable data table.
pub fn Table(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="ui-table-container" data-ui-slot="table-container">
            <table
                class=merge_layout_class("ui-table", layout_class)
                aria-label=aria_label
                data-ui-primitive="true"
                data-ui-kind="table"
            >
                {children()}
            </table>
        </div>
    }
}

#[component]
/// Table caption.
pub fn TableCaption(children: Children) -> impl IntoView {
    view! { <caption data-ui-kind="table-caption">{children()}</caption> }
}

#[component]
/// Table `<thead>`.
pub fn TableHeader(children: Children) -> impl IntoView {
    view! { <thead data-ui-kind="table-header">{children()}</thead> }
}

#[component]
/// Table `<tbody>`.
pub fn TableBody(children: Children) -> impl IntoView {
    view! { <tbody data-ui-kind="table-body">{children()}</tbody> }
}

#[component]
/// Table row, optionally marked selected.
pub fn TableRow(
    #[prop(optional, into)] selected: MaybeSignal<bool>,
    children: Children,
) -> impl IntoView {
    view! {
        <tr
            data-ui-kind="table-row"
            data-ui-state=move || if selected.get() { "selected" } else { "idle" }
        >
            {children()}
        </tr>
    }
}

#[component]
/// Column header cell.
pub fn TableHead(
    #[prop(optional)] align: LayoutJustify,
    children: Children,
) -> impl IntoView {
    view! {
        <th scope="col" data-ui-kind="table-head" data-ui-justify=align.token()>
            {children()}
        </th>
    }
}

#[component]
/// Body cell.
pub fn TableCell(
    #[prop(optional)] align: LayoutJustify,
    children: Children,
) -> impl IntoView {
    view! {
        <td data-ui-kind="table-cell" data-ui-justify=align.token()>
            {children()}
        </td>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn initials_use_first_and_last_words() {
        assert_eq!(initials("Ada King Lovelace"), "AL");
        assert_eq!(initials("grace hopper"), "GH");
        assert_eq!(initials("  Linus  "), "L");
        assert_eq!(initials(""), "");
        assert_eq!(initials("émile zola"), "ÉZ");
    }
}
