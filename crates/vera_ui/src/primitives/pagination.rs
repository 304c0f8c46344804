use vera_state::{EllipsisSlot, PageToken, PaginationConfig, PaginationState, DEFAULT_PAGE_SIZE_OPTIONS};

use super::*;

/// Summary line for the current page, e.g. `Showing 11–20 of 95`.
pub fn range_label(state: &PaginationState) -> String {
    match state.item_range() {
        Some((start, end)) => format!("Showing {start}–{end} of {}", state.total_items()),
        None => "No results".to_string(),
    }
}

/// Screen-reader text for an ellipsis whose icon is hidden from assistive tech.
pub(crate) fn ellipsis_label(slot: EllipsisSlot) -> &'static str {
    match slot {
        EllipsisSlot::Start => "More pages before",
        EllipsisSlot::End => "More pages after",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Callbacks owed after the page-size select changes.
pub(crate) struct PageSizeChange {
    /// Size reported through `on_page_size_change`.
    pub page_size: usize,
    /// Page reported through `on_page_change` when the size change moved the caller off it.
    pub reset_page: Option<usize>,
}

/// Validates a page-size select value against `config` and works out the resulting page.
pub(crate) fn page_size_change(
    mut state: PaginationState,
    value: &str,
    config: &PaginationConfig,
) -> Result<PageSizeChange, String> {
    let previous_page = state.page();
    let size = value
        .parse::<usize>()
        .map_err(|err| format!("ignored page size `{value}`: {err}"))?;
    state
        .set_page_size(size, config)
        .map_err(|err| format!("ignored page size `{value}`: {err}"))?;
    Ok(PageSizeChange {
        page_size: state.page_size(),
        reset_page: (state.page() != previous_page).then_some(state.page()),
    })
}

#[component]
/// Page selector with previous/next controls, a page-size select, and a range label.
///
/// The caller owns `page` and `page_size`; the component only reports requested changes.
/// Out-of-range pages are clamped for display and clicks always request an in-range page.
pub fn Pagination(
    #[prop(into)] page: MaybeSignal<usize>,
    #[prop(into)] total_items: MaybeSignal<usize>,
    #[prop(into)] page_size: MaybeSignal<usize>,
    #[prop(default = 1)] siblings_count: usize,
    #[prop(default = DEFAULT_PAGE_SIZE_OPTIONS.to_vec())] page_size_options: Vec<usize>,
    #[prop(optional)] on_page_change: Option<Callback<usize>>,
    #[prop(optional)] on_page_size_change: Option<Callback<usize>>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    let state = create_memo(move |_| {
        match PaginationState::new(total_items.get(), page_size.get()) {
            Ok(mut state) => {
                state.go_to(page.get());
                Some(state)
            }
            Err(err) => {
                logging::warn!("pagination hidden: {err}");
                None
            }
        }
    });
    let window = create_memo(move |_| {
        state
            .get()
            .map(|state| state.window(siblings_count).into_vec())
            .unwrap_or_default()
    });

    let change_page = move |target: usize| {
        let Some(mut next) = state.get_untracked() else {
            return;
        };
        let current = next.page();
        let target = next.go_to(target);
        if target != current {
            if let Some(on_page_change) = on_page_change.as_ref() {
                on_page_change.call(target);
            }
        }
    };

    let size_choices = page_size_options
        .iter()
        .map(|size| (size.to_string(), size.to_string()))
        .collect::<Vec<_>>();
    let config = store_value(PaginationConfig {
        siblings_count,
        page_size_options,
        ..PaginationConfig::default()
    });
    let change_page_size = move |value: String| {
        let Some(current) = state.get_untracked() else {
            return;
        };
        let change = match config.with_value(|config| page_size_change(current, &value, config)) {
            Ok(change) => change,
            Err(err) => {
                logging::warn!("{err}");
                return;
            }
        };
        if let Some(on_page_size_change) = on_page_size_change.as_ref() {
            on_page_size_change.call(change.page_size);
        }
        if let (Some(page), Some(on_page_change)) = (change.reset_page, on_page_change.as_ref()) {
            on_page_change.call(page);
        }
    };

    let can_previous = Signal::derive(move || state.get().is_some_and(|state| state.can_previous()));
    let can_next = Signal::derive(move || state.get().is_some_and(|state| state.can_next()));

    view! {
        <nav
            class=merge_layout_class("ui-pagination", layout_class)
            aria-label=aria_label.unwrap_or_else(|| "Pagination".to_string())
            data-ui-primitive="true"
            data-ui-kind="pagination"
            data-ui-state=move || if state.get().is_some() { "ready" } else { "disabled" }
        >
            <span class="ui-pagination-range" data-ui-slot="range" aria-live="polite">
                {move || state.get().map(|state| range_label(&state)).unwrap_or_default()}
            </span>
            <label class="ui-pagination-size" data-ui-slot="page-size">
                <span>"Rows per page"</span>
                <SelectField
                    aria_label="Rows per page"
                    ui_slot="page-size-select"
                    options=size_choices
                    value=Signal::derive(move || page_size.get().to_string())
                    on_change=Callback::new(change_page_size)
                />
            </label>
            <ul class="ui-pagination-list" data-ui-slot="pages">
                <li>
                    <Button
                        variant=ButtonVariant::Ghost
                        size=ButtonSize::Sm
                        ui_slot="previous"
                        aria_label="Go to previous page"
                        leading_icon=IconName::ChevronLeft
                        disabled=Signal::derive(move || !can_previous.get())
                        on_click=Callback::new(move |_| {
                            if let Some(state) = state.get_untracked() {
                                change_page(state.page().saturating_sub(1));
                            }
                        })
                    >
                        "Previous"
                    </Button>
                </li>
                <For
                    each=move || window.get()
                    key=|token| token.key()
                    children=move |token| {
                        match token {
                            PageToken::Page(number) => {
                                let current = Signal::derive(move || {
                                    state.get().is_some_and(|state| state.page() == number)
                                });
                                view! {
                                    <li>
                                        <Button
                                            variant=ButtonVariant::Ghost
                                            size=ButtonSize::Icon
                                            ui_slot="page"
                                            aria_label=format!("Page {number}")
                                            aria_current=Signal::derive(move || {
                                                if current.get() { "page".to_string() } else { String::new() }
                                            })
                                            selected=current
                                            on_click=Callback::new(move |_| change_page(number))
                                        >
                                            {number}
                                        </Button>
                                    </li>
                                }
                                .into_view()
                            }
                            PageToken::Ellipsis(slot) => view! {
                                <li class="ui-pagination-ellipsis" data-ui-slot="ellipsis">
                                    <span aria-hidden="true">
                                        <Icon icon=IconName::Ellipsis />
                                    </span>
                                    <span class="ui-visually-hidden">{ellipsis_label(slot)}</span>
                                </li>
                            }
                            .into_view(),
                        }
                    }
                />
                <li>
                    <Button
                        variant=ButtonVariant::Ghost
                        size=ButtonSize::Sm
                        ui_slot="next"
                        aria_label="Go to next page"
                        trailing_icon=IconName::ChevronRight
                        disabled=Signal::derive(move || !can_next.get())
                        on_click=Callback::new(move |_| {
                            if let Some(state) = state.get_untracked() {
                                change_page(state.page().saturating_add(1));
                            }
                        })
                    >
                        "Next"
                    </Button>
                </li>
            </ul>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use vera_state::compute_window;

    use super::*;

    #[test]
    fn range_label_reports_the_visible_slice() {
        let mut state = PaginationState::new(95, 10).unwrap();
        assert_eq!(range_label(&state), "Showing 1–10 of 95");
        state.go_to(2);
        assert_eq!(range_label(&state), "Showing 11–20 of 95");
        state.last();
        assert_eq!(range_label(&state), "Showing 91–95 of 95");
    }

    #[test]
    fn range_label_handles_empty_collections() {
        let state = PaginationState::new(0, 20).unwrap();
        assert_eq!(range_label(&state), "No results");
    }

    #[test]
    fn ellipses_announce_which_pages_are_skipped() {
        let labels = compute_window(6, 20, 1)
            .into_vec()
            .into_iter()
            .filter_map(|token| match token {
                PageToken::Ellipsis(slot) => Some(ellipsis_label(slot)),
                PageToken::Page(_) => None,
            })
            .collect::<Vec<_>>();
        assert_eq!(labels, vec!["More pages before", "More pages after"]);
    }

    #[test]
    fn page_size_change_resets_a_later_page_to_the_first() {
        let config = PaginationConfig::default();
        let mut state = PaginationState::new(95, 10).unwrap();
        state.go_to(4);

        assert_eq!(
            page_size_change(state, "20", &config),
            Ok(PageSizeChange {
                page_size: 20,
                reset_page: Some(1),
            })
        );
    }

    #[test]
    fn page_size_change_on_first_page_only_reports_the_size() {
        let config = PaginationConfig::default();
        let state = PaginationState::new(95, 10).unwrap();

        assert_eq!(
            page_size_change(state, "50", &config),
            Ok(PageSizeChange {
                page_size: 50,
                reset_page: None,
            })
        );
    }

    #[test]
    fn page_size_change_rejects_unparsable_and_unsupported_sizes() {
        let config = PaginationConfig::default();
        let state = PaginationState::new(95, 10).unwrap();

        assert!(page_size_change(state, "ten", &config).is_err());
        assert_eq!(
            page_size_change(state, "7", &config),
            Err("ignored page size `7`: page size 7 is not one of the configured options".to_string())
        );
        assert!(page_size_change(state, "0", &config).is_err());
    }
}
