//! Storybook-style catalog for the Vera UI primitives.
//!
//! Every primitive renders with live state so interaction details (keyboard handling,
//! persisted sidebar state, query-synced tabs, toast timing) can be reviewed in one
//! surface. Demo state is snapshotted to `localStorage` between visits.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod persistence;

use leptos::*;
use leptos_meta::{provide_meta_context, Meta, Title};
use serde::{Deserialize, Serialize};
use vera_state::{PaginationState, StateError, DEFAULT_PAGE_SIZE_OPTIONS, DEFAULT_TAB_PARAM};
use vera_ui::prelude::*;

const INVOICE_COUNT: usize = 95;

const NAV_ITEMS: [(&str, &str, IconName); 3] = [
    ("inbox", "Inbox", IconName::Search),
    ("people", "People", IconName::User),
    ("settings", "Settings", IconName::PanelLeft),
];

const SECTIONS: [TabItem; 4] = [
    TabItem::new("display", "Display"),
    TabItem::new("forms", "Forms"),
    TabItem::new("data", "Data"),
    TabItem::new("feedback", "Feedback"),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
struct ShowcaseState {
    page: usize,
    page_size: usize,
    notifications: bool,
    terms_accepted: bool,
    framework: Option<String>,
    stack: Vec<String>,
    nav: String,
}

impl Default for ShowcaseState {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE_OPTIONS[0],
            notifications: true,
            terms_accepted: false,
            framework: None,
            stack: Vec::new(),
            nav: NAV_ITEMS[0].0.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Invoice {
    number: String,
    status: &'static str,
    method: &'static str,
    amount_cents: u32,
}

fn invoices() -> impl Iterator<Item = Invoice> {
    const STATUSES: [&str; 3] = ["Paid", "Pending", "Unpaid"];
    const METHODS: [&str; 3] = ["Credit Card", "PayPal", "Bank Transfer"];

    (1..=INVOICE_COUNT).map(|n| Invoice {
        number: format!("INV{n:03}"),
        status: STATUSES[n % STATUSES.len()],
        method: METHODS[(n / 2) % METHODS.len()],
        amount_cents: (n as u32 * 3_750) % 50_000 + 2_500,
    })
}

/// Rows of the demo invoice table visible on the stored page.
fn page_rows(state: &ShowcaseState) -> Result<Vec<Invoice>, StateError> {
    let mut pagination = PaginationState::new(INVOICE_COUNT, state.page_size)?;
    pagination.go_to(state.page);
    let bounds = pagination.slice_bounds();
    Ok(invoices()
        .skip(bounds.start)
        .take(bounds.len())
        .collect())
}

fn format_amount(cents: u32) -> String {
    format!("${}.{:02}", cents / 100, cents % 100)
}

fn frameworks() -> Vec<SelectOption> {
    vec![
        SelectOption::new("leptos", "Leptos"),
        SelectOption::new("dioxus", "Dioxus"),
        SelectOption::new("yew", "Yew"),
        SelectOption::new("sycamore", "Sycamore"),
        SelectOption::new("iced", "Iced").disabled(),
        SelectOption::new("egui", "egui"),
    ]
}

fn restore_state() -> ShowcaseState {
    let Some(raw) = persistence::load_snapshot() else {
        return ShowcaseState::default();
    };
    match serde_json::from_str::<ShowcaseState>(&raw) {
        Ok(state) => state,
        Err(err) => {
            logging::warn!("showcase snapshot ignored: {err}");
            ShowcaseState::default()
        }
    }
}

#[component]
/// Showcase root: sidebar navigation, query-synced section tabs, and the toaster.
pub fn ShowcaseApp() -> impl IntoView {
    provide_meta_context();
    let toaster = provide_toaster(ToastConfig::default());

    let state = create_rw_signal(restore_state());
    let last_saved = create_rw_signal::<Option<String>>(None);

    create_effect(move |_| {
        let serialized = match state.with(serde_json::to_string) {
            Ok(serialized) => serialized,
            Err(err) => {
                logging::warn!("showcase serialize failed: {err}");
                return;
            }
        };

        if last_saved.get_untracked().as_deref() == Some(serialized.as_str()) {
            return;
        }
        if let Err(err) = persistence::save_snapshot(&serialized) {
            logging::warn!("showcase snapshot not saved: {err}");
        }
        last_saved.set(Some(serialized));
    });

    view! {
        <Title text="Vera UI Showcase" />
        <Meta name="description" content="Live catalog of the Vera UI primitives." />

        <SidebarProvider layout_class="showcase-root">
            <Sidebar aria_label="Showcase navigation">
                <SidebarContent>
                    <SidebarGroup label="Workspace">
                        {NAV_ITEMS
                            .iter()
                            .map(|&(value, label, icon)| view! {
                                <SidebarItem
                                    label=label
                                    icon=icon
                                    active=Signal::derive(move || state.with(|state| state.nav == value))
                                    on_select=Callback::new(move |_| {
                                        state.update(|state| state.nav = value.to_string());
                                    })
                                />
                            })
                            .collect_view()}
                    </SidebarGroup>
                </SidebarContent>
            </Sidebar>

            <main class="showcase-main">
                <Stack gap=LayoutGap::Lg>
                    <Stack direction=StackDirection::Horizontal align=LayoutAlign::Center gap=LayoutGap::Sm>
                        <SidebarTrigger />
                        <Heading>"Vera UI"</Heading>
                        <Badge variant=BadgeVariant::Outline>"preview"</Badge>
                    </Stack>

                    <Tabs
                        items=SECTIONS.to_vec()
                        query_param=DEFAULT_TAB_PARAM
                        id_prefix="showcase"
                        aria_label="Showcase sections"
                    >
                        <TabPanel value="display">
                            <DisplaySection />
                        </TabPanel>
                        <TabPanel value="forms">
                            <FormsSection state />
                        </TabPanel>
                        <TabPanel value="data">
                            <DataSection state />
                        </TabPanel>
                        <TabPanel value="feedback">
                            <FeedbackSection toaster />
                        </TabPanel>
                    </Tabs>
                </Stack>
            </main>

            <Toaster />
        </SidebarProvider>
    }
}

#[component]
fn DisplaySection() -> impl IntoView {
    view! {
        <Stack gap=LayoutGap::Lg>
            <Card title="Buttons" description="Every variant and size token.">
                <Stack direction=StackDirection::Horizontal gap=LayoutGap::Sm wrap=true>
                    <Button>"Default"</Button>
                    <Button variant=ButtonVariant::Secondary>"Secondary"</Button>
                    <Button variant=ButtonVariant::Outline>"Outline"</Button>
                    <Button variant=ButtonVariant::Ghost>"Ghost"</Button>
                    <Button variant=ButtonVariant::Destructive>"Destructive"</Button>
                    <Button variant=ButtonVariant::Link>"Link"</Button>
                </Stack>
                <Stack direction=StackDirection::Horizontal gap=LayoutGap::Sm wrap=true>
                    <Button size=ButtonSize::Sm>"Small"</Button>
                    <Button size=ButtonSize::Lg trailing_icon=IconName::ChevronRight>"Large"</Button>
                    <Button size=ButtonSize::Icon variant=ButtonVariant::Outline aria_label="Search">
                        <Icon icon=IconName::Search />
                    </Button>
                    <Button disabled=true>"Disabled"</Button>
                </Stack>
            </Card>

            <Card title="Badges and avatars">
                <Stack direction=StackDirection::Horizontal gap=LayoutGap::Sm wrap=true>
                    <Badge>"Default"</Badge>
                    <Badge variant=BadgeVariant::Secondary>"Secondary"</Badge>
                    <Badge variant=BadgeVariant::Destructive>"Destructive"</Badge>
                    <Badge variant=BadgeVariant::Outline>"Outline"</Badge>
                </Stack>
                <Stack direction=StackDirection::Horizontal gap=LayoutGap::Sm>
                    <Avatar src="https://github.com/leptos-rs.png" name="Leptos Team" />
                    <Avatar src="/missing-avatar.png" name="Grace Hopper" />
                    <Avatar name="Ada Lovelace" size=IconSize::Md />
                </Stack>
            </Card>

            <Card title="Accordion" description="Single mode closes siblings; multiple mode does not.">
                <Accordion default_open=vec!["shipping".to_string()]>
                    <AccordionItem value="shipping" title="Is shipping included?">
                        <Text tone=TextTone::Muted>"Yes. Every order ships free within the EU."</Text>
                    </AccordionItem>
                    <AccordionItem value="returns" title="Can I return an item?">
                        <Text tone=TextTone::Muted>"Within 30 days, unopened."</Text>
                    </AccordionItem>
                    <AccordionItem value="legacy" title="Legacy plans" disabled=true>
                        <Text>"No longer offered."</Text>
                    </AccordionItem>
                </Accordion>
                <Accordion mode=AccordionMode::Multiple>
                    <AccordionItem value="alpha" title="Alpha">
                        <Text>"Opens independently."</Text>
                    </AccordionItem>
                    <AccordionItem value="beta" title="Beta">
                        <Text>"So does this one."</Text>
                    </AccordionItem>
                </Accordion>
            </Card>

            <EmptyState icon=IconName::Search>
                <Text tone=TextTone::Muted>"Nothing matches your filters."</Text>
            </EmptyState>
        </Stack>
    }
}

#[component]
fn FormsSection(state: RwSignal<ShowcaseState>) -> impl IntoView {
    let (initial_framework, initial_stack) =
        state.with_untracked(|state| (state.framework.clone(), state.stack.clone()));
    let note = create_rw_signal(String::new());

    view! {
        <Stack gap=LayoutGap::Lg>
            <Card title="Toggles">
                <Stack direction=StackDirection::Horizontal align=LayoutAlign::Center gap=LayoutGap::Sm>
                    <Switch
                        aria_label="Email notifications"
                        checked=Signal::derive(move || state.with(|state| state.notifications))
                        on_toggle=Callback::new(move |next| state.update(|state| state.notifications = next))
                    />
                    <Text role=TextRole::Label>"Email notifications"</Text>
                </Stack>
                <Stack direction=StackDirection::Horizontal align=LayoutAlign::Center gap=LayoutGap::Sm>
                    <Checkbox
                        aria_label="Accept terms"
                        checked=Signal::derive(move || state.with(|state| state.terms_accepted))
                        on_toggle=Callback::new(move |next| state.update(|state| state.terms_accepted = next))
                    />
                    <Text role=TextRole::Label>"Accept terms and conditions"</Text>
                </Stack>
                <Stack direction=StackDirection::Horizontal align=LayoutAlign::Center gap=LayoutGap::Sm>
                    <Checkbox aria_label="Partially selected" indeterminate=true />
                    <Checkbox aria_label="Disabled" disabled=true />
                </Stack>
            </Card>

            <Card title="Combobox" description="Type to filter; arrow keys and Enter pick.">
                <Combobox
                    options=frameworks()
                    default_value=initial_framework
                    placeholder="Select framework…"
                    id_prefix="framework"
                    on_change=Callback::new(move |value| state.update(|state| state.framework = value))
                />
                <Text tone=TextTone::Muted>
                    {move || {
                        state.with(|state| match &state.framework {
                            Some(framework) => format!("Selected: {framework}"),
                            None => "Nothing selected".to_string(),
                        })
                    }}
                </Text>
            </Card>

            <Card title="Multi-select" description="Up to three picks; extra picks collapse into +N more.">
                <MultiSelect
                    options=frameworks()
                    default_selected=initial_stack
                    max_selected=3
                    max_badges=2
                    id_prefix="stack"
                    on_change=Callback::new(move |values| state.update(|state| state.stack = values))
                />
            </Card>

            <Card title="Inputs">
                <TextField
                    aria_label="Note"
                    placeholder="Leave a note"
                    value=Signal::derive(move || note.get())
                    on_input=Callback::new(move |value| note.set(value))
                />
                <Text role=TextRole::Caption tone=TextTone::Muted>
                    {move || format!("{} characters", note.with(|note| note.chars().count()))}
                </Text>
            </Card>
        </Stack>
    }
}

#[component]
fn DataSection(state: RwSignal<ShowcaseState>) -> impl IntoView {
    let rows = create_memo(move |_| {
        state.with(page_rows).unwrap_or_else(|err| {
            logging::warn!("invoice page unavailable: {err}");
            Vec::new()
        })
    });

    view! {
        <Card title="Invoices" description="Paginated table driven by caller-owned page state.">
            <Table aria_label="Invoices">
                <TableCaption>"A list of recent invoices."</TableCaption>
                <TableHeader>
                    <TableRow>
                        <TableHead>"Invoice"</TableHead>
                        <TableHead>"Status"</TableHead>
                        <TableHead>"Method"</TableHead>
                        <TableHead align=LayoutJustify::End>"Amount"</TableHead>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {move || {
                        rows.get()
                            .into_iter()
                            .map(|invoice| {
                                let status_variant = if invoice.status == "Unpaid" {
                                    BadgeVariant::Destructive
                                } else {
                                    BadgeVariant::Secondary
                                };
                                view! {
                                    <TableRow>
                                        <TableCell>{invoice.number}</TableCell>
                                        <TableCell>
                                            <Badge variant=status_variant>{invoice.status}</Badge>
                                        </TableCell>
                                        <TableCell>{invoice.method}</TableCell>
                                        <TableCell align=LayoutJustify::End>
                                            {format_amount(invoice.amount_cents)}
                                        </TableCell>
                                    </TableRow>
                                }
                            })
                            .collect_view()
                    }}
                </TableBody>
            </Table>
            <Pagination
                page=Signal::derive(move || state.with(|state| state.page))
                total_items=INVOICE_COUNT
                page_size=Signal::derive(move || state.with(|state| state.page_size))
                aria_label="Invoice pages"
                on_page_change=Callback::new(move |page| state.update(|state| state.page = page))
                on_page_size_change=Callback::new(move |size| {
                    state.update(|state| {
                        state.page_size = size;
                        state.page = 1;
                    })
                })
            />
        </Card>
    }
}

#[component]
fn FeedbackSection(toaster: ToasterHandle) -> impl IntoView {
    let last_toast = create_rw_signal::<Option<ToastId>>(None);
    let queue = toaster.queue();

    view! {
        <Card title="Toasts" description="One toast at a time; a new toast replaces the previous one.">
            <Stack direction=StackDirection::Horizontal gap=LayoutGap::Sm wrap=true>
                <Button
                    variant=ButtonVariant::Outline
                    on_click=Callback::new(move |_| {
                        let id = toaster.toast(
                            "Scheduled: Catch up",
                            Some("Friday, February 10, 2023 at 5:57 PM".to_string()),
                            ToastVariant::Default,
                        );
                        last_toast.set(id);
                    })
                >
                    "Show toast"
                </Button>
                <Button
                    variant=ButtonVariant::Destructive
                    on_click=Callback::new(move |_| {
                        let id = toaster.toast(
                            "Uh oh! Something went wrong.",
                            Some("There was a problem with your request.".to_string()),
                            ToastVariant::Destructive,
                        );
                        last_toast.set(id);
                    })
                >
                    "Show error"
                </Button>
                <Button
                    variant=ButtonVariant::Secondary
                    disabled=Signal::derive(move || last_toast.get().is_none())
                    on_click=Callback::new(move |_| {
                        if let Some(id) = last_toast.get_untracked() {
                            toaster.update(
                                id,
                                ToastUpdate {
                                    title: Some("Saved".to_string()),
                                    description: Some(None),
                                    variant: Some(ToastVariant::Success),
                                },
                            );
                        }
                    })
                >
                    "Mark last as saved"
                </Button>
                <Button variant=ButtonVariant::Ghost on_click=Callback::new(move |_| toaster.dismiss(None))>
                    "Dismiss all"
                </Button>
            </Stack>
            <Text role=TextRole::Code tone=TextTone::Muted>
                {move || queue.with(serde_json::to_string).unwrap_or_default()}
            </Text>
        </Card>
    }
}

/// Mounts the showcase to `<body>`.
#[cfg(all(feature = "csr", target_arch = "wasm32"))]
pub fn mount() {
    console_error_panic_hook::set_once();
    leptos::mount_to_body(|| view! { <ShowcaseApp /> })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn first_page_lists_the_first_invoices() {
        let rows = page_rows(&ShowcaseState::default()).unwrap();
        assert_eq!(rows.len(), 10);
        assert_eq!(rows[0].number, "INV001");
        assert_eq!(rows[9].number, "INV010");
    }

    #[test]
    fn stale_page_is_clamped_to_the_last_page() {
        let state = ShowcaseState {
            page: 40,
            page_size: 20,
            ..ShowcaseState::default()
        };
        let rows = page_rows(&state).unwrap();
        assert_eq!(rows.len(), 15);
        assert_eq!(rows[0].number, "INV081");
        assert_eq!(rows[14].number, "INV095");
    }

    #[test]
    fn zero_page_size_is_rejected() {
        let state = ShowcaseState {
            page_size: 0,
            ..ShowcaseState::default()
        };
        assert_eq!(page_rows(&state), Err(StateError::ZeroPageSize));
    }

    #[test]
    fn partial_snapshots_fill_in_defaults() {
        let restored: ShowcaseState =
            serde_json::from_str(r#"{"page":3,"stack":["leptos"]}"#).unwrap();
        assert_eq!(
            restored,
            ShowcaseState {
                page: 3,
                stack: vec!["leptos".to_string()],
                ..ShowcaseState::default()
            }
        );
    }

    #[test]
    fn amounts_render_as_dollars() {
        assert_eq!(format_amount(2_500), "$25.00");
        assert_eq!(format_amount(105), "$1.05");
    }

    #[test]
    fn section_tabs_are_unique() {
        let mut values = SECTIONS.iter().map(|tab| tab.value).collect::<Vec<_>>();
        values.sort_unstable();
        values.dedup();
        assert_eq!(values.len(), SECTIONS.len());
    }
}
