use std::time::Duration;

use vera_state::{
    reduce_toasts, Toast, ToastAction, ToastConfig, ToastEffect, ToastId, ToastQueue,
    ToastUpdate, ToastVariant,
};

use super::*;

#[component]
/// Floating surface anchored below a trigger, used by the selection primitives.
///
/// Children render once and stay mounted; `open` only toggles visibility so listbox
/// ids referenced by `aria-controls` remain resolvable.
pub fn PopoverSurface(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] role: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional, into)] open: MaybeSignal<bool>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-popover", layout_class)
            id=id
            role=role
            aria-label=aria_label
            hidden=move || !open.get()
            data-ui-primitive="true"
            data-ui-kind="popover"
            data-ui-state=move || open_token(open.get())
        >
            {children()}
        </div>
    }
}

#[derive(Clone, Copy)]
/// Context handle for raising and dismissing toasts.
///
/// Obtained from [`provide_toaster`] or [`use_toaster`]. Rejected actions are logged and
/// dropped; dismissed toasts are removed after the queue's configured delay.
pub struct ToasterHandle {
    queue: RwSignal<ToastQueue>,
}

impl ToasterHandle {
    /// Raises a toast and returns its id, or `None` when the queue rejects or evicts it.
    pub fn toast(
        &self,
        title: impl Into<String>,
        description: Option<String>,
        variant: ToastVariant,
    ) -> Option<ToastId> {
        self.dispatch(ToastAction::Add {
            title: title.into(),
            description,
            variant,
        })
        .into_iter()
        .find_map(|effect| match effect {
            ToastEffect::Added(id) => Some(id),
            _ => None,
        })
    }

    /// Patches a visible toast.
    pub fn update(&self, id: ToastId, update: ToastUpdate) {
        self.dispatch(ToastAction::Update { id, update });
    }

    /// Closes one toast, or every open toast with `None`.
    pub fn dismiss(&self, id: Option<ToastId>) {
        self.dispatch(ToastAction::Dismiss { id });
    }

    /// Reactive snapshot of the queue, newest first.
    pub fn toasts(&self) -> Vec<Toast> {
        self.queue.with(|queue| queue.toasts().to_vec())
    }

    /// Read-only signal over the whole queue.
    pub fn queue(&self) -> Signal<ToastQueue> {
        self.queue.into()
    }

    fn dispatch(&self, action: ToastAction) -> Vec<ToastEffect> {
        match self.queue.try_update(|queue| reduce_toasts(queue, action)) {
            Some(Ok(effects)) => {
                for effect in &effects {
                    self.run_effect(effect);
                }
                effects
            }
            Some(Err(err)) => {
                logging::warn!("toast action rejected: {err}");
                Vec::new()
            }
            None => Vec::new(),
        }
    }

    fn run_effect(&self, effect: &ToastEffect) {
        let ToastEffect::ScheduleRemoval { id, delay_ms } = *effect else {
            return;
        };
        let queue = self.queue;
        set_timeout(
            move || {
                // A newer toast may already have evicted this one.
                queue.try_update(|queue| {
                    let _ = reduce_toasts(queue, ToastAction::Remove { id: Some(id) });
                });
            },
            Duration::from_millis(u64::from(delay_ms)),
        );
    }
}

/// Installs a toast queue in context and returns its handle.
pub fn provide_toaster(config: ToastConfig) -> ToasterHandle {
    let handle = ToasterHandle {
        queue: create_rw_signal(ToastQueue::new(config)),
    };
    provide_context(handle);
    handle
}

/// Returns the nearest toast queue, installing a default one when none is provided.
pub fn use_toaster() -> ToasterHandle {
    use_context::<ToasterHandle>().unwrap_or_else(|| {
        logging::warn!("no toaster in context; installing a default queue");
        provide_toaster(ToastConfig::default())
    })
}

#[component]
/// Live region rendering the queued toasts.
pub fn Toaster(#[prop(optional)] layout_class: Option<&'static str>) -> impl IntoView {
    let toaster = use_toaster();

    view! {
        <ol
            class=merge_layout_class("ui-toaster", layout_class)
            role="region"
            aria-label="Notifications"
            data-ui-primitive="true"
            data-ui-kind="toaster"
        >
            <For
                each=move || toaster.toasts()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let current = create_memo(move |_| {
                        toaster.queue.with(|queue| queue.get(id).cloned())
                    });
                    let open = Signal::derive(move || {
                        current.with(|toast| toast.as_ref().is_some_and(|toast| toast.open))
                    });
                    view! {
                        <li
                            class="ui-toast"
                            role="status"
                            aria-live="polite"
                            aria-atomic="true"
                            data-ui-kind="toast"
                            data-ui-variant=move || {
                                current.with(|toast| {
                                    toast.as_ref().map(|toast| toast.variant).unwrap_or_default().token()
                                })
                            }
                            data-ui-state=move || open_token(open.get())
                        >
                            <div data-ui-slot="title">
                                {move || current.with(|toast| {
                                    toast.as_ref().map(|toast| toast.title.clone()).unwrap_or_default()
                                })}
                            </div>
                            {move || {
                                current.with(|toast| {
                                    toast.as_ref().and_then(|toast| toast.description.clone())
                                })
                                .map(|description| view! {
                                    <div data-ui-slot="description">{description}</div>
                                })
                            }}
                            <Button
                                variant=ButtonVariant::Ghost
                                size=ButtonSize::Icon
                                ui_slot="close"
                                aria_label="Dismiss notification"
                                disabled=Signal::derive(move || !open.get())
                                on_click=Callback::new(move |_| toaster.dismiss(Some(id)))
                            >
                                <Icon icon=IconName::X />
                            </Button>
                        </li>
                    }
                }
            />
        </ol>
    }
}
