//! Toast queue actions, side-effect intents, and transition logic.
//!
//! The reducer never touches timers. Dismissal emits [`ToastEffect::ScheduleRemoval`] and
//! the host is expected to dispatch [`ToastAction::Remove`] once the delay elapses.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::StateError;

/// Toasts visible at once unless configured otherwise.
pub const TOAST_LIMIT: usize = 1;
/// Delay between dismissal and removal from the queue.
pub const TOAST_REMOVE_DELAY_MS: u32 = 1_000_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
/// Monotonic toast identifier.
pub struct ToastId(pub u64);

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
/// Visual intent of a toast.
pub enum ToastVariant {
    /// Neutral notification.
    #[default]
    Default,
    /// Failure or destructive outcome.
    Destructive,
    /// Successful outcome.
    Success,
}

impl ToastVariant {
    /// `data-ui-variant` token.
    pub fn token(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Destructive => "destructive",
            Self::Success => "success",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// A queued notification.
pub struct Toast {
    /// Queue-assigned id.
    pub id: ToastId,
    /// Heading.
    pub title: String,
    /// Optional supporting copy.
    pub description: Option<String>,
    /// Visual intent.
    pub variant: ToastVariant,
    /// `false` once dismissed and waiting for removal.
    pub open: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
/// Partial update applied by [`ToastAction::Update`].
pub struct ToastUpdate {
    /// Replacement title.
    pub title: Option<String>,
    /// Replacement description.
    pub description: Option<Option<String>>,
    /// Replacement variant.
    pub variant: Option<ToastVariant>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Queue sizing and timing.
pub struct ToastConfig {
    /// Maximum toasts kept in the queue. With zero, added toasts are evicted at once.
    pub limit: usize,
    /// Removal delay after dismissal.
    pub remove_delay_ms: u32,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            limit: TOAST_LIMIT,
            remove_delay_ms: TOAST_REMOVE_DELAY_MS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
/// Toasts ordered newest first.
pub struct ToastQueue {
    toasts: Vec<Toast>,
    next_id: u64,
    config: ToastConfig,
}

impl ToastQueue {
    /// Empty queue with `config`.
    pub fn new(config: ToastConfig) -> Self {
        Self {
            toasts: Vec::new(),
            next_id: 0,
            config,
        }
    }

    /// Toasts newest first, dismissed ones included until removed.
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    /// Looks up a toast by id.
    pub fn get(&self, id: ToastId) -> Option<&Toast> {
        self.toasts.iter().find(|toast| toast.id == id)
    }

    /// Reserves the next id.
    pub fn next_id(&mut self) -> ToastId {
        self.next_id += 1;
        ToastId(self.next_id)
    }

    fn get_mut(&mut self, id: ToastId) -> Result<&mut Toast, StateError> {
        self.toasts
            .iter_mut()
            .find(|toast| toast.id == id)
            .ok_or(StateError::ToastNotFound(id))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Actions accepted by [`reduce_toasts`].
pub enum ToastAction {
    /// Push a new toast, evicting the oldest beyond the limit.
    Add {
        /// Heading.
        title: String,
        /// Optional supporting copy.
        description: Option<String>,
        /// Visual intent.
        variant: ToastVariant,
    },
    /// Patch an existing toast.
    Update {
        /// Toast to patch.
        id: ToastId,
        /// Fields to replace.
        update: ToastUpdate,
    },
    /// Close one toast, or all of them with `None`.
    Dismiss {
        /// Toast to dismiss.
        id: Option<ToastId>,
    },
    /// Drop one toast from the queue, or all of them with `None`.
    Remove {
        /// Toast to remove.
        id: Option<ToastId>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Side-effect intents emitted by [`reduce_toasts`].
pub enum ToastEffect {
    /// A toast was added with this id.
    Added(ToastId),
    /// A toast was evicted to respect the queue limit.
    Evicted(ToastId),
    /// Dispatch [`ToastAction::Remove`] for `id` after `delay_ms`.
    ScheduleRemoval {
        /// Toast to remove.
        id: ToastId,
        /// Delay before removal.
        delay_ms: u32,
    },
}

/// Applies `action` to `queue`.
///
/// # Errors
///
/// Returns [`StateError::ToastNotFound`] when an action names a toast not in the queue.
pub fn reduce_toasts(
    queue: &mut ToastQueue,
    action: ToastAction,
) -> Result<Vec<ToastEffect>, StateError> {
    let mut effects = Vec::new();

    match action {
        ToastAction::Add {
            title,
            description,
            variant,
        } => {
            let id = queue.next_id();
            queue.toasts.insert(
                0,
                Toast {
                    id,
                    title,
                    description,
                    variant,
                    open: true,
                },
            );
            let limit = queue.config.limit;
            // A zero limit drains the new toast along with the rest.
            if limit > 0 {
                effects.push(ToastEffect::Added(id));
            }
            if queue.toasts.len() > limit {
                effects.extend(
                    queue
                        .toasts
                        .drain(limit..)
                        .map(|evicted| ToastEffect::Evicted(evicted.id)),
                );
            }
        }
        ToastAction::Update { id, update } => {
            let toast = queue.get_mut(id)?;
            if let Some(title) = update.title {
                toast.title = title;
            }
            if let Some(description) = update.description {
                toast.description = description;
            }
            if let Some(variant) = update.variant {
                toast.variant = variant;
            }
        }
        ToastAction::Dismiss { id } => {
            let delay_ms = queue.config.remove_delay_ms;
            let targets = match id {
                Some(id) => vec![queue.get_mut(id)?],
                None => queue.toasts.iter_mut().filter(|toast| toast.open).collect(),
            };
            for toast in targets {
                toast.open = false;
                effects.push(ToastEffect::ScheduleRemoval {
                    id: toast.id,
                    delay_ms,
                });
            }
        }
        ToastAction::Remove { id: Some(id) } => {
            let before = queue.toasts.len();
            queue.toasts.retain(|toast| toast.id != id);
            if queue.toasts.len() == before {
                return Err(StateError::ToastNotFound(id));
            }
        }
        ToastAction::Remove { id: None } => queue.toasts.clear(),
    }

    Ok(effects)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn add(queue: &mut ToastQueue, title: &str) -> ToastId {
        let effects = reduce_toasts(
            queue,
            ToastAction::Add {
                title: title.to_string(),
                description: None,
                variant: ToastVariant::Default,
            },
        )
        .expect("add toast");
        match effects.first() {
            Some(ToastEffect::Added(id)) => *id,
            other => panic!("unexpected effects: {other:?}"),
        }
    }

    fn queue_with_limit(limit: usize) -> ToastQueue {
        ToastQueue::new(ToastConfig {
            limit,
            ..ToastConfig::default()
        })
    }

    #[test]
    fn default_limit_keeps_only_newest_toast() {
        let mut queue = ToastQueue::new(ToastConfig::default());
        let first = add(&mut queue, "Saved");

        let effects = reduce_toasts(
            &mut queue,
            ToastAction::Add {
                title: "Deleted".to_string(),
                description: Some("1 file".to_string()),
                variant: ToastVariant::Destructive,
            },
        )
        .expect("add second");

        assert_eq!(queue.toasts().len(), 1);
        assert_eq!(queue.toasts()[0].title, "Deleted");
        assert!(effects.contains(&ToastEffect::Evicted(first)));
    }

    #[test]
    fn ids_are_monotonic() {
        let mut queue = queue_with_limit(5);
        let a = add(&mut queue, "a");
        let b = add(&mut queue, "b");
        assert!(b > a);
        assert_eq!(queue.toasts()[0].id, b);
    }

    #[test]
    fn zero_limit_evicts_new_toast_without_reporting_it_added() {
        let mut queue = queue_with_limit(0);
        let effects = reduce_toasts(
            &mut queue,
            ToastAction::Add {
                title: "Saved".to_string(),
                description: None,
                variant: ToastVariant::Success,
            },
        )
        .expect("add toast");

        assert_eq!(effects, vec![ToastEffect::Evicted(ToastId(1))]);
        assert!(queue.toasts().is_empty());
    }

    #[test]
    fn update_patches_only_supplied_fields() {
        let mut queue = queue_with_limit(3);
        let id = add(&mut queue, "Uploading");

        reduce_toasts(
            &mut queue,
            ToastAction::Update {
                id,
                update: ToastUpdate {
                    title: Some("Uploaded".to_string()),
                    variant: Some(ToastVariant::Success),
                    ..ToastUpdate::default()
                },
            },
        )
        .expect("update");

        let toast = queue.get(id).expect("toast");
        assert_eq!(toast.title, "Uploaded");
        assert_eq!(toast.variant, ToastVariant::Success);
        assert_eq!(toast.description, None);
    }

    #[test]
    fn dismiss_closes_and_schedules_removal() {
        let mut queue = queue_with_limit(3);
        let a = add(&mut queue, "a");
        let b = add(&mut queue, "b");

        let effects =
            reduce_toasts(&mut queue, ToastAction::Dismiss { id: Some(a) }).expect("dismiss one");
        assert_eq!(
            effects,
            vec![ToastEffect::ScheduleRemoval {
                id: a,
                delay_ms: TOAST_REMOVE_DELAY_MS,
            }]
        );
        assert!(!queue.get(a).expect("a").open);
        assert!(queue.get(b).expect("b").open);

        let effects = reduce_toasts(&mut queue, ToastAction::Dismiss { id: None }).expect("all");
        assert_eq!(effects.len(), 1);

        reduce_toasts(&mut queue, ToastAction::Remove { id: Some(a) }).expect("remove");
        assert!(queue.get(a).is_none());
        reduce_toasts(&mut queue, ToastAction::Remove { id: None }).expect("clear");
        assert!(queue.toasts().is_empty());
    }

    #[test]
    fn unknown_ids_are_rejected() {
        let mut queue = ToastQueue::default();
        let missing = ToastId(42);
        assert_eq!(
            reduce_toasts(&mut queue, ToastAction::Dismiss { id: Some(missing) }),
            Err(StateError::ToastNotFound(missing))
        );
        assert_eq!(
            reduce_toasts(&mut queue, ToastAction::Remove { id: Some(missing) }),
            Err(StateError::ToastNotFound(missing))
        );
        assert_eq!(
            reduce_toasts(
                &mut queue,
                ToastAction::Update {
                    id: missing,
                    update: ToastUpdate::default(),
                },
            ),
            Err(StateError::ToastNotFound(missing))
        );
    }
}
