use std::rc::Rc;

use yew::prelude::*;

use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Success,
    Error,
}

impl NoticeKind {
    pub fn class(self) -> &'static str {
        match self {
            NoticeKind::Info => "toast-info",
            NoticeKind::Success => "toast-success",
            NoticeKind::Error => "toast-error",
        }
    }
}

/// A message surfaced to the reader: search results, submission outcomes and
/// the placeholder actions on headlines, tags and footer links.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub body: Option<String>,
}

impl Notice {
    pub fn info(title: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Info, title: title.into(), body: None }
    }

    pub fn success(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Success, title: title.into(), body: Some(body.into()) }
    }

    pub fn error(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Error, title: title.into(), body: Some(body.into()) }
    }
}

/// Fire-and-forget sink for notices, handed down through a context.
#[derive(Clone, PartialEq)]
pub struct Notifier {
    sink: Callback<Notice>,
}

impl Notifier {
    pub fn new(sink: Callback<Notice>) -> Self {
        Self { sink }
    }

    pub fn notify(&self, notice: Notice) {
        log::info!("notice ({:?}): {}", notice.kind, notice.title);
        self.sink.emit(notice);
    }
}

impl Default for Notifier {
    // Used when a component renders outside a <Toaster>; the log line in
    // `notify` is then the only trace.
    fn default() -> Self {
        Self::new(Callback::from(|_| ()))
    }
}

#[hook]
pub fn use_notifier() -> Notifier {
    use_context::<Notifier>().unwrap_or_default()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub notice: Notice,
}

pub enum ToastAction {
    Push(u64, Notice),
    Dismiss(u64),
}

/// Notices currently on screen, oldest first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastStack {
    pub toasts: Vec<Toast>,
}

impl Reducible for ToastStack {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut toasts = self.toasts.clone();
        match action {
            ToastAction::Push(id, notice) => {
                toasts.push(Toast { id, notice });
                if toasts.len() > config::MAX_VISIBLE_TOASTS {
                    let overflow = toasts.len() - config::MAX_VISIBLE_TOASTS;
                    toasts.drain(..overflow);
                }
            }
            ToastAction::Dismiss(id) => {
                let before = toasts.len();
                toasts.retain(|toast| toast.id != id);
                if toasts.len() == before {
                    return self;
                }
            }
        }
        Rc::new(Self { toasts })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn push(stack: Rc<ToastStack>, id: u64) -> Rc<ToastStack> {
        stack.reduce(ToastAction::Push(id, Notice::info(format!("notice {id}"))))
    }

    #[test]
    fn keeps_only_the_newest_toasts() {
        let mut stack = Rc::new(ToastStack::default());
        for id in 0..6 {
            stack = push(stack, id);
        }
        let ids: Vec<u64> = stack.toasts.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![2, 3, 4, 5]);
    }

    #[test]
    fn dismiss_removes_by_id() {
        let stack = push(push(Rc::new(ToastStack::default()), 1), 2);
        let stack = stack.reduce(ToastAction::Dismiss(1));
        assert_eq!(stack.toasts.len(), 1);
        assert_eq!(stack.toasts[0].id, 2);
    }

    #[test]
    fn dismissing_unknown_id_keeps_the_same_state() {
        let stack = push(Rc::new(ToastStack::default()), 1);
        let after = stack.clone().reduce(ToastAction::Dismiss(99));
        assert!(Rc::ptr_eq(&stack, &after));
    }

    #[test]
    fn constructors_set_kind() {
        assert_eq!(Notice::info("x").kind, NoticeKind::Info);
        assert_eq!(Notice::success("x", "y").body.as_deref(), Some("y"));
        assert_eq!(Notice::error("x", "y").kind, NoticeKind::Error);
    }
}
