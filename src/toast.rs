//! Toast Notifications
//!
//! Transient success/error messages provided via Leptos Context API.

use leptos::prelude::*;
use leptos::task::spawn_local;

/// How long a toast stays up unless closed
pub const TOAST_TIMEOUT_MS: u32 = 4_000;
/// Oldest toasts are dropped beyond this
pub const MAX_TOASTS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    pub message: String,
}

/// Visible toasts, oldest first
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastQueue {
    next_id: u32,
    toasts: Vec<Toast>,
}

impl ToastQueue {
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u32 {
        self.next_id += 1;
        self.toasts.push(Toast {
            id: self.next_id,
            kind,
            message: message.into(),
        });
        if self.toasts.len() > MAX_TOASTS {
            let overflow = self.toasts.len() - MAX_TOASTS;
            self.toasts.drain(..overflow);
        }
        self.next_id
    }

    pub fn dismiss(&mut self, id: u32) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}

/// App-wide toast signals provided via context
#[derive(Clone, Copy)]
pub struct ToastContext {
    pub queue: ReadSignal<ToastQueue>,
    set_queue: WriteSignal<ToastQueue>,
}

impl ToastContext {
    pub fn new() -> Self {
        let (queue, set_queue) = signal(ToastQueue::default());
        Self { queue, set_queue }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show(ToastKind::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(ToastKind::Error, message.into());
    }

    pub fn dismiss(&self, id: u32) {
        self.set_queue.update(|q| {
            q.dismiss(id);
        });
    }

    fn show(&self, kind: ToastKind, message: String) {
        let mut id = 0;
        self.set_queue.update(|q| id = q.push(kind, message));

        let ctx = *self;
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(TOAST_TIMEOUT_MS).await;
            ctx.dismiss(id);
        });
    }
}

/// Get the toast context
pub fn use_toast() -> ToastContext {
    use_context::<ToastContext>().expect("ToastContext should be provided")
}

/// Renders the toast stack in the bottom-right corner
#[component]
pub fn ToastHost() -> impl IntoView {
    let ctx = use_toast();

    view! {
        <div class="toast-host" role="status" aria-live="polite">
            <For
                each=move || ctx.queue.get().toasts().to_vec()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let class = match toast.kind {
                        ToastKind::Success => "toast toast-success",
                        ToastKind::Error => "toast toast-error",
                    };
                    view! {
                        <div class=class>
                            <span class="toast-message">{toast.message}</span>
                            <button class="toast-close" aria-label="닫기" on:click=move |_| ctx.dismiss(id)>
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_assigns_increasing_ids() {
        let mut queue = ToastQueue::default();
        let a = queue.push(ToastKind::Success, "saved");
        let b = queue.push(ToastKind::Error, "failed");
        assert!(b > a);
        assert_eq!(queue.toasts().len(), 2);
        assert_eq!(queue.toasts()[1].kind, ToastKind::Error);
    }

    #[test]
    fn test_dismiss() {
        let mut queue = ToastQueue::default();
        let a = queue.push(ToastKind::Success, "one");
        queue.push(ToastKind::Success, "two");

        assert!(queue.dismiss(a));
        assert!(!queue.dismiss(a));
        assert_eq!(queue.toasts().len(), 1);
        assert_eq!(queue.toasts()[0].message, "two");
    }

    #[test]
    fn test_overflow_drops_oldest() {
        let mut queue = ToastQueue::default();
        for i in 0..(MAX_TOASTS + 2) {
            queue.push(ToastKind::Error, format!("e{}", i));
        }
        assert_eq!(queue.toasts().len(), MAX_TOASTS);
        assert_eq!(queue.toasts()[0].message, "e2");
    }
}
