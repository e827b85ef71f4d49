use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::banner::{expire_after, BANNER_TTL_MS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub text: String,
}

#[derive(Debug, Clone, Default)]
pub struct ToastQueue {
    items: Vec<Toast>,
    issued: u64,
}

impl ToastQueue {
    pub fn push(&mut self, kind: ToastKind, text: String) -> u64 {
        self.issued += 1;
        self.items.push(Toast {
            id: self.issued,
            kind,
            text,
        });
        self.issued
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|t| t.id != id);
    }

    pub fn items(&self) -> &[Toast] {
        &self.items
    }
}

/// Service for page-level notifications (top-right toasts)
#[derive(Clone, Copy)]
pub struct ToastService {
    queue: RwSignal<ToastQueue>,
}

impl ToastService {
    pub fn new() -> Self {
        Self {
            queue: RwSignal::new(ToastQueue::default()),
        }
    }

    pub fn error(&self, text: impl Into<String>) {
        self.show(ToastKind::Error, text.into());
    }

    pub fn success(&self, text: impl Into<String>) {
        self.show(ToastKind::Success, text.into());
    }

    fn show(&self, kind: ToastKind, text: String) {
        let Some(id) = self.queue.try_update(|q| q.push(kind, text)) else {
            return;
        };
        let queue = self.queue;
        spawn_local(expire_after(TimeoutFuture::new(BANNER_TTL_MS), id, move |id| {
            queue.try_update(|q| q.dismiss(id));
        }));
    }
}

impl Default for ToastService {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_toasts() -> ToastService {
    use_context::<ToastService>().expect("ToastService not provided in context")
}

#[component]
pub fn ToastHost() -> impl IntoView {
    let service = use_toasts();
    let queue = service.queue;

    view! {
        <div class="toast-host" aria-live="polite">
            <For
                each=move || queue.with(|q| q.items().to_vec())
                key=|t| t.id
                children=move |t| {
                    let id = t.id;
                    let class = match t.kind {
                        ToastKind::Success => "toast toast--success",
                        ToastKind::Error => "toast toast--error",
                    };
                    view! {
                        <div class=class on:click=move |_| queue.update(|q| q.dismiss(id))>
                            {t.text}
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
    fn push_and_dismiss() {
        let mut q = ToastQueue::default();
        let a = q.push(ToastKind::Error, "Sync failed".into());
        let b = q.push(ToastKind::Success, "Welcome".into());
        assert_eq!(q.items().len(), 2);
        q.dismiss(a);
        assert_eq!(q.items().len(), 1);
        assert_eq!(q.items()[0].id, b);
        q.dismiss(a);
        assert_eq!(q.items().len(), 1);
    }
}
