use dioxus::prelude::*;

use crate::{
    domain::{AppState, Notification, NotificationKind},
    util::generate_id,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Warning,
    Error,
}

impl From<NotificationKind> for ToastKind {
    fn from(kind: NotificationKind) -> Self {
        match kind {
            NotificationKind::Info => Self::Info,
            NotificationKind::Success => Self::Success,
            NotificationKind::Warning => Self::Warning,
            NotificationKind::Error => Self::Error,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ToastMessage {
    pub id: String,
    pub kind: ToastKind,
    pub title: Option<String>,
    pub text: String,
}

impl ToastMessage {
    pub fn new(kind: ToastKind, text: impl Into<String>) -> Self {
        Self {
            id: generate_id("toast"),
            kind,
            title: None,
            text: text.into(),
        }
    }
}

impl From<Notification> for ToastMessage {
    fn from(notification: Notification) -> Self {
        Self {
            title: Some(notification.title),
            ..Self::new(notification.kind.into(), notification.description)
        }
    }
}

fn enqueue(entries: &mut Vec<ToastMessage>, message: ToastMessage, limit: usize) {
    entries.push(message);
    let overflow = entries.len().saturating_sub(limit.max(1));
    entries.drain(..overflow);
}

pub fn push_toast(mut toasts: Signal<Vec<ToastMessage>>, message: impl Into<ToastMessage>, limit: usize) {
    let message = message.into();
    toasts.with_mut(|entries| enqueue(entries, message, limit));
}

#[component]
pub fn Toast() -> Element {
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let views = toasts()
        .into_iter()
        .map(ToastView::from)
        .collect::<Vec<_>>();

    if views.is_empty() {
        return rsx! { Fragment {} };
    }

    rsx! {
        div {
            class: "pointer-events-none fixed inset-x-0 bottom-4 flex justify-center",
            ul {
                class: "space-y-3",
                for view in views {
                    ToastCard { key: "{view.id}", view, toasts: toasts.clone() }
                }
            }
        }
    }
}

#[component]
fn ToastCard(view: ToastView, toasts: Signal<Vec<ToastMessage>>) -> Element {
    let state = use_context::<Signal<AppState>>();
    let dismiss_after = state.with(|st| st.config.ui.toast_auto_dismiss());
    let toasts_for_timer = toasts.clone();
    let toast_id = view.id.clone();
    let _auto_dismiss = use_future(move || {
        let mut toasts = toasts_for_timer.clone();
        let id = toast_id.clone();
        async move {
            tokio::time::sleep(dismiss_after).await;
            toasts.with_mut(|items| items.retain(|toast| toast.id != id));
        }
    });

    let class = format!(
        "pointer-events-auto flex items-start gap-3 rounded-xl border px-4 py-3 shadow-lg backdrop-blur {}",
        view.theme
    );
    rsx! {
        li {
            class: class,
            span { class: "text-lg", "{view.icon}" }
            div {
                if let Some(title) = view.title.clone() {
                    p { class: "text-sm font-semibold", "{title}" }
                }
                p { class: "text-sm", "{view.text}" }
            }
            button {
                class: "ml-3 text-xs uppercase tracking-wide text-slate-300 hover:text-white",
                onclick: move |_| {
                    let target = view.id.clone();
                    toasts.with_mut(|items| items.retain(|toast| toast.id != target));
                },
                "Dismiss"
            }
        }
    }
}

#[derive(Clone, PartialEq)]
struct ToastView {
    id: String,
    title: Option<String>,
    text: String,
    theme: &'static str,
    icon: &'static str,
}

impl From<ToastMessage> for ToastView {
    fn from(message: ToastMessage) -> Self {
        let (theme, icon) = match message.kind {
            ToastKind::Info => ("border-sky-500/40 bg-sky-500/10 text-sky-100", "ℹ️"),
            ToastKind::Success => (
                "border-emerald-500/40 bg-emerald-500/10 text-emerald-100",
                "✅",
            ),
            ToastKind::Warning => ("border-amber-500/40 bg-amber-500/10 text-amber-100", "⚠️"),
            ToastKind::Error => ("border-rose-500/40 bg-rose-500/10 text-rose-100", "⛔"),
        };

        ToastView {
            id: message.id,
            title: message.title,
            text: message.text,
            theme,
            icon,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn oldest_toasts_drop_past_limit() {
        let mut entries = Vec::new();
        for n in 0..4 {
            enqueue(&mut entries, ToastMessage::new(ToastKind::Info, format!("m{n}")), 3);
        }
        let texts: Vec<_> = entries.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["m1", "m2", "m3"]);

        enqueue(&mut entries, ToastMessage::new(ToastKind::Info, "solo"), 0);
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn notifications_keep_title_and_kind() {
        let toast = ToastMessage::from(Notification::new(
            NotificationKind::Warning,
            "Issue Reported",
            "torn bags",
        ));
        assert_eq!(toast.kind, ToastKind::Warning);
        assert_eq!(toast.title.as_deref(), Some("Issue Reported"));
        assert_eq!(toast.text, "torn bags");
        assert!(toast.id.starts_with("toast-"));
    }
}
