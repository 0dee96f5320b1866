use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// Transient, dismissible notification shown at the top of a page.
#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }
}

#[component]
pub fn NoticeBar(
    notice: ReadSignal<Option<Notice>>,
    set_notice: WriteSignal<Option<Notice>>,
) -> impl IntoView {
    view! {
        {move || notice.get().map(|n| {
            let class = match n.kind {
                NoticeKind::Info => "notice notice-info",
                NoticeKind::Error => "notice notice-error",
            };
            view! {
                <div class=class>
                    <span class="notice-message">{n.message}</span>
                    <button class="notice-dismiss" on:click=move |_| set_notice.set(None)>
                        "Dismiss"
                    </button>
                </div>
            }
        })}
    }
}
