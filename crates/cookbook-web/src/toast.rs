use crate::config::SiteConfig;
use crate::document::{Document, escape_html};
use crate::timer::{TimerQueue, TimerTask};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    Info,
    Success,
    Error,
    Warning,
}

impl ToastKind {
    pub fn color_class(self) -> &'static str {
        match self {
            ToastKind::Info => "bg-blue-600",
            ToastKind::Success => "bg-green-600",
            ToastKind::Error => "bg-red-600",
            ToastKind::Warning => "bg-yellow-600",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub kind: ToastKind,
    pub faded: bool,
}

impl Toast {
    pub fn to_html(&self) -> String {
        let style = if self.faded {
            " style=\"opacity: 0\""
        } else {
            ""
        };
        format!(
            "<div class=\"fixed bottom-4 right-4 {} text-white px-6 py-3 rounded-lg shadow-lg z-50 fade-in\" data-toast=\"{}\"{}>{}</div>",
            self.kind.color_class(),
            self.id,
            style,
            escape_html(&self.message)
        )
    }
}

/// Transient on-screen messages. Each toast fades after `duration` and is
/// removed `fade` later; toasts never coalesce or queue.
#[derive(Debug, Clone)]
pub struct Notifier {
    duration: Duration,
    fade: Duration,
    next_id: u64,
}

impl Notifier {
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            duration: config.toast_duration(),
            fade: config.toast_fade(),
            next_id: 0,
        }
    }

    pub fn notify(
        &mut self,
        doc: &mut Document,
        timers: &mut TimerQueue,
        message: &str,
        kind: ToastKind,
        now: Instant,
    ) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        doc.push_toast(Toast {
            id,
            message: message.to_string(),
            kind,
            faded: false,
        });
        timers.schedule(now + self.duration, TimerTask::ToastFade { toast: id });
        tracing::debug!(id, ?kind, message, "toast shown");
        id
    }

    pub fn fade(&self, doc: &mut Document, timers: &mut TimerQueue, toast: u64, at: Instant) {
        if let Some(entry) = doc.toast_mut(toast) {
            entry.faded = true;
            timers.schedule(at + self.fade, TimerTask::ToastRemove { toast });
        }
    }

    pub fn remove(&self, doc: &mut Document, toast: u64) {
        doc.remove_toast(toast);
    }
}
