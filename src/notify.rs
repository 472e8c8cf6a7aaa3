use async_trait::async_trait;
use serde::Serialize;
use tracing::info;

/// Fire-and-forget user-facing message, the shape the UI renders as a toast.
#[derive(Debug, Clone, Serialize)]
pub struct Toast {
    pub title: String,
    pub description: String,
}

impl Toast {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

#[async_trait]
pub trait NotificationSink: Send + Sync {
    async fn notify(&self, toast: Toast);
}

/// Default sink: toasts go to the structured log, nothing else.
pub struct TracingSink;

#[async_trait]
impl NotificationSink for TracingSink {
    async fn notify(&self, toast: Toast) {
        info!(title = %toast.title, description = %toast.description, "toast");
    }
}

/// Captures toasts so tests can assert on them.
#[cfg(test)]
#[derive(Default)]
pub struct RecordingSink {
    pub toasts: std::sync::Mutex<Vec<Toast>>,
}

#[cfg(test)]
#[async_trait]
impl NotificationSink for RecordingSink {
    async fn notify(&self, toast: Toast) {
        self.toasts.lock().expect("sink lock").push(toast);
    }
}
