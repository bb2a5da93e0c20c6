use strum::AsRefStr;

use super::copy;
use crate::domain::errors::AppError;

/// Visible toasts at once; a new toast replaces the oldest
pub const TOAST_LIMIT: usize = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum ToastKind {
    /// Blocking problem with the user's input
    Destructive,
    Success,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub title: String,
    pub description: String,
}

impl Toast {
    pub fn css_class(&self) -> String {
        format!("toast toast-{}", self.kind.as_ref())
    }
}

/// Transient notifications, newest first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastQueue {
    items: Vec<Toast>,
    next_id: u64,
    limit: usize,
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::with_limit(TOAST_LIMIT)
    }
}

impl ToastQueue {
    pub fn with_limit(limit: usize) -> Self {
        Self { items: Vec::new(), next_id: 1, limit: limit.max(1) }
    }

    /// Show a toast and return its id for later dismissal
    pub fn push(&mut self, kind: ToastKind, title: &str, description: &str) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.insert(
            0,
            Toast { id, kind, title: title.to_string(), description: description.to_string() },
        );
        self.items.truncate(self.limit);
        id
    }

    /// Unknown ids are ignored (the toast may already be gone)
    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|t| t.id != id);
    }

    pub fn items(&self) -> &[Toast] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// What to show, before it gets an id in the queue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastSpec {
    pub kind: ToastKind,
    pub title: &'static str,
    pub description: &'static str,
}

/// Toast for an Analyze click refused before any request.
/// Other errors surface in the chart panel instead.
pub fn rejection_toast(err: &AppError) -> Option<ToastSpec> {
    match err {
        AppError::Validation(_) => Some(ToastSpec {
            kind: ToastKind::Destructive,
            title: copy::WARNING_TITLE,
            description: copy::EMPTY_SYMBOL,
        }),
        _ => None,
    }
}

pub fn download_toast() -> ToastSpec {
    ToastSpec { kind: ToastKind::Success, title: copy::SUCCESS_TITLE, description: copy::DOWNLOAD_DONE }
}
