use gloo_timers::callback::Timeout;
use leptos::*;
use once_cell::sync::OnceCell;

use crate::config::config;
use crate::domain::logging::{LogComponent, get_logger};
use crate::presentation::{ToastQueue, ToastSpec};

/// Hover info for the chart tooltip, in canvas CSS pixels
#[derive(Clone, Debug, PartialEq)]
pub struct TooltipData {
    pub index: usize,
    pub x: f64,
    pub y: f64,
    pub text: String,
}

pub struct Globals {
    pub toasts: RwSignal<ToastQueue>,
    pub tooltip: RwSignal<Option<TooltipData>>,
}

static GLOBALS: OnceCell<Globals> = OnceCell::new();

pub fn globals() -> &'static Globals {
    GLOBALS.get_or_init(|| Globals {
        toasts: create_rw_signal(ToastQueue::default()),
        tooltip: create_rw_signal(None),
    })
}

crate::global_signals! {
    pub toasts => toasts: ToastQueue,
    pub tooltip => tooltip: Option<TooltipData>,
}

/// Show a toast and schedule its dismissal
pub fn notify(toast: ToastSpec) {
    let id = toasts().try_update(|queue| queue.push(toast.kind, toast.title, toast.description));
    get_logger().debug(
        LogComponent::Presentation("Toast"),
        &format!("🔔 [{}] {}: {}", toast.kind.as_ref(), toast.title, toast.description),
    );
    if let Some(id) = id {
        Timeout::new(config().toast_timeout_ms, move || dismiss_toast(id)).forget();
    }
}

pub fn dismiss_toast(id: u64) {
    toasts().update(|queue| queue.dismiss(id));
}
