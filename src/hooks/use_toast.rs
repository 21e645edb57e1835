// ============================================================================
// USE TOAST - Notificaciones transitorias
// ============================================================================

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config::CONFIG;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    pub fn class(&self) -> &'static str {
        match self {
            Self::Success => "toast toast-success",
            Self::Error => "toast toast-error",
            Self::Info => "toast toast-info",
        }
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct ToastMessage {
    pub kind: ToastKind,
    pub text: String,
}

impl ToastMessage {
    pub fn success(text: impl Into<String>) -> Self {
        Self { kind: ToastKind::Success, text: text.into() }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { kind: ToastKind::Error, text: text.into() }
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self { kind: ToastKind::Info, text: text.into() }
    }
}

#[derive(Clone, PartialEq)]
pub struct UseToastHandle {
    pub current: Option<ToastMessage>,
    pub show: Callback<ToastMessage>,
    pub dismiss: Callback<()>,
}

#[hook]
pub fn use_toast() -> UseToastHandle {
    let current = use_state(|| None::<ToastMessage>);
    // Un solo timer vivo: reemplazarlo cancela el anterior
    let timer = use_mut_ref(|| None::<Timeout>);

    let show = {
        let current = current.clone();
        let timer = timer.clone();
        Callback::from(move |message: ToastMessage| {
            current.set(Some(message));
            let current = current.clone();
            let timeout = Timeout::new(CONFIG.toast_duration_ms, move || current.set(None));
            *timer.borrow_mut() = Some(timeout);
        })
    };

    let dismiss = {
        let current = current.clone();
        Callback::from(move |_| {
            timer.borrow_mut().take();
            current.set(None);
        })
    };

    UseToastHandle {
        current: (*current).clone(),
        show,
        dismiss,
    }
}
