use dioxus::prelude::*;

/// How long a toast stays on screen, in milliseconds.
pub const TOAST_DURATION_MS: u32 = 5_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Error,
}

impl ToastKind {
    pub fn alert_class(&self) -> &'static str {
        match self {
            ToastKind::Info => "alert-info",
            ToastKind::Success => "alert-success",
            ToastKind::Error => "alert-error",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    pub message: String,
}

/// Queue of visible toasts, provided once by `App`.
#[derive(Clone, Copy)]
pub struct ToastContext {
    toasts: Signal<Vec<Toast>>,
    next_id: Signal<u32>,
}

impl ToastContext {
    pub fn new() -> Self {
        Self {
            toasts: Signal::new(Vec::new()),
            next_id: Signal::new(1),
        }
    }

    pub fn toasts(&self) -> Vec<Toast> {
        self.toasts.read().clone()
    }

    /// Shows a toast that dismisses itself after [`TOAST_DURATION_MS`].
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) {
        let id = (self.next_id)();
        self.next_id.set(id.wrapping_add(1));
        self.toasts.write().push(Toast {
            id,
            kind,
            message: message.into(),
        });

        #[cfg(feature = "web")]
        {
            let mut ctx = *self;
            spawn(async move {
                gloo_timers::future::TimeoutFuture::new(TOAST_DURATION_MS).await;
                ctx.dismiss(id);
            });
        }
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.push(ToastKind::Info, message);
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.push(ToastKind::Success, message);
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(ToastKind::Error, message);
    }

    pub fn dismiss(&mut self, id: u32) {
        self.toasts.write().retain(|toast| toast.id != id);
    }
}
