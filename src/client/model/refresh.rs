use dioxus::prelude::*;

/// Counters that data views read inside their `use_resource` closures, so bumping one
/// refetches every view that depends on it.
#[derive(Clone, Copy)]
pub struct RefreshContext {
    pub staff: Signal<u32>,
    pub logs: Signal<u32>,
    pub appeals: Signal<u32>,
    pub loa_requests: Signal<u32>,
}

impl RefreshContext {
    pub fn new() -> Self {
        Self {
            staff: Signal::new(0),
            logs: Signal::new(0),
            appeals: Signal::new(0),
            loa_requests: Signal::new(0),
        }
    }

    pub fn bump(mut signal: Signal<u32>) {
        let next = signal().wrapping_add(1);
        signal.set(next);
    }
}
