use leptos::logging::log;
use std::panic;

/// Routes panics to the browser console and explains reactive-owner failures.
pub fn set_custom_panic_hook() {
    panic::set_hook(Box::new(|panic_info| {
        console_error_panic_hook::hook(panic_info);

        let message = if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.as_str()
        } else if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s
        } else {
            "Unknown panic"
        };

        if message.contains("OwnerDisposed") || message.contains("disposed") {
            log!("[PANIC] A view was torn down while it was still being updated. Usually:");
            log!("[PANIC] 1. An event handler kept a store handle after its page was left");
            log!("[PANIC] 2. A signal was written from outside the reactive owner that created it");
        }
    }));
}

/// Call once before mounting the app.
pub fn init() {
    set_custom_panic_hook();
    log!("[PANIC_HOOK] Custom panic hook set up");
}
