//! Cross-platform logging macros.
//!
//! On the web the message goes straight to the browser console; on desktop
//! it becomes a `tracing` event so the subscriber installed in `main` picks
//! it up together with the core crate's events.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Debug,
    Info,
    Warn,
    Error,
}

#[cfg(target_arch = "wasm32")]
pub fn log_impl(level: Level, msg: &str) {
    let msg = msg.into();
    match level {
        Level::Debug => web_sys::console::debug_1(&msg),
        Level::Info => web_sys::console::log_1(&msg),
        Level::Warn => web_sys::console::warn_1(&msg),
        Level::Error => web_sys::console::error_1(&msg),
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn log_impl(level: Level, msg: &str) {
    match level {
        Level::Debug => tracing::debug!("{}", msg),
        Level::Info => tracing::info!("{}", msg),
        Level::Warn => tracing::warn!("{}", msg),
        Level::Error => tracing::error!("{}", msg),
    }
}

#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        $crate::logging::log_impl($crate::logging::Level::Debug, &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        $crate::logging::log_impl($crate::logging::Level::Info, &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        $crate::logging::log_impl($crate::logging::Level::Warn, &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        $crate::logging::log_impl($crate::logging::Level::Error, &format!($($arg)*))
    };
}
