//! Status macros on top of `tracing`.
//!
//! Every event carries a `status` field so the terminal formatter can pick
//! the right symbol without inspecting the message text. All of them share
//! the [`STATUS_TARGET`] target, which the terminal keeps enabled regardless
//! of the log filter.

/// Target of every status event.
pub const STATUS_TARGET: &str = "rentr::status";

#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        $crate::__tracing::info!(target: "rentr::status", status = "success", $($arg)*)
    };
}

#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        $crate::__tracing::info!(target: "rentr::status", status = "info", $($arg)*)
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        $crate::__tracing::warn!(target: "rentr::status", status = "warn", $($arg)*)
    };
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        $crate::__tracing::error!(target: "rentr::status", status = "error", $($arg)*)
    };
}
