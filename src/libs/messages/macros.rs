//! Console and log output for [`Message`](crate::libs::messages::Message) values.
//!
//! When debug mode is on (`SHIFTBOOK_DEBUG` or `RUST_LOG` set) every message
//! becomes a `tracing` event at the matching level; otherwise it is written to
//! the console with a status prefix. `msg_print!(msg, true)` pads a section
//! header with blank lines.
//!
//! ```rust
//! use shiftbook::{msg_print, msg_success};
//! use shiftbook::libs::messages::Message;
//!
//! msg_print!(Message::ShiftsHeader, true);
//! msg_success!(Message::ConfigSaved);
//! ```

use std::sync::OnceLock;

static DEBUG_MODE: OnceLock<bool> = OnceLock::new();

/// Whether console output should be routed through `tracing`. Cached after the first call.
pub fn is_debug_mode() -> bool {
    *DEBUG_MODE.get_or_init(|| std::env::var("SHIFTBOOK_DEBUG").is_ok() || std::env::var("RUST_LOG").is_ok())
}

/// Shared routing for the `msg_*` macros: a tracing event in debug mode,
/// `println!` or `eprintln!` otherwise.
#[doc(hidden)]
#[macro_export]
macro_rules! __msg_emit {
    ($level:ident, $console:ident, $prefix:expr, $msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::$level!("{}{}", $prefix, $msg);
        } else {
            $console!("{}{}", $prefix, $msg);
        }
    };
}

/// Plain output. With `true`, the message is framed by blank lines.
#[macro_export]
macro_rules! msg_print {
    ($msg:expr) => {
        $crate::__msg_emit!(info, println, "", $msg)
    };
    ($msg:expr, true) => {
        $crate::__msg_emit!(info, println, "\n", format!("{}\n", $msg))
    };
}

#[macro_export]
macro_rules! msg_success {
    ($msg:expr) => {
        $crate::__msg_emit!(info, println, "✅ ", $msg)
    };
}

/// Goes to stderr outside debug mode.
#[macro_export]
macro_rules! msg_error {
    ($msg:expr) => {
        $crate::__msg_emit!(error, eprintln, "❌ ", $msg)
    };
}

#[macro_export]
macro_rules! msg_warning {
    ($msg:expr) => {
        $crate::__msg_emit!(warn, println, "⚠️ ", $msg)
    };
}

#[macro_export]
macro_rules! msg_info {
    ($msg:expr) => {
        $crate::__msg_emit!(info, println, "ℹ️ ", $msg)
    };
}

/// Silent unless debug mode is on.
#[macro_export]
macro_rules! msg_debug {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::debug!("🔍 {}", $msg);
        }
    };
}

/// Builds an `anyhow::Error` from a [`Message`](crate::libs::messages::Message).
#[macro_export]
macro_rules! msg_error_anyhow {
    ($msg:expr) => {
        anyhow::anyhow!("❌ {}", $msg)
    };
}
