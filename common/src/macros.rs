//! Thin logging wrappers so the rest of the workspace does not name
//! `tracing` directly at every call site. They expand through the
//! `$crate::tracing` re-export and therefore resolve in any consumer.

#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => { $crate::tracing::info!($($arg)*) };
}

#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => { $crate::tracing::info!($($arg)*) };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => { $crate::tracing::warn!($($arg)*) };
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => { $crate::tracing::error!($($arg)*) };
}
