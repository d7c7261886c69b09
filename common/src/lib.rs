pub mod config;
pub mod error;
pub mod model;

mod macros;

// The logging macros below expand through this path, so consumers do not
// need their own `tracing` dependency to use them.
pub use tracing;
