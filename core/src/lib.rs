pub mod registry;
pub mod report;

pub use registry::Registry;
