//! Runtime detection for the project initializers

pub mod check;

pub use check::{is_available, probe, JsRuntime, RuntimeInfo};
