//! Command-line surface: option table, action selection and dispatch.

mod dispatch;
mod logging;
mod options;
mod resolver;

pub use dispatch::*;
pub use logging::*;
pub use options::*;
pub use resolver::*;
