//! Facade over the configurator layers.

pub use application;
pub use domain;
pub use infrastructure;
