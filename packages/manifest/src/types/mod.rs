pub mod discovery;
pub mod linkage;
pub mod output;

pub use discovery::*;
pub use linkage::*;
pub use output::*;
