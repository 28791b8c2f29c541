pub mod native;
pub mod shell;
