pub mod configuration;
pub mod delta;
pub mod install;
pub mod relocation;
pub mod rules;
pub mod version;
