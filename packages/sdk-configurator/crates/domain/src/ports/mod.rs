pub mod post_build;
pub mod probe;
