pub mod configure_service;
pub mod post_build_service;

pub use configure_service::{ConfigureRequest, ConfigureService, VersionStatus};
pub use post_build_service::PostBuildService;
