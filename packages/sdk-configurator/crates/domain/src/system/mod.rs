pub mod platform;

pub use platform::{BuildConfigurationKind, PlatformDetector, TargetPlatform};
