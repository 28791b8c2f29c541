pub mod adapters;
pub mod system;

pub use adapters::native::NativeRunner;
pub use adapters::shell::ShellRunner;
pub use system::host::{HostFileSystem, ProcessEnvironment};
