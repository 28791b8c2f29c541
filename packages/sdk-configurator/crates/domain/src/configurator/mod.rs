//! The three configuration passes: locate the SDK, probe it, and work out
//! where the built plug-in has to go.

mod locate;
mod probe;
mod relocate;

pub use locate::resolve_install_location;
pub use probe::probe_and_configure;
pub use relocate::{compute_output_relocation, find_ancestor, normalize_lexically, output_name};

#[cfg(test)]
pub(crate) mod fakes {
    use crate::ports::probe::{EnvironmentReader, FileSystemProbe};
    use std::collections::{HashMap, HashSet};
    use std::path::{Path, PathBuf};

    #[derive(Default)]
    pub struct FakeFs {
        dirs: HashSet<PathBuf>,
    }

    impl FakeFs {
        pub fn with_dirs<P: AsRef<Path>>(dirs: &[P]) -> Self {
            Self {
                dirs: dirs.iter().map(|d| d.as_ref().to_path_buf()).collect(),
            }
        }
    }

    impl FileSystemProbe for FakeFs {
        fn dir_exists(&self, path: &Path) -> bool {
            self.dirs.contains(path)
        }
    }

    #[derive(Default)]
    pub struct FakeEnv {
        vars: HashMap<String, String>,
    }

    impl FakeEnv {
        pub fn with(name: &str, value: &str) -> Self {
            let mut vars = HashMap::new();
            vars.insert(name.to_string(), value.to_string());
            Self { vars }
        }
    }

    impl EnvironmentReader for FakeEnv {
        fn var(&self, name: &str) -> Option<String> {
            self.vars.get(name).cloned()
        }
    }
}
