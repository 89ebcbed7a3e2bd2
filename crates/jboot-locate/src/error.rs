use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LocateError {
    #[error("could not find {library}: no local JRE and no usable registered installation")]
    JreNotFound { library: &'static str },

    #[error("no JVM library at {}", path.display())]
    JvmNotFound { path: PathBuf },

    #[error("error opening registry key '{key}': {source}")]
    RegistryKey {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed reading value '{value}' of registry key '{key}': {source}")]
    RegistryValue {
        key: String,
        value: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("registry value '{value}' is {len} characters, too long for an installation path")]
    ValueTooLong { value: &'static str, len: usize },

    #[error("registered runtime version is '{found}', but '{required}' is required")]
    VersionMismatch {
        found: String,
        required: &'static str,
    },

    #[error("this platform has no system-wide JRE registration")]
    NoSystemStore,
}
