use std::path::{Path, PathBuf};

use crate::apphome;
use crate::error::LocateError;
use crate::registry::ConfiguredLocation;

/// File name of the core runtime library whose presence marks a JRE.
#[cfg(windows)]
pub const JAVA_LIB: &str = "java.dll";
#[cfg(not(windows))]
pub const JAVA_LIB: &str = "libjava.so";

/// File name of the loadable VM library under `bin/<variant>/`.
#[cfg(windows)]
pub const JVM_LIB: &str = "jvm.dll";
#[cfg(not(windows))]
pub const JVM_LIB: &str = "libjvm.so";

/// Root directory of a resolved JRE installation.
///
/// Guaranteed (at resolution time) to have held the layout that was probed
/// for; the probe and any later load are not atomic, so a concurrent
/// filesystem mutation can still invalidate it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JreHome(PathBuf);

impl JreHome {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    pub fn path(&self) -> &Path {
        &self.0
    }
}

/// Finds the JRE the launcher should use.
pub struct JreResolver<'a> {
    configured: &'a dyn ConfiguredLocation,
}

impl<'a> JreResolver<'a> {
    pub fn new(configured: &'a dyn ConfiguredLocation) -> Self {
        Self { configured }
    }

    /// Resolve relative to the running executable, falling back to the
    /// configured system location.
    pub fn resolve(&self) -> Result<JreHome, LocateError> {
        self.resolve_from(apphome::application_home().as_deref())
    }

    /// Injectable form of [`resolve`]: the application home (if any) is
    /// supplied by the caller. Fixed priority, first hit wins:
    ///
    /// 1. `<apphome>/bin/JAVA_LIB` present → home is `<apphome>`
    /// 2. `<apphome>/jre/bin/JAVA_LIB` present → home is `<apphome>/jre`
    /// 3. whatever the configured-location probe reports, verbatim
    pub fn resolve_from(&self, app_home: Option<&Path>) -> Result<JreHome, LocateError> {
        if let Some(home) = app_home {
            // JRE colocated with the application?
            if home.join("bin").join(JAVA_LIB).exists() {
                tracing::debug!(path = %home.display(), "JRE colocated with launcher");
                return Ok(JreHome(home.to_path_buf()));
            }

            // Private JRE shipped in <apphome>/jre?
            let private = home.join("jre");
            if private.join("bin").join(JAVA_LIB).exists() {
                tracing::debug!(path = %private.display(), "private JRE under launcher home");
                return Ok(JreHome(private));
            }
        }

        match self.configured.probe() {
            Ok(home) => {
                tracing::debug!(path = %home.display(), "JRE from configured location");
                Ok(JreHome(home))
            }
            Err(err) => {
                tracing::warn!(%err, "configured-location probe failed");
                Err(LocateError::JreNotFound { library: JAVA_LIB })
            }
        }
    }
}

/// Construct the path of the VM library for `variant` under `home` and
/// confirm it exists. Single-candidate check, no search.
pub fn jvm_path(home: &JreHome, variant: &str) -> Result<PathBuf, LocateError> {
    let path = home.path().join("bin").join(variant).join(JVM_LIB);
    if path.exists() {
        Ok(path)
    } else {
        Err(LocateError::JvmNotFound { path })
    }
}
