use std::path::PathBuf;

use crate::error::LocateError;

/// Exact runtime version accepted from the system store. Point releases
/// (1.3.1, 1.3.2, ...) keep reporting "1.3" here.
pub const CURRENT_VERSION_REQUIRED: &str = "1.3";

/// Store values longer than this are rejected; a home path that long could
/// never name a real installation root.
pub const MAX_VALUE_LEN: usize = 260;

/// Last-resort discovery of a system-registered JRE installation.
///
/// The resolver consults this only after both local layouts miss.
/// Implementations are read-only.
pub trait ConfiguredLocation {
    fn probe(&self) -> Result<PathBuf, LocateError>;
}

/// The platform's system-wide registration store. On Windows this reads
/// the JavaSoft registry hierarchy; other platforms have no equivalent
/// store and the probe always misses.
pub fn system() -> Box<dyn ConfiguredLocation> {
    #[cfg(windows)]
    {
        Box::new(JavaSoftRegistry)
    }
    #[cfg(not(windows))]
    {
        Box::new(NoSystemStore)
    }
}

/// Equality check against [`CURRENT_VERSION_REQUIRED`]. Exact match only,
/// no range or prefix forms.
pub fn check_current_version(found: &str) -> Result<(), LocateError> {
    if found == CURRENT_VERSION_REQUIRED {
        Ok(())
    } else {
        Err(LocateError::VersionMismatch {
            found: found.to_string(),
            required: CURRENT_VERSION_REQUIRED,
        })
    }
}

/// Bounded-length check for store values, capped at [`MAX_VALUE_LEN`].
pub fn check_value_len(value: &'static str, s: &str) -> Result<(), LocateError> {
    if s.len() > MAX_VALUE_LEN {
        Err(LocateError::ValueTooLong {
            value,
            len: s.len(),
        })
    } else {
        Ok(())
    }
}

#[cfg(not(windows))]
struct NoSystemStore;

#[cfg(not(windows))]
impl ConfiguredLocation for NoSystemStore {
    fn probe(&self) -> Result<PathBuf, LocateError> {
        Err(LocateError::NoSystemStore)
    }
}

#[cfg(windows)]
pub use javasoft::JavaSoftRegistry;

#[cfg(windows)]
mod javasoft {
    use std::path::PathBuf;

    use winreg::RegKey;
    use winreg::enums::{HKEY_LOCAL_MACHINE, KEY_READ};

    use super::{ConfiguredLocation, check_current_version, check_value_len};
    use crate::error::LocateError;

    const JRE_KEY: &str = r"Software\JavaSoft\Java Runtime Environment";

    /// Public-JRE lookup in `HKLM\Software\JavaSoft\Java Runtime
    /// Environment`: `CurrentVersion` selects a subkey whose `JavaHome`
    /// value is the installation root. Key handles are RAII-scoped, so
    /// they close on every exit path.
    pub struct JavaSoftRegistry;

    impl ConfiguredLocation for JavaSoftRegistry {
        fn probe(&self) -> Result<PathBuf, LocateError> {
            let hklm = RegKey::predef(HKEY_LOCAL_MACHINE);
            let root = hklm
                .open_subkey_with_flags(JRE_KEY, KEY_READ)
                .map_err(|source| LocateError::RegistryKey {
                    key: JRE_KEY.to_string(),
                    source,
                })?;

            let version = string_value(&root, JRE_KEY, "CurrentVersion")?;
            check_current_version(&version)?;

            let sub_name = format!("{JRE_KEY}\\{version}");
            let sub = root
                .open_subkey_with_flags(&version, KEY_READ)
                .map_err(|source| LocateError::RegistryKey {
                    key: sub_name.clone(),
                    source,
                })?;

            let home = string_value(&sub, &sub_name, "JavaHome")?;

            match string_value(&sub, &sub_name, "MicroVersion") {
                Ok(micro) => tracing::debug!(version, micro, "registered runtime version"),
                Err(_) => tracing::debug!(version, "registered runtime has no MicroVersion"),
            }

            Ok(PathBuf::from(home))
        }
    }

    fn string_value(
        key: &RegKey,
        key_name: &str,
        value: &'static str,
    ) -> Result<String, LocateError> {
        let s: String = key
            .get_value(value)
            .map_err(|source| LocateError::RegistryValue {
                key: key_name.to_string(),
                value,
                source,
            })?;
        check_value_len(value, &s)?;
        Ok(s)
    }
}

#[cfg(test)]
mod tests {
    use super::{CURRENT_VERSION_REQUIRED, MAX_VALUE_LEN, check_current_version, check_value_len};
    use crate::error::LocateError;

    #[test]
    fn accepted_version_passes() {
        check_current_version(CURRENT_VERSION_REQUIRED).unwrap();
    }

    #[test]
    fn newer_version_is_rejected_with_both_values_named() {
        let err = check_current_version("1.4").unwrap_err();
        match &err {
            LocateError::VersionMismatch { found, required } => {
                assert_eq!(found, "1.4");
                assert_eq!(*required, "1.3");
            }
            other => panic!("expected VersionMismatch, got {other:?}"),
        }
        let msg = err.to_string();
        assert!(msg.contains("1.4") && msg.contains("1.3"), "message: {msg}");
    }

    #[test]
    fn value_at_the_length_cap_is_accepted() {
        let s = "x".repeat(MAX_VALUE_LEN);
        check_value_len("JavaHome", &s).unwrap();
    }

    #[test]
    fn overlong_value_is_rejected_with_value_and_length_named() {
        let s = "x".repeat(MAX_VALUE_LEN + 1);
        let err = check_value_len("JavaHome", &s).unwrap_err();
        match &err {
            LocateError::ValueTooLong { value, len } => {
                assert_eq!(*value, "JavaHome");
                assert_eq!(*len, MAX_VALUE_LEN + 1);
            }
            other => panic!("expected ValueTooLong, got {other:?}"),
        }
        let msg = err.to_string();
        assert!(msg.contains("JavaHome") && msg.contains("261"), "message: {msg}");
    }

    #[test]
    fn point_release_strings_do_not_match() {
        // "1.3.1" installs still register CurrentVersion = "1.3"; a literal
        // point-release string is a mismatch.
        assert!(check_current_version("1.3.1").is_err());
    }
}
