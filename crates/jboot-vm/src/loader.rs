use std::ffi::c_void;
use std::path::{Path, PathBuf};

use libloading::{Library, Symbol};

use crate::error::LoadError;

/// `JNI_CreateJavaVM(JavaVM **pvm, void **penv, void *args)`.
pub type CreateJavaVmFn =
    unsafe extern "system" fn(*mut *mut c_void, *mut *mut c_void, *mut c_void) -> i32;

/// `JNI_GetDefaultJavaVMInitArgs(void *args)`.
pub type GetDefaultInitArgsFn = unsafe extern "system" fn(*mut c_void) -> i32;

const CREATE_VM_SYMBOL: &[u8] = b"JNI_CreateJavaVM";
const DEFAULT_ARGS_SYMBOL: &[u8] = b"JNI_GetDefaultJavaVMInitArgs";

/// Resolved JNI invocation entry points.
///
/// The pointers are valid only while the [`VmLibrary`] they came from is
/// alive. Invoking them — with the argument shapes and calling convention
/// of the JNI invocation API — is the launcher's business.
#[derive(Clone, Copy, Debug)]
pub struct InvocationFunctions {
    pub create_java_vm: CreateJavaVmFn,
    pub get_default_init_args: GetDefaultInitArgsFn,
}

/// A JVM shared library mapped into the process with its invocation entry
/// points resolved.
#[derive(Debug)]
pub struct VmLibrary {
    path: PathBuf,
    functions: InvocationFunctions,
    // Dropping this unmaps the library and invalidates `functions`.
    _lib: Library,
}

impl VmLibrary {
    /// Map the library at `path` and resolve both JNI entry points.
    ///
    /// A library that maps but lacks the JNI exports is unmapped again
    /// before this returns (the classic C launcher left it mapped).
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        tracing::debug!(path = %path.display(), "loading VM library");

        let lib = unsafe { Library::new(path) }.map_err(|source| LoadError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        let Some(functions) = resolve_entry_points(&lib) else {
            tracing::warn!(path = %path.display(), "mapped library exports no JNI interfaces");
            // `lib` drops here, releasing the handle.
            return Err(LoadError::MissingSymbols {
                path: path.to_path_buf(),
            });
        };

        Ok(Self {
            path: path.to_path_buf(),
            functions,
            _lib: lib,
        })
    }

    /// Path the library was loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn functions(&self) -> InvocationFunctions {
        self.functions
    }

    /// Path of the `-X` usage text shipped next to the VM library.
    pub fn xusage_path(&self) -> PathBuf {
        xusage_path(&self.path)
    }
}

/// `Xusage.txt` sits in the same directory as the VM library itself.
pub fn xusage_path(jvm_path: &Path) -> PathBuf {
    jvm_path.with_file_name("Xusage.txt")
}

fn resolve_entry_points(lib: &Library) -> Option<InvocationFunctions> {
    let create_java_vm: Symbol<'_, CreateJavaVmFn> =
        unsafe { lib.get(CREATE_VM_SYMBOL) }.ok()?;
    let get_default_init_args: Symbol<'_, GetDefaultInitArgsFn> =
        unsafe { lib.get(DEFAULT_ARGS_SYMBOL) }.ok()?;
    Some(InvocationFunctions {
        create_java_vm: *create_java_vm,
        get_default_init_args: *get_default_init_args,
    })
}

#[cfg(test)]
mod tests {
    use super::xusage_path;
    use std::path::{Path, PathBuf};

    #[test]
    fn xusage_sits_next_to_the_library() {
        let jvm = Path::new("/opt/jre/bin/client/libjvm.so");
        assert_eq!(
            xusage_path(jvm),
            PathBuf::from("/opt/jre/bin/client/Xusage.txt")
        );
    }
}
