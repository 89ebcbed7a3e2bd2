//! Dynamic load of the JVM shared library for the jboot launcher.
//!
//! [`VmLibrary::load`] maps the library at a resolved path and resolves the
//! two JNI invocation entry points (`JNI_CreateJavaVM` and
//! `JNI_GetDefaultJavaVMInitArgs`) into an [`InvocationFunctions`] table.
//! The [`timer`] module is the launcher's interval timer: platform ticks
//! converted to microseconds for startup diagnostics.
//!
//! ```rust,no_run
//! use std::path::Path;
//! use jboot_vm::{VmLibrary, timer};
//!
//! # fn run() -> Result<(), jboot_vm::LoadError> {
//! let start = timer::ticks();
//! let vm = VmLibrary::load(Path::new("/opt/jre/bin/client/libjvm.so"))?;
//! let functions = vm.functions();
//! let micros = timer::ticks_to_micros(timer::ticks() - start);
//! # let _ = (functions, micros);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod loader;
pub mod timer;

pub use error::LoadError;
pub use loader::{CreateJavaVmFn, GetDefaultInitArgsFn, InvocationFunctions, VmLibrary};
