//! JRE installation discovery for the jboot launcher.
//!
//! Finds the runtime the launcher should start: first a JRE colocated with
//! the launcher executable, then a private `jre/` directory next to it, and
//! last a system-registered installation (the JavaSoft registry hierarchy on
//! Windows). Once a home is resolved, [`jvm_path`] pins down the shared
//! library for a named VM variant.
//!
//! # Quick start
//!
//! ```rust,no_run
//! use jboot_locate::{JreResolver, jvm_path, registry};
//!
//! # fn run() -> Result<(), jboot_locate::LocateError> {
//! let store = registry::system();
//! let resolver = JreResolver::new(store.as_ref());
//!
//! let home = resolver.resolve()?;
//! let jvm = jvm_path(&home, "client")?;
//! println!("will load {}", jvm.display());
//! # Ok(())
//! # }
//! ```

pub mod apphome;
pub mod error;
pub mod registry;
pub mod resolve;

pub use error::LocateError;
pub use registry::ConfiguredLocation;
pub use resolve::{JAVA_LIB, JVM_LIB, JreHome, JreResolver, jvm_path};
