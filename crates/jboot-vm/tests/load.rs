//! Load-failure behavior against real files: unmappable paths and mapped
//! libraries that export no JNI interfaces.

use std::fs;

use jboot_vm::{LoadError, VmLibrary};

#[test]
fn nonexistent_path_fails_to_open() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("no-such-jvm-library");

    let err = VmLibrary::load(&path).unwrap_err();
    match err {
        LoadError::Open { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("expected Open, got {other:?}"),
    }
}

#[test]
fn existing_file_that_is_not_a_library_fails_to_open() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("garbage.bin");
    fs::write(&path, b"this is not a shared object").unwrap();

    let err = VmLibrary::load(&path).unwrap_err();
    assert!(matches!(err, LoadError::Open { .. }), "got {err:?}");
}

/// A mappable library without the JNI exports must come back as
/// MissingSymbols, never as a partial success, and the handle is released.
#[cfg(unix)]
#[test]
fn foreign_library_reports_missing_symbols() {
    use std::path::Path;

    // libm ships with every glibc/musl system and exports no JNI symbols.
    // Skip quietly on the odd host where neither soname resolves.
    let candidates = ["libm.so.6", "libm.so"];
    let Some(name) = candidates
        .iter()
        .find(|name| unsafe { libloading::Library::new(name) }.is_ok())
    else {
        return;
    };

    let err = VmLibrary::load(Path::new(name)).unwrap_err();
    match err {
        LoadError::MissingSymbols { path } => assert_eq!(path, Path::new(name)),
        other => panic!("expected MissingSymbols, got {other:?}"),
    }
}
