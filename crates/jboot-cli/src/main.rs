use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

use jboot_locate::{JreResolver, jvm_path, registry};
use jboot_vm::{VmLibrary, timer};

#[derive(Parser)]
#[command(name = "jboot", about = "Resolve and load a Java runtime for this machine")]
struct Cli {
    /// VM variant whose library should be located (e.g. client, server)
    #[arg(long, default_value = "client")]
    variant: String,

    /// Search this directory for a colocated or private JRE instead of the
    /// launcher's own location
    #[arg(long)]
    app_home: Option<PathBuf>,

    /// Map the library and resolve the JNI entry points instead of just
    /// locating it
    #[arg(long)]
    load: bool,
}

fn main() -> Result<()> {
    // Diagnostics go to stderr; stdout carries only the resolved paths.
    fmt()
        .with_env_filter(EnvFilter::from_env("JBOOT_LOG"))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let started = timer::ticks();

    let store = registry::system();
    let resolver = JreResolver::new(store.as_ref());

    let home = match &cli.app_home {
        Some(dir) => resolver.resolve_from(Some(dir))?,
        None => resolver.resolve()?,
    };
    println!("JRE home: {}", home.path().display());

    let jvm = jvm_path(&home, &cli.variant)?;
    println!("JVM library: {}", jvm.display());

    if cli.load {
        let vm = VmLibrary::load(&jvm).with_context(|| format!("loading {}", jvm.display()))?;
        println!("JNI entry points resolved in {}", vm.path().display());
        println!("X usage text: {}", vm.xusage_path().display());
    }

    let micros = timer::ticks_to_micros(timer::ticks() - started);
    tracing::info!(micros, variant = %cli.variant, "bootstrap sequence finished");
    Ok(())
}
