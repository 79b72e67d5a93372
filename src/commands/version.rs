//! Version command implementation

use std::io::Write;

use crate::error::Result;

/// Run version command
pub fn run() -> Result<()> {
    write_version(&mut std::io::stdout().lock())
}

fn write_version(out: &mut impl Write) -> Result<()> {
    writeln!(out, "roster {}", env!("CARGO_PKG_VERSION"))?;
    writeln!(out, "{}", env!("CARGO_PKG_DESCRIPTION"))?;
    writeln!(out)?;
    writeln!(out, "Build info:")?;
    writeln!(out, "  Minimum Rust version: {}", env!("CARGO_PKG_RUST_VERSION"))?;
    writeln!(out, "  Profile: {}", build_profile())?;
    Ok(())
}

fn build_profile() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    }
}
