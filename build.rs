use anyhow::Result;
use vergen::EmitBuilder;

// Short SHA and commit date end up in the `rib_parser --version` long version.
fn main() -> Result<()> {
    println!("cargo:rerun-if-changed=build.rs");
    EmitBuilder::builder()
        .git_sha(true)
        .git_commit_date()
        .emit()?;
    Ok(())
}
