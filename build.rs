// Copies the static page into `dist/`. The wasm bundle itself is built by `cargo run`
// (see src/main.rs) so that this script never re-enters cargo.
use std::{fs, path::Path};

use fs_extra::dir::{copy, CopyOptions};

fn main() {
    println!("cargo:rerun-if-changed=static");

    let static_dir = Path::new("static");
    if !static_dir.exists() {
        return;
    }

    let out_dir = Path::new("dist");
    if out_dir.exists() {
        fs::remove_dir_all(out_dir).ok();
    }
    fs::create_dir_all(out_dir).ok();

    let opts = CopyOptions { content_only: true, overwrite: true, ..CopyOptions::new() };
    if let Err(e) = copy(static_dir, out_dir, &opts) {
        println!("cargo:warning=copying static/ to dist/ failed: {e}");
    }
}
