// Mirrors the static site (demo pages and any wasm-pack output in
// `static/pkg`) into `dist/` for deployment.
use std::path::Path;

use fs_extra::dir::{copy, CopyOptions};

fn main() {
    println!("cargo:rerun-if-changed=static");

    let static_dir = Path::new("static");
    if !static_dir.exists() {
        return;
    }

    let out_dir = Path::new("dist");
    if out_dir.exists() {
        std::fs::remove_dir_all(out_dir).ok();
    }
    std::fs::create_dir_all(out_dir).ok();

    let mut options = CopyOptions::new();
    options.content_only = true;
    options.overwrite = true;
    if let Err(err) = copy(static_dir, out_dir, &options) {
        println!("cargo:warning=failed to copy static/ to dist/: {err}");
    }
}
