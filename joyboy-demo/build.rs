use std::path::Path;

fn main() {
    copy_shared_assets();
}

fn copy_shared_assets() {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    let shared_main_css = Path::new(manifest_dir).join("../joyboy-ui/assets/main.css");
    let local_main_css = Path::new(manifest_dir).join("assets/main.css");

    println!("cargo:rerun-if-changed={}", shared_main_css.display());

    if shared_main_css.exists() {
        std::fs::copy(&shared_main_css, &local_main_css)
            .expect("Failed to copy main.css from joyboy-ui");
    }
}
