use lightningcss::{
    bundler::{Bundler, FileProvider},
    stylesheet::{MinifyOptions, ParserOptions, PrinterOptions},
};
use std::fs;
use std::path::Path;

const CSS_DIR: &str = "assets/css";
const ENTRY: &str = "assets/css/main.css";
const OUTPUT: &str = "assets/dist/bundle.css";

fn main() {
    println!("cargo:rerun-if-env-changed=ARC_API_URL");
    watch_partials(Path::new(CSS_DIR));

    let css = bundle(Path::new(ENTRY));

    // Only touch the output when it changed, so the asset! hash stays stable
    if fs::read_to_string(OUTPUT).ok().as_deref() != Some(css.as_str()) {
        fs::create_dir_all("assets/dist").expect("Failed to create assets/dist directory");
        fs::write(OUTPUT, css).expect("Failed to write bundle.css");
    }
}

/// Rerun on any stylesheet change, including newly added partials
fn watch_partials(dir: &Path) {
    println!("cargo:rerun-if-changed={}", dir.display());
    let entries = fs::read_dir(dir).expect("Failed to read assets/css");
    for entry in entries.flatten() {
        let path = entry.path();
        if path.extension().is_some_and(|ext| ext == "css") {
            println!("cargo:rerun-if-changed={}", path.display());
        }
    }
}

/// Resolve @imports from the entry file and minify the result
fn bundle(entry: &Path) -> String {
    let provider = FileProvider::new();
    let mut bundler = Bundler::new(&provider, None, ParserOptions::default());
    let mut stylesheet = bundler.bundle(entry).expect("Failed to bundle CSS");

    stylesheet
        .minify(MinifyOptions::default())
        .expect("Failed to minify CSS");

    stylesheet
        .to_css(PrinterOptions {
            minify: true,
            ..Default::default()
        })
        .expect("Failed to generate CSS output")
        .code
}
