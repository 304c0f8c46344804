//! Binary entrypoint for the browser-hosted showcase.

#[cfg(all(target_arch = "wasm32", feature = "csr"))]
fn main() {
    vera_showcase::mount();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!(
        "This binary is intended for the browser/WASM workflow. Build `vera_showcase_app` for wasm32 with the `csr` feature."
    );
}
