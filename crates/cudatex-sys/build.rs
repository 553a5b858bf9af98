fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=CUDA_PATH");

    // Linking is opt-in: the declarations compile everywhere, but only a
    // `link`-feature build needs the toolkit present.
    if std::env::var_os("CARGO_FEATURE_LINK").is_none() {
        return;
    }

    if let Ok(path) = std::env::var("CUDA_PATH") {
        println!("cargo:rustc-link-search=native={path}/lib64");
        println!("cargo:rustc-link-search=native={path}/lib/x64");
    }
    println!("cargo:rustc-link-search=native=/usr/local/cuda/lib64");
    println!("cargo:rustc-link-lib=cudart");
}
