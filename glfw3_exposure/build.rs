use std::env;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    // The header tests drive the C preprocessor of the build target.
    for var in ["TARGET", "HOST"] {
        let triple = env::var(var).unwrap();
        println!("cargo:rustc-env=GLFW3_EXPOSURE_{var}={triple}");
    }
}
