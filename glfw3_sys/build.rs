use std::env;
use std::path::{Path, PathBuf};

use cfg_aliases::cfg_aliases;
use glfw3_exposure::ExposureProfile;

fn main() {
    // Setup alias to reduce `cfg` boilerplate.
    cfg_aliases! {
        // Systems.
        android_platform: { target_os = "android" },
        wasm_platform: { target_family = "wasm" },
        macos_platform: { target_os = "macos" },
        ios_platform: { target_os = "ios" },
        apple: { target_vendor = "apple" },
        free_unix: { all(unix, not(apple), not(android_platform), not(wasm_platform)) },
    }

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=GLFW_LIB_DIR");
    println!("cargo:rerun-if-env-changed=GLFW_SOURCE_DIR");

    // The profile is resolved for the target, features of other targets are
    // ignored. An invalid combination is a configuration error of the build.
    let profile = match ExposureProfile::from_env() {
        Ok(profile) => profile,
        Err(err) => panic!("invalid GLFW native exposure: {err}"),
    };

    for alias in ExposureProfile::all_cfg_aliases() {
        println!("cargo:rustc-check-cfg=cfg({alias})");
    }
    for alias in profile.cfg_aliases() {
        println!("cargo:rustc-cfg={alias}");
    }

    // Dependents read it back as `DEP_GLFW_EXPOSURE`.
    println!("cargo:exposure={profile}");

    if let Some(lib_dir) = env::var_os("GLFW_LIB_DIR") {
        println!("cargo:rustc-link-search=native={}", Path::new(&lib_dir).display());
    }

    let source_dir = source_dir();
    if cfg!(any(feature = "vendored", feature = "bindgen")) {
        if let Err(err) = glfw3_exposure::check_headers(&source_dir.join("include")) {
            panic!("unusable GLFW sources: {err}");
        }
    }
    let include_dir = vendored::build(&profile, &source_dir);
    bindings::generate(&profile, &include_dir);
}

fn source_dir() -> PathBuf {
    match env::var_os("GLFW_SOURCE_DIR") {
        Some(dir) => PathBuf::from(dir),
        None => {
            let manifest_dir = env::var_os("CARGO_MANIFEST_DIR").unwrap();
            PathBuf::from(manifest_dir).join("vendor").join("glfw")
        },
    }
}

#[cfg(feature = "vendored")]
mod vendored {
    use std::path::{Path, PathBuf};

    use glfw3_exposure::{ExposureProfile, Target, WindowingBackend};

    /// Builds GLFW from source for the backends of `profile` and returns the
    /// include directory of the installed headers.
    pub fn build(profile: &ExposureProfile, source_dir: &Path) -> PathBuf {
        println!("cargo:rerun-if-changed={}", source_dir.join("CMakeLists.txt").display());

        let on_off = |enabled: bool| if enabled { "ON" } else { "OFF" };
        let target = Target::from_env();

        let mut config = cmake::Config::new(source_dir);
        config
            .define("GLFW_BUILD_EXAMPLES", "OFF")
            .define("GLFW_BUILD_TESTS", "OFF")
            .define("GLFW_BUILD_DOCS", "OFF")
            .define("CMAKE_INSTALL_LIBDIR", "lib");
        if target == Target::FreeUnix {
            config
                .define("GLFW_BUILD_X11", on_off(profile.windowing() == Some(WindowingBackend::X11)))
                .define(
                    "GLFW_BUILD_WAYLAND",
                    on_off(profile.windowing() == Some(WindowingBackend::Wayland)),
                );
        }
        let dst = config.build();

        println!("cargo:rustc-link-search=native={}", dst.join("lib").display());
        match target {
            Target::Windows => {
                for lib in ["gdi32", "user32", "shell32"] {
                    println!("cargo:rustc-link-lib={lib}");
                }
            },
            Target::MacOs => {
                for framework in ["Cocoa", "IOKit", "CoreFoundation", "QuartzCore"] {
                    println!("cargo:rustc-link-lib=framework={framework}");
                }
            },
            Target::FreeUnix => {
                // The backends themselves are loaded at runtime.
                for lib in ["m", "dl", "pthread"] {
                    println!("cargo:rustc-link-lib={lib}");
                }
            },
            Target::Other => (),
        }

        let include_dir = dst.join("include");
        println!("cargo:include={}", include_dir.display());
        include_dir
    }
}

#[cfg(not(feature = "vendored"))]
mod vendored {
    use std::path::{Path, PathBuf};

    use glfw3_exposure::ExposureProfile;

    /// Without a build of our own the headers come from the source tree.
    pub fn build(_: &ExposureProfile, source_dir: &Path) -> PathBuf {
        source_dir.join("include")
    }
}

#[cfg(feature = "bindgen")]
mod bindings {
    use std::env;
    use std::fs;
    use std::path::{Path, PathBuf};

    use glfw3_exposure::ExposureProfile;

    pub fn generate(profile: &ExposureProfile, include_dir: &Path) {
        let dest = PathBuf::from(env::var("OUT_DIR").unwrap());

        let header = profile.wrapper_header(include_dir);
        // Kept next to the bindings to make the generator's input inspectable.
        let header_path = dest.join("glfw3_wrapper.h");
        fs::write(&header_path, &header)
            .unwrap_or_else(|err| panic!("failed to write `{}`: {err}", header_path.display()));

        let mut builder = bindgen::Builder::default()
            .header_contents("glfw3_wrapper.h", &header)
            .clang_arg(format!("-I{}", include_dir.display()))
            .allowlist_function("glfw.*")
            .allowlist_type("GLFW.*")
            .allowlist_var("GLFW_.*")
            .default_macro_constant_type(bindgen::MacroTypeVariation::Signed)
            .parse_callbacks(Box::new(bindgen::CargoCallbacks::new()));
        for opaque in profile.opaque_types() {
            if opaque.is_new_type() {
                builder = builder.new_type_alias(opaque.name);
            }
        }

        let bindings = match builder.generate() {
            Ok(bindings) => bindings,
            Err(err) => panic!("failed to generate GLFW bindings for `{profile}`: {err}"),
        };
        let bindings_path = dest.join("glfw3.rs");
        bindings
            .write_to_file(&bindings_path)
            .unwrap_or_else(|err| panic!("failed to write `{}`: {err}", bindings_path.display()));
    }
}

#[cfg(not(feature = "bindgen"))]
mod bindings {
    use std::path::Path;

    use glfw3_exposure::ExposureProfile;

    /// The checked-in declarations are used as is.
    pub fn generate(_: &ExposureProfile, _: &Path) {}
}
