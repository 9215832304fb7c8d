//! Runs the C preprocessor of the build target over rendered wrapper headers.
//!
//! The GLFW 3.4 headers come from `GLFW_SOURCE_DIR` or the
//! `glfw3_sys/vendor/glfw` submodule. Without them the tests report the
//! missing headers on stderr and pass.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use glfw3_exposure::{
    check_headers, ContextApi, ExposureProfile, WindowingBackend, INCLUDE_NONE,
    NATIVE_INCLUDE_NONE,
};

/// Headers of the native platforms. None of them may be entered while
/// preprocessing a wrapper header.
const PLATFORM_HEADERS: &[&str] = &[
    "x11/xlib.h",
    "x11/extensions/xrandr.h",
    "gl/glx.h",
    "wayland-client",
    "egl/egl.h",
    "windows.h",
    "applicationservices/applicationservices.h",
    "cocoa/cocoa.h",
    "objc/objc.h",
    "gl/osmesa.h",
    "gl/gl.h",
    "vulkan/vulkan.h",
];

fn include_dir() -> Option<PathBuf> {
    let source_dir = match env::var_os("GLFW_SOURCE_DIR") {
        Some(dir) => PathBuf::from(dir),
        None => Path::new(env!("CARGO_MANIFEST_DIR")).join("../glfw3_sys/vendor/glfw"),
    };

    let include_dir = source_dir.join("include");
    match check_headers(&include_dir) {
        Ok(()) => Some(include_dir),
        Err(err) => {
            eprintln!("skipping preprocessor run: {err}");
            None
        },
    }
}

fn valid_profiles() -> Vec<ExposureProfile> {
    let windowing = std::iter::once(None).chain(WindowingBackend::ALL.into_iter().map(Some));
    windowing
        .flat_map(|windowing| {
            std::iter::once(None)
                .chain(ContextApi::ALL.into_iter().map(Some))
                .filter_map(move |context| ExposureProfile::new(windowing, context).ok())
        })
        .collect()
}

fn preprocess(name: &str, header: &str) -> Result<String, cc::Error> {
    let path = Path::new(env!("CARGO_TARGET_TMPDIR")).join(format!("glfw3-{name}.c"));
    fs::write(&path, header).unwrap();

    let output = cc::Build::new()
        .file(&path)
        .target(env!("GLFW3_EXPOSURE_TARGET"))
        .host(env!("GLFW3_EXPOSURE_HOST"))
        .opt_level(0)
        .cargo_metadata(false)
        .warnings(false)
        .try_expand()?;
    Ok(String::from_utf8_lossy(&output).into_owned())
}

/// Files named by the line markers, `# 1 "file"` for gcc and clang and
/// `#line 1 "file"` for msvc.
fn entered_files(output: &str) -> Vec<String> {
    output
        .lines()
        .filter(|line| line.trim_start().starts_with('#'))
        .filter_map(|line| line.split('"').nth(1))
        .map(|file| file.replace("\\\\", "/").replace('\\', "/").to_ascii_lowercase())
        .collect()
}

fn platform_headers(output: &str) -> Vec<String> {
    entered_files(output)
        .into_iter()
        .filter(|file| PLATFORM_HEADERS.iter().any(|header| file.contains(header)))
        .collect()
}

#[test]
fn every_profile_preprocesses_without_platform_headers() {
    let Some(include_dir) = include_dir() else { return };

    for profile in valid_profiles() {
        let header = profile.wrapper_header(&include_dir);
        let name = profile.to_string().replace('+', "-");
        let output = match preprocess(&name, &header) {
            Ok(output) => output,
            Err(err) => panic!("`{profile}` fails to preprocess: {err}"),
        };

        let entered = platform_headers(&output);
        assert!(entered.is_empty(), "`{profile}` pulls in {entered:?}");

        for function in profile.native_functions() {
            assert!(
                output.contains(function.name),
                "`{profile}` does not declare `{}`",
                function.name
            );
        }
    }
}

#[test]
fn native_include_guard_keeps_xlib_out() {
    let Some(include_dir) = include_dir() else { return };

    let profile = ExposureProfile::new(Some(WindowingBackend::X11), Some(ContextApi::Glx)).unwrap();
    let guard = format!("#define {NATIVE_INCLUDE_NONE}\n");
    let header = profile.wrapper_header(&include_dir);
    assert!(header.contains(&guard));

    // Without the guard the headers either resolve or the run fails on them.
    match preprocess("x11-glx-unguarded", &header.replace(&guard, "")) {
        Ok(output) => {
            let entered = platform_headers(&output);
            assert!(entered.iter().any(|file| file.contains("x11/xlib.h")), "{entered:?}");
        },
        Err(err) => eprintln!("unguarded header failed as expected: {err}"),
    }
}

#[test]
fn include_guard_keeps_gl_out() {
    let Some(include_dir) = include_dir() else { return };

    let guard = format!("#define {INCLUDE_NONE}\n");
    let header = ExposureProfile::none().wrapper_header(&include_dir);
    assert!(header.contains(&guard));

    match preprocess("none-unguarded", &header.replace(&guard, "")) {
        Ok(output) => {
            let entered = platform_headers(&output);
            assert!(entered.iter().any(|file| file.ends_with("gl/gl.h")), "{entered:?}");
        },
        Err(err) => eprintln!("unguarded header failed as expected: {err}"),
    }
}
