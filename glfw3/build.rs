use std::env;

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
    println!("cargo:rerun-if-env-changed=DEP_GLFW_EXPOSURE");

    // Use the selection of `glfw3_sys` so the declarations and their wrappers
    // can't disagree.
    let profile = match env::var("DEP_GLFW_EXPOSURE") {
        Ok(profile) => profile.parse::<ExposureProfile>(),
        Err(_) => ExposureProfile::from_env(),
    };
    let profile = match profile {
        Ok(profile) => profile,
        Err(err) => panic!("invalid GLFW native exposure: {err}"),
    };

    for alias in ExposureProfile::all_cfg_aliases() {
        println!("cargo:rustc-check-cfg=cfg({alias})");
    }
    for alias in profile.cfg_aliases() {
        println!("cargo:rustc-cfg={alias}");
    }
}
