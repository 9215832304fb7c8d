use std::collections::BTreeSet;
use std::path::Path;

use glfw3_exposure::{
    ContextApi, Error, ExposureProfile, Features, Guard, Target, WindowingBackend,
    INCLUDE_NONE, NATIVE_INCLUDE_NONE, OPAQUE_TYPES,
};

/// Every profile a build can end up with.
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

#[test]
fn supported_pairs() {
    let names: BTreeSet<_> = valid_profiles().iter().map(ToString::to_string).collect();
    let expected: BTreeSet<_> = [
        "none",
        "osmesa",
        "win32",
        "win32+wgl",
        "win32+egl",
        "win32+osmesa",
        "cocoa",
        "cocoa+nsgl",
        "cocoa+osmesa",
        "x11",
        "x11+glx",
        "x11+egl",
        "x11+osmesa",
        "wayland",
        "wayland+egl",
        "wayland+osmesa",
    ]
    .into_iter()
    .map(String::from)
    .collect();
    assert_eq!(names, expected);
}

#[test]
fn stand_ins_match_referenced_handles() {
    for profile in valid_profiles() {
        let referenced: BTreeSet<_> = profile
            .native_functions()
            .flat_map(|function| function.handles.iter().copied())
            .collect();
        let declared: Vec<_> = profile.opaque_types().iter().map(|opaque| opaque.name).collect();
        let declared_set: BTreeSet<_> = declared.iter().copied().collect();

        assert_eq!(referenced, declared_set, "{profile}");
        assert_eq!(declared.len(), declared_set.len(), "{profile} declares a handle twice");
    }
}

#[test]
fn header_declares_every_stand_in_before_use() {
    for profile in valid_profiles() {
        let header = profile.wrapper_header(Path::new("vendor/glfw/include"));
        let include = header.find("#include").unwrap();
        for opaque in profile.opaque_types() {
            let declaration = header.find(&opaque.c_declaration()).unwrap();
            assert!(declaration < include, "{} declared after the includes", opaque.name);
        }
        for opaque in OPAQUE_TYPES {
            if !profile.opaque_types().contains(&opaque) {
                assert!(!header.contains(&opaque.c_declaration()), "{profile}: {}", opaque.name);
            }
        }
    }
}

#[test]
fn include_guards_are_always_first() {
    for profile in valid_profiles() {
        let macros = profile.macros();
        assert_eq!(&macros[..2], [INCLUDE_NONE, NATIVE_INCLUDE_NONE], "{profile}");

        let expose_count = macros.iter().filter(|name| name.starts_with("GLFW_EXPOSE_NATIVE_")).count();
        let expected = profile.windowing().is_some() as usize + profile.context().is_some() as usize;
        assert_eq!(expose_count, expected, "{profile}");
    }
}

#[test]
fn mismatched_pairs_are_rejected() {
    let cases = [
        (WindowingBackend::Wayland, ContextApi::Glx),
        (WindowingBackend::X11, ContextApi::Wgl),
        (WindowingBackend::Win32, ContextApi::Nsgl),
        (WindowingBackend::Cocoa, ContextApi::Egl),
        (WindowingBackend::Cocoa, ContextApi::Glx),
    ];
    for (windowing, context) in cases {
        assert_eq!(
            ExposureProfile::new(Some(windowing), Some(context)),
            Err(Error::Incompatible { windowing, context })
        );
    }
}

#[test]
fn display_round_trips() {
    for profile in valid_profiles() {
        assert_eq!(profile.to_string().parse::<ExposureProfile>(), Ok(profile));
    }
}

#[test]
fn default_features_per_target() {
    let features = Features::native();
    let resolve = |target| ExposureProfile::resolve(target, &features).unwrap().to_string();
    assert_eq!(resolve(Target::FreeUnix), "x11+glx");
    assert_eq!(resolve(Target::Windows), "win32+wgl");
    assert_eq!(resolve(Target::MacOs), "cocoa+nsgl");
    assert_eq!(resolve(Target::Other), "none");
}

#[test]
fn resolve_conflicts_on_free_unix() {
    let features = |names: &[&str]| Features::default().with(names).unwrap();

    assert_eq!(
        ExposureProfile::resolve(Target::FreeUnix, &features(&["x11", "wayland"])),
        Err(Error::ConflictingWindowing(WindowingBackend::X11, WindowingBackend::Wayland))
    );
    assert_eq!(
        ExposureProfile::resolve(Target::FreeUnix, &features(&["x11", "glx", "egl"])),
        Err(Error::ConflictingContext(ContextApi::Glx, ContextApi::Egl))
    );
    assert_eq!(
        ExposureProfile::resolve(Target::FreeUnix, &features(&["wayland", "glx"])),
        Err(Error::Incompatible { windowing: WindowingBackend::Wayland, context: ContextApi::Glx })
    );
    assert_eq!(
        ExposureProfile::resolve(Target::FreeUnix, &features(&["egl"])),
        Err(Error::MissingWindowing(ContextApi::Egl))
    );
    assert_eq!(
        ExposureProfile::resolve(Target::FreeUnix, &features(&["osmesa"])).unwrap().to_string(),
        "osmesa"
    );
    assert_eq!(
        ExposureProfile::resolve(Target::FreeUnix, &features(&[])).unwrap(),
        ExposureProfile::none()
    );
}

#[test]
fn features_for_other_targets_are_inert() {
    let features = Features::default().with(&["x11", "glx", "wayland", "nsgl"]).unwrap();
    assert_eq!(ExposureProfile::resolve(Target::Windows, &features).unwrap().to_string(), "win32");

    let features = Features::default().with(&["egl"]).unwrap();
    assert_eq!(ExposureProfile::resolve(Target::MacOs, &features).unwrap().to_string(), "cocoa");
    assert_eq!(
        ExposureProfile::resolve(Target::Windows, &features).unwrap().to_string(),
        "win32+egl"
    );
}

#[test]
fn functions_follow_their_guard() {
    let profile = "x11+egl".parse::<ExposureProfile>().unwrap();
    let names: Vec<_> = profile.native_functions().map(|function| function.name).collect();
    assert!(names.contains(&"glfwGetX11Window"));
    assert!(names.contains(&"glfwGetEGLSurface"));
    assert!(!names.contains(&"glfwGetGLXContext"));
    assert!(profile.exposes(Guard::Windowing(WindowingBackend::X11)));
    assert!(!profile.exposes(Guard::Context(ContextApi::Glx)));
}

#[test]
fn cfg_aliases_are_checked() {
    let all: BTreeSet<_> = ExposureProfile::all_cfg_aliases().collect();
    for profile in valid_profiles() {
        for alias in profile.cfg_aliases() {
            assert!(all.contains(alias), "{alias}");
        }
    }
    assert_eq!(all.len(), 9);
}
