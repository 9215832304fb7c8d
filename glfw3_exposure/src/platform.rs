//! Windowing backends, context APIs and the targets offering them.

use std::env;
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// A windowing system whose native handles GLFW can hand out.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum WindowingBackend {
    Win32,
    Cocoa,
    X11,
    Wayland,
}

impl WindowingBackend {
    /// All windowing backends in `glfw3native.h` order.
    pub const ALL: [WindowingBackend; 4] =
        [WindowingBackend::Win32, WindowingBackend::Cocoa, WindowingBackend::X11, WindowingBackend::Wayland];

    /// The macro enabling this backend's declarations in `glfw3native.h`.
    pub fn expose_macro(self) -> &'static str {
        match self {
            WindowingBackend::Win32 => "GLFW_EXPOSE_NATIVE_WIN32",
            WindowingBackend::Cocoa => "GLFW_EXPOSE_NATIVE_COCOA",
            WindowingBackend::X11 => "GLFW_EXPOSE_NATIVE_X11",
            WindowingBackend::Wayland => "GLFW_EXPOSE_NATIVE_WAYLAND",
        }
    }

    /// The `cfg` flag set for crates built against this backend.
    pub fn cfg_alias(self) -> &'static str {
        match self {
            WindowingBackend::Win32 => "win32_platform",
            WindowingBackend::Cocoa => "cocoa_platform",
            WindowingBackend::X11 => "x11_platform",
            WindowingBackend::Wayland => "wayland_platform",
        }
    }

    /// The short name, which is also the Cargo feature for the backends
    /// selected through features.
    pub fn name(self) -> &'static str {
        match self {
            WindowingBackend::Win32 => "win32",
            WindowingBackend::Cocoa => "cocoa",
            WindowingBackend::X11 => "x11",
            WindowingBackend::Wayland => "wayland",
        }
    }

    /// The context APIs usable together with this backend.
    pub fn context_apis(self) -> impl Iterator<Item = ContextApi> {
        ContextApi::ALL.into_iter().filter(move |context| context.supports(Some(self)))
    }
}

impl fmt::Display for WindowingBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for WindowingBackend {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WindowingBackend::ALL
            .into_iter()
            .find(|backend| backend.name() == s)
            .ok_or_else(|| Error::UnknownName(s.to_owned()))
    }
}

/// A client API context GLFW can hand out native handles for.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum ContextApi {
    Wgl,
    Nsgl,
    Glx,
    Egl,
    OsMesa,
}

impl ContextApi {
    /// All context APIs in `glfw3native.h` order.
    pub const ALL: [ContextApi; 5] =
        [ContextApi::Wgl, ContextApi::Nsgl, ContextApi::Glx, ContextApi::Egl, ContextApi::OsMesa];

    /// The macro enabling this API's declarations in `glfw3native.h`.
    pub fn expose_macro(self) -> &'static str {
        match self {
            ContextApi::Wgl => "GLFW_EXPOSE_NATIVE_WGL",
            ContextApi::Nsgl => "GLFW_EXPOSE_NATIVE_NSGL",
            ContextApi::Glx => "GLFW_EXPOSE_NATIVE_GLX",
            ContextApi::Egl => "GLFW_EXPOSE_NATIVE_EGL",
            ContextApi::OsMesa => "GLFW_EXPOSE_NATIVE_OSMESA",
        }
    }

    /// The `cfg` flag set for crates built against this API.
    pub fn cfg_alias(self) -> &'static str {
        match self {
            ContextApi::Wgl => "wgl_backend",
            ContextApi::Nsgl => "nsgl_backend",
            ContextApi::Glx => "glx_backend",
            ContextApi::Egl => "egl_backend",
            ContextApi::OsMesa => "osmesa_backend",
        }
    }

    /// The short name, which is also the Cargo feature selecting the API.
    pub fn name(self) -> &'static str {
        match self {
            ContextApi::Wgl => "wgl",
            ContextApi::Nsgl => "nsgl",
            ContextApi::Glx => "glx",
            ContextApi::Egl => "egl",
            ContextApi::OsMesa => "osmesa",
        }
    }

    /// The windowing backends this API can be exposed with.
    ///
    /// OSMesa renders offscreen and is also usable without any windowing
    /// backend, on GLFW's null platform.
    pub fn windowing_backends(self) -> &'static [WindowingBackend] {
        match self {
            ContextApi::Wgl => &[WindowingBackend::Win32],
            ContextApi::Nsgl => &[WindowingBackend::Cocoa],
            ContextApi::Glx => &[WindowingBackend::X11],
            ContextApi::Egl => {
                &[WindowingBackend::Win32, WindowingBackend::X11, WindowingBackend::Wayland]
            },
            ContextApi::OsMesa => &WindowingBackend::ALL,
        }
    }

    /// Whether the API's declarations compile together with `windowing`.
    pub const fn supports(self, windowing: Option<WindowingBackend>) -> bool {
        use WindowingBackend::*;
        matches!(
            (self, windowing),
            (ContextApi::OsMesa, _)
                | (ContextApi::Wgl, Some(Win32))
                | (ContextApi::Nsgl, Some(Cocoa))
                | (ContextApi::Glx, Some(X11))
                | (ContextApi::Egl, Some(Win32 | X11 | Wayland))
        )
    }
}

impl fmt::Display for ContextApi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ContextApi {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ContextApi::ALL
            .into_iter()
            .find(|context| context.name() == s)
            .ok_or_else(|| Error::UnknownName(s.to_owned()))
    }
}

/// The family of the compilation target.
///
/// Build scripts run on the host, so this must come from the
/// `CARGO_CFG_TARGET_*` variables rather than from `cfg!`.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum Target {
    Windows,
    MacOs,
    /// Unix systems that aren't Apple or Android: Linux and the BSDs.
    FreeUnix,
    /// Anything GLFW has no native backend for.
    Other,
}

impl Target {
    pub fn from_cfg(target_os: &str, target_family: &str, target_vendor: &str) -> Self {
        let family = |name: &str| target_family.split(',').any(|family| family == name);
        match target_os {
            "windows" => Target::Windows,
            "macos" => Target::MacOs,
            // iOS, tvOS, watchOS and visionOS have no GLFW backend.
            _ if target_vendor == "apple" => Target::Other,
            "android" => Target::Other,
            _ if family("wasm") => Target::Other,
            _ if family("unix") => Target::FreeUnix,
            _ => Target::Other,
        }
    }

    /// Reads the target from the environment cargo gives build scripts.
    pub fn from_env() -> Self {
        let os = env::var("CARGO_CFG_TARGET_OS").unwrap_or_default();
        let family = env::var("CARGO_CFG_TARGET_FAMILY").unwrap_or_default();
        let vendor = env::var("CARGO_CFG_TARGET_VENDOR").unwrap_or_default();
        Self::from_cfg(&os, &family, &vendor)
    }

    /// The windowing backend every build for this target exposes, if the
    /// target has exactly one.
    pub fn implied_windowing(self) -> Option<WindowingBackend> {
        match self {
            Target::Windows => Some(WindowingBackend::Win32),
            Target::MacOs => Some(WindowingBackend::Cocoa),
            Target::FreeUnix | Target::Other => None,
        }
    }

    pub fn available_windowing(self) -> &'static [WindowingBackend] {
        match self {
            Target::Windows => &[WindowingBackend::Win32],
            Target::MacOs => &[WindowingBackend::Cocoa],
            Target::FreeUnix => &[WindowingBackend::X11, WindowingBackend::Wayland],
            Target::Other => &[],
        }
    }

    pub fn available_contexts(self) -> &'static [ContextApi] {
        match self {
            Target::Windows => &[ContextApi::Wgl, ContextApi::Egl, ContextApi::OsMesa],
            Target::MacOs => &[ContextApi::Nsgl, ContextApi::OsMesa],
            Target::FreeUnix => &[ContextApi::Glx, ContextApi::Egl, ContextApi::OsMesa],
            Target::Other => &[],
        }
    }
}

/// The backend features requested for a build.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq)]
pub struct Features {
    pub x11: bool,
    pub wayland: bool,
    pub glx: bool,
    pub egl: bool,
    pub wgl: bool,
    pub nsgl: bool,
    pub osmesa: bool,
}

impl Features {
    /// Reads the `CARGO_FEATURE_*` variables of the crate being built.
    pub fn from_env() -> Self {
        let enabled = |name: &str| env::var_os(format!("CARGO_FEATURE_{name}")).is_some();
        Self {
            x11: enabled("X11"),
            wayland: enabled("WAYLAND"),
            glx: enabled("GLX"),
            egl: enabled("EGL"),
            wgl: enabled("WGL"),
            nsgl: enabled("NSGL"),
            osmesa: enabled("OSMESA"),
        }
    }

    /// The features enabled by default: the native pair of every target.
    pub fn native() -> Self {
        Self { x11: true, glx: true, wgl: true, nsgl: true, ..Default::default() }
    }

    /// Whether the feature selecting `windowing` is on.
    ///
    /// Win32 and Cocoa aren't selected through features, they're implied by
    /// the target.
    pub fn windowing(&self, windowing: WindowingBackend) -> bool {
        match windowing {
            WindowingBackend::X11 => self.x11,
            WindowingBackend::Wayland => self.wayland,
            WindowingBackend::Win32 | WindowingBackend::Cocoa => false,
        }
    }

    pub fn context(&self, context: ContextApi) -> bool {
        match context {
            ContextApi::Wgl => self.wgl,
            ContextApi::Nsgl => self.nsgl,
            ContextApi::Glx => self.glx,
            ContextApi::Egl => self.egl,
            ContextApi::OsMesa => self.osmesa,
        }
    }

    /// Turns on the features for `names`, as written in `Cargo.toml`.
    pub fn with(mut self, names: &[&str]) -> Result<Self, Error> {
        for name in names {
            match *name {
                "x11" => self.x11 = true,
                "wayland" => self.wayland = true,
                "glx" => self.glx = true,
                "egl" => self.egl = true,
                "wgl" => self.wgl = true,
                "nsgl" => self.nsgl = true,
                "osmesa" => self.osmesa = true,
                other => return Err(Error::UnknownName(other.to_owned())),
            }
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::ExposureProfile;

    #[test]
    fn target_from_cfg() {
        assert_eq!(Target::from_cfg("linux", "unix", "unknown"), Target::FreeUnix);
        assert_eq!(Target::from_cfg("freebsd", "unix", "unknown"), Target::FreeUnix);
        assert_eq!(Target::from_cfg("windows", "windows", "pc"), Target::Windows);
        assert_eq!(Target::from_cfg("macos", "unix", "apple"), Target::MacOs);
        assert_eq!(Target::from_cfg("android", "unix", "unknown"), Target::Other);
        assert_eq!(Target::from_cfg("unknown", "wasm", "unknown"), Target::Other);
        assert_eq!(Target::from_cfg("emscripten", "unix,wasm", "unknown"), Target::Other);
    }

    #[test]
    fn apple_targets_besides_macos_have_no_backend() {
        for os in ["ios", "tvos", "watchos", "visionos"] {
            let target = Target::from_cfg(os, "unix", "apple");
            assert_eq!(target, Target::Other, "{os}");
            let profile = ExposureProfile::resolve(target, &Features::native());
            assert_eq!(profile, Ok(ExposureProfile::none()), "{os}");
        }
    }

    #[test]
    fn osmesa_runs_headless() {
        assert!(ContextApi::OsMesa.supports(None));
        for context in ContextApi::ALL.into_iter().filter(|c| *c != ContextApi::OsMesa) {
            assert!(!context.supports(None), "{context} without windowing");
        }
    }

    #[test]
    fn supports_agrees_with_backend_lists() {
        for context in ContextApi::ALL {
            for windowing in WindowingBackend::ALL {
                assert_eq!(
                    context.supports(Some(windowing)),
                    context.windowing_backends().contains(&windowing),
                    "{context} with {windowing}"
                );
            }
        }
    }

    #[test]
    fn x11_pairs() {
        let apis: Vec<_> = WindowingBackend::X11.context_apis().collect();
        assert_eq!(apis, [ContextApi::Glx, ContextApi::Egl, ContextApi::OsMesa]);
    }

    #[test]
    fn names_round_trip_through_from_str() {
        for backend in WindowingBackend::ALL {
            assert_eq!(backend.name().parse::<WindowingBackend>(), Ok(backend));
        }
        for context in ContextApi::ALL {
            assert_eq!(context.name().parse::<ContextApi>(), Ok(context));
        }
        assert_eq!("vulkan".parse::<ContextApi>(), Err(Error::UnknownName("vulkan".into())));
    }

    #[test]
    fn features_with_names() {
        let features = Features::default().with(&["wayland", "egl"]).unwrap();
        assert!(features.wayland && features.egl);
        assert!(!features.x11 && !features.glx);
        assert!(Features::default().with(&["metal"]).is_err());
    }
}
