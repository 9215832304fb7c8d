//! Exposure profiles: which native interop declarations a build gets.

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::catalog::{Guard, NativeFunction, OpaqueType, NATIVE_FUNCTIONS};
use crate::error::{Error, Result};
use crate::platform::{ContextApi, Features, Target, WindowingBackend};

/// Stops `glfw3.h` from pulling in the OpenGL and Vulkan headers.
pub const INCLUDE_NONE: &str = "GLFW_INCLUDE_NONE";

/// Stops `glfw3native.h` from pulling in the platform headers. Without it
/// the real definitions of `Display`, `HWND` and friends collide with the
/// stand-ins.
pub const NATIVE_INCLUDE_NONE: &str = "GLFW_NATIVE_INCLUDE_NONE";

/// Checks that `include_dir` holds GLFW headers the wrapper header can
/// include, that is GLFW 3.4 or newer.
pub fn check_headers(include_dir: &Path) -> Result<()> {
    let glfw = include_dir.join("GLFW");
    if !glfw.join("glfw3.h").is_file() {
        return Err(Error::MissingHeaders(include_dir.to_owned()));
    }
    match fs::read_to_string(glfw.join("glfw3native.h")) {
        Ok(native) if native.contains(NATIVE_INCLUDE_NONE) => Ok(()),
        Ok(_) => Err(Error::OutdatedHeaders(include_dir.to_owned())),
        Err(_) => Err(Error::MissingHeaders(include_dir.to_owned())),
    }
}

/// The selection of at most one windowing backend and at most one context
/// API whose native accessors are exposed.
///
/// A profile can only be built in a valid state: the context API, if any,
/// always works with the windowing backend.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq)]
pub struct ExposureProfile {
    windowing: Option<WindowingBackend>,
    context: Option<ContextApi>,
}

impl ExposureProfile {
    /// The profile exposing only the portable core API.
    pub const fn none() -> Self {
        Self { windowing: None, context: None }
    }

    /// Builds a profile, checking that the pair works together.
    pub fn new(windowing: Option<WindowingBackend>, context: Option<ContextApi>) -> Result<Self> {
        match (windowing, context) {
            (Some(windowing), Some(context)) if !context.supports(Some(windowing)) => {
                Err(Error::Incompatible { windowing, context })
            },
            (None, Some(context)) if !context.supports(None) => {
                Err(Error::MissingWindowing(context))
            },
            _ => Ok(Self { windowing, context }),
        }
    }

    /// Builds a profile in a constant context.
    ///
    /// # Panics
    ///
    /// Panics when the pair is incompatible, which fails compilation when
    /// evaluated in a `const` item.
    pub const fn pair(windowing: Option<WindowingBackend>, context: Option<ContextApi>) -> Self {
        if let Some(api) = context {
            if !api.supports(windowing) {
                panic!("incompatible windowing backend and context API");
            }
        }
        Self { windowing, context }
    }

    /// Picks the profile for `target` out of the requested `features`.
    ///
    /// Features for backends the target doesn't have are ignored, so a
    /// single feature set can cover every target. Win32 and Cocoa are always
    /// selected on their targets.
    pub fn resolve(target: Target, features: &Features) -> Result<Self> {
        let windowing: Vec<_> = match target.implied_windowing() {
            Some(windowing) => vec![windowing],
            None => target
                .available_windowing()
                .iter()
                .copied()
                .filter(|windowing| features.windowing(*windowing))
                .collect(),
        };
        if let &[first, second, ..] = windowing.as_slice() {
            return Err(Error::ConflictingWindowing(first, second));
        }

        let contexts: Vec<_> = target
            .available_contexts()
            .iter()
            .copied()
            .filter(|context| features.context(*context))
            .collect();
        if let &[first, second, ..] = contexts.as_slice() {
            return Err(Error::ConflictingContext(first, second));
        }

        Self::new(windowing.first().copied(), contexts.first().copied())
    }

    /// Resolves the profile from the environment of a build script.
    pub fn from_env() -> Result<Self> {
        Self::resolve(Target::from_env(), &Features::from_env())
    }

    #[inline]
    pub fn windowing(&self) -> Option<WindowingBackend> {
        self.windowing
    }

    #[inline]
    pub fn context(&self) -> Option<ContextApi> {
        self.context
    }

    /// Whether declarations behind `guard` are part of the profile.
    pub fn exposes(&self, guard: Guard) -> bool {
        match guard {
            Guard::Windowing(windowing) => self.windowing == Some(windowing),
            Guard::Context(context) => self.context == Some(context),
        }
    }

    /// The macros to define before including the GLFW headers, the include
    /// guards first.
    pub fn macros(&self) -> Vec<&'static str> {
        let mut macros = vec![INCLUDE_NONE, NATIVE_INCLUDE_NONE];
        macros.extend(self.windowing.map(WindowingBackend::expose_macro));
        macros.extend(self.context.map(ContextApi::expose_macro));
        macros
    }

    /// The macros as compiler arguments.
    pub fn clang_args(&self) -> Vec<String> {
        self.macros().into_iter().map(|name| format!("-D{name}")).collect()
    }

    /// The `cfg` flags of the profile.
    pub fn cfg_aliases(&self) -> Vec<&'static str> {
        self.windowing
            .map(WindowingBackend::cfg_alias)
            .into_iter()
            .chain(self.context.map(ContextApi::cfg_alias))
            .collect()
    }

    /// Every `cfg` flag a profile can set, for `rustc-check-cfg`.
    pub fn all_cfg_aliases() -> impl Iterator<Item = &'static str> {
        WindowingBackend::ALL
            .into_iter()
            .map(WindowingBackend::cfg_alias)
            .chain(ContextApi::ALL.into_iter().map(ContextApi::cfg_alias))
    }

    /// The native accessors the profile declares, in header order.
    pub fn native_functions(&self) -> impl Iterator<Item = &'static NativeFunction> + '_ {
        NATIVE_FUNCTIONS.iter().filter(move |function| self.exposes(function.guard))
    }

    /// The handle stand-ins the profile's accessors reference, each once.
    pub fn opaque_types(&self) -> Vec<&'static OpaqueType> {
        let mut opaque_types: Vec<&'static OpaqueType> = Vec::new();
        for opaque in self.native_functions().flat_map(NativeFunction::opaque_types) {
            if !opaque_types.iter().any(|known| known.name == opaque.name) {
                opaque_types.push(opaque);
            }
        }
        opaque_types
    }

    /// Renders the header the binding generator parses.
    ///
    /// `include_dir` is the directory holding `GLFW/glfw3.h`.
    pub fn wrapper_header(&self, include_dir: &Path) -> String {
        let mut header = format!("/* GLFW native exposure profile: {self} */\n");

        let opaque_types = self.opaque_types();
        if !opaque_types.is_empty() {
            header.push('\n');
            for opaque in opaque_types {
                header.push_str(&opaque.c_declaration());
                header.push('\n');
            }
        }

        header.push('\n');
        for name in self.macros() {
            header.push_str(&format!("#define {name}\n"));
        }

        header.push('\n');
        let include_dir = include_dir.display().to_string().replace('\\', "/");
        for file in ["glfw3.h", "glfw3native.h"] {
            header.push_str(&format!("#include \"{include_dir}/GLFW/{file}\"\n"));
        }

        header
    }
}

impl fmt::Display for ExposureProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.windowing, self.context) {
            (None, None) => f.write_str("none"),
            (Some(windowing), None) => write!(f, "{windowing}"),
            (None, Some(context)) => write!(f, "{context}"),
            (Some(windowing), Some(context)) => write!(f, "{windowing}+{context}"),
        }
    }
}

impl FromStr for ExposureProfile {
    type Err = Error;

    /// Parses the [`Display`] form, such as `x11+glx`, `wayland` or `none`.
    ///
    /// [`Display`]: fmt::Display
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s == "none" {
            return Ok(Self::none());
        }

        let mut windowing = None;
        let mut context = None;
        for token in s.split('+').map(str::trim) {
            if let Ok(backend) = token.parse::<WindowingBackend>() {
                if let Some(first) = windowing.replace(backend) {
                    return Err(Error::ConflictingWindowing(first, backend));
                }
            } else {
                let api = token.parse::<ContextApi>()?;
                if let Some(first) = context.replace(api) {
                    return Err(Error::ConflictingContext(first, api));
                }
            }
        }

        Self::new(windowing, context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn x11_glx_header() {
        let profile =
            ExposureProfile::new(Some(WindowingBackend::X11), Some(ContextApi::Glx)).unwrap();
        let header = profile.wrapper_header(Path::new("../../vendor/glfw/include"));
        let expected = "\
/* GLFW native exposure profile: x11+glx */

typedef struct _XDisplay Display;
typedef unsigned long RRCrtc;
typedef unsigned long RROutput;
typedef unsigned long Window;
typedef struct __GLXcontextRec* GLXContext;
typedef unsigned long GLXWindow;
typedef struct __GLXFBConfigRec* GLXFBConfig;

#define GLFW_INCLUDE_NONE
#define GLFW_NATIVE_INCLUDE_NONE
#define GLFW_EXPOSE_NATIVE_X11
#define GLFW_EXPOSE_NATIVE_GLX

#include \"../../vendor/glfw/include/GLFW/glfw3.h\"
#include \"../../vendor/glfw/include/GLFW/glfw3native.h\"
";
        assert_eq!(header, expected);
    }

    #[test]
    fn none_header_has_no_stand_ins() {
        let header = ExposureProfile::none().wrapper_header(Path::new("include"));
        assert!(!header.contains("typedef"));
        assert!(!header.contains("GLFW_EXPOSE_NATIVE"));
        assert!(header.contains("#define GLFW_INCLUDE_NONE\n#define GLFW_NATIVE_INCLUDE_NONE\n"));
    }

    #[test]
    fn shared_handles_are_declared_once() {
        let profile =
            ExposureProfile::new(Some(WindowingBackend::Cocoa), Some(ContextApi::Nsgl)).unwrap();
        let names: Vec<_> = profile.opaque_types().iter().map(|opaque| opaque.name).collect();
        assert_eq!(names, ["CGDirectDisplayID", "id"]);
    }

    #[test]
    fn clang_args() {
        let profile = "wayland+egl".parse::<ExposureProfile>().unwrap();
        assert_eq!(
            profile.clang_args(),
            [
                "-DGLFW_INCLUDE_NONE",
                "-DGLFW_NATIVE_INCLUDE_NONE",
                "-DGLFW_EXPOSE_NATIVE_WAYLAND",
                "-DGLFW_EXPOSE_NATIVE_EGL",
            ]
        );
    }

    #[test]
    fn parse_errors() {
        assert_eq!(
            "x11+wayland".parse::<ExposureProfile>(),
            Err(Error::ConflictingWindowing(WindowingBackend::X11, WindowingBackend::Wayland))
        );
        assert_eq!(
            "glx+egl".parse::<ExposureProfile>(),
            Err(Error::ConflictingContext(ContextApi::Glx, ContextApi::Egl))
        );
        assert_eq!("glx".parse::<ExposureProfile>(), Err(Error::MissingWindowing(ContextApi::Glx)));
        assert_eq!(
            "x11+metal".parse::<ExposureProfile>(),
            Err(Error::UnknownName("metal".to_owned()))
        );
    }

    #[test]
    fn headers_must_be_3_4() {
        let dir = std::env::temp_dir().join(format!("glfw3_exposure-{}", std::process::id()));
        let glfw = dir.join("GLFW");
        fs::create_dir_all(&glfw).unwrap();

        assert_eq!(check_headers(&dir), Err(Error::MissingHeaders(dir.clone())));
        let message = Error::MissingHeaders(dir.clone()).to_string();
        assert!(message.contains(&dir.display().to_string()), "{message}");

        fs::write(glfw.join("glfw3.h"), "#define GLFW_VERSION_MINOR 3\n").unwrap();
        fs::write(glfw.join("glfw3native.h"), "#if defined(GLFW_EXPOSE_NATIVE_X11)\n#endif\n")
            .unwrap();
        assert_eq!(check_headers(&dir), Err(Error::OutdatedHeaders(dir.clone())));

        fs::write(glfw.join("glfw3native.h"), "#if !defined(GLFW_NATIVE_INCLUDE_NONE)\n#endif\n")
            .unwrap();
        assert_eq!(check_headers(&dir), Ok(()));

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn const_pair() {
        const PROFILE: ExposureProfile =
            ExposureProfile::pair(Some(WindowingBackend::Win32), Some(ContextApi::Wgl));
        assert_eq!(PROFILE.to_string(), "win32+wgl");
    }

    #[test]
    #[should_panic]
    fn const_pair_rejects_mismatch() {
        let _ = ExposureProfile::pair(Some(WindowingBackend::Wayland), Some(ContextApi::Glx));
    }
}
