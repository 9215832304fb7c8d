//! The native handle types and accessor functions of `glfw3native.h`.
//!
//! Handles are declared as stand-ins with no accessible layout. The only
//! thing a stand-in has to get right is how the handle is passed around:
//! through a pointer to an incomplete type, as a pointer-sized opaque value
//! or as an X11 resource id.

use std::fmt;

use crate::platform::{ContextApi, WindowingBackend};

/// How a native handle is represented at the binding boundary.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum OpaqueKind {
    /// An incomplete struct only ever used behind a pointer, such as
    /// `Display*`. When `tag` equals the type name the declaration is a bare
    /// forward declaration (`struct wl_display;`).
    Struct { tag: &'static str },

    /// A handle that is itself a pointer to an incomplete struct, such as
    /// `GLXContext`.
    Pointer { tag: &'static str },

    /// An X11 resource id, an `unsigned long` on the wire.
    Xid,

    /// A plain integer id.
    Integer { c_type: &'static str },
}

/// A native handle type referenced by the native interop API.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct OpaqueType {
    pub name: &'static str,
    pub kind: OpaqueKind,
}

impl OpaqueType {
    const fn incomplete(name: &'static str, tag: &'static str) -> Self {
        Self { name, kind: OpaqueKind::Struct { tag } }
    }

    const fn pointer(name: &'static str, tag: &'static str) -> Self {
        Self { name, kind: OpaqueKind::Pointer { tag } }
    }

    const fn xid(name: &'static str) -> Self {
        Self { name, kind: OpaqueKind::Xid }
    }

    /// Looks up a handle type of the catalog by name.
    pub fn by_name(name: &str) -> Option<&'static OpaqueType> {
        OPAQUE_TYPES.iter().find(|opaque| opaque.name == name)
    }

    /// The C declaration of the stand-in.
    pub fn c_declaration(&self) -> String {
        match self.kind {
            OpaqueKind::Struct { tag } if tag == self.name => format!("struct {tag};"),
            OpaqueKind::Struct { tag } => format!("typedef struct {tag} {};", self.name),
            OpaqueKind::Pointer { tag } => format!("typedef struct {tag}* {};", self.name),
            OpaqueKind::Xid => format!("typedef unsigned long {};", self.name),
            OpaqueKind::Integer { c_type } => format!("typedef {c_type} {};", self.name),
        }
    }

    /// Whether the binding generator should wrap the type into a new-type
    /// instead of a plain alias, to keep ids of different kinds apart.
    pub fn is_new_type(&self) -> bool {
        matches!(self.kind, OpaqueKind::Xid | OpaqueKind::Integer { .. })
    }
}

/// Every handle stand-in, grouped by backend in `glfw3native.h` order.
pub const OPAQUE_TYPES: &[OpaqueType] = &[
    // Win32 and WGL.
    OpaqueType::pointer("HWND", "HWND__"),
    OpaqueType::pointer("HGLRC", "HGLRC__"),
    // Cocoa and NSGL.
    OpaqueType { name: "CGDirectDisplayID", kind: OpaqueKind::Integer { c_type: "unsigned int" } },
    OpaqueType::pointer("id", "objc_object"),
    // X11 and GLX.
    OpaqueType::incomplete("Display", "_XDisplay"),
    OpaqueType::xid("RRCrtc"),
    OpaqueType::xid("RROutput"),
    OpaqueType::xid("Window"),
    OpaqueType::pointer("GLXContext", "__GLXcontextRec"),
    OpaqueType::xid("GLXWindow"),
    OpaqueType::pointer("GLXFBConfig", "__GLXFBConfigRec"),
    // Wayland.
    OpaqueType::incomplete("wl_display", "wl_display"),
    OpaqueType::incomplete("wl_output", "wl_output"),
    OpaqueType::incomplete("wl_surface", "wl_surface"),
    // EGL.
    OpaqueType::pointer("EGLDisplay", "__EGLDisplay"),
    OpaqueType::pointer("EGLContext", "__EGLContext"),
    OpaqueType::pointer("EGLSurface", "__EGLSurface"),
    OpaqueType::pointer("EGLConfig", "__EGLConfig"),
    // OSMesa.
    OpaqueType::pointer("OSMesaContext", "osmesa_context"),
];

/// Which exposure macro guards a native function.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum Guard {
    Windowing(WindowingBackend),
    Context(ContextApi),
}

/// One accessor of `glfw3native.h`.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct NativeFunction {
    pub name: &'static str,
    pub guard: Guard,
    /// The C return type.
    pub returns: &'static str,
    /// The C parameter list, each entry with its name.
    pub params: &'static [&'static str],
    /// The native handle types the signature mentions.
    pub handles: &'static [&'static str],
    /// The GLFW version that added the function.
    pub since: (u8, u8),
}

impl NativeFunction {
    /// The opaque stand-ins the signature needs.
    pub fn opaque_types(&self) -> impl Iterator<Item = &'static OpaqueType> + '_ {
        self.handles.iter().filter_map(|name| OpaqueType::by_name(name))
    }
}

impl fmt::Display for NativeFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let separator = if self.returns.ends_with('*') { "" } else { " " };
        write!(f, "{}{separator}{}(", self.returns, self.name)?;
        if self.params.is_empty() {
            f.write_str("void")?;
        } else {
            f.write_str(&self.params.join(", "))?;
        }
        f.write_str(");")
    }
}

macro_rules! native_fn {
    ($guard:expr, $returns:literal $name:ident($($param:literal),*) uses [$($handle:literal),*] since $since:expr) => {
        NativeFunction {
            name: stringify!($name),
            guard: $guard,
            returns: $returns,
            params: &[$($param),*],
            handles: &[$($handle),*],
            since: $since,
        }
    };
}

const WIN32: Guard = Guard::Windowing(WindowingBackend::Win32);
const COCOA: Guard = Guard::Windowing(WindowingBackend::Cocoa);
const X11: Guard = Guard::Windowing(WindowingBackend::X11);
const WAYLAND: Guard = Guard::Windowing(WindowingBackend::Wayland);
const WGL: Guard = Guard::Context(ContextApi::Wgl);
const NSGL: Guard = Guard::Context(ContextApi::Nsgl);
const GLX: Guard = Guard::Context(ContextApi::Glx);
const EGL: Guard = Guard::Context(ContextApi::Egl);
const OSMESA: Guard = Guard::Context(ContextApi::OsMesa);

/// The accessors of `glfw3native.h` for GLFW 3.4, in header order.
pub const NATIVE_FUNCTIONS: &[NativeFunction] = &[
    native_fn!(WIN32, "const char*" glfwGetWin32Adapter("GLFWmonitor* monitor") uses [] since (3, 1)),
    native_fn!(WIN32, "const char*" glfwGetWin32Monitor("GLFWmonitor* monitor") uses [] since (3, 1)),
    native_fn!(WIN32, "HWND" glfwGetWin32Window("GLFWwindow* window") uses ["HWND"] since (3, 0)),
    native_fn!(WGL, "HGLRC" glfwGetWGLContext("GLFWwindow* window") uses ["HGLRC"] since (3, 0)),
    native_fn!(COCOA, "CGDirectDisplayID" glfwGetCocoaMonitor("GLFWmonitor* monitor") uses ["CGDirectDisplayID"] since (3, 1)),
    native_fn!(COCOA, "id" glfwGetCocoaWindow("GLFWwindow* window") uses ["id"] since (3, 0)),
    native_fn!(COCOA, "id" glfwGetCocoaView("GLFWwindow* window") uses ["id"] since (3, 4)),
    native_fn!(NSGL, "id" glfwGetNSGLContext("GLFWwindow* window") uses ["id"] since (3, 0)),
    native_fn!(X11, "Display*" glfwGetX11Display() uses ["Display"] since (3, 0)),
    native_fn!(X11, "RRCrtc" glfwGetX11Adapter("GLFWmonitor* monitor") uses ["RRCrtc"] since (3, 1)),
    native_fn!(X11, "RROutput" glfwGetX11Monitor("GLFWmonitor* monitor") uses ["RROutput"] since (3, 1)),
    native_fn!(X11, "Window" glfwGetX11Window("GLFWwindow* window") uses ["Window"] since (3, 0)),
    native_fn!(X11, "void" glfwSetX11SelectionString("const char* string") uses [] since (3, 3)),
    native_fn!(X11, "const char*" glfwGetX11SelectionString() uses [] since (3, 3)),
    native_fn!(GLX, "GLXContext" glfwGetGLXContext("GLFWwindow* window") uses ["GLXContext"] since (3, 0)),
    native_fn!(GLX, "GLXWindow" glfwGetGLXWindow("GLFWwindow* window") uses ["GLXWindow"] since (3, 2)),
    native_fn!(GLX, "int" glfwGetGLXFBConfig("GLFWwindow* window", "GLXFBConfig* config") uses ["GLXFBConfig"] since (3, 4)),
    native_fn!(WAYLAND, "struct wl_display*" glfwGetWaylandDisplay() uses ["wl_display"] since (3, 2)),
    native_fn!(WAYLAND, "struct wl_output*" glfwGetWaylandMonitor("GLFWmonitor* monitor") uses ["wl_output"] since (3, 2)),
    native_fn!(WAYLAND, "struct wl_surface*" glfwGetWaylandWindow("GLFWwindow* window") uses ["wl_surface"] since (3, 2)),
    native_fn!(EGL, "EGLDisplay" glfwGetEGLDisplay() uses ["EGLDisplay"] since (3, 0)),
    native_fn!(EGL, "EGLContext" glfwGetEGLContext("GLFWwindow* window") uses ["EGLContext"] since (3, 0)),
    native_fn!(EGL, "EGLSurface" glfwGetEGLSurface("GLFWwindow* window") uses ["EGLSurface"] since (3, 0)),
    native_fn!(EGL, "int" glfwGetEGLConfig("GLFWwindow* window", "EGLConfig* config") uses ["EGLConfig"] since (3, 4)),
    native_fn!(
        OSMESA,
        "int" glfwGetOSMesaColorBuffer(
            "GLFWwindow* window", "int* width", "int* height", "int* format", "void** buffer"
        ) uses [] since (3, 3)
    ),
    native_fn!(
        OSMESA,
        "int" glfwGetOSMesaDepthBuffer(
            "GLFWwindow* window", "int* width", "int* height", "int* bytesPerValue", "void** buffer"
        ) uses [] since (3, 3)
    ),
    native_fn!(OSMESA, "OSMesaContext" glfwGetOSMesaContext("GLFWwindow* window") uses ["OSMesaContext"] since (3, 3)),
];

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    /// The identifiers of a C declaration that name a handle stand-in.
    fn handle_words(c: &str) -> impl Iterator<Item = &str> {
        c.split(|ch: char| !(ch.is_ascii_alphanumeric() || ch == '_'))
            .filter(|word| OpaqueType::by_name(word).is_some())
    }

    #[test]
    fn declared_handles_match_signatures() {
        for function in NATIVE_FUNCTIONS {
            let mentioned: BTreeSet<_> = handle_words(function.returns)
                .chain(function.params.iter().flat_map(|param| handle_words(param)))
                .collect();
            let declared: BTreeSet<_> = function.handles.iter().copied().collect();
            assert_eq!(mentioned, declared, "{}", function.name);
        }
    }

    #[test]
    fn every_handle_has_a_stand_in() {
        for function in NATIVE_FUNCTIONS {
            assert_eq!(function.opaque_types().count(), function.handles.len(), "{}", function.name);
        }
    }

    #[test]
    fn every_stand_in_is_used() {
        for opaque in OPAQUE_TYPES {
            assert!(
                NATIVE_FUNCTIONS.iter().any(|function| function.handles.contains(&opaque.name)),
                "{} is never referenced",
                opaque.name
            );
        }
    }

    #[test]
    fn stand_in_declarations() {
        let decl = |name| OpaqueType::by_name(name).unwrap().c_declaration();
        assert_eq!(decl("Display"), "typedef struct _XDisplay Display;");
        assert_eq!(decl("Window"), "typedef unsigned long Window;");
        assert_eq!(decl("GLXContext"), "typedef struct __GLXcontextRec* GLXContext;");
        assert_eq!(decl("wl_surface"), "struct wl_surface;");
        assert_eq!(decl("CGDirectDisplayID"), "typedef unsigned int CGDirectDisplayID;");
    }

    #[test]
    fn prototypes() {
        let prototype = |name| {
            NATIVE_FUNCTIONS.iter().find(|function| function.name == name).unwrap().to_string()
        };
        assert_eq!(prototype("glfwGetX11Display"), "Display* glfwGetX11Display(void);");
        assert_eq!(
            prototype("glfwGetGLXFBConfig"),
            "int glfwGetGLXFBConfig(GLFWwindow* window, GLXFBConfig* config);"
        );
        assert_eq!(
            prototype("glfwGetWaylandWindow"),
            "struct wl_surface* glfwGetWaylandWindow(GLFWwindow* window);"
        );
    }
}
