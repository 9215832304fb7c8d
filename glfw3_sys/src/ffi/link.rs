// Distributions ship `libglfw` while the official Windows builds and the
// CMake static target are named `glfw3`. System libraries a static build
// needs are emitted by the build script.

#[cfg(feature = "vendored")]
#[link(name = "glfw3", kind = "static")]
extern "C" {}

#[cfg(all(not(feature = "vendored"), any(free_unix, macos_platform)))]
#[link(name = "glfw")]
extern "C" {}

#[cfg(all(not(feature = "vendored"), windows))]
#[link(name = "glfw3")]
extern "C" {}
