//! Input and window events.

use std::path::PathBuf;

use bitflags::bitflags;
use glfw3_sys as sys;

use crate::monitor::MonitorId;
use crate::window::WindowId;

/// A platform-specific key code.
pub type Scancode = i32;

/// A Unicode code point, as GLFW reports typed text.
pub type Codepoint = u32;

/// Something that happened to a window or a monitor.
#[derive(Clone, PartialEq, Debug)]
pub enum Event {
    Window(WindowId, WindowEvent),
    Monitor(MonitorId, MonitorEvent),
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MonitorEvent {
    Connected,
    Disconnected,
}

#[derive(Clone, PartialEq, Debug)]
pub enum WindowEvent {
    /// The window moved, in screen coordinates.
    Pos(i32, i32),
    /// The window was resized, in screen coordinates.
    Size(i32, i32),
    Close,
    /// The contents need to be redrawn.
    Refresh,
    Focus(bool),
    Iconify(bool),
    FramebufferSize(i32, i32),
    MouseButton(MouseButton, Action, Modifiers),
    CursorPos(f64, f64),
    CursorEnter(bool),
    Scroll(f64, f64),
    Key(Key, Scancode, Action, Modifiers),
    Char(Codepoint),
    CharModifiers(Codepoint, Modifiers),
    FileDrop(Vec<PathBuf>),
    Maximize(bool),
    ContentScale(f32, f32),
}

#[repr(i32)]
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Action {
    Release = sys::GLFW_RELEASE,
    Press = sys::GLFW_PRESS,
    Repeat = sys::GLFW_REPEAT,
}

impl TryFrom<i32> for Action {
    type Error = i32;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            sys::GLFW_RELEASE => Ok(Self::Release),
            sys::GLFW_PRESS => Ok(Self::Press),
            sys::GLFW_REPEAT => Ok(Self::Repeat),
            value => Err(value),
        }
    }
}

bitflags! {
    /// Modifier keys held down during an input event.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Modifiers: i32 {
        const SHIFT = sys::GLFW_MOD_SHIFT;
        const CONTROL = sys::GLFW_MOD_CONTROL;
        const ALT = sys::GLFW_MOD_ALT;
        const SUPER = sys::GLFW_MOD_SUPER;
        /// Only reported with `GLFW_LOCK_KEY_MODS` set.
        const CAPS_LOCK = sys::GLFW_MOD_CAPS_LOCK;
        /// Only reported with `GLFW_LOCK_KEY_MODS` set.
        const NUM_LOCK = sys::GLFW_MOD_NUM_LOCK;
    }
}

#[repr(i32)]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum MouseButton {
    /// The left button.
    Button1 = sys::GLFW_MOUSE_BUTTON_1,
    /// The right button.
    Button2 = sys::GLFW_MOUSE_BUTTON_2,
    /// The middle button.
    Button3 = sys::GLFW_MOUSE_BUTTON_3,
    Button4 = sys::GLFW_MOUSE_BUTTON_4,
    Button5 = sys::GLFW_MOUSE_BUTTON_5,
    Button6 = sys::GLFW_MOUSE_BUTTON_6,
    Button7 = sys::GLFW_MOUSE_BUTTON_7,
    Button8 = sys::GLFW_MOUSE_BUTTON_8,
}

impl MouseButton {
    pub const LEFT: Self = Self::Button1;
    pub const RIGHT: Self = Self::Button2;
    pub const MIDDLE: Self = Self::Button3;
}

impl TryFrom<i32> for MouseButton {
    type Error = i32;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        use MouseButton::*;
        const BUTTONS: [MouseButton; 8] =
            [Button1, Button2, Button3, Button4, Button5, Button6, Button7, Button8];
        usize::try_from(value).ok().and_then(|index| BUTTONS.get(index)).copied().ok_or(value)
    }
}

macro_rules! keys {
    ($($name:ident = $code:ident,)*) => {
        /// A key, named after its position on a US keyboard layout.
        #[repr(i32)]
        #[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
        pub enum Key {
            $($name = sys::$code,)*
        }

        impl TryFrom<i32> for Key {
            type Error = i32;

            fn try_from(value: i32) -> Result<Self, Self::Error> {
                match value {
                    $(sys::$code => Ok(Key::$name),)*
                    value => Err(value),
                }
            }
        }
    };
}

keys! {
    Unknown = GLFW_KEY_UNKNOWN,
    Space = GLFW_KEY_SPACE,
    Apostrophe = GLFW_KEY_APOSTROPHE,
    Comma = GLFW_KEY_COMMA,
    Minus = GLFW_KEY_MINUS,
    Period = GLFW_KEY_PERIOD,
    Slash = GLFW_KEY_SLASH,
    Num0 = GLFW_KEY_0,
    Num1 = GLFW_KEY_1,
    Num2 = GLFW_KEY_2,
    Num3 = GLFW_KEY_3,
    Num4 = GLFW_KEY_4,
    Num5 = GLFW_KEY_5,
    Num6 = GLFW_KEY_6,
    Num7 = GLFW_KEY_7,
    Num8 = GLFW_KEY_8,
    Num9 = GLFW_KEY_9,
    Semicolon = GLFW_KEY_SEMICOLON,
    Equal = GLFW_KEY_EQUAL,
    A = GLFW_KEY_A,
    B = GLFW_KEY_B,
    C = GLFW_KEY_C,
    D = GLFW_KEY_D,
    E = GLFW_KEY_E,
    F = GLFW_KEY_F,
    G = GLFW_KEY_G,
    H = GLFW_KEY_H,
    I = GLFW_KEY_I,
    J = GLFW_KEY_J,
    K = GLFW_KEY_K,
    L = GLFW_KEY_L,
    M = GLFW_KEY_M,
    N = GLFW_KEY_N,
    O = GLFW_KEY_O,
    P = GLFW_KEY_P,
    Q = GLFW_KEY_Q,
    R = GLFW_KEY_R,
    S = GLFW_KEY_S,
    T = GLFW_KEY_T,
    U = GLFW_KEY_U,
    V = GLFW_KEY_V,
    W = GLFW_KEY_W,
    X = GLFW_KEY_X,
    Y = GLFW_KEY_Y,
    Z = GLFW_KEY_Z,
    LeftBracket = GLFW_KEY_LEFT_BRACKET,
    Backslash = GLFW_KEY_BACKSLASH,
    RightBracket = GLFW_KEY_RIGHT_BRACKET,
    GraveAccent = GLFW_KEY_GRAVE_ACCENT,
    World1 = GLFW_KEY_WORLD_1,
    World2 = GLFW_KEY_WORLD_2,
    Escape = GLFW_KEY_ESCAPE,
    Enter = GLFW_KEY_ENTER,
    Tab = GLFW_KEY_TAB,
    Backspace = GLFW_KEY_BACKSPACE,
    Insert = GLFW_KEY_INSERT,
    Delete = GLFW_KEY_DELETE,
    Right = GLFW_KEY_RIGHT,
    Left = GLFW_KEY_LEFT,
    Down = GLFW_KEY_DOWN,
    Up = GLFW_KEY_UP,
    PageUp = GLFW_KEY_PAGE_UP,
    PageDown = GLFW_KEY_PAGE_DOWN,
    Home = GLFW_KEY_HOME,
    End = GLFW_KEY_END,
    CapsLock = GLFW_KEY_CAPS_LOCK,
    ScrollLock = GLFW_KEY_SCROLL_LOCK,
    NumLock = GLFW_KEY_NUM_LOCK,
    PrintScreen = GLFW_KEY_PRINT_SCREEN,
    Pause = GLFW_KEY_PAUSE,
    F1 = GLFW_KEY_F1,
    F2 = GLFW_KEY_F2,
    F3 = GLFW_KEY_F3,
    F4 = GLFW_KEY_F4,
    F5 = GLFW_KEY_F5,
    F6 = GLFW_KEY_F6,
    F7 = GLFW_KEY_F7,
    F8 = GLFW_KEY_F8,
    F9 = GLFW_KEY_F9,
    F10 = GLFW_KEY_F10,
    F11 = GLFW_KEY_F11,
    F12 = GLFW_KEY_F12,
    F13 = GLFW_KEY_F13,
    F14 = GLFW_KEY_F14,
    F15 = GLFW_KEY_F15,
    F16 = GLFW_KEY_F16,
    F17 = GLFW_KEY_F17,
    F18 = GLFW_KEY_F18,
    F19 = GLFW_KEY_F19,
    F20 = GLFW_KEY_F20,
    F21 = GLFW_KEY_F21,
    F22 = GLFW_KEY_F22,
    F23 = GLFW_KEY_F23,
    F24 = GLFW_KEY_F24,
    F25 = GLFW_KEY_F25,
    Kp0 = GLFW_KEY_KP_0,
    Kp1 = GLFW_KEY_KP_1,
    Kp2 = GLFW_KEY_KP_2,
    Kp3 = GLFW_KEY_KP_3,
    Kp4 = GLFW_KEY_KP_4,
    Kp5 = GLFW_KEY_KP_5,
    Kp6 = GLFW_KEY_KP_6,
    Kp7 = GLFW_KEY_KP_7,
    Kp8 = GLFW_KEY_KP_8,
    Kp9 = GLFW_KEY_KP_9,
    KpDecimal = GLFW_KEY_KP_DECIMAL,
    KpDivide = GLFW_KEY_KP_DIVIDE,
    KpMultiply = GLFW_KEY_KP_MULTIPLY,
    KpSubtract = GLFW_KEY_KP_SUBTRACT,
    KpAdd = GLFW_KEY_KP_ADD,
    KpEnter = GLFW_KEY_KP_ENTER,
    KpEqual = GLFW_KEY_KP_EQUAL,
    LeftShift = GLFW_KEY_LEFT_SHIFT,
    LeftControl = GLFW_KEY_LEFT_CONTROL,
    LeftAlt = GLFW_KEY_LEFT_ALT,
    LeftSuper = GLFW_KEY_LEFT_SUPER,
    RightShift = GLFW_KEY_RIGHT_SHIFT,
    RightControl = GLFW_KEY_RIGHT_CONTROL,
    RightAlt = GLFW_KEY_RIGHT_ALT,
    RightSuper = GLFW_KEY_RIGHT_SUPER,
    Menu = GLFW_KEY_MENU,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_from_codes() {
        assert_eq!(Key::try_from(sys::GLFW_KEY_A), Ok(Key::A));
        assert_eq!(Key::try_from(sys::GLFW_KEY_UNKNOWN), Ok(Key::Unknown));
        assert_eq!(Key::try_from(sys::GLFW_KEY_LAST), Ok(Key::Menu));
        // Gaps between the printable keys.
        assert_eq!(Key::try_from(40), Err(40));
        assert_eq!(Key::try_from(270), Err(270));
        assert_eq!(Key::try_from(sys::GLFW_KEY_LAST + 1), Err(sys::GLFW_KEY_LAST + 1));

        for code in -1..=sys::GLFW_KEY_LAST {
            if let Ok(key) = Key::try_from(code) {
                assert_eq!(key as i32, code);
            }
        }
    }

    #[test]
    fn mouse_buttons_from_codes() {
        assert_eq!(MouseButton::try_from(sys::GLFW_MOUSE_BUTTON_LEFT), Ok(MouseButton::LEFT));
        assert_eq!(MouseButton::try_from(sys::GLFW_MOUSE_BUTTON_LAST), Ok(MouseButton::Button8));
        assert_eq!(MouseButton::try_from(-1), Err(-1));
        assert_eq!(MouseButton::try_from(8), Err(8));
        for code in 0..=sys::GLFW_MOUSE_BUTTON_LAST {
            assert_eq!(MouseButton::try_from(code).map(|button| button as i32), Ok(code));
        }
    }

    #[test]
    fn actions_from_codes() {
        assert_eq!(Action::try_from(sys::GLFW_PRESS), Ok(Action::Press));
        assert_eq!(Action::try_from(sys::GLFW_REPEAT), Ok(Action::Repeat));
        assert_eq!(Action::try_from(3), Err(3));
    }

    #[test]
    fn modifiers_drop_unknown_bits() {
        let mods = Modifiers::from_bits_truncate(sys::GLFW_MOD_SHIFT | sys::GLFW_MOD_ALT | 0x100);
        assert_eq!(mods, Modifiers::SHIFT | Modifiers::ALT);
    }
}
