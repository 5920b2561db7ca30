//! The kind registry: every native event kind and the category ranges.
//!
//! Values are fixed by the native library's ABI. Add or remove kinds by
//! editing the table below; categories must stay disjoint.

use super::event_type::EventType;

define_kinds! {
    /// Application lifecycle.
    Application => "Application" [0x100 ..= 0x150] {
        /// User-requested quit.
        APPLICATION_QUIT => "Quit" = 0x100,
        /// The OS is terminating the application.
        APPLICATION_TERMINATING => "Terminating" = 0x101,
        /// The OS is low on memory.
        APPLICATION_LOW_MEMORY => "LowMemory" = 0x102,
        /// The application is about to enter the background.
        APPLICATION_WILL_ENTER_BACKGROUND => "WillEnterBackground" = 0x103,
        /// The application entered the background.
        APPLICATION_DID_ENTER_BACKGROUND => "DidEnterBackground" = 0x104,
        /// The application is about to enter the foreground.
        APPLICATION_WILL_ENTER_FOREGROUND => "WillEnterForeground" = 0x105,
        /// The application entered the foreground.
        APPLICATION_DID_ENTER_FOREGROUND => "DidEnterForeground" = 0x106,
        /// The user's locale preferences changed.
        APPLICATION_LOCALE_CHANGED => "LocaleChanged" = 0x107,
        /// The system theme changed.
        APPLICATION_SYSTEM_THEME_CHANGED => "SystemThemeChanged" = 0x108,
    }

    /// Display hotplug and mode changes.
    Display => "Display" [0x151 ..= 0x1FF] {
        /// Display orientation changed.
        DISPLAY_ORIENTATION => "Orientation" = 0x151,
        /// Display added.
        DISPLAY_ADDED => "Added" = 0x152,
        /// Display removed.
        DISPLAY_REMOVED => "Removed" = 0x153,
        /// Display position changed.
        DISPLAY_MOVED => "Moved" = 0x154,
        /// Desktop mode changed.
        DISPLAY_DESKTOP_MODE_CHANGED => "DesktopModeChanged" = 0x155,
        /// Current mode changed.
        DISPLAY_CURRENT_MODE_CHANGED => "CurrentModeChanged" = 0x156,
        /// Content scale changed.
        DISPLAY_CONTENT_SCALE_CHANGED => "ContentScaleChanged" = 0x157,
    }

    /// Window state changes.
    Window => "Window" [0x200 ..= 0x2FF] {
        /// Window shown.
        WINDOW_SHOWN => "Shown" = 0x202,
        /// Window hidden.
        WINDOW_HIDDEN => "Hidden" = 0x203,
        /// Window exposed and should be redrawn.
        WINDOW_EXPOSED => "Exposed" = 0x204,
        /// Window moved.
        WINDOW_MOVED => "Moved" = 0x205,
        /// Window resized.
        WINDOW_RESIZED => "Resized" = 0x206,
        /// Window pixel size changed.
        WINDOW_PIXEL_SIZE_CHANGED => "PixelSizeChanged" = 0x207,
        /// Metal view resized.
        WINDOW_METAL_VIEW_RESIZED => "MetalViewResized" = 0x208,
        /// Window minimized.
        WINDOW_MINIMIZED => "Minimized" = 0x209,
        /// Window maximized.
        WINDOW_MAXIMIZED => "Maximized" = 0x20A,
        /// Window restored.
        WINDOW_RESTORED => "Restored" = 0x20B,
        /// Mouse entered the window.
        WINDOW_MOUSE_ENTER => "MouseEnter" = 0x20C,
        /// Mouse left the window.
        WINDOW_MOUSE_LEAVE => "MouseLeave" = 0x20D,
        /// Keyboard focus gained.
        WINDOW_FOCUS_GAINED => "FocusGained" = 0x20E,
        /// Keyboard focus lost.
        WINDOW_FOCUS_LOST => "FocusLost" = 0x20F,
        /// Window manager asked to close the window.
        WINDOW_CLOSE_REQUESTED => "CloseRequested" = 0x210,
        /// Hit test callback triggered.
        WINDOW_HIT_TEST => "HitTest" = 0x211,
        /// ICC profile changed.
        WINDOW_ICCPROF_CHANGED => "IccProfileChanged" = 0x212,
        /// Window moved to another display.
        WINDOW_DISPLAY_CHANGED => "DisplayChanged" = 0x213,
        /// Window display scale changed.
        WINDOW_DISPLAY_SCALE_CHANGED => "DisplayScaleChanged" = 0x214,
        /// Safe area changed.
        WINDOW_SAFE_AREA_CHANGED => "SafeAreaChanged" = 0x215,
        /// Window fully occluded.
        WINDOW_OCCLUDED => "Occluded" = 0x216,
        /// Window entered fullscreen.
        WINDOW_ENTER_FULLSCREEN => "EnterFullscreen" = 0x217,
        /// Window left fullscreen.
        WINDOW_LEAVE_FULLSCREEN => "LeaveFullscreen" = 0x218,
        /// Window destroyed.
        WINDOW_DESTROYED => "Destroyed" = 0x219,
        /// HDR state changed.
        WINDOW_HDR_STATE_CHANGED => "HdrStateChanged" = 0x21A,
    }

    /// Keyboard and text input.
    Keyboard => "Keyboard" [0x300 ..= 0x3FF] {
        /// Key pressed.
        KEYBOARD_KEY_DOWN => "KeyDown" = 0x300,
        /// Key released.
        KEYBOARD_KEY_UP => "KeyUp" = 0x301,
        /// Text editing composition.
        KEYBOARD_TEXT_EDITING => "TextEditing" = 0x302,
        /// Text input.
        KEYBOARD_TEXT_INPUT => "TextInput" = 0x303,
        /// Keymap changed.
        KEYBOARD_KEYMAP_CHANGED => "KeymapChanged" = 0x304,
        /// Keyboard attached.
        KEYBOARD_ADDED => "Added" = 0x305,
        /// Keyboard detached.
        KEYBOARD_REMOVED => "Removed" = 0x306,
        /// Text editing candidates changed.
        KEYBOARD_TEXT_EDITING_CANDIDATES => "TextEditingCandidates" = 0x307,
    }

    /// Mouse input and hotplug.
    Mouse => "Mouse" [0x400 ..= 0x5FF] {
        /// Mouse moved.
        MOUSE_MOTION => "Motion" = 0x400,
        /// Mouse button pressed.
        MOUSE_BUTTON_DOWN => "ButtonDown" = 0x401,
        /// Mouse button released.
        MOUSE_BUTTON_UP => "ButtonUp" = 0x402,
        /// Mouse wheel moved.
        MOUSE_WHEEL => "Wheel" = 0x403,
        /// Mouse attached.
        MOUSE_ADDED => "Added" = 0x404,
        /// Mouse detached.
        MOUSE_REMOVED => "Removed" = 0x405,
    }

    /// Joystick input and hotplug.
    Joystick => "Joystick" [0x600 ..= 0x64F] {
        /// Axis motion.
        JOYSTICK_AXIS_MOTION => "AxisMotion" = 0x600,
        /// Trackball motion.
        JOYSTICK_BALL_MOTION => "BallMotion" = 0x601,
        /// Hat position change.
        JOYSTICK_HAT_MOTION => "HatMotion" = 0x602,
        /// Button pressed.
        JOYSTICK_BUTTON_DOWN => "ButtonDown" = 0x603,
        /// Button released.
        JOYSTICK_BUTTON_UP => "ButtonUp" = 0x604,
        /// Joystick attached.
        JOYSTICK_ADDED => "Added" = 0x605,
        /// Joystick detached.
        JOYSTICK_REMOVED => "Removed" = 0x606,
        /// Battery level changed.
        JOYSTICK_BATTERY_UPDATED => "BatteryUpdated" = 0x607,
        /// Joystick update complete.
        JOYSTICK_UPDATE_COMPLETE => "UpdateComplete" = 0x608,
    }

    /// Gamepad input and hotplug.
    Gamepad => "Gamepad" [0x650 ..= 0x6FF] {
        /// Axis motion.
        GAMEPAD_AXIS_MOTION => "AxisMotion" = 0x650,
        /// Button pressed.
        GAMEPAD_BUTTON_DOWN => "ButtonDown" = 0x651,
        /// Button released.
        GAMEPAD_BUTTON_UP => "ButtonUp" = 0x652,
        /// Gamepad attached.
        GAMEPAD_ADDED => "Added" = 0x653,
        /// Gamepad detached.
        GAMEPAD_REMOVED => "Removed" = 0x654,
        /// Mapping changed.
        GAMEPAD_REMAPPED => "Remapped" = 0x655,
        /// Touchpad pressed.
        GAMEPAD_TOUCHPAD_DOWN => "TouchpadDown" = 0x656,
        /// Touchpad finger moved.
        GAMEPAD_TOUCHPAD_MOTION => "TouchpadMotion" = 0x657,
        /// Touchpad released.
        GAMEPAD_TOUCHPAD_UP => "TouchpadUp" = 0x658,
        /// Sensor updated.
        GAMEPAD_SENSOR_UPDATE => "SensorUpdate" = 0x659,
        /// Gamepad update complete.
        GAMEPAD_UPDATE_COMPLETE => "UpdateComplete" = 0x65A,
        /// Steam handle updated.
        GAMEPAD_STEAM_HANDLE_UPDATED => "SteamHandleUpdated" = 0x65B,
    }

    /// Touch input.
    Touch => "Touch" [0x700 ..= 0x8FF] {
        /// Finger touched down.
        TOUCH_FINGER_DOWN => "FingerDown" = 0x700,
        /// Finger lifted.
        TOUCH_FINGER_UP => "FingerUp" = 0x701,
        /// Finger moved.
        TOUCH_FINGER_MOTION => "FingerMotion" = 0x702,
        /// Touch canceled.
        TOUCH_FINGER_CANCELED => "FingerCanceled" = 0x703,
    }

    /// Clipboard.
    Clipboard => "Clipboard" [0x900 ..= 0xFFF] {
        /// Clipboard contents or selection changed.
        CLIPBOARD_UPDATE => "Updated" = 0x900,
    }

    /// Drag and drop.
    Drop => "Drop" [0x1000 ..= 0x10FF] {
        /// File dropped.
        DROP_FILE => "File" = 0x1000,
        /// Text dropped.
        DROP_TEXT => "Text" = 0x1001,
        /// Drop sequence began.
        DROP_BEGIN => "Begin" = 0x1002,
        /// Drop sequence complete.
        DROP_COMPLETE => "Complete" = 0x1003,
        /// Drag position changed.
        DROP_POSITION => "Position" = 0x1004,
    }

    /// Audio device hotplug.
    Audio => "Audio" [0x1100 ..= 0x11FF] {
        /// Audio device added.
        AUDIO_DEVICE_ADDED => "DeviceAdded" = 0x1100,
        /// Audio device removed.
        AUDIO_DEVICE_REMOVED => "DeviceRemoved" = 0x1101,
        /// Audio device format changed.
        AUDIO_DEVICE_FORMAT_CHANGED => "DeviceFormatChanged" = 0x1102,
    }

    /// Sensors.
    Sensor => "Sensor" [0x1200 ..= 0x12FF] {
        /// Sensor updated.
        SENSOR_UPDATE => "Update" = 0x1200,
    }

    /// Pen input.
    Pen => "Pen" [0x1300 ..= 0x13FF] {
        /// Pen came into proximity.
        PEN_PROXIMITY_IN => "ProximityIn" = 0x1300,
        /// Pen left proximity.
        PEN_PROXIMITY_OUT => "ProximityOut" = 0x1301,
        /// Pen touched the surface.
        PEN_DOWN => "Down" = 0x1302,
        /// Pen lifted off the surface.
        PEN_UP => "Up" = 0x1303,
        /// Pen button pressed.
        PEN_BUTTON_DOWN => "ButtonDown" = 0x1304,
        /// Pen button released.
        PEN_BUTTON_UP => "ButtonUp" = 0x1305,
        /// Pen moved.
        PEN_MOTION => "Motion" = 0x1306,
        /// Pen axis changed.
        PEN_AXIS => "Axis" = 0x1307,
    }

    /// Camera device hotplug.
    Camera => "Camera" [0x1400 ..= 0x1FFF] {
        /// Camera added.
        CAMERA_DEVICE_ADDED => "DeviceAdded" = 0x1400,
        /// Camera removed.
        CAMERA_DEVICE_REMOVED => "DeviceRemoved" = 0x1401,
        /// User approved camera access.
        CAMERA_DEVICE_APPROVED => "DeviceApproved" = 0x1402,
        /// User denied camera access.
        CAMERA_DEVICE_DENIED => "DeviceDenied" = 0x1403,
    }

    /// Renderer resets.
    Render => "Render" [0x2000 ..= 0x3FFF] {
        /// Render targets were reset.
        RENDER_TARGETS_RESET => "TargetsReset" = 0x2000,
        /// Render device was reset.
        RENDER_DEVICE_RESET => "DeviceReset" = 0x2001,
        /// Render device was lost.
        RENDER_DEVICE_LOST => "DeviceLost" = 0x2002,
    }

    /// Reserved for the native library's private use.
    Private => "Private" [0x4000 ..= 0x7EFF] {
        /// Private kind 0.
        PRIVATE_0 => "Private0" = 0x4000,
        /// Private kind 1.
        PRIVATE_1 => "Private1" = 0x4001,
        /// Private kind 2.
        PRIVATE_2 => "Private2" = 0x4002,
        /// Private kind 3.
        PRIVATE_3 => "Private3" = 0x4003,
    }

    /// Internal queue bookkeeping.
    Internal => "Internal" [0x7F00 ..= 0x7FFF] {
        /// Signals the end of a poll pass.
        INTERNAL_POLL_SENTINEL => "PollSentinel" = 0x7F00,
    }

    /// Caller-registered kinds, `[User, Last)`.
    User => "User" [0x8000 ..= 0xFFFE] {}
}
