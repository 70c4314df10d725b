/// Default HTTP port of the camera's web server.
pub const DEFAULT_PORT: u16 = 80;

/// Base path every hi3510 CGI endpoint lives under.
pub const CGI_BASE_PATH: &str = "cgi-bin/hi3510";

/// Default movement speed used by the directional PTZ convenience commands.
pub const DEFAULT_PTZ_SPEED: u8 = 45;

/// Step value used by the directional PTZ convenience commands.
/// Zero means continuous movement until a stop command arrives.
pub const DEFAULT_PTZ_STEP: u8 = 0;

/// Default motion detection zone.
pub const DEFAULT_MD_AREA: u8 = 1;

/// Default motion detection sensitivity. (0-100)
pub const DEFAULT_MD_SENSITIVITY: u8 = 50;

/// Contains command names understood by `param.cgi`.
pub mod cmd {
    pub const GET_DEV_TYPE: &str = "getdevtype";
    pub const GET_INFRARED: &str = "getinfrared";
    pub const SET_INFRARED: &str = "setinfrared";
    pub const GET_MD_ATTR: &str = "getmdattr";
    pub const SET_MD_ATTR: &str = "setmdattr";
    pub const PRESET: &str = "preset";
    pub const PTZ_CTRL: &str = "ptzctrl";
}

/// Contains endpoints addressed directly under the CGI base path.
pub mod endpoint {
    pub const SNAPSHOT: &str = "web/tmpfs/auto.jpg";
    pub const SYS_REBOOT: &str = "sysreboot.cgi";
    pub const SYS_RESET: &str = "sysreset.cgi";
}

/// Contains reply fields read by the typed getters.
pub mod field {
    pub const DEV_TYPE: &str = "devtype";
    pub const INFRARED_STAT: &str = "infraredstat";
    pub const MD_ENABLE: &str = "m1_enable";
}
