use crate::consts;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Represents a movement action understood by the `ptzctrl` command.
pub enum PtzAction {
    Up,
    Down,
    Left,
    Right,
    ZoomIn,
    ZoomOut,
    Stop,
}

impl PtzAction {
    /// Gets the wire name of the action.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
            Self::ZoomIn => "zoomin",
            Self::ZoomOut => "zoomout",
            Self::Stop => "stop",
        }
    }
}

#[derive(Debug, Clone, Copy)]
/// Represents one `ptzctrl` request payload.
///
/// * `act` - The movement action.
/// * `speed` - Movement speed. (0-63)
/// * `step` - Step count, where 0 means continuous movement until stopped.
pub struct PtzCommand {
    pub act: PtzAction,
    pub speed: u8,
    pub step: u8,
}

impl PtzCommand {
    pub fn new(act: PtzAction, speed: u8, step: u8) -> Self {
        Self { act, speed, step }
    }

    /// Creates the payload used by the directional convenience commands:
    /// default speed, continuous movement.
    pub fn direction(act: PtzAction) -> Self {
        Self::new(act, consts::DEFAULT_PTZ_SPEED, consts::DEFAULT_PTZ_STEP)
    }
}

#[derive(Debug, Clone, Copy)]
/// Motion detection configuration for one detection zone.
///
/// The firmware tracks up to four zones; this library drives zone 1,
/// matching the `m1_` fields reported by `getmdattr`.
pub struct MotionDetectConfig {
    pub enabled: bool,
    pub area: u8,
    pub sensitivity: u8,
}

impl MotionDetectConfig {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            ..Default::default()
        }
    }
}

impl Default for MotionDetectConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            area: consts::DEFAULT_MD_AREA,
            sensitivity: consts::DEFAULT_MD_SENSITIVITY,
        }
    }
}
