//! A Rust client library for FDT IP cameras (hi3510 firmware family), controlled over their HTTP CGI interface.
//!
//! The camera exposes a vendor CGI API: authenticated GET requests against a
//! handful of fixed endpoints, with credentials and parameters riding in the
//! query string, and replies in a JavaScript-assignment-like text format
//! (`var devtype="IPC";`). This library wraps that API with typed commands for
//! PTZ movement, preset recall, infrared and motion-detection control,
//! snapshot capture and device maintenance (reboot, factory reset).
//! The underlying HTTP client is [reqwest].
//!
//! [reqwest]: https://github.com/seanmonstar/reqwest
//!
//! ## Example
//!
//! ```no_run
//! use fdtcam_lib_rs::{cam::FdtCam, util::CamUtil};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let cam = FdtCam::new("192.168.1.10", "admin", "password")?;
//!
//!     println!("Device type: {:?}", cam.device_type().await?);
//!
//!     cam.save_snapshot("snapshot.jpg").await?;
//!
//!     cam.ptz_up().await?;
//!     cam.ptz_stop().await?;
//!
//!     Ok(())
//! }
//! ```

/// Contains definitions of camera commands, endpoints and some default values.
pub mod consts;

/// Contains typed values for camera commands (PTZ actions, motion detection configuration).
pub mod settings;

/// Contains the parser for the camera's textual reply format.
pub mod response;

/// Contains various convenience methods for interacting with the camera.
pub mod util;

/// Contains the main camera struct.
pub mod cam;

/// Crate-specific error enum.
/// Every function interacting with the camera returns a Result enum with this error type.
#[derive(thiserror::Error, Debug)]
pub enum CamError {
    #[error("Error while performing the HTTP request")]
    Transport(#[from] reqwest::Error),

    #[error("Device replied with HTTP status {status}")]
    Status { status: u16 },

    #[error("Malformed response line: {line:?}")]
    MalformedResponse { line: String },

    #[error("Field {field:?} missing from the device response")]
    MissingField { field: &'static str },

    #[error("Couldn't build a valid request URL")]
    Url(#[from] url::ParseError),

    #[error("Internal I/O error occured")]
    Io(#[from] std::io::Error),

    #[error("Preset indices start at 1 (received {preset})")]
    InvalidPreset { preset: u8 },
}

type CamResult<T> = Result<T, CamError>;
