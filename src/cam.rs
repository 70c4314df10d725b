use log::*;
use url::Url;

use crate::{
    CamError, CamResult,
    consts::{self, cmd, endpoint, field},
    response::{self, ParamMap},
    settings::{MotionDetectConfig, PtzAction, PtzCommand},
};

/// Struct for interacting with the camera.
///
/// Holds the connection parameters and one [reqwest::Client], which keeps the
/// HTTP connection and cookie state alive for the lifetime of the struct.
/// Each method issues a single request and awaits its completion; the library
/// makes no ordering guarantee between overlapping calls, so callers wanting
/// strict command sequencing should serialize calls themselves.
pub struct FdtCam {
    host: String,
    port: u16,
    username: String,
    password: String,
    client: reqwest::Client,
}

impl FdtCam {
    /// Creates a camera client using the default HTTP port (80).
    ///
    /// No request is made yet; the first command opens the connection.
    pub fn new(host: &str, username: &str, password: &str) -> CamResult<Self> {
        Self::new_custom(host, consts::DEFAULT_PORT, username, password)
    }

    /// Creates a camera client with a custom port.
    ///
    /// * `host` - Hostname or IP address of the camera.
    /// * `port` - Port of the camera's web server.
    /// * `username` - CGI API username.
    /// * `password` - CGI API password.
    pub fn new_custom(host: &str, port: u16, username: &str, password: &str) -> CamResult<Self> {
        let client = reqwest::Client::builder().cookie_store(true).build()?;

        Ok(Self {
            host: host.to_owned(),
            port,
            username: username.to_owned(),
            password: password.to_owned(),
            client,
        })
    }

    /// Builds the URL for a `param.cgi` query or command.
    ///
    /// Shape: `http://{host}:{port}/cgi-bin/hi3510/param.cgi?cmd={cmd}&-usr={user}&-pwd={password}`.
    /// Credentials are percent-encoded; the command name is a plain ASCII
    /// identifier and passes through verbatim.
    pub fn param_url(&self, cmd: &str) -> CamResult<Url> {
        let mut url = Url::parse(&format!(
            "http://{}:{}/{}/param.cgi",
            self.host,
            self.port,
            consts::CGI_BASE_PATH
        ))?;

        url.query_pairs_mut()
            .append_pair("cmd", cmd)
            .append_pair("-usr", &self.username)
            .append_pair("-pwd", &self.password);

        Ok(url)
    }

    /// Builds the URL for an endpoint addressed directly under the CGI base path.
    ///
    /// Shape: `http://{host}:{port}/cgi-bin/hi3510/{endpoint}&-usr={user}&-pwd={password}`.
    /// Firmware quirk: there is no `?` separator, the credentials ride in the
    /// path component.
    pub fn command_url(&self, endpoint: &str) -> CamResult<Url> {
        let url = Url::parse(&format!(
            "http://{}:{}/{}/{}&-usr={}&-pwd={}",
            self.host,
            self.port,
            consts::CGI_BASE_PATH,
            endpoint,
            encode_component(&self.username),
            encode_component(&self.password),
        ))?;

        Ok(url)
    }

    /// Issues one GET request and checks the HTTP status.
    async fn get_checked(&self, url: Url) -> CamResult<reqwest::Response> {
        debug!("GET {url}");

        let res = self.client.get(url).send().await?;

        let status = res.status();

        if !status.is_success() {
            warn!("Device replied with HTTP status {status}");

            return Err(CamError::Status {
                status: status.as_u16(),
            });
        }

        Ok(res)
    }

    /// Runs a query command and parses the reply into a [ParamMap].
    ///
    /// * `cmd` - A command name understood by `param.cgi`, such as the ones in [consts::cmd].
    pub async fn query(&self, cmd: &str) -> CamResult<ParamMap> {
        let body = self.query_raw(cmd).await?;

        response::parse_params(&body)
    }

    /// Runs a query command and returns the reply body verbatim.
    pub async fn query_raw(&self, cmd: &str) -> CamResult<String> {
        let url = self.param_url(cmd)?;

        let res = self.get_checked(url).await?;

        Ok(res.text().await?)
    }

    /// Runs a command with a payload of extra parameters, ignoring the reply body.
    ///
    /// Each payload entry is appended as `&-{key}={value}` in the order given,
    /// since some endpoints may be order-sensitive. The command is
    /// fire-and-forget: a success status says the device accepted the request,
    /// not that it applied the change. Callers needing confirmation re-query.
    pub async fn send(&self, cmd: &str, payload: &[(&str, &str)]) -> CamResult<()> {
        let mut url = self.param_url(cmd)?;

        {
            let mut pairs = url.query_pairs_mut();

            for (key, value) in payload {
                pairs.append_pair(&format!("-{key}"), value);
            }
        }

        self.get_checked(url).await?;

        Ok(())
    }

    /// Returns the device type reported by the camera (e.g. `IPC`),
    /// or `None` if the reply lacks the field.
    pub async fn device_type(&self) -> CamResult<Option<String>> {
        let params = self.query(cmd::GET_DEV_TYPE).await?;

        Ok(params.get(field::DEV_TYPE).cloned())
    }

    /// Captures a snapshot from the live feed.
    ///
    /// Returns the JPG picture as a byte buffer.
    pub async fn get_snapshot(&self) -> CamResult<Vec<u8>> {
        let url = self.command_url(endpoint::SNAPSHOT)?;

        let res = self.get_checked(url).await?;

        Ok(res.bytes().await?.to_vec())
    }

    /// Restores the camera to factory settings.
    pub async fn factory_reset(&self) -> CamResult<()> {
        let url = self.command_url(endpoint::SYS_RESET)?;

        self.get_checked(url).await?;

        Ok(())
    }

    /// Reboots the camera.
    pub async fn reboot(&self) -> CamResult<()> {
        let url = self.command_url(endpoint::SYS_REBOOT)?;

        self.get_checked(url).await?;

        Ok(())
    }

    /// Gets the status of the IR LEDs. Returns `true` if they are on.
    pub async fn ir_status(&self) -> CamResult<bool> {
        let params = self.query(cmd::GET_INFRARED).await?;

        let value = params.get(field::INFRARED_STAT).ok_or(CamError::MissingField {
            field: field::INFRARED_STAT,
        })?;

        Ok(value != "0")
    }

    /// Turns the IR LEDs on or off.
    pub async fn set_ir_status(&self, status: bool) -> CamResult<()> {
        let value = if status { "1" } else { "0" };

        self.send(cmd::SET_INFRARED, &[("infraredstat", value)])
            .await
    }

    /// Moves the camera to a stored PTZ preset.
    ///
    /// * `preset` - 1-based preset index. The firmware numbers presets from 0,
    ///   so the index is shifted down by one on the wire.
    pub async fn ptz_goto_preset(&self, preset: u8) -> CamResult<()> {
        if preset == 0 {
            return Err(CamError::InvalidPreset { preset });
        }

        let number = (preset - 1).to_string();

        self.send(cmd::PRESET, &[("act", "goto"), ("number", &number)])
            .await
    }

    /// Runs a raw PTZ movement command.
    pub async fn ptz_control(&self, command: PtzCommand) -> CamResult<()> {
        let speed = command.speed.to_string();
        let step = command.step.to_string();

        self.send(
            cmd::PTZ_CTRL,
            &[("act", command.act.as_str()), ("speed", &speed), ("step", &step)],
        )
        .await
    }

    /// Starts tilting the camera up. Movement continues until [ptz_stop](Self::ptz_stop).
    pub async fn ptz_up(&self) -> CamResult<()> {
        self.ptz_control(PtzCommand::direction(PtzAction::Up)).await
    }

    /// Starts tilting the camera down. Movement continues until [ptz_stop](Self::ptz_stop).
    pub async fn ptz_down(&self) -> CamResult<()> {
        self.ptz_control(PtzCommand::direction(PtzAction::Down))
            .await
    }

    /// Starts panning the camera left. Movement continues until [ptz_stop](Self::ptz_stop).
    pub async fn ptz_left(&self) -> CamResult<()> {
        self.ptz_control(PtzCommand::direction(PtzAction::Left))
            .await
    }

    /// Starts panning the camera right. Movement continues until [ptz_stop](Self::ptz_stop).
    pub async fn ptz_right(&self) -> CamResult<()> {
        self.ptz_control(PtzCommand::direction(PtzAction::Right))
            .await
    }

    /// Stops any ongoing PTZ movement.
    pub async fn ptz_stop(&self) -> CamResult<()> {
        self.ptz_control(PtzCommand::direction(PtzAction::Stop))
            .await
    }

    /// Gets the motion detection status of zone 1. Returns `true` if it is enabled.
    pub async fn motion_detect(&self) -> CamResult<bool> {
        let params = self.query(cmd::GET_MD_ATTR).await?;

        let value = params.get(field::MD_ENABLE).ok_or(CamError::MissingField {
            field: field::MD_ENABLE,
        })?;

        Ok(value != "0")
    }

    /// Writes a motion detection configuration to the camera.
    pub async fn set_motion_detect(&self, config: MotionDetectConfig) -> CamResult<()> {
        let enable = if config.enabled { "1" } else { "0" };
        let area = config.area.to_string();
        let sensitivity = config.sensitivity.to_string();

        self.send(
            cmd::SET_MD_ATTR,
            &[("enable", enable), ("area", &area), ("s", &sensitivity)],
        )
        .await
    }

    /// Enables motion detection with the default zone configuration.
    pub async fn motion_on(&self) -> CamResult<()> {
        self.set_motion_detect(MotionDetectConfig::new(true)).await
    }

    /// Disables motion detection.
    pub async fn motion_off(&self) -> CamResult<()> {
        self.set_motion_detect(MotionDetectConfig::new(false)).await
    }
}

/// Encodes a value spliced into the query-like part of a command URL.
fn encode_component(value: &str) -> String {
    url::form_urlencoded::byte_serialize(value.as_bytes()).collect()
}
