use std::collections::HashMap;

use crate::{CamError, CamResult};

/// Key/value map parsed out of a textual device reply.
/// Values stay untyped strings; callers needing booleans or numbers convert themselves.
pub type ParamMap = HashMap<String, String>;

/// Parses the firmware's reply format into a [ParamMap].
///
/// Replies consist of newline-separated JavaScript-like assignments
/// (`var devtype="IPC";`). Single quotes and semicolons are dropped from the
/// whole body first, then every non-blank line must carry the `var ` token and
/// an `=` separator, otherwise the parse fails with
/// [MalformedResponse](CamError::MalformedResponse). Blank lines are skipped.
/// Later duplicate keys overwrite earlier ones.
pub fn parse_params(body: &str) -> CamResult<ParamMap> {
    let cleaned = body.replace(['\'', ';'], "");

    let mut params = ParamMap::new();

    for line in cleaned.lines() {
        let line = line.trim();

        if line.is_empty() {
            continue;
        }

        let assignment = line
            .strip_prefix("var ")
            .ok_or_else(|| CamError::MalformedResponse {
                line: line.to_owned(),
            })?;

        let assignment = assignment.replace('"', "");

        // Split on the first `=` only, so values may themselves contain `=`.
        let (key, value) =
            assignment
                .trim()
                .split_once('=')
                .ok_or_else(|| CamError::MalformedResponse {
                    line: line.to_owned(),
                })?;

        params.insert(key.to_owned(), value.to_owned());
    }

    Ok(params)
}
