//! Canvas persisted form: a self-contained PNG data URI.

use std::io::Cursor;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use image::{ImageFormat, RgbaImage};

use crate::error::{Result, ScribeError};

const PNG_PREFIX: &str = "data:image/png;base64,";

pub fn encode_data_uri(image: &RgbaImage) -> Result<String> {
    let mut buf = Vec::new();
    image.write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)?;

    let mut uri = String::with_capacity(PNG_PREFIX.len() + buf.len() * 4 / 3 + 4);
    uri.push_str(PNG_PREFIX);
    STANDARD.encode_string(&buf, &mut uri);
    Ok(uri)
}

pub fn decode_data_uri(uri: &str) -> Result<RgbaImage> {
    let (header, payload) = uri
        .trim()
        .split_once(',')
        .ok_or_else(|| ScribeError::canvas("data URI has no payload"))?;
    let media = header
        .strip_prefix("data:")
        .ok_or_else(|| ScribeError::canvas("content is not a data URI"))?;
    let media = media
        .strip_suffix(";base64")
        .ok_or_else(|| ScribeError::canvas("data URI is not base64 encoded"))?;
    if !media.starts_with("image/") {
        return Err(ScribeError::canvas(format!(
            "unsupported media type '{}'",
            media
        )));
    }

    let bytes = STANDARD.decode(payload)?;
    let decoded = image::load_from_memory(&bytes)?;
    Ok(decoded.to_rgba8())
}
