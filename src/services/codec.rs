//! JSON boundary for themes and palettes. Decode failures abort the
//! whole document and name the malformed top-level field; unknown fields
//! are ignored for forward compatibility.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::core::errors::{Error, Result};
use crate::models::palette::Palette;
use crate::models::theme::Theme;

pub fn decode_theme(bytes: &[u8]) -> Result<Theme> {
    let value: Value = serde_json::from_slice(bytes).map_err(|err| Error::MalformedTheme {
        field: "document",
        reason: err.to_string(),
    })?;
    let Value::Object(map) = value else {
        return Err(Error::MalformedTheme {
            field: "document",
            reason: "expected a JSON object".to_string(),
        });
    };
    let components = decode_theme_field(&map, "components")?;
    let colormaps = decode_theme_field(&map, "colormaps")?;
    Ok(Theme {
        components,
        colormaps,
    })
}

// Per-field decode so a failure reports which top-level field broke.
// A missing or null field falls back to its default.
fn decode_theme_field<T>(map: &Map<String, Value>, field: &'static str) -> Result<T>
where
    T: DeserializeOwned + Default,
{
    match map.get(field) {
        None | Some(Value::Null) => Ok(T::default()),
        Some(value) => {
            serde_json::from_value(value.clone()).map_err(|err| Error::MalformedTheme {
                field,
                reason: err.to_string(),
            })
        }
    }
}

pub fn encode_theme(theme: &Theme) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec(theme)?)
}

pub fn decode_palette(bytes: &[u8]) -> Result<Palette> {
    let palette: Palette =
        serde_json::from_slice(bytes).map_err(|err| Error::MalformedPalette(err.to_string()))?;
    palette.validate()?;
    Ok(palette)
}

pub fn encode_palette(palette: &Palette) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec(palette)?)
}
