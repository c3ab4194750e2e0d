use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::CatalogError;

const VARIOUS_ARTISTS: &str = "Various Artists";

/// A release as seen by the discography filter.
///
/// Built from a raw catalog record through [`CatalogItem::from_value`], which
/// rejects records missing any attribute the filter relies on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: String,
    pub title: String,
    pub version: Option<String>,
    pub artist_name: String,
    pub max_bit_depth: u32,
    pub max_sampling_rate: f64,
    pub release_type: Option<String>,
}

impl CatalogItem {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        version: Option<&str>,
        artist_name: impl Into<String>,
        max_bit_depth: u32,
        max_sampling_rate: f64,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            version: version.map(str::to_string),
            artist_name: artist_name.into(),
            max_bit_depth,
            max_sampling_rate,
            release_type: None,
        }
    }

    pub fn with_release_type(mut self, release_type: impl Into<String>) -> Self {
        self.release_type = Some(release_type.into());
        self
    }

    /// Admits a raw release record from a catalog listing.
    ///
    /// Ids may be strings or numbers. `version` and `release_type` are
    /// optional; every other attribute is required.
    pub fn from_value(value: &Value) -> Result<Self, CatalogError> {
        let id = match value.get("id") {
            Some(Value::String(id)) if !id.is_empty() => id.clone(),
            Some(Value::Number(id)) => id.to_string(),
            _ => return Err(malformed("<unknown>", "id")),
        };

        let title = value
            .get("title")
            .and_then(Value::as_str)
            .ok_or_else(|| malformed(&id, "title"))?
            .to_string();

        let version = match value.get("version") {
            None | Some(Value::Null) => None,
            Some(Value::String(v)) => Some(v.clone()),
            Some(_) => return Err(malformed(&id, "version")),
        };

        let artist_name = value
            .get("artist")
            .and_then(|artist| artist.get("name"))
            .and_then(Value::as_str)
            .ok_or_else(|| malformed(&id, "artist.name"))?
            .to_string();

        let max_bit_depth = value
            .get("maximum_bit_depth")
            .and_then(Value::as_u64)
            .and_then(|bits| u32::try_from(bits).ok())
            .ok_or_else(|| malformed(&id, "maximum_bit_depth"))?;

        let max_sampling_rate = value
            .get("maximum_sampling_rate")
            .and_then(Value::as_f64)
            .ok_or_else(|| malformed(&id, "maximum_sampling_rate"))?;

        let release_type = value
            .get("release_type")
            .and_then(Value::as_str)
            .map(str::to_string);

        Ok(Self {
            id,
            title,
            version,
            artist_name,
            max_bit_depth,
            max_sampling_rate,
            release_type,
        })
    }

    /// Studio albums only: singles, EPs and various-artists releases fail.
    pub fn is_studio_album(&self) -> bool {
        is_studio_release(self.release_type.as_deref(), &self.artist_name)
    }

    /// Short `bits/kHz` label used in tables and logs.
    pub fn quality_label(&self) -> String {
        format!("{}/{}", self.max_bit_depth, self.max_sampling_rate)
    }
}

impl TryFrom<&Value> for CatalogItem {
    type Error = CatalogError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        Self::from_value(value)
    }
}

/// Admits every record of a listing, keeping rejected ones apart so the
/// caller can report them and carry on with the rest.
pub fn admit_all(values: &[Value]) -> (Vec<CatalogItem>, Vec<CatalogError>) {
    let mut admitted = Vec::with_capacity(values.len());
    let mut rejected = Vec::new();

    for value in values {
        match CatalogItem::from_value(value) {
            Ok(item) => admitted.push(item),
            Err(e) => rejected.push(e),
        }
    }

    (admitted, rejected)
}

/// The albums-only rule, shared by catalog items and fetched album metadata.
pub fn is_studio_release(release_type: Option<&str>, artist_name: &str) -> bool {
    release_type == Some("album") && artist_name != VARIOUS_ARTISTS
}

fn malformed(id: &str, field: &'static str) -> CatalogError {
    CatalogError::MalformedCatalogItem {
        id: id.to_string(),
        field,
    }
}
