use std::{collections::BTreeMap, fmt::Display, sync::LazyLock};

use regex::{Captures, Regex};

use super::DeliveredFormat;
use crate::{error::TemplateWarning, warning};

pub const DEFAULT_FOLDER_FORMAT: &str =
    "{artist} - {album} ({year}) [{bit_depth}B-{sampling_rate}kHz]";
pub const DEFAULT_TRACK_FORMAT: &str = "{tracknumber}. {tracktitle}";

const MP3_FOLDER_FORMAT: &str = "{artist} - {album} ({year}) [MP3]";
const UNKNOWN_FOLDER_FORMAT: &str = "{artist} - {album}";

/// Rendered in place of placeholders that have no value.
pub const MISSING_VALUE: &str = "n/a";

const MAX_TRACK_NAME_LEN: usize = 250;

/// Placeholders that only exist for lossless deliveries.
const LOSSLESS_ONLY: [&str; 2] = ["bit_depth", "sampling_rate"];

#[allow(clippy::expect_used)]
static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\s*([A-Za-z_][A-Za-z0-9_]*)\s*(?::[^{}]*)?\}")
        .expect("placeholder regex is valid")
});

#[allow(clippy::expect_used)]
static UNSAFE_CHARS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"[/\\:*?"<>|\x00-\x1f]"#).expect("unsafe chars regex is valid")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateContext {
    Folder,
    Track,
}

impl TemplateContext {
    /// Template used when the user's one cannot be rendered for `format`.
    pub const fn safe_default(self, format: DeliveredFormat) -> &'static str {
        match (self, format) {
            (Self::Track, _) => DEFAULT_TRACK_FORMAT,
            (Self::Folder, DeliveredFormat::Mp3) => MP3_FOLDER_FORMAT,
            (Self::Folder, DeliveredFormat::Unknown) => UNKNOWN_FOLDER_FORMAT,
            (Self::Folder, DeliveredFormat::Flac) => DEFAULT_FOLDER_FORMAT,
        }
    }
}

/// Removes a trailing `.mp3`/`.flac` the user may have typed into a
/// template, then surrounding whitespace.
pub fn strip_extension(template: &str) -> &str {
    template
        .strip_suffix(".mp3")
        .or_else(|| template.strip_suffix(".flac"))
        .unwrap_or(template)
        .trim()
}

/// Names of all `{placeholder}`s in a template, in order of appearance.
pub fn placeholders(template: &str) -> Vec<&str> {
    PLACEHOLDER
        .captures_iter(template)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
        .collect()
}

/// Fails when the template needs bit depth or sampling rate but `format`
/// cannot provide them.
pub fn check_template(template: &str, format: DeliveredFormat) -> Result<(), TemplateWarning> {
    if format == DeliveredFormat::Flac {
        return Ok(());
    }

    match placeholders(template)
        .into_iter()
        .find(|name| LOSSLESS_ONLY.contains(name))
    {
        Some(placeholder) => Err(TemplateWarning::AmbiguousTemplate {
            placeholder: placeholder.to_string(),
            format,
        }),
        None => Ok(()),
    }
}

/// Makes a user naming template safe to render for the delivered format.
///
/// The template loses any trailing container extension. If it then still
/// references an attribute the format cannot provide, it is replaced as a
/// whole by the context's safe default and a warning is printed.
pub fn sanitize_template(
    template: &str,
    format: DeliveredFormat,
    context: TemplateContext,
) -> String {
    let stripped = strip_extension(template);

    match check_template(stripped, format) {
        Ok(()) => stripped.to_string(),
        Err(e) => {
            let fallback = context.safe_default(format);
            warning!("Invalid format string: {}. Defaulting to {}", e, fallback);
            fallback.to_string()
        }
    }
}

/// Values available to a naming template.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateAttributes(BTreeMap<&'static str, String>);

impl TemplateAttributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, key: &'static str, value: impl Display) -> Self {
        self.0.insert(key, value.to_string());
        self
    }

    pub fn set_opt<T: Display>(self, key: &'static str, value: Option<T>) -> Self {
        match value {
            Some(value) => self.set(key, value),
            None => self,
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }
}

/// Substitutes placeholders with their attribute values.
///
/// Unknown and empty placeholders render as [`MISSING_VALUE`]; rendering
/// never fails. Format specs such as `{tracknumber:02}` are accepted and
/// ignored.
pub fn render_template(template: &str, attrs: &TemplateAttributes) -> String {
    PLACEHOLDER
        .replace_all(template, |caps: &Captures| {
            caps.get(1)
                .and_then(|name| attrs.get(name.as_str()))
                .filter(|value| !value.is_empty())
                .unwrap_or(MISSING_VALUE)
                .to_string()
        })
        .into_owned()
}

/// Makes a rendered name safe to use as a single path component.
pub fn sanitize_filename(name: &str) -> String {
    let mut result = UNSAFE_CHARS.replace_all(name, "_").to_string();

    while result.contains("__") {
        result = result.replace("__", "_");
    }
    while result.contains("  ") {
        result = result.replace("  ", " ");
    }

    result
        .trim_matches(|c| c == ' ' || c == '_' || c == '.')
        .to_string()
}

/// Final file name for a rendered track name.
pub fn track_file_name(rendered: &str, format: DeliveredFormat) -> String {
    let mut name: String = sanitize_filename(rendered)
        .chars()
        .take(MAX_TRACK_NAME_LEN)
        .collect();
    name.push_str(format.extension());
    name
}
