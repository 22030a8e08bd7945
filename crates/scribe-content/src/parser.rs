//! Source file parsing: front matter splitting and decoding.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::{Deserialize, Deserializer};

use crate::document::Document;
use crate::markdown;

/// Literal delimiter between front matter and body.
const FENCE: &str = "---";

/// Error returned when a source file cannot be parsed.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// The file does not split into front matter and body on the `---`
    /// fence. Such a file is not a document at all.
    #[error("document does not contain a front matter block")]
    MalformedDocument,
    /// The front matter block exists but is not decodable YAML.
    #[error("invalid front matter: {0}")]
    InvalidMetadata(#[from] serde_yaml::Error),
}

/// Decoded front matter block. Unknown keys are ignored; missing optional
/// keys default to empty.
#[derive(Debug, Default, Deserialize)]
struct FrontMatter {
    #[serde(default)]
    title: String,
    #[serde(default, deserialize_with = "deserialize_date")]
    date: Option<DateTime<Utc>>,
    #[serde(default)]
    description: String,
    #[serde(default)]
    image: String,
}

/// Parse a raw source file into a [`Document`].
///
/// Splits on the first two `---` fences into three segments (anything
/// before the first fence, the front matter, the body). Fewer segments
/// classify the file as [`ParseError::MalformedDocument`].
///
/// The returned document has an empty `slug`; the caller sets it from the
/// file name. Pure function over the input text, no I/O.
pub fn parse(raw: &str) -> Result<Document, ParseError> {
    let parts: Vec<&str> = raw.splitn(3, FENCE).collect();
    if parts.len() < 3 {
        return Err(ParseError::MalformedDocument);
    }

    // An empty block decodes as YAML null, which serde rejects for a
    // struct; treat it as all-defaults like any other missing keys.
    let meta = if parts[1].trim().is_empty() {
        FrontMatter::default()
    } else {
        serde_yaml::from_str::<FrontMatter>(parts[1])?
    };

    Ok(Document {
        title: meta.title,
        date: meta.date,
        description: meta.description,
        image: meta.image,
        slug: String::new(),
        html: markdown::to_html(parts[2]),
    })
}

/// Decode an optional date that may be a bare `YYYY-MM-DD`, a
/// `YYYY-MM-DD HH:MM:SS` timestamp, or a full RFC 3339 string. YAML hands
/// all of these to serde as plain strings.
fn deserialize_date<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        None => Ok(None),
        Some(raw) => parse_date(&raw).map(Some).map_err(serde::de::Error::custom),
    }
}

fn parse_date(raw: &str) -> Result<DateTime<Utc>, String> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return Ok(dt.and_utc());
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(date.and_time(NaiveTime::MIN).and_utc());
    }
    Err(format!("unrecognized date format: {raw}"))
}
