//! Share-link codec.
//!
//! A share link carries the whole invitation in one query value:
//!
//! ```text
//! record --JSON--> text --base64--> ascii --percent-encode--> token
//! ```
//!
//! The token format is public: links already handed out to guests must keep
//! decoding, so the JSON keys, the standard base64 alphabet and the
//! `encodeURIComponent` character set are all fixed.

use base64::Engine as _;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};
use serde::Deserialize;
use thiserror::Error;
use url::Url;

use crate::domain::entities::{InvitationShareRecord, QrMode};

/// Characters escaped by `encodeURIComponent`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Standard alphabet; padding emitted on encode, optional on decode.
const BASE64: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Path of the page that opens a shared invitation.
pub const INVITE_PATH: &str = "/invite";

/// Query parameter holding the token.
pub const DATA_PARAM: &str = "data";

/// Reasons a share token cannot be turned back into a record.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("Share link is malformed: {0}")]
    Malformed(String),

    #[error("Share link payload is not valid base64 text")]
    InvalidEncoding,

    #[error("Share link payload is not valid invitation JSON: {0}")]
    InvalidJson(String),

    #[error("Share link is missing required field '{0}'")]
    MissingField(&'static str),
}

/// Wire shape used while decoding, before presence checks.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawShareRecord {
    bride_name: Option<String>,
    groom_name: Option<String>,
    date_time: Option<String>,
    venue_name: Option<String>,
    venue_url: Option<String>,
    template_id: Option<String>,
    qr_code_type: Option<QrMode>,
}

fn required(value: Option<String>, field: &'static str) -> Result<String, DecodeError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(DecodeError::MissingField(field)),
    }
}

/// Encodes a record as a URL-safe token.
pub fn encode(record: &InvitationShareRecord) -> String {
    // A struct of strings and a unit enum always serializes.
    let json = serde_json::to_string(record).expect("share record serializes");
    let base64 = BASE64.encode(json.as_bytes());
    utf8_percent_encode(&base64, URI_COMPONENT).to_string()
}

/// Decodes a token produced by [`encode`].
///
/// Tokens that were already percent-decoded (for example by a query-string
/// extractor) decode as well, since the base64 alphabet contains no `%`.
///
/// # Errors
///
/// - [`DecodeError::Malformed`] for an empty token or a broken `%` escape
/// - [`DecodeError::InvalidEncoding`] if the payload is not base64 of UTF-8 text
/// - [`DecodeError::InvalidJson`] if the text is not a JSON object of the
///   expected shape
/// - [`DecodeError::MissingField`] if a required field is absent or blank
pub fn decode(token: &str) -> Result<InvitationShareRecord, DecodeError> {
    let token = token.trim();
    if token.is_empty() {
        return Err(DecodeError::Malformed("empty token".to_string()));
    }
    check_percent_escapes(token)?;

    let base64 = percent_decode_str(token)
        .decode_utf8()
        .map_err(|_| DecodeError::Malformed("percent-decoded token is not UTF-8".to_string()))?;

    let bytes = BASE64
        .decode(base64.as_bytes())
        .map_err(|_| DecodeError::InvalidEncoding)?;
    let json = String::from_utf8(bytes).map_err(|_| DecodeError::InvalidEncoding)?;

    let raw: RawShareRecord =
        serde_json::from_str(&json).map_err(|e| DecodeError::InvalidJson(e.to_string()))?;

    Ok(InvitationShareRecord {
        bride_name: required(raw.bride_name, "brideName")?,
        groom_name: required(raw.groom_name, "groomName")?,
        date_time: required(raw.date_time, "dateTime")?,
        venue_name: required(raw.venue_name, "venueName")?,
        venue_url: required(raw.venue_url, "venueUrl")?,
        template_id: required(raw.template_id, "templateId")?,
        qr_code_type: raw.qr_code_type.unwrap_or_default(),
    })
}

/// Rejects `%` not followed by two hex digits.
fn check_percent_escapes(token: &str) -> Result<(), DecodeError> {
    let bytes = token.as_bytes();
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b'%' {
            let valid = bytes
                .get(i + 1..i + 3)
                .is_some_and(|pair| pair.iter().all(u8::is_ascii_hexdigit));
            if !valid {
                return Err(DecodeError::Malformed(format!(
                    "invalid percent escape at byte {i}"
                )));
            }
            i += 3;
        } else {
            i += 1;
        }
    }

    Ok(())
}

/// Builds `<origin>/invite?data=<token>`.
pub fn share_link(origin: &str, token: &str) -> String {
    format!(
        "{}{}?{}={}",
        origin.trim_end_matches('/'),
        INVITE_PATH,
        DATA_PARAM,
        token
    )
}

/// Encodes `record` and wraps it in a full share link.
pub fn share_link_for(origin: &str, record: &InvitationShareRecord) -> String {
    share_link(origin, &encode(record))
}

/// Extracts the raw (still percent-encoded) token from a full share link.
///
/// Accepts a bare token as well, so callers can pass whatever a guest pasted.
///
/// # Errors
///
/// Returns [`DecodeError::Malformed`] if a URL is given without a `data` value.
pub fn token_from_link(link: &str) -> Result<String, DecodeError> {
    let link = link.trim();

    let Ok(url) = Url::parse(link) else {
        return Ok(link.to_string());
    };

    url.query()
        .unwrap_or_default()
        .split('&')
        .find_map(|pair| pair.strip_prefix("data="))
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .ok_or_else(|| DecodeError::Malformed("link has no data parameter".to_string()))
}
