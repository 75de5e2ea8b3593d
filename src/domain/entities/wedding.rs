//! Wedding details entered by the couple.

use serde::{Deserialize, Serialize};
use url::{Url, form_urlencoded};
use validator::{Validate, ValidationError};

/// Message attached to every empty-field validation error.
pub const REQUIRED_FIELD_MESSAGE: &str = "This field is required";

/// Maps search used when the venue address is not itself a web link.
const MAPS_SEARCH_URL: &str = "https://www.google.com/maps/search/";

/// The details printed on an invitation.
///
/// Serialized with the camelCase keys used by the form and the
/// form → preview → details query-string handoff. All five fields are
/// required; [`WeddingData::new`] rejects blank values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct WeddingData {
    #[validate(custom(function = "not_blank"))]
    pub bride_name: String,

    #[validate(custom(function = "not_blank"))]
    pub groom_name: String,

    /// Local date and time as produced by a `datetime-local` input,
    /// e.g. `2024-09-21T16:00`.
    #[validate(custom(function = "not_blank"))]
    pub wedding_date_time: String,

    #[validate(custom(function = "not_blank"))]
    pub venue_name: String,

    /// Free-form address or a maps URL.
    #[validate(custom(function = "not_blank"))]
    pub venue_address: String,
}

impl WeddingData {
    /// Builds validated wedding data.
    ///
    /// # Errors
    ///
    /// Returns the field-level [`validator::ValidationErrors`] when any field is
    /// empty or whitespace only.
    pub fn new(
        bride_name: impl Into<String>,
        groom_name: impl Into<String>,
        wedding_date_time: impl Into<String>,
        venue_name: impl Into<String>,
        venue_address: impl Into<String>,
    ) -> Result<Self, validator::ValidationErrors> {
        let data = Self {
            bride_name: bride_name.into(),
            groom_name: groom_name.into(),
            wedding_date_time: wedding_date_time.into(),
            venue_name: venue_name.into(),
            venue_address: venue_address.into(),
        };
        data.validate()?;
        Ok(data)
    }

    /// Sample couple used to prefill an empty form.
    pub fn sample() -> Self {
        Self {
            bride_name: "Sarah Johnson".to_string(),
            groom_name: "Michael Smith".to_string(),
            wedding_date_time: "2024-09-21T16:00".to_string(),
            venue_name: "Grand Plaza Hotel".to_string(),
            venue_address: "https://maps.app.goo.gl/example123".to_string(),
        }
    }

    /// Encodes the fields as plain query parameters for page-to-page handoff.
    ///
    /// ```ignore
    /// let query = WeddingData::sample().to_query_string();
    /// assert!(query.starts_with("brideName=Sarah+Johnson&groomName="));
    /// ```
    pub fn to_query_string(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .append_pair("brideName", &self.bride_name)
            .append_pair("groomName", &self.groom_name)
            .append_pair("weddingDateTime", &self.wedding_date_time)
            .append_pair("venueName", &self.venue_name)
            .append_pair("venueAddress", &self.venue_address)
            .finish()
    }

    /// Link target for the venue.
    ///
    /// An `http`/`https` address is used as is. Anything else, including
    /// `javascript:` and `data:` URLs, becomes a maps search for the text.
    ///
    /// ```ignore
    /// data.venue_address = "Main St 1".to_string();
    /// assert_eq!(
    ///     data.venue_link(),
    ///     "https://www.google.com/maps/search/?api=1&query=Main+St+1"
    /// );
    /// ```
    pub fn venue_link(&self) -> String {
        let address = self.venue_address.trim();

        match Url::parse(address) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => address.to_string(),
            _ => {
                let query = form_urlencoded::Serializer::new(String::new())
                    .append_pair("api", "1")
                    .append_pair("query", address)
                    .finish();
                format!("{}?{}", MAPS_SEARCH_URL, query)
            }
        }
    }

    /// Names the first blank field, if any.
    pub fn first_missing_field(&self) -> Option<&'static str> {
        [
            ("brideName", &self.bride_name),
            ("groomName", &self.groom_name),
            ("weddingDateTime", &self.wedding_date_time),
            ("venueName", &self.venue_name),
            ("venueAddress", &self.venue_address),
        ]
        .into_iter()
        .find(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
    }
}

/// Rejects empty and whitespace-only values.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("required");
        error.message = Some(REQUIRED_FIELD_MESSAGE.into());
        return Err(error);
    }
    Ok(())
}
