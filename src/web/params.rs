//! Query parameters handed from page to page.
//!
//! The form, gallery and details pages pass the wedding data along as plain
//! query parameters (`brideName`, `groomName`, `weddingDateTime`, `venueName`,
//! `venueAddress`).

use serde::Deserialize;
use url::form_urlencoded;

use crate::domain::entities::{QrMode, WeddingData};

/// Wedding fields as they arrive from a query string or a form body.
///
/// Every field is optional so that partial data can still prefill the form.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeddingParams {
    pub bride_name: Option<String>,
    pub groom_name: Option<String>,
    pub wedding_date_time: Option<String>,
    pub venue_name: Option<String>,
    pub venue_address: Option<String>,
    /// QR mode of the details page; ignored elsewhere.
    pub qr: Option<String>,
}

impl WeddingParams {
    fn fields(&self) -> [(&'static str, Option<&str>); 5] {
        [
            ("brideName", self.bride_name.as_deref()),
            ("groomName", self.groom_name.as_deref()),
            ("weddingDateTime", self.wedding_date_time.as_deref()),
            ("venueName", self.venue_name.as_deref()),
            ("venueAddress", self.venue_address.as_deref()),
        ]
    }

    /// The wedding data, if every field is present and non-blank.
    pub fn complete(&self) -> Option<WeddingData> {
        WeddingData::new(
            self.bride_name.clone()?,
            self.groom_name.clone()?,
            self.wedding_date_time.clone()?,
            self.venue_name.clone()?,
            self.venue_address.clone()?,
        )
        .ok()
    }

    /// Sample data with every non-empty parameter applied on top.
    pub fn prefill(&self) -> WeddingData {
        let mut data = WeddingData::sample();
        let pick = |value: &Option<String>, slot: &mut String| {
            if let Some(v) = value.as_deref().filter(|v| !v.is_empty()) {
                *slot = v.to_string();
            }
        };

        pick(&self.bride_name, &mut data.bride_name);
        pick(&self.groom_name, &mut data.groom_name);
        pick(&self.wedding_date_time, &mut data.wedding_date_time);
        pick(&self.venue_name, &mut data.venue_name);
        pick(&self.venue_address, &mut data.venue_address);
        data
    }

    /// Submitted values as-is, blanks included, for validation.
    pub fn submitted(&self) -> WeddingData {
        WeddingData {
            bride_name: self.bride_name.clone().unwrap_or_default(),
            groom_name: self.groom_name.clone().unwrap_or_default(),
            wedding_date_time: self.wedding_date_time.clone().unwrap_or_default(),
            venue_name: self.venue_name.clone().unwrap_or_default(),
            venue_address: self.venue_address.clone().unwrap_or_default(),
        }
    }

    /// QR mode of the details page, `venue` unless `qr=invitation`.
    pub fn qr_mode(&self) -> QrMode {
        self.qr
            .as_deref()
            .and_then(|mode| mode.parse().ok())
            .unwrap_or_default()
    }

    /// The wedding fields that are present, re-encoded for the next link.
    pub fn query_string(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (name, value) in self.fields() {
            if let Some(value) = value {
                serializer.append_pair(name, value);
            }
        }
        serializer.finish()
    }
}
