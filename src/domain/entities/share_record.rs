//! Invitation record carried inside a share link.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::wedding::WeddingData;

/// What the QR code on an invitation points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QrMode {
    /// The venue address or maps link.
    #[default]
    Venue,
    /// The shareable link of the invitation itself.
    Invitation,
}

impl QrMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Venue => "venue",
            Self::Invitation => "invitation",
        }
    }

    /// The other mode, used by the toggle on the details page.
    pub fn toggled(&self) -> Self {
        match self {
            Self::Venue => Self::Invitation,
            Self::Invitation => Self::Venue,
        }
    }
}

impl fmt::Display for QrMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QrMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "venue" => Ok(Self::Venue),
            "invitation" => Ok(Self::Invitation),
            other => Err(format!("unknown QR mode '{other}', expected 'venue' or 'invitation'")),
        }
    }
}

/// Everything needed to rebuild an invitation on another device.
///
/// The JSON field names are part of the public link format and must not change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvitationShareRecord {
    pub bride_name: String,
    pub groom_name: String,
    pub date_time: String,
    pub venue_name: String,
    pub venue_url: String,
    pub template_id: String,
    #[serde(default)]
    pub qr_code_type: QrMode,
}

impl InvitationShareRecord {
    pub fn from_wedding(data: &WeddingData, template_id: impl Into<String>, mode: QrMode) -> Self {
        Self {
            bride_name: data.bride_name.clone(),
            groom_name: data.groom_name.clone(),
            date_time: data.wedding_date_time.clone(),
            venue_name: data.venue_name.clone(),
            venue_url: data.venue_address.clone(),
            template_id: template_id.into(),
            qr_code_type: mode,
        }
    }

    /// Wedding details held by this record.
    pub fn wedding_data(&self) -> WeddingData {
        WeddingData {
            bride_name: self.bride_name.clone(),
            groom_name: self.groom_name.clone(),
            wedding_date_time: self.date_time.clone(),
            venue_name: self.venue_name.clone(),
            venue_address: self.venue_url.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qr_mode_default_is_venue() {
        assert_eq!(QrMode::default(), QrMode::Venue);
    }

    #[test]
    fn test_qr_mode_parse_and_display() {
        assert_eq!("venue".parse::<QrMode>().unwrap(), QrMode::Venue);
        assert_eq!("invitation".parse::<QrMode>().unwrap(), QrMode::Invitation);
        assert!("Venue".parse::<QrMode>().is_err());
        assert_eq!(QrMode::Invitation.to_string(), "invitation");
    }

    #[test]
    fn test_qr_mode_toggled() {
        assert_eq!(QrMode::Venue.toggled(), QrMode::Invitation);
        assert_eq!(QrMode::Invitation.toggled(), QrMode::Venue);
    }

    #[test]
    fn test_record_from_wedding_maps_fields() {
        let data = WeddingData::sample();
        let record = InvitationShareRecord::from_wedding(&data, "rustic-charm", QrMode::Invitation);

        assert_eq!(record.date_time, data.wedding_date_time);
        assert_eq!(record.venue_url, data.venue_address);
        assert_eq!(record.template_id, "rustic-charm");
        assert_eq!(record.wedding_data(), data);
    }

    #[test]
    fn test_record_json_keys() {
        let record =
            InvitationShareRecord::from_wedding(&WeddingData::sample(), "elegant-floral", QrMode::Venue);
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["dateTime"], "2024-09-21T16:00");
        assert_eq!(json["venueUrl"], "https://maps.app.goo.gl/example123");
        assert_eq!(json["templateId"], "elegant-floral");
        assert_eq!(json["qrCodeType"], "venue");
    }
}
