//! Placeholder substitution for invitation templates.
//!
//! A template is raw HTML containing `{{token}}` markers. Only the closed set
//! of [`Slot`]s is recognized; any other `{{...}}` text is copied through
//! untouched. Every value is HTML-escaped before insertion, so the data a
//! couple types in can never add markup to the page.

use std::borrow::Cow;
use thiserror::Error;

use crate::domain::entities::WeddingData;
use crate::utils::date_format::{format_compact, format_long};

/// Substitution failures.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PopulateError {
    #[error("Wedding data is missing required field '{0}'")]
    MissingField(&'static str),
}

/// A named slot a template can reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    BrideName,
    GroomName,
    /// Long date, e.g. `Saturday, September 21, 2024, 4:00 PM`.
    DateTime,
    /// Compact date, e.g. `21 September 2024`.
    FormattedDate,
    VenueName,
    VenueUrl,
}

impl Slot {
    pub const ALL: [Slot; 6] = [
        Slot::BrideName,
        Slot::GroomName,
        Slot::DateTime,
        Slot::FormattedDate,
        Slot::VenueName,
        Slot::VenueUrl,
    ];

    /// Name between the braces.
    pub fn name(&self) -> &'static str {
        match self {
            Slot::BrideName => "brideName",
            Slot::GroomName => "groomName",
            Slot::DateTime => "dateTime",
            Slot::FormattedDate => "formattedDate",
            Slot::VenueName => "venueName",
            Slot::VenueUrl => "venueUrl",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|slot| slot.name() == name)
    }
}

/// Slot values computed once per substitution.
struct SlotValues<'a> {
    data: &'a WeddingData,
    long_date: String,
    compact_date: String,
    venue_link: String,
}

impl<'a> SlotValues<'a> {
    fn new(data: &'a WeddingData) -> Self {
        Self {
            data,
            long_date: format_long(&data.wedding_date_time),
            compact_date: format_compact(&data.wedding_date_time),
            venue_link: data.venue_link(),
        }
    }

    fn raw(&self, slot: Slot) -> &str {
        match slot {
            Slot::BrideName => &self.data.bride_name,
            Slot::GroomName => &self.data.groom_name,
            Slot::DateTime => &self.long_date,
            Slot::FormattedDate => &self.compact_date,
            Slot::VenueName => &self.data.venue_name,
            Slot::VenueUrl => &self.venue_link,
        }
    }

    /// Escaped value. Attribute-safe so `{{venueUrl}}` may sit inside `href="..."`.
    fn escaped(&self, slot: Slot) -> Cow<'_, str> {
        html_escape::encode_double_quoted_attribute(self.raw(slot))
    }
}

/// Replaces every recognized placeholder in `template` with `data`.
///
/// # Errors
///
/// Returns [`PopulateError::MissingField`] if any field of `data` is blank;
/// nothing is substituted in that case.
///
/// # Examples
///
/// ```ignore
/// let html = populate("<h1>{{brideName}} & {{groomName}}</h1>", &data)?;
/// assert_eq!(html, "<h1>Sarah & Michael</h1>");
/// ```
pub fn populate(template: &str, data: &WeddingData) -> Result<String, PopulateError> {
    if let Some(field) = data.first_missing_field() {
        return Err(PopulateError::MissingField(field));
    }

    let values = SlotValues::new(data);
    let mut output = String::with_capacity(template.len() + 256);
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        output.push_str(&rest[..start]);
        let after_open = &rest[start + 2..];

        match after_open.find("}}") {
            Some(end) => match Slot::from_name(&after_open[..end]) {
                Some(slot) => {
                    output.push_str(&values.escaped(slot));
                    rest = &after_open[end + 2..];
                }
                None => {
                    // Unknown token: emit the opening braces and keep scanning
                    // right after them so `{{{{brideName}}` still resolves.
                    output.push_str("{{");
                    rest = after_open;
                }
            },
            None => {
                output.push_str(&rest[start..]);
                rest = "";
            }
        }
    }

    output.push_str(rest);
    Ok(output)
}

/// Lists the recognized slots referenced by `template`.
pub fn referenced_slots(template: &str) -> Vec<Slot> {
    Slot::ALL
        .into_iter()
        .filter(|slot| template.contains(&format!("{{{{{}}}}}", slot.name())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sarah_and_michael() -> WeddingData {
        WeddingData::new(
            "Sarah",
            "Michael",
            "2024-09-21T16:00",
            "Grand Plaza Hotel",
            "https://maps.app.goo.gl/example123",
        )
        .unwrap()
    }

    #[test]
    fn test_replaces_every_occurrence_of_every_token() {
        let template = "{{brideName}} {{groomName}} {{dateTime}} {{formattedDate}} {{venueName}} {{venueUrl}}\n\
                        {{brideName}} {{groomName}} {{dateTime}} {{formattedDate}} {{venueName}} {{venueUrl}}";

        let html = populate(template, &sarah_and_michael()).unwrap();

        assert_eq!(html.matches("Sarah").count(), 2);
        assert_eq!(html.matches("Michael").count(), 2);
        assert_eq!(html.matches("Saturday, September 21, 2024, 4:00 PM").count(), 2);
        assert_eq!(html.matches("21 September 2024").count(), 2);
        assert_eq!(html.matches("Grand Plaza Hotel").count(), 2);
        assert_eq!(html.matches("https://maps.app.goo.gl/example123").count(), 2);
        assert!(!html.contains("{{"));
    }

    #[test]
    fn test_unrecognized_tokens_left_verbatim() {
        let html = populate("Dear {{guestName}}, {{brideName}} says {{ brideName }}", &sarah_and_michael()).unwrap();

        assert_eq!(html, "Dear {{guestName}}, Sarah says {{ brideName }}");
    }

    #[test]
    fn test_unterminated_token_left_verbatim() {
        let html = populate("<p>{{brideName}} and {{groomName</p>", &sarah_and_michael()).unwrap();

        assert_eq!(html, "<p>Sarah and {{groomName</p>");
    }

    #[test]
    fn test_extra_leading_braces() {
        let html = populate("{{{{brideName}}", &sarah_and_michael()).unwrap();

        assert_eq!(html, "{{Sarah");
    }

    #[test]
    fn test_template_without_tokens_unchanged() {
        let template = "<html><body><p>Save the date</p></body></html>";
        assert_eq!(populate(template, &sarah_and_michael()).unwrap(), template);
    }

    #[test]
    fn test_values_are_html_escaped() {
        let mut data = sarah_and_michael();
        data.bride_name = "<script>alert('x')</script>".to_string();
        data.venue_address = "https://maps.example/?a=1&b=\"2\"".to_string();

        let html = populate("<h1>{{brideName}}</h1><a href=\"{{venueUrl}}\">map</a>", &data).unwrap();

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("a=1&amp;b=&quot;2&quot;"));
    }

    #[test]
    fn test_venue_url_slot_only_links_to_web_pages() {
        let mut data = sarah_and_michael();
        data.venue_address = "javascript:alert(document.domain)".to_string();

        let html = populate("<a href=\"{{venueUrl}}\">map</a>", &data).unwrap();

        assert!(!html.contains("javascript:"));
        assert!(html.starts_with("<a href=\"https://www.google.com/maps/search/?api=1&amp;query=javascript%3Aalert"));
    }

    #[test]
    fn test_missing_field_fails_loudly() {
        let mut data = sarah_and_michael();
        data.venue_name = String::new();

        let result = populate("{{venueName}}", &data);

        assert_eq!(result, Err(PopulateError::MissingField("venueName")));
    }

    #[test]
    fn test_unparseable_date_passes_through() {
        let mut data = sarah_and_michael();
        data.wedding_date_time = "next summer".to_string();

        let html = populate("{{dateTime}}|{{formattedDate}}", &data).unwrap();

        assert_eq!(html, "next summer|next summer");
    }

    #[test]
    fn test_slot_names_round_trip() {
        for slot in Slot::ALL {
            assert_eq!(Slot::from_name(slot.name()), Some(slot));
        }
        assert_eq!(Slot::from_name("guestName"), None);
    }

    #[test]
    fn test_referenced_slots() {
        let slots = referenced_slots("<p>{{venueName}}</p><p>{{brideName}}{{brideName}}</p>");

        assert_eq!(slots, vec![Slot::BrideName, Slot::VenueName]);
    }
}
