//! Splices the QR region into a populated invitation.
//!
//! Every template contains one element with `id="qrcode"`. Its inner content
//! is replaced by a fragment chosen by [`QrMode`]; the element itself and the
//! rest of the document are left alone.

use askama::Template;
use regex::Regex;
use std::sync::LazyLock;

use crate::domain::entities::QrMode;
use crate::domain::qr::QrArtifact;

/// Opening tag of the QR element, its inner content, and the closing tag.
///
/// Inner content ends at the first `</div>`, so the placeholder must not
/// contain nested `div`s.
static QR_REGION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)(<div\b[^>]*\bid\s*=\s*["']qrcode["'][^>]*>)(.*?)(</div\s*>)"#).unwrap()
});

/// Venue call-to-action, optionally with a printable QR of the venue link.
#[derive(Template)]
#[template(path = "fragments/qr_venue.html")]
struct VenueFragment<'a> {
    venue_url: &'a str,
    qr_src: Option<&'a str>,
    image_style: &'a str,
}

/// QR code of the share link, or a spinner until it is ready.
#[derive(Template)]
#[template(path = "fragments/qr_invitation.html")]
struct InvitationFragment<'a> {
    qr_src: Option<&'a str>,
    image_style: &'a str,
}

/// State of the QR region after rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QrRegion {
    /// The region holds its final content.
    Filled,
    /// Invitation mode without an artifact yet; a loading placeholder is shown.
    Loading,
    /// The template has no `id="qrcode"` element; the HTML is unchanged.
    Missing,
}

impl QrRegion {
    pub fn as_str(&self) -> &'static str {
        match self {
            QrRegion::Filled => "filled",
            QrRegion::Loading => "loading",
            QrRegion::Missing => "missing",
        }
    }
}

/// Output of [`render`].
#[derive(Debug, Clone)]
pub struct RenderedInvitation {
    pub html: String,
    pub qr_region: QrRegion,
}

impl RenderedInvitation {
    /// True when nothing is left to load, i.e. the page is safe to export.
    pub fn is_settled(&self) -> bool {
        self.qr_region != QrRegion::Loading
    }
}

/// Options for [`render`] that come from the template descriptor.
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions<'a> {
    /// Venue link shown by the call-to-action in venue mode.
    pub venue_url: &'a str,
    /// Inline style of the QR `<img>`.
    pub image_style: &'a str,
}

/// Fills the QR region of `populated_html`.
///
/// In [`QrMode::Venue`] the region becomes a link to the venue; a supplied
/// `qr` artifact is shown above it for printed copies. In
/// [`QrMode::Invitation`] the region shows the artifact, or a loading
/// placeholder when `qr` is `None`.
///
/// A template without a QR region is returned unchanged with
/// [`QrRegion::Missing`]; this is logged, never an error.
pub fn render(
    populated_html: &str,
    qr: Option<&QrArtifact>,
    mode: QrMode,
    options: RenderOptions<'_>,
) -> RenderedInvitation {
    let Some(caps) = QR_REGION.captures(populated_html) else {
        tracing::warn!("Template has no QR placeholder, rendering without QR code");
        return RenderedInvitation {
            html: populated_html.to_string(),
            qr_region: QrRegion::Missing,
        };
    };

    let qr_src = qr.map(QrArtifact::data_uri);
    let (fragment, qr_region) = match mode {
        QrMode::Venue => (
            VenueFragment {
                venue_url: options.venue_url,
                qr_src,
                image_style: options.image_style,
            }
            .render(),
            QrRegion::Filled,
        ),
        QrMode::Invitation => (
            InvitationFragment {
                qr_src,
                image_style: options.image_style,
            }
            .render(),
            if qr_src.is_some() {
                QrRegion::Filled
            } else {
                QrRegion::Loading
            },
        ),
    };

    let fragment = match fragment {
        Ok(fragment) => fragment,
        Err(e) => {
            tracing::error!("Failed to render QR fragment: {}", e);
            return RenderedInvitation {
                html: populated_html.to_string(),
                qr_region: QrRegion::Missing,
            };
        }
    };

    // Both groups always participate in a match.
    let (open, inner) = (&caps[1], caps.get(2).map_or(0..0, |m| m.range()));
    let mut html = String::with_capacity(populated_html.len() + fragment.len());
    html.push_str(&populated_html[..inner.start]);
    html.push_str(&fragment);
    html.push_str(&populated_html[inner.end..]);

    tracing::trace!(open_tag = open, mode = %mode, "QR region rendered");

    RenderedInvitation { html, qr_region }
}
