use tracing::debug;

use crate::client::QrImage;
use crate::placeholder::placeholder_image;

/// Which image the UI should currently display.
///
/// Single-writer state: only [`QrSession`] produces new values. Renderer
/// and download flow read it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum DisplayImage {
    #[default]
    Placeholder,
    Generated(QrImage),
}

impl DisplayImage {
    /// The displayable image, resolving the placeholder lazily.
    pub fn image(&self) -> QrImage {
        match self {
            DisplayImage::Placeholder => placeholder_image(),
            DisplayImage::Generated(img) => img.clone(),
        }
    }
}

/// Handle for one issued fetch attempt. The sequence number ties the
/// eventual outcome back to the commit that caused it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchTicket {
    pub seq: u64,
    pub text: String,
}

/// Coordinates committed target text with settled fetch outcomes.
///
/// Each non-empty commit issues a ticket with a fresh sequence number;
/// only the most recently issued sequence may update the display. A
/// settle for any older sequence is discarded, so a fetch that outlives
/// the text it was issued for can never overwrite a newer state.
/// Superseded requests are not cancelled, just ignored when they land.
#[derive(Debug, Default)]
pub struct QrSession {
    target_text: String,
    next_seq: u64,
    in_flight: Option<u64>,
    display: DisplayImage,
}

impl QrSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn target_text(&self) -> &str {
        &self.target_text
    }

    pub fn display(&self) -> &DisplayImage {
        &self.display
    }

    pub fn is_fetching(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Commit a new target text.
    ///
    /// Empty text resets the display to the placeholder immediately and
    /// issues no fetch. Non-empty text returns a ticket the caller must
    /// turn into one HTTP request; any previously issued ticket becomes
    /// stale from this point on.
    pub fn commit(&mut self, text: impl Into<String>) -> Option<FetchTicket> {
        self.target_text = text.into();

        if self.target_text.is_empty() {
            self.in_flight = None;
            self.display = DisplayImage::Placeholder;
            return None;
        }

        let seq = self.next_seq;
        self.next_seq += 1;
        self.in_flight = Some(seq);
        Some(FetchTicket {
            seq,
            text: self.target_text.clone(),
        })
    }

    /// Apply a settled fetch outcome.
    ///
    /// `Some` is a successful body, `None` any failure (the distinction
    /// is absorbed here: failures fall back to the placeholder). Returns
    /// `false` when the sequence is stale and nothing changed.
    pub fn settle(&mut self, seq: u64, outcome: Option<QrImage>) -> bool {
        if self.in_flight != Some(seq) {
            debug!(seq, "discarding stale fetch outcome");
            return false;
        }
        self.in_flight = None;
        self.display = match outcome {
            Some(image) => DisplayImage::Generated(image),
            None => DisplayImage::Placeholder,
        };
        true
    }
}
