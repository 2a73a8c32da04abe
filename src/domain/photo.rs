//! Photo domain model.
//!
//! This module defines the core `Photo` type representing one search result
//! returned by the photo service. A photo is immutable after creation: the
//! record exists to key the result list and to build a deterministic image
//! URL, and the whole set is discarded when a new top-level search succeeds.

/// Host serving full-size photo content.
const IMAGE_HOST: &str = "https://live.staticflickr.com";

/// A single photo record from a search result page.
///
/// All fields arrive as strings on the wire; `server` and `secret` exist only
/// to address the image file on the static content host.
///
/// # Fields
///
/// - `id`: Service-assigned photo identifier
/// - `server`: Shard of the static content host storing the image
/// - `secret`: Opaque token required in the image filename
/// - `title`: Title as entered by the uploader, possibly empty
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Photo {
    pub id: String,
    pub server: String,
    pub secret: String,
    pub title: String,
}

impl Photo {
    /// Creates a photo record from its wire fields.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        server: impl Into<String>,
        secret: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            server: server.into(),
            secret: secret.into(),
            title: title.into(),
        }
    }

    /// Returns the full-size image URL for this photo.
    ///
    /// The URL is built as `{host}/{server}/{id}_{secret}.jpg` and is never
    /// fetched by the plugin itself; it is displayed in the preview overlay
    /// and handed to the configured opener command.
    ///
    /// # Examples
    ///
    /// ```
    /// use zflick::domain::Photo;
    ///
    /// let photo = Photo::new("53602", "65535", "9c1b", "Red fox");
    /// assert_eq!(
    ///     photo.image_url(),
    ///     "https://live.staticflickr.com/65535/53602_9c1b.jpg"
    /// );
    /// ```
    #[must_use]
    pub fn image_url(&self) -> String {
        format!(
            "{IMAGE_HOST}/{}/{}_{}.jpg",
            self.server, self.id, self.secret
        )
    }

    /// Returns the title, or a placeholder when the uploader left it empty.
    #[must_use]
    pub fn display_title(&self) -> &str {
        if self.title.trim().is_empty() {
            "(untitled)"
        } else {
            &self.title
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_url_is_deterministic() {
        let photo = Photo::new("12345", "65535", "abcdef", "A bridge");
        assert_eq!(
            photo.image_url(),
            "https://live.staticflickr.com/65535/12345_abcdef.jpg"
        );
    }

    #[test]
    fn display_title_falls_back_for_empty_titles() {
        let untitled = Photo::new("1", "2", "3", "   ");
        assert_eq!(untitled.display_title(), "(untitled)");

        let titled = Photo::new("1", "2", "3", "Harbor at dusk");
        assert_eq!(titled.display_title(), "Harbor at dusk");
    }
}
