//! Search response decoding.
//!
//! The search endpoint answers with `{"photos": {"photo": [...]}, "stat": "ok"}`
//! on success and `{"stat": "fail", "code": N, "message": "..."}` on
//! application-level failure. Both arrive with HTTP 200, so failure detection
//! has to look at the body. Anything that is not a well-formed success page
//! is reported as an error and leaves the caller's state untouched.

use serde::Deserialize;

use crate::domain::{Photo, Result, ZflickError};

/// Top-level response envelope shared by success and failure bodies.
#[derive(Debug, Deserialize)]
struct SearchResponse {
    stat: String,
    #[serde(default)]
    code: Option<i64>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    photos: Option<PhotoPage>,
}

/// One page of results. Pagination counters also arrive here but the
/// client derives its own cursor, so only the records are kept.
#[derive(Debug, Deserialize)]
struct PhotoPage {
    #[serde(default)]
    photo: Vec<PhotoRecord>,
}

#[derive(Debug, Deserialize)]
struct PhotoRecord {
    id: String,
    server: String,
    secret: String,
    #[serde(default)]
    title: String,
}

/// Decodes a search response body into photo records.
///
/// Returns [`ZflickError::Api`] when the service reports `stat: "fail"` and
/// [`ZflickError::Parse`] when the body is not the documented shape. An empty
/// `photo` array is a valid page and decodes to an empty vector.
///
/// # Examples
///
/// ```
/// use zflick::flickr::parse_search_page;
///
/// let body = br#"{"photos":{"photo":[
///     {"id":"53602","server":"65535","secret":"9c1b","title":"Red fox"}
/// ]},"stat":"ok"}"#;
///
/// let photos = parse_search_page(body).unwrap();
/// assert_eq!(photos.len(), 1);
/// assert_eq!(photos[0].title, "Red fox");
/// ```
pub fn parse_search_page(body: &[u8]) -> Result<Vec<Photo>> {
    let response: SearchResponse =
        serde_json::from_slice(body).map_err(|err| ZflickError::Parse(err.to_string()))?;

    if response.stat != "ok" {
        return Err(ZflickError::Api {
            code: response.code.unwrap_or(-1),
            message: response
                .message
                .unwrap_or_else(|| "unspecified failure".to_string()),
        });
    }

    let page = response
        .photos
        .ok_or_else(|| ZflickError::Parse("success body without photos object".to_string()))?;

    Ok(page
        .photo
        .into_iter()
        .map(|record| Photo::new(record.id, record.server, record.secret, record.title))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    // Trimmed from a live flickr.photos.search answer; extra per-photo
    // attributes must not break decoding.
    const OK_BODY: &[u8] = br#"{
        "photos": {
            "page": 1, "pages": 1519, "perpage": 2, "total": 3037,
            "photo": [
                {"id": "54321", "owner": "1234@N01", "secret": "a1b2c3",
                 "server": "65535", "farm": 66, "title": "Harbor at dusk",
                 "ispublic": 1, "isfriend": 0, "isfamily": 0},
                {"id": "54322", "owner": "1234@N01", "secret": "d4e5f6",
                 "server": "65535", "farm": 66, "title": "",
                 "ispublic": 1, "isfriend": 0, "isfamily": 0}
            ]
        },
        "stat": "ok"
    }"#;

    #[test]
    fn decodes_a_success_page() {
        let photos = parse_search_page(OK_BODY).unwrap();
        assert_eq!(photos.len(), 2);
        assert_eq!(photos[0].id, "54321");
        assert_eq!(photos[0].server, "65535");
        assert_eq!(photos[0].secret, "a1b2c3");
        assert_eq!(photos[0].title, "Harbor at dusk");
        assert_eq!(photos[1].title, "");
    }

    #[test]
    fn empty_page_decodes_to_empty_vec() {
        let body = br#"{"photos":{"page":9,"pages":8,"photo":[]},"stat":"ok"}"#;
        let photos = parse_search_page(body).unwrap();
        assert!(photos.is_empty());
    }

    #[test]
    fn service_failure_surfaces_code_and_message() {
        let body = br#"{"stat":"fail","code":100,"message":"Invalid API Key (Key has invalid format)"}"#;
        match parse_search_page(body) {
            Err(ZflickError::Api { code, message }) => {
                assert_eq!(code, 100);
                assert!(message.contains("Invalid API Key"));
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn garbage_body_is_a_parse_error() {
        let result = parse_search_page(b"<html>502 Bad Gateway</html>");
        assert!(matches!(result, Err(ZflickError::Parse(_))));
    }

    #[test]
    fn success_without_photos_object_is_a_parse_error() {
        let result = parse_search_page(br#"{"stat":"ok"}"#);
        assert!(matches!(result, Err(ZflickError::Parse(_))));
    }
}
