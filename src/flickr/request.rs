//! Search URL construction for the Flickr REST endpoint.
//!
//! The endpoint takes every argument as a query parameter on a single GET.
//! Only the query text varies freely and needs percent-encoding; the rest of
//! the parameters are fixed by the search contract: JSON output without the
//! JSONP wrapper and safe search pinned on.

use urlencoding::encode;

/// REST endpoint all API methods are served from.
const REST_ENDPOINT: &str = "https://www.flickr.com/services/rest/";

/// API method for free-text photo search.
const SEARCH_METHOD: &str = "flickr.photos.search";

/// Builds the search request URL for one page of results.
///
/// The query is forwarded exactly as the user entered it, percent-encoded;
/// an empty query is valid and searches recent public photos. Page numbers
/// start at 1.
///
/// # Examples
///
/// ```
/// use zflick::flickr::search_url;
///
/// let url = search_url("0123abcd", "red fox", 2);
/// assert!(url.contains("text=red%20fox"));
/// assert!(url.contains("page=2"));
/// ```
#[must_use]
pub fn search_url(api_key: &str, query: &str, page: u32) -> String {
    format!(
        "{REST_ENDPOINT}?method={SEARCH_METHOD}&api_key={}&text={}&safe_search=1&format=json&nojsoncallback=1&page={page}",
        encode(api_key),
        encode(query),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn carries_the_full_parameter_set() {
        let url = search_url("deadbeef", "cats", 1);
        assert!(url.starts_with("https://www.flickr.com/services/rest/?"));
        assert!(url.contains("method=flickr.photos.search"));
        assert!(url.contains("api_key=deadbeef"));
        assert!(url.contains("text=cats"));
        assert!(url.contains("safe_search=1"));
        assert!(url.contains("format=json"));
        assert!(url.contains("nojsoncallback=1"));
        assert!(url.contains("page=1"));
    }

    #[test]
    fn encodes_reserved_characters_in_the_query() {
        let url = search_url("k", "black & white", 1);
        assert!(url.contains("text=black%20%26%20white"));
        assert!(!url.contains("text=black & white"));
    }

    #[test]
    fn empty_query_is_forwarded_as_is() {
        let url = search_url("k", "", 1);
        assert!(url.contains("&text=&"));
    }

    #[test]
    fn page_number_is_the_requested_one() {
        let url = search_url("k", "sea", 17);
        assert!(url.ends_with("page=17"));
    }
}
