//! HTTP response header inspection

use crate::diagnostics::EventSink;
use http::header::CONTENT_ENCODING;
use http::HeaderMap;

/// True iff the headers declare a gzip `Content-Encoding`.
///
/// Header name lookup is case-insensitive by `HeaderMap` construction;
/// the value comparison ignores ASCII case as well. The header set is
/// reported through `sink` at debug level.
pub fn is_gzip_encoded(headers: &HeaderMap, sink: &dyn EventSink) -> bool {
    sink.debug(&format!("headers: {headers:?}"));

    headers
        .get(CONTENT_ENCODING)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.eq_ignore_ascii_case("gzip"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::NullSink;
    use http::HeaderValue;

    #[test]
    fn test_detects_gzip() {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_ENCODING, HeaderValue::from_static("gzip"));
        assert!(is_gzip_encoded(&headers, &NullSink));
    }

    #[test]
    fn test_value_comparison_is_case_insensitive() {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_ENCODING, HeaderValue::from_static("GZIP"));
        assert!(is_gzip_encoded(&headers, &NullSink));
    }

    #[test]
    fn test_absent_header_is_false() {
        let headers = HeaderMap::new();
        assert!(!is_gzip_encoded(&headers, &NullSink));
    }

    #[test]
    fn test_other_encoding_is_false() {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_ENCODING, HeaderValue::from_static("br"));
        assert!(!is_gzip_encoded(&headers, &NullSink));
    }
}
