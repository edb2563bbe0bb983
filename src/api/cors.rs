use axum::http::{header, HeaderMap, HeaderValue};

/// CORS headers attached to every response of an endpoint.
///
/// Origins are unrestricted; the method list is the endpoint's own set
/// plus `OPTIONS`.
pub fn cors_headers(allowed_methods: &[&str]) -> HeaderMap {
    let methods = allowed_methods
        .iter()
        .copied()
        .chain(std::iter::once("OPTIONS"))
        .collect::<Vec<_>>()
        .join(", ");

    let mut headers = HeaderMap::new();
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_str(&methods).unwrap_or_else(|_| HeaderValue::from_static("OPTIONS")),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Content-Type"),
    );
    headers
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cors_headers_for_post_endpoint() {
        let headers = cors_headers(&["POST"]);

        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_METHODS], "POST, OPTIONS");
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_HEADERS], "Content-Type");
    }

    #[test]
    fn test_cors_headers_multiple_methods() {
        let headers = cors_headers(&["GET", "POST"]);
        assert_eq!(
            headers[header::ACCESS_CONTROL_ALLOW_METHODS],
            "GET, POST, OPTIONS"
        );
    }
}
