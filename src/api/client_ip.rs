use axum::http::HeaderMap;
use std::net::{IpAddr, SocketAddr};

pub const UNKNOWN_IP: &str = "unknown";

/// Extract the client IP address.
///
/// Precedence: first `X-Forwarded-For` entry, `X-Real-IP`, the connected
/// peer, then `"unknown"`. Header values that are not an IP address (with
/// or without a port) are skipped.
pub fn extract_client_ip(headers: &HeaderMap, peer_ip: Option<IpAddr>) -> String {
    // Try X-Forwarded-For first (for proxies/load balancers)
    if let Some(first_ip) = headers
        .get("x-forwarded-for")
        .and_then(|h| h.to_str().ok())
        .and_then(|value| value.split(',').next())
        .and_then(parse_ip)
    {
        return first_ip.to_string();
    }

    // Try X-Real-IP
    if let Some(real_ip) = headers
        .get("x-real-ip")
        .and_then(|h| h.to_str().ok())
        .and_then(parse_ip)
    {
        return real_ip.to_string();
    }

    peer_ip
        .map(|ip| ip.to_string())
        .unwrap_or_else(|| UNKNOWN_IP.to_string())
}

fn parse_ip(value: &str) -> Option<IpAddr> {
    let value = value.trim();
    value
        .parse::<IpAddr>()
        .ok()
        .or_else(|| value.parse::<SocketAddr>().ok().map(|addr| addr.ip()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;
    use std::net::Ipv4Addr;

    fn peer() -> Option<IpAddr> {
        Some(IpAddr::V4(Ipv4Addr::new(10, 0, 0, 1)))
    }

    #[test]
    fn test_forwarded_for_takes_first_entry() {
        let mut headers = HeaderMap::new();
        headers.insert(
            "x-forwarded-for",
            HeaderValue::from_static(" 203.0.113.7 , 70.41.3.18, 150.172.238.178"),
        );
        headers.insert("x-real-ip", HeaderValue::from_static("198.51.100.2"));

        assert_eq!(extract_client_ip(&headers, peer()), "203.0.113.7");
    }

    #[test]
    fn test_real_ip_when_no_forwarded_for() {
        let mut headers = HeaderMap::new();
        headers.insert("x-real-ip", HeaderValue::from_static("198.51.100.2"));

        assert_eq!(extract_client_ip(&headers, peer()), "198.51.100.2");
    }

    #[test]
    fn test_peer_address_fallback() {
        assert_eq!(extract_client_ip(&HeaderMap::new(), peer()), "10.0.0.1");
    }

    #[test]
    fn test_unknown_when_nothing_available() {
        assert_eq!(extract_client_ip(&HeaderMap::new(), None), "unknown");
    }

    #[test]
    fn test_empty_forwarded_for_is_skipped() {
        let mut headers = HeaderMap::new();
        headers.insert("x-forwarded-for", HeaderValue::from_static(""));
        assert_eq!(extract_client_ip(&headers, None), "unknown");
    }

    #[test]
    fn test_non_ip_header_values_are_skipped() {
        let spoofed = format!("{}, 70.41.3.18", "x".repeat(500));
        let mut headers = HeaderMap::new();
        headers.insert("x-forwarded-for", HeaderValue::from_str(&spoofed).unwrap());
        headers.insert("x-real-ip", HeaderValue::from_static("not-an-ip"));

        assert_eq!(extract_client_ip(&headers, peer()), "10.0.0.1");
    }

    #[test]
    fn test_forwarded_entry_with_port() {
        let mut headers = HeaderMap::new();
        headers.insert("x-forwarded-for", HeaderValue::from_static("203.0.113.7:4711"));
        assert_eq!(extract_client_ip(&headers, None), "203.0.113.7");

        headers.insert("x-forwarded-for", HeaderValue::from_static("[2001:db8::1]:443"));
        assert_eq!(extract_client_ip(&headers, None), "2001:db8::1");
    }
}
