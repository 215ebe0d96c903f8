//! Origin-identifier derivation.
//!
//! Appointments and complaints are attributed to the address the request came
//! from. Behind a reverse proxy the peer address is the proxy itself, so the
//! first `X-Forwarded-For` hop wins when present.

use std::net::IpAddr;

/// Identifier used when neither a forwarding header nor a peer address exists.
pub const UNKNOWN_ORIGIN: &str = "unknown";

/// Derive the origin identifier for a request.
///
/// Order: first comma-separated entry of `forwarded_for` (trimmed, if
/// non-empty), then `peer`, then [`UNKNOWN_ORIGIN`].
///
/// ```
/// use portal_core::origin::client_origin;
///
/// assert_eq!(client_origin(Some("1.2.3.4, 10.0.0.1"), None), "1.2.3.4");
/// assert_eq!(client_origin(None, Some("10.0.0.7".parse().unwrap())), "10.0.0.7");
/// assert_eq!(client_origin(None, None), "unknown");
/// ```
pub fn client_origin(forwarded_for: Option<&str>, peer: Option<IpAddr>) -> String {
    let forwarded = forwarded_for
        .and_then(|header| header.split(',').next())
        .map(str::trim)
        .filter(|hop| !hop.is_empty());

    match (forwarded, peer) {
        (Some(hop), _) => hop.to_string(),
        (None, Some(addr)) => addr.to_string(),
        (None, None) => UNKNOWN_ORIGIN.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn peer() -> Option<IpAddr> {
        Some("192.168.1.20".parse().unwrap())
    }

    #[test]
    fn forwarded_header_takes_precedence() {
        assert_eq!(client_origin(Some("203.0.113.9"), peer()), "203.0.113.9");
    }

    #[test]
    fn only_first_hop_is_used() {
        assert_eq!(
            client_origin(Some(" 203.0.113.9 , 10.0.0.1, 10.0.0.2"), peer()),
            "203.0.113.9"
        );
    }

    #[test]
    fn empty_header_falls_back_to_peer() {
        assert_eq!(client_origin(Some(""), peer()), "192.168.1.20");
        assert_eq!(client_origin(Some(" ,10.0.0.1"), peer()), "192.168.1.20");
    }

    #[test]
    fn ipv6_peer_is_rendered_without_brackets() {
        let v6: IpAddr = "2001:db8::1".parse().unwrap();
        assert_eq!(client_origin(None, Some(v6)), "2001:db8::1");
    }

    #[test]
    fn nothing_available_is_unknown() {
        assert_eq!(client_origin(None, None), UNKNOWN_ORIGIN);
        assert_eq!(client_origin(Some("  "), None), UNKNOWN_ORIGIN);
    }
}
