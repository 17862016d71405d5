//! Decoding of IPv4 addresses embedded in query names.
//!
//! A name such as `10-0-0-5.hosts.example.org.` carries the address
//! `10.0.0.5`. The dashed form must be bounded by the start or end of the
//! name, or by a `.`/`-` separator, so digits inside unrelated labels do not
//! match.

use fancy_regex::Regex;
use std::net::Ipv4Addr;
use std::sync::LazyLock;

/// Address returned for names that carry no embedded address.
pub const FALLBACK_ADDRESS: Ipv4Addr = Ipv4Addr::LOCALHOST;

static DASHED_IPV4: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(
        r"(^|[.-])(((25[0-5]|(2[0-4]|1?[0-9])?[0-9])-){3}(25[0-5]|(2[0-4]|1?[0-9])?[0-9]))($|[.-])",
    )
    .ok()
});

/// Returns the first dash-encoded IPv4 address found in `name`.
pub fn decode(name: &str) -> Option<Ipv4Addr> {
    let pattern = DASHED_IPV4.as_ref()?;
    let captures = pattern.captures(name).ok()??;
    let dashed = captures.get(2)?.as_str();

    // Octets may carry a leading zero ("01"), which `Ipv4Addr::from_str` refuses.
    let mut octets = [0u8; 4];
    for (slot, part) in octets.iter_mut().zip(dashed.split('-')) {
        *slot = part.parse().ok()?;
    }
    Some(Ipv4Addr::from(octets))
}

/// Decodes `name`, falling back to [`FALLBACK_ADDRESS`].
pub fn decode_or_fallback(name: &str) -> Ipv4Addr {
    decode(name).unwrap_or(FALLBACK_ADDRESS)
}
