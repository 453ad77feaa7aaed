//! Booking search URL construction.

const SEARCH_BASE: &str = "https://booking.com/searchresults.html";

/// Build the booking search URL for one accommodation.
///
/// The search phrase is the name alone, or `"{name}, {location}"` when a
/// location is known. The whole phrase is percent-encoded with no characters
/// treated as safe beyond the unreserved set, so commas, ampersands, spaces
/// and non-ASCII text all travel as escapes. The affiliate id is opaque and
/// copied verbatim.
pub fn affiliate_url(affiliate_id: &str, name: &str, location: &str) -> String {
    let search_phrase = if location.is_empty() {
        name.to_string()
    } else {
        format!("{}, {}", name, location)
    };

    let encoded = urlencoding::encode(&search_phrase);
    format!("{}?ss={}&aid={}", SEARCH_BASE, encoded, affiliate_id)
}
