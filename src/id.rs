use uuid::Uuid;

use crate::payload::TexturePayload;

const HIGH_WINDOW: usize = 20;
const LOW_WINDOW: usize = 10;

/// Derives the profile id of a skull from its texture payload.
///
/// The high half is the hash of the last 20 characters of the payload, the
/// low half the hash of the last 10, each sign-extended to 64 bits. Ids
/// produced this way match the ones stored by existing servers. Distinct
/// payloads may collide; the id only fills the mandatory profile field and
/// is never used to identify a player.
pub fn synthetic_id(payload: &TexturePayload) -> Uuid {
    let units: Vec<u16> = payload.as_str().encode_utf16().collect();

    let high = string_hash(tail(&units, HIGH_WINDOW)) as i64 as u64;
    let low = string_hash(tail(&units, LOW_WINDOW)) as i64 as u64;
    Uuid::from_u64_pair(high, low)
}

// shorter payloads hash as a whole
fn tail(units: &[u16], window: usize) -> &[u16] {
    &units[units.len().saturating_sub(window)..]
}

/// `s[0]*31^(n-1) + ... + s[n-1]` over UTF-16 code units, wrapping.
pub(crate) fn string_hash(units: &[u16]) -> i32 {
    units
        .iter()
        .fold(0i32, |h, &u| h.wrapping_mul(31).wrapping_add(u as i32))
}
