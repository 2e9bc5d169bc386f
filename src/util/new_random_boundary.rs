use rand::RngCore;

const HEX_CHARS: &[u8; 16] = b"0123456789abcdef";

/// Returns a new random boundary for framing a multipart body.
///
/// The boundary is 32 lowercase hex characters drawn from the
/// thread-local CSPRNG, making a collision with body content
/// overwhelmingly unlikely. Hex keeps it legal under RFC 2046
/// with no quoting needed.
pub fn new_random_boundary() -> String {
    let mut raw = [0u8; 16];
    rand::rng().fill_bytes(&mut raw);

    let mut boundary = String::with_capacity(raw.len() * 2);
    for byte in raw {
        boundary.push(HEX_CHARS[(byte >> 4) as usize] as char);
        boundary.push(HEX_CHARS[(byte & 0x0f) as usize] as char);
    }

    boundary
}
