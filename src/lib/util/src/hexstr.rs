//! Compile-time parsing of hex strings handed over by the build environment,
//! e.g. `EL3_PAYLOAD_BASE=0x80000000`.

const fn hex_digit(c: u8) -> Option<u64> {
    match c {
        b'0'..=b'9' => Some((c - b'0') as u64),
        b'a'..=b'f' => Some((c - b'a' + 10) as u64),
        b'A'..=b'F' => Some((c - b'A' + 10) as u64),
        _ => None,
    }
}

/// Parse a hex number with an optional `0x`/`0X` prefix. `_` separators are
/// skipped. Returns `None` for empty input, any other character, or a value
/// that does not fit into 64 bits.
pub const fn parse_hex_u64(s: &str) -> Option<u64> {
    let b = s.as_bytes();
    let mut i = 0;
    if b.len() >= 2 && b[0] == b'0' && (b[1] == b'x' || b[1] == b'X') {
        i = 2;
    }

    let mut value: u64 = 0;
    let mut digits = 0;
    while i < b.len() {
        let c = b[i];
        i += 1;
        if c == b'_' {
            continue;
        }
        let d = match hex_digit(c) {
            Some(d) => d,
            None => return None,
        };
        if value > (u64::MAX >> 4) {
            return None;
        }
        value = (value << 4) | d;
        digits += 1;
    }

    if digits == 0 {
        None
    } else {
        Some(value)
    }
}
