//! Synthetic name generation.
//!
//! One `IdGenerator` lives for one compilation run. It is owned by the run's
//! `CompileContext` and never shared between runs, so names stay unique
//! across every file of a run and restart from `a` in the next one.

#[derive(Debug, Default)]
pub struct IdGenerator {
    next: u64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current counter value and advances it. Starts at 0.
    pub fn next_id(&mut self) -> u64 {
        let id = self.next;
        self.next += 1;
        id
    }

    /// Next alphabetic label: `a`, `b`, ... `z`, `aa`, ...
    pub fn fresh_name(&mut self) -> String {
        to_letters(self.next_id())
    }
}

/// Spreadsheet-column encoding: 0 → `a`, 25 → `z`, 26 → `aa`, 702 → `aaa`.
pub fn to_letters(n: u64) -> String {
    // bijective base-26 over n + 1, so there is no zero digit
    let mut rest = n as u128 + 1;
    let mut out = Vec::new();
    while rest > 0 {
        let rem = (rest - 1) % 26;
        out.push(b'a' + rem as u8);
        rest = (rest - 1) / 26;
    }
    out.reverse();
    out.into_iter().map(char::from).collect()
}

/// `$` followed by 32 lowercase hex digits laid out like a v4 UUID without
/// dashes. The leading `$` keeps it a valid identifier.
pub fn create_uuid() -> String {
    let mut bytes: [u8; 16] = rand::random();
    bytes[6] = (bytes[6] & 0x0f) | 0x40;
    bytes[8] = (bytes[8] & 0x3f) | 0x80;

    uuid_token(&bytes)
}

const HEX: &[u8; 16] = b"0123456789abcdef";

fn uuid_token(bytes: &[u8; 16]) -> String {
    let mut out = String::with_capacity(33);
    out.push('$');
    for b in bytes {
        out.push(char::from(HEX[usize::from(b >> 4)]));
        out.push(char::from(HEX[usize::from(b & 0x0f)]));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_uuid_token_hex_layout() {
        let mut bytes = [0u8; 16];
        bytes[0] = 0x0a;
        bytes[6] = 0x4f;
        bytes[8] = 0x80;
        bytes[15] = 0xff;
        assert_eq!(uuid_token(&bytes), "$0a00000000004f0080000000000000ff");
    }

    #[test]
    fn test_to_letters_table() {
        assert_eq!(to_letters(0), "a");
        assert_eq!(to_letters(1), "b");
        assert_eq!(to_letters(25), "z");
        assert_eq!(to_letters(26), "aa");
        assert_eq!(to_letters(27), "ab");
        assert_eq!(to_letters(51), "az");
        assert_eq!(to_letters(52), "ba");
        assert_eq!(to_letters(701), "zz");
        assert_eq!(to_letters(702), "aaa");
    }

    #[test]
    fn test_to_letters_injective() {
        let labels: HashSet<String> = (0..20_000).map(to_letters).collect();
        assert_eq!(labels.len(), 20_000);
    }

    #[test]
    fn test_generator_is_monotonic_and_unique() {
        let mut ids = IdGenerator::new();
        assert_eq!(ids.next_id(), 0);
        assert_eq!(ids.next_id(), 1);
        assert_eq!(ids.fresh_name(), "c");

        let names: HashSet<String> = (0..1000).map(|_| ids.fresh_name()).collect();
        assert_eq!(names.len(), 1000);

        // a new run starts over
        let mut next_run = IdGenerator::new();
        assert_eq!(next_run.fresh_name(), "a");
    }

    #[test]
    fn test_uuid_shape() {
        let id = create_uuid();
        assert_eq!(id.len(), 33);
        assert!(id.starts_with('$'));

        let hex: Vec<char> = id[1..].chars().collect();
        assert!(hex.iter().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        assert_eq!(hex[12], '4');
        assert!(matches!(hex[16], '8' | '9' | 'a' | 'b'));
        assert_ne!(create_uuid(), create_uuid());
    }
}
