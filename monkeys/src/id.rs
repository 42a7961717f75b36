use nanoid::nanoid;

/// Surrogate identifier of a monkey, allocated from a per-namespace sequence.
pub type MonkeyId = u64;

/// Surrogate identifier of a friend edge.
pub type FriendId = u64;

/// Alphabet for namespace salts (no ambiguous glyphs).
const SALT_ALPHABET: &[char] = &[
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'J', 'K', 'L', 'M', 'N', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y',
    'Z', 'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'j', 'm', 'n', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
];
const SALT_LENGTH: usize = 8;

/// Generates a short random salt for isolating key namespaces.
pub fn generate_salt() -> String {
    nanoid!(SALT_LENGTH, SALT_ALPHABET)
}

/// Unique key prefix for a throwaway namespace (tests, demos).
pub fn unique_namespace(label: &str) -> String {
    format!("monkeys_{label}_{}", generate_salt())
}
