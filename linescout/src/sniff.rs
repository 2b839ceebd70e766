use memchr::memchr_iter;

/// Number of leading bytes inspected when classifying a file.
pub const SNIFF_LEN: usize = 100;

/// Signatures of binary formats the zero-byte heuristic can miss: PDF and
/// PostScript bodies often contain no NUL pairs in their first bytes.
pub const BINARY_SIGNATURES: [&[u8]; 2] = [b"%PDF", b"%!PS"];

/// Outcome of sniffing a file prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Text,
    Binary,
}

/// Classifies a file prefix as text or binary.
///
/// Two consecutive zero bytes are the primary signal: they appear early in
/// executables, compiled objects and UTF-16 with ASCII-range content, and
/// essentially never in text. The signature table catches known formats
/// that pass the zero check. Only the prefix the caller hands in is
/// inspected; a binary region past it goes undetected.
pub fn classify(prefix: &[u8]) -> Classification {
    for signature in BINARY_SIGNATURES {
        if prefix.starts_with(signature) {
            return Classification::Binary;
        }
    }

    if memchr_iter(0, prefix).any(|pos| prefix.get(pos + 1) == Some(&0)) {
        return Classification::Binary;
    }

    Classification::Text
}
