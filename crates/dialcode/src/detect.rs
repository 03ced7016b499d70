//! Dial-code inference from raw phone input.
//!
//! Runs on every keystroke of a phone field, so the whole pass stays
//! O(registry size) with at most one small allocation for the cleaned digits.

use crate::registry::Registry;

/// Minimum digits a subscriber number can have after a bare country code.
/// Prevents short fragments like "123" from matching the "1" dial code.
const MIN_SUBSCRIBER_DIGITS: usize = 7;

/// Per-country mobile numbering heuristic.
struct MobilePattern {
    dial_code: &'static str,
    /// Leading digit patterns after the country code and any trunk zeros
    prefixes: &'static [&'static str],
    /// Expected subscriber-number length in digits
    expected_len: usize,
}

/// Declared order matters: the first satisfying country wins.
const MOBILE_PATTERNS: &[MobilePattern] = &[
    MobilePattern { dial_code: "+971", prefixes: &["50", "52", "54", "55", "56", "58"], expected_len: 9 },
    MobilePattern { dial_code: "+966", prefixes: &["5"], expected_len: 9 },
    MobilePattern { dial_code: "+974", prefixes: &["3", "5", "6", "7"], expected_len: 8 },
    MobilePattern { dial_code: "+965", prefixes: &["5", "6", "9"], expected_len: 8 },
    MobilePattern { dial_code: "+973", prefixes: &["3"], expected_len: 8 },
    MobilePattern { dial_code: "+968", prefixes: &["7", "9"], expected_len: 8 },
    MobilePattern { dial_code: "+961", prefixes: &["3", "7"], expected_len: 7 },
    MobilePattern { dial_code: "+91", prefixes: &["6", "7", "8", "9"], expected_len: 10 },
    MobilePattern { dial_code: "+44", prefixes: &["7"], expected_len: 10 },
    MobilePattern { dial_code: "+65", prefixes: &["8", "9"], expected_len: 8 },
    MobilePattern { dial_code: "+234", prefixes: &["70", "80", "81", "90", "91"], expected_len: 10 },
    MobilePattern { dial_code: "+962", prefixes: &["7"], expected_len: 9 },
];

/// Infer the most likely dial code from raw phone input.
///
/// Never fails: when the text carries no usable signal the currently
/// selected dial code is returned unchanged. The result is always a member
/// of `registry` (or `current` itself).
pub fn detect_dial_code(raw: &str, current: &str, registry: &Registry) -> String {
    let trimmed = raw.trim();
    let has_plus = trimmed.starts_with('+');
    let digits: String = trimmed.chars().filter(|c| c.is_ascii_digit()).collect();

    // Explicit "+" input: longest dial-code prefix wins, and an unmatched
    // "+" never falls through to the pattern heuristics.
    if has_plus {
        if let Some(code) = longest_code_prefix(&digits, 1, registry) {
            return code.to_string();
        }
        return current.to_string();
    }

    let digits_only = digits.trim_start_matches('0');
    if digits_only.is_empty() {
        return current.to_string();
    }

    // Bare country code, e.g. "971501234567" typed without the "+". Requires
    // enough remaining digits to be a plausible subscriber number.
    if let Some(code) = longest_code_prefix(digits_only, MIN_SUBSCRIBER_DIGITS, registry) {
        return code.to_string();
    }

    // Mobile-prefix heuristics: exact length first, then the tolerance
    // window, then a tentative match on a still-incomplete number.
    let len = digits_only.len();
    for pattern in MOBILE_PATTERNS {
        if pattern.matches(digits_only) && len == pattern.expected_len {
            return pattern.dial_code.to_string();
        }
    }
    for pattern in MOBILE_PATTERNS {
        if pattern.matches(digits_only)
            && len + 2 >= pattern.expected_len
            && len <= pattern.expected_len + 1
        {
            return pattern.dial_code.to_string();
        }
    }
    for pattern in MOBILE_PATTERNS {
        if len < pattern.expected_len {
            if let Some(shortest) = pattern.shortest_match(digits_only) {
                if len >= shortest {
                    return pattern.dial_code.to_string();
                }
            }
        }
    }

    // Unique-length fallback: exactly one country expects this many digits.
    let mut same_len = MOBILE_PATTERNS.iter().filter(|p| p.expected_len == len);
    if let (Some(only), None) = (same_len.next(), same_len.next()) {
        return only.dial_code.to_string();
    }

    current.to_string()
}

impl MobilePattern {
    fn matches(&self, digits: &str) -> bool {
        self.prefixes.iter().any(|p| digits.starts_with(p))
    }

    /// Length of the shortest prefix that matches, if any.
    fn shortest_match(&self, digits: &str) -> Option<usize> {
        self.prefixes
            .iter()
            .filter(|p| digits.starts_with(*p))
            .map(|p| p.len())
            .min()
    }
}

/// Longest registry dial code whose digits prefix `digits`, with at least
/// `min_rest` digits left over. Scans by code length so "+971" is tried
/// before "+97" and "+9".
fn longest_code_prefix<'a>(
    digits: &str,
    min_rest: usize,
    registry: &'a Registry,
) -> Option<&'a str> {
    for code_len in (1..=4).rev() {
        for entry in registry.all() {
            let code_digits = &entry.dial_code[1..];
            if code_digits.len() == code_len
                && digits.starts_with(code_digits)
                && digits.len() >= code_digits.len() + min_rest
            {
                return Some(entry.dial_code);
            }
        }
    }
    None
}
