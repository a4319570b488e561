//! Symbol types for DFA transitions.

/// An alphabet symbol. Alphabets are made of single characters.
pub type Symbol = char;

/// Input string standing for the empty string.
///
/// `accepts("e")` never walks the alphabet, so a DFA over an alphabet that
/// contains `'e'` cannot accept the one-character string `"e"` as such.
pub const EPSILON: &str = "e";

/// Check if an input string is the epsilon marker.
#[inline]
pub fn is_epsilon(input: &str) -> bool {
    input == EPSILON
}

/// Relabel `symbol` under the transposition of `a` and `b`.
#[inline]
pub fn transpose(symbol: Symbol, a: Symbol, b: Symbol) -> Symbol {
    if symbol == a {
        b
    } else if symbol == b {
        a
    } else {
        symbol
    }
}
