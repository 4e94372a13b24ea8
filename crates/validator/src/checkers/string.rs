//! String checkers
//!
//! Lengths are counted in Unicode scalar values, not bytes.

crate::checker! {
    /// Rejects strings with an odd number of characters.
    pub fn even_length() -> str as "even_length";
    errors(s) {
        let length = s.chars().count();
        (length % 2 != 0).then(|| format!("String length must be even, length: {length}."))
    }
}

crate::checker! {
    /// Rejects the empty string.
    pub fn not_empty() -> str as "not_empty";
    errors(s) { s.is_empty().then_some("String must not be empty") }
}
