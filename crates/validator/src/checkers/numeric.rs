//! Integer checkers

crate::checker! {
    /// Rejects zero and negative values.
    pub fn positive() -> i64 as "positive";
    errors(value) { (*value <= 0).then_some("value must be > 0") }
}

crate::checker! {
    /// Rejects values not strictly greater than `bound`.
    pub fn greater_than(bound: i64) -> i64 as "greater_than";
    errors(value) { (*value <= bound).then(|| format!("value must be > {bound}")) }
}

crate::checker! {
    /// Rejects values outside the inclusive range `[min, max]`.
    pub fn in_range(min: i64, max: i64) -> i64 as "in_range";
    errors(value) {
        (*value < min || *value > max)
            .then(|| format!("value must be in [{min}, {max}], got {value}"))
    }
}
