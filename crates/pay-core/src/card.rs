//! # Card Numbers
//!
//! Card validity here is a length rule only. There is no Luhn check and no
//! digit check; a right-length string of letters passes.

use std::ops::RangeInclusive;

/// Inclusive range of accepted card-number lengths, counted in characters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardLengthPolicy {
    lengths: RangeInclusive<usize>,
}

impl CardLengthPolicy {
    pub const fn new(min: usize, max: usize) -> Self {
        Self { lengths: min..=max }
    }

    /// Exactly `len` characters
    pub const fn exactly(len: usize) -> Self {
        Self::new(len, len)
    }

    /// Blank input never passes, whatever the range
    pub fn accepts(&self, card_number: &str) -> bool {
        if is_blank(card_number) {
            return false;
        }
        self.lengths.contains(&card_number.chars().count())
    }
}

/// Empty or whitespace-only
pub fn is_blank(card_number: &str) -> bool {
    card_number.trim().is_empty()
}

/// Mask all but the last four characters, e.g. `************3456`
pub fn mask_card(card_number: &str) -> String {
    let len = card_number.chars().count();
    let visible = len.saturating_sub(4);
    card_number
        .chars()
        .enumerate()
        .map(|(i, c)| if i < visible { '*' } else { c })
        .collect()
}
