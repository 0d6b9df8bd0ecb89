//! Word and magnitude lookup tables.

/// A named power of ten.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Magnitude {
    /// Power-of-ten exponent of the scale.
    pub exponent: u32,
    /// Word spoken after the group count.
    pub word: &'static str,
}

impl Magnitude {
    /// Returns `10^exponent`.
    #[must_use]
    pub const fn divisor(self) -> u64 {
        10u64.pow(self.exponent)
    }
}

/// Scales in strictly descending order of exponent.
pub const MAGNITUDES: [Magnitude; 5] = [
    Magnitude { exponent: 12, word: "trillion" },
    Magnitude { exponent: 9, word: "billion" },
    Magnitude { exponent: 6, word: "million" },
    Magnitude { exponent: 3, word: "thousand" },
    Magnitude { exponent: 2, word: "hundred" },
];

const UNITS: [&str; 20] = [
    "zero",
    "one",
    "two",
    "three",
    "four",
    "five",
    "six",
    "seven",
    "eight",
    "nine",
    "ten",
    "eleven",
    "twelve",
    "thirteen",
    "fourteen",
    "fifteen",
    "sixteen",
    "seventeen",
    "eighteen",
    "nineteen",
];

// Indexed by tens digit; 0 and 1 are covered by `UNITS`.
const TENS: [&str; 10] = [
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

/// Looks up the word for `0..=19` or an exact multiple of ten in `20..=90`.
#[must_use]
pub fn word_for(number: u64) -> Option<&'static str> {
    match number {
        0..=19 => usize::try_from(number).ok().map(|index| UNITS[index]),
        20..=90 if number % 10 == 0 => usize::try_from(number / 10).ok().map(|index| TENS[index]),
        _ => None,
    }
}
