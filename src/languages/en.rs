// File: src/languages/en.rs
use std::collections::HashMap;

use crate::core::types::Vocabulary;

const ONES: [&str; 20] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
    "eleven", "twelve", "thirteen", "fourteen", "fifteen", "sixteen", "seventeen", "eighteen",
    "nineteen",
];

const TENS: [&str; 10] = [
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

/// English, read with Indian-system magnitudes (lakh and crore above
/// thousand). Compound atoms like "forty two" are unhyphenated.
pub fn vocabulary() -> Vocabulary {
    let mut atoms: HashMap<u64, String> = HashMap::with_capacity(100);
    for (n, word) in ONES.iter().enumerate() {
        atoms.insert(n as u64, (*word).to_string());
    }
    for n in 20..100u64 {
        let tens = TENS[(n / 10) as usize];
        let word = if n % 10 == 0 {
            tens.to_string()
        } else {
            format!("{} {}", tens, ONES[(n % 10) as usize])
        };
        atoms.insert(n, word);
    }

    Vocabulary {
        atoms,
        magnitudes: vec![
            (10_000_000, "crore".to_string()),
            (100_000, "lakh".to_string()),
            (1_000, "thousand".to_string()),
            (100, "hundred".to_string()),
        ],
        alphabet: ('A'..='Z').map(|c| (c, c.to_string())).collect(),
        decimal_point: "point".to_string(),
        separator: " ".to_string(),
    }
}
