// File: src/languages/hi.rs
use std::collections::HashMap;

use crate::core::types::Vocabulary;

// Hindi names every value 0-99 irregularly, so the whole range is tabled.
const ATOMS: [&str; 100] = [
    "शून्य", "एक", "दो", "तीन", "चार", "पाँच", "छः", "सात", "आठ", "नौ",
    "दस", "ग्यारह", "बारह", "तेरह", "चौदह", "पंद्रह", "सोलह", "सत्रह", "अठारह", "उन्नीस",
    "बीस", "इक्कीस", "बाईस", "तेईस", "चौबीस", "पच्चीस", "छब्बीस", "सत्ताईस", "अट्ठाईस", "उनतीस",
    "तीस", "इकतीस", "बत्तीस", "तैंतीस", "चौंतीस", "पैंतीस", "छत्तीस", "सैंतीस", "अड़तीस", "उनतालीस",
    "चालीस", "इकतालीस", "बयालीस", "तैंतालीस", "चौवालीस", "पैंतालीस", "छियालीस", "सैंतालीस", "अड़तालीस", "उनचास",
    "पचास", "इक्यावन", "बावन", "तिरपन", "चौवन", "पचपन", "छप्पन", "सत्तावन", "अट्ठावन", "उनसठ",
    "साठ", "इकसठ", "बासठ", "तिरसठ", "चौंसठ", "पैंसठ", "छियासठ", "सड़सठ", "अड़सठ", "उनहत्तर",
    "सत्तर", "इकहत्तर", "बहत्तर", "तिहत्तर", "चौहत्तर", "पचहत्तर", "छिहत्तर", "सतहत्तर", "अठहत्तर", "उनासी",
    "अस्सी", "इक्यासी", "बयासी", "तिरासी", "चौरासी", "पचासी", "छियासी", "सत्तासी", "अट्ठासी", "नवासी",
    "नब्बे", "इक्यानवे", "बानवे", "तिरानवे", "चौरानवे", "पंचानवे", "छियानवे", "सत्तानवे", "अट्ठानवे", "निन्यानवे",
];

// English letter names as spoken in Hindi.
const ALPHABET: [(char, &str); 26] = [
    ('A', "ए"), ('B', "बी"), ('C', "सी"), ('D', "डी"), ('E', "ई"), ('F', "एफ"),
    ('G', "जी"), ('H', "एच"), ('I', "आई"), ('J', "जे"), ('K', "के"), ('L', "एल"),
    ('M', "एम"), ('N', "एन"), ('O', "ओ"), ('P', "पी"), ('Q', "क्यू"), ('R', "आर"),
    ('S', "एस"), ('T', "टी"), ('U', "यू"), ('V', "वी"), ('W', "डब्ल्यू"), ('X', "एक्स"),
    ('Y', "वाई"), ('Z', "ज़ेड"),
];

pub fn vocabulary() -> Vocabulary {
    let atoms: HashMap<u64, String> = ATOMS
        .iter()
        .enumerate()
        .map(|(n, word)| (n as u64, (*word).to_string()))
        .collect();

    Vocabulary {
        atoms,
        magnitudes: vec![
            (10_000_000, "करोड़".to_string()),
            (100_000, "लाख".to_string()),
            (1_000, "हज़ार".to_string()),
            (100, "सौ".to_string()),
        ],
        alphabet: ALPHABET
            .iter()
            .map(|(letter, word)| (*letter, (*word).to_string()))
            .collect(),
        decimal_point: "दशमलव".to_string(),
        separator: " ".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_complete() {
        assert!(vocabulary().validate().is_ok());
    }

    #[test]
    fn key_atoms() {
        let vocabulary = vocabulary();
        assert_eq!(vocabulary.atoms[&0], "शून्य");
        assert_eq!(vocabulary.atoms[&42], "बयालीस");
        assert_eq!(vocabulary.atoms[&99], "निन्यानवे");
    }
}
