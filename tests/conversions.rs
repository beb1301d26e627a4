// End-to-end conversions through the public registry surface. Expected
// strings follow the shipped word tables for Hindi and English.

use numwords_core::{LanguageRegistry, Mode, NumWordsError};

fn registry() -> LanguageRegistry {
    LanguageRegistry::with_builtin_languages()
}

fn hi(input: &str) -> String {
    registry().convert(input, "hi", None).unwrap()
}

fn en(input: &str) -> String {
    registry().convert(input, "en", None).unwrap()
}

#[test]
fn hindi_atoms() {
    assert_eq!(hi("0"), "शून्य");
    assert_eq!(hi("1"), "एक");
    assert_eq!(hi("10"), "दस");
    assert_eq!(hi("42"), "बयालीस");
    assert_eq!(hi("99"), "निन्यानवे");
}

#[test]
fn hindi_hundreds() {
    assert_eq!(hi("100"), "एक सौ");
    assert_eq!(hi("150"), "एक सौ पचास");
    assert_eq!(hi("200"), "दो सौ");
    assert_eq!(hi("999"), "नौ सौ निन्यानवे");
}

#[test]
fn hindi_thousands() {
    assert_eq!(hi("1000"), "एक हज़ार");
    assert_eq!(hi("1234"), "एक हज़ार दो सौ चौंतीस");
    assert_eq!(hi("5000"), "पाँच हज़ार");
    assert_eq!(hi("99999"), "निन्यानवे हज़ार नौ सौ निन्यानवे");
}

#[test]
fn hindi_lakhs_and_crores() {
    assert_eq!(hi("100000"), "एक लाख");
    assert_eq!(hi("123456"), "एक लाख तेईस हज़ार चार सौ छप्पन");
    assert_eq!(hi("1000000"), "दस लाख");
    assert_eq!(hi("10000000"), "एक करोड़");
    assert_eq!(
        hi("12345678"),
        "एक करोड़ तेईस लाख पैंतालीस हज़ार छः सौ अठहत्तर"
    );
    assert!(hi("999999999").contains("करोड़"));
}

#[test]
fn comma_formatted_input_is_currency() {
    // Indian grouping
    assert_eq!(hi("1,23,456"), "एक लाख तेईस हज़ार चार सौ छप्पन");
    assert_eq!(hi("10,00,000"), "दस लाख");
    assert_eq!(hi("1,00,00,000"), "एक करोड़");
    // International grouping
    assert_eq!(hi("1,000"), "एक हज़ार");
    assert_eq!(en("1,000,000"), "ten lakh");
}

#[test]
fn leading_zeros_read_individually() {
    assert_eq!(hi("007"), "शून्य शून्य सात");
    assert_eq!(hi("0042"), "शून्य शून्य चार दो");
    assert_eq!(hi("00"), "शून्य शून्य");
    assert_eq!(en("007"), "zero zero seven");
}

#[test]
fn separators_read_individually() {
    assert_eq!(hi("98-76"), "नौ आठ सात छः");
    assert_eq!(hi("123-456-7890"), "एक दो तीन चार पाँच छः सात आठ नौ शून्य");
    assert_eq!(hi("12 34"), "एक दो तीन चार");
    assert_eq!(en("12-34"), "one two three four");
}

#[test]
fn explicit_individual_mode() {
    let registry = registry();
    assert_eq!(
        registry.convert(123u32, "hi", Some(Mode::Individual)).unwrap(),
        "एक दो तीन"
    );
    assert_eq!(
        registry.convert(2024u32, "hi", Some(Mode::Individual)).unwrap(),
        "दो शून्य दो चार"
    );
    assert_eq!(
        registry
            .convert(9876543210u64, "hi", Some(Mode::Individual))
            .unwrap(),
        "नौ आठ सात छः पाँच चार तीन दो एक शून्य"
    );
}

#[test]
fn explicit_currency_mode_normalizes_leading_zeros() {
    assert_eq!(
        registry().convert("0123", "hi", Some(Mode::Currency)).unwrap(),
        "एक सौ तेईस"
    );
}

#[test]
fn decimals() {
    assert_eq!(hi("3.14"), "तीन दशमलव एक चार");
    assert_eq!(hi("0.5"), "शून्य दशमलव पाँच");
    assert_eq!(hi("99.99"), "निन्यानवे दशमलव नौ नौ");
    assert_eq!(hi("123.45"), "एक सौ तेईस दशमलव चार पाँच");
    assert_eq!(hi("1000.50"), "एक हज़ार दशमलव पाँच शून्य");
    assert_eq!(en("3.14"), "three point one four");
    assert!(hi("1,234.56").contains("दशमलव"));
}

#[test]
fn alphanumeric_input() {
    assert_eq!(hi("AB"), "ए बी");
    assert_eq!(hi("XYZ"), "एक्स वाई ज़ेड");
    assert_eq!(hi("AB123"), "ए बी एक दो तीन");
    assert_eq!(hi("v1"), "वी एक");
    assert_eq!(hi("v1.2.3"), "वी एक दो तीन");
    assert_eq!(hi("SBIN0001234"), "एस बी आई एन शून्य शून्य शून्य एक दो तीन चार");
    assert_eq!(hi("AB-123-CD"), "ए बी एक दो तीन सी डी");
    assert_eq!(en("AB"), "A B");
    assert_eq!(en("AB123"), "A B one two three");
}

#[test]
fn zero_is_never_empty() {
    let registry = registry();
    for (code, _) in registry.supported_languages() {
        let words = registry.convert(0u32, code, None).unwrap();
        assert!(!words.is_empty(), "zero rendered empty for '{code}'");
    }
}

#[test]
fn empty_input_renders_empty() {
    assert_eq!(hi(""), "");
}

#[test]
fn unsupported_language_is_an_error() {
    let err = registry().convert(42u32, "xx", None).unwrap_err();
    assert!(matches!(err, NumWordsError::UnsupportedLanguage { .. }));
    let message = err.to_string();
    assert!(message.contains("xx"));
    assert!(message.contains("en"));
    assert!(message.contains("hi"));
}

#[test]
fn packs_extend_the_registry() {
    use numwords_core::{persistence, LanguagePack};

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("en-x.pack");
    let pack = LanguagePack {
        code: "en-x".to_string(),
        name: "Pack English".to_string(),
        vocabulary: numwords_core::languages::en::vocabulary(),
    };
    persistence::save_pack(&pack, &path).unwrap();

    let mut registry = LanguageRegistry::with_builtin_languages();
    registry.load_pack_file(&path).unwrap();
    assert_eq!(registry.convert(42u32, "en-x", None).unwrap(), "forty two");
}
