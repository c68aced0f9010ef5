use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use brids::phone;

#[test]
fn landline_validation_accepts_valid_numbers() {
    assert!(phone::is_valid_landline("1928814933"));
    assert!(phone::is_valid_landline("1938814933"));
    assert!(phone::is_valid_landline("1948814933"));
    assert!(phone::is_valid_landline("1958814933"));
    assert!(phone::is_valid_landline("3333333333"));
}

#[test]
fn landline_validation_rejects_malformed_input() {
    assert!(!phone::is_valid_landline(""));
    assert!(!phone::is_valid_landline("193881"));
    assert!(!phone::is_valid_landline("(19)388149"));
    // nonzero DDD digits required
    assert!(!phone::is_valid_landline("0938814933"));
    assert!(!phone::is_valid_landline("1038814933"));
    // third digit must fall in 2..=5
    assert!(!phone::is_valid_landline("1998814933"));
    assert!(!phone::is_valid_landline("1918814933"));
    // mobile length is not a landline
    assert!(!phone::is_valid_landline("11994029275"));
}

#[test]
fn mobile_validation_accepts_valid_numbers() {
    assert!(phone::is_valid_mobile("11994029275"));
    assert!(phone::is_valid_mobile("99999999999"));
}

#[test]
fn mobile_validation_rejects_malformed_input() {
    assert!(!phone::is_valid_mobile(""));
    assert!(!phone::is_valid_mobile("119940"));
    assert!(!phone::is_valid_mobile("01994029275"));
    assert!(!phone::is_valid_mobile("90994029275"));
    // third digit must be 9
    assert!(!phone::is_valid_mobile("11594029275"));
    // landline length is not a mobile
    assert!(!phone::is_valid_mobile("1938814933"));
}

#[test]
fn is_valid_accepts_either_family() {
    assert!(phone::is_valid("1958814933"));
    assert!(phone::is_valid("11994029275"));
    assert!(!phone::is_valid("333333"));
    assert!(!phone::is_valid(""));
}

#[test]
fn remove_symbols_strips_only_the_designated_characters() {
    assert_eq!(phone::remove_symbols("(21) 99402-9275"), "21994029275");
    assert_eq!(phone::remove_symbols("+55 (21) 99402-9275"), "5521994029275");
    // anything outside the five designated symbols is preserved
    assert_eq!(phone::remove_symbols("(21) 99402-9275!"), "21994029275!");
    assert_eq!(phone::remove_symbols("abc"), "abc");
    assert_eq!(phone::remove_symbols(""), "");
}

#[test]
fn formats_mobile_numbers() {
    assert_eq!(
        phone::format("11994029275"),
        Some("(11)99402-9275".to_string())
    );
}

#[test]
fn formats_landline_numbers() {
    assert_eq!(phone::format("1635014415"), Some("(16)3501-4415".to_string()));
}

#[test]
fn format_rejects_invalid_numbers() {
    assert_eq!(phone::format("333333"), None);
    assert_eq!(phone::format(""), None);
    assert_eq!(phone::format("(11)99402-9275"), None);
}

#[test]
fn generated_mobiles_are_valid() {
    let mut rng = ChaCha8Rng::seed_from_u64(21);
    for _ in 0..50 {
        let number = phone::generate_mobile_with(&mut rng);
        assert!(phone::is_valid_mobile(&number), "{number}");
        assert_eq!(number.len(), 11);
    }
}

#[test]
fn generated_landlines_are_valid() {
    let mut rng = ChaCha8Rng::seed_from_u64(22);
    for _ in 0..50 {
        let number = phone::generate_landline_with(&mut rng);
        assert!(phone::is_valid_landline(&number), "{number}");
        assert_eq!(number.len(), 10);
    }
}

#[test]
fn generated_numbers_round_trip_through_format() {
    let mut rng = ChaCha8Rng::seed_from_u64(23);
    let mobile = phone::generate_mobile_with(&mut rng);
    let formatted = phone::format(&mobile).expect("generated mobile formats");
    assert_eq!(phone::remove_symbols(&formatted), mobile);

    let landline = phone::generate_landline_with(&mut rng);
    let formatted = phone::format(&landline).expect("generated landline formats");
    assert_eq!(phone::remove_symbols(&formatted), landline);
}

#[test]
fn process_rng_generators_are_valid() {
    assert!(phone::is_valid_mobile(&phone::generate_mobile()));
    assert!(phone::is_valid_landline(&phone::generate_landline()));
}
