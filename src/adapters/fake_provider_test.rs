use super::fake_provider::{
    abn_is_valid, ean_check_digit, isbn10_check_digit, rut_check_digit, FakeDataProvider,
};
use crate::domain::fields::{
    AddressField, CodeField, CompanyField, FinanceField, HackerField, InternetField, LoremUnit,
    PhoneField,
};
use crate::domain::{Locale, SemanticDataProvider};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn digits(text: &str) -> Vec<u32> {
    text.chars().filter_map(|c| c.to_digit(10)).collect()
}

#[test]
fn test_check_digit_reference_values() {
    // 0-306-40615-2
    assert_eq!(isbn10_check_digit(&[0, 3, 0, 6, 4, 0, 6, 1, 5]), 2);
    // 978-0-306-40615-7
    assert_eq!(ean_check_digit(&[9, 7, 8, 0, 3, 0, 6, 4, 0, 6, 1, 5]), 7);
    // EAN-8 9638-5074
    assert_eq!(ean_check_digit(&[9, 6, 3, 8, 5, 0, 7]), 4);
    assert_eq!(rut_check_digit(12_345_678), '5');
    assert!(abn_is_valid(&[5, 1, 8, 2, 4, 7, 5, 3, 5, 5, 6]));
}

#[test]
fn test_codes_carry_valid_check_digits() {
    let provider = FakeDataProvider::new(Locale::En);
    let mut rng = StdRng::seed_from_u64(41);

    for _ in 0..200 {
        let isbn10 = provider.code(CodeField::Isbn10, &mut rng);
        assert_eq!(isbn10.len(), 10);
        let body = digits(&isbn10[..9]);
        let expected = match isbn10_check_digit(&body) {
            10 => 'X',
            d => char::from_digit(d, 10).unwrap(),
        };
        assert_eq!(isbn10.chars().last(), Some(expected));

        for (field, len) in [(CodeField::Isbn13, 13), (CodeField::Ean13, 13), (CodeField::Ean8, 8)] {
            let code = digits(&provider.code(field, &mut rng));
            assert_eq!(code.len(), len);
            assert_eq!(ean_check_digit(&code[..len - 1]), code[len - 1]);
        }

        let abn = digits(&provider.code(CodeField::Abn, &mut rng));
        assert!(abn_is_valid(&abn), "invalid ABN {:?}", abn);

        let rut = provider.code(CodeField::Rut, &mut rng);
        let (number, check) = rut.split_once('-').unwrap();
        let number: u32 = number.parse().unwrap();
        assert_eq!(check.chars().next(), Some(rut_check_digit(number)));
    }
}

#[test]
fn test_lorem_counts_are_exact() {
    let provider = FakeDataProvider::new(Locale::En);
    let mut rng = StdRng::seed_from_u64(42);

    for count in [0, 1, 5, 12] {
        let characters = provider.lorem(LoremUnit::Characters, count, &mut rng);
        assert_eq!(characters.chars().count(), count);

        let words = provider.lorem(LoremUnit::Words, count, &mut rng);
        assert_eq!(words.split_whitespace().count(), count);

        let sentences = provider.lorem(LoremUnit::Sentences, count, &mut rng);
        assert_eq!(sentences.matches('.').count(), count);

        let paragraphs = provider.lorem(LoremUnit::Paragraphs, count, &mut rng);
        let paragraph_count = if paragraphs.is_empty() {
            0
        } else {
            paragraphs.lines().count()
        };
        assert_eq!(paragraph_count, count);
    }
}

#[test]
fn test_singular_lorem_units() {
    let provider = FakeDataProvider::new(Locale::En);
    let mut rng = StdRng::seed_from_u64(43);

    let sentence = provider.lorem(LoremUnit::Sentence, 6, &mut rng);
    assert_eq!(sentence.split_whitespace().count(), 6);
    assert!(sentence.ends_with('.'));

    let default_sentence = provider.lorem(LoremUnit::Sentence, 0, &mut rng);
    assert!((4..=10).contains(&default_sentence.split_whitespace().count()));

    let paragraph = provider.lorem(LoremUnit::Paragraph, 4, &mut rng);
    assert_eq!(paragraph.matches('.').count(), 4);
}

#[test]
fn test_subscriber_number_digits() {
    let provider = FakeDataProvider::new(Locale::ZhCn);
    let mut rng = StdRng::seed_from_u64(44);
    let number = provider.subscriber_number(7, &mut rng);
    assert_eq!(number.len(), 7);
    assert!(number.chars().all(|c| c.is_ascii_digit()));
    assert_eq!(provider.subscriber_number(0, &mut rng), "");
}

#[test]
fn test_password_length_window() {
    let provider = FakeDataProvider::new(Locale::En);
    let mut rng = StdRng::seed_from_u64(45);
    for _ in 0..100 {
        let password = provider.password(8, 16, &mut rng);
        assert!((8..=16).contains(&password.len()));
    }
    assert_eq!(provider.password(0, 0, &mut rng), "");
}

#[test]
fn test_phrases_returns_every_phrase() {
    let provider = FakeDataProvider::new(Locale::En);
    let mut rng = StdRng::seed_from_u64(46);
    let phrases = provider.hacker(HackerField::Phrases, &mut rng);
    let single = provider.hacker(HackerField::SaySomethingSmart, &mut rng);
    assert!(phrases.matches('!').count() > 1);
    assert_eq!(single.matches('!').count(), 1);
    assert!(!phrases.contains('{'));
}

#[test]
fn test_internet_identifiers() {
    let provider = FakeDataProvider::new(Locale::En);
    let mut rng = StdRng::seed_from_u64(47);

    let email = provider.internet(InternetField::Email, &mut rng);
    assert!(email.contains('@'));

    let ipv4 = provider.internet(InternetField::Ipv4Address, &mut rng);
    assert!(ipv4.parse::<std::net::Ipv4Addr>().is_ok(), "{}", ipv4);

    let ipv6 = provider.internet(InternetField::Ipv6Address, &mut rng);
    assert!(ipv6.parse::<std::net::Ipv6Addr>().is_ok(), "{}", ipv6);

    let url = provider.internet(InternetField::Url, &mut rng);
    assert!(url.starts_with("https://"));
}

#[test]
fn test_every_locale_produces_values() {
    for locale in Locale::ALL {
        let provider = FakeDataProvider::new(locale);
        let mut rng = StdRng::seed_from_u64(48);
        assert_eq!(provider.locale(), locale);
        assert!(!provider.address(AddressField::City, &mut rng).is_empty());
        assert!(!provider.company(CompanyField::Name, &mut rng).is_empty());
        assert!(!provider.phone(PhoneField::PhoneNumber, &mut rng).is_empty());
        assert!(!provider.finance(FinanceField::CreditCardNumber, &mut rng).is_empty());
    }
}

#[test]
fn test_coordinates_are_in_range() {
    let provider = FakeDataProvider::new(Locale::En);
    let mut rng = StdRng::seed_from_u64(49);
    let latitude: f64 = provider.address(AddressField::Latitude, &mut rng).parse().unwrap();
    let longitude: f64 = provider.address(AddressField::Longitude, &mut rng).parse().unwrap();
    assert!((-90.0..=90.0).contains(&latitude));
    assert!((-180.0..=180.0).contains(&longitude));
}
