use crate::adapters::vocabulary::{
    APP_NAMES, COMMERCE_COLORS, COMMERCE_DEPARTMENTS, CREDIT_CARD_TYPES, DOMAIN_WORDS,
    HACKER_ABBREVIATIONS, HACKER_ADJECTIVES, HACKER_ING_VERBS, HACKER_NOUNS, HACKER_PHRASES,
    HACKER_VERBS, PRODUCT_ADJECTIVES, PRODUCT_MATERIALS, PRODUCT_NOUNS, TEAM_CREATURES,
};
use crate::domain::fields::{
    AddressField, AppField, CodeField, CommerceField, CompanyField, FinanceField, HackerField,
    InternetField, LoremUnit, NameField, PhoneField, TeamField,
};
use crate::domain::{Locale, SemanticDataProvider};
use chrono::{Datelike, Utc};
use fake::faker::address::raw::{
    BuildingNumber, CityName, CityPrefix, CitySuffix, CountryCode, CountryName, PostCode,
    SecondaryAddress, StateAbbr, StateName, StreetName, StreetSuffix, TimeZone, ZipCode,
};
use fake::faker::company::raw::{
    Bs, Buzzword, BuzzwordMiddle, BuzzwordTail, CompanyName, CompanySuffix,
};
use fake::faker::creditcard::raw::CreditCardNumber;
use fake::faker::internet::raw::{DomainSuffix, FreeEmail, IPv4, IPv6, MACAddress, SafeEmail, Username};
use fake::faker::job::raw::Title as JobTitle;
use fake::faker::lorem::raw::Word;
use fake::faker::name::raw::{FirstName, LastName, Name, Suffix, Title};
use fake::faker::phone_number::raw::{CellNumber, PhoneNumber};
use fake::locales::{EN, FR_FR, ZH_CN, ZH_TW};
use fake::Fake;
use rand::distributions::Alphanumeric;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;

/// Runs a `fake` raw faker with the locale's vocabulary.
macro_rules! localized {
    ($locale:expr, $rng:expr, $faker:ident) => {
        match $locale {
            Locale::En => $faker(EN).fake_with_rng::<String, _>(&mut *$rng),
            Locale::FrFr => $faker(FR_FR).fake_with_rng::<String, _>(&mut *$rng),
            Locale::ZhCn => $faker(ZH_CN).fake_with_rng::<String, _>(&mut *$rng),
            Locale::ZhTw => $faker(ZH_TW).fake_with_rng::<String, _>(&mut *$rng),
        }
    };
}

const BASE58: &[u8] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";
const PASSWORD_CHARS: &[u8] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789!@#$%^&*";

const DEFAULT_SENTENCE_WORDS: std::ops::RangeInclusive<usize> = 4..=10;
const DEFAULT_PARAGRAPH_SENTENCES: usize = 3;

/// Production [`SemanticDataProvider`] backed by the `fake` crate.
///
/// Values `fake` has no faker for are composed from [`vocabulary`](super::vocabulary)
/// tables and check-digit arithmetic.
#[derive(Debug, Clone, Copy, Default)]
pub struct FakeDataProvider {
    locale: Locale,
}

impl FakeDataProvider {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    fn pick(rng: &mut StdRng, words: &[&'static str]) -> &'static str {
        words.choose(rng).copied().unwrap_or_default()
    }

    fn digits(rng: &mut StdRng, count: usize) -> Vec<u32> {
        (0..count).map(|_| rng.gen_range(0..10)).collect()
    }

    fn render_digits(digits: &[u32]) -> String {
        digits
            .iter()
            .filter_map(|d| char::from_digit(*d, 10))
            .collect()
    }

    fn word(&self, rng: &mut StdRng) -> String {
        localized!(self.locale, rng, Word)
    }

    fn sentence(&self, words: usize, rng: &mut StdRng) -> String {
        let words: Vec<String> = (0..words).map(|_| self.word(rng)).collect();
        format!("{}.", capitalize(&words.join(" ")))
    }

    fn paragraph(&self, sentences: usize, rng: &mut StdRng) -> String {
        (0..sentences)
            .map(|_| {
                let words = rng.gen_range(DEFAULT_SENTENCE_WORDS);
                self.sentence(words, rng)
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn domain_name(&self, rng: &mut StdRng) -> String {
        let word = Self::pick(rng, DOMAIN_WORDS);
        let suffix = localized!(self.locale, rng, DomainSuffix);
        format!("{}.{}", word, suffix)
    }

    fn slug(&self, rng: &mut StdRng) -> String {
        let words: Vec<String> = (0..2).map(|_| self.word(rng).to_lowercase()).collect();
        words.join("-")
    }

    fn hacker_phrase(rng: &mut StdRng, template: &str) -> String {
        let mut out = String::with_capacity(template.len() * 2);
        let mut rest = template;

        while let Some(start) = rest.find('{') {
            out.push_str(&rest[..start]);
            let Some(len) = rest[start..].find('}') else {
                break;
            };
            let table = match &rest[start + 1..start + len] {
                "abbr" => HACKER_ABBREVIATIONS,
                "adj" => HACKER_ADJECTIVES,
                "noun" => HACKER_NOUNS,
                "verb" => HACKER_VERBS,
                _ => HACKER_ING_VERBS,
            };
            out.push_str(Self::pick(rng, table));
            rest = &rest[start + len + 1..];
        }

        out.push_str(rest);
        capitalize(&out)
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// EAN/GTIN check digit: weights 3,1,3,... from the rightmost data digit
pub fn ean_check_digit(digits: &[u32]) -> u32 {
    let sum: u32 = digits
        .iter()
        .rev()
        .enumerate()
        .map(|(i, d)| if i % 2 == 0 { d * 3 } else { *d })
        .sum();
    (10 - sum % 10) % 10
}

/// ISBN-10 check value in `0..=10`, where 10 is written `X`
pub fn isbn10_check_digit(digits: &[u32]) -> u32 {
    let sum: u32 = digits
        .iter()
        .zip((2..=10).rev())
        .map(|(d, weight)| d * weight)
        .sum();
    (11 - sum % 11) % 11
}

/// Chilean RUT verifier: `0`-`9` or `K`
pub fn rut_check_digit(mut number: u32) -> char {
    let mut sum = 0;
    let mut weight = 2;
    while number > 0 {
        sum += (number % 10) * weight;
        number /= 10;
        weight = if weight == 7 { 2 } else { weight + 1 };
    }
    match 11 - sum % 11 {
        11 => '0',
        10 => 'K',
        d => char::from_digit(d, 10).unwrap_or('0'),
    }
}

const ABN_WEIGHTS: [u32; 11] = [10, 1, 3, 5, 7, 9, 11, 13, 15, 17, 19];

/// Whether an 11-digit Australian Business Number passes the modulus-89 check
pub fn abn_is_valid(digits: &[u32]) -> bool {
    if digits.len() != 11 || digits[0] == 0 {
        return false;
    }
    let sum: u32 = digits
        .iter()
        .enumerate()
        .map(|(i, d)| {
            let d = if i == 0 { d - 1 } else { *d };
            d * ABN_WEIGHTS[i]
        })
        .sum();
    sum % 89 == 0
}

impl SemanticDataProvider for FakeDataProvider {
    fn locale(&self) -> Locale {
        self.locale
    }

    fn address(&self, field: AddressField, rng: &mut StdRng) -> String {
        let locale = self.locale;
        match field {
            AddressField::Full => {
                let building = localized!(locale, rng, BuildingNumber);
                let street = localized!(locale, rng, StreetName);
                let city = localized!(locale, rng, CityName);
                let state = localized!(locale, rng, StateAbbr);
                let zip = localized!(locale, rng, ZipCode);
                format!("{} {}, {} {} {}", building, street, city, state, zip)
            }
            AddressField::City => localized!(locale, rng, CityName),
            AddressField::Street => localized!(locale, rng, StreetName),
            AddressField::StreetAddress => {
                let building = localized!(locale, rng, BuildingNumber);
                let street = localized!(locale, rng, StreetName);
                format!("{} {}", building, street)
            }
            AddressField::SecondaryAddress => localized!(locale, rng, SecondaryAddress),
            AddressField::BuildingNumber => localized!(locale, rng, BuildingNumber),
            AddressField::PostCode => localized!(locale, rng, PostCode),
            AddressField::ZipCode => localized!(locale, rng, ZipCode),
            AddressField::TimeZone => localized!(locale, rng, TimeZone),
            AddressField::CityPrefix => localized!(locale, rng, CityPrefix),
            AddressField::CitySuffix => localized!(locale, rng, CitySuffix),
            AddressField::StreetSuffix => localized!(locale, rng, StreetSuffix),
            AddressField::State => localized!(locale, rng, StateName),
            AddressField::StateAbbr => localized!(locale, rng, StateAbbr),
            AddressField::Country => localized!(locale, rng, CountryName),
            AddressField::CountryCode => localized!(locale, rng, CountryCode),
            AddressField::Latitude => format!("{:.6}", rng.gen_range(-90.0..=90.0_f64)),
            AddressField::Longitude => format!("{:.6}", rng.gen_range(-180.0..=180.0_f64)),
        }
    }

    fn app(&self, field: AppField, rng: &mut StdRng) -> String {
        match field {
            AppField::Name => Self::pick(rng, APP_NAMES).to_string(),
            AppField::Version => format!(
                "{}.{}.{}",
                rng.gen_range(0..10),
                rng.gen_range(0..20),
                rng.gen_range(0..30)
            ),
            AppField::Author => localized!(self.locale, rng, Name),
        }
    }

    fn avatar(&self, rng: &mut StdRng) -> String {
        let slug: String = (0..12)
            .map(|_| char::from(rng.sample(Alphanumeric)).to_ascii_lowercase())
            .collect();
        format!("https://robohash.org/{}.png?size=300x300&set=set1", slug)
    }

    fn code(&self, field: CodeField, rng: &mut StdRng) -> String {
        match field {
            CodeField::Isbn10 => {
                let digits = Self::digits(rng, 9);
                let check = match isbn10_check_digit(&digits) {
                    10 => 'X',
                    d => char::from_digit(d, 10).unwrap_or('0'),
                };
                format!("{}{}", Self::render_digits(&digits), check)
            }
            CodeField::Isbn13 => {
                let mut digits = vec![9, 7, if rng.gen_bool(0.5) { 8 } else { 9 }];
                digits.extend(Self::digits(rng, 9));
                digits.push(ean_check_digit(&digits));
                Self::render_digits(&digits)
            }
            CodeField::Ean8 | CodeField::Ean13 => {
                let len = if field == CodeField::Ean8 { 7 } else { 12 };
                let mut digits = Self::digits(rng, len);
                digits.push(ean_check_digit(&digits));
                Self::render_digits(&digits)
            }
            CodeField::Abn => {
                let tail = Self::digits(rng, 9);
                let partial: u32 = tail.iter().zip(&ABN_WEIGHTS[2..]).map(|(d, w)| d * w).sum();
                // 10 * (first - 1) + second covers every residue modulo 89
                let lead = (89 - partial % 89) % 89;
                let mut digits = vec![lead / 10 + 1, lead % 10];
                digits.extend(tail);
                Self::render_digits(&digits)
            }
            CodeField::Rut => {
                let number = rng.gen_range(1_000_000..=25_000_000);
                format!("{}-{}", number, rut_check_digit(number))
            }
        }
    }

    fn commerce(&self, field: CommerceField, rng: &mut StdRng) -> String {
        match field {
            CommerceField::Color => Self::pick(rng, COMMERCE_COLORS).to_string(),
            CommerceField::Department => Self::pick(rng, COMMERCE_DEPARTMENTS).to_string(),
            CommerceField::ProductName => format!(
                "{} {} {}",
                Self::pick(rng, PRODUCT_ADJECTIVES),
                Self::pick(rng, PRODUCT_MATERIALS),
                Self::pick(rng, PRODUCT_NOUNS)
            ),
            CommerceField::Price => format!("{:.2}", rng.gen_range(1.0..1000.0_f64)),
        }
    }

    fn company(&self, field: CompanyField, rng: &mut StdRng) -> String {
        let locale = self.locale;
        match field {
            CompanyField::Name => localized!(locale, rng, CompanyName),
            CompanyField::Suffix => localized!(locale, rng, CompanySuffix),
            CompanyField::CatchPhrase => {
                let lead = localized!(locale, rng, Buzzword);
                let middle = localized!(locale, rng, BuzzwordMiddle);
                let tail = localized!(locale, rng, BuzzwordTail);
                format!("{} {} {}", lead, middle, tail)
            }
            CompanyField::Bs => localized!(locale, rng, Bs),
            CompanyField::Ein => format!(
                "{:02}-{:07}",
                rng.gen_range(1..100),
                rng.gen_range(0..10_000_000)
            ),
            CompanyField::DunsNumber => format!(
                "{:02}-{:03}-{:04}",
                rng.gen_range(0..100),
                rng.gen_range(0..1000),
                rng.gen_range(0..10_000)
            ),
            CompanyField::Logo => format!(
                "https://pigment.github.io/fake-logos/logos/medium/color/{}.png",
                rng.gen_range(1..=13)
            ),
        }
    }

    fn finance(&self, field: FinanceField, rng: &mut StdRng) -> String {
        match field {
            FinanceField::CreditCardNumber => localized!(self.locale, rng, CreditCardNumber),
            FinanceField::CreditCardType => Self::pick(rng, CREDIT_CARD_TYPES).to_string(),
            FinanceField::CreditCardExpiry => format!(
                "{}-{:02}-{:02}",
                Utc::now().year() + rng.gen_range(1..=5),
                rng.gen_range(1..=12),
                rng.gen_range(1..=28)
            ),
            FinanceField::BitcoinAddress => {
                let lead = if rng.gen_bool(0.5) { '1' } else { '3' };
                let len = rng.gen_range(25..=33);
                std::iter::once(lead)
                    .chain((0..len).map(|_| char::from(BASE58[rng.gen_range(0..BASE58.len())])))
                    .collect()
            }
        }
    }

    fn hacker(&self, field: HackerField, rng: &mut StdRng) -> String {
        match field {
            HackerField::SaySomethingSmart => {
                let template = Self::pick(rng, HACKER_PHRASES);
                Self::hacker_phrase(rng, template)
            }
            HackerField::Abbreviation => Self::pick(rng, HACKER_ABBREVIATIONS).to_string(),
            HackerField::Adjective => Self::pick(rng, HACKER_ADJECTIVES).to_string(),
            HackerField::Noun => Self::pick(rng, HACKER_NOUNS).to_string(),
            HackerField::Verb => Self::pick(rng, HACKER_VERBS).to_string(),
            HackerField::IngVerb => Self::pick(rng, HACKER_ING_VERBS).to_string(),
            HackerField::Phrases => HACKER_PHRASES
                .iter()
                .map(|template| Self::hacker_phrase(rng, template))
                .collect::<Vec<_>>()
                .join(" "),
        }
    }

    fn internet(&self, field: InternetField, rng: &mut StdRng) -> String {
        let locale = self.locale;
        match field {
            InternetField::Email => {
                let user = localized!(locale, rng, Username);
                format!("{}@{}", user, self.domain_name(rng))
            }
            InternetField::FreeEmail => localized!(locale, rng, FreeEmail),
            InternetField::SafeEmail => localized!(locale, rng, SafeEmail),
            InternetField::UserName => localized!(locale, rng, Username),
            InternetField::DomainName => self.domain_name(rng),
            InternetField::DomainWord => Self::pick(rng, DOMAIN_WORDS).to_string(),
            InternetField::DomainSuffix => localized!(locale, rng, DomainSuffix),
            InternetField::MacAddress => localized!(locale, rng, MACAddress),
            InternetField::Ipv4Address => localized!(locale, rng, IPv4),
            InternetField::Ipv6Address => localized!(locale, rng, IPv6),
            InternetField::Url => {
                let domain = self.domain_name(rng);
                format!("https://{}/{}", domain, self.slug(rng))
            }
            InternetField::Slug => self.slug(rng),
        }
    }

    fn password(&self, min_len: usize, max_len: usize, rng: &mut StdRng) -> String {
        let len = rng.gen_range(min_len..=max_len.max(min_len));
        (0..len)
            .map(|_| char::from(PASSWORD_CHARS[rng.gen_range(0..PASSWORD_CHARS.len())]))
            .collect()
    }

    fn lorem(&self, unit: LoremUnit, count: usize, rng: &mut StdRng) -> String {
        match unit {
            LoremUnit::Characters => (0..count)
                .map(|_| char::from(rng.sample(Alphanumeric)).to_ascii_lowercase())
                .collect(),
            LoremUnit::Words => (0..count)
                .map(|_| self.word(rng))
                .collect::<Vec<_>>()
                .join(" "),
            LoremUnit::Sentence => {
                let words = if count == 0 {
                    rng.gen_range(DEFAULT_SENTENCE_WORDS)
                } else {
                    count
                };
                self.sentence(words, rng)
            }
            LoremUnit::Sentences => (0..count)
                .map(|_| {
                    let words = rng.gen_range(DEFAULT_SENTENCE_WORDS);
                    self.sentence(words, rng)
                })
                .collect::<Vec<_>>()
                .join(" "),
            LoremUnit::Paragraph => {
                let sentences = if count == 0 {
                    DEFAULT_PARAGRAPH_SENTENCES
                } else {
                    count
                };
                self.paragraph(sentences, rng)
            }
            LoremUnit::Paragraphs => (0..count)
                .map(|_| self.paragraph(DEFAULT_PARAGRAPH_SENTENCES, rng))
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }

    fn name(&self, field: NameField, rng: &mut StdRng) -> String {
        let locale = self.locale;
        match field {
            NameField::Full => localized!(locale, rng, Name),
            NameField::First => localized!(locale, rng, FirstName),
            NameField::Last => localized!(locale, rng, LastName),
            NameField::Prefix => localized!(locale, rng, Title),
            NameField::Suffix => localized!(locale, rng, Suffix),
            NameField::Title => localized!(locale, rng, JobTitle),
        }
    }

    fn phone(&self, field: PhoneField, rng: &mut StdRng) -> String {
        match field {
            PhoneField::PhoneNumber => localized!(self.locale, rng, PhoneNumber),
            PhoneField::CellPhone => localized!(self.locale, rng, CellNumber),
            PhoneField::AreaCode | PhoneField::ExchangeCode => {
                format!("{}{:02}", rng.gen_range(2..10), rng.gen_range(0..100))
            }
        }
    }

    fn subscriber_number(&self, digits: usize, rng: &mut StdRng) -> String {
        Self::render_digits(&Self::digits(rng, digits))
    }

    fn team(&self, field: TeamField, rng: &mut StdRng) -> String {
        match field {
            TeamField::Name => {
                let state = localized!(self.locale, rng, StateName);
                let creature = capitalize(Self::pick(rng, TEAM_CREATURES));
                format!("{} {}", state, creature)
            }
            TeamField::Creature => Self::pick(rng, TEAM_CREATURES).to_string(),
            TeamField::State => localized!(self.locale, rng, StateName),
        }
    }
}
