//! Typed fields requested from a [`SemanticDataProvider`](super::SemanticDataProvider).
//!
//! Each enum covers one domain of the provider port. The format registry maps
//! string keys onto these variants so that the provider never sees raw keys.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressField {
    Full,
    City,
    Street,
    StreetAddress,
    SecondaryAddress,
    BuildingNumber,
    PostCode,
    ZipCode,
    TimeZone,
    CityPrefix,
    CitySuffix,
    StreetSuffix,
    State,
    StateAbbr,
    Country,
    CountryCode,
    Latitude,
    Longitude,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppField {
    Name,
    Version,
    Author,
}

/// Product and identity codes that carry check digits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CodeField {
    Isbn10,
    Isbn13,
    Ean8,
    Ean13,
    Abn,
    Rut,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommerceField {
    Color,
    Department,
    ProductName,
    Price,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompanyField {
    Name,
    Suffix,
    CatchPhrase,
    Bs,
    Ein,
    DunsNumber,
    Logo,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FinanceField {
    CreditCardNumber,
    CreditCardType,
    CreditCardExpiry,
    BitcoinAddress,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HackerField {
    SaySomethingSmart,
    Abbreviation,
    Adjective,
    Noun,
    Verb,
    IngVerb,
    Phrases,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InternetField {
    Email,
    FreeEmail,
    SafeEmail,
    UserName,
    DomainName,
    DomainWord,
    DomainSuffix,
    MacAddress,
    Ipv4Address,
    Ipv6Address,
    Url,
    Slug,
}

/// Lorem text units. The count passed alongside decides how many units are
/// produced, or for the singular units how large the unit is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoremUnit {
    /// `count` alphanumeric characters
    Characters,
    /// `count` words separated by single spaces
    Words,
    /// One sentence of `count` words
    Sentence,
    /// `count` sentences separated by single spaces
    Sentences,
    /// One paragraph of `count` sentences
    Paragraph,
    /// `count` paragraphs separated by newlines
    Paragraphs,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NameField {
    Full,
    First,
    Last,
    Prefix,
    Suffix,
    Title,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhoneField {
    PhoneNumber,
    CellPhone,
    AreaCode,
    ExchangeCode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TeamField {
    Name,
    Creature,
    State,
}
