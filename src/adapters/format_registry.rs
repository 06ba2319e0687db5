use crate::adapters::base64_generator::Base64Generator;
use crate::adapters::fake_provider::FakeDataProvider;
use crate::adapters::html_generator::{HtmlGenerator, DEFAULT_MAX_DEPTH};
use crate::adapters::random_source::RandomSource;
use crate::adapters::time_sampler::{TimeLayout, TimeSampler};
use crate::config::GeneratorSettings;
use crate::domain::fields::{
    AddressField, AppField, CodeField, CommerceField, CompanyField, FinanceField, HackerField,
    InternetField, LoremUnit, NameField, PhoneField, TeamField,
};
use crate::domain::{FormatError, FormatFamily, LengthConstraint, Locale, SemanticDataProvider};
use rand::Rng;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// Formats whose layout ignores both bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeFixed {
    Address(AddressField),
    App(AppField),
    Avatar,
    Code(CodeField),
    Commerce(CommerceField),
    Company(CompanyField),
    Finance(FinanceField),
    Hacker(HackerField),
    Image(&'static str),
    Internet(InternetField),
    /// A single lorem unit (one character, one word)
    Lorem(LoremUnit),
    Name(NameField),
    Phone(PhoneField),
    Team(TeamField),
    Time(TimeLayout),
    Uuid,
}

/// Formats whose serialized length must land in `[min, max]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LengthBound {
    Base64,
    Html,
    Password,
}

/// Formats that read `min` as a unit count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CountBound {
    Lorem(LoremUnit),
    SubscriberNumber,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatKind {
    ShapeFixed(ShapeFixed),
    LengthBound(LengthBound),
    CountBound(CountBound),
}

impl FormatKind {
    pub fn family(&self) -> FormatFamily {
        match self {
            Self::ShapeFixed(_) => FormatFamily::ShapeFixed,
            Self::LengthBound(_) => FormatFamily::LengthBound,
            Self::CountBound(_) => FormatFamily::CountBound,
        }
    }
}

/// Every registered key. Keys are case-sensitive and part of the public surface.
pub(crate) fn format_table() -> Vec<(&'static str, FormatKind)> {
    use FormatKind::{CountBound as C, LengthBound as L, ShapeFixed as S};
    use ShapeFixed::*;

    vec![
        // Address
        ("address", S(Address(AddressField::Full))),
        ("city", S(Address(AddressField::City))),
        ("street", S(Address(AddressField::Street))),
        ("streetAddress", S(Address(AddressField::StreetAddress))),
        ("secondaryAddress", S(Address(AddressField::SecondaryAddress))),
        ("buildingNumber", S(Address(AddressField::BuildingNumber))),
        ("postcode", S(Address(AddressField::PostCode))),
        ("postcodeByState", S(Address(AddressField::PostCode))),
        ("zipCode", S(Address(AddressField::ZipCode))),
        ("zipCodeByState", S(Address(AddressField::ZipCode))),
        ("timeZone", S(Address(AddressField::TimeZone))),
        ("cityPrefix", S(Address(AddressField::CityPrefix))),
        ("citySuffix", S(Address(AddressField::CitySuffix))),
        ("streetSuffix", S(Address(AddressField::StreetSuffix))),
        ("state", S(Address(AddressField::State))),
        ("stateAbbr", S(Address(AddressField::StateAbbr))),
        ("country", S(Address(AddressField::Country))),
        ("countryCode", S(Address(AddressField::CountryCode))),
        ("latitude", S(Address(AddressField::Latitude))),
        ("longitude", S(Address(AddressField::Longitude))),
        // App
        ("appName", S(App(AppField::Name))),
        ("appVersion", S(App(AppField::Version))),
        ("appAuthor", S(App(AppField::Author))),
        ("avatar", S(Avatar)),
        // Business and finance
        ("bitcoinAddress", S(Finance(FinanceField::BitcoinAddress))),
        ("creditCardNumber", S(Finance(FinanceField::CreditCardNumber))),
        ("creditCardType", S(Finance(FinanceField::CreditCardType))),
        ("creditCardExpiry", S(Finance(FinanceField::CreditCardExpiry))),
        ("creditCard", S(Finance(FinanceField::CreditCardNumber))),
        // Codes
        ("isbn10", S(Code(CodeField::Isbn10))),
        ("isbn13", S(Code(CodeField::Isbn13))),
        ("ean8", S(Code(CodeField::Ean8))),
        ("ean13", S(Code(CodeField::Ean13))),
        ("abn", S(Code(CodeField::Abn))),
        ("rut", S(Code(CodeField::Rut))),
        // Commerce
        ("color", S(Commerce(CommerceField::Color))),
        ("department", S(Commerce(CommerceField::Department))),
        ("productName", S(Commerce(CommerceField::ProductName))),
        ("price", S(Commerce(CommerceField::Price))),
        // Company
        ("companyName", S(Company(CompanyField::Name))),
        ("companySuffix", S(Company(CompanyField::Suffix))),
        ("companyCatchPhrase", S(Company(CompanyField::CatchPhrase))),
        ("companyBs", S(Company(CompanyField::Bs))),
        ("Ein", S(Company(CompanyField::Ein))),
        ("DunsNumber", S(Company(CompanyField::DunsNumber))),
        ("Logo", S(Company(CompanyField::Logo))),
        // Time
        ("date", S(Time(TimeLayout::Date))),
        ("date-time", S(Time(TimeLayout::DateTime))),
        ("time", S(Time(TimeLayout::Time))),
        // Hacker
        ("saySomethingSmart", S(Hacker(HackerField::SaySomethingSmart))),
        ("abbreviation", S(Hacker(HackerField::Abbreviation))),
        ("adjective", S(Hacker(HackerField::Adjective))),
        ("noun", S(Hacker(HackerField::Noun))),
        ("verb", S(Hacker(HackerField::Verb))),
        ("ingVerb", S(Hacker(HackerField::IngVerb))),
        ("phrases", S(Hacker(HackerField::Phrases))),
        // Image
        ("imageUrl", S(Image("https://loremflickr.com/640/480"))),
        ("imageUrls", S(Image("https://picsum.photos/v2/list"))),
        // Internet
        ("email", S(Internet(InternetField::Email))),
        ("freeEmail", S(Internet(InternetField::FreeEmail))),
        ("safeEmail", S(Internet(InternetField::SafeEmail))),
        ("userName", S(Internet(InternetField::UserName))),
        ("password", L(LengthBound::Password)),
        ("domainName", S(Internet(InternetField::DomainName))),
        ("domainWord", S(Internet(InternetField::DomainWord))),
        ("domainSuffix", S(Internet(InternetField::DomainSuffix))),
        ("macAddress", S(Internet(InternetField::MacAddress))),
        ("ipv4Address", S(Internet(InternetField::Ipv4Address))),
        ("ipv6Address", S(Internet(InternetField::Ipv6Address))),
        ("url", S(Internet(InternetField::Url))),
        ("slug", S(Internet(InternetField::Slug))),
        ("hostname", S(Internet(InternetField::DomainName))),
        ("ipv4", S(Internet(InternetField::Ipv4Address))),
        ("ipv6", S(Internet(InternetField::Ipv6Address))),
        // Lorem
        ("character", S(Lorem(LoremUnit::Characters))),
        ("characters", C(CountBound::Lorem(LoremUnit::Characters))),
        ("word", S(Lorem(LoremUnit::Words))),
        ("words", C(CountBound::Lorem(LoremUnit::Words))),
        ("sentence", C(CountBound::Lorem(LoremUnit::Sentence))),
        ("sentences", C(CountBound::Lorem(LoremUnit::Sentences))),
        ("paragraph", C(CountBound::Lorem(LoremUnit::Paragraph))),
        ("paragraphs", C(CountBound::Lorem(LoremUnit::Paragraphs))),
        // Name
        ("name", S(Name(NameField::Full))),
        ("firstName", S(Name(NameField::First))),
        ("lastName", S(Name(NameField::Last))),
        ("prefix", S(Name(NameField::Prefix))),
        ("suffix", S(Name(NameField::Suffix))),
        ("title", S(Name(NameField::Title))),
        // Phone
        ("phoneNumber", S(Phone(PhoneField::PhoneNumber))),
        ("cellPhone", S(Phone(PhoneField::CellPhone))),
        ("areaCode", S(Phone(PhoneField::AreaCode))),
        ("exchangeCode", S(Phone(PhoneField::ExchangeCode))),
        ("subscriberNumber", C(CountBound::SubscriberNumber)),
        // Team
        ("team", S(Team(TeamField::Name))),
        ("teamCreature", S(Team(TeamField::Creature))),
        ("teamState", S(Team(TeamField::State))),
        // Identifiers and encoded payloads
        ("uuid", S(Uuid)),
        ("byte", L(LengthBound::Base64)),
        ("html", L(LengthBound::Html)),
    ]
}

/// Immutable mapping from format key to generator, built once and shared
/// read-only by every caller.
pub struct FormatRegistry {
    formats: HashMap<&'static str, FormatKind>,
    random: Arc<RandomSource>,
    provider: Arc<dyn SemanticDataProvider>,
    base64: Base64Generator,
    html: HtmlGenerator,
}

impl FormatRegistry {
    /// Builds a registry backed by the `fake` crate for `locale`.
    pub fn build(locale: Locale, random: Arc<RandomSource>) -> Self {
        Self::with_provider(
            Arc::new(FakeDataProvider::new(locale)),
            random,
            DEFAULT_MAX_DEPTH,
        )
    }

    pub fn from_settings(settings: &GeneratorSettings) -> Self {
        let random = Arc::new(RandomSource::from_seed(settings.seed));
        Self::with_provider(
            Arc::new(FakeDataProvider::new(settings.locale)),
            random,
            settings.html_max_depth,
        )
    }

    pub fn with_provider(
        provider: Arc<dyn SemanticDataProvider>,
        random: Arc<RandomSource>,
        html_max_depth: usize,
    ) -> Self {
        let table = format_table();
        let mut formats = HashMap::with_capacity(table.len());
        for (key, kind) in table {
            let previous = formats.insert(key, kind);
            debug_assert!(previous.is_none(), "duplicate format key: {}", key);
        }

        debug!(
            "Format registry built with {} formats (locale: {}, html depth: {})",
            formats.len(),
            provider.locale(),
            html_max_depth
        );

        Self {
            formats,
            base64: Base64Generator::new(random.clone()),
            html: HtmlGenerator::with_max_depth(random.clone(), html_max_depth),
            random,
            provider,
        }
    }

    /// Looks up a generator. A miss is `None`, never an error; the caller owns
    /// the fallback policy.
    pub fn lookup(&self, key: &str) -> Option<FormatGenerator<'_>> {
        self.formats
            .get_key_value(key)
            .map(|(key, kind)| FormatGenerator {
                key: *key,
                kind: *kind,
                registry: self,
            })
    }

    /// Looks up `key` and generates one value, mapping a miss to
    /// [`FormatError::UnknownFormat`].
    pub fn generate(
        &self,
        key: &str,
        min_length: i64,
        max_length: i64,
    ) -> Result<String, FormatError> {
        self.lookup(key)
            .ok_or_else(|| FormatError::UnknownFormat(key.to_string()))?
            .generate(min_length, max_length)
    }

    pub fn family(&self, key: &str) -> Option<FormatFamily> {
        self.formats.get(key).map(FormatKind::family)
    }

    /// Registered keys in lexical order
    pub fn keys(&self) -> Vec<&'static str> {
        let mut keys: Vec<&'static str> = self.formats.keys().copied().collect();
        keys.sort_unstable();
        keys
    }

    pub fn len(&self) -> usize {
        self.formats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.formats.is_empty()
    }

    pub fn locale(&self) -> Locale {
        self.provider.locale()
    }

    pub fn html_max_depth(&self) -> usize {
        self.html.max_depth()
    }

    fn run(&self, kind: FormatKind, constraint: LengthConstraint) -> Result<String, FormatError> {
        match kind {
            FormatKind::ShapeFixed(shape) => Ok(self.shape_fixed(shape)),
            FormatKind::LengthBound(LengthBound::Base64) => self.base64.generate_within(constraint),
            FormatKind::LengthBound(LengthBound::Html) => self.html.generate_within(constraint),
            FormatKind::LengthBound(LengthBound::Password) => Ok(self.random.with_rng(|rng| {
                self.provider
                    .password(constraint.min(), constraint.max(), rng)
            })),
            FormatKind::CountBound(CountBound::Lorem(unit)) => Ok(self
                .random
                .with_rng(|rng| self.provider.lorem(unit, constraint.min(), rng))),
            FormatKind::CountBound(CountBound::SubscriberNumber) => Ok(self
                .random
                .with_rng(|rng| self.provider.subscriber_number(constraint.min(), rng))),
        }
    }

    fn shape_fixed(&self, shape: ShapeFixed) -> String {
        let provider = self.provider.as_ref();
        self.random.with_rng(|rng| match shape {
            ShapeFixed::Address(field) => provider.address(field, rng),
            ShapeFixed::App(field) => provider.app(field, rng),
            ShapeFixed::Avatar => provider.avatar(rng),
            ShapeFixed::Code(field) => provider.code(field, rng),
            ShapeFixed::Commerce(field) => provider.commerce(field, rng),
            ShapeFixed::Company(field) => provider.company(field, rng),
            ShapeFixed::Finance(field) => provider.finance(field, rng),
            ShapeFixed::Hacker(field) => provider.hacker(field, rng),
            ShapeFixed::Internet(field) => provider.internet(field, rng),
            ShapeFixed::Lorem(unit) => provider.lorem(unit, 1, rng),
            ShapeFixed::Name(field) => provider.name(field, rng),
            ShapeFixed::Phone(field) => provider.phone(field, rng),
            ShapeFixed::Team(field) => provider.team(field, rng),
            ShapeFixed::Uuid => {
                let bytes: [u8; 16] = rng.gen();
                uuid::Builder::from_random_bytes(bytes)
                    .into_uuid()
                    .to_string()
            }
            ShapeFixed::Image(link) => link.to_string(),
            ShapeFixed::Time(layout) => TimeSampler::format(TimeSampler::sample_with(rng), layout),
        })
    }
}

impl std::fmt::Debug for FormatRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormatRegistry")
            .field("formats", &self.formats.len())
            .field("locale", &self.provider.locale())
            .field("html_max_depth", &self.html.max_depth())
            .finish()
    }
}

/// A registered generator bound to its registry.
#[derive(Clone, Copy)]
pub struct FormatGenerator<'a> {
    key: &'static str,
    kind: FormatKind,
    registry: &'a FormatRegistry,
}

impl FormatGenerator<'_> {
    pub fn key(&self) -> &'static str {
        self.key
    }

    pub fn kind(&self) -> FormatKind {
        self.kind
    }

    pub fn family(&self) -> FormatFamily {
        self.kind.family()
    }

    /// Generates one value. Bounds are validated for every family, including
    /// the ones that go on to ignore them.
    pub fn generate(&self, min_length: i64, max_length: i64) -> Result<String, FormatError> {
        LengthConstraint::new(min_length, max_length)
            .and_then(|constraint| self.registry.run(self.kind, constraint))
            .map_err(|err| {
                debug!(
                    "Generation failed for format '{}' with bounds [{}, {}]: {}",
                    self.key, min_length, max_length, err
                );
                err
            })
    }
}

impl std::fmt::Debug for FormatGenerator<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormatGenerator")
            .field("key", &self.key)
            .field("kind", &self.kind)
            .finish()
    }
}
