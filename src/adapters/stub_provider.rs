//! Deterministic provider for registry tests.

use crate::domain::fields::{
    AddressField, AppField, CodeField, CommerceField, CompanyField, FinanceField, HackerField,
    InternetField, LoremUnit, NameField, PhoneField, TeamField,
};
use crate::domain::{Locale, SemanticDataProvider};
use rand::rngs::StdRng;

/// Returns canned values that name the field they stand for, so tests can
/// check routing without depending on any vocabulary.
#[derive(Debug, Clone, Copy, Default)]
pub struct StubDataProvider;

impl SemanticDataProvider for StubDataProvider {
    fn locale(&self) -> Locale {
        Locale::En
    }

    fn address(&self, field: AddressField, _rng: &mut StdRng) -> String {
        format!("address:{:?}", field)
    }

    fn app(&self, field: AppField, _rng: &mut StdRng) -> String {
        format!("app:{:?}", field)
    }

    fn avatar(&self, _rng: &mut StdRng) -> String {
        "avatar".to_string()
    }

    fn code(&self, field: CodeField, _rng: &mut StdRng) -> String {
        format!("code:{:?}", field)
    }

    fn commerce(&self, field: CommerceField, _rng: &mut StdRng) -> String {
        format!("commerce:{:?}", field)
    }

    fn company(&self, field: CompanyField, _rng: &mut StdRng) -> String {
        format!("company:{:?}", field)
    }

    fn finance(&self, field: FinanceField, _rng: &mut StdRng) -> String {
        format!("finance:{:?}", field)
    }

    fn hacker(&self, field: HackerField, _rng: &mut StdRng) -> String {
        format!("hacker:{:?}", field)
    }

    fn internet(&self, field: InternetField, _rng: &mut StdRng) -> String {
        format!("internet:{:?}", field)
    }

    fn password(&self, min_len: usize, _max_len: usize, _rng: &mut StdRng) -> String {
        "p".repeat(min_len)
    }

    fn lorem(&self, unit: LoremUnit, count: usize, _rng: &mut StdRng) -> String {
        format!("lorem:{:?}:{}", unit, count)
    }

    fn name(&self, field: NameField, _rng: &mut StdRng) -> String {
        format!("name:{:?}", field)
    }

    fn phone(&self, field: PhoneField, _rng: &mut StdRng) -> String {
        format!("phone:{:?}", field)
    }

    fn subscriber_number(&self, digits: usize, _rng: &mut StdRng) -> String {
        "7".repeat(digits)
    }

    fn team(&self, field: TeamField, _rng: &mut StdRng) -> String {
        format!("team:{:?}", field)
    }
}
