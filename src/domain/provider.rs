//! Port for locale-flavored atomic values

use crate::domain::fields::{
    AddressField, AppField, CodeField, CommerceField, CompanyField, FinanceField, HackerField,
    InternetField, LoremUnit, NameField, PhoneField, TeamField,
};
use crate::domain::Locale;
use rand::rngs::StdRng;

/// Supplies realistic atomic values for a configured locale.
///
/// Shape-fixed methods return a complete value with no length negotiation.
/// `lorem` and `subscriber_number` are count-aware and must return exactly the
/// requested number of units.
pub trait SemanticDataProvider: Send + Sync {
    fn locale(&self) -> Locale;

    fn address(&self, field: AddressField, rng: &mut StdRng) -> String;

    fn app(&self, field: AppField, rng: &mut StdRng) -> String;

    fn avatar(&self, rng: &mut StdRng) -> String;

    fn code(&self, field: CodeField, rng: &mut StdRng) -> String;

    fn commerce(&self, field: CommerceField, rng: &mut StdRng) -> String;

    fn company(&self, field: CompanyField, rng: &mut StdRng) -> String;

    fn finance(&self, field: FinanceField, rng: &mut StdRng) -> String;

    fn hacker(&self, field: HackerField, rng: &mut StdRng) -> String;

    fn internet(&self, field: InternetField, rng: &mut StdRng) -> String;

    /// Password whose character count lies in `[min_len, max_len]`
    fn password(&self, min_len: usize, max_len: usize, rng: &mut StdRng) -> String;

    fn lorem(&self, unit: LoremUnit, count: usize, rng: &mut StdRng) -> String;

    fn name(&self, field: NameField, rng: &mut StdRng) -> String;

    fn phone(&self, field: PhoneField, rng: &mut StdRng) -> String;

    /// Exactly `digits` decimal digits
    fn subscriber_number(&self, digits: usize, rng: &mut StdRng) -> String;

    fn team(&self, field: TeamField, rng: &mut StdRng) -> String;
}
