pub mod base64_generator;
pub mod fake_provider;
pub mod format_registry;
pub mod html_generator;
pub mod random_source;
pub mod ranged_text;
pub mod time_sampler;
pub mod vocabulary;

#[cfg(test)]
mod stub_provider;

#[cfg(test)]
mod fake_provider_test;
#[cfg(test)]
mod ranged_text_test;
