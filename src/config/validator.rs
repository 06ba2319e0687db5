use thiserror::Error;

use crate::config::{GeneratorSettings, LengthDefaults, Settings};

pub const MAX_HTML_DEPTH: usize = 64;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },

    #[error("Inconsistent bounds: {0}")]
    InconsistentBounds(String),
}

pub struct ConfigValidator;

impl ConfigValidator {
    pub fn validate(settings: &Settings) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Err(e) = Self::validate_generator(&settings.generator) {
            errors.extend(e);
        }

        if let Err(e) = Self::validate_defaults(&settings.defaults) {
            errors.extend(e);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn validate_generator(generator: &GeneratorSettings) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if !(1..=MAX_HTML_DEPTH).contains(&generator.html_max_depth) {
            errors.push(ValidationError::InvalidValue {
                field: "generator.html_max_depth".to_string(),
                reason: format!(
                    "must be between 1 and {}, got {}",
                    MAX_HTML_DEPTH, generator.html_max_depth
                ),
            });
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn validate_defaults(defaults: &LengthDefaults) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        for (field, value) in [
            ("defaults.min_length", defaults.min_length),
            ("defaults.max_length", defaults.max_length),
        ] {
            if value < 0 {
                errors.push(ValidationError::InvalidValue {
                    field: field.to_string(),
                    reason: format!("must not be negative, got {}", value),
                });
            }
        }

        if defaults.min_length > defaults.max_length {
            errors.push(ValidationError::InconsistentBounds(format!(
                "defaults.min_length ({}) exceeds defaults.max_length ({})",
                defaults.min_length, defaults.max_length
            )));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_config() {
        let result = ConfigValidator::validate(&Settings::default());
        assert!(result.is_ok());
    }

    #[test]
    fn test_html_depth_out_of_range() {
        for depth in [0, 65] {
            let settings = Settings {
                generator: GeneratorSettings {
                    html_max_depth: depth,
                    ..Default::default()
                },
                ..Default::default()
            };

            let errors = ConfigValidator::validate(&settings).unwrap_err();
            assert_eq!(errors.len(), 1);
            assert!(matches!(errors[0], ValidationError::InvalidValue { .. }));
        }
    }

    #[test]
    fn test_all_errors_are_reported() {
        let settings = Settings {
            generator: GeneratorSettings {
                html_max_depth: 0,
                ..Default::default()
            },
            defaults: LengthDefaults {
                min_length: -1,
                max_length: -5,
            },
        };

        let errors = ConfigValidator::validate(&settings).unwrap_err();
        assert_eq!(errors.len(), 4);
        assert!(errors
            .iter()
            .any(|e| matches!(e, ValidationError::InconsistentBounds(_))));
    }

    #[test]
    fn test_inverted_defaults() {
        let settings = Settings {
            defaults: LengthDefaults {
                min_length: 40,
                max_length: 10,
            },
            ..Default::default()
        };

        let errors = ConfigValidator::validate(&settings).unwrap_err();
        assert_eq!(errors.len(), 1);
    }
}
