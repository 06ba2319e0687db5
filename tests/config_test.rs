use metis_formats::config::Settings;
use metis_formats::domain::Locale;
use metis_formats::FormatRegistry;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_load_toml_settings() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let root = temp_dir.path();

    let toml = r#"
[generator]
locale = "en"
seed = 42
html_max_depth = 3

[defaults]
min_length = 4
max_length = 12
"#;
    fs::write(root.join("metis-formats.toml"), toml)?;

    let settings = Settings::from_root(root.to_str().unwrap())?;

    assert_eq!(settings.generator.locale, Locale::En);
    assert_eq!(settings.generator.seed, Some(42));
    assert_eq!(settings.generator.html_max_depth, 3);
    assert_eq!(settings.defaults.min_length, 4);
    assert_eq!(settings.defaults.max_length, 12);

    Ok(())
}

#[test]
fn test_load_yaml_settings_with_partial_sections() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let root = temp_dir.path();

    let yaml = r#"
generator:
  locale: fr_fr
"#;
    fs::write(root.join("metis-formats.yaml"), yaml)?;

    let settings = Settings::from_root(root.to_str().unwrap())?;

    assert_eq!(settings.generator.locale, Locale::FrFr);
    assert_eq!(settings.generator.seed, None);
    assert_eq!(settings.generator.html_max_depth, 8);
    assert_eq!(settings.defaults.min_length, 8);
    assert_eq!(settings.defaults.max_length, 32);

    Ok(())
}

#[test]
fn test_missing_file_uses_defaults() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let settings = Settings::from_root(temp_dir.path().to_str().unwrap())?;
    assert_eq!(settings, Settings::default());
    Ok(())
}

#[test]
fn test_invalid_settings_are_rejected() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let root = temp_dir.path();

    let toml = r#"
[generator]
html_max_depth = 0

[defaults]
min_length = 20
max_length = 10
"#;
    fs::write(root.join("metis-formats.toml"), toml)?;

    let err = Settings::from_root(root.to_str().unwrap()).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("Configuration validation failed"));
    assert!(message.contains("generator.html_max_depth"));
    assert!(message.contains("defaults.min_length"));

    Ok(())
}

#[test]
fn test_unknown_locale_fails_to_load() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let root = temp_dir.path();
    fs::write(
        root.join("metis-formats.toml"),
        "[generator]\nlocale = \"ko_kr\"\n",
    )?;

    assert!(Settings::from_root(root.to_str().unwrap()).is_err());
    Ok(())
}

#[test]
fn test_seeded_settings_build_reproducible_registries() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let root = temp_dir.path();
    fs::write(
        root.join("metis-formats.toml"),
        "[generator]\nlocale = \"en\"\nseed = 7\n",
    )?;

    let settings = Settings::from_root(root.to_str().unwrap())?;
    let a = FormatRegistry::from_settings(&settings.generator);
    let b = FormatRegistry::from_settings(&settings.generator);

    for key in ["uuid", "city", "words", "html", "date"] {
        assert_eq!(a.generate(key, 20, 40)?, b.generate(key, 20, 40)?);
    }

    Ok(())
}
