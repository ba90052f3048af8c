// tests/integration_tests/config_test.rs
use super::common::{args_for_text, create_test_file};
use anyhow::Result;
use tempfile::TempDir;
use wordcloud::{Stopwords, generate, load_config, read_config_file};

#[test]
fn test_extra_stopwords_exclude_domain_words() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let log_file = create_test_file(
        temp_dir.path(),
        "test.txt",
        "warning error failure error resolved error",
    )?;
    let config_file = create_test_file(
        temp_dir.path(),
        "wordcloud.toml",
        "[stopwords]\nextra = [\"error\"]\n",
    )?;

    let mut args = args_for_text(&log_file.display().to_string());
    args.config = Some(config_file);

    let lines = generate(&args)?;
    assert!(
        !lines.iter().any(|l| l.word == "error"),
        "'error' should never be reported: {lines:?}"
    );
    assert!(lines.iter().any(|l| l.word == "failure"));
    Ok(())
}

#[test]
fn test_replace_discards_default_list() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_file = create_test_file(
        temp_dir.path(),
        "wordcloud.toml",
        "[stopwords]\nextra = [\"noise\"]\nreplace = true\n",
    )?;

    let config = read_config_file(&config_file)?;
    let stopwords = Stopwords::from_config(&config.stopwords);
    assert!(stopwords.contains("noise"));
    assert!(
        !stopwords.contains("the"),
        "default list should be discarded when replace = true"
    );
    Ok(())
}

#[test]
fn test_config_discovered_in_parent_directory() -> Result<()> {
    let temp_dir = TempDir::new()?;
    create_test_file(
        temp_dir.path(),
        "wordcloud.toml",
        "[stopwords]\nextra = [\"inherited\"]\n",
    )?;
    let nested = temp_dir.path().join("a/b");
    std::fs::create_dir_all(&nested)?;

    let config = load_config(&nested)?;
    assert_eq!(config.stopwords.extra, vec!["inherited"]);
    Ok(())
}

#[test]
fn test_invalid_config_file_is_an_error() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_file = create_test_file(temp_dir.path(), "wordcloud.toml", "stopwords = 5")?;

    assert!(read_config_file(&config_file).is_err());
    Ok(())
}
