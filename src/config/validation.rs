use crate::config::types::{Config, CrawlConfig, StoreConfig};
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_store_config(&config.store)?;
    validate_crawl_config(&config.crawl)?;
    Ok(())
}

/// Validates the document store configuration
fn validate_store_config(config: &StoreConfig) -> Result<(), ConfigError> {
    if config.database_path.is_empty() {
        return Err(ConfigError::Validation(
            "database_path cannot be empty".to_string(),
        ));
    }

    validate_collection_name(&config.pages_collection)?;
    validate_collection_name(&config.clean_collection)?;

    if config.pages_collection == config.clean_collection {
        return Err(ConfigError::Validation(format!(
            "pages_collection and clean_collection must differ, both are '{}'",
            config.pages_collection
        )));
    }

    Ok(())
}

/// Validates crawl behavior configuration
fn validate_crawl_config(config: &CrawlConfig) -> Result<(), ConfigError> {
    let url = Url::parse(&config.sitemap_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid sitemap_url: {}", e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::Validation(format!(
            "sitemap_url must use an HTTP or HTTPS scheme, got '{}'",
            url.scheme()
        )));
    }

    if config.request_delay_ms < 1 {
        return Err(ConfigError::Validation(format!(
            "request_delay_ms must be >= 1, got {}",
            config.request_delay_ms
        )));
    }

    if config.request_delay_ms > 600_000 {
        return Err(ConfigError::Validation(format!(
            "request_delay_ms must be <= 600000 (10 minutes), got {}",
            config.request_delay_ms
        )));
    }

    if config.recrawl_hours < 1 {
        return Err(ConfigError::Validation(format!(
            "recrawl_hours must be >= 1, got {}",
            config.recrawl_hours
        )));
    }

    Ok(())
}

/// Validates a collection name
///
/// Collection names become table names, so only alphanumeric characters
/// and underscores are accepted.
fn validate_collection_name(name: &str) -> Result<(), ConfigError> {
    if name.is_empty() {
        return Err(ConfigError::Validation(
            "collection name cannot be empty".to_string(),
        ));
    }

    if !name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_')
    {
        return Err(ConfigError::Validation(format!(
            "collection name must contain only ASCII alphanumeric characters and underscores, got '{}'",
            name
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> Config {
        Config {
            store: StoreConfig {
                database_path: "./gleaner.db".to_string(),
                pages_collection: "pages".to_string(),
                clean_collection: "pages_clean".to_string(),
            },
            crawl: CrawlConfig {
                sitemap_url: "https://example.com/sitemap.xml".to_string(),
                request_delay_ms: 500,
                recrawl_hours: 24,
            },
        }
    }

    #[test]
    fn test_validate_accepts_valid_config() {
        assert!(validate(&valid_config()).is_ok());
    }

    #[test]
    fn test_validate_collection_name() {
        assert!(validate_collection_name("pages").is_ok());
        assert!(validate_collection_name("pages_clean").is_ok());
        assert!(validate_collection_name("Pages2").is_ok());

        assert!(validate_collection_name("").is_err());
        assert!(validate_collection_name("pages-clean").is_err());
        assert!(validate_collection_name("pages clean").is_err());
        assert!(validate_collection_name("pages;drop").is_err());
    }

    #[test]
    fn test_validate_rejects_equal_collections() {
        let mut config = valid_config();
        config.store.clean_collection = config.store.pages_collection.clone();
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_validate_rejects_empty_database_path() {
        let mut config = valid_config();
        config.store.database_path = String::new();
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_validate_rejects_bad_sitemap_url() {
        let mut config = valid_config();
        config.crawl.sitemap_url = "not a url".to_string();
        assert!(matches!(
            validate(&config).unwrap_err(),
            ConfigError::InvalidUrl(_)
        ));

        config.crawl.sitemap_url = "ftp://example.com/sitemap.xml".to_string();
        assert!(matches!(
            validate(&config).unwrap_err(),
            ConfigError::Validation(_)
        ));
    }

    #[test]
    fn test_validate_delay_bounds() {
        let mut config = valid_config();
        config.crawl.request_delay_ms = 0;
        assert!(validate(&config).is_err());

        config.crawl.request_delay_ms = 600_001;
        assert!(validate(&config).is_err());

        config.crawl.request_delay_ms = 1;
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn test_validate_recrawl_hours() {
        let mut config = valid_config();
        config.crawl.recrawl_hours = 0;
        assert!(validate(&config).is_err());

        config.crawl.recrawl_hours = 1;
        assert!(validate(&config).is_ok());
    }
}
