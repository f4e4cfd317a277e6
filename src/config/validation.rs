use crate::config::types::{
    Config, ContentSelectors, CrawlerConfig, OutputConfig, SectionLayout, SiteConfig,
    UserAgentConfig,
};
use crate::ConfigError;
use scraper::Selector;
use url::Url;

const MAX_REQUEST_INTERVAL_MS: u64 = 60_000;
const MAX_REQUEST_TIMEOUT_SECS: u64 = 300;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_crawler_config(&config.crawler)?;
    validate_user_agent_config(&config.user_agent)?;
    validate_output_config(&config.output)?;
    validate_site_config(&config.site)?;
    Ok(())
}

/// Validates crawler configuration
fn validate_crawler_config(config: &CrawlerConfig) -> Result<(), ConfigError> {
    // A zero interval disables pacing and is allowed
    if config.request_interval_ms > MAX_REQUEST_INTERVAL_MS {
        return Err(ConfigError::Validation(format!(
            "request_interval_ms must be <= {}ms, got {}ms",
            MAX_REQUEST_INTERVAL_MS, config.request_interval_ms
        )));
    }

    if config.request_timeout_secs < 1 || config.request_timeout_secs > MAX_REQUEST_TIMEOUT_SECS {
        return Err(ConfigError::Validation(format!(
            "request_timeout_secs must be between 1 and {}, got {}",
            MAX_REQUEST_TIMEOUT_SECS, config.request_timeout_secs
        )));
    }

    Ok(())
}

/// Validates user agent configuration
fn validate_user_agent_config(config: &UserAgentConfig) -> Result<(), ConfigError> {
    if config.crawler_name.is_empty() {
        return Err(ConfigError::Validation(
            "crawler_name cannot be empty".to_string(),
        ));
    }

    if !config
        .crawler_name
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-')
    {
        return Err(ConfigError::Validation(format!(
            "crawler_name must contain only alphanumeric characters and hyphens, got '{}'",
            config.crawler_name
        )));
    }

    Url::parse(&config.contact_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid contact_url: {}", e)))?;

    validate_email(&config.contact_email)?;

    Ok(())
}

/// Validates output configuration
fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    if config.directory.is_empty() {
        return Err(ConfigError::Validation(
            "output directory cannot be empty".to_string(),
        ));
    }

    if config.file_name.is_empty() {
        return Err(ConfigError::Validation(
            "output file_name cannot be empty".to_string(),
        ));
    }

    if config.file_name.contains('/') || config.file_name.contains('\\') {
        return Err(ConfigError::Validation(format!(
            "output file_name must not contain path separators, got '{}'",
            config.file_name
        )));
    }

    Ok(())
}

/// Validates the site structure: root URL and every selector
fn validate_site_config(config: &SiteConfig) -> Result<(), ConfigError> {
    if config.name.is_empty() {
        return Err(ConfigError::Validation(
            "site name cannot be empty".to_string(),
        ));
    }

    let root = Url::parse(&config.root_url).map_err(|e| {
        ConfigError::InvalidUrl(format!("Invalid root_url '{}': {}", config.root_url, e))
    })?;

    if root.scheme() != "http" && root.scheme() != "https" {
        return Err(ConfigError::InvalidUrl(format!(
            "root_url '{}' must use HTTP or HTTPS",
            config.root_url
        )));
    }

    if let Some(selector) = &config.child_link_selector {
        validate_selector(selector)?;
    }

    validate_layout(&config.layout)?;
    validate_content_selectors(&config.content)?;

    Ok(())
}

fn validate_layout(layout: &SectionLayout) -> Result<(), ConfigError> {
    match layout {
        SectionLayout::PairedTables {
            header_selector,
            table_selector,
            link_selector,
        } => {
            validate_selector(header_selector)?;
            validate_selector(table_selector)?;
            validate_selector(link_selector)?;
        }
        SectionLayout::NamedSections {
            sections,
            link_selector,
        } => {
            if sections.is_empty() {
                return Err(ConfigError::Validation(
                    "named-sections layout must list at least one section".to_string(),
                ));
            }
            for section in sections {
                if section.trim().is_empty() {
                    return Err(ConfigError::Validation(
                        "section names cannot be empty".to_string(),
                    ));
                }
                validate_selector(&SectionLayout::named_section_selector(
                    section,
                    link_selector,
                ))?;
            }
        }
    }
    Ok(())
}

fn validate_content_selectors(content: &ContentSelectors) -> Result<(), ConfigError> {
    if let Some(required) = &content.required {
        validate_selector(required)?;
    }

    if content.paragraphs.is_empty() && content.code_blocks.is_empty() {
        return Err(ConfigError::Validation(
            "content must define at least one paragraph or code-block selector".to_string(),
        ));
    }

    for selector in content.paragraphs.iter().chain(&content.code_blocks) {
        validate_selector(selector)?;
    }

    Ok(())
}

/// Checks that a selector parses as CSS
fn validate_selector(selector: &str) -> Result<(), ConfigError> {
    Selector::parse(selector)
        .map(|_| ())
        .map_err(|e| ConfigError::InvalidSelector(format!("'{}': {:?}", selector, e)))
}

/// Basic email validation
fn validate_email(email: &str) -> Result<(), ConfigError> {
    if email.is_empty() {
        return Err(ConfigError::Validation(
            "contact_email cannot be empty".to_string(),
        ));
    }

    let parts: Vec<&str> = email.split('@').collect();
    if parts.len() != 2 || parts[0].is_empty() || parts[1].is_empty() {
        return Err(ConfigError::Validation(format!(
            "Invalid email format: '{}'",
            email
        )));
    }

    if !parts[1].contains('.') {
        return Err(ConfigError::Validation(format!(
            "Invalid email domain: '{}'",
            email
        )));
    }

    Ok(())
}
