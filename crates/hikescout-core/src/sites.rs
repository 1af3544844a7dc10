use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// How a site's listings are laid out, and therefore how it is scraped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    /// Flat listing page; one extraction pass.
    ListPage,
    /// Calendar grid; find matching events, then open each one for details.
    CalendarDrilldown,
}

impl std::fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StrategyKind::ListPage => write!(f, "list_page"),
            StrategyKind::CalendarDrilldown => write!(f, "calendar_drilldown"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    pub company: String,
    pub url: String,
    #[serde(default = "default_strategy")]
    pub strategy: StrategyKind,
}

fn default_strategy() -> StrategyKind {
    StrategyKind::ListPage
}

impl SiteConfig {
    #[must_use]
    pub fn new(company: &str, url: &str, strategy: StrategyKind) -> Self {
        Self {
            company: company.to_string(),
            url: url.to_string(),
            strategy,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SitesFile {
    pub sites: Vec<SiteConfig>,
}

/// The operators scraped when no sites file is configured.
#[must_use]
pub fn default_sites() -> Vec<SiteConfig> {
    vec![
        SiteConfig::new(
            "Mona Trails Kenya",
            "https://monatrailskenya.wordpress.com/category/upcoming-hikes/",
            StrategyKind::ListPage,
        ),
        SiteConfig::new(
            "Matembezi Travel",
            "https://matembezitravel.com/expedition/",
            StrategyKind::ListPage,
        ),
        SiteConfig::new(
            "Avi Expeditions",
            "https://aviexpeditions.com/events/month",
            StrategyKind::CalendarDrilldown,
        ),
    ]
}

/// Load and validate the site list from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_sites(path: &Path) -> Result<SitesFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::SitesFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let sites_file: SitesFile =
        serde_yaml::from_str(&content).map_err(ConfigError::SitesFileParse)?;

    validate_sites(&sites_file)?;

    Ok(sites_file)
}

fn validate_sites(sites_file: &SitesFile) -> Result<(), ConfigError> {
    if sites_file.sites.is_empty() {
        return Err(ConfigError::Validation(
            "at least one site must be configured".to_string(),
        ));
    }

    let mut seen_companies = HashSet::new();

    for site in &sites_file.sites {
        if site.company.trim().is_empty() {
            return Err(ConfigError::Validation(
                "site company name must be non-empty".to_string(),
            ));
        }

        let url = site.url.trim();
        if !(url.starts_with("https://") || url.starts_with("http://")) {
            return Err(ConfigError::Validation(format!(
                "site '{}' has invalid url '{}'; must start with http:// or https://",
                site.company, site.url
            )));
        }

        if !seen_companies.insert(site.company.to_lowercase()) {
            return Err(ConfigError::Validation(format!(
                "duplicate site company: '{}'",
                site.company
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site(company: &str, url: &str) -> SiteConfig {
        SiteConfig::new(company, url, StrategyKind::ListPage)
    }

    #[test]
    fn default_sites_are_valid() {
        let sites_file = SitesFile {
            sites: default_sites(),
        };
        assert!(validate_sites(&sites_file).is_ok());
    }

    #[test]
    fn default_sites_use_calendar_only_for_avi() {
        let calendar: Vec<_> = default_sites()
            .into_iter()
            .filter(|s| s.strategy == StrategyKind::CalendarDrilldown)
            .map(|s| s.company)
            .collect();
        assert_eq!(calendar, vec!["Avi Expeditions".to_string()]);
    }

    #[test]
    fn validate_rejects_empty_company() {
        let sites_file = SitesFile {
            sites: vec![site("  ", "https://example.com")],
        };
        let err = validate_sites(&sites_file).unwrap_err();
        assert!(err.to_string().contains("non-empty"));
    }

    #[test]
    fn validate_rejects_non_http_url() {
        let sites_file = SitesFile {
            sites: vec![site("Trail Co", "ftp://example.com")],
        };
        let err = validate_sites(&sites_file).unwrap_err();
        assert!(err.to_string().contains("invalid url"));
    }

    #[test]
    fn validate_rejects_duplicate_company() {
        let sites_file = SitesFile {
            sites: vec![
                site("Trail Co", "https://a.example.com"),
                site("trail co", "https://b.example.com"),
            ],
        };
        let err = validate_sites(&sites_file).unwrap_err();
        assert!(err.to_string().contains("duplicate site company"));
    }

    #[test]
    fn validate_rejects_empty_list() {
        let sites_file = SitesFile { sites: vec![] };
        let err = validate_sites(&sites_file).unwrap_err();
        assert!(err.to_string().contains("at least one site"));
    }

    #[test]
    fn parses_yaml_with_default_strategy() {
        let yaml = r"
sites:
  - company: Trail Co
    url: https://trail.example.com/hikes
  - company: Calendar Co
    url: https://calendar.example.com/events
    strategy: calendar_drilldown
";
        let parsed: SitesFile = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(parsed.sites.len(), 2);
        assert_eq!(parsed.sites[0].strategy, StrategyKind::ListPage);
        assert_eq!(parsed.sites[1].strategy, StrategyKind::CalendarDrilldown);
    }

    #[test]
    fn load_sites_from_real_file() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("..")
            .join("..")
            .join("config")
            .join("sites.yaml");
        assert!(
            path.exists(),
            "sites.yaml missing at {path:?}; required for this test"
        );
        let result = load_sites(&path);
        assert!(result.is_ok(), "failed to load sites.yaml: {result:?}");
        assert_eq!(result.unwrap().sites, default_sites());
    }

    #[test]
    fn load_sites_missing_file_is_io_error() {
        let err = load_sites(Path::new("/nonexistent/hikescout/sites.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::SitesFileIo { .. }));
    }

    #[test]
    fn strategy_display() {
        assert_eq!(StrategyKind::ListPage.to_string(), "list_page");
        assert_eq!(
            StrategyKind::CalendarDrilldown.to_string(),
            "calendar_drilldown"
        );
    }
}
