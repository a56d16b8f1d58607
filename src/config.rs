//! API Configuration
//!
//! Where the catalog REST API lives. Fixed at build time.

/// Origin used when `CATALOG_API_BASE` is not set during the build
pub const DEFAULT_API_BASE: &str = "http://yellowfit.test/api";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url }
    }

    /// Read `CATALOG_API_BASE` from the build environment
    pub fn from_build_env() -> Self {
        Self::new(option_env!("CATALOG_API_BASE").unwrap_or(DEFAULT_API_BASE))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `{base}/{resource}`
    pub fn collection_url(&self, resource: &str) -> String {
        format!("{}/{}", self.base_url, resource)
    }

    /// `{base}/{resource}/{id}`
    pub fn member_url(&self, resource: &str, id: u32) -> String {
        format!("{}/{}/{}", self.base_url, resource, id)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}
