use std::time::Duration;

use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::configuration::PluginConfig;
use crate::inspection::domain::{
    BomComponentView, ComponentVersionView, OriginView, PagedView, ProjectVersionView, ProjectView,
    VulnerabilityView,
};
use crate::ports::outbound::ScanServiceClient;
use crate::shared::{PluginError, Result};

/// Scan service REST API client.
///
/// Implements the ScanServiceClient port over blocking HTTP: bearer-token
/// auth, request timeout, and offset/limit pagination that fully
/// materializes linked collections before returning them.
pub struct ScanHttpClient {
    client: Client,
    base_url: String,
    api_token: String,
}

impl ScanHttpClient {
    const PAGE_LIMIT: usize = 100;

    pub fn new(base_url: &str, api_token: &str, timeout_secs: u64) -> Result<ScanHttpClient> {
        Self::build(base_url, api_token, timeout_secs, false)
    }

    pub fn from_config(config: &PluginConfig) -> Result<ScanHttpClient> {
        let base_url = config.url.as_deref().unwrap_or_default();
        let api_token = config.api_token.as_deref().unwrap_or_default();
        Self::build(base_url, api_token, config.timeout_secs, config.trust_cert)
    }

    fn build(
        base_url: &str,
        api_token: &str,
        timeout_secs: u64,
        trust_cert: bool,
    ) -> Result<ScanHttpClient> {
        reqwest::Url::parse(base_url).map_err(|e| PluginError::InvalidServiceUrl {
            url: base_url.to_string(),
            details: e.to_string(),
        })?;

        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("artifactory-scan-plugin/{}", version);
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent(user_agent)
            .danger_accept_invalid_certs(trust_cert)
            .build()?;

        Ok(ScanHttpClient {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_token: api_token.to_string(),
        })
    }

    /// Performs one authenticated GET and deserializes the JSON body.
    fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        debug!(url, "GET");
        let response = self
            .client
            .get(url)
            .bearer_auth(&self.api_token)
            .send()
            .map_err(|e| PluginError::RemoteFetch {
                url: url.to_string(),
                details: e.to_string(),
            })?;

        if !response.status().is_success() {
            return Err(PluginError::RemoteFetch {
                url: url.to_string(),
                details: format!("status code {}", response.status()),
            }
            .into());
        }

        let body: T = response.json().map_err(|e| PluginError::RemoteFetch {
            url: url.to_string(),
            details: e.to_string(),
        })?;
        Ok(body)
    }

    /// Follows a paginated collection to the end and returns all items.
    fn fetch_all_pages<T: DeserializeOwned>(&self, url: &str) -> Result<Vec<T>> {
        let mut items: Vec<T> = Vec::new();
        let mut offset = 0;

        loop {
            let page: PagedView<T> = self.get_json(&paged_url(url, Self::PAGE_LIMIT, offset))?;
            let page_len = page.items.len();
            items.extend(page.items);

            if page_len < Self::PAGE_LIMIT || items.len() >= page.total_count {
                break;
            }
            offset += Self::PAGE_LIMIT;
        }

        Ok(items)
    }

    fn project_search_url(&self, project_name: &str) -> String {
        format!(
            "{}/api/projects?q=name:{}",
            self.base_url,
            urlencoding::encode(project_name)
        )
    }
}

impl ScanServiceClient for ScanHttpClient {
    fn find_project_version(
        &self,
        project_name: &str,
        version_name: &str,
    ) -> Result<Option<ProjectVersionView>> {
        // The search endpoint matches substrings; filter to the exact name.
        let projects: Vec<ProjectView> = self.fetch_all_pages(&self.project_search_url(project_name))?;
        let Some(project) = projects.into_iter().find(|p| p.name == project_name) else {
            return Ok(None);
        };

        let versions_url = match project.meta.first_link("versions") {
            Some(href) => href.to_string(),
            None => format!("{}/versions", project.meta.href),
        };
        let versions: Vec<ProjectVersionView> = self.fetch_all_pages(&versions_url)?;

        Ok(versions.into_iter().find(|v| v.version_name == version_name))
    }

    fn fetch_bom_components(
        &self,
        project_version: &ProjectVersionView,
    ) -> Result<Vec<BomComponentView>> {
        let components_url =
            project_version
                .components_link()
                .ok_or_else(|| PluginError::RemoteFetch {
                    url: project_version.meta.href.clone(),
                    details: "project version has no components link".to_string(),
                })?;
        self.fetch_all_pages(components_url)
    }

    fn fetch_component_version(&self, uri: &str) -> Result<ComponentVersionView> {
        self.get_json(uri)
    }

    fn fetch_origins(&self, component_version: &ComponentVersionView) -> Result<Vec<OriginView>> {
        match component_version.origins_link() {
            Some(origins_url) => self.fetch_all_pages(origins_url),
            None => Ok(Vec::new()),
        }
    }

    fn fetch_vulnerabilities(&self, vulnerabilities_url: &str) -> Result<Vec<VulnerabilityView>> {
        self.fetch_all_pages(vulnerabilities_url)
    }
}

/// Appends pagination parameters, respecting an existing query string.
fn paged_url(url: &str, limit: usize, offset: usize) -> String {
    let separator = if url.contains('?') { '&' } else { '?' };
    format!("{url}{separator}limit={limit}&offset={offset}")
}
