use std::path::{Path, PathBuf};

use globset::{Glob, GlobSet, GlobSetBuilder};
use miette::{Context, IntoDiagnostic, Result};
use serde::{Deserialize, Serialize};
use tokio::fs;

use crate::data::{NavItem, NavTree};

/// The whole `site.toml` surface. Constructed once per invocation and
/// never mutated afterwards.
#[derive(Clone, Debug, Deserialize)]
pub struct Config {
    pub site: Site,
    #[serde(default)]
    pub folders: Folders,
    #[serde(default)]
    pub theme: Theme,
    #[serde(default)]
    pub nav: Vec<NavItem>,
    #[serde(default)]
    pub sidebar: NavTree,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Site {
    pub title: String,
    pub description: String,

    /// Path prefix the site is served under.
    #[serde(default = "default_base")]
    pub base: String,

    /// Canonical and sitemap host, scheme included.
    pub hostname: String,

    /// Serve routes without file extensions.
    #[serde(default = "default_clean_urls")]
    pub clean_urls: bool,
}

impl Site {
    /// Hostname and base joined without a duplicate slash, the prefix
    /// every canonical URL starts from.
    pub fn canonical_base(&self) -> String {
        let host = self.hostname.trim_end_matches('/');
        let base = self.base.trim_matches('/');

        if base.is_empty() {
            host.to_owned()
        } else {
            format!("{host}/{base}")
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Folders {
    pub content: Option<PathBuf>,
    pub output: Option<PathBuf>,

    /// Content files exempt from orphan reporting
    #[serde(default)]
    pub ignore: Vec<Glob>,
}

impl Folders {
    pub fn content_dir(&self, base_path: &Path) -> PathBuf {
        base_path.join(self.content.clone().unwrap_or("docs".into()))
    }

    pub fn output_dir(&self, base_path: &Path) -> PathBuf {
        base_path.join(self.output.clone().unwrap_or("dist".into()))
    }

    pub fn ignore_set(&self) -> Result<GlobSet> {
        let mut builder = GlobSetBuilder::new();
        self.ignore.iter().fold(&mut builder, |b, g| b.add(g.clone()));

        builder.build().into_diagnostic()
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Theme {
    pub logo: Option<String>,
    #[serde(default)]
    pub search: SearchProvider,
    #[serde(default)]
    pub social_links: Vec<SocialLink>,
}

#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SearchProvider {
    #[default]
    Local,
    Algolia,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct SocialLink {
    pub icon: String,
    pub link: String,
}

fn default_base() -> String {
    "/".to_owned()
}

fn default_clean_urls() -> bool {
    true
}

pub async fn read_config(dir: &Path) -> Result<Config> {
    let cfg_string = fs::read_to_string(dir.join("site.toml"))
        .await
        .into_diagnostic()
        .context("reading site.toml")?;
    toml::from_str(&cfg_string).into_diagnostic()
}
