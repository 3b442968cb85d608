use std::collections::BTreeSet;
use std::path::Path;

use miette::{bail, Result};

use crate::config::Config;
use crate::data::{doc_for_route, NOT_FOUND_PAGE};
use crate::scan::ContentScanner;

/// Root document. Reachable without navigation, like the error page.
const HOME_PAGE: &str = "index.md";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CheckReport {
    /// Published targets with no matching content document.
    pub missing: Vec<MissingTarget>,

    /// Content documents no published entry links to.
    pub orphans: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MissingTarget {
    pub link: String,
    pub doc: String,
}

/// Validates every published navigation target against the content
/// directory and reports documents the navigation never reaches.
/// Missing targets fail the check; orphans are only warned about.
#[tracing::instrument(level = "trace", skip_all)]
pub async fn check_site(base_path: &Path, cfg: &Config) -> Result<()> {
    let content_dir = cfg.folders.content_dir(base_path);
    let docs = ContentScanner::new(content_dir, cfg.folders.ignore_set()?)
        .scan()
        .await?
        .into_iter()
        .collect();

    let report = verify_targets(cfg, &docs);

    for orphan in &report.orphans {
        tracing::warn!("no navigation entry links to {orphan}");
    }
    if !report.missing.is_empty() {
        let listing = report
            .missing
            .iter()
            .map(|m| format!("  {} -> {}", m.link, m.doc))
            .collect::<Vec<_>>()
            .join("\n");
        bail!("navigation targets without a matching document:\n{listing}");
    }

    Ok(())
}

/// Pure core of the check: resolves each published target to the
/// document it expects and partitions the result.
pub fn verify_targets(cfg: &Config, docs: &BTreeSet<String>) -> CheckReport {
    let mut report = CheckReport::default();
    let mut linked = BTreeSet::new();

    for link in published_targets(cfg) {
        let Some(route) = site_route(link, &cfg.site.base) else {
            continue;
        };
        let doc = doc_for_route(route);

        if docs.contains(&doc) {
            linked.insert(doc);
        } else {
            report.missing.push(MissingTarget {
                link: link.to_owned(),
                doc,
            });
        }
    }

    report.orphans = docs
        .iter()
        .filter(|d| !linked.contains(*d))
        .filter(|d| *d != HOME_PAGE && *d != NOT_FOUND_PAGE)
        .cloned()
        .collect();

    report
}

fn published_targets(cfg: &Config) -> impl Iterator<Item = &str> {
    cfg.nav
        .iter()
        .filter(|i| i.published)
        .map(|i| i.link.as_str())
        .chain(cfg.sidebar.targets())
}

/// Strips the site base from an internal target. External links are
/// outside the content directory and not checked.
fn site_route<'a>(link: &'a str, base: &str) -> Option<&'a str> {
    if link.starts_with("http://") || link.starts_with("https://") {
        return None;
    }

    link.strip_prefix(base)
        .or_else(|| link.strip_prefix('/'))
        .or(Some(link))
}
