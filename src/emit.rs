use std::path::Path;

use miette::{IntoDiagnostic, Result};
use serde_json::{json, Map, Value};

use crate::common::save_file;
use crate::config::Config;
use crate::data::{derive_canonical, NavGroup, NavItem, NavTree};
use crate::scan::ContentScanner;

/// Builds the configuration object handed to the generator. Unpublished
/// navigation entries are filtered out here; the `published` flag is an
/// authoring concern the generator never sees.
pub fn generator_config(cfg: &Config) -> Value {
    json!({
        "title": cfg.site.title,
        "description": cfg.site.description,
        "base": cfg.site.base,
        "cleanUrls": cfg.site.clean_urls,
        "sitemap": { "hostname": cfg.site.hostname },
        "themeConfig": {
            "logo": cfg.theme.logo,
            "search": { "provider": cfg.theme.search },
            "nav": nav_value(&cfg.nav),
            "socialLinks": cfg.theme.social_links,
            "sidebar": sidebar_value(&cfg.sidebar),
        },
    })
}

fn nav_value(items: &[NavItem]) -> Value {
    Value::Array(
        items
            .iter()
            .filter(|i| i.published)
            .map(item_value)
            .collect(),
    )
}

fn sidebar_value(tree: &NavTree) -> Value {
    Value::Array(tree.published_groups().map(group_value).collect())
}

fn group_value(group: &NavGroup) -> Value {
    let mut object = Map::new();
    object.insert("text".to_owned(), json!(group.text));
    if let Some(link) = &group.link {
        object.insert("link".to_owned(), json!(link));
    }
    object.insert(
        "items".to_owned(),
        Value::Array(group.published_items().map(item_value).collect()),
    );

    Value::Object(object)
}

fn item_value(item: &NavItem) -> Value {
    json!({ "text": item.text, "link": item.link })
}

/// One `<url>` entry per page that claims a canonical identity.
pub fn sitemap_xml(canonical_base: &str, pages: &[String]) -> String {
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );

    for page in pages {
        if let Some(tag) = derive_canonical(canonical_base, page) {
            xml.push_str(&format!("  <url><loc>{}</loc></url>\n", tag.href));
        }
    }
    xml.push_str("</urlset>\n");

    xml
}

/// Scans the content directory and writes `config.json` and
/// `sitemap.xml` to the output directory.
#[tracing::instrument(level = "trace", skip_all)]
pub async fn emit_site(base_path: &Path, cfg: &Config) -> Result<()> {
    let content_dir = cfg.folders.content_dir(base_path);
    let out_dir = cfg.folders.output_dir(base_path);
    let pages = ContentScanner::new(content_dir, cfg.folders.ignore_set()?)
        .scan()
        .await?;
    tracing::debug!("emitting artifacts for {} pages", pages.len());

    let config_json = serde_json::to_vec_pretty(&generator_config(cfg)).into_diagnostic()?;
    save_file(&out_dir.join("config.json"), &config_json).await?;

    let sitemap = sitemap_xml(&cfg.site.canonical_base(), &pages);
    save_file(&out_dir.join("sitemap.xml"), sitemap.as_bytes()).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Config {
        toml::from_str(
            r#"
            [site]
            title = "Vue Land FAQ"
            description = "An FAQ for Vue Land"
            hostname = "https://vue-land.github.io"

            [theme]
            logo = "/logo.svg"

            [[theme.social_links]]
            icon = "github"
            link = "https://github.com/vue-land/vue-land.github.io"

            [[nav]]
            text = "FAQ"
            link = "/faq/"

            [[sidebar]]
            text = "FAQ"
            link = "/faq/"

            [[sidebar.items]]
            text = "How should I learn Vue?"
            link = "/faq/learning-vue"

            [[sidebar.items]]
            text = "Release process"
            link = "/internals/releases"
            published = false

            [[sidebar]]
            text = "Internals"
            published = false
        "#,
        )
        .unwrap()
    }

    #[test]
    fn generator_config_has_the_expected_shape() {
        let value = generator_config(&config());
        assert_eq!(value["title"], "Vue Land FAQ");
        assert_eq!(value["base"], "/");
        assert_eq!(value["cleanUrls"], true);
        assert_eq!(value["sitemap"]["hostname"], "https://vue-land.github.io");
        assert_eq!(value["themeConfig"]["logo"], "/logo.svg");
        assert_eq!(value["themeConfig"]["search"]["provider"], "local");
        assert_eq!(value["themeConfig"]["socialLinks"][0]["icon"], "github");
        assert_eq!(value["themeConfig"]["nav"][0]["link"], "/faq/");
    }

    #[test]
    fn unpublished_entries_never_reach_the_generator() {
        let value = generator_config(&config());
        let sidebar = value["themeConfig"]["sidebar"].as_array().unwrap();
        assert_eq!(sidebar.len(), 1);

        let items = sidebar[0]["items"].as_array().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0]["link"], "/faq/learning-vue");
        assert!(items[0].get("published").is_none());
    }

    #[test]
    fn group_without_link_omits_the_field() {
        let mut cfg = config();
        cfg.sidebar.0[1].published = true;

        let value = generator_config(&cfg);
        let internals = &value["themeConfig"]["sidebar"][1];
        assert_eq!(internals["text"], "Internals");
        assert!(internals.get("link").is_none());
        assert_eq!(internals["items"], json!([]));
    }

    #[test]
    fn sitemap_lists_canonical_urls_and_skips_the_error_page() {
        let pages = vec![
            "404.md".to_owned(),
            "faq/index.md".to_owned(),
            "faq/learning-vue.md".to_owned(),
            "index.md".to_owned(),
        ];
        let xml = sitemap_xml("https://vue-land.github.io", &pages);

        assert!(xml.contains("<loc>https://vue-land.github.io/</loc>"));
        assert!(xml.contains("<loc>https://vue-land.github.io/faq/</loc>"));
        assert!(xml.contains("<loc>https://vue-land.github.io/faq/learning-vue</loc>"));
        assert!(!xml.contains("404"));
        assert_eq!(xml.matches("<url>").count(), 3);
    }
}
