use serde::Serialize;

use super::route_for;

/// Source path of the generated error page. It is served for arbitrary
/// unknown URLs and must not claim a canonical identity.
pub const NOT_FOUND_PAGE: &str = "404.md";

/// A single head-tag descriptor in the shape the generator expects.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HeadTag {
    pub rel: &'static str,
    pub href: String,
}

/// Derives the canonical URL tag for a page, or `None` for the error
/// page. Pure function of its inputs; `hostname` carries the site base
/// already and no trailing slash.
pub fn derive_canonical(hostname: &str, page_path: &str) -> Option<HeadTag> {
    if page_path == NOT_FOUND_PAGE {
        return None;
    }
    let route = route_for(page_path);

    Some(HeadTag {
        rel: "canonical",
        href: format!("{hostname}/{route}"),
    })
}
