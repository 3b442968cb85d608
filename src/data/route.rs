const INDEX_DOC: &str = "index.md";
const MD_EXTENSION: &str = ".md";

/// Maps a page source path to the route it is served under.
///
/// A trailing `index.md` segment collapses to the directory route,
/// any other `.md` path loses its extension. Canonical URLs and
/// clean-url routing both go through this function so the two suffix
/// rules cannot drift apart.
pub fn route_for(page_path: &str) -> String {
    if let Some(dir) = strip_index_segment(page_path) {
        dir.to_owned()
    } else if let Some(stem) = page_path.strip_suffix(MD_EXTENSION) {
        stem.to_owned()
    } else {
        page_path.to_owned()
    }
}

/// The content document a route resolves to, relative to the content
/// directory. Inverse of [`route_for`].
pub fn doc_for_route(route: &str) -> String {
    if route.is_empty() || route.ends_with('/') {
        format!("{route}{INDEX_DOC}")
    } else {
        format!("{route}{MD_EXTENSION}")
    }
}

/// Strips a trailing `index.md` only when it is a whole path segment,
/// so `faq/my-index.md` keeps its stem.
fn strip_index_segment(page_path: &str) -> Option<&str> {
    let dir = page_path.strip_suffix(INDEX_DOC)?;

    if dir.is_empty() || dir.ends_with('/') {
        Some(dir)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_index_collapses_to_empty_route() {
        assert_eq!(route_for("index.md"), "");
    }

    #[test]
    fn nested_index_collapses_to_directory() {
        assert_eq!(route_for("faq/index.md"), "faq/");
    }

    #[test]
    fn markdown_extension_is_stripped() {
        assert_eq!(route_for("faq/github-pages.md"), "faq/github-pages");
    }

    #[test]
    fn index_suffix_inside_a_stem_is_not_a_segment() {
        assert_eq!(route_for("faq/my-index.md"), "faq/my-index");
    }

    #[test]
    fn non_markdown_paths_pass_through() {
        assert_eq!(route_for("logo.svg"), "logo.svg");
    }

    #[test]
    fn normalization_is_idempotent() {
        for path in ["index.md", "faq/index.md", "faq/github-pages.md", "faq/"] {
            let route = route_for(path);
            assert_eq!(route_for(&route), route);
        }
    }

    #[test]
    fn doc_for_route_inverts_route_for() {
        for doc in ["index.md", "faq/index.md", "faq/github-pages.md"] {
            assert_eq!(doc_for_route(&route_for(doc)), doc);
        }
    }
}
