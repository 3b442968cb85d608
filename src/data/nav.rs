use serde::{Deserialize, Serialize};

fn published() -> bool {
    true
}

/// Leaf navigation entry pointing at a single route.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct NavItem {
    pub text: String,
    pub link: String,

    /// Unpublished entries stay in the tree but never reach the
    /// generator. Replaces commenting entries out of the config.
    #[serde(default = "published")]
    pub published: bool,
}

/// Sidebar group with an ordered list of items. A group with a `link`
/// renders as a link itself, one without as a plain heading. Zero items
/// is legal and renders as a heading-only section.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct NavGroup {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default = "published")]
    pub published: bool,

    /// Serialized last so the TOML form keeps scalar keys ahead of the
    /// item tables.
    #[serde(default)]
    pub items: Vec<NavItem>,
}

/// The sidebar tree. Built once from the config file and read-only for
/// the lifetime of a build; group and item order is meaningful.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct NavTree(pub Vec<NavGroup>);

impl NavTree {
    pub fn published_groups(&self) -> impl Iterator<Item = &NavGroup> {
        self.0.iter().filter(|g| g.published)
    }

    /// Published items of published groups, in document order.
    pub fn flat_items(&self) -> impl Iterator<Item = &NavItem> {
        self.published_groups().flat_map(NavGroup::published_items)
    }

    /// Every link a published entry points at, group self-links included.
    pub fn targets(&self) -> Vec<&str> {
        let mut targets = Vec::new();

        for group in self.published_groups() {
            if let Some(link) = &group.link {
                targets.push(link.as_str());
            }
            for item in group.published_items() {
                targets.push(item.link.as_str());
            }
        }

        targets
    }
}

impl NavGroup {
    pub fn published_items(&self) -> impl Iterator<Item = &NavItem> {
        self.items.iter().filter(|i| i.published)
    }
}
