//! Navigation between the three dashboard pages

use std::fmt;

use serde::{Deserialize, Deserializer};

/// A dashboard page, as chosen in the sidebar
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Page {
    #[default]
    Overview,
    Assessment,
    About,
}

impl Page {
    /// All pages in sidebar order
    pub const ALL: [Page; 3] = [Page::Overview, Page::Assessment, Page::About];

    /// Name shown in the page selector
    pub fn title(self) -> &'static str {
        match self {
            Page::Overview => "Dashboard Overview",
            Page::Assessment => "Risk Assessment",
            Page::About => "About Schistosomiasis",
        }
    }

    /// Short name accepted in the `page` query parameter
    pub fn slug(self) -> &'static str {
        match self {
            Page::Overview => "overview",
            Page::Assessment => "assessment",
            Page::About => "about",
        }
    }

    /// Resolve a selector value; unknown values select nothing
    pub fn parse(value: &str) -> Option<Page> {
        let value = value.trim();
        Page::ALL
            .into_iter()
            .find(|p| p.slug().eq_ignore_ascii_case(value) || p.title() == value)
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Query string of `GET /`
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    #[serde(default, deserialize_with = "lenient_page")]
    pub page: Option<Page>,
}

fn lenient_page<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Page>, D::Error> {
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(Page::parse))
}
