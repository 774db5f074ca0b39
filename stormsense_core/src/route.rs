//! The two documents the site serves.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    PrivacyPolicy,
}

impl Page {
    pub const ALL: [Page; 2] = [Page::Home, Page::PrivacyPolicy];

    /// Absolute path used in links.
    pub fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::PrivacyPolicy => "/privacy-policy",
        }
    }

    /// Path segment for router matching (empty for the root).
    pub fn segment(self) -> &'static str {
        self.path().trim_start_matches('/')
    }

    /// Resolve a location path. Query strings and fragments must already be
    /// stripped; a single trailing slash is tolerated.
    pub fn from_path(path: &str) -> Option<Self> {
        let trimmed = match path {
            "/" => "/",
            other => other.strip_suffix('/').unwrap_or(other),
        };
        Self::ALL.into_iter().find(|page| page.path() == trimmed)
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Home => "StormSense - Advanced Weather Intelligence",
            Self::PrivacyPolicy => "Privacy Policy - StormSense",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_round_trip() {
        for page in Page::ALL {
            assert_eq!(Page::from_path(page.path()), Some(page));
        }
    }

    #[test]
    fn trailing_slash_is_tolerated() {
        assert_eq!(Page::from_path("/privacy-policy/"), Some(Page::PrivacyPolicy));
    }

    #[test]
    fn unknown_paths_do_not_resolve() {
        assert_eq!(Page::from_path("/privacy"), None);
        assert_eq!(Page::from_path("/privacy-policy/extra"), None);
        assert_eq!(Page::from_path(""), None);
    }

    #[test]
    fn segments_drop_leading_slash() {
        assert_eq!(Page::Home.segment(), "");
        assert_eq!(Page::PrivacyPolicy.segment(), "privacy-policy");
    }
}
