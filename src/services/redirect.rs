//! Redirect view state
//!
//! Resolves a link id into one of three states and decides, once per id,
//! whether the visitor's platform gets an automatic navigation.

use tracing::{debug, trace};

use super::LinkRegistry;
use crate::storage::Link;
use crate::utils::Platform;

/// Custom scheme understood by the external player on iOS
pub const PLAYER_SCHEME: &str = "vlc://";

/// Rewrite `http(s)://host/path` as `vlc://host/path`.
pub fn player_locator(url: &str) -> String {
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url);
    format!("{}{}", PLAYER_SCHEME, rest)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    /// Hand the video to the external player via its custom scheme
    Player(String),
    /// Open the stored url directly and let the OS pick a handler
    Direct(String),
}

impl Navigation {
    pub fn for_player(link: &Link) -> Self {
        Navigation::Player(player_locator(&link.url))
    }

    pub fn direct(link: &Link) -> Self {
        Navigation::Direct(link.url.clone())
    }

    pub fn target(&self) -> &str {
        match self {
            Navigation::Player(target) | Navigation::Direct(target) => target,
        }
    }
}

/// Navigation fired automatically for a resolved link, if any
pub fn auto_navigation(platform: Platform, link: &Link) -> Option<Navigation> {
    match platform {
        Platform::Ios => Some(Navigation::for_player(link)),
        Platform::Android => Some(Navigation::direct(link)),
        Platform::Other => None,
    }
}

/// On-screen button reproducing one platform behaviour
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManualAction {
    pub label: &'static str,
    pub hint: &'static str,
    pub navigation: Navigation,
}

/// Both manual buttons, always offered regardless of detection
pub fn manual_actions(link: &Link) -> [ManualAction; 2] {
    [
        ManualAction {
            label: "Open with VLC",
            hint: "For iPhone / iPad",
            navigation: Navigation::for_player(link),
        },
        ManualAction {
            label: "Open with Player",
            hint: "For Android Devices",
            navigation: Navigation::direct(link),
        },
    ]
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState {
    /// Lookup not done yet; nothing has fired
    Pending,
    Resolved(Link),
    NotFound,
}

#[derive(Debug)]
pub struct RedirectView {
    id: Option<String>,
    state: ViewState,
}

impl Default for RedirectView {
    fn default() -> Self {
        Self::new()
    }
}

impl RedirectView {
    pub fn new() -> Self {
        Self {
            id: None,
            state: ViewState::Pending,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Resolve `id` and return the automatic navigation to perform.
    ///
    /// Calling again with the same id is a no-op returning `None`; a
    /// different id starts over from `Pending`.
    pub fn resolve(
        &mut self,
        id: &str,
        registry: &LinkRegistry,
        platform: Platform,
    ) -> Option<Navigation> {
        if self.id.as_deref() == Some(id) && self.state != ViewState::Pending {
            trace!("View for {} already resolved", id);
            return None;
        }

        self.id = Some(id.to_string());
        self.state = ViewState::Pending;

        match registry.get_by_id(id) {
            Some(link) => {
                let navigation = auto_navigation(platform, &link);
                debug!(
                    "Resolved link {} for platform {}: auto navigation {}",
                    id,
                    platform.as_str(),
                    navigation.is_some()
                );
                self.state = ViewState::Resolved(link);
                navigation
            }
            None => {
                debug!("Link not found: {}", id);
                self.state = ViewState::NotFound;
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryKvStore;
    use std::sync::Arc;

    fn registry_with(url: &str) -> (LinkRegistry, Link) {
        let registry = LinkRegistry::new(Arc::new(MemoryKvStore::new()));
        let link = registry.add("Clip", url).unwrap().unwrap();
        (registry, link)
    }

    #[test]
    fn test_player_locator_strips_scheme() {
        assert_eq!(player_locator("https://x.test/a.mp4"), "vlc://x.test/a.mp4");
        assert_eq!(player_locator("http://x.test/a.mp4"), "vlc://x.test/a.mp4");
        assert_eq!(player_locator("x.test/a.mp4"), "vlc://x.test/a.mp4");
        assert_eq!(player_locator("ftp://x.test/a"), "vlc://ftp://x.test/a");
    }

    #[test]
    fn test_starts_pending() {
        let view = RedirectView::new();
        assert_eq!(view.state(), &ViewState::Pending);
        assert_eq!(view.id(), None);
    }

    #[test]
    fn test_ios_gets_player_scheme() {
        let (registry, link) = registry_with("https://x.test/a.mp4");
        let mut view = RedirectView::new();
        let nav = view.resolve(&link.id, &registry, Platform::Ios);
        assert_eq!(nav, Some(Navigation::Player("vlc://x.test/a.mp4".into())));
        assert_eq!(view.state(), &ViewState::Resolved(link));
    }

    #[test]
    fn test_android_opens_url_directly() {
        let (registry, link) = registry_with("https://x.test/a.mp4");
        let mut view = RedirectView::new();
        let nav = view.resolve(&link.id, &registry, Platform::Android);
        assert_eq!(nav, Some(Navigation::Direct("https://x.test/a.mp4".into())));
    }

    #[test]
    fn test_desktop_has_no_auto_navigation_but_both_buttons() {
        let (registry, link) = registry_with("https://x.test/a.mp4");
        let mut view = RedirectView::new();
        assert_eq!(view.resolve(&link.id, &registry, Platform::Other), None);

        let ViewState::Resolved(resolved) = view.state() else {
            panic!("expected resolved state");
        };
        let [vlc, player] = manual_actions(resolved);
        assert_eq!(vlc.navigation.target(), "vlc://x.test/a.mp4");
        assert_eq!(player.navigation.target(), "https://x.test/a.mp4");
    }

    #[test]
    fn test_fires_once_per_id() {
        let (registry, link) = registry_with("https://x.test/a.mp4");
        let mut view = RedirectView::new();
        assert!(view.resolve(&link.id, &registry, Platform::Ios).is_some());
        assert!(view.resolve(&link.id, &registry, Platform::Ios).is_none());
    }

    #[test]
    fn test_new_id_resets() {
        let (registry, first) = registry_with("https://x.test/a.mp4");
        let second = registry.add("Other", "https://x.test/b.mp4").unwrap().unwrap();

        let mut view = RedirectView::new();
        view.resolve(&first.id, &registry, Platform::Android);
        let nav = view.resolve(&second.id, &registry, Platform::Android);
        assert_eq!(nav, Some(Navigation::Direct("https://x.test/b.mp4".into())));
        assert_eq!(view.id(), Some(second.id.as_str()));
    }

    #[test]
    fn test_unknown_id_is_not_found() {
        let (registry, _) = registry_with("https://x.test/a.mp4");
        let mut view = RedirectView::new();
        assert_eq!(view.resolve("nope", &registry, Platform::Ios), None);
        assert_eq!(view.state(), &ViewState::NotFound);
    }
}
