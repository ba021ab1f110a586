use crate::utils::*;
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub(crate) enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub const ATTR_NAME: &'static str = "data-theme";

    pub(crate) const fn scheme(self) -> &'static str {
        use Theme::*;
        match self {
            Light => "light",
            Dark => "dark",
        }
    }

    /// Next preference in the cycle system -> light -> dark.
    pub(crate) const fn cycle(current: Option<Self>) -> Option<Self> {
        match current {
            None => Some(Self::Light),
            Some(Self::Light) => Some(Self::Dark),
            Some(Self::Dark) => None,
        }
    }

    /// `None` preference falls back to the prefers-color-scheme media query.
    fn system_preference() -> Self {
        let prefers_dark = gloo::utils::window()
            .match_media("(prefers-color-scheme: dark)")
            .ok()
            .flatten()
            .map(|query| query.matches())
            .unwrap_or(false);
        if prefers_dark { Self::Dark } else { Self::Light }
    }

    fn update_html(theme: Option<Self>) {
        use gloo::utils::document;
        let html = document()
            .query_selector("html")
            .expect("query must be correct")
            .expect("must have html element");
        let scheme = theme.unwrap_or_else(Self::system_preference).scheme();
        log::debug!("theme-scheme: {}", scheme);
        if let Err(err) = html.set_attribute(Self::ATTR_NAME, scheme) {
            log::error!("failed to set theme: {:?}", err);
        }
    }

    pub(crate) fn init() {
        Self::update_html(LocalOrDefault::local_or_default());
    }

    pub(crate) fn apply(theme: Option<Self>) {
        theme.local_save();
        Self::update_html(theme);
    }
}

impl StorageKey for Theme {
    const KEY: &'static str = "espejito:theme";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_walks_system_light_dark_and_wraps() {
        let auto = None;
        let light = Theme::cycle(auto);
        let dark = Theme::cycle(light);

        assert_eq!(light, Some(Theme::Light));
        assert_eq!(dark, Some(Theme::Dark));
        assert_eq!(Theme::cycle(dark), None);
    }
}
