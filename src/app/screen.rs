// SPDX-License-Identifier: MPL-2.0
//! Screen enumeration for application navigation.

/// Screens the user can navigate between, mirroring the site's pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Home,
    Technology,
    Theory,
    Music,
    Contact,
}

impl Screen {
    /// Navigation order, as rendered in the navbar.
    pub const ALL: [Screen; 5] = [
        Screen::Home,
        Screen::Technology,
        Screen::Theory,
        Screen::Music,
        Screen::Contact,
    ];

    /// Translation key for this screen's navigation label.
    #[must_use]
    pub fn nav_key(self) -> &'static str {
        match self {
            Screen::Home => "nav.home",
            Screen::Technology => "nav.technology",
            Screen::Theory => "nav.theory",
            Screen::Music => "nav.music",
            Screen::Contact => "nav.contact",
        }
    }
}
