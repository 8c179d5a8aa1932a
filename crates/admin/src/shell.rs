//! The admin shell: page header, "Back to Site" link and the tab bar.
//!
//! Each tab is its own route, so switching tabs loads a fresh page and every
//! manager re-fetches. Nothing is shared between tabs.

/// One of the admin tabs, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Projects,
    Clients,
    Contacts,
    Newsletter,
}

impl Tab {
    pub const ALL: [Self; 4] = [Self::Projects, Self::Clients, Self::Contacts, Self::Newsletter];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Projects => "Projects",
            Self::Clients => "Clients",
            Self::Contacts => "Contacts",
            Self::Newsletter => "Newsletter",
        }
    }

    #[must_use]
    pub const fn href(self) -> &'static str {
        match self {
            Self::Projects => "/projects",
            Self::Clients => "/clients",
            Self::Contacts => "/contacts",
            Self::Newsletter => "/newsletter",
        }
    }
}

/// A rendered tab link.
#[derive(Debug, Clone)]
pub struct TabLink {
    pub label: &'static str,
    pub href: &'static str,
    pub active: bool,
}

/// What `base.html` needs from every page.
#[derive(Debug, Clone)]
pub struct Shell {
    pub site_url: String,
    pub tabs: Vec<TabLink>,
}

impl Shell {
    #[must_use]
    pub fn new(active: Tab, site_url: &str) -> Self {
        Self {
            site_url: site_url.to_string(),
            tabs: Tab::ALL
                .iter()
                .map(|&tab| TabLink {
                    label: tab.label(),
                    href: tab.href(),
                    active: tab == active,
                })
                .collect(),
        }
    }
}
