//! Which dashboard and profile sections a role gets to see

use crate::models::Role;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum DashboardSection {
    MyProperties,
    AllProperties,
    Users,
    Inquiries,
    Wishlist,
}

impl DashboardSection {
    /// Tab identifier
    pub fn key(&self) -> &'static str {
        match self {
            DashboardSection::MyProperties => "properties",
            DashboardSection::AllProperties => "all-properties",
            DashboardSection::Users => "users",
            DashboardSection::Inquiries => "inquiries",
            DashboardSection::Wishlist => "wishlist",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum ProfileTab {
    Overview,
    Properties,
    Wishlist,
    Inquiries,
}

/// Sections enabled for one viewer
#[derive(Debug, Clone, Serialize, PartialEq, Eq, Default)]
pub struct Sections {
    pub dashboard: Vec<DashboardSection>,
    pub default_tab: Option<DashboardSection>,
    pub profile: Vec<ProfileTab>,
    pub inquiries_label: &'static str,
}

impl Sections {
    pub fn shows(&self, section: DashboardSection) -> bool {
        self.dashboard.contains(&section)
    }
}

/// Sellers and agents may submit listings
pub fn can_list_properties(role: Role) -> bool {
    matches!(role, Role::Seller | Role::Agent)
}

/// `None` means the profile has not loaded yet, so nothing is shown
pub fn sections_for(role: Option<Role>) -> Sections {
    let Some(role) = role else {
        return Sections::default();
    };

    let dashboard = match role {
        Role::Buyer => vec![DashboardSection::Inquiries, DashboardSection::Wishlist],
        Role::Seller | Role::Agent => {
            vec![DashboardSection::MyProperties, DashboardSection::Inquiries]
        }
        Role::Admin => vec![
            DashboardSection::AllProperties,
            DashboardSection::Users,
            DashboardSection::Inquiries,
        ],
    };
    let default_tab = dashboard.first().copied();

    let mut profile = vec![ProfileTab::Overview];
    if can_list_properties(role) {
        profile.push(ProfileTab::Properties);
    }
    profile.extend([ProfileTab::Wishlist, ProfileTab::Inquiries]);

    let inquiries_label = if role == Role::Buyer {
        "My Inquiries"
    } else {
        "Inquiries Received"
    };

    Sections {
        dashboard,
        default_tab,
        profile,
        inquiries_label,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nothing_before_profile_loads() {
        let sections = sections_for(None);
        assert!(sections.dashboard.is_empty());
        assert!(sections.profile.is_empty());
        assert_eq!(sections.default_tab, None);
    }

    #[test]
    fn buyers_see_inquiries_and_wishlist() {
        let sections = sections_for(Some(Role::Buyer));
        assert_eq!(sections.default_tab, Some(DashboardSection::Inquiries));
        assert!(sections.shows(DashboardSection::Wishlist));
        assert!(!sections.shows(DashboardSection::MyProperties));
        assert!(!sections.profile.contains(&ProfileTab::Properties));
        assert_eq!(sections.inquiries_label, "My Inquiries");
    }

    #[test]
    fn listers_default_to_their_properties() {
        for role in [Role::Seller, Role::Agent] {
            let sections = sections_for(Some(role));
            assert_eq!(sections.default_tab.map(|s| s.key()), Some("properties"));
            assert!(sections.profile.contains(&ProfileTab::Properties));
            assert_eq!(sections.inquiries_label, "Inquiries Received");
            assert!(can_list_properties(role));
        }
    }

    #[test]
    fn admins_moderate_everything() {
        let sections = sections_for(Some(Role::Admin));
        assert_eq!(sections.default_tab.map(|s| s.key()), Some("all-properties"));
        assert!(sections.shows(DashboardSection::Users));
        assert!(!sections.shows(DashboardSection::Wishlist));
        assert!(!can_list_properties(Role::Admin));
    }
}
