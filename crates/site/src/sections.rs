//! Landing-page display sections for projects and client testimonials.
//!
//! Both sections render exactly the stored rows, newest first. When there
//! are none (an empty table or a failed fetch) they fall back to a fixed
//! placeholder set so the page never shows an empty block.

use realtrust_core::{Client, Project};

/// Shown for a project stored without an image.
pub const DEFAULT_PROJECT_IMAGE: &str =
    "https://images.unsplash.com/photo-1560518883-ce09059eeffa?w=400&auto=format&fit=crop";

const PROJECT_PLACEHOLDER_DESCRIPTION: &str = "Project design services";

const PROJECT_PLACEHOLDERS: [(&str, &str); 5] = [
    ("Consultation", "photo-1560518883-ce09059eeffa"),
    ("Design", "photo-1600596542815-ffad4c1539a9"),
    ("Marketing & Design", "photo-1600585154340-be6161a56a0c"),
    ("Consultation & Marketing", "photo-1512917774080-9991f1c4c750"),
    ("Consultation", "photo-1600607687939-ce8a6c25118c"),
];

const CLIENT_PLACEHOLDER_TESTIMONIAL: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit. Sed do eiusmod tempor incididunt ut labore et dolore magna aliqua.";

const CLIENT_PLACEHOLDERS: [(&str, &str, &str); 5] = [
    ("Sharon Smith", "CEO, Prime Estates", "photo-1494790108377-be9c29b29330"),
    ("Shijoy Kayak", "Lead Designer", "photo-1472099645785-5658abf4ff4e"),
    ("John Lappos", "CEO, Genesis", "photo-1507003211169-0a1dd7228f2d"),
    ("Marry Freeman", "Marketing Manager", "photo-1438761681033-6461ffad8d80"),
    ("Lucy", "Sales Director", "photo-1534528741775-53994a69daeb"),
];

fn unsplash(photo: &str, width: u32) -> String {
    format!("https://images.unsplash.com/{photo}?w={width}&auto=format&fit=crop")
}

/// A project as rendered on the landing page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectCard {
    pub name: String,
    pub description: String,
    pub image_url: String,
}

impl From<Project> for ProjectCard {
    fn from(project: Project) -> Self {
        Self {
            name: project.name,
            description: project.description,
            image_url: project
                .image_url
                .unwrap_or_else(|| DEFAULT_PROJECT_IMAGE.to_string()),
        }
    }
}

/// A testimonial as rendered on the landing page.
///
/// Without an image the template shows the client's initials instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientCard {
    pub name: String,
    pub designation: String,
    pub testimonial: String,
    pub image_url: Option<String>,
}

impl From<Client> for ClientCard {
    fn from(client: Client) -> Self {
        Self {
            name: client.name,
            designation: client.designation,
            testimonial: client.description,
            image_url: client.image_url,
        }
    }
}

/// Cards for the projects section.
#[must_use]
pub fn project_cards(projects: Vec<Project>) -> Vec<ProjectCard> {
    if projects.is_empty() {
        return placeholder_projects();
    }
    projects.into_iter().map(ProjectCard::from).collect()
}

/// Cards for the testimonials section.
#[must_use]
pub fn client_cards(clients: Vec<Client>) -> Vec<ClientCard> {
    if clients.is_empty() {
        return placeholder_clients();
    }
    clients.into_iter().map(ClientCard::from).collect()
}

#[must_use]
pub fn placeholder_projects() -> Vec<ProjectCard> {
    PROJECT_PLACEHOLDERS
        .iter()
        .map(|(name, photo)| ProjectCard {
            name: (*name).to_string(),
            description: PROJECT_PLACEHOLDER_DESCRIPTION.to_string(),
            image_url: unsplash(photo, 400),
        })
        .collect()
}

#[must_use]
pub fn placeholder_clients() -> Vec<ClientCard> {
    CLIENT_PLACEHOLDERS
        .iter()
        .map(|(name, designation, photo)| ClientCard {
            name: (*name).to_string(),
            designation: (*designation).to_string(),
            testimonial: CLIENT_PLACEHOLDER_TESTIMONIAL.to_string(),
            image_url: Some(unsplash(photo, 200)),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use realtrust_core::{ClientId, ProjectId};

    use super::*;

    fn stored_project(name: &str, image_url: Option<&str>) -> Project {
        Project {
            id: ProjectId::random(),
            name: name.to_string(),
            description: "Staging".to_string(),
            image_url: image_url.map(str::to_string),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_empty_projects_fall_back_to_placeholders() {
        let cards = project_cards(Vec::new());
        assert_eq!(cards, placeholder_projects());
        assert_eq!(cards.len(), 5);
        assert_eq!(cards[2].name, "Marketing & Design");
        assert!(cards.iter().all(|c| c.description == "Project design services"));
    }

    #[test]
    fn test_stored_projects_replace_placeholders() {
        let cards = project_cards(vec![
            stored_project("Lakeside Villa", Some("/media/projects/1.jpg")),
            stored_project("Loft", None),
        ]);
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].image_url, "/media/projects/1.jpg");
        assert_eq!(cards[1].image_url, DEFAULT_PROJECT_IMAGE);
    }

    #[test]
    fn test_clients_keep_missing_image() {
        let cards = client_cards(vec![Client {
            id: ClientId::random(),
            name: "Jane Doe".to_string(),
            designation: "Buyer".to_string(),
            description: "Smooth closing".to_string(),
            image_url: None,
            created_at: Utc::now(),
        }]);
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].image_url, None);
        assert_eq!(cards[0].testimonial, "Smooth closing");
    }

    #[test]
    fn test_placeholder_clients() {
        let cards = placeholder_clients();
        let names: Vec<&str> = cards.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(
            names,
            ["Sharon Smith", "Shijoy Kayak", "John Lappos", "Marry Freeman", "Lucy"]
        );
        assert!(cards.iter().all(|c| c.image_url.is_some()));
    }
}
