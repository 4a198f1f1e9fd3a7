//! IdentityCard Component
//!
//! Avatar (or generated glyph) beside name, title, description and the
//! optional contact affordances.

use gpui::{App, IntoElement, RenderOnce, Window};

use crate::constants::{FALLBACK_GLYPH, GITHUB_PROFILE_BASE, LINKEDIN_PROFILE_BASE};
use crate::domain::{Identity, present};
use crate::render::painter;
use crate::view::{ContactKind, Node, Role};

type AffordanceBuilder = fn(&str) -> Node;

/// Avatar substitute: the first character of the name, upper-cased.
/// Blank names get [`FALLBACK_GLYPH`].
pub fn fallback_glyph(name: &str) -> String {
    if name.trim().is_empty() {
        return FALLBACK_GLYPH.to_string();
    }
    name.chars()
        .next()
        .map(|first| first.to_uppercase().collect())
        .unwrap_or_else(|| FALLBACK_GLYPH.to_string())
}

fn location_affordance(location: &str) -> Node {
    Node::text(
        Role::Contact {
            contact: ContactKind::Location,
            href: None,
        },
        location,
    )
}

fn email_affordance(email: &str) -> Node {
    Node::text(
        Role::Contact {
            contact: ContactKind::Email,
            href: Some(format!("mailto:{email}")),
        },
        email,
    )
}

fn github_affordance(username: &str) -> Node {
    Node::text(
        Role::Contact {
            contact: ContactKind::Github,
            href: Some(format!("{GITHUB_PROFILE_BASE}{username}")),
        },
        "GitHub",
    )
}

fn linkedin_affordance(username: &str) -> Node {
    Node::text(
        Role::Contact {
            contact: ContactKind::Linkedin,
            href: Some(format!("{LINKEDIN_PROFILE_BASE}{username}")),
        },
        "LinkedIn",
    )
}

/// Identity card
#[derive(IntoElement)]
pub struct IdentityCard {
    identity: Identity,
}

impl IdentityCard {
    /// Create a new identity card
    pub fn new(identity: Identity) -> Self {
        Self { identity }
    }

    fn avatar(&self) -> Node {
        let identity = &self.identity;
        match present(&identity.avatar) {
            Some(src) => Node::new(Role::AvatarImage {
                src: src.to_string(),
                alt: identity.name.clone(),
            }),
            None => Node::text(Role::AvatarFallback, fallback_glyph(&identity.name)),
        }
    }

    fn contacts(&self) -> Node {
        let identity = &self.identity;
        let affordances: [(Option<&str>, AffordanceBuilder); 4] = [
            (present(&identity.location), location_affordance),
            (present(&identity.email), email_affordance),
            (present(&identity.github), github_affordance),
            (present(&identity.linkedin), linkedin_affordance),
        ];

        Node::new(Role::Contacts).children(
            affordances
                .into_iter()
                .filter_map(|(value, build)| value.map(build)),
        )
    }

    /// Render into the visual tree
    pub fn tree(&self) -> Node {
        let identity = &self.identity;
        Node::new(Role::Card).child(self.avatar()).child(
            Node::new(Role::Info)
                .child(Node::text(Role::Name, identity.name.as_str()))
                .child(Node::text(Role::Title, identity.title.as_str()))
                .child(Node::text(Role::Description, identity.description.as_str()))
                .child(self.contacts()),
        )
    }
}

impl RenderOnce for IdentityCard {
    fn render(self, window: &mut Window, _cx: &mut App) -> impl IntoElement {
        painter::paint(&self.tree(), f32::from(window.viewport_size().width))
    }
}
