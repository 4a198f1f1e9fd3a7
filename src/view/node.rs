//! Node - Backend-neutral Visual Tree
//!
//! Components render into this tree; the HTML, JSON and gpui backends
//! only translate it. Styling lives in the backends, the tree carries
//! structure, content and link targets.

use serde::Serialize;

use crate::domain::LayoutVariant;

/// Kind of contact affordance on the identity card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactKind {
    Location,
    Email,
    Github,
    Linkedin,
}

impl ContactKind {
    /// Leading glyph shown before the label
    pub fn glyph(&self) -> &'static str {
        match self {
            ContactKind::Location => "📍",
            ContactKind::Email => "📧",
            ContactKind::Github => "🐙",
            ContactKind::Linkedin => "💼",
        }
    }

    /// Whether the link leaves the page (new tab / system browser)
    pub fn is_external(&self) -> bool {
        matches!(self, ContactKind::Github | ContactKind::Linkedin)
    }

    /// Stable key for element ids
    pub fn key(&self) -> &'static str {
        match self {
            ContactKind::Location => "contact-location",
            ContactKind::Email => "contact-email",
            ContactKind::Github => "contact-github",
            ContactKind::Linkedin => "contact-linkedin",
        }
    }
}

/// Semantic role of a node
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Role {
    /// Full-bleed section with its background color, passed through verbatim
    Section { background: String },
    /// Width-limited content wrapper
    Container,
    /// Identity card frame
    Card,
    AvatarImage { src: String, alt: String },
    /// Generated avatar; `text` holds the glyph
    AvatarFallback,
    /// Textual region of the card
    Info,
    Name,
    Title,
    Description,
    /// Contact affordance row
    Contacts,
    /// One affordance; `text` holds the label
    Contact {
        contact: ContactKind,
        href: Option<String>,
    },
    /// Heading plus tag list, present only with technologies
    TechBlock,
    TechHeading,
    TagList { variant: LayoutVariant },
    /// One label; `text` holds it verbatim
    Chip,
}

/// A node of the rendered visual tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Node {
    #[serde(flatten)]
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

impl Node {
    /// Create an empty node
    pub fn new(role: Role) -> Self {
        Self {
            role,
            text: None,
            children: Vec::new(),
        }
    }

    /// Create a leaf node holding text
    pub fn text(role: Role, text: impl Into<String>) -> Self {
        Self {
            role,
            text: Some(text.into()),
            children: Vec::new(),
        }
    }

    /// Add a child node
    pub fn child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    /// Add several child nodes, keeping their order
    pub fn children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    /// Text content of this node, if any
    pub fn text_content(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// First node in pre-order matching the predicate (self included)
    pub fn find(&self, pred: impl Fn(&Node) -> bool + Copy) -> Option<&Node> {
        if pred(self) {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(pred))
    }

    /// All nodes in pre-order matching the predicate (self included)
    pub fn find_all(&self, pred: impl Fn(&Node) -> bool + Copy) -> Vec<&Node> {
        let mut found = Vec::new();
        self.collect(pred, &mut found);
        found
    }

    fn collect<'a>(&'a self, pred: impl Fn(&Node) -> bool + Copy, out: &mut Vec<&'a Node>) {
        if pred(self) {
            out.push(self);
        }
        for child in &self.children {
            child.collect(pred, out);
        }
    }

    /// Texts of all nodes with the given role, in document order
    pub fn labels_of(&self, role: &Role) -> Vec<&str> {
        self.find_all(|n| &n.role == role)
            .into_iter()
            .filter_map(Node::text_content)
            .collect()
    }

    /// First contact affordance of the given kind
    pub fn contact(&self, kind: ContactKind) -> Option<&Node> {
        self.find(|n| matches!(n.role, Role::Contact { contact, .. } if contact == kind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Node {
        Node::new(Role::Container)
            .child(Node::text(Role::Name, "Ana"))
            .child(
                Node::new(Role::TagList {
                    variant: LayoutVariant::Grid,
                })
                .children(["a", "b"].map(|l| Node::text(Role::Chip, l))),
            )
    }

    #[test]
    fn find_all_walks_in_pre_order() {
        let tree = sample();
        assert_eq!(tree.labels_of(&Role::Chip), vec!["a", "b"]);
        assert_eq!(tree.find_all(|_| true).len(), 5);
    }

    #[test]
    fn find_returns_none_when_missing() {
        assert!(sample().find(|n| n.role == Role::TechBlock).is_none());
        assert!(sample().contact(ContactKind::Email).is_none());
    }

    #[test]
    fn serializes_role_inline() {
        let json = serde_json::to_value(Node::text(Role::Name, "Ana")).expect("serializable");
        assert_eq!(json, serde_json::json!({ "kind": "name", "text": "Ana" }));
    }
}
