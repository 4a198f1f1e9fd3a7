//! AboutSection Component
//!
//! Top-level composition: background, identity card and, only when there is
//! at least one technology, a localized heading followed by the tag list.

use gpui::{App, IntoElement, RenderOnce, Window};

use crate::components::identity_card::IdentityCard;
use crate::components::tag_list::TagList;
use crate::domain::SectionConfig;
use crate::i18n::{Locale, t};
use crate::render::painter;
use crate::view::{Node, Role};

/// About Me section
#[derive(IntoElement)]
pub struct AboutSection {
    config: SectionConfig,
    locale: Locale,
}

impl AboutSection {
    /// Create a new section from its configuration
    pub fn new(config: SectionConfig) -> Self {
        Self {
            config,
            locale: Locale::default(),
        }
    }

    /// Set the locale used for the technology heading
    pub fn locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    fn tech_block(&self) -> Option<Node> {
        let technologies = &self.config.technologies;
        if technologies.is_empty() {
            return None;
        }

        let tags = TagList::new(technologies.iter().cloned()).variant(self.config.layout());
        Some(
            Node::new(Role::TechBlock)
                .child(Node::text(
                    Role::TechHeading,
                    t(self.locale, "tech-heading").to_string(),
                ))
                .child(tags.tree()),
        )
    }

    /// Render into the visual tree
    pub fn tree(&self) -> Node {
        let config = &self.config;
        tracing::debug!(
            identity = %config.identity.name,
            technologies = config.technologies.len(),
            layout = config.layout().as_str(),
            locale = self.locale.tag(),
            "rendering about section"
        );

        let card = IdentityCard::new(config.identity.clone());
        let container = Node::new(Role::Container)
            .child(card.tree())
            .children(self.tech_block());

        Node::new(Role::Section {
            background: config.background().to_string(),
        })
        .child(container)
    }
}

impl RenderOnce for AboutSection {
    fn render(self, window: &mut Window, _cx: &mut App) -> impl IntoElement {
        painter::paint(&self.tree(), f32::from(window.viewport_size().width))
    }
}
