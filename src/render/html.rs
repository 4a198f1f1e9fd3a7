//! HTML Backend
//!
//! Renders the visual tree to markup with maud. Text and attributes are
//! escaped at this boundary; the background color goes into the `style`
//! attribute as given.

use maud::{DOCTYPE, Markup, html};

use crate::domain::LayoutVariant;
use crate::i18n::Locale;
use crate::view::{Node, Role};

const CHIP_CLASSES: &str =
    "px-3 py-1 rounded-full text-sm font-medium transition-colors bg-gray-800 text-gray-200 hover:bg-gray-700 border border-gray-700";
const CONTACT_CLASSES: &str = "flex items-center gap-2";
const LINK_CLASSES: &str = "flex items-center gap-2 hover:text-white transition-colors";

/// Render a tree as an HTML fragment
pub fn to_html(node: &Node) -> String {
    markup(node).into_string()
}

/// Render a tree as a standalone HTML document
pub fn to_document(node: &Node, title: &str, locale: Locale) -> String {
    html! {
        (DOCTYPE)
        html lang=(locale.tag()) {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
            }
            body {
                (markup(node))
            }
        }
    }
    .into_string()
}

fn children(node: &Node) -> Markup {
    html! {
        @for child in &node.children {
            (markup(child))
        }
    }
}

fn markup(node: &Node) -> Markup {
    let text = node.text.as_deref().unwrap_or_default();

    match &node.role {
        Role::Section { background } => html! {
            section class="py-16 px-4" style={ "background-color: " (background) } {
                (children(node))
            }
        },
        Role::Container => html! {
            div class="container mx-auto max-w-6xl" { (children(node)) }
        },
        Role::Card => html! {
            div class="bg-gray-900 border border-gray-800 rounded-xl p-8 text-white" {
                div class="flex flex-col md:flex-row gap-6" { (children(node)) }
            }
        },
        Role::AvatarImage { src, alt } => html! {
            div class="flex justify-center md:justify-start" {
                img src=(src) alt=(alt)
                    class="w-32 h-32 rounded-full object-cover border-4 border-gray-700";
            }
        },
        Role::AvatarFallback => html! {
            div class="flex justify-center md:justify-start" {
                div class="w-32 h-32 rounded-full bg-gray-800 border-4 border-gray-700 flex items-center justify-center" {
                    span class="text-4xl font-bold text-gray-400" { (text) }
                }
            }
        },
        Role::Info => html! {
            div class="flex-1 text-center md:text-left" { (children(node)) }
        },
        Role::Name => html! {
            h1 class="text-3xl md:text-4xl font-bold mb-2 text-white" { (text) }
        },
        Role::Title => html! {
            h2 class="text-xl text-gray-300 mb-4 font-medium" { (text) }
        },
        Role::Description => html! {
            p class="text-gray-400 text-lg leading-relaxed mb-6" { (text) }
        },
        Role::Contacts => html! {
            div class="flex flex-col sm:flex-row gap-4 text-sm text-gray-400" { (children(node)) }
        },
        Role::Contact { contact, href } => match href {
            Some(href) => {
                let external = contact.is_external();
                html! {
                    a href=(href) class=(LINK_CLASSES)
                        target=[external.then_some("_blank")]
                        rel=[external.then_some("noopener noreferrer")] {
                        span { (contact.glyph()) }
                        (text)
                    }
                }
            }
            None => html! {
                span class=(CONTACT_CLASSES) {
                    span { (contact.glyph()) }
                    (text)
                }
            },
        },
        Role::TechBlock => html! {
            div class="mt-12" { (children(node)) }
        },
        Role::TechHeading => html! {
            h3 class="text-2xl font-bold text-white mb-6 text-center" { (text) }
        },
        Role::TagList { variant } => match variant {
            LayoutVariant::Inline => html! {
                div class="flex flex-wrap gap-2" {
                    @for chip in &node.children {
                        span class=(CHIP_CLASSES) { (chip.text.as_deref().unwrap_or_default()) }
                    }
                }
            },
            LayoutVariant::Grid => html! {
                div class="grid grid-cols-2 md:grid-cols-3 lg:grid-cols-4 gap-3" {
                    @for chip in &node.children {
                        div class={ (CHIP_CLASSES) " text-center" } {
                            (chip.text.as_deref().unwrap_or_default())
                        }
                    }
                }
            },
        },
        Role::Chip => html! {
            span class=(CHIP_CLASSES) { (text) }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{AboutSection, TagList};
    use crate::domain::{Identity, SectionConfig};

    fn section(identity: Identity, techs: &[&str]) -> String {
        let config = SectionConfig::new(identity, techs.iter().map(|s| s.to_string()).collect());
        to_html(&AboutSection::new(config).tree())
    }

    #[test]
    fn escapes_text_content() {
        let html = section(Identity::new("<script>x</script>", "t", "a & b"), &[]);
        assert!(html.contains("&lt;script&gt;x&lt;/script&gt;"));
        assert!(html.contains("a &amp; b"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn background_goes_into_style() {
        let html = section(Identity::new("a", "b", "c"), &[]);
        assert!(html.contains(r#"style="background-color: #0f172a""#));
    }

    #[test]
    fn external_links_open_in_new_tab() {
        let html = section(Identity::new("a", "b", "c").github("octocat").email("a@b.c"), &[]);
        assert!(html.contains(r#"href="https://github.com/octocat""#));
        assert!(html.contains(r#"target="_blank""#));
        assert!(html.contains(r#"rel="noopener noreferrer""#));
        assert!(html.contains(r#"href="mailto:a@b.c""#));
        // only the github link is external
        assert_eq!(html.matches("target=").count(), 1);
    }

    #[test]
    fn no_tech_heading_without_technologies() {
        let html = section(Identity::new("a", "b", "c"), &[]);
        assert!(!html.contains("<h3"));
        let html = section(Identity::new("a", "b", "c"), &["Rust"]);
        assert!(html.contains("Tecnologias que domino"));
    }

    #[test]
    fn tag_list_variants_use_their_containers() {
        let grid = to_html(&TagList::new(["Go", "Rust"]).tree());
        let inline = to_html(&TagList::new(["Go", "Rust"]).variant(LayoutVariant::Inline).tree());

        assert!(grid.contains("grid grid-cols-2 md:grid-cols-3 lg:grid-cols-4"));
        assert!(inline.contains("flex flex-wrap gap-2"));
        for html in [&grid, &inline] {
            let go = html.find(">Go<").expect("Go chip");
            let rust = html.find(">Rust<").expect("Rust chip");
            assert!(go < rust);
        }
    }

    #[test]
    fn document_declares_language() {
        let tree = TagList::new(["Rust"]).tree();
        let doc = to_document(&tree, "Sobre", Locale::PtBR);
        assert!(doc.starts_with("<!DOCTYPE html>"));
        assert!(doc.contains(r#"<html lang="pt-BR">"#));
        assert!(doc.contains("<title>Sobre</title>"));
    }
}
