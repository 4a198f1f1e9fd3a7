//! Profile - Section Configuration Model
//!
//! Value types consumed by the About section components. Field names follow
//! the authoring tool's camelCase keys so configs round-trip unchanged.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_BACKGROUND_COLOR;

/// Technology chip arrangement
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum LayoutVariant {
    /// Fixed-column grid, each chip centered in its cell
    #[default]
    Grid,
    /// Single wrapping row
    Inline,
}

impl LayoutVariant {
    /// Wire name used in configs
    pub fn as_str(&self) -> &'static str {
        match self {
            LayoutVariant::Grid => "grid",
            LayoutVariant::Inline => "inline",
        }
    }
}

/// Who the section is about
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Identity {
    #[schemars(title = "Nome", description = "Seu nome completo")]
    pub name: String,

    #[schemars(title = "Título/Cargo", description = "Ex: Desenvolvedor Full Stack")]
    pub title: String,

    #[schemars(
        title = "Descrição",
        description = "Uma breve apresentação sobre você",
        extend("format" = "textarea")
    )]
    pub description: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(
        title = "Avatar",
        description = "URL da sua foto de perfil",
        extend("format" = "image-uri")
    )]
    pub avatar: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(title = "Localização", description = "Cidade onde você está")]
    pub location: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(title = "Email", description = "Seu email para contato")]
    pub email: Option<String>,

    /// Username only, not a URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(title = "GitHub", description = "Seu username do GitHub")]
    pub github: Option<String>,

    /// Username only, not a URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(title = "LinkedIn", description = "Seu username do LinkedIn")]
    pub linkedin: Option<String>,
}

impl Identity {
    /// Create an identity with the required fields only
    pub fn new(
        name: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            description: description.into(),
            ..Default::default()
        }
    }

    pub fn avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = Some(avatar.into());
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn github(mut self, github: impl Into<String>) -> Self {
        self.github = Some(github.into());
        self
    }

    pub fn linkedin(mut self, linkedin: impl Into<String>) -> Self {
        self.linkedin = Some(linkedin.into());
        self
    }
}

/// Full configuration of one About section
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
#[schemars(title = "About")]
pub struct SectionConfig {
    #[serde(flatten)]
    pub identity: Identity,

    /// Display order is significant; duplicates are kept
    #[schemars(title = "Tecnologias", description = "Lista das tecnologias que você domina")]
    pub technologies: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(
        title = "Estilo das Tecnologias",
        description = "Como as tecnologias serão exibidas"
    )]
    pub tech_display_style: Option<LayoutVariant>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(title = "Cor de Fundo", description = "Cor de fundo da seção")]
    pub background_color: Option<String>,
}

impl SectionConfig {
    /// Create a config with default layout and background
    pub fn new(identity: Identity, technologies: Vec<String>) -> Self {
        Self {
            identity,
            technologies,
            tech_display_style: None,
            background_color: None,
        }
    }

    pub fn tech_display_style(mut self, variant: LayoutVariant) -> Self {
        self.tech_display_style = Some(variant);
        self
    }

    pub fn background_color(mut self, color: impl Into<String>) -> Self {
        self.background_color = Some(color.into());
        self
    }

    /// Layout with the default applied
    pub fn layout(&self) -> LayoutVariant {
        self.tech_display_style.unwrap_or_default()
    }

    /// Background color with the default applied; any string passes through
    pub fn background(&self) -> &str {
        self.background_color
            .as_deref()
            .unwrap_or(DEFAULT_BACKGROUND_COLOR)
    }
}

/// Treat absent and empty values alike
pub fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
