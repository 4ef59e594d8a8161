use crate::domain::value_objects::ItemId;

/// Options handed to the item renderer for every post in the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    pub is_preview: bool,
    pub is_in_list: bool,
    pub expandable: bool,
    pub default_expanded: bool,
    /// Keywords to highlight; set only while a search term is active.
    pub search_keywords: Vec<String>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            is_preview: false,
            is_in_list: true,
            expandable: true,
            default_expanded: false,
            search_keywords: Vec::new(),
        }
    }
}

impl RenderOptions {
    pub fn highlighting(term: &str) -> Self {
        Self {
            search_keywords: vec![term.to_string()],
            ..Self::default()
        }
    }
}

/// Renders a single post. The feed never looks inside the artifact.
pub trait ItemRenderer: Send + Sync {
    type Artifact: Send + Sync;

    fn render(&self, id: &ItemId, options: &RenderOptions) -> Self::Artifact;
}
