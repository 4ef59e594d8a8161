use std::sync::atomic::{AtomicUsize, Ordering};

use devhub_feed::{ItemId, ItemRenderer, RenderOptions};

#[derive(Debug, Clone, PartialEq)]
pub struct RenderedPost {
    pub id: ItemId,
    pub keywords: Vec<String>,
    pub in_list: bool,
}

/// Renders posts as plain records and counts how often it was asked to.
#[derive(Default)]
pub struct RecordingRenderer {
    renders: AtomicUsize,
}

impl RecordingRenderer {
    pub fn render_count(&self) -> usize {
        self.renders.load(Ordering::SeqCst)
    }
}

impl ItemRenderer for RecordingRenderer {
    type Artifact = RenderedPost;

    fn render(&self, id: &ItemId, options: &RenderOptions) -> RenderedPost {
        self.renders.fetch_add(1, Ordering::SeqCst);
        RenderedPost {
            id: id.clone(),
            keywords: options.search_keywords.clone(),
            in_list: options.is_in_list,
        }
    }
}
