use crate::application::ports::{ItemRenderer, RenderOptions};
use crate::domain::value_objects::{ItemId, RenderKey, StableKey};
use std::collections::HashMap;
use std::sync::Arc;

/// 描画済みアイテムのキャッシュ
///
/// キーはアイテムの正規化エンコードの SHA-256。リスト差し替え時に `clear` する。
pub struct RenderCache<A> {
    entries: HashMap<RenderKey, Arc<A>>,
}

impl<A> RenderCache<A> {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// キャッシュ済みなら同じインスタンスを返し、なければ描画して保存する。
    /// 検索キーワードがある場合はハイライトのため毎回描画し、保存しない。
    pub fn get_or_render<R>(&mut self, item: &ItemId, keyword: Option<&str>, renderer: &R) -> Arc<A>
    where
        R: ItemRenderer<Artifact = A> + ?Sized,
    {
        if let Some(term) = keyword {
            return Arc::new(renderer.render(item, &RenderOptions::highlighting(term)));
        }

        let key = item.render_key();
        if let Some(artifact) = self.entries.get(&key) {
            return Arc::clone(artifact);
        }

        tracing::trace!(target: "feed::cache", item = %item, key = %key, "rendering item");
        let artifact = Arc::new(renderer.render(item, &RenderOptions::default()));
        self.entries.insert(key, Arc::clone(&artifact));
        artifact
    }

    /// IDでキャッシュを検索
    pub fn get(&self, item: &ItemId) -> Option<Arc<A>> {
        self.entries.get(&item.render_key()).cloned()
    }

    pub fn contains(&self, item: &ItemId) -> bool {
        self.entries.contains_key(&item.render_key())
    }

    /// キャッシュをクリア
    pub fn clear(&mut self) {
        if !self.entries.is_empty() {
            tracing::debug!(target: "feed::cache", entries = self.entries.len(), "clearing render cache");
        }
        self.entries.clear();
    }

    /// キャッシュサイズを取得
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<A> Default for RenderCache<A> {
    fn default() -> Self {
        Self::new()
    }
}
