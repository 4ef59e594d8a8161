use crate::application::ports::HotnessSource;
use crate::domain::entities::HotnessInput;
use crate::domain::value_objects::ItemId;
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

/// Likes and comments per post, held in memory for the hot view.
#[derive(Default)]
pub struct InMemoryHotnessStore {
    entries: RwLock<HashMap<ItemId, HotnessInput>>,
}

impl InMemoryHotnessStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, id: ItemId, input: HotnessInput) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(id, input);
    }

    /// Records a like; repeated likes from one account count once.
    pub fn add_like(&self, id: &ItemId, account: impl Into<String>) -> bool {
        let account = account.into();
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        let Some(entry) = entries.get_mut(id) else {
            return false;
        };
        if entry.likes.contains(&account) {
            return false;
        }
        entry.likes.push(account);
        true
    }

    pub fn add_comment(&self, id: &ItemId, comment_age: f64) -> bool {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        match entries.get_mut(id) {
            Some(entry) => {
                entry.comments.push(comment_age);
                true
            }
            None => false,
        }
    }
}

impl HotnessSource for InMemoryHotnessStore {
    fn hotness_input(&self, id: &ItemId) -> Option<HotnessInput> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(id)
            .cloned()
    }
}
