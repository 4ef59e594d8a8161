use crate::domain::entities::HotnessInput;
use crate::domain::value_objects::ItemId;

/// Supplies likes/comments for the posts being ranked in the hot view.
pub trait HotnessSource: Send + Sync {
    fn hotness_input(&self, id: &ItemId) -> Option<HotnessInput>;
}
