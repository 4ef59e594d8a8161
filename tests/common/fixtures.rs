use chrono::{Duration, TimeZone, Utc};
use devhub_feed::domain::entities::PostRecord;
use devhub_feed::infrastructure::memory::InMemoryPostIndex;

/// Post created `minutes` after a fixed epoch.
pub fn post(id: u64, author: &str, minutes: i64) -> PostRecord {
    let epoch = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
    PostRecord::new(id, author, epoch + Duration::minutes(minutes))
}

/// A small index with a mix of listable and excluded posts.
pub async fn seeded_index() -> InMemoryPostIndex {
    let index = InMemoryPostIndex::new();
    for record in [
        post(1, "alice.near", 1).with_description("Proposal for the wiki"),
        post(2, "alice.near", 2).with_labels(["wiki", "docs"]),
        post(3, "bob.near", 3)
            .with_description("Grant report")
            .with_labels(["test"]),
        post(4, "bob.near", 4).with_labels(["devhub-test"]),
        post(5, "carol.near", 5).with_parent(1),
        post(6, "carol.near", 6).with_description("Hackathon recap"),
        post(7, "dave.near", 7).with_labels(["blog"]).with_post_type("Comment"),
    ] {
        index.upsert(record).await;
    }
    index
}
