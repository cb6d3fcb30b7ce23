//! In-memory content store
//!
//! Holds users, posts and comments in per-collection maps. Each collection
//! owns its id counter and sits behind its own lock, so assigning an id and
//! inserting the record happen as one step.

mod sample;
mod user;

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use parking_lot::Mutex;
use serde::Serialize;

use crate::content::{Comment, NewComment, NewPost, Post, PostPatch};
pub use user::{NewUser, User};

/// Operations the HTTP layer and CLI rely on
pub trait Storage: Send + Sync {
    fn get_user(&self, id: u64) -> Option<User>;
    /// First user created with this username
    fn get_user_by_username(&self, username: &str) -> Option<User>;
    /// Usernames are not checked for uniqueness; callers that need it must
    /// look the name up first
    fn create_user(&self, user: NewUser) -> User;

    /// Published posts, newest first
    fn get_posts(&self) -> Vec<Post>;
    /// Any post by id, drafts included
    fn get_post(&self, id: u64) -> Option<Post>;
    fn create_post(&self, post: NewPost) -> Post;
    fn update_post(&self, id: u64, patch: PostPatch) -> Option<Post>;
    fn delete_post(&self, id: u64) -> bool;

    /// Comments on a post, newest first
    fn get_comments_by_post_id(&self, post_id: u64) -> Vec<Comment>;
    fn create_comment(&self, comment: NewComment) -> Comment;
}

/// Records of one kind together with the next id to hand out
#[derive(Debug)]
struct Collection<T> {
    next_id: u64,
    entries: IndexMap<u64, T>,
}

impl<T> Collection<T> {
    fn new() -> Self {
        Self {
            next_id: 1,
            entries: IndexMap::new(),
        }
    }

    /// Assign the next id and store the record built from it
    fn insert_with(&mut self, build: impl FnOnce(u64) -> T) -> &T {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.insert(id, build(id));
        &self.entries[&id]
    }
}

/// Record counts, reported by the health endpoint and CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StoreStats {
    pub users: usize,
    pub posts: usize,
    pub drafts: usize,
    pub comments: usize,
}

/// Process-local store; nothing survives a restart
#[derive(Debug)]
pub struct MemStorage {
    users: Mutex<Collection<User>>,
    posts: Mutex<Collection<Post>>,
    comments: Mutex<Collection<Comment>>,
}

impl MemStorage {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            users: Mutex::new(Collection::new()),
            posts: Mutex::new(Collection::new()),
            comments: Mutex::new(Collection::new()),
        }
    }

    /// Create a store pre-populated with the sample posts and comments
    pub fn with_sample_data() -> Self {
        let store = Self::new();
        sample::populate(&store);
        store
    }

    /// Insert a post with an explicit creation time
    pub fn import_post(&self, post: NewPost, created_at: DateTime<Utc>) -> Post {
        let mut posts = self.posts.lock();
        let post = posts.insert_with(|id| Post::from_new(id, post, created_at));
        tracing::debug!("Stored post {}: {}", post.id, post.title);
        post.clone()
    }

    /// Insert a comment with an explicit creation time
    pub fn import_comment(&self, comment: NewComment, created_at: DateTime<Utc>) -> Comment {
        let mut comments = self.comments.lock();
        let comment = comments.insert_with(|id| Comment::from_new(id, comment, created_at));
        tracing::debug!("Stored comment {} on post {}", comment.id, comment.post_id);
        comment.clone()
    }

    /// Count records in every collection
    pub fn stats(&self) -> StoreStats {
        let users = self.users.lock().entries.len();
        let (posts, drafts) = {
            let posts = self.posts.lock();
            let drafts = posts.entries.values().filter(|p| p.is_draft).count();
            (posts.entries.len(), drafts)
        };
        let comments = self.comments.lock().entries.len();

        StoreStats {
            users,
            posts,
            drafts,
            comments,
        }
    }

    /// Every post including drafts, newest first
    pub fn all_posts(&self) -> Vec<Post> {
        let mut posts: Vec<Post> = self.posts.lock().entries.values().cloned().collect();
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        posts
    }

    /// Every comment, newest first
    pub fn all_comments(&self) -> Vec<Comment> {
        let mut comments: Vec<Comment> =
            self.comments.lock().entries.values().cloned().collect();
        comments.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        comments
    }
}

impl Default for MemStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl Storage for MemStorage {
    fn get_user(&self, id: u64) -> Option<User> {
        self.users.lock().entries.get(&id).cloned()
    }

    fn get_user_by_username(&self, username: &str) -> Option<User> {
        self.users
            .lock()
            .entries
            .values()
            .find(|u| u.username == username)
            .cloned()
    }

    fn create_user(&self, user: NewUser) -> User {
        let mut users = self.users.lock();
        users
            .insert_with(|id| User {
                id,
                username: user.username,
                password: user.password,
            })
            .clone()
    }

    fn get_posts(&self) -> Vec<Post> {
        let mut posts: Vec<Post> = self
            .posts
            .lock()
            .entries
            .values()
            .filter(|p| !p.is_draft)
            .cloned()
            .collect();

        // Stable sort: equal timestamps keep insertion order
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        posts
    }

    fn get_post(&self, id: u64) -> Option<Post> {
        self.posts.lock().entries.get(&id).cloned()
    }

    fn create_post(&self, post: NewPost) -> Post {
        self.import_post(post, Utc::now())
    }

    fn update_post(&self, id: u64, patch: PostPatch) -> Option<Post> {
        let mut posts = self.posts.lock();
        let post = posts.entries.get_mut(&id)?;
        post.apply(patch, Utc::now());
        tracing::debug!("Updated post {}", id);
        Some(post.clone())
    }

    fn delete_post(&self, id: u64) -> bool {
        // shift_remove keeps the insertion order of the remaining posts
        let removed = self.posts.lock().entries.shift_remove(&id).is_some();
        if removed {
            tracing::debug!("Deleted post {}", id);
        }
        removed
    }

    fn get_comments_by_post_id(&self, post_id: u64) -> Vec<Comment> {
        let mut comments: Vec<Comment> = self
            .comments
            .lock()
            .entries
            .values()
            .filter(|c| c.post_id == post_id)
            .cloned()
            .collect();

        comments.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        comments
    }

    fn create_comment(&self, comment: NewComment) -> Comment {
        self.import_comment(comment, Utc::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Category;
    use chrono::TimeZone;
    use std::sync::Arc;

    fn new_post(title: &str, is_draft: bool) -> NewPost {
        NewPost {
            title: title.to_string(),
            content: format!("# {}", title),
            excerpt: format!("About {}", title),
            category: Category::Technology,
            featured_image: None,
            is_draft: Some(is_draft),
        }
    }

    fn new_comment(post_id: u64, author: &str) -> NewComment {
        NewComment {
            post_id,
            author: author.to_string(),
            email: format!("{}@example.com", author.to_lowercase()),
            content: "Great post".to_string(),
        }
    }

    fn day(d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, d, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_create_then_get_post() {
        let store = MemStorage::new();
        let post = store.create_post(new_post("First", false));
        assert_eq!(post.id, 1);
        assert_eq!(post.created_at, post.updated_at);
        assert_eq!(store.get_post(post.id), Some(post));
    }

    #[test]
    fn test_ids_are_sequential_and_never_reused() {
        let store = MemStorage::new();
        let a = store.create_post(new_post("a", false));
        let b = store.create_post(new_post("b", false));
        assert!(store.delete_post(b.id));
        let c = store.create_post(new_post("c", false));
        assert_eq!((a.id, b.id, c.id), (1, 2, 3));
    }

    #[test]
    fn test_get_posts_hides_drafts_and_sorts_newest_first() {
        let store = MemStorage::new();
        store.import_post(new_post("old", false), day(1));
        store.import_post(new_post("draft", true), day(9));
        store.import_post(new_post("new", false), day(5));
        store.import_post(new_post("mid", false), day(3));

        let titles: Vec<String> = store.get_posts().into_iter().map(|p| p.title).collect();
        assert_eq!(titles, vec!["new", "mid", "old"]);
    }

    #[test]
    fn test_get_posts_ties_keep_insertion_order() {
        let store = MemStorage::new();
        store.import_post(new_post("first", false), day(2));
        store.import_post(new_post("second", false), day(2));

        let titles: Vec<String> = store.get_posts().into_iter().map(|p| p.title).collect();
        assert_eq!(titles, vec!["first", "second"]);
        assert_eq!(store.get_posts(), store.get_posts());
    }

    #[test]
    fn test_draft_retrievable_by_id() {
        let store = MemStorage::new();
        let draft = store.create_post(new_post("hidden", true));
        assert!(store.get_posts().is_empty());
        assert_eq!(store.get_post(draft.id).map(|p| p.is_draft), Some(true));
    }

    #[test]
    fn test_update_post_merges_fields() {
        let store = MemStorage::new();
        let original = store.import_post(new_post("Before", false), day(1));

        let updated = store
            .update_post(
                original.id,
                PostPatch {
                    excerpt: Some("New excerpt".to_string()),
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(updated.excerpt, "New excerpt");
        assert!(updated.updated_at > original.updated_at);
        assert_eq!(updated.title, original.title);
        assert_eq!(updated.content, original.content);
        assert_eq!(updated.category, original.category);
        assert_eq!(updated.featured_image, original.featured_image);
        assert_eq!(updated.is_draft, original.is_draft);
        assert_eq!(updated.created_at, original.created_at);
        assert_eq!(store.get_post(original.id), Some(updated));
    }

    #[test]
    fn test_update_missing_post() {
        let store = MemStorage::new();
        assert!(store.update_post(42, PostPatch::default()).is_none());
    }

    #[test]
    fn test_delete_post() {
        let store = MemStorage::new();
        let post = store.create_post(new_post("gone", false));
        assert!(store.delete_post(post.id));
        assert!(store.get_post(post.id).is_none());
        assert!(!store.delete_post(post.id));
        assert!(!store.delete_post(999));
    }

    #[test]
    fn test_comments_filtered_and_sorted() {
        let store = MemStorage::new();
        store.import_comment(new_comment(1, "Alex"), day(1));
        store.import_comment(new_comment(2, "Other"), day(4));
        store.import_comment(new_comment(1, "Sarah"), day(3));

        let comments = store.get_comments_by_post_id(1);
        let authors: Vec<&str> = comments.iter().map(|c| c.author.as_str()).collect();
        assert_eq!(authors, vec!["Sarah", "Alex"]);
        assert!(comments.iter().all(|c| c.post_id == 1));
        assert!(store.get_comments_by_post_id(7).is_empty());
    }

    #[test]
    fn test_comment_on_missing_post_is_accepted() {
        let store = MemStorage::new();
        let comment = store.create_comment(new_comment(404, "Nobody"));
        assert_eq!(comment.id, 1);
        assert_eq!(store.get_comments_by_post_id(404), vec![comment]);
    }

    #[test]
    fn test_users() {
        let store = MemStorage::new();
        let user = store.create_user(NewUser {
            username: "admin".to_string(),
            password: "secret".to_string(),
        });
        assert_eq!(user.id, 1);
        assert_eq!(store.get_user(1), Some(user.clone()));
        assert_eq!(store.get_user_by_username("admin"), Some(user));
        assert!(store.get_user(2).is_none());
        assert!(store.get_user_by_username("guest").is_none());
    }

    #[test]
    fn test_duplicate_username_resolves_to_first_user() {
        let store = MemStorage::new();
        let first = store.create_user(NewUser {
            username: "admin".to_string(),
            password: "one".to_string(),
        });
        let second = store.create_user(NewUser {
            username: "admin".to_string(),
            password: "two".to_string(),
        });
        assert_ne!(first.id, second.id);
        assert_eq!(store.stats().users, 2);
        assert_eq!(store.get_user_by_username("admin"), Some(first));
        assert_eq!(store.get_user(second.id), Some(second));
    }

    #[test]
    fn test_sample_data() {
        let store = MemStorage::with_sample_data();
        let stats = store.stats();
        assert_eq!(stats.posts, 3);
        assert_eq!(stats.drafts, 0);
        assert_eq!(stats.comments, 3);
        assert_eq!(stats.users, 0);

        let posts = store.get_posts();
        assert_eq!(posts[0].id, 1);
        assert_eq!(store.get_comments_by_post_id(1)[0].author, "Alex Morgan");

        let next = store.create_post(new_post("fresh", false));
        assert_eq!(next.id, 4);
    }

    #[test]
    fn test_instances_are_isolated() {
        let a = MemStorage::new();
        let b = MemStorage::new();
        a.create_post(new_post("a", false));
        assert_eq!(b.create_post(new_post("b", false)).id, 1);
    }

    #[test]
    fn test_concurrent_creates_get_unique_ids() {
        let store = Arc::new(MemStorage::new());
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || {
                    (0..25)
                        .map(|j| store.create_post(new_post(&format!("{}-{}", i, j), false)).id)
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let mut ids: Vec<u64> = handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 200);
        assert_eq!(ids.last(), Some(&200));
    }
}
