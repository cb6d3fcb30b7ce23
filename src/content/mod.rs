//! Content module - posts, comments and markdown rendering

mod comment;
mod markdown;
mod post;

pub use comment::{Comment, NewComment};
pub use markdown::{render_markdown, MarkdownRenderer};
pub use post::{Category, NewPost, Post, PostPatch};
