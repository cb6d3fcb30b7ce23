//! List store content

use anyhow::Result;

use crate::helpers::{format_date, truncate};
use crate::store::Storage;
use crate::Folio;

/// List content by type
pub fn run(folio: &Folio, content_type: &str) -> Result<()> {
    let store = &folio.store;
    let date_format = &folio.config.date_format;

    match content_type {
        "post" | "posts" => {
            let posts = store.get_posts();
            println!("Posts ({}):", posts.len());
            for post in posts {
                println!(
                    "  #{} {} - {} [{}]",
                    post.id,
                    format_date(&post.created_at, date_format),
                    post.title,
                    post.category
                );
            }
        }
        "draft" | "drafts" => {
            let drafts: Vec<_> = store
                .all_posts()
                .into_iter()
                .filter(|p| p.is_draft)
                .collect();
            println!("Drafts ({}):", drafts.len());
            for post in drafts {
                println!(
                    "  #{} {} - {}",
                    post.id,
                    format_date(&post.updated_at, date_format),
                    post.title
                );
            }
        }
        "comment" | "comments" => {
            let comments = store.all_comments();
            println!("Comments ({}):", comments.len());
            for comment in comments {
                println!(
                    "  #{} on post {} by {}: {}",
                    comment.id,
                    comment.post_id,
                    comment.author,
                    truncate(&comment.content, 60, None)
                );
            }
        }
        _ => {
            anyhow::bail!(
                "Unknown type: {}. Available: post, draft, comment",
                content_type
            );
        }
    }

    Ok(())
}
