//! Server-rendered HTML pages

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use chrono::Utc;

use super::api::CommentRequest;
use super::error::ApiError;
use super::ServerState;
use crate::config::SiteConfig;
use crate::content::{Comment, Post};
use crate::helpers::{
    html_escape, image_tag, link_to, meta_generator, reading_time, relative_date, time_tag,
};
use crate::store::Storage;

/// Wrap page content in the site layout
fn layout(config: &SiteConfig, title: &str, body: &str) -> String {
    let page_title = if title.is_empty() {
        html_escape(&config.title)
    } else {
        format!("{} | {}", html_escape(title), html_escape(&config.title))
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="{lang}">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
{generator}
<title>{page_title}</title>
<link rel="stylesheet" href="/style.css">
</head>
<body>
<nav class="site-nav">{home}</nav>
<main>
{body}
</main>
<footer>
<h3>{site}</h3>
<p>{description}</p>
<p>&copy; {author}</p>
</footer>
</body>
</html>
"#,
        lang = html_escape(&config.language),
        generator = meta_generator(),
        page_title = page_title,
        home = link_to("/", &html_escape(&config.title)),
        body = body,
        site = html_escape(&config.title),
        description = html_escape(&config.description),
        author = html_escape(&config.author),
    )
}

/// Post summary used on the home page
fn post_card(config: &SiteConfig, post: &Post, featured: bool) -> String {
    let href = format!("/post/{}", post.id);
    let class = if featured { "post-card featured" } else { "post-card" };
    let image = post
        .featured_image
        .as_deref()
        .map(|src| link_to(&href, &image_tag(src, &post.title, Some("post-image"))))
        .unwrap_or_default();

    format!(
        r#"<article class="{class}">
{image}
<span class="category {category_class}">{category}</span>
<h2>{title}</h2>
<p class="excerpt">{excerpt}</p>
<p class="meta">{date} &middot; {minutes} min read</p>
</article>"#,
        class = class,
        image = image,
        category_class = post.category.css_class(),
        category = post.category,
        title = link_to(&href, &html_escape(&post.title)),
        excerpt = html_escape(&post.excerpt),
        date = time_tag(&post.created_at, &config.date_format),
        minutes = reading_time(&post.content, config.words_per_minute),
    )
}

fn comment_item(comment: &Comment) -> String {
    format!(
        r#"<li class="comment">
<span class="avatar">{initials}</span>
<strong>{author}</strong> <span class="meta">{when}</span>
<p>{content}</p>
</li>"#,
        initials = html_escape(&comment.initials()),
        author = html_escape(&comment.author),
        when = relative_date(&comment.created_at, &Utc::now()),
        content = html_escape(&comment.content),
    )
}

fn comments_section(post_id: u64, comments: &[Comment]) -> String {
    let items: String = comments.iter().map(comment_item).collect();

    format!(
        r#"<section id="comments">
<h3>Comments ({count})</h3>
<form method="post" action="/post/{post_id}/comments">
<h4>Leave a Comment</h4>
<input name="author" placeholder="Your name" required>
<input name="email" type="email" placeholder="Your email" required>
<textarea name="content" placeholder="Share your thoughts..." required></textarea>
<button type="submit">Post Comment</button>
</form>
<ul class="comments">{items}</ul>
</section>"#,
        count = comments.len(),
        post_id = post_id,
        items = items,
    )
}

fn not_found_page(config: &SiteConfig) -> Response {
    let body = r#"<h1>404 Page Not Found</h1><p><a href="/">Back to home</a></p>"#;
    (
        StatusCode::NOT_FOUND,
        Html(layout(config, "Not Found", body)),
    )
        .into_response()
}

/// GET /
pub async fn home(State(state): State<Arc<ServerState>>) -> Html<String> {
    let config = &state.config;
    let posts = state.store.get_posts();

    let body = match posts.split_first() {
        Some((featured, recent)) => {
            let recent: String = recent
                .iter()
                .map(|post| post_card(config, post, false))
                .collect();
            format!(
                r#"<section class="featured">{}</section>
<section class="recent"><h2>Recent Posts</h2>{}</section>"#,
                post_card(config, featured, true),
                recent
            )
        }
        None => "<p>No posts yet.</p>".to_string(),
    };

    Html(layout(config, "", &body))
}

/// GET /post/:id
pub async fn post_page(State(state): State<Arc<ServerState>>, Path(id): Path<u64>) -> Response {
    let config = &state.config;
    let Some(post) = state.store.get_post(id) else {
        return not_found_page(config);
    };
    let comments = state.store.get_comments_by_post_id(id);

    let draft = if post.is_draft {
        r#"<span class="draft">Draft</span>"#
    } else {
        ""
    };
    let image = post
        .featured_image
        .as_deref()
        .map(|src| image_tag(src, &post.title, Some("featured-image")))
        .unwrap_or_default();

    let body = format!(
        r#"<article class="post">
<header>
<span class="category {category_class}">{category}</span>{draft}
<h1>{title}</h1>
<p class="meta">{author} &middot; {date} &middot; {minutes} min read</p>
</header>
{image}
<div class="post-content">{content}</div>
</article>
{comments}"#,
        category_class = post.category.css_class(),
        category = post.category,
        draft = draft,
        title = html_escape(&post.title),
        author = html_escape(&config.author),
        date = time_tag(&post.created_at, &config.date_format),
        minutes = reading_time(&post.content, config.words_per_minute),
        image = image,
        content = state.renderer.render(&post.content),
        comments = comments_section(post.id, &comments),
    );

    Html(layout(config, &post.title, &body)).into_response()
}

fn comment_error_page(config: &SiteConfig, post_id: u64, error: &ApiError) -> Response {
    tracing::debug!("Rejected comment form for post {}: {}", post_id, error);
    let body = format!(
        r#"<section class="form-error">
<h1>Comment not posted</h1>
<p class="error">{message}</p>
<p>{back}</p>
</section>"#,
        message = html_escape(&error.to_string()),
        back = link_to(&format!("/post/{}#comments", post_id), "Back to the post"),
    );
    (error.status(), Html(layout(config, "Comment not posted", &body))).into_response()
}

/// POST /post/:id/comments (HTML form)
pub async fn submit_comment(
    State(state): State<Arc<ServerState>>,
    Path(id): Path<u64>,
    Form(request): Form<CommentRequest>,
) -> Response {
    let comment = match request.validate(id) {
        Ok(comment) => state.store.create_comment(comment),
        Err(e) => return comment_error_page(&state.config, id, &e),
    };
    tracing::info!("New comment {} on post {} by {}", comment.id, id, comment.author);
    Redirect::to(&format!("/post/{}#comments", id)).into_response()
}

/// Fallback for unknown paths when no static directory is configured
pub async fn not_found(State(state): State<Arc<ServerState>>) -> Response {
    not_found_page(&state.config)
}
