//! Sample content loaded when the site starts with an empty store

use chrono::{DateTime, TimeZone, Utc};

use super::MemStorage;
use crate::content::{Category, NewComment, NewPost};

const POST_1_CONTENT: &str = r#"# The Future of Web Development: Trends to Watch in 2024

The web development landscape is constantly evolving, and 2024 promises to bring exciting new trends and technologies. In this comprehensive guide, we'll explore the most significant developments that are shaping the future of how we build for the web.

## AI-Powered Development Tools

Artificial Intelligence is revolutionizing how developers write code. From GitHub Copilot to ChatGPT, AI assistants are becoming indispensable tools that help developers write better code faster. These tools can generate boilerplate code, suggest optimizations, and even help debug complex issues.

## The Rise of Edge Computing

Edge computing is moving processing closer to users, reducing latency and improving performance. Platforms like Vercel Edge Functions and Cloudflare Workers are making it easier than ever to deploy code at the edge, enabling new patterns for building fast, globally distributed applications.

```javascript
// Example Edge Function
export default async function handler(request) {
  const response = await fetch('https://api.example.com/data');
  const data = await response.json();
  
  return new Response(JSON.stringify(data), {
    headers: { 'Content-Type': 'application/json' }
  });
}
```

## Web Assembly (WASM) Maturation

WebAssembly is finally reaching mainstream adoption, enabling developers to run high-performance applications in the browser. Languages like Rust, Go, and C++ can now be compiled to WASM, opening up new possibilities for web applications that were previously impossible.

> "The future of web development is not just about new frameworks or tools—it's about fundamentally rethinking how we approach building experiences for users across different devices and contexts."

## Conclusion

As we move through 2024, these trends will continue to shape how we build for the web. The key is to stay curious, experiment with new tools, and always keep the user experience at the center of our decisions."#;

const POST_2_CONTENT: &str = r#"# Building Scalable React Applications

As React applications grow in size and complexity, maintaining a clean and scalable architecture becomes crucial. This guide covers best practices for structuring React applications that can grow with your team and requirements.

## Component Architecture

The foundation of a scalable React application lies in its component architecture. Here are key principles to follow:

### Single Responsibility Principle
Each component should have a single, well-defined purpose. This makes components easier to test, maintain, and reuse.

### Composition over Inheritance
React favors composition over inheritance. Build complex UIs by composing smaller, focused components.

## State Management

As your application grows, managing state becomes more complex. Consider these approaches:

- **Local State**: Use useState for component-specific state
- **Context API**: For sharing state across multiple components
- **External Libraries**: Redux, Zustand, or Jotai for complex state management

## Performance Optimization

- Use React.memo for preventing unnecessary re-renders
- Implement code splitting with React.lazy
- Optimize bundle size with tree shaking

## Testing Strategy

A comprehensive testing strategy includes:
- Unit tests for individual components
- Integration tests for component interactions
- End-to-end tests for critical user flows

## Conclusion

Building scalable React applications requires thoughtful planning and adherence to best practices. Start with a solid foundation and iteratively improve your architecture as your application grows."#;

const POST_3_CONTENT: &str = r#"# The Art of Minimalist Design

Minimalist design is more than just a trend—it's a philosophy that emphasizes clarity, functionality, and intentional use of space. In this post, we'll explore how to apply minimalist principles to create beautiful, effective designs.

## Core Principles

### Less is More
Remove unnecessary elements and focus on what truly matters. Every element should serve a purpose.

### White Space
Embrace white space as a design element. It provides breathing room and helps focus attention on important content.

### Typography
Choose fonts carefully. Good typography can carry a minimalist design and improve readability.

## Color Palette

Minimalist designs often use:
- Neutral colors as the foundation
- One or two accent colors for emphasis
- High contrast for readability

## Visual Hierarchy

Create clear visual hierarchy through:
- Size and weight variations
- Strategic use of color
- Consistent spacing

## Conclusion

Minimalist design is about making intentional choices and removing the unnecessary. When done well, it creates designs that are both beautiful and highly functional."#;

fn date(year: i32, month: u32, day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, 0, 0)
        .single()
        .unwrap_or_default()
}

/// Seed three published posts and a short discussion on the first one
pub(super) fn populate(store: &MemStorage) {
    let posts = [
        (
            NewPost {
                title: "The Future of Web Development: Trends to Watch in 2024".to_string(),
                content: POST_1_CONTENT.to_string(),
                excerpt: "Exploring the latest trends and technologies that are shaping the future of web development, from AI-powered tools to advanced frameworks and beyond.".to_string(),
                category: Category::Technology,
                featured_image: Some("https://images.unsplash.com/photo-1506905925346-21bda4d32df4?ixlib=rb-4.0.3&auto=format&fit=crop&w=1200&h=400".to_string()),
                is_draft: Some(false),
            },
            date(2024, 3, 15, 0),
        ),
        (
            NewPost {
                title: "Building Scalable React Applications".to_string(),
                content: POST_2_CONTENT.to_string(),
                excerpt: "Learn the best practices for structuring and scaling React applications as your team and codebase grow.".to_string(),
                category: Category::Technology,
                featured_image: Some("https://images.unsplash.com/photo-1497366216548-37526070297c?ixlib=rb-4.0.3&auto=format&fit=crop&w=600&h=250".to_string()),
                is_draft: Some(false),
            },
            date(2024, 3, 10, 0),
        ),
        (
            NewPost {
                title: "The Art of Minimalist Design".to_string(),
                content: POST_3_CONTENT.to_string(),
                excerpt: "Exploring how less can be more in design, and why minimalism continues to dominate modern interfaces.".to_string(),
                category: Category::Design,
                featured_image: Some("https://images.unsplash.com/photo-1558655146-9f40138edfeb?ixlib=rb-4.0.3&auto=format&fit=crop&w=600&h=250".to_string()),
                is_draft: Some(false),
            },
            date(2024, 3, 8, 0),
        ),
    ];

    let mut first_post = None;
    for (post, created_at) in posts {
        let post = store.import_post(post, created_at);
        first_post.get_or_insert(post.id);
    }
    let Some(post_id) = first_post else {
        return;
    };

    let comments = [
        (
            "Alex Morgan",
            "alex@example.com",
            "Great insights! I've been experimenting with some of these AI tools and they're definitely game-changers. The edge computing section was particularly interesting - do you have any specific recommendations for getting started?",
            date(2024, 3, 15, 10),
        ),
        (
            "Sarah Chen",
            "sarah@example.com",
            "WebAssembly is fascinating! We're considering using it for our next project. Would love to see a follow-up post with practical examples and performance comparisons.",
            date(2024, 3, 15, 8),
        ),
        (
            "Mike Rodriguez",
            "mike@example.com",
            "Excellent overview of the current trends. I'm particularly excited about the potential of AI-powered development tools. They're already saving me hours of work each week!",
            date(2024, 3, 14, 15),
        ),
    ];

    for (author, email, content, created_at) in comments {
        store.import_comment(
            NewComment {
                post_id,
                author: author.to_string(),
                email: email.to_string(),
                content: content.to_string(),
            },
            created_at,
        );
    }

    tracing::debug!("Loaded sample content");
}
