use serde::{Deserialize, Serialize};

use crate::search::FieldSelector;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
    pub username: String,
    #[serde(default)]
    pub avatar: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub url: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostContent {
    pub text: String,
    #[serde(default)]
    pub links: Vec<Link>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
}

/// A feed entry as shown on the learning hub.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub author: Author,
    pub content: PostContent,
    #[serde(default)]
    pub categories: Vec<Category>,
}

impl Post {
    /// Fields searched by the feed: body, categories, author and link texts.
    pub fn search_fields() -> Vec<FieldSelector<Post>> {
        vec![post_text, post_categories, post_author, post_links]
    }
}

fn post_text(post: &Post) -> Vec<&str> {
    vec![post.content.text.as_str()]
}

fn post_categories(post: &Post) -> Vec<&str> {
    post.categories.iter().map(|c| c.name.as_str()).collect()
}

fn post_author(post: &Post) -> Vec<&str> {
    vec![post.author.name.as_str(), post.author.username.as_str()]
}

fn post_links(post: &Post) -> Vec<&str> {
    post.content
        .links
        .iter()
        .flat_map(|link| [link.title.as_deref(), link.description.as_deref()])
        .flatten()
        .collect()
}
