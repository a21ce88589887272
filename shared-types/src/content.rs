use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TeamMember {
    pub name: String,
    pub role: String,
    pub bio: String,
    pub image: String,
    pub favorite_item: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct InstagramPost {
    pub id: String,
    pub image_url: String,
    pub caption: String,
    pub likes: u32,
    pub permalink: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Testimonial {
    pub quote: String,
    pub author: String,
    pub avatar: String,
}

/// The first `count` posts of the feed.
pub fn latest_posts(posts: &[InstagramPost], count: usize) -> Vec<InstagramPost> {
    posts.iter().take(count).cloned().collect()
}
