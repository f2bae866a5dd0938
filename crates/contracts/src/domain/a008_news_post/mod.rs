//! News and blog posts

include!(concat!(env!("OUT_DIR"), "/a008_news_post_metadata.rs"));
