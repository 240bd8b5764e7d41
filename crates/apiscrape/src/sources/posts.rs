use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

use crate::client::Request;
use crate::config::ScrapeConfig;
use crate::error::ParseError;
use crate::source::{Source, SourceId};

const POST_LIMIT: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: u64,
    pub title: String,
}

impl Display for Post {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Post ID: {}, Title: {}", self.id, self.title)
    }
}

/// Posts from the JSONPlaceholder API.
#[derive(Debug, Clone, Copy, Default)]
pub struct Posts;

impl Source for Posts {
    type Record = Post;

    fn id(&self) -> SourceId {
        SourceId::Posts
    }

    fn heading(&self, _config: &ScrapeConfig) -> String {
        "Data from Public API".to_string()
    }

    fn request(&self, config: &ScrapeConfig) -> Request {
        Request::get(&config.endpoints.posts)
    }

    fn extract(&self, body: &str) -> Result<Vec<Post>, ParseError> {
        let items: Vec<serde_json::Value> = serde_json::from_str(body)?;

        Ok(items
            .into_iter()
            .take(POST_LIMIT)
            .map(serde_json::from_value)
            .collect::<Result<_, _>>()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_keeps_first_ten_in_order() {
        let body = serde_json::to_string(
            &(1..=12)
                .map(|i| serde_json::json!({ "userId": 1, "id": i, "title": format!("t{i}"), "body": "..." }))
                .collect::<Vec<_>>(),
        )
        .unwrap();

        let posts = Posts.extract(&body).expect("Failed to extract posts");

        assert_eq!(posts.len(), 10);
        assert_eq!(posts[0].to_string(), "Post ID: 1, Title: t1");
        assert_eq!(posts[9].to_string(), "Post ID: 10, Title: t10");
    }

    #[test]
    fn test_extract_fewer_than_limit() {
        let posts = Posts
            .extract(r#"[{"id": 7, "title": "only one"}]"#)
            .expect("Failed to extract posts");
        assert_eq!(posts, vec![Post { id: 7, title: "only one".to_string() }]);
    }

    #[test]
    fn test_malformed_post_past_limit_is_ignored() {
        let mut items: Vec<_> = (1..=10)
            .map(|i| serde_json::json!({ "id": i, "title": format!("t{i}") }))
            .collect();
        items.push(serde_json::json!({ "id": 11 }));
        let body = serde_json::to_string(&items).unwrap();

        let posts = Posts.extract(&body).expect("Failed to extract posts");

        assert_eq!(posts.len(), 10);
        assert_eq!(posts[9].to_string(), "Post ID: 10, Title: t10");
    }

    #[test]
    fn test_missing_title_is_a_parse_error() {
        let err = Posts.extract(r#"[{"id": 1}]"#).unwrap_err();
        assert!(matches!(err, ParseError::Json(_)));
        assert!(err.to_string().contains("title"));
    }
}
