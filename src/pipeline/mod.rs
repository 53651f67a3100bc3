//! Turns raw provider hits into the reply shown in the chat.
//!
//! Both steps are pure: [`process`] filters and renders hits, [`compose`]
//! decides between a "nothing found" notice and a single media group.

pub mod composer;
pub mod formatter;

pub use composer::{NOTHING_FOUND, compose};
pub use formatter::process;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Reply, SearchHit};
    use crate::pipeline::composer::SEPARATOR;

    fn hit(similarity: f32, thumbnail: &str) -> SearchHit {
        SearchHit {
            similarity,
            thumbnail: thumbnail.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_nothing_above_threshold() {
        let reply = compose(process(&[hit(10.0, "thumb")], 50.0));

        assert_eq!(reply, Reply::Empty);
        assert_eq!(NOTHING_FOUND, "Nothing found(");
    }

    #[test]
    fn test_metadata_results_share_one_caption() {
        let hits = vec![
            SearchHit {
                title: Some("T".to_string()),
                ..hit(60.0, "thumb-t")
            },
            SearchHit {
                author: Some("A".to_string()),
                ..hit(70.0, "thumb-a")
            },
        ];

        let Reply::MediaGroup(items) = compose(process(&hits, 50.0)) else {
            panic!("Expected a media group");
        };

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].photo_url, "thumb-t");
        assert_eq!(items[1].photo_url, "thumb-a");
        assert_eq!(
            items[0].caption.as_deref(),
            Some(format!("60\nTitle:T\n{}70\nAuthor:A\n", SEPARATOR).as_str())
        );
        assert_eq!(items[1].caption, None);
    }
}
