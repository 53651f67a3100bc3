use crate::models::{DisplayResult, MediaItem, Reply};

/// Text sent when no result passed the threshold.
pub const NOTHING_FOUND: &str = "Nothing found(";

/// Placed between the result blocks of the combined caption.
pub const SEPARATOR: &str = "\n--------------------------------------------------\n";

pub fn compose(results: Vec<DisplayResult>) -> Reply {
    if results.is_empty() {
        return Reply::Empty;
    }

    let caption = results
        .iter()
        .map(|result| result.text.as_str())
        .collect::<Vec<_>>()
        .join(SEPARATOR);

    let mut caption = Some(caption);
    let items = results
        .into_iter()
        .map(|result| MediaItem {
            photo_url: result.photo_url,
            caption: caption.take(),
        })
        .collect();

    Reply::MediaGroup(items)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(photo_url: &str, text: &str) -> DisplayResult {
        DisplayResult {
            photo_url: photo_url.to_string(),
            text: text.to_string(),
        }
    }

    #[test]
    fn test_separator() {
        assert_eq!(SEPARATOR, format!("\n{}\n", "-".repeat(50)));
        assert!(SEPARATOR.starts_with('\n') && SEPARATOR.ends_with('\n'));
        assert!(SEPARATOR.trim().chars().all(|c| c == '-'));
    }

    #[test]
    fn test_empty_results() {
        assert_eq!(compose(vec![]), Reply::Empty);
    }

    #[test]
    fn test_single_result() {
        let reply = compose(vec![result("thumb-a", "80\nhttp://a")]);

        assert_eq!(
            reply,
            Reply::MediaGroup(vec![MediaItem {
                photo_url: "thumb-a".to_string(),
                caption: Some("80\nhttp://a".to_string()),
            }])
        );
    }

    #[test]
    fn test_caption_only_on_first_item() {
        let reply = compose(vec![
            result("thumb-t", "60\nTitle:T\n"),
            result("thumb-a", "70\nAuthor:A\n"),
            result("thumb-x", "90\n"),
        ]);

        let Reply::MediaGroup(items) = reply else {
            panic!("Expected a media group");
        };

        assert_eq!(
            items.iter().map(|i| i.photo_url.as_str()).collect::<Vec<_>>(),
            vec!["thumb-t", "thumb-a", "thumb-x"]
        );
        assert!(items.iter().skip(1).all(|item| item.caption.is_none()));

        let separator = format!("\n{}\n", "-".repeat(50));
        let expected = format!("60\nTitle:T\n{separator}70\nAuthor:A\n{separator}90\n");
        assert_eq!(items[0].caption.as_deref(), Some(expected.as_str()));
    }
}
