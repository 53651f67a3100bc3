#[derive(Debug, Clone, PartialEq)]
pub struct MediaItem {
    pub photo_url: String,
    /// Telegram only surfaces the caption of the first item in a media group.
    pub caption: Option<String>,
}

/// The shape of the message sent back for one search.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    Empty,
    MediaGroup(Vec<MediaItem>),
}
