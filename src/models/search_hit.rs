/// A single candidate match as returned by a reverse image search provider.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchHit {
    /// Similarity score in percent, 0 to 100
    pub similarity: f32,
    /// Search result thumbnail url
    pub thumbnail: String,
    /// Source urls in provider order, may be empty
    pub urls: Vec<String>,

    pub title: Option<String>,
    pub author: Option<String>,
}
