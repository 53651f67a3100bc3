/// A search hit that passed the similarity threshold, ready to be shown.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayResult {
    pub photo_url: String,
    pub text: String,
}
