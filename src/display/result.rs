use crate::models::SearchHit;

/// What a result block shows under its similarity line.
///
/// Source links win over metadata: title and author are only shown when the
/// provider knows no source url for the hit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Details<'a> {
    Sources(&'a [String]),
    Metadata {
        title: Option<&'a str>,
        author: Option<&'a str>,
    },
}

impl<'a> Details<'a> {
    pub fn of(hit: &'a SearchHit) -> Self {
        if hit.urls.is_empty() {
            Details::Metadata {
                title: hit.title.as_deref(),
                author: hit.author.as_deref(),
            }
        } else {
            Details::Sources(&hit.urls)
        }
    }
}

pub fn format(hit: &SearchHit) -> String {
    let mut ret = format!("{}\n", hit.similarity);

    match Details::of(hit) {
        Details::Sources(urls) => ret.push_str(&urls.join("\n")),
        Details::Metadata { title, author } => {
            if let Some(title) = title {
                ret.push_str(&format!("Title:{}\n", title));
            }
            if let Some(author) = author {
                ret.push_str(&format!("Author:{}\n", author));
            }
        }
    }

    ret
}
