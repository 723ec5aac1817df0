use serde::Deserialize;

#[derive(Debug, Default, PartialEq, Eq)]
pub struct NewPaste {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl NewPaste {
    /// Collect `title` and `content` from decoded request parameters.
    ///
    /// A repeated parameter keeps every value, joined with commas. Other names
    /// are ignored.
    pub fn from_pairs<I>(pairs: I) -> NewPaste
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut paste = NewPaste::default();
        for (name, value) in pairs {
            let slot = match name.as_str() {
                "title" => &mut paste.title,
                "content" => &mut paste.content,
                _ => continue,
            };
            match slot {
                Some(existing) => {
                    existing.push(',');
                    existing.push_str(&value);
                }
                None => *slot = Some(value),
            }
        }
        paste
    }

    /// Fill in fields missing from `self` with those of `other`.
    pub fn or(self, other: NewPaste) -> NewPaste {
        NewPaste {
            title: non_empty(self.title).or(other.title),
            content: non_empty(self.content).or(other.content),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub q: String,
}

pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}
