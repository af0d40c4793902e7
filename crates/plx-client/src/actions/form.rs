//! Ordered multi-value form fields, as a browser would submit them.

use super::{ActionError, ActionResult};

pub const PROJECT_NAME: &str = "project_name";
pub const CREATOR_NAME: &str = "creator_name";
pub const DESCRIPTION: &str = "description";
pub const TAGS: &str = "tags";

/// Form submission: an ordered list of `(name, value)` pairs where a name
/// may repeat (one `variant_a` entry per snippet, for example).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormData {
    fields: Vec<(String, String)>,
}

impl FormData {
    #[must_use]
    pub const fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Rebuild the step-one fields from their URL-encoded draft.
    ///
    /// Accepts `a=1&b=2` with `+` or `%20` for spaces. Empty segments are
    /// skipped and a segment without `=` is a field with an empty value.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::Invalid`] if a segment is not valid
    /// percent-encoded UTF-8.
    pub fn from_query(query: &str) -> ActionResult<Self> {
        let mut form = Self::new();
        for segment in query.split('&').filter(|s| !s.is_empty()) {
            let (key, value) = segment.split_once('=').unwrap_or((segment, ""));
            form.append(decode_component(key)?, decode_component(value)?);
        }
        Ok(form)
    }

    /// Step-one draft: name, creator, description, and raw tag string.
    #[must_use]
    pub fn draft(project_name: &str, creator_name: &str, description: &str, tags: &str) -> Self {
        Self::new()
            .with(PROJECT_NAME, project_name)
            .with(CREATOR_NAME, creator_name)
            .with(DESCRIPTION, description)
            .with(TAGS, tags)
    }

    /// Append a field, keeping any earlier value under the same name.
    pub fn append(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.push((name.into(), value.into()));
    }

    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.append(name, value);
        self
    }

    /// First value submitted under `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Every value submitted under `name`, in submission order.
    #[must_use]
    pub fn get_all(&self, name: &str) -> Vec<&str> {
        self.fields
            .iter()
            .filter(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    /// Fields in submission order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// URL-encode the fields as `a=1&b=2`.
    #[must_use]
    pub fn to_query(&self) -> String {
        self.fields
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

fn decode_component(raw: &str) -> ActionResult<String> {
    let spaced = raw.replace('+', " ");
    urlencoding::decode(&spaced)
        .map(std::borrow::Cow::into_owned)
        .map_err(|e| ActionError::Invalid(format!("malformed draft field '{raw}': {e}")))
}

/// Split a comma-separated tag string. Entries are trimmed; an empty string
/// has no tags.
#[must_use]
pub fn parse_tags(raw: &str) -> Vec<String> {
    if raw.is_empty() {
        return Vec::new();
    }
    raw.split(',').map(|tag| tag.trim().to_string()).collect()
}
