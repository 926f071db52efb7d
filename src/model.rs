//! Data model for extracted and parsed doc comments — format-agnostic.

/// A doc comment paired with the declaration that follows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// Trimmed declaration fragment, e.g. `public int add(int a, int b)`
    pub declaration: String,
    /// Normalized comment body without the `/**` and `*/` delimiters
    pub comment: String,
}

/// A comment split into free text and `@tag` annotations.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ParsedComment {
    pub description: String,
    /// Tags in encounter order
    pub tags: Vec<Tag>,
}

/// A single `@key value` annotation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub key: String,
    /// Possibly multi-line; continuation paragraphs are already indented
    pub value: String,
}

/// One rendered entry of a tag group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    Text(String),
    /// Presence-only tag such as `@constructor`
    Flag,
}

/// Tag entries bucketed by group label.
///
/// Groups keep the order in which they first appear; entries inside a
/// group keep encounter order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TagGroups {
    groups: Vec<(&'static str, Vec<Entry>)>,
}

impl TagGroups {
    pub fn push(&mut self, group: &'static str, entry: Entry) {
        match self.groups.iter_mut().find(|(name, _)| *name == group) {
            Some((_, entries)) => entries.push(entry),
            None => self.groups.push((group, vec![entry])),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn get(&self, group: &str) -> Option<&[Entry]> {
        self.groups
            .iter()
            .find(|(name, _)| *name == group)
            .map(|(_, entries)| entries.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &[Entry])> + '_ {
        self.groups
            .iter()
            .map(|(name, entries)| (*name, entries.as_slice()))
    }
}
