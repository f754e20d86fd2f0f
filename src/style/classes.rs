//! Ordered utility class list.

use std::fmt;

use compact_str::CompactString;
use smallvec::SmallVec;

/// Utility classes in emission order.
///
/// Empty and whitespace-only entries are dropped on push, so generators can
/// push the result of a synthesis unconditionally. An entry may itself hold
/// several space-separated classes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList {
    classes: SmallVec<[CompactString; 8]>,
}

impl ClassList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, class: impl AsRef<str>) {
        let class = class.as_ref().trim();
        if !class.is_empty() {
            self.classes.push(CompactString::new(class));
        }
    }

    pub fn extend(&mut self, other: ClassList) {
        self.classes.extend(other.classes);
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(CompactString::as_str)
    }

    /// Whether any entry contains `class` as a whole word.
    pub fn contains(&self, class: &str) -> bool {
        self.iter()
            .flat_map(str::split_whitespace)
            .any(|c| c == class)
    }

    pub fn join(&self) -> String {
        self.classes.join(" ")
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.join())
    }
}

impl<S: AsRef<str>> FromIterator<S> for ClassList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut list = ClassList::new();
        for class in iter {
            list.push(class);
        }
        list
    }
}
