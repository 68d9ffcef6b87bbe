use serde::{Deserialize, Serialize};

/// Anything carrying a coarse document classification.
pub trait Classified {
    fn document_type(&self) -> &str;
}

/// Fixed headings that search results are filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Heading {
    Reference,
    Corpus,
    Miscellaneous,
}

impl Heading {
    /// Classification values are matched case-insensitively.
    pub fn for_document_type(raw: &str) -> Self {
        if raw.eq_ignore_ascii_case("reference") {
            Heading::Reference
        } else if raw.eq_ignore_ascii_case("corpus") {
            Heading::Corpus
        } else {
            Heading::Miscellaneous
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Heading::Reference => "In Reference Materials",
            Heading::Corpus => "In Documents",
            Heading::Miscellaneous => "Miscellaneous",
        }
    }
}

/// Items grouped by heading, in first-seen heading order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroupedResults<T> {
    groups: Vec<(Heading, Vec<T>)>,
}

impl<T> GroupedResults<T> {
    pub fn headings(&self) -> impl Iterator<Item = Heading> + '_ {
        self.groups.iter().map(|(h, _)| *h)
    }

    pub fn get(&self, heading: Heading) -> Option<&[T]> {
        self.groups
            .iter()
            .find(|(h, _)| *h == heading)
            .map(|(_, items)| items.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (Heading, &[T])> {
        self.groups.iter().map(|(h, items)| (*h, items.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn into_inner(self) -> Vec<(Heading, Vec<T>)> {
        self.groups
    }
}

/// Partition items under fixed headings.
///
/// Unrecognized classifications all land in the one `Miscellaneous` group.
/// Item order within a group follows input order.
pub fn group_by_type<T, I>(items: I) -> GroupedResults<T>
where
    T: Classified,
    I: IntoIterator<Item = T>,
{
    let mut groups: Vec<(Heading, Vec<T>)> = Vec::new();

    for item in items {
        let heading = Heading::for_document_type(item.document_type());
        match groups.iter_mut().find(|(h, _)| *h == heading) {
            Some((_, members)) => members.push(item),
            None => groups.push((heading, vec![item])),
        }
    }

    GroupedResults { groups }
}

impl<T: Classified> Classified for &T {
    fn document_type(&self) -> &str {
        (**self).document_type()
    }
}
