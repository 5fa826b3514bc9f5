use std::collections::HashMap;

use crate::content::{ContentItem, ContentType};

/// Pool items partitioned by recognized content type.
///
/// Groups are kept in the order of the recognized type list; items inside a
/// group keep their relative pool order. Items of any other type land in
/// `unrecognized`, also in pool order.
#[derive(Debug, Clone)]
pub struct TypeGroups<'a> {
    groups: Vec<(ContentType, Vec<&'a ContentItem>)>,
    unrecognized: Vec<&'a ContentItem>,
}

impl<'a> TypeGroups<'a> {
    pub fn get(&self, content_type: &ContentType) -> Option<&[&'a ContentItem]> {
        self.groups
            .iter()
            .find(|(t, _)| t == content_type)
            .map(|(_, items)| items.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ContentType, &[&'a ContentItem])> {
        self.groups.iter().map(|(t, items)| (t, items.as_slice()))
    }

    pub fn unrecognized(&self) -> &[&'a ContentItem] {
        &self.unrecognized
    }

    /// Number of recognized types with at least one item.
    pub fn distinct_types_present(&self) -> usize {
        self.groups.iter().filter(|(_, items)| !items.is_empty()).count()
    }

    pub fn into_parts(self) -> (Vec<(ContentType, Vec<&'a ContentItem>)>, Vec<&'a ContentItem>) {
        (self.groups, self.unrecognized)
    }
}

pub trait TypeClassifier {
    fn classify<'a>(&self, pool: &'a [ContentItem]) -> TypeGroups<'a>;
}

/// Classifies against a fixed, ordered list of recognized types.
#[derive(Debug, Clone)]
pub struct RecognizedTypeClassifier {
    recognized: Vec<ContentType>,
}

impl RecognizedTypeClassifier {
    pub fn new(recognized: Vec<ContentType>) -> Self {
        Self { recognized }
    }

    pub fn recognized(&self) -> &[ContentType] {
        &self.recognized
    }
}

impl TypeClassifier for RecognizedTypeClassifier {
    fn classify<'a>(&self, pool: &'a [ContentItem]) -> TypeGroups<'a> {
        // First occurrence wins if a type is listed twice.
        let mut slot_of: HashMap<&ContentType, usize> = HashMap::with_capacity(self.recognized.len());
        for (slot, content_type) in self.recognized.iter().enumerate() {
            slot_of.entry(content_type).or_insert(slot);
        }

        let mut groups: Vec<(ContentType, Vec<&'a ContentItem>)> = self
            .recognized
            .iter()
            .map(|t| (t.clone(), Vec::new()))
            .collect();
        let mut unrecognized = Vec::new();

        for item in pool {
            match slot_of.get(&item.content_type) {
                Some(&slot) => groups[slot].1.push(item),
                None => unrecognized.push(item),
            }
        }

        TypeGroups {
            groups,
            unrecognized,
        }
    }
}
