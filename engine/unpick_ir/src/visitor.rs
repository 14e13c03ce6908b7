//! Document consumer interface.
//!
//! The parser delivers items to a `DocumentVisitor` one at a time, in
//! source order, without materializing the whole document. The writer and
//! the remapper both implement this trait; the remapper also drives one,
//! which is what lets reader → remapper → writer compose as a single pass.

use crate::{GroupDefinition, Item, TargetAnnotation, TargetField, TargetMethod};

/// Receives a parsed document as a stream of callbacks.
///
/// Every method has a no-op default so consumers implement only the items
/// they care about. Items are passed by value; the visitor owns them.
pub trait DocumentVisitor {
    /// Called first, with the header's format version.
    fn visit_header(&mut self, version: u32) {
        let _ = version;
    }

    fn visit_group_definition(&mut self, group: GroupDefinition) {
        let _ = group;
    }

    fn visit_target_field(&mut self, target: TargetField) {
        let _ = target;
    }

    fn visit_target_method(&mut self, target: TargetMethod) {
        let _ = target;
    }

    fn visit_target_annotation(&mut self, target: TargetAnnotation) {
        let _ = target;
    }
}

/// A visitor that materializes the document, for consumers (and tests)
/// that want the whole item sequence rather than a stream.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ItemSink {
    pub version: u32,
    pub items: Vec<Item>,
}

impl DocumentVisitor for ItemSink {
    fn visit_header(&mut self, version: u32) {
        self.version = version;
    }

    fn visit_group_definition(&mut self, group: GroupDefinition) {
        self.items.push(Item::Group(group));
    }

    fn visit_target_field(&mut self, target: TargetField) {
        self.items.push(Item::Field(target));
    }

    fn visit_target_method(&mut self, target: TargetMethod) {
        self.items.push(Item::Method(target));
    }

    fn visit_target_annotation(&mut self, target: TargetAnnotation) {
        self.items.push(Item::Annotation(target));
    }
}
