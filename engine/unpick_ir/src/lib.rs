//! AST and value model for the unpick constant-uninlining format.
//!
//! A document is a version header followed by a flat sequence of items:
//! group definitions, field/method/annotation targets. Items are immutable
//! values; they are built either by the parser or by the builder APIs here,
//! handed to a [`DocumentVisitor`] callback, and then discarded. Nothing in
//! this crate retains a whole document.

mod data_type;
mod expr;
mod item;
mod scope;
mod visitor;

pub use data_type::{DataType, GroupFormat, Radix};
pub use expr::{BinaryOp, Expression, FieldRef, Literal, UnaryOp};
pub use item::{
    GroupDefinition, GroupDefinitionBuilder, Item, TargetAnnotation, TargetField, TargetMethod,
    TargetMethodBuilder,
};
pub use scope::GroupScope;
pub use visitor::{DocumentVisitor, ItemSink};

#[cfg(test)]
mod tests;
