//! Parsing: locate doc comments, then split them into description and tags.

pub mod comment;
pub mod declaration;
pub mod sections;
