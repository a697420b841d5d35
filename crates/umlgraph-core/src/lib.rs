//! umlgraph Core Types and Definitions
//!
//! This crate provides the foundational types shared by the umlgraph
//! pipeline and its front end and renderer collaborators. It includes:
//!
//! - **Identifiers**: Efficient string-interned identifiers ([`identifier::Id`])
//! - **Declarations**: The declared-type catalog input ([`declaration`] module)
//! - **Associations**: Relationship edges between declared types ([`association`] module)

pub mod association;
pub mod declaration;
pub mod identifier;
