//! Atelier Core Types and Definitions
//!
//! This crate provides the foundational types for the Atelier studio
//! libraries. It includes:
//!
//! - **Identifiers**: Deterministic description identifiers ([`identifier`] module)
//! - **Meta**: The reflective metamodel vocabulary ([`meta`] module)
//! - **Domain / View**: The authoring meta-metamodels ([`domain`] and [`view`] modules)
//! - **Viewpoint**: The classic diagram-definition vocabulary ([`viewpoint`] module)
//! - **Elements**: Tagged model-element variants ([`element::Element`])
//! - **Variables**: The per-evaluation context map ([`variables::Variables`])
//! - **Status**: Two-valued edit outcome ([`status::EditStatus`])

pub mod domain;
pub mod element;
pub mod identifier;
pub mod meta;
pub mod status;
pub mod variables;
pub mod view;
pub mod viewpoint;
