//! Ritual composition for matched queries.
//!
//! This crate provides:
//! - Correspondence lookup by intent or entity, with a universal default
//! - A seven-step ritual outline templated from the correspondence
//! - The normalized result shape with its disclaimer
//! - Offering records and sigils keyed by entity

pub mod correspondence;
pub mod normalize;
pub mod offerings;
pub mod outline;
pub mod sigils;

pub use correspondence::{Correspondence, default_correspondence, find_correspondence};
pub use normalize::{CorrespondenceResult, DISCLAIMER, normalize_result};
pub use offerings::{OfferingRecord, offerings_for_entities, offerings_for_entity};
pub use outline::{RitualStep, STEP_PHASES, build_ritual_outline};
pub use sigils::{SigilRecord, sigil_for_entity, sigils_for_entities};
