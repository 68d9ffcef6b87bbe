//! Deterministic reader-facing views over annotated manuscript attestations.
//!
//! `attestation-core` resolves morpheme labels for the reader's chosen
//! terminology, buckets dated word attestations into fixed-width historical
//! periods, collapses duplicate written forms within a period without losing
//! which documents attest them, and files search results under document-type
//! headings. Every transformation is pure and repeatable: identical inputs
//! produce identical output, in identical order.
//!
//! The only persisted state is the reader's experience tier, kept behind the
//! [`preferences::PreferenceStore`] trait.

pub mod attestation;
pub mod morpheme;
pub mod preferences;
pub mod timeline;
pub mod types;
