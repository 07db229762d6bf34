//! RSSlug - command-line front end for slugrule
//!
//! This crate wraps the slug normalizer, the slug/tag grammars and the tag
//! list processor behind a single [`slugger::Slugger`], and loads the CSV
//! fixtures used by the `slug_cases` runner.

pub mod cases;
pub mod slugger;

pub use cases::{load_cases, process_cases, CaseKind, Outcome, SlugCase};
pub use slugger::Slugger;
