//! Transcript ingestion and insight detection.
//!
//! Loads dialogue rows from a comma-separated transcript, applies the four
//! insight detectors (greeting, farewell, self-introduction, company name)
//! to manager utterances, aggregates the per-dialogue manager-requirement
//! flag, and writes the annotated table back out.

pub mod detectors;
pub mod insight;
pub mod pipeline;
pub mod table;

pub use detectors::{
    annotate, check_manager_requirement, detect_companies, detect_farewells, detect_greetings,
    detect_introductions, InsightRules, MANAGER_ROLE,
};
pub use insight::Insight;
pub use pipeline::{run_extraction, summarize, ExtractionSummary};
pub use table::{Row, Table, TableError};
