// Export modules for library usage
pub mod aggregation;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod envelope;
pub mod errors;
pub mod formatting;
pub mod io;
pub mod metrics;
pub mod observability;
pub mod report;
pub mod response;
pub mod scorer;

// Re-export commonly used types
pub use crate::core::{text::Lang, text::LocalizedText, Category, CategoryKey};

pub use crate::envelope::{extract_responses, EnvelopeShape, TargetYear};

pub use crate::response::{filter_responses, Answer, Response, ResponseShape};

pub use crate::aggregation::{compute_report, refine_baseline};

pub use crate::report::{Breakdown, ScoreReport};

pub use crate::metrics::{
    best_performing_area, overall_score, score_status, score_status_with, worst_performing_area,
    ScoreStatus,
};

pub use crate::scorer::{analyze_assessment, score_assessment, ScoreCache, ScoredAssessment};

pub use crate::io::writers::{create_writer, OutputFormat, OutputWriter};

pub use crate::errors::{Error, Result};
