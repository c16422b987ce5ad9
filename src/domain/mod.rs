//! Domain logic for building step sequences

mod catalog;
mod collation;
mod labels;
mod states;
mod transitions;
mod validation;


pub use catalog::Catalog;
pub use collation::compare_names;
pub use labels::{auto_figure_name, format_dance_name};
pub use states::{SequenceState, BEATS_PER_STEP};
pub use transitions::{find_candidates, is_candidate};
pub use validation::{format_issue_report, validate_catalog, IntegrityIssue};
