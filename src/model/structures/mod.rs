pub mod commit_kind;
pub mod participant_result;
pub mod rating_change;
pub mod tick;
