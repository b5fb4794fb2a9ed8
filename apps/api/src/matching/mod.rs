// Skill matching: scoring a candidate's skills against a job posting and
// presenting the result. Everything except `handlers` is pure and does no I/O;
// skill lists always arrive as parameters.

pub mod breakdown;
pub mod error;
pub mod handlers;
pub mod models;
pub mod ranking;
pub mod scorer;
pub mod status;
pub mod summary;
