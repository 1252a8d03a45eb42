// Tue Jan 13 2026 - Alex

pub mod annotation;
pub mod json;
pub mod report;

pub use annotation::{Annotation, AnnotationLog, Bookmark, DataItem};
pub use json::{JsonReport, MatchRecord, OutputError, TargetInfo};
pub use report::ReportGenerator;
