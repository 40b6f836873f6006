//! Static department catalog of courses, career paths and faculty.
//!
//! All tables are hand-authored `'static` data. Lookups are linear scans;
//! the tables are a dozen rows each.

pub mod careers;
pub mod courses;
pub mod faculty;

pub use careers::{CareerPath, career_paths};
pub use courses::{Course, compact_code, courses, find_course};
pub use faculty::{Faculty, default_advisor, faculty, find_professor};
