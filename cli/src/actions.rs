pub mod courses;
pub mod students;
pub mod teachers;
