pub mod course;
pub mod student;
pub mod teacher;

pub use course::{Course, CourseKind};
pub use student::Student;
pub use teacher::Teacher;
