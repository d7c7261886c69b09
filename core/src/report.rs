//! Plain-text reports derived from registry state.
//!
//! These return ready-to-print multi-line strings; the driver decides how
//! to frame them on screen. Both are pure reads.

use crate::registry::Registry;

impl Registry {
    /// Full course summary with the assigned teacher resolved by name.
    ///
    /// `None` if the course does not exist.
    pub fn course_overview(&self, course_id: u32) -> Option<String> {
        let course = self.course(course_id)?;
        let teacher = course.teacher.and_then(|id| self.teacher(id));
        Some(course.render_info(teacher))
    }

    /// Roster listing for a course: a header naming the course, then one
    /// line per enrolled student in enrollment order.
    pub fn roster_report(&self, course_id: u32) -> String {
        let Some(course) = self.course(course_id) else {
            return "Course not found!".to_string();
        };

        let mut report = format!("Students on course '{}':\n", course.name);
        let students = self.students_on_course(course_id);

        if students.is_empty() {
            report.push_str("No students enrolled\n");
        } else {
            for student in &students {
                report.push_str(&format!(
                    "- {} (ID: {}, Email: {})\n",
                    student.name, student.id, student.email
                ));
            }
        }
        report
    }
}
