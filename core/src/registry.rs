//! # Course Registry
//!
//! The registry owns the three entity collections and every operation that
//! crosses them (teacher assignment, enrollment, derived listings).
//!
//! Semantics that callers rely on:
//! * Collections keep insertion order; lookups are linear scans that
//!   return the first match. Duplicate ids are not rejected on add, so
//!   under duplicates the first-added record wins every lookup.
//! * A compound operation whose lookups miss leaves all state untouched
//!   and reports nothing. Absence is an `Option`, never a fault.
//! * "All" accessors hand out clones; mutating a returned `Vec` can never
//!   reach the registry's own collections.

use cursus_common::model::{Course, Student, Teacher};

/// In-memory registry of courses, teachers, and students.
///
/// Constructed explicitly and passed by reference; there is no process-wide
/// instance. Dropping the registry drops everything it tracks.
#[derive(Default)]
pub struct Registry {
    courses: Vec<Course>,
    teachers: Vec<Teacher>,
    students: Vec<Student>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    // Courses

    pub fn add_course(&mut self, course: Course) {
        self.courses.push(course);
    }

    /// Removes the first course with a matching id; no-op if absent.
    pub fn remove_course(&mut self, course_id: u32) {
        if let Some(pos) = self.courses.iter().position(|c| c.id == course_id) {
            self.courses.remove(pos);
        }
    }

    pub fn course(&self, course_id: u32) -> Option<&Course> {
        self.courses.iter().find(|c| c.id == course_id)
    }

    fn course_mut(&mut self, course_id: u32) -> Option<&mut Course> {
        self.courses.iter_mut().find(|c| c.id == course_id)
    }

    pub fn all_courses(&self) -> Vec<Course> {
        self.courses.clone()
    }

    // Teachers

    pub fn add_teacher(&mut self, teacher: Teacher) {
        self.teachers.push(teacher);
    }

    pub fn teacher(&self, teacher_id: u32) -> Option<&Teacher> {
        self.teachers.iter().find(|t| t.id == teacher_id)
    }

    pub fn all_teachers(&self) -> Vec<Teacher> {
        self.teachers.clone()
    }

    // Students

    pub fn add_student(&mut self, student: Student) {
        self.students.push(student);
    }

    pub fn student(&self, student_id: u32) -> Option<&Student> {
        self.students.iter().find(|s| s.id == student_id)
    }

    pub fn all_students(&self) -> Vec<Student> {
        self.students.clone()
    }

    // Cross-entity operations

    /// Assigns a teacher to a course, overwriting any prior assignment.
    ///
    /// Requires both records to exist at call time; otherwise the course is
    /// left untouched.
    pub fn assign_teacher(&mut self, teacher_id: u32, course_id: u32) {
        if self.teacher(teacher_id).is_none() {
            return;
        }
        if let Some(course) = self.course_mut(course_id) {
            course.teacher = Some(teacher_id);
        }
    }

    /// Courses currently assigned to the teacher, in registry order.
    pub fn courses_by_teacher(&self, teacher_id: u32) -> Vec<Course> {
        self.courses
            .iter()
            .filter(|c| c.teacher == Some(teacher_id))
            .cloned()
            .collect()
    }

    /// Puts a student on a course roster.
    ///
    /// Both records must exist; the roster itself rejects duplicates, so
    /// re-enrolling is a quiet no-op.
    pub fn enroll_student(&mut self, student_id: u32, course_id: u32) {
        if self.student(student_id).is_none() {
            return;
        }
        if let Some(course) = self.course_mut(course_id) {
            course.enroll(student_id);
        }
    }

    /// Takes a student off a course roster; symmetric to
    /// [`Registry::enroll_student`].
    pub fn withdraw_student(&mut self, student_id: u32, course_id: u32) {
        if self.student(student_id).is_none() {
            return;
        }
        if let Some(course) = self.course_mut(course_id) {
            course.withdraw(student_id);
        }
    }

    /// Resolves the course roster to student records, in roster order.
    ///
    /// Returns an empty list for an unknown course. A roster id that no
    /// longer resolves is skipped, which cannot happen through the public
    /// surface since students are never removed.
    pub fn students_on_course(&self, course_id: u32) -> Vec<Student> {
        let Some(course) = self.course(course_id) else {
            return Vec::new();
        };

        course
            .roster()
            .iter()
            .filter_map(|id| self.student(*id))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_registry() -> Registry {
        let mut registry = Registry::new();
        registry.add_teacher(Teacher::new(1, "Ivan Petrov", "Computer Science"));
        registry.add_student(Student::new(1, "Alex", "a@x.com"));
        registry.add_course(Course::online(1, "Rust", "Zoom", "zoom.com/rust"));
        registry
    }

    #[test]
    fn lookups_on_empty_registry_miss() {
        let registry = Registry::new();

        assert!(registry.course(1).is_none());
        assert!(registry.teacher(1).is_none());
        assert!(registry.student(1).is_none());
    }

    #[test]
    fn add_then_lookup_returns_same_course() {
        let registry = sample_registry();
        let course = registry.course(1).unwrap();

        assert_eq!(course.id, 1);
        assert_eq!(course.name, "Rust");
        assert!(matches!(
            course.kind,
            cursus_common::model::CourseKind::Online { .. }
        ));
    }

    #[test]
    fn duplicate_ids_resolve_to_first_added() {
        let mut registry = Registry::new();
        registry.add_student(Student::new(1, "First", "first@x.com"));
        registry.add_student(Student::new(1, "Second", "second@x.com"));

        assert_eq!(registry.student(1).unwrap().name, "First");
        assert_eq!(registry.all_students().len(), 2);
    }

    #[test]
    fn assign_with_unknown_teacher_changes_nothing() {
        let mut registry = sample_registry();
        registry.assign_teacher(42, 1);

        assert_eq!(registry.course(1).unwrap().teacher, None);
    }

    #[test]
    fn assign_overwrites_prior_teacher() {
        let mut registry = sample_registry();
        registry.add_teacher(Teacher::new(2, "Maria Sidorova", "Mathematics"));

        registry.assign_teacher(1, 1);
        registry.assign_teacher(2, 1);

        assert_eq!(registry.course(1).unwrap().teacher, Some(2));
    }

    #[test]
    fn remove_course_then_lookup_misses() {
        let mut registry = sample_registry();
        registry.remove_course(1);

        assert!(registry.course(1).is_none());
        // Removing again is a no-op.
        registry.remove_course(1);
        assert!(registry.all_courses().is_empty());
    }

    #[test]
    fn enroll_with_unknown_course_changes_nothing() {
        let mut registry = sample_registry();
        registry.enroll_student(1, 42);

        assert!(registry.course(1).unwrap().roster().is_empty());
    }

    #[test]
    fn all_students_is_a_defensive_copy() {
        let registry = sample_registry();

        let mut copy = registry.all_students();
        copy.clear();
        copy.push(Student::new(9, "Intruder", "x@x.com"));

        let fresh = registry.all_students();
        assert_eq!(fresh.len(), 1);
        assert_eq!(fresh[0].name, "Alex");
    }

    #[test]
    fn courses_by_teacher_follows_registry_order() {
        let mut registry = sample_registry();
        registry.add_course(Course::offline(2, "Math", "Room 301", "Mon 10:00"));
        registry.add_course(Course::online(3, "Physics", "Zoom", "zoom.com/p"));

        registry.assign_teacher(1, 3);
        registry.assign_teacher(1, 1);

        let taught: Vec<u32> = registry.courses_by_teacher(1).iter().map(|c| c.id).collect();
        assert_eq!(taught, vec![1, 3]);
    }

    #[test]
    fn students_on_course_resolves_roster_in_order() {
        let mut registry = sample_registry();
        registry.add_student(Student::new(2, "Elena", "e@x.com"));
        registry.enroll_student(2, 1);
        registry.enroll_student(1, 1);

        let students = registry.students_on_course(1);
        let names: Vec<&str> = students.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Elena", "Alex"]);
    }

    #[test]
    fn students_on_unknown_course_is_empty() {
        let registry = sample_registry();
        assert!(registry.students_on_course(42).is_empty());
    }
}
