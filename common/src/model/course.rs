//! # Course Model
//!
//! A course is a shared record (id, name, assigned teacher, roster) plus a
//! variant payload describing how it is delivered:
//! * **Online**: hosted on a platform, joined through a meeting link.
//! * **Offline**: held in a room on a fixed schedule.
//!
//! Courses store ids only. The teacher field and every roster entry refer
//! to records owned by the registry and are resolved there when needed.

use std::fmt;

use crate::model::teacher::Teacher;

/// Delivery variant of a course and its descriptive fields.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CourseKind {
    Online { platform: String, meeting_link: String },
    Offline { room: String, schedule: String },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Course {
    pub id: u32,
    pub name: String,
    /// Id of the assigned teacher, if any. Set only through the registry.
    pub teacher: Option<u32>,
    pub kind: CourseKind,
    roster: Vec<u32>,
}

impl Course {
    pub fn online(
        id: u32,
        name: impl Into<String>,
        platform: impl Into<String>,
        meeting_link: impl Into<String>,
    ) -> Self {
        Self::with_kind(
            id,
            name,
            CourseKind::Online {
                platform: platform.into(),
                meeting_link: meeting_link.into(),
            },
        )
    }

    pub fn offline(
        id: u32,
        name: impl Into<String>,
        room: impl Into<String>,
        schedule: impl Into<String>,
    ) -> Self {
        Self::with_kind(
            id,
            name,
            CourseKind::Offline {
                room: room.into(),
                schedule: schedule.into(),
            },
        )
    }

    fn with_kind(id: u32, name: impl Into<String>, kind: CourseKind) -> Self {
        Self {
            id,
            name: name.into(),
            teacher: None,
            kind,
            roster: Vec::new(),
        }
    }

    /// Adds a student id to the roster.
    ///
    /// Idempotent: if the id is already on the roster this is a no-op, so
    /// the roster stays unique by id and keeps the order of first
    /// enrollment.
    pub fn enroll(&mut self, student_id: u32) {
        if !self.roster.contains(&student_id) {
            self.roster.push(student_id);
        }
    }

    /// Removes the first roster entry matching the id, if present.
    ///
    /// At most one entry can match because [`Course::enroll`] never admits
    /// duplicates.
    pub fn withdraw(&mut self, student_id: u32) {
        if let Some(pos) = self.roster.iter().position(|id| *id == student_id) {
            self.roster.remove(pos);
        }
    }

    /// Enrolled student ids in enrollment order.
    pub fn roster(&self) -> &[u32] {
        &self.roster
    }

    pub fn kind_label(&self) -> &'static str {
        match self.kind {
            CourseKind::Online { .. } => "Online course",
            CourseKind::Offline { .. } => "Offline course",
        }
    }

    /// Renders the multi-line course summary.
    ///
    /// The caller resolves the assigned teacher through the registry and
    /// passes it in; an unresolved or unassigned teacher renders as
    /// "not assigned". Pure, no side effects.
    pub fn render_info(&self, teacher: Option<&Teacher>) -> String {
        let teacher_name = teacher.map_or("not assigned", |t| t.name.as_str());
        let mut info = format!("{}: {}\n", self.kind_label(), self.name);

        match &self.kind {
            CourseKind::Online {
                platform,
                meeting_link,
            } => {
                info.push_str(&format!("Platform: {platform}\n"));
                info.push_str(&format!("Meeting link: {meeting_link}\n"));
            }
            CourseKind::Offline { room, schedule } => {
                info.push_str(&format!("Room: {room}\n"));
                info.push_str(&format!("Schedule: {schedule}\n"));
            }
        }

        info.push_str(&format!("Teacher: {teacher_name}\n"));
        info.push_str(&format!("Students: {}", self.roster.len()));
        info
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.id, self.name)
    }
}
