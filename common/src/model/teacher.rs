use std::fmt;

/// A teacher known to the registry.
///
/// Courses never own a teacher; they hold the id and resolve it through
/// the registry when rendering.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Teacher {
    pub id: u32,
    pub name: String,
    pub department: String,
}

impl Teacher {
    pub fn new(id: u32, name: impl Into<String>, department: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            department: department.into(),
        }
    }
}

impl fmt::Display for Teacher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.name, self.department)
    }
}
