use std::fmt;

/// A student known to the registry.
///
/// The id is treated as immutable identity; name and email are free-form
/// and unvalidated. Students are created through the registry and never
/// removed from it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Student {
    pub id: u32,
    pub name: String,
    pub email: String,
}

impl Student {
    pub fn new(id: u32, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
        }
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.email)
    }
}
