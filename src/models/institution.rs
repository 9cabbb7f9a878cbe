//! Institution model

use serde::{Deserialize, Serialize};

/// An institution that authors quizzes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Institution {
    /// Phone number (primary key)
    pub phone: String,

    /// Display name
    pub name: String,
}

impl Institution {
    /// Create a new institution
    #[must_use]
    pub fn new(phone: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            phone: phone.into(),
            name: name.into(),
        }
    }
}
