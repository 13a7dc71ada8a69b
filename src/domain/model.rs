use serde::{Deserialize, Serialize};

/// A single raw record as served by the hiring endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: i64,
    #[serde(rename = "listId")]
    pub list_id: i64,
    #[serde(default)]
    pub name: Option<String>,
}

impl Candidate {
    pub fn new(id: i64, list_id: i64, name: Option<&str>) -> Self {
        Self {
            id,
            list_id,
            name: name.map(str::to_string),
        }
    }

    /// A candidate is shown only when its name has at least one non-whitespace character.
    pub fn is_valid(&self) -> bool {
        self.name
            .as_deref()
            .is_some_and(|name| !name.trim().is_empty())
    }
}

/// Valid candidates sharing one `list_id`. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Group {
    #[serde(rename = "listId")]
    pub list_id: i64,
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PageState {
    Loading,
    Success,
    Failed,
}

/// Immutable snapshot of what the presentation layer should show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PresentationModel {
    pub status: PageState,
    pub groups: Vec<Group>,
    #[serde(rename = "errorMessage")]
    pub error_message: String,
}

impl PresentationModel {
    pub fn loading() -> Self {
        Self {
            status: PageState::Loading,
            groups: Vec::new(),
            error_message: String::new(),
        }
    }

    pub fn success(groups: Vec<Group>) -> Self {
        Self {
            status: PageState::Success,
            groups,
            error_message: String::new(),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            status: PageState::Failed,
            groups: Vec::new(),
            error_message: message.into(),
        }
    }

    pub fn candidate_count(&self) -> usize {
        self.groups.iter().map(|g| g.candidates.len()).sum()
    }
}

impl Default for PresentationModel {
    fn default() -> Self {
        Self::loading()
    }
}
