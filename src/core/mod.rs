pub mod controller;
pub mod pipeline;
pub mod state;

pub use crate::domain::model::{Candidate, Group, PageState, PresentationModel};
pub use crate::domain::ports::{CandidateSource, ConfigProvider};
pub use crate::utils::error::Result;
