pub mod dom;
pub mod engine;
pub mod footer;
pub mod publications;
pub mod year;

pub use crate::domain::model::{AssembledPage, Publication, RenderedPublications};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
