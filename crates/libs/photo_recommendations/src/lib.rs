#![deny(clippy::unwrap_used)]
#![allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc
)]

mod context;
mod prompt;
mod recommender;
mod scoring;
mod tags;

pub use context::*;
pub use prompt::render_tag_prompt;
pub use recommender::*;
pub use scoring::*;
pub use tags::*;
