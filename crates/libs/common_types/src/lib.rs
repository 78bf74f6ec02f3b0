#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::struct_excessive_bools
)]
mod photo;
mod recommendation;

pub use photo::*;
pub use recommendation::*;
