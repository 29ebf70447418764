//! Presentation of rendered pages
//!
//! The pipeline hands finished pages to a [`Presenter`]; this module holds
//! the presenters shipped with the crate.

pub mod html;

pub use crate::pipeline::Presenter;
pub use html::{render_document, HtmlOptions, HtmlPresenter};
