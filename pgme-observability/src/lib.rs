pub mod exposition;

pub use exposition::{CONTENT_TYPE, render, render_outcome};
