pub mod command;
pub mod error;
pub mod mapper;
pub mod parser;
pub mod pipeline;

pub use command::{GpuQuery, NvidiaSmi};
pub use error::ScrapeError;
pub use mapper::Sample;
pub use parser::RawRow;
pub use pipeline::ScrapeOutcome;
