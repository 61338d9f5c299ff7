pub mod atsp_reader;
pub use atsp_reader::*;
pub mod atsp_writer;
pub use atsp_writer::AtspWriter;

pub mod result_writer;
pub use result_writer::*;
