pub mod command_reader;
pub mod trace_writer;
