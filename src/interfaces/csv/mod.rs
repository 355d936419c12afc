pub mod payload_writer;
pub mod request_reader;
