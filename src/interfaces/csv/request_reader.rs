use crate::domain::request::PaymentRequest;
use crate::error::{PromptPayError, Result};
use std::io::Read;

/// Reads payment requests from a CSV source with a `target,amount` header.
///
/// Whitespace is trimmed and record lengths are flexible, so a malformed row
/// surfaces as an error item instead of ending the stream.
pub struct RequestReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> RequestReader<R> {
    /// Creates a new `RequestReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and deserializes requests.
    pub fn requests(self) -> impl Iterator<Item = Result<PaymentRequest>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(PromptPayError::from))
    }
}
