use crate::domain::request::PayloadRecord;
use crate::error::Result;
use std::io::Write;

/// Writes generated payloads as CSV with a `target,kind,amount,payload` header.
pub struct PayloadWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> PayloadWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write_record(&mut self, record: &PayloadRecord) -> Result<()> {
        self.writer.serialize(record)?;
        Ok(())
    }

    pub fn write_records<I>(&mut self, records: I) -> Result<()>
    where
        I: IntoIterator<Item = PayloadRecord>,
    {
        for record in records {
            self.write_record(&record)?;
        }
        self.flush()
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> Result<W> {
        self.writer
            .into_inner()
            .map_err(|e| std::io::Error::other(e.to_string()).into())
    }
}
