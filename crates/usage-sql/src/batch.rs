//! Batched multi-row INSERT writing.

use std::io::{self, Write};

/// Writes row tuples as batched INSERT statements.
///
/// The statement header is deferred until the first row of each batch, so a
/// writer that never sees a row has written nothing by `finish()` and the
/// "no rows" sentinel can be emitted without rewinding the sink. Rows within
/// a batch are separated by `,\n`; a batch closes with `;\n` either when it
/// reaches the configured size or at `finish()`.
///
/// Both emitters go through this one type so their batch boundaries cannot
/// drift apart.
pub struct SqlBatchWriter<'w, W: Write> {
    out: &'w mut W,
    header: &'static str,
    sentinel: &'static str,
    /// Rows per statement; 0 means a single unbounded statement.
    batch_size: usize,
    batch_count: usize,
    rows_written: usize,
}

impl<'w, W: Write> SqlBatchWriter<'w, W> {
    pub fn new(
        out: &'w mut W,
        header: &'static str,
        sentinel: &'static str,
        batch_size: usize,
    ) -> Self {
        Self {
            out,
            header,
            sentinel,
            batch_size,
            batch_count: 0,
            rows_written: 0,
        }
    }

    /// Appends one tuple, opening or closing a batch as needed.
    ///
    /// The tuple is written tab-indented, exactly as passed; serialization
    /// and escaping are the caller's concern.
    pub fn write_row(&mut self, tuple: &str) -> io::Result<()> {
        if self.batch_count == 0 {
            self.out.write_all(self.header.as_bytes())?;
        } else {
            self.out.write_all(b",\n")?;
        }
        self.out.write_all(b"\t")?;
        self.out.write_all(tuple.as_bytes())?;
        self.rows_written += 1;
        self.batch_count += 1;
        if self.batch_size > 0 && self.batch_count >= self.batch_size {
            self.out.write_all(b";\n")?;
            self.batch_count = 0;
        }
        Ok(())
    }

    /// Closes any open batch, or writes the sentinel if no row ever arrived.
    ///
    /// Returns the total row count.
    pub fn finish(self) -> io::Result<usize> {
        if self.rows_written == 0 {
            self.out.write_all(self.sentinel.as_bytes())?;
        } else if self.batch_count > 0 {
            self.out.write_all(b";\n")?;
        }
        Ok(self.rows_written)
    }
}
