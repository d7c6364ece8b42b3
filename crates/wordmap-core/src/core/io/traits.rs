use crate::core::models::block::Block;
use std::error::Error;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Defines the interface for writing finished layouts in some output format.
///
/// Implementors only read the blocks they are given; writing never mutates a
/// block or its grid.
pub trait LayoutWriter {
    /// The error type for write operations.
    type Error: Error + From<io::Error>;

    /// Writes every block to `writer`.
    ///
    /// # Errors
    ///
    /// Returns an error if formatting fails or the writer reports an I/O error.
    fn write_to(blocks: &[Block], writer: &mut impl Write) -> Result<(), Self::Error>;

    /// Writes every block to a newly created file at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or writing fails.
    fn write_to_path<P: AsRef<Path>>(blocks: &[Block], path: P) -> Result<(), Self::Error> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        Self::write_to(blocks, &mut writer)?;
        writer.flush()?;
        Ok(())
    }
}
