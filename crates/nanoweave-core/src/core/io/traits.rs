use crate::core::models::design::Design;
use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Defines the interface for reading and writing assembly design files.
///
/// Implementors handle format-specific parsing and serialization; the
/// provided `_path` methods wrap them with buffered file handling.
pub trait DesignFile {
    /// The error type for I/O operations.
    type Error: Error + From<io::Error>;

    /// Reads a design from a buffered reader.
    ///
    /// # Errors
    ///
    /// Returns an error if parsing fails or the stored design violates the
    /// model invariants.
    fn read_from(reader: &mut impl BufRead) -> Result<Design, Self::Error>;

    /// Writes a design to a writer.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the underlying write fails.
    fn write_to(design: &Design, writer: &mut impl Write) -> Result<(), Self::Error>;

    /// Reads a design from a file path.
    fn read_from_path<P: AsRef<Path>>(path: P) -> Result<Design, Self::Error> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        Self::read_from(&mut reader)
    }

    /// Writes a design to a file path.
    fn write_to_path<P: AsRef<Path>>(design: &Design, path: P) -> Result<(), Self::Error> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        Self::write_to(design, &mut writer)
    }
}
