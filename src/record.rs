//! The plain text output format.
//!
//! ```text
//! # protein-tilt system.pdb traj.xtc resid <= 20
//! #Frame	Angle	Cosine
//! 0 12.34567890 0.97687326
//! 1 12.40012345 0.97667278
//! ```
use std::io::Write;

use crate::Tilt;

/// Writes the echoed command line, a column header, and one record per frame.
#[derive(Debug)]
pub struct RecordWriter<W> {
    writer: W,
    precision: usize,
}

impl<W: Write> RecordWriter<W> {
    /// The number of decimals that angles and cosines are written with by default.
    pub const DEFAULT_PRECISION: usize = 8;

    pub fn new(writer: W) -> Self {
        Self {
            writer,
            precision: Self::DEFAULT_PRECISION,
        }
    }

    /// Set the number of decimals that angles and cosines are written with.
    pub fn with_precision(self, precision: usize) -> Self {
        Self { precision, ..self }
    }

    /// Write the invoked command line as a comment.
    pub fn write_command_line<S: AsRef<str>>(&mut self, args: &[S]) -> std::io::Result<()> {
        let line = args.iter().map(AsRef::as_ref).collect::<Vec<_>>().join(" ");
        writeln!(self.writer, "# {line}")
    }

    pub fn write_header(&mut self) -> std::io::Result<()> {
        writeln!(self.writer, "#Frame\tAngle\tCosine")
    }

    pub fn write_record(&mut self, index: usize, tilt: &Tilt) -> std::io::Result<()> {
        let p = self.precision;
        writeln!(self.writer, "{index} {:.p$} {:.p$}", tilt.angle, tilt.cosine)
    }

    pub fn flush(&mut self) -> std::io::Result<()> {
        self.writer.flush()
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}
