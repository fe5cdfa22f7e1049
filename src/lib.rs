//! Measure how far one or more selections (typically helices) of a molecular system are tilted
//! away from the z-axis, frame by frame.
//!
//! For every frame, the dominant principal axis of each [`Selection`] is flipped into the +z
//! hemisphere and the axes are summed. The angle between that sum and the z-axis is the tilt.
//!
//! Reading structures and trajectories is left to an external library behind the
//! [`StructureSource`] and [`FrameStream`] traits. The [`backend`] module binds these to
//! chemfiles.
use glam::DVec3;

pub use crate::axes::{principal_axes, PrincipalAxes};
pub use crate::error::{Error, Result};
pub use crate::record::RecordWriter;
pub use crate::source::{FrameStream, MemoryTrajectory, Selection, StructureSource};
pub use crate::tilt::Tilt;

pub mod axes;
pub mod backend;
mod error;
pub mod logging;
pub mod record;
pub mod source;
pub mod tilt;

/// The smallest number of atoms a selection must contain for its principal axes to be
/// meaningful.
pub const MIN_SELECTION_ATOMS: usize = 2;

#[derive(Debug, Default, Clone)]
pub struct Frame {
    /// Zero-based position of this frame within its trajectory.
    pub index: usize,
    pub positions: Vec<DVec3>,
}

impl Frame {
    pub fn natoms(&self) -> usize {
        self.positions.len()
    }

    /// Iterate over the positions of the atoms in `selection`.
    ///
    /// Indices that lie beyond this frame are skipped. Use [`Frame::contains`] to check whether
    /// a selection fits.
    pub fn coords<'f>(&'f self, selection: &'f Selection) -> impl Iterator<Item = DVec3> + 'f {
        selection
            .indices()
            .iter()
            .filter_map(move |&idx| self.positions.get(idx).copied())
    }

    /// Determine whether every atom of `selection` is present in this frame.
    pub fn contains(&self, selection: &Selection) -> bool {
        selection
            .indices()
            .iter()
            .max()
            .map_or(true, |&max| max < self.natoms())
    }
}
