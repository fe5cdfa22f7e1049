//! Structures and trajectories read through [chemfiles](https://chemfiles.org).
//!
//! Any format chemfiles understands can be used, e.g., pdb, gro, xtc, dcd, or xyz. The system
//! file provides the topology that selections are evaluated against, and the trajectory only
//! needs to provide positions for the same number of atoms.
use std::path::{Path, PathBuf};

use chemfiles::Trajectory;
use glam::DVec3;
use tracing::debug;

use crate::{Error, Frame, FrameStream, Result, Selection, StructureSource};

fn open(path: &Path) -> Result<Trajectory> {
    Trajectory::open(path, 'r').map_err(|source| Error::Chemfiles {
        path: path.to_path_buf(),
        source,
    })
}

/// A molecular system, taken from the first frame of a structure file.
pub struct ChemfilesSystem {
    path: PathBuf,
    frame: chemfiles::Frame,
}

impl ChemfilesSystem {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let mut frame = chemfiles::Frame::new();
        open(path)?
            .read(&mut frame)
            .map_err(|source| Error::Chemfiles {
                path: path.to_path_buf(),
                source,
            })?;
        debug!(path = %path.display(), natoms = frame.size(), "loaded system");

        Ok(Self {
            path: path.to_path_buf(),
            frame,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StructureSource for ChemfilesSystem {
    fn natoms(&self) -> usize {
        self.frame.size()
    }

    fn select(&self, expr: &str) -> Result<Selection> {
        let mut selection =
            chemfiles::Selection::new(expr).map_err(|source| Error::InvalidSelection {
                expr: expr.to_string(),
                source,
            })?;
        let size = selection.size();
        if size != 1 {
            return Err(Error::UnsupportedSelection {
                expr: expr.to_string(),
                size,
            });
        }

        let indices = selection.list(&self.frame);
        debug!(expr, natoms = indices.len(), "resolved selection");
        Selection::new(expr, indices)
    }
}

/// A trajectory whose frames match the atoms of a [`ChemfilesSystem`].
pub struct ChemfilesTrajectory {
    path: PathBuf,
    trajectory: Trajectory,
    /// The frame chemfiles reads into, before its positions are copied out.
    scratch: chemfiles::Frame,
    natoms: usize,
    nsteps: usize,
    step: usize,
}

impl ChemfilesTrajectory {
    pub fn open<P: AsRef<Path>>(path: P, system: &ChemfilesSystem) -> Result<Self> {
        let path = path.as_ref();
        let mut trajectory = open(path)?;
        let nsteps = trajectory.nsteps();
        debug!(path = %path.display(), nsteps, "opened trajectory");

        Ok(Self {
            path: path.to_path_buf(),
            trajectory,
            scratch: chemfiles::Frame::new(),
            natoms: system.natoms(),
            nsteps,
            step: 0,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The number of frames in this trajectory.
    pub fn nframes(&self) -> usize {
        self.nsteps
    }
}

impl FrameStream for ChemfilesTrajectory {
    fn read_frame(&mut self, frame: &mut Frame) -> Result<bool> {
        if self.step >= self.nsteps {
            return Ok(false);
        }

        self.trajectory
            .read(&mut self.scratch)
            .map_err(|source| Error::Chemfiles {
                path: self.path.clone(),
                source,
            })?;
        let found = self.scratch.size();
        if found != self.natoms {
            return Err(Error::AtomCountMismatch {
                frame: self.step,
                expected: self.natoms,
                found,
            });
        }

        frame.index = self.step;
        frame.positions.clear();
        frame
            .positions
            .extend(self.scratch.positions().iter().map(|&p| DVec3::from_array(p)));
        self.step += 1;
        Ok(true)
    }

    /// Reopens the trajectory, since chemfiles can only read forwards.
    fn home(&mut self) -> Result<()> {
        self.trajectory = open(&self.path)?;
        self.nsteps = self.trajectory.nsteps();
        self.step = 0;
        Ok(())
    }
}
