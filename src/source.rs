use glam::DVec3;

use crate::{Error, Frame, Result, MIN_SELECTION_ATOMS};

/// A set of atoms of a system, resolved from a selection expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    expr: String,
    indices: Vec<usize>,
}

impl Selection {
    /// Create a [`Selection`] from its expression and the atom indices it resolved to.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::TooFewAtoms`] if fewer than [`MIN_SELECTION_ATOMS`] atoms are
    /// selected, since no principal axis can be determined for them.
    pub fn new(expr: impl Into<String>, indices: Vec<usize>) -> Result<Self> {
        let expr = expr.into();
        if indices.len() < MIN_SELECTION_ATOMS {
            return Err(Error::TooFewAtoms {
                expr,
                natoms: indices.len(),
            });
        }
        Ok(Self { expr, indices })
    }

    pub fn expr(&self) -> &str {
        &self.expr
    }

    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

/// A molecular system that selections can be resolved against.
pub trait StructureSource {
    /// The number of atoms in the system.
    fn natoms(&self) -> usize;

    /// Resolve a selection expression into a [`Selection`] of this system.
    fn select(&self, expr: &str) -> Result<Selection>;

    /// Resolve all `exprs`, in order. Stops at the first expression that fails.
    fn select_all<S: AsRef<str>>(&self, exprs: &[S]) -> Result<Vec<Selection>> {
        exprs.iter().map(|expr| self.select(expr.as_ref())).collect()
    }
}

/// A finite sequence of frames that is read one frame at a time.
pub trait FrameStream {
    /// Reads the next frame into `frame` and advances one step.
    ///
    /// Returns `false` once the stream is exhausted, in which case `frame` is left untouched.
    fn read_frame(&mut self, frame: &mut Frame) -> Result<bool>;

    /// Go back to the first frame.
    fn home(&mut self) -> Result<()>;
}

/// A trajectory that lives entirely in memory.
#[derive(Debug, Default, Clone)]
pub struct MemoryTrajectory {
    frames: Vec<Vec<DVec3>>,
    step: usize,
}

impl MemoryTrajectory {
    pub fn new(frames: Vec<Vec<DVec3>>) -> Self {
        Self { frames, step: 0 }
    }

    pub fn nframes(&self) -> usize {
        self.frames.len()
    }
}

impl FrameStream for MemoryTrajectory {
    fn read_frame(&mut self, frame: &mut Frame) -> Result<bool> {
        let Some(positions) = self.frames.get(self.step) else {
            return Ok(false);
        };
        frame.index = self.step;
        frame.positions.clear();
        frame.positions.extend_from_slice(positions);
        self.step += 1;
        Ok(true)
    }

    fn home(&mut self) -> Result<()> {
        self.step = 0;
        Ok(())
    }
}

impl FromIterator<Vec<DVec3>> for MemoryTrajectory {
    fn from_iter<T: IntoIterator<Item = Vec<DVec3>>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_needs_two_atoms() {
        assert!(matches!(
            Selection::new("name CA", vec![]),
            Err(Error::TooFewAtoms { natoms: 0, .. })
        ));
        assert!(matches!(
            Selection::new("name CA", vec![3]),
            Err(Error::TooFewAtoms { natoms: 1, .. })
        ));
        let selection = Selection::new("name CA", vec![3, 4]).unwrap();
        assert_eq!(selection.expr(), "name CA");
        assert_eq!(selection.len(), 2);
    }

    #[test]
    fn frame_contains_selection() {
        let frame = Frame {
            index: 0,
            positions: vec![DVec3::ZERO; 4],
        };
        assert!(frame.contains(&Selection::new("a", vec![0, 3]).unwrap()));
        assert!(!frame.contains(&Selection::new("b", vec![2, 4]).unwrap()));
    }

    #[test]
    fn memory_trajectory_home() -> Result<()> {
        let mut trajectory: MemoryTrajectory =
            (0..5).map(|i| vec![DVec3::splat(i as f64); 3]).collect();
        let mut frame = Frame::default();

        let mut n1 = 0;
        while trajectory.read_frame(&mut frame)? {
            assert_eq!(frame.index, n1);
            assert_eq!(frame.positions[0], DVec3::splat(n1 as f64));
            n1 += 1;
        }
        assert!(
            !trajectory.read_frame(&mut frame)?,
            "idiot check, trajectory should be done by now"
        );
        assert_eq!(frame.index, 4, "an exhausted read leaves the frame untouched");

        // "Move along home!"
        trajectory.home()?;

        let mut n2 = 0;
        while trajectory.read_frame(&mut frame)? {
            n2 += 1;
        }
        assert_eq!(n1, n2, "the number of frames that were read should match");
        assert_eq!(n1, trajectory.nframes());

        Ok(())
    }
}
