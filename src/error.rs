use std::path::PathBuf;

use crate::MIN_SELECTION_ATOMS;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The structure or trajectory library could not read a file.
    #[error("could not read '{}': {source}", path.display())]
    Chemfiles {
        path: PathBuf,
        source: chemfiles::Error,
    },

    #[error("invalid selection '{expr}': {source}")]
    InvalidSelection {
        expr: String,
        source: chemfiles::Error,
    },

    /// Pair, triple, angle and dihedral selections resolve to tuples of atoms, not to a set.
    #[error("selection '{expr}' matches groups of {size} atoms, only single atom selections are supported")]
    UnsupportedSelection { expr: String, size: usize },

    #[error(
        "selection '{expr}' matches {natoms} atoms, but at least {min} are needed",
        min = MIN_SELECTION_ATOMS
    )]
    TooFewAtoms { expr: String, natoms: usize },

    #[error("cannot determine principal axes of {0} points")]
    TooFewPoints(usize),

    #[error("frame {frame} has {found} atoms, but the system has {expected}")]
    AtomCountMismatch {
        frame: usize,
        expected: usize,
        found: usize,
    },

    /// The orientation vectors of all selections summed to zero.
    #[error("frame {frame}: the orientation vectors cancel out, the tilt is undefined")]
    DegenerateOrientation { frame: usize },

    #[error("could not set up logging: {0}")]
    Logging(#[from] tracing_subscriber::util::TryInitError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
