//! Per frame tilt of a set of selections relative to the z-axis.
use std::io::Write;

use glam::DVec3;
use tracing::{debug, trace};

use crate::{principal_axes, Error, Frame, FrameStream, RecordWriter, Result, Selection};

/// Flip `v` into the +z hemisphere.
///
/// The sign of a principal axis is arbitrary, so all axes are made to point upwards before they
/// are summed.
pub fn canonicalize(v: DVec3) -> DVec3 {
    if v.z < 0.0 {
        -v
    } else {
        v
    }
}

/// The orientation of a single selection in `frame`: its canonicalized dominant principal axis.
pub fn orientation(
    frame: &Frame,
    selection: &Selection,
    scratch: &mut Vec<DVec3>,
) -> Result<DVec3> {
    if !frame.contains(selection) {
        let expected = selection.indices().iter().max().map_or(0, |max| max + 1);
        return Err(Error::AtomCountMismatch {
            frame: frame.index,
            expected,
            found: frame.natoms(),
        });
    }
    scratch.clear();
    scratch.extend(frame.coords(selection));
    let pca = principal_axes(scratch)?;
    trace!(
        frame = frame.index,
        selection = selection.expr(),
        variances = ?pca.variances,
        "principal axes"
    );
    Ok(canonicalize(pca.dominant()))
}

/// Sum the orientations of all `selections` in `frame`.
///
/// The sum is not normalized by the number of selections.
pub fn aggregate(frame: &Frame, selections: &[Selection]) -> Result<DVec3> {
    let mut scratch = Vec::new();
    selections
        .iter()
        .try_fold(DVec3::ZERO, |sum, selection| -> Result<DVec3> {
            Ok(sum + orientation(frame, selection, &mut scratch)?)
        })
}

/// The tilt of a vector with respect to the z-axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tilt {
    /// Cosine of the angle between the vector and +z, within [-1, 1].
    pub cosine: f64,
    /// Angle between the vector and +z in degrees, within [0, 180].
    pub angle: f64,
}

impl Tilt {
    /// Create a [`Tilt`] from a cosine, clamping it to [-1, 1] first so that round-off cannot
    /// push it out of the domain of `acos`.
    pub fn from_cosine(cosine: f64) -> Self {
        let cosine = cosine.clamp(-1.0, 1.0);
        Self {
            cosine,
            angle: cosine.acos().to_degrees(),
        }
    }

    /// Determine the tilt of `v`.
    ///
    /// Returns [`None`] if `v` has no direction, i.e., it is zero or not finite.
    pub fn from_vector(v: DVec3) -> Option<Self> {
        let length = v.length();
        if length == 0.0 || !length.is_finite() {
            return None;
        }
        Some(Self::from_cosine(v.z / length))
    }
}

/// Determine the [`Tilt`] of the aggregate orientation of `selections` in `frame`.
pub fn frame_tilt(frame: &Frame, selections: &[Selection]) -> Result<Tilt> {
    let sum = aggregate(frame, selections)?;
    trace!(frame = frame.index, x = sum.x, y = sum.y, z = sum.z, "aggregate orientation");
    Tilt::from_vector(sum).ok_or(Error::DegenerateOrientation { frame: frame.index })
}

/// Go through all frames of `stream` and write the tilt of `selections` for each of them.
///
/// Returns the number of frames that were processed.
pub fn run<S, W>(
    stream: &mut S,
    selections: &[Selection],
    records: &mut RecordWriter<W>,
) -> Result<usize>
where
    S: FrameStream,
    W: Write,
{
    process(stream, records, |frame| frame_tilt(frame, selections))
}

/// Write a record for every frame of `stream`, stopping at the first frame `tilt_of` fails on.
fn process<S, W, F>(
    stream: &mut S,
    records: &mut RecordWriter<W>,
    mut tilt_of: F,
) -> Result<usize>
where
    S: FrameStream,
    W: Write,
    F: FnMut(&Frame) -> Result<Tilt>,
{
    let mut frame = Frame::default();
    let mut n = 0;
    while stream.read_frame(&mut frame)? {
        let tilt = tilt_of(&frame)?;
        records.write_record(frame.index, &tilt)?;
        n += 1;
    }
    debug!(nframes = n, "processed trajectory");
    Ok(n)
}
