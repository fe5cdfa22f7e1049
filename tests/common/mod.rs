#![allow(dead_code)]
//! Small systems and trajectories, written to a temporary directory.
//!
//! The system consists of two "helices" of four atoms each: residues 1 to 4 and residues 5 to
//! 8. Every frame of the trajectory places each helix along a straight line.
use std::fmt::Write;
use std::path::PathBuf;

use tempfile::TempDir;

pub const NATOMS: usize = 8;
pub const FIRST: &str = "resid <= 4";
pub const SECOND: &str = "resid > 4";

/// Spacing between consecutive atoms of a helix, in Ångström.
const RISE: f64 = 1.5;

pub struct Fixture {
    // Keeps the directory around for as long as the fixture lives.
    _dir: TempDir,
    pub system: PathBuf,
    pub trajectory: PathBuf,
}

/// The directions of both helices, for each of the frames in [`Fixture::new`].
pub const FRAMES: [([f64; 3], [f64; 3]); 3] = [
    // Both straight up.
    ([0.0, 0.0, 1.0], [0.0, 0.0, 1.0]),
    // Both leaning over by 45 degrees.
    ([1.0, 0.0, 1.0], [1.0, 0.0, 1.0]),
    // Leaning away from each other, the second one upside down.
    ([1.0, 0.0, 1.0], [1.0, 0.0, -1.0]),
];

/// The expected angles for [`FRAMES`].
pub const ANGLES: [f64; 3] = [0.0, 45.0, 0.0];

fn helix(origin: [f64; 3], direction: [f64; 3]) -> Vec<[f64; 3]> {
    let norm = direction.iter().map(|d| d * d).sum::<f64>().sqrt();
    (0..NATOMS / 2)
        .map(|i| {
            let t = i as f64 * RISE / norm;
            [
                origin[0] + direction[0] * t,
                origin[1] + direction[1] * t,
                origin[2] + direction[2] * t,
            ]
        })
        .collect()
}

fn positions(first: [f64; 3], second: [f64; 3]) -> Vec<[f64; 3]> {
    let mut positions = helix([0.0, 0.0, 0.0], first);
    positions.extend(helix([10.0, 0.0, 0.0], second));
    positions
}

pub fn pdb(positions: &[[f64; 3]]) -> String {
    let mut pdb = String::new();
    for (i, [x, y, z]) in positions.iter().enumerate() {
        let serial = i + 1;
        let resid = i + 1;
        writeln!(
            pdb,
            "ATOM  {serial:>5}  CA  ALA A{resid:>4}    {x:>8.3}{y:>8.3}{z:>8.3}  1.00  0.00           C"
        )
        .unwrap();
    }
    pdb.push_str("END\n");
    pdb
}

pub fn xyz(frames: &[Vec<[f64; 3]>]) -> String {
    let mut xyz = String::new();
    for (idx, positions) in frames.iter().enumerate() {
        writeln!(xyz, "{}", positions.len()).unwrap();
        writeln!(xyz, "frame {idx}").unwrap();
        for [x, y, z] in positions {
            writeln!(xyz, "C {x:.6} {y:.6} {z:.6}").unwrap();
        }
    }
    xyz
}

impl Fixture {
    /// A system with a trajectory of [`FRAMES`].
    pub fn new() -> Self {
        let frames: Vec<_> = FRAMES
            .iter()
            .map(|&(first, second)| positions(first, second))
            .collect();
        Self::with_frames(&frames)
    }

    pub fn with_frames(frames: &[Vec<[f64; 3]>]) -> Self {
        let dir = tempfile::tempdir().expect("could not create a temporary directory");
        let system = dir.path().join("system.pdb");
        let trajectory = dir.path().join("trajectory.xyz");
        std::fs::write(&system, pdb(&positions(FRAMES[0].0, FRAMES[0].1))).unwrap();
        std::fs::write(&trajectory, xyz(frames)).unwrap();
        Self {
            _dir: dir,
            system,
            trajectory,
        }
    }
}
