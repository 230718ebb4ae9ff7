//! The six faces of a cube sphere and the basis vectors spanning each face.

use glam::DVec3;

/// The six faces of the cube that is warped into the globe.
///
/// Each variant corresponds to a face whose outward normal points along the
/// named axis direction. Discriminants follow the canonical generation order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum CubeFace {
    /// +Y face
    PosY = 0,
    /// −Y face
    NegY = 1,
    /// −X face
    NegX = 2,
    /// +X face
    PosX = 3,
    /// +Z face
    PosZ = 4,
    /// −Z face
    NegZ = 5,
}

impl CubeFace {
    /// All six faces in canonical generation order.
    ///
    /// Meshes are emitted and merged in this order, so face `i` of a merged
    /// buffer owns vertices `i * n² .. (i + 1) * n²`.
    pub const ALL: [CubeFace; 6] = [
        CubeFace::PosY,
        CubeFace::NegY,
        CubeFace::NegX,
        CubeFace::PosX,
        CubeFace::PosZ,
        CubeFace::NegZ,
    ];

    /// Position of this face in [`CubeFace::ALL`].
    #[inline]
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    /// The opposite face (e.g., `PosX` → `NegX`).
    #[must_use]
    pub fn opposite(self) -> CubeFace {
        match self {
            CubeFace::PosX => CubeFace::NegX,
            CubeFace::NegX => CubeFace::PosX,
            CubeFace::PosY => CubeFace::NegY,
            CubeFace::NegY => CubeFace::PosY,
            CubeFace::PosZ => CubeFace::NegZ,
            CubeFace::NegZ => CubeFace::PosZ,
        }
    }

    /// Outward-pointing unit normal for this face.
    #[must_use]
    pub fn normal(self) -> DVec3 {
        match self {
            CubeFace::PosX => DVec3::X,
            CubeFace::NegX => DVec3::NEG_X,
            CubeFace::PosY => DVec3::Y,
            CubeFace::NegY => DVec3::NEG_Y,
            CubeFace::PosZ => DVec3::Z,
            CubeFace::NegZ => DVec3::NEG_Z,
        }
    }

    /// First in-plane axis: the normal's components rotated to `(y, z, x)`.
    ///
    /// Grid column `x` advances along this axis.
    #[must_use]
    pub fn axis_a(self) -> DVec3 {
        let n = self.normal();
        DVec3::new(n.y, n.z, n.x)
    }

    /// Second in-plane axis, `normal × axis_a`.
    ///
    /// Grid row `y` advances along this axis. Because `axis_a × axis_b` equals
    /// the normal, every face gets the same handedness.
    #[must_use]
    pub fn axis_b(self) -> DVec3 {
        self.normal().cross(self.axis_a())
    }

    /// The face a direction vector points into.
    ///
    /// Picks the axis with the largest absolute component. Ties are broken by a
    /// fixed priority: X > Y > Z, positive > negative. A zero vector maps to
    /// [`CubeFace::PosX`].
    #[must_use]
    pub fn from_direction(dir: DVec3) -> CubeFace {
        let ax = dir.x.abs();
        let ay = dir.y.abs();
        let az = dir.z.abs();

        if ax >= ay && ax >= az {
            if dir.x >= 0.0 {
                CubeFace::PosX
            } else {
                CubeFace::NegX
            }
        } else if ay >= az {
            if dir.y >= 0.0 {
                CubeFace::PosY
            } else {
                CubeFace::NegY
            }
        } else if dir.z >= 0.0 {
            CubeFace::PosZ
        } else {
            CubeFace::NegZ
        }
    }
}
