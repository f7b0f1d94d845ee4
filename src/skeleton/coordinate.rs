use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Generalized coordinate of the gait model.
///
/// Rotational coordinates are expressed in degrees, translational ones in
/// model length units (meters).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum Coordinate {
    PelvisTraX = 0,
    PelvisTraY,
    PelvisTraZ,
    PelvisRotX,
    PelvisRotY,
    PelvisRotZ,
    HipRFlex,
    HipRAdd,
    HipRRot,
    HipLFlex,
    HipLAdd,
    HipLRot,
    KneeRFlex,
    KneeLFlex,
    AnkleRFlex,
    AnkleLFlex,
    LumbarFlex,
    LumbarBend,
    LumbarRot,
}

impl Coordinate {
    /// Number of degrees of freedom.
    pub const COUNT: usize = 19;

    pub const ALL: [Coordinate; Self::COUNT] = [
        Coordinate::PelvisTraX,
        Coordinate::PelvisTraY,
        Coordinate::PelvisTraZ,
        Coordinate::PelvisRotX,
        Coordinate::PelvisRotY,
        Coordinate::PelvisRotZ,
        Coordinate::HipRFlex,
        Coordinate::HipRAdd,
        Coordinate::HipRRot,
        Coordinate::HipLFlex,
        Coordinate::HipLAdd,
        Coordinate::HipLRot,
        Coordinate::KneeRFlex,
        Coordinate::KneeLFlex,
        Coordinate::AnkleRFlex,
        Coordinate::AnkleLFlex,
        Coordinate::LumbarFlex,
        Coordinate::LumbarBend,
        Coordinate::LumbarRot,
    ];

    #[inline]
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// One instantaneous body configuration.
///
/// A sparse mapping from [`Coordinate`] to value. Coordinates that were never
/// set read back as `0.0`, so callers may build partial poses.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    values: FxHashMap<Coordinate, f32>,
}

impl Pose {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The reference configuration the skin mesh was modelled in.
    #[must_use]
    pub fn bind() -> Self {
        BIND_POSE.iter().copied().collect()
    }

    /// Value of `coordinate`, `0.0` when absent.
    #[inline]
    #[must_use]
    pub fn get(&self, coordinate: Coordinate) -> f32 {
        self.values.get(&coordinate).copied().unwrap_or(0.0)
    }

    #[inline]
    pub fn set(&mut self, coordinate: Coordinate, value: f32) {
        self.values.insert(coordinate, value);
    }

    /// Builder-style [`Pose::set`].
    #[must_use]
    pub fn with(mut self, coordinate: Coordinate, value: f32) -> Self {
        self.set(coordinate, value);
        self
    }

    pub fn remove(&mut self, coordinate: Coordinate) -> Option<f32> {
        self.values.remove(&coordinate)
    }

    #[must_use]
    pub fn contains(&self, coordinate: Coordinate) -> bool {
        self.values.contains_key(&coordinate)
    }

    /// Number of explicitly set coordinates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Coordinate, f32)> + '_ {
        self.values.iter().map(|(&c, &v)| (c, v))
    }

    /// Dense view with every coordinate resolved (absent ones as zero).
    #[must_use]
    pub fn to_dense(&self) -> [f32; Coordinate::COUNT] {
        let mut dense = [0.0; Coordinate::COUNT];
        for (coordinate, value) in self.iter() {
            dense[coordinate.index()] = value;
        }
        dense
    }
}

impl FromIterator<(Coordinate, f32)> for Pose {
    fn from_iter<I: IntoIterator<Item = (Coordinate, f32)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl Extend<(Coordinate, f32)> for Pose {
    fn extend<I: IntoIterator<Item = (Coordinate, f32)>>(&mut self, iter: I) {
        self.values.extend(iter);
    }
}

/// Pose used for binding the skeleton to the skin mesh.
pub const BIND_POSE: [(Coordinate, f32); Coordinate::COUNT] = [
    (Coordinate::PelvisTraX, 0.0),
    (Coordinate::PelvisTraY, 0.0),
    (Coordinate::PelvisTraZ, 0.0),
    (Coordinate::PelvisRotX, 0.0),
    (Coordinate::PelvisRotY, 0.0),
    (Coordinate::PelvisRotZ, 0.0),
    (Coordinate::HipRFlex, 3.0),
    (Coordinate::HipLFlex, 3.0),
    (Coordinate::HipRAdd, -5.0),
    (Coordinate::HipLAdd, 5.0),
    (Coordinate::HipRRot, 0.0),
    (Coordinate::HipLRot, 0.0),
    (Coordinate::KneeRFlex, -15.0),
    (Coordinate::KneeLFlex, -15.0),
    (Coordinate::AnkleRFlex, 15.0),
    (Coordinate::AnkleLFlex, 15.0),
    (Coordinate::LumbarFlex, 0.0),
    (Coordinate::LumbarBend, 0.0),
    (Coordinate::LumbarRot, 0.0),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_matches_discriminants() {
        for (i, c) in Coordinate::ALL.iter().enumerate() {
            assert_eq!(c.index(), i);
        }
    }

    #[test]
    fn bind_pose_sets_every_coordinate() {
        let bind = Pose::bind();
        assert_eq!(bind.len(), Coordinate::COUNT);
        assert_eq!(bind.get(Coordinate::HipRAdd), -5.0);
        assert_eq!(bind.get(Coordinate::AnkleLFlex), 15.0);
    }
}
