//! Precomputed gradient stop profiles
//!
//! Hand-tuned stop positions and opacities approximating an ease-out-cubic
//! falloff for 2 to 24 steps. Steps 2-19 follow the smooth-overlays data,
//! steps 20-24 continue the same pattern.
//!
//! The arrays are authoritative: a table-backed fade emits exactly one stop
//! per entry, whatever the step count says.

/// Smallest step count with a precomputed profile
pub const MIN_STEPS: u32 = 2;

/// Largest step count with a precomputed profile
pub const MAX_STEPS: u32 = 24;

/// Precomputed stop positions (percent) and opacities for one step count
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StepProfile {
    pub steps: u32,
    pub positions: &'static [f64],
    pub opacities: &'static [f64],
}

impl StepProfile {
    /// Number of stops in this profile
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Iterate `(position, opacity)` pairs in ascending position order
    pub fn pairs(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.positions
            .iter()
            .copied()
            .zip(self.opacities.iter().copied())
    }
}

/// Look up the precomputed profile for a step count
pub fn lookup(steps: u32) -> Option<&'static StepProfile> {
    if !(MIN_STEPS..=MAX_STEPS).contains(&steps) {
        return None;
    }
    PROFILES.get((steps - MIN_STEPS) as usize)
}

/// All precomputed profiles, ordered by step count
pub fn profiles() -> &'static [StepProfile] {
    &PROFILES
}

static PROFILES: [StepProfile; 23] = [
    StepProfile {
        steps: 2,
        positions: &[0.0, 100.0],
        opacities: &[1.0, 0.0],
    },
    StepProfile {
        steps: 3,
        positions: &[0.0, 50.0, 100.0],
        opacities: &[1.0, 0.13, 0.0],
    },
    StepProfile {
        steps: 4,
        positions: &[0.0, 33.0, 67.0, 100.0],
        opacities: &[1.0, 0.3, 0.04, 0.0],
    },
    StepProfile {
        steps: 5,
        positions: &[0.0, 25.0, 50.0, 75.0, 100.0],
        opacities: &[1.0, 0.42, 0.13, 0.02, 0.0],
    },
    StepProfile {
        steps: 6,
        positions: &[0.0, 20.0, 40.0, 60.0, 80.0, 100.0],
        opacities: &[1.0, 0.51, 0.22, 0.06, 0.01, 0.0],
    },
    StepProfile {
        steps: 7,
        positions: &[0.0, 17.0, 33.0, 50.0, 67.0, 83.0, 100.0],
        opacities: &[1.0, 0.58, 0.3, 0.13, 0.04, 0.0, 0.0],
    },
    StepProfile {
        steps: 8,
        positions: &[0.0, 14.0, 29.0, 43.0, 57.0, 71.0, 86.0, 100.0],
        opacities: &[1.0, 0.63, 0.36, 0.19, 0.08, 0.02, 0.0, 0.0],
    },
    StepProfile {
        steps: 9,
        positions: &[0.0, 13.0, 25.0, 38.0, 50.0, 63.0, 75.0, 88.0, 100.0],
        opacities: &[1.0, 0.67, 0.42, 0.24, 0.13, 0.05, 0.02, 0.0, 0.0],
    },
    StepProfile {
        steps: 10,
        positions: &[0.0, 11.0, 22.0, 33.0, 44.0, 56.0, 67.0, 78.0, 89.0, 100.0],
        opacities: &[1.0, 0.7, 0.47, 0.3, 0.17, 0.09, 0.04, 0.01, 0.0, 0.0],
    },
    StepProfile {
        steps: 11,
        positions: &[0.0, 10.0, 20.0, 30.0, 40.0, 50.0, 60.0, 70.0, 80.0, 90.0, 100.0],
        opacities: &[1.0, 0.73, 0.51, 0.34, 0.22, 0.13, 0.06, 0.03, 0.01, 0.0, 0.0],
    },
    StepProfile {
        steps: 12,
        positions: &[0.0, 9.0, 18.0, 27.0, 36.0, 45.0, 55.0, 64.0, 73.0, 82.0, 91.0, 100.0],
        opacities: &[1.0, 0.75, 0.55, 0.38, 0.26, 0.16, 0.09, 0.05, 0.02, 0.01, 0.0, 0.0],
    },
    StepProfile {
        steps: 13,
        positions: &[0.0, 8.0, 17.0, 25.0, 33.0, 42.0, 50.0, 58.0, 67.0, 75.0, 83.0, 92.0, 100.0],
        opacities: &[1.0, 0.77, 0.58, 0.42, 0.3, 0.2, 0.13, 0.07, 0.04, 0.02, 0.0, 0.0, 0.0],
    },
    StepProfile {
        steps: 14,
        positions: &[
            0.0, 8.0, 15.0, 23.0, 31.0, 38.0, 46.0, 54.0, 62.0, 69.0, 77.0, 85.0, 92.0, 100.0,
        ],
        opacities: &[1.0, 0.79, 0.61, 0.46, 0.33, 0.23, 0.16, 0.1, 0.06, 0.03, 0.01, 0.0, 0.0, 0.0],
    },
    StepProfile {
        steps: 15,
        positions: &[
            0.0, 7.0, 14.0, 21.0, 29.0, 36.0, 43.0, 50.0, 57.0, 64.0, 71.0, 79.0, 86.0, 93.0, 100.0,
        ],
        opacities: &[
            1.0, 0.8, 0.63, 0.49, 0.36, 0.27, 0.19, 0.13, 0.08, 0.05, 0.02, 0.01, 0.0, 0.0, 0.0,
        ],
    },
    StepProfile {
        steps: 16,
        positions: &[
            0.0, 7.0, 13.0, 20.0, 27.0, 33.0, 40.0, 47.0, 53.0, 60.0, 67.0, 73.0, 80.0, 87.0, 93.0,
            100.0,
        ],
        opacities: &[
            1.0, 0.81, 0.65, 0.51, 0.39, 0.3, 0.22, 0.15, 0.1, 0.06, 0.04, 0.02, 0.01, 0.0, 0.0,
            0.0,
        ],
    },
    StepProfile {
        steps: 17,
        positions: &[
            0.0, 6.0, 13.0, 19.0, 25.0, 31.0, 38.0, 44.0, 50.0, 56.0, 63.0, 69.0, 75.0, 81.0, 88.0,
            94.0, 100.0,
        ],
        opacities: &[
            1.0, 0.82, 0.67, 0.54, 0.42, 0.32, 0.24, 0.18, 0.13, 0.08, 0.05, 0.03, 0.02, 0.01, 0.0,
            0.0, 0.0,
        ],
    },
    StepProfile {
        steps: 18,
        positions: &[
            0.0, 6.0, 11.0, 17.0, 22.0, 28.0, 33.0, 39.0, 44.0, 50.0, 56.0, 61.0, 67.0, 72.0, 78.0,
            83.0, 89.0, 94.0, 100.0,
        ],
        opacities: &[
            1.0, 0.84, 0.7, 0.58, 0.47, 0.38, 0.3, 0.23, 0.17, 0.13, 0.09, 0.06, 0.04, 0.02, 0.01,
            0.0, 0.0, 0.0, 0.0,
        ],
    },
    StepProfile {
        steps: 19,
        positions: &[
            0.0, 5.0, 11.0, 16.0, 21.0, 26.0, 32.0, 37.0, 42.0, 47.0, 53.0, 58.0, 63.0, 68.0, 74.0,
            79.0, 84.0, 89.0, 95.0, 100.0,
        ],
        opacities: &[
            1.0, 0.85, 0.72, 0.6, 0.49, 0.4, 0.32, 0.25, 0.19, 0.15, 0.11, 0.07, 0.05, 0.03, 0.02,
            0.01, 0.0, 0.0, 0.0, 0.0,
        ],
    },
    StepProfile {
        steps: 20,
        positions: &[
            0.0, 5.0, 10.0, 15.0, 20.0, 25.0, 30.0, 35.0, 40.0, 45.0, 50.0, 55.0, 60.0, 65.0, 70.0,
            75.0, 80.0, 85.0, 90.0, 95.0, 100.0,
        ],
        opacities: &[
            1.0, 0.86, 0.74, 0.63, 0.53, 0.44, 0.36, 0.29, 0.23, 0.18, 0.14, 0.1, 0.07, 0.05, 0.03,
            0.02, 0.01, 0.0, 0.0, 0.0, 0.0,
        ],
    },
    StepProfile {
        steps: 21,
        positions: &[
            0.0, 5.0, 10.0, 14.0, 19.0, 24.0, 29.0, 33.0, 38.0, 43.0, 48.0, 52.0, 57.0, 62.0, 67.0,
            71.0, 76.0, 81.0, 86.0, 90.0, 95.0, 100.0,
        ],
        opacities: &[
            1.0, 0.87, 0.75, 0.64, 0.54, 0.45, 0.37, 0.3, 0.24, 0.19, 0.15, 0.11, 0.08, 0.06, 0.04,
            0.03, 0.02, 0.01, 0.0, 0.0, 0.0, 0.0,
        ],
    },
    StepProfile {
        steps: 22,
        positions: &[
            0.0, 5.0, 9.0, 14.0, 18.0, 23.0, 27.0, 32.0, 36.0, 41.0, 45.0, 50.0, 55.0, 59.0, 64.0,
            68.0, 73.0, 77.0, 82.0, 86.0, 91.0, 95.0, 100.0,
        ],
        opacities: &[
            1.0, 0.88, 0.76, 0.65, 0.55, 0.46, 0.38, 0.31, 0.25, 0.2, 0.16, 0.12, 0.09, 0.07, 0.05,
            0.03, 0.02, 0.01, 0.0, 0.0, 0.0, 0.0, 0.0,
        ],
    },
    StepProfile {
        steps: 23,
        positions: &[
            0.0, 4.0, 9.0, 13.0, 18.0, 22.0, 27.0, 31.0, 36.0, 40.0, 45.0, 49.0, 54.0, 58.0, 63.0,
            67.0, 72.0, 76.0, 81.0, 85.0, 90.0, 94.0, 99.0, 100.0,
        ],
        opacities: &[
            1.0, 0.89, 0.77, 0.66, 0.56, 0.47, 0.39, 0.32, 0.26, 0.21, 0.17, 0.13, 0.1, 0.07, 0.05,
            0.04, 0.03, 0.02, 0.01, 0.0, 0.0, 0.0, 0.0, 0.0,
        ],
    },
    StepProfile {
        steps: 24,
        positions: &[
            0.0, 4.0, 8.0, 13.0, 17.0, 21.0, 25.0, 30.0, 34.0, 38.0, 43.0, 47.0, 51.0, 56.0, 60.0,
            64.0, 69.0, 73.0, 77.0, 82.0, 86.0, 90.0, 95.0, 99.0, 100.0,
        ],
        opacities: &[
            1.0, 0.9, 0.78, 0.67, 0.57, 0.48, 0.4, 0.33, 0.27, 0.22, 0.18, 0.14, 0.11, 0.08, 0.06,
            0.04, 0.03, 0.02, 0.01, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0,
        ],
    },
];
