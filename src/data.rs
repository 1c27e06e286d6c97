//! Embedded evaluation results and chart geometry constants

/// Number of raw scores per series in the source encoding
pub const RAW_LEN: usize = 5;

/// Number of angular dimensions on the chart
pub const NUM_DIMS: usize = 11;

/// Outer radius of the polar canvas
pub const R_OUTER: f64 = 100.0;

/// Number of concentric gridline rings
pub const NUM_RINGS: usize = 10;

/// Background sector sizes, in angular slots. Must sum to NUM_DIMS.
pub const SECTOR_SIZES: [usize; 2] = [5, 6];

/// One experimental configuration with its raw scores
pub struct Configuration {
    pub name: &'static str,
    pub color: &'static str,
    pub seen: [f64; RAW_LEN],
    pub unseen: [f64; RAW_LEN],
}

/// The four compared configurations, in display order
pub fn configurations() -> [Configuration; 4] {
    [
        Configuration {
            name: "1 scale (8-th)",
            color: "#4C72B0",
            seen: [91.0, 84.0, 81.0, 76.0, 78.0],
            unseen: [86.0, 81.0, 79.0, 78.0, 78.0],
        },
        Configuration {
            name: "3 scales (6-th, 8-th, 10-th)",
            color: "#DD8452",
            seen: [95.0, 86.0, 82.0, 80.0, 78.0],
            unseen: [90.0, 84.0, 83.0, 82.0, 80.0],
        },
        Configuration {
            name: "7 scales (5-th ~ 11-th)",
            color: "#55A868",
            seen: [88.0, 81.0, 81.0, 79.0, 78.0],
            unseen: [87.0, 79.0, 76.0, 76.0, 77.0],
        },
        Configuration {
            name: "10 scales (3-rd ~ 13-th)",
            color: "#C44E52",
            seen: [94.0, 88.0, 86.0, 85.0, 87.0],
            unseen: [86.0, 81.0, 81.0, 79.0, 78.0],
        },
    ]
}
