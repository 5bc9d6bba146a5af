//! Static reference datasets shown alongside the live metrics.
//!
//! These never change at runtime; they exist purely as chart inputs.

/// One month of the performance trend series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TrendPoint {
    pub label: &'static str,
    pub applications: u32,
    pub users: u32,
}

/// One slice of the resource distribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ResourceShare {
    pub label: &'static str,
    pub percent: u8,
    /// Hex colour, `#rrggbb`.
    pub color: &'static str,
}

impl ResourceShare {
    /// Parse [`ResourceShare::color`] into RGB components.
    pub fn rgb(&self) -> Option<(u8, u8, u8)> {
        let hex = self.color.strip_prefix('#')?;
        if hex.len() != 6 {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
        Some((channel(0)?, channel(2)?, channel(4)?))
    }
}

/// Six-month performance trend: applications and users per month.
pub const PERFORMANCE_TRENDS: [TrendPoint; 6] = [
    TrendPoint { label: "Jan", applications: 4000, users: 2400 },
    TrendPoint { label: "Feb", applications: 3000, users: 1398 },
    TrendPoint { label: "Mar", applications: 2000, users: 9800 },
    TrendPoint { label: "Apr", applications: 2780, users: 3908 },
    TrendPoint { label: "May", applications: 1890, users: 4800 },
    TrendPoint { label: "Jun", applications: 2390, users: 3800 },
];

/// Resource distribution by category, summing to 100.
pub const RESOURCE_DISTRIBUTION: [ResourceShare; 3] = [
    ResourceShare { label: "Applications", percent: 45, color: "#3b82f6" },
    ResourceShare { label: "Analytics", percent: 30, color: "#10b981" },
    ResourceShare { label: "Infrastructure", percent: 25, color: "#f59e0b" },
];

/// Number of regions served.
pub const GLOBAL_REGIONS: u32 = 47;

pub fn performance_trends() -> &'static [TrendPoint] {
    &PERFORMANCE_TRENDS
}

pub fn resource_distribution() -> &'static [ResourceShare] {
    &RESOURCE_DISTRIBUTION
}
