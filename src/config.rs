//! Planner tunables.

use serde::{Deserialize, Serialize};

/// Effective urban delivery speed used for duration estimates.
pub const DEFAULT_SPEED_KMH: f64 = 30.0;

/// Time spent at each stop handing over a package.
pub const DEFAULT_SERVICE_MINUTES: u32 = 5;

/// Cap on k-means assignment passes.
pub const DEFAULT_PARTITION_ITERATIONS: usize = 50;

/// Cap on improving 2-opt moves per route.
pub const DEFAULT_TWO_OPT_ITERATIONS: usize = 100;

/// How stops are split between vehicles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartitionStrategy {
    /// Contiguous angular bands around the origin, balanced by stop count.
    #[default]
    Sweep,
    /// Farthest-point seeded k-means on stop coordinates.
    Clustered,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Assumed average travel speed in km/h.
    pub speed_kmh: f64,
    /// Service time added per stop, in minutes.
    pub service_minutes_per_stop: u32,
    /// How stops are split between vehicles.
    pub strategy: PartitionStrategy,
    /// Maximum k-means passes for [`PartitionStrategy::Clustered`].
    pub max_partition_iterations: usize,
    /// Run 2-opt after nearest-neighbor sequencing.
    pub refine: bool,
    /// Maximum improving 2-opt moves per route.
    pub max_two_opt_iterations: usize,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            speed_kmh: DEFAULT_SPEED_KMH,
            service_minutes_per_stop: DEFAULT_SERVICE_MINUTES,
            strategy: PartitionStrategy::default(),
            max_partition_iterations: DEFAULT_PARTITION_ITERATIONS,
            refine: true,
            max_two_opt_iterations: DEFAULT_TWO_OPT_ITERATIONS,
        }
    }
}

impl PlannerConfig {
    /// Sets the partition strategy.
    pub fn with_strategy(mut self, strategy: PartitionStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Sets the average travel speed in km/h.
    pub fn with_speed_kmh(mut self, speed_kmh: f64) -> Self {
        self.speed_kmh = speed_kmh;
        self
    }

    /// Sets the service time per stop, in minutes.
    pub fn with_service_minutes(mut self, minutes: u32) -> Self {
        self.service_minutes_per_stop = minutes;
        self
    }

    /// Enables or disables 2-opt refinement.
    pub fn with_refine(mut self, refine: bool) -> Self {
        self.refine = refine;
        self
    }

    /// Caps improving 2-opt moves per route.
    pub fn with_two_opt_iterations(mut self, iterations: usize) -> Self {
        self.max_two_opt_iterations = iterations;
        self
    }

    /// Caps k-means passes for the clustered strategy.
    pub fn with_partition_iterations(mut self, iterations: usize) -> Self {
        self.max_partition_iterations = iterations;
        self
    }
}
