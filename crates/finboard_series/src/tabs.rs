//! Per-user dashboard tabs.
//!
//! The dashboard offers one tab per user. Each tab owns an independent
//! random stream derived from a shared base seed, so switching tabs shows a
//! different but reproducible dashboard and no series is shared between
//! users.

use std::fmt;
use std::str::FromStr;

use finboard_core::clock::Clock;
use tracing::debug;

use crate::allocation::AssetAllocation;
use crate::dashboard::DashboardData;
use crate::error::{GeneratorError, UnknownTab};
use crate::generator::TimeSeriesGenerator;
use crate::rng::SeriesRng;

/// Number of user tabs.
pub const USER_TAB_COUNT: u8 = 5;

/// One of the user dashboards (`user1` to `user5`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UserTab(u8);

impl UserTab {
    /// Returns the tab for user `number` (1-based), if it exists.
    pub fn new(number: u8) -> Option<Self> {
        (1..=USER_TAB_COUNT).contains(&number).then_some(Self(number))
    }

    /// All tabs in navigation order.
    pub fn all() -> impl Iterator<Item = UserTab> {
        (1..=USER_TAB_COUNT).map(Self)
    }

    /// 1-based user number.
    pub fn number(&self) -> u8 {
        self.0
    }

    /// Stable identifier, e.g. `user3`.
    pub fn id(&self) -> String {
        format!("user{}", self.0)
    }

    /// Tab caption, e.g. `User 3`.
    pub fn label(&self) -> String {
        format!("User {}", self.0)
    }

    /// Dashboard heading, e.g. `User 3 Dashboard`.
    pub fn title(&self) -> String {
        format!("User {} Dashboard", self.0)
    }

    /// Random stream of this tab under `base_seed`.
    pub fn rng(&self, base_seed: u64) -> SeriesRng {
        SeriesRng::from_seed(base_seed).derive_stream(u64::from(self.0))
    }

    /// Static asset allocation of this tab.
    pub fn asset_allocation(&self) -> AssetAllocation {
        let percentages = match self.0 {
            2 => [50, 20, 18, 8, 4],
            3 => [40, 30, 20, 7, 3],
            4 => [55, 18, 12, 10, 5],
            5 => [35, 35, 15, 10, 5],
            _ => [45, 25, 15, 10, 5],
        };
        AssetAllocation::table(percentages)
    }

    /// Generates this tab's dashboard.
    pub fn dashboard<C: Clock>(
        &self,
        generator: &TimeSeriesGenerator<C>,
        base_seed: u64,
    ) -> Result<DashboardData, GeneratorError> {
        let mut rng = self.rng(base_seed);
        debug!(tab = %self, seed = rng.seed(), "generating tab dashboard");
        DashboardData::generate(generator, &mut rng)
            .map(|data| data.with_allocation(self.asset_allocation()))
    }
}

impl Default for UserTab {
    fn default() -> Self {
        Self(1)
    }
}

impl fmt::Display for UserTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "user{}", self.0)
    }
}

impl FromStr for UserTab {
    type Err = UnknownTab;

    /// Parses `user3`, `User 3` or `3`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_lowercase();
        let digits = lowered.strip_prefix("user").unwrap_or(&lowered).trim();
        digits
            .parse::<u8>()
            .ok()
            .and_then(UserTab::new)
            .ok_or_else(|| UnknownTab(s.to_string()))
    }
}
