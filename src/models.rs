use crate::units::TimeUnit;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct UnitCount {
    pub unit: TimeUnit,
    pub count: u64,
}

impl UnitCount {
    pub fn new(unit: TimeUnit, count: u64) -> Self {
        Self { unit, count }
    }

    /// `None` if the count is too large to express in seconds.
    pub fn seconds(&self) -> Option<u64> {
        self.count.checked_mul(self.unit.seconds())
    }

    pub fn render(&self) -> String {
        self.unit.render(self.count)
    }
}

/// A decomposed duration together with its phrase.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Breakdown {
    pub total_seconds: u64,
    pub parts: Vec<UnitCount>,
    pub phrase: String,
}

impl Breakdown {
    /// Sum of every part converted back to seconds, or `None` on overflow.
    pub fn recombined_seconds(&self) -> Option<u64> {
        self.parts
            .iter()
            .try_fold(0u64, |total, part| total.checked_add(part.seconds()?))
    }
}
