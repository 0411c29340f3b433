//! Assignment entity and closed date intervals.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::WorkerId;

/// Closed date range `[start, end]`, both bounds inclusive.
///
/// No ordering between `start` and `end` is enforced; the range is stored as
/// supplied by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DateInterval {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateInterval {
    /// Build an interval from its inclusive bounds.
    pub const fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Inclusive start date.
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    /// Inclusive end date.
    pub const fn end(&self) -> NaiveDate {
        self.end
    }

    /// Whether `date` lies strictly between the bounds, both ends exclusive.
    ///
    /// Dates equal to either bound are NOT considered inside.
    pub fn contains_strictly(&self, date: NaiveDate) -> bool {
        self.start < date && date < self.end
    }
}

/// A binding of one worker to one project over a closed date interval.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    id: Uuid,
    start_date: NaiveDate,
    end_date: NaiveDate,
    project_id: Uuid,
    worker_id: WorkerId,
}

impl Assignment {
    /// Build an [`Assignment`] from validated components.
    pub const fn new(id: Uuid, interval: DateInterval, project_id: Uuid, worker_id: WorkerId) -> Self {
        Self {
            id,
            start_date: interval.start(),
            end_date: interval.end(),
            project_id,
            worker_id,
        }
    }

    /// Stable assignment identifier.
    pub const fn id(&self) -> Uuid {
        self.id
    }

    /// The closed date range this assignment occupies.
    pub const fn interval(&self) -> DateInterval {
        DateInterval::new(self.start_date, self.end_date)
    }

    /// Inclusive start date.
    pub const fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    /// Inclusive end date.
    pub const fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    /// The project this assignment belongs to.
    pub const fn project_id(&self) -> Uuid {
        self.project_id
    }

    /// The assigned worker.
    pub const fn worker_id(&self) -> WorkerId {
        self.worker_id
    }
}
