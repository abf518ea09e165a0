//! GetMembershipStatsHandler - Query handler for dashboard statistics.

use std::sync::Arc;

use crate::domain::membership::MembershipError;
use crate::ports::{Clock, MembershipReader, MembershipStatistics, StatisticsWindows};

/// Query for membership statistics.
#[derive(Debug, Clone, Default)]
pub struct GetMembershipStatsQuery {
    /// Day windows to compute over; defaults are a week for "expiring
    /// soon" and thirty days for "new".
    pub windows: StatisticsWindows,
}

/// Handler for retrieving membership statistics.
pub struct GetMembershipStatsHandler {
    reader: Arc<dyn MembershipReader>,
    clock: Arc<dyn Clock>,
}

impl GetMembershipStatsHandler {
    pub fn new(reader: Arc<dyn MembershipReader>, clock: Arc<dyn Clock>) -> Self {
        Self { reader, clock }
    }

    pub async fn handle(
        &self,
        query: GetMembershipStatsQuery,
    ) -> Result<MembershipStatistics, MembershipError> {
        Ok(self
            .reader
            .statistics(self.clock.today(), query.windows)
            .await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{
        MemoryMembershipReader, MemoryMembershipRepository, MemoryPlanRepository,
    };
    use crate::adapters::FixedClock;
    use crate::domain::foundation::{ClientId, MembershipId, Money, PlanId, Timestamp};
    use crate::domain::membership::Membership;
    use crate::domain::plan::{PeriodUnit, Plan};
    use crate::ports::{MembershipRepository, PlanRepository};
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[tokio::test]
    async fn reports_statistics_as_of_today() {
        let memberships = Arc::new(MemoryMembershipRepository::new());
        let plans = Arc::new(MemoryPlanRepository::new());
        let reader = Arc::new(MemoryMembershipReader::new(
            memberships.clone(),
            plans.clone(),
        ));

        let plan = Plan::create(
            PlanId::new(),
            "Monthly",
            Money::from_major(50),
            1,
            PeriodUnit::Months,
            None,
            false,
            0,
            Timestamp::now(),
        )
        .unwrap();
        plans.save(&plan).await.unwrap();

        // Ends 2024-06-04: inside the default expiring-soon window.
        let start = date(2024, 5, 5);
        let m = Membership::create(
            MembershipId::new(),
            ClientId::new(),
            &plan,
            start,
            Timestamp::from_date(start),
        );
        memberships.save(&m).await.unwrap();

        let handler = GetMembershipStatsHandler::new(
            reader,
            Arc::new(FixedClock::on_date(date(2024, 6, 1))),
        );
        let stats = handler
            .handle(GetMembershipStatsQuery::default())
            .await
            .unwrap();

        assert_eq!(stats.total_count, 1);
        assert_eq!(stats.active_count, 1);
        assert_eq!(stats.expiring_soon, 1);
        assert_eq!(stats.by_plan.len(), 1);
        assert_eq!(stats.by_plan[0].active_count, 1);
    }
}
