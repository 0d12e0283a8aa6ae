use log::debug;

use crate::{
    Catalog, DataError, EligibilityFilter, Error, PlanRequest, PrerequisiteGraph,
    PrerequisitePolicy, Quotas, WorkoutPlan, plan, schedule,
};

/// Validates a catalog once and serves scheduling requests against it.
///
/// All inputs are read-only, so one `Planner` can be shared across
/// concurrent requests without locking.
pub struct Planner<'a> {
    catalog: &'a Catalog,
    graph: PrerequisiteGraph,
    quotas: Quotas,
}

impl<'a> Planner<'a> {
    pub fn new(catalog: &'a Catalog, policy: PrerequisitePolicy) -> Result<Self, DataError> {
        let graph = PrerequisiteGraph::build(catalog, policy)?;
        Ok(Self {
            catalog,
            graph,
            quotas: Quotas::default(),
        })
    }

    #[must_use]
    pub fn with_quotas(mut self, quotas: Quotas) -> Self {
        self.quotas = quotas;
        self
    }

    pub fn generate(&self, request: &PlanRequest) -> Result<WorkoutPlan, Error> {
        let filter = EligibilityFilter {
            level: request.level,
            equipment: request.equipment.clone(),
        };
        let eligible = filter.exercises(self.catalog.exercises());

        debug!(
            "{} of {} exercises eligible at level {}",
            eligible.len(),
            self.catalog.len(),
            request.level
        );

        let days = schedule::schedule(
            &eligible,
            &self.graph,
            request.days_per_week,
            request.split,
            &self.quotas,
        )?;
        let plan = plan::assemble(&days, request, &self.graph, self.catalog)?;

        debug!(
            "generated {} plan with {} days and {} distinct exercises",
            request.split,
            plan.days.len(),
            plan.exercises().len()
        );

        Ok(plan)
    }
}

/// Generates a workout plan in one call. Builds the prerequisite graph
/// under the strict policy; use [`Planner`] to reuse the graph across
/// requests or to customize quotas and the prerequisite policy.
pub fn generate_plan(catalog: &Catalog, request: &PlanRequest) -> Result<WorkoutPlan, Error> {
    Planner::new(catalog, PrerequisitePolicy::Strict)?.generate(request)
}
