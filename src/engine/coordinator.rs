use std::time::{Duration, Instant};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, warn};

use super::{forecast_yield, generate_schedule, health_score, Strategy};
use crate::error::FarmError;
use crate::models::{
    Crop, EnvironmentalFactors, GrowthStage, ResourceBudget, SoilType, WeeklySchedule,
};
use crate::optimizer::{
    NutrientBreakdown, OptimizationRequest, OptimizationResponse, DEFAULT_MAX_STEPS,
};

/// Delay between an input change and schedule regeneration.
pub const REGENERATION_DEBOUNCE: Duration = Duration::from_millis(500);

/// Where the current schedule and forecast came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleSource {
    /// Generated by the local heuristic
    Local,
    /// Supplied by the external optimization service
    External,
}

/// Owns the reactive recomputation policy over the simulation inputs.
///
/// The health score is recomputed synchronously whenever crop, soil, or
/// environment change. Schedule regeneration is debounced: every input
/// change re-arms a deadline [`REGENERATION_DEBOUNCE`] in the future,
/// superseding any pending regeneration, and the schedule plus forecast are
/// recomputed together once the deadline passes. The caller drives time via
/// [`poll`](Self::poll) / [`poll_at`](Self::poll_at) or forces the pending
/// work with [`flush`](Self::flush); there is no background thread.
///
/// Single-writer, single-reader per session; snapshots of the inputs are
/// taken at each computation, never shared mutably.
pub struct SimulationCoordinator {
    crop: Crop,
    soil: SoilType,
    growth_stage: GrowthStage,
    environment: EnvironmentalFactors,
    algorithm_id: String,
    budget: ResourceBudget,
    rng: ChaCha8Rng,
    debounce: Duration,
    pending_deadline: Option<Instant>,

    health: u8,
    schedule: WeeklySchedule,
    yield_forecast: f64,
    schedule_source: ScheduleSource,
    last_optimization_error: Option<String>,
}

impl SimulationCoordinator {
    /// Create a coordinator with the original dashboard defaults: growth
    /// stage Reproductive, default environment and budget, `csp` strategy.
    ///
    /// The initial health score, schedule, and forecast are computed
    /// eagerly; no debounce applies to construction.
    pub fn new(crop: Crop, soil: SoilType) -> Self {
        let mut coordinator = Self {
            crop,
            soil,
            growth_stage: GrowthStage::Reproductive,
            environment: EnvironmentalFactors::default(),
            algorithm_id: "csp".to_string(),
            budget: ResourceBudget::default(),
            rng: ChaCha8Rng::from_entropy(),
            debounce: REGENERATION_DEBOUNCE,
            pending_deadline: None,
            health: 0,
            schedule: WeeklySchedule::default(),
            yield_forecast: 0.0,
            schedule_source: ScheduleSource::Local,
            last_optimization_error: None,
        };
        coordinator.recompute_health();
        coordinator.regenerate();
        coordinator
    }

    /// Replace the random source with a seeded one and regenerate, so that
    /// subsequent stochastic schedules are reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = ChaCha8Rng::seed_from_u64(seed);
        self.regenerate();
        self
    }

    /// Override the regeneration debounce window.
    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    // --- current state ---

    pub fn crop(&self) -> &Crop {
        &self.crop
    }

    pub fn soil(&self) -> &SoilType {
        &self.soil
    }

    pub fn growth_stage(&self) -> GrowthStage {
        self.growth_stage
    }

    pub fn environment(&self) -> &EnvironmentalFactors {
        &self.environment
    }

    pub fn algorithm_id(&self) -> &str {
        &self.algorithm_id
    }

    pub fn budget(&self) -> ResourceBudget {
        self.budget
    }

    /// Current health score in `0..=100`.
    pub fn health_score(&self) -> u8 {
        self.health
    }

    /// Current application plan.
    pub fn schedule(&self) -> &WeeklySchedule {
        &self.schedule
    }

    /// Current yield forecast (kg/ha).
    pub fn yield_forecast(&self) -> f64 {
        self.yield_forecast
    }

    /// Whether the current schedule is local or externally optimized.
    pub fn schedule_source(&self) -> ScheduleSource {
        self.schedule_source
    }

    /// Message from the most recent failed optimization attempt, if the
    /// currently shown values fall back to the local heuristic because of it.
    pub fn last_optimization_error(&self) -> Option<&str> {
        self.last_optimization_error.as_deref()
    }

    /// Whether a regeneration is armed and waiting for its deadline.
    pub fn has_pending_regeneration(&self) -> bool {
        self.pending_deadline.is_some()
    }

    // --- input changes ---

    /// Select a different crop. Recomputes health immediately and debounces
    /// regeneration.
    pub fn set_crop(&mut self, crop: Crop) {
        self.crop = crop;
        self.recompute_health();
        self.schedule_regeneration();
    }

    /// Select a different soil type. Recomputes health immediately and
    /// debounces regeneration.
    pub fn set_soil(&mut self, soil: SoilType) {
        self.soil = soil;
        self.recompute_health();
        self.schedule_regeneration();
    }

    /// Select the stage the plan starts from. Debounces regeneration.
    pub fn set_growth_stage(&mut self, stage: GrowthStage) {
        self.growth_stage = stage;
        self.schedule_regeneration();
    }

    /// Replace the environmental snapshot. Recomputes health immediately and
    /// debounces regeneration.
    pub fn set_environment(&mut self, environment: EnvironmentalFactors) {
        self.environment = environment;
        self.recompute_health();
        self.schedule_regeneration();
    }

    /// Select a distribution strategy by identifier. Debounces regeneration.
    /// Unrecognized identifiers are accepted and degrade to the `astar`
    /// pattern at generation time.
    pub fn set_algorithm(&mut self, algorithm_id: impl Into<String>) {
        self.algorithm_id = algorithm_id.into();
        self.schedule_regeneration();
    }

    /// Update the resource budgets reported to the external optimizer. Not a
    /// regeneration trigger; budgets do not affect the local heuristic.
    pub fn set_budget(&mut self, budget: ResourceBudget) {
        self.budget = budget;
    }

    // --- debounced regeneration ---

    /// Arm (or re-arm) the regeneration deadline from the current time. A
    /// later call supersedes an earlier pending one.
    pub fn schedule_regeneration(&mut self) {
        self.schedule_regeneration_at(Instant::now());
    }

    /// Arm (or re-arm) the regeneration deadline from an explicit instant.
    pub fn schedule_regeneration_at(&mut self, now: Instant) {
        let deadline = now + self.debounce;
        if self.pending_deadline.replace(deadline).is_some() {
            debug!("superseding pending schedule regeneration");
        }
    }

    /// Drop any pending regeneration without running it.
    pub fn cancel_pending(&mut self) {
        self.pending_deadline = None;
    }

    /// Run the pending regeneration if its deadline has passed. Returns
    /// whether a regeneration ran.
    pub fn poll(&mut self) -> bool {
        self.poll_at(Instant::now())
    }

    /// [`poll`](Self::poll) against an explicit current time.
    pub fn poll_at(&mut self, now: Instant) -> bool {
        match self.pending_deadline {
            Some(deadline) if now >= deadline => {
                self.pending_deadline = None;
                self.regenerate();
                true
            }
            _ => false,
        }
    }

    /// Regenerate immediately, discarding any pending deadline.
    pub fn flush(&mut self) {
        self.pending_deadline = None;
        self.regenerate();
    }

    // --- external optimization ---

    /// Snapshot the current state as an optimization request.
    pub fn optimization_request(&self) -> OptimizationRequest {
        let env = &self.environment;
        OptimizationRequest {
            algorithm: self.algorithm_id.clone(),
            crop_type: self.crop.name.to_lowercase(),
            soil_type: self.soil.id,
            temperature: env.temperature,
            humidity: env.humidity,
            rainfall: env.rainfall,
            sunlight: env.sunlight,
            wind_speed: env.wind_speed,
            ph: env.ph,
            crop_area: env.crop_area,
            crop_density: env.crop_density,
            water: self.budget.water,
            fertilizer: NutrientBreakdown {
                n: env.soil_nutrients.n,
                p: env.soil_nutrients.p,
                k: env.soil_nutrients.k,
            },
            pesticides: env.pesticides,
            goal_yield: self.crop.base_yield,
            max_steps: DEFAULT_MAX_STEPS,
            growth_stage: self.growth_stage.id(),
            soil_moisture: env.soil_moisture,
            soil_nutrients: NutrientBreakdown {
                n: env.soil_nutrients.n,
                p: env.soil_nutrients.p,
                k: env.soil_nutrients.k,
            },
            crop_health: env.crop_health,
        }
    }

    /// Adopt the outcome of an external optimization attempt.
    ///
    /// On success the external schedule and forecast replace the local ones.
    /// On failure the last locally computed values stay active and the
    /// service message is retained for the caller to surface. There is no
    /// retry; a new attempt must be triggered explicitly.
    pub fn apply_optimization(&mut self, outcome: Result<OptimizationResponse, FarmError>) {
        match outcome {
            Ok(response) => {
                debug!(
                    weeks = response.schedule.num_weeks(),
                    "adopting external optimization result"
                );
                self.schedule = response.schedule;
                self.yield_forecast = response.yield_forecast;
                self.schedule_source = ScheduleSource::External;
                self.last_optimization_error = None;
            }
            Err(err) => {
                warn!(error = %err, "optimization failed, keeping local schedule");
                self.last_optimization_error = Some(err.to_string());
            }
        }
    }

    // --- internals ---

    fn recompute_health(&mut self) {
        self.health = health_score(&self.crop, &self.soil, &self.environment);
    }

    fn regenerate(&mut self) {
        let strategy = Strategy::resolve(&self.algorithm_id);
        self.schedule = generate_schedule(
            &self.crop,
            self.growth_stage,
            &self.environment,
            strategy,
            &mut self.rng,
        );
        self.yield_forecast = forecast_yield(&self.crop, &self.soil, self.health);
        self.schedule_source = ScheduleSource::Local;
        self.last_optimization_error = None;
        debug!(
            %strategy,
            weeks = self.schedule.num_weeks(),
            health = self.health,
            "regenerated schedule and forecast"
        );
    }
}
