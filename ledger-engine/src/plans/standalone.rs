//! Standalone payment plans
//!
//! Direct plans apply to every sale of the society; Tower plans only to
//! towers they have been activated for. The 100% ceiling is checked
//! incrementally when a plan is created or activated, never retroactively.

use super::ordering::canonical_order;
use super::rules::{ValidationRules, validate_percent};
use rust_decimal::Decimal;
use shared::models::{Installment, PaymentPlan, PlanScope, TowerPlanActivation};
use shared::{AppError, AppResult, ErrorCode, Money, Timestamp};

/// Plans applicable to sales in `tower_id`, as canonically ordered installments
pub fn applicable_plans(
    plans: &[PaymentPlan],
    activations: &[TowerPlanActivation],
    tower_id: i64,
) -> Vec<Installment> {
    let items: Vec<Installment> = plans
        .iter()
        .filter(|plan| match plan.scope {
            PlanScope::Direct => true,
            PlanScope::Tower => is_activated(activations, plan.id, tower_id),
        })
        .map(PaymentPlan::to_installment)
        .collect();
    canonical_order(&items)
}

/// Activation time of a plan for a tower
pub fn activation_time(
    activations: &[TowerPlanActivation],
    plan_id: i64,
    tower_id: i64,
) -> Option<Timestamp> {
    activations
        .iter()
        .find(|a| a.plan_id == plan_id && a.tower_id == tower_id)
        .map(|a| a.activated_at)
}

fn is_activated(activations: &[TowerPlanActivation], plan_id: i64, tower_id: i64) -> bool {
    activation_time(activations, plan_id, tower_id).is_some()
}

/// Reject `additional` if it would push `applicable` past 100%
pub fn check_plan_capacity(applicable: &[Installment], additional: Money) -> AppResult<()> {
    validate_percent(additional)?;

    let current: Money = applicable.iter().map(|i| i.percent).sum();
    if current + additional > Decimal::ONE_HUNDRED {
        return Err(AppError::with_message(
            ErrorCode::PlanCapacityExceeded,
            format!(
                "Adding {}% to {}% already applicable exceeds 100%",
                additional, current
            ),
        )
        .with_detail("current", current.to_string())
        .with_detail("requested", additional.to_string()));
    }
    Ok(())
}

/// Check a new standalone plan before it is persisted
///
/// Every plan goes through the same item rules as ratio items. A Direct
/// plan must also fit every tower of the society (and the direct-only set
/// when there are no towers). A Tower plan applies nowhere until
/// activated, so capacity is checked at activation instead.
pub fn validate_new_plan(
    rules: &ValidationRules,
    plans: &[PaymentPlan],
    activations: &[TowerPlanActivation],
    tower_ids: &[i64],
    candidate: &PaymentPlan,
) -> AppResult<()> {
    rules
        .validate_item(&candidate.to_installment())
        .map_err(|e| e.with_detail("plan_id", candidate.id))?;

    match candidate.scope {
        PlanScope::Tower => Ok(()),
        PlanScope::Direct => {
            let direct_only: Vec<Installment> = plans
                .iter()
                .filter(|p| p.scope == PlanScope::Direct)
                .map(PaymentPlan::to_installment)
                .collect();
            check_plan_capacity(&direct_only, candidate.percent)?;

            for &tower_id in tower_ids {
                let applicable = applicable_plans(plans, activations, tower_id);
                check_plan_capacity(&applicable, candidate.percent)
                    .map_err(|e| e.with_detail("tower_id", tower_id))?;
            }
            Ok(())
        }
    }
}

/// Activate a Tower-scoped plan for one tower
pub fn activate_for_tower(
    rules: &ValidationRules,
    plan: &PaymentPlan,
    tower_id: i64,
    plans: &[PaymentPlan],
    activations: &[TowerPlanActivation],
    activated_at: Timestamp,
) -> AppResult<TowerPlanActivation> {
    if plan.scope != PlanScope::Tower {
        return Err(AppError::with_message(
            ErrorCode::PlanScopeMismatch,
            "Only tower-scoped plans can be activated for a tower",
        )
        .with_detail("plan_id", plan.id));
    }
    rules
        .validate_item(&plan.to_installment())
        .map_err(|e| e.with_detail("plan_id", plan.id))?;
    if is_activated(activations, plan.id, tower_id) {
        return Err(AppError::new(ErrorCode::PlanAlreadyActivated)
            .with_detail("plan_id", plan.id)
            .with_detail("tower_id", tower_id));
    }

    let applicable = applicable_plans(plans, activations, tower_id);
    check_plan_capacity(&applicable, plan.percent).map_err(|e| e.with_detail("tower_id", tower_id))?;

    tracing::debug!(plan_id = plan.id, tower_id, "Tower plan activated");
    Ok(TowerPlanActivation {
        plan_id: plan.id,
        tower_id,
        activated_at,
    })
}
