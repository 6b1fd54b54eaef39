//! Chargeability checks for a single usage row.

use usage_model::constants::MAX_PLAN_ID_LEN;
use usage_model::{ChargeRow, RawCount, RejectReason, TranslateConfig, TypeMap, UsageRecord};

use crate::clean::clean_guid;

/// Validates one record and, if it qualifies, returns its normalized form.
///
/// Checks run in a fixed order and the first failure wins; callers rely on
/// that ordering when reporting rejection reasons. The positivity check uses
/// the pre-reduction item count; unit reduction is applied only after every
/// check has passed.
pub fn validate_record(
    record: &UsageRecord,
    type_map: &TypeMap,
    config: &TranslateConfig,
) -> Result<ChargeRow, RejectReason> {
    let Some(part_number) = record.part_number.as_deref() else {
        return Err(RejectReason::PartNumberMissing);
    };
    let RawCount::Int(quantity) = record.item_count else {
        return Err(RejectReason::ItemCountNotInteger);
    };
    if quantity <= 0 {
        return Err(RejectReason::ItemCountNonPositive);
    }
    let partner_id = record
        .partner_id
        .as_int()
        .ok_or(RejectReason::PartnerIdNotInteger)?;
    if config.partner_skip.contains(&partner_id) {
        return Err(RejectReason::PartnerSkipped(partner_id));
    }
    let Some(product) = type_map.get(part_number) else {
        return Err(RejectReason::PartNumberUnmapped(part_number.to_string()));
    };
    let plan_id = clean_guid(&record.account_guid);
    if plan_id.is_empty() || plan_id.len() > MAX_PLAN_ID_LEN {
        return Err(RejectReason::InvalidPlanId(plan_id));
    }

    let quantity = match config.unit_reduction.get(part_number) {
        Some(divisor) => quantity / divisor,
        None => quantity,
    };

    Ok(ChargeRow {
        partner_id,
        part_number: part_number.to_string(),
        product: product.clone(),
        plan_id,
        plan: record.plan.clone(),
        domain: record.domain.clone(),
        quantity,
    })
}
