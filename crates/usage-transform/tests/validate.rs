//! Integration tests for row validation ordering and normalization.

use usage_model::{RawCount, RejectReason, TranslateConfig, TypeMap, UsageRecord};
use usage_transform::validate_record;

fn test_type_map() -> TypeMap {
    let mut map = TypeMap::new();
    map.insert(
        "ADS000010U0R".to_string(),
        "core.chargeable.adsync".to_string(),
    );
    map.insert(
        "EA000001GB0O".to_string(),
        "core.chargeable.emailarchive".to_string(),
    );
    map
}

fn test_record() -> UsageRecord {
    UsageRecord {
        row_number: 2,
        partner_id: RawCount::Int(1),
        part_number: Some("ADS000010U0R".to_string()),
        account_guid: "abc-123".to_string(),
        plan: "TestPlan".to_string(),
        domain: "test.example.com".to_string(),
        item_count: RawCount::Int(5),
    }
}

#[test]
fn accepts_a_fully_valid_record() {
    let row = validate_record(&test_record(), &test_type_map(), &TranslateConfig::default())
        .expect("row should be chargeable");
    assert_eq!(row.partner_id, 1);
    assert_eq!(row.part_number, "ADS000010U0R");
    assert_eq!(row.product, "core.chargeable.adsync");
    assert_eq!(row.plan_id, "abc123");
    assert_eq!(row.plan, "TestPlan");
    assert_eq!(row.domain, "test.example.com");
    assert_eq!(row.quantity, 5);
}

#[test]
fn rejects_missing_part_number() {
    let mut record = test_record();
    record.part_number = None;
    let reason = validate_record(&record, &test_type_map(), &TranslateConfig::default())
        .expect_err("should reject");
    assert_eq!(reason, RejectReason::PartNumberMissing);
}

#[test]
fn rejects_non_integer_item_count() {
    let mut record = test_record();
    record.item_count = RawCount::Text("3.5".to_string());
    let reason = validate_record(&record, &test_type_map(), &TranslateConfig::default())
        .expect_err("should reject");
    assert_eq!(reason, RejectReason::ItemCountNotInteger);

    record.item_count = RawCount::Missing;
    let reason = validate_record(&record, &test_type_map(), &TranslateConfig::default())
        .expect_err("should reject");
    assert_eq!(reason, RejectReason::ItemCountNotInteger);
}

#[test]
fn rejects_non_positive_item_count() {
    for count in [0, -1, -500] {
        let mut record = test_record();
        record.item_count = RawCount::Int(count);
        let reason = validate_record(&record, &test_type_map(), &TranslateConfig::default())
            .expect_err("should reject");
        assert_eq!(reason, RejectReason::ItemCountNonPositive);
    }
}

#[test]
fn non_positive_count_wins_over_later_checks() {
    // Invalid guid and unmapped part number as well, but the count check
    // comes first among the surviving ones.
    let mut record = test_record();
    record.item_count = RawCount::Int(0);
    record.account_guid = "---".to_string();
    record.part_number = Some("UNKNOWN".to_string());
    let reason = validate_record(&record, &test_type_map(), &TranslateConfig::default())
        .expect_err("should reject");
    assert_eq!(reason, RejectReason::ItemCountNonPositive);
}

#[test]
fn rejects_non_integer_partner_id() {
    let mut record = test_record();
    record.partner_id = RawCount::Text("partner".to_string());
    let reason = validate_record(&record, &test_type_map(), &TranslateConfig::default())
        .expect_err("should reject");
    assert_eq!(reason, RejectReason::PartnerIdNotInteger);

    record.partner_id = RawCount::Missing;
    let reason = validate_record(&record, &test_type_map(), &TranslateConfig::default())
        .expect_err("should reject");
    assert_eq!(reason, RejectReason::PartnerIdNotInteger);
}

#[test]
fn rejects_skipped_partner() {
    let mut record = test_record();
    record.partner_id = RawCount::Int(26392);
    let reason = validate_record(&record, &test_type_map(), &TranslateConfig::default())
        .expect_err("should reject");
    assert_eq!(reason, RejectReason::PartnerSkipped(26392));
}

#[test]
fn skip_list_override_replaces_default() {
    let config = TranslateConfig::default().with_partner_skip([1]);
    let reason =
        validate_record(&test_record(), &test_type_map(), &config).expect_err("should reject");
    assert_eq!(reason, RejectReason::PartnerSkipped(1));

    // The default skip entry no longer applies once overridden.
    let mut record = test_record();
    record.partner_id = RawCount::Int(26392);
    validate_record(&record, &test_type_map(), &config).expect("26392 accepted after override");
}

#[test]
fn rejects_unmapped_part_number() {
    let mut record = test_record();
    record.part_number = Some("NOPE123".to_string());
    let reason = validate_record(&record, &test_type_map(), &TranslateConfig::default())
        .expect_err("should reject");
    assert_eq!(reason, RejectReason::PartNumberUnmapped("NOPE123".to_string()));
}

#[test]
fn rejects_empty_and_overlong_plan_ids() {
    let mut record = test_record();
    record.account_guid = "!!--!!".to_string();
    let reason = validate_record(&record, &test_type_map(), &TranslateConfig::default())
        .expect_err("should reject");
    assert_eq!(reason, RejectReason::InvalidPlanId(String::new()));

    let mut record = test_record();
    record.account_guid = "a".repeat(33);
    let reason = validate_record(&record, &test_type_map(), &TranslateConfig::default())
        .expect_err("should reject");
    assert_eq!(reason, RejectReason::InvalidPlanId("a".repeat(33)));

    // 32 characters is still valid.
    let mut record = test_record();
    record.account_guid = "b".repeat(32);
    let row = validate_record(&record, &test_type_map(), &TranslateConfig::default())
        .expect("32-char plan id accepted");
    assert_eq!(row.plan_id.len(), 32);
}

#[test]
fn applies_unit_reduction_after_validation() {
    let mut record = test_record();
    record.part_number = Some("EA000001GB0O".to_string());
    record.item_count = RawCount::Int(2500);
    let row = validate_record(&record, &test_type_map(), &TranslateConfig::default())
        .expect("row should be chargeable");
    assert_eq!(row.quantity, 2, "2500 // 1000 floors to 2");
}

#[test]
fn positivity_check_uses_pre_reduction_quantity() {
    // 500 // 1000 == 0, but 500 itself is positive, so the row passes and
    // carries a zero quantity through.
    let mut record = test_record();
    record.part_number = Some("EA000001GB0O".to_string());
    record.item_count = RawCount::Int(500);
    let row = validate_record(&record, &test_type_map(), &TranslateConfig::default())
        .expect("row should be chargeable");
    assert_eq!(row.quantity, 0);
}

#[test]
fn unreduced_part_numbers_keep_raw_quantity() {
    let mut record = test_record();
    record.item_count = RawCount::Int(987654);
    let row = validate_record(&record, &test_type_map(), &TranslateConfig::default())
        .expect("row should be chargeable");
    assert_eq!(row.quantity, 987654);
}
