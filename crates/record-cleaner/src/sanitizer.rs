//! Column Denylist Sanitizer

use crate::record::RawRecord;

/// Columns always stripped from incoming records
pub const DENYLIST: [&str; 50] = [
    "driver_id",
    "driver_name",
    "driver_contact",
    "entity_id",
    "toll__plaza_code",
    "address",
    "state",
    "city",
    "ro_id",
    "record_id",
    "available",
    "fcm_token",
    "fcm_token_updation_time",
    "mmi_id",
    "fcm_token_web",
    "user_type",
    "fcm_token_web_updation_time",
    "is_breakdown",
    "breakdowndatetime",
    "breakdown_lat",
    "breakdown_lng",
    "breakdown_desc",
    "breakdown_updation_time",
    "regular_service",
    "tyre_change",
    "tech_review_expiration",
    "pollution_expiration",
    "registration_expiration",
    "insurance_expiration",
    "piu_id",
    "zone",
    "compliance_score",
    "device_imei",
    "mobile_imei",
    "intouch_remarks",
    "user_email",
    "created_on",
    "contractor_name",
    "contract_startdate",
    "contract_enddate",
    "lastmodifieddatetime",
    "handset_calling_no",
    "contractor_email",
    "contractor_mobile",
    "ambulance_type",
    "breakdown_status",
    "contractor_id",
    "device_id",
    "device_updatedtime",
    "incident_manager_id",
];

/// Strips denylisted columns from records
#[derive(Debug, Clone, Copy)]
pub struct Sanitizer {
    denylist: &'static [&'static str],
}

impl Sanitizer {
    /// Create a sanitizer over a custom denylist
    pub fn new(denylist: &'static [&'static str]) -> Self {
        Self { denylist }
    }

    /// Whether a column is denylisted (exact, case-sensitive match)
    pub fn is_denied(&self, column: &str) -> bool {
        self.denylist.contains(&column)
    }

    /// Remove every denylisted column present on the record
    pub fn sanitize(&self, mut record: RawRecord) -> RawRecord {
        record.retain_columns(|column| !self.is_denied(column));
        record
    }
}

impl Default for Sanitizer {
    fn default() -> Self {
        Self::new(&DENYLIST)
    }
}
