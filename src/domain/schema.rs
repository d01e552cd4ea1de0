use super::shipment::ShipmentRecord;

/// One entry of the ordered shipment field schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDef {
    pub key: &'static str,
    pub label: &'static str,
    pub required: bool,
}

/// The structured record's shape, in export order. Keys match the JSON/CSV
/// export convention; the extraction wire format uses its own snake_case
/// names and is mapped onto these during normalization.
pub const FIELDS: [FieldDef; 8] = [
    FieldDef {
        key: "billOfLadingNumber",
        label: "Bill of Lading",
        required: true,
    },
    FieldDef {
        key: "containerNumber",
        label: "Container Number",
        required: true,
    },
    FieldDef {
        key: "consigneeName",
        label: "Consignee Name",
        required: true,
    },
    FieldDef {
        key: "consigneeAddress",
        label: "Consignee Address",
        required: true,
    },
    FieldDef {
        key: "dateOfExport",
        label: "Date of Export",
        required: true,
    },
    FieldDef {
        key: "lineItemsCount",
        label: "Line Items Count",
        required: true,
    },
    FieldDef {
        key: "averageGrossWeight",
        label: "Gross Weight",
        required: true,
    },
    FieldDef {
        key: "averagePrice",
        label: "Average Price",
        required: true,
    },
];

/// Required keys whose values are empty or blank in `record`.
///
/// Incomplete records are stored anyway; callers use this to surface
/// incompleteness, not to reject.
pub fn missing_fields(record: &ShipmentRecord) -> Vec<&'static str> {
    FIELDS
        .iter()
        .filter(|f| f.required)
        .filter(|f| {
            record
                .field(f.key)
                .map(|v| v.trim().is_empty())
                .unwrap_or(true)
        })
        .map(|f| f.key)
        .collect()
}
