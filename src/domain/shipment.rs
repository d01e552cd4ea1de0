use serde::{Deserialize, Serialize};

/// Structured extraction result for one ocean-shipment document.
///
/// Every field is string-typed: source documents format numbers and dates
/// inconsistently, and the record must hold whatever the extraction service
/// produced. A missing remote value normalizes to an empty string, never to
/// an omitted key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipmentRecord {
    pub bill_of_lading_number: String,
    pub container_number: String,
    pub consignee_name: String,
    pub consignee_address: String,
    pub date_of_export: String,
    pub line_items_count: String,
    pub average_gross_weight: String,
    pub average_price: String,
}

impl ShipmentRecord {
    /// Value of the field named by its schema key, if the key is known.
    pub fn field(&self, key: &str) -> Option<&str> {
        match key {
            "billOfLadingNumber" => Some(&self.bill_of_lading_number),
            "containerNumber" => Some(&self.container_number),
            "consigneeName" => Some(&self.consignee_name),
            "consigneeAddress" => Some(&self.consignee_address),
            "dateOfExport" => Some(&self.date_of_export),
            "lineItemsCount" => Some(&self.line_items_count),
            "averageGrossWeight" => Some(&self.average_gross_weight),
            "averagePrice" => Some(&self.average_price),
            _ => None,
        }
    }

    /// Sets the field named by its schema key. Returns false for an unknown
    /// key, leaving the record untouched.
    pub fn set_field(&mut self, key: &str, value: String) -> bool {
        let slot = match key {
            "billOfLadingNumber" => &mut self.bill_of_lading_number,
            "containerNumber" => &mut self.container_number,
            "consigneeName" => &mut self.consignee_name,
            "consigneeAddress" => &mut self.consignee_address,
            "dateOfExport" => &mut self.date_of_export,
            "lineItemsCount" => &mut self.line_items_count,
            "averageGrossWeight" => &mut self.average_gross_weight,
            "averagePrice" => &mut self.average_price,
            _ => return false,
        };
        *slot = value;
        true
    }

    /// Merges `patch` onto this record: present keys overwrite, absent keys
    /// are retained.
    pub fn apply(&mut self, patch: ShipmentPatch) {
        if let Some(v) = patch.bill_of_lading_number {
            self.bill_of_lading_number = v;
        }
        if let Some(v) = patch.container_number {
            self.container_number = v;
        }
        if let Some(v) = patch.consignee_name {
            self.consignee_name = v;
        }
        if let Some(v) = patch.consignee_address {
            self.consignee_address = v;
        }
        if let Some(v) = patch.date_of_export {
            self.date_of_export = v;
        }
        if let Some(v) = patch.line_items_count {
            self.line_items_count = v;
        }
        if let Some(v) = patch.average_gross_weight {
            self.average_gross_weight = v;
        }
        if let Some(v) = patch.average_price {
            self.average_price = v;
        }
    }
}

/// Partial update over a [`ShipmentRecord`]; `None` means "leave unchanged".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipmentPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bill_of_lading_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consignee_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consignee_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_export: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_items_count: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_gross_weight: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_price: Option<String>,
}

impl From<ShipmentRecord> for ShipmentPatch {
    fn from(record: ShipmentRecord) -> Self {
        Self {
            bill_of_lading_number: Some(record.bill_of_lading_number),
            container_number: Some(record.container_number),
            consignee_name: Some(record.consignee_name),
            consignee_address: Some(record.consignee_address),
            date_of_export: Some(record.date_of_export),
            line_items_count: Some(record.line_items_count),
            average_gross_weight: Some(record.average_gross_weight),
            average_price: Some(record.average_price),
        }
    }
}
