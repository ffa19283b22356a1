//! BOM export.
//!
//! Renders a compiled entry list to the tabular CSV form consumed by
//! procurement: header `Assembly Code,Assembly Name,Quantity`, one row
//! per entry in compiler order.

use steriflow_models::BomEntry;

use crate::error::{SteriflowError, SteriflowResult};

pub fn write_bom_csv(entries: &[BomEntry]) -> SteriflowResult<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer.write_record(["Assembly Code", "Assembly Name", "Quantity"])?;
    for entry in entries {
        let quantity = entry.quantity.to_string();
        writer.write_record([
            entry.assembly_code.as_str(),
            entry.assembly_name.as_str(),
            quantity.as_str(),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| SteriflowError::internal(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| SteriflowError::internal(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_and_rows_follow_the_export_contract() {
        let entries = vec![
            BomEntry::new("709.82", 1, "T2-BODY-48-60-HA"),
            BomEntry::new("706.58", 2, "T2-OA-STD-FAUCET-WB-KIT"),
        ];

        let csv = write_bom_csv(&entries).unwrap();
        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some("Assembly Code,Assembly Name,Quantity"));
        assert_eq!(lines.next(), Some("709.82,T2-BODY-48-60-HA,1"));
        assert_eq!(lines.next(), Some("706.58,T2-OA-STD-FAUCET-WB-KIT,2"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn names_containing_commas_are_quoted() {
        let entries = vec![BomEntry::new("702.4", 1, "Hook, stainless")];
        let csv = write_bom_csv(&entries).unwrap();
        assert!(csv.contains("\"Hook, stainless\""));
    }

    #[test]
    fn empty_bom_is_just_the_header() {
        let csv = write_bom_csv(&[]).unwrap();
        assert_eq!(csv.trim_end(), "Assembly Code,Assembly Name,Quantity");
    }
}
