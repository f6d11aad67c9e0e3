use serde::Deserialize;
use serde::Serialize;

/// A snapshot of the ledger's epoch and slot counters, as returned by `getEpochInfo`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EpochInfo {
    pub epoch: u64,
    pub slot_index: u64,
    pub slots_in_epoch: u64,
    pub absolute_slot: u64,
    pub block_height: u64,
    /// Older nodes report `null` here.
    #[serde(default)]
    pub transaction_count: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_node_payload() {
        let json = r#"{
            "absoluteSlot": 999999,
            "blockHeight": 888888,
            "epoch": 5,
            "slotIndex": 120,
            "slotsInEpoch": 432000,
            "transactionCount": 777777
        }"#;
        let info: EpochInfo = serde_json::from_str(json).unwrap();

        assert_eq!(
            info,
            EpochInfo {
                epoch: 5,
                slot_index: 120,
                slots_in_epoch: 432000,
                absolute_slot: 999999,
                block_height: 888888,
                transaction_count: Some(777777),
            }
        );
    }

    #[test]
    fn missing_transaction_count_is_none() {
        let json = r#"{"absoluteSlot":1,"blockHeight":1,"epoch":0,"slotIndex":1,"slotsInEpoch":32}"#;
        let info: EpochInfo = serde_json::from_str(json).unwrap();
        assert_eq!(info.transaction_count, None);

        let json = r#"{"absoluteSlot":1,"blockHeight":1,"epoch":0,"slotIndex":1,"slotsInEpoch":32,"transactionCount":null}"#;
        let info: EpochInfo = serde_json::from_str(json).unwrap();
        assert_eq!(info.transaction_count, None);
    }
}
