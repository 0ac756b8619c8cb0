use std::collections::BTreeMap;

/// One accepted output entry: field name to value.
pub type Record = BTreeMap<String, String>;

/// Records grouped by the list name of the rule that accepted them.
///
/// Within a bucket, records keep discovery order.
pub type Buckets = BTreeMap<String, Vec<Record>>;

/// Total number of records across all buckets.
pub fn record_count(buckets: &Buckets) -> usize {
    buckets.values().map(Vec::len).sum()
}
