/// Record identifiers are opaque strings; each storage adapter decides the
/// native format behind them (UUID, ObjectId, ...).
pub type RecordId = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
