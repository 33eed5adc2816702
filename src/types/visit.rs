use serde::Serialize;

/// Successful reply: the stored message and the counter read after incrementing.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct VisitReport {
    pub message: String,
    pub visits: i64,
}

/// Failure reply; carries only the raw error string.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ErrorBody {
    pub error: String,
}
