/// A string (or other JSON value) that does not name a member of a closed
/// enumeration such as `AssetType` or `VersionStatus`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown {kind} '{value}'. Must be one of: {expected}")]
pub struct UnknownEnumValue {
    /// Human-readable enumeration name, e.g. `asset type`.
    pub kind: &'static str,
    /// The offending value as it was received.
    pub value: String,
    /// Comma-separated list of accepted wire values.
    pub expected: &'static str,
}
