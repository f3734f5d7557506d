//! Telemetry seam.

/// Attribute name carrying the page type.
pub const PAGE_TYPE_ATTRIBUTE: &str = "pageType";

/// Error reported by a [`Telemetry`] collaborator.
#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    /// No telemetry agent is loaded in this environment.
    #[error("Telemetry agent not available")]
    Unavailable,
    /// The agent refused the attribute.
    #[error("Telemetry attribute {name} rejected: {message}")]
    Rejected {
        /// Attribute name.
        name: String,
        /// Agent message.
        message: String,
    },
}

/// Receiver of page-level telemetry attributes.
///
/// Reporting is best effort: callers log failures and carry on.
pub trait Telemetry {
    /// Attach a custom attribute to the current page view.
    fn set_custom_attribute(&self, name: &str, value: &str) -> Result<(), TelemetryError>;
}

/// Telemetry collaborator for environments without an agent.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopTelemetry;

impl Telemetry for NoopTelemetry {
    fn set_custom_attribute(&self, _name: &str, _value: &str) -> Result<(), TelemetryError> {
        Ok(())
    }
}
