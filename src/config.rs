//! Tooltip controller configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Which fragment the popup asks the server for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentKind {
    /// Entry information and metadata (`output=metadataxml`)
    #[default]
    Metadata,
    /// Entry action links (`output=linksxml`)
    Links,
}

impl ContentKind {
    pub fn output_param(self) -> &'static str {
        match self {
            ContentKind::Metadata => "metadataxml",
            ContentKind::Links => "linksxml",
        }
    }
}

/// How fetch completions are reconciled with the current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FetchPolicy {
    /// Every successful result is written into the popup, even if the tip
    /// was dismissed or retargeted while the request was in flight.
    #[default]
    ApplyAlways,
    /// Only the latest request is applied, and only while its tip is shown.
    FenceByGeneration,
}

/// Tunables for the tooltip controller.
///
/// Missing fields in persisted JSON take their default value, so settings
/// saved by older builds keep loading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TooltipConfig {
    /// Pointer rest time before the affordance appears
    pub show_delay_ms: u64,
    /// Time after mouse-out before the affordance is dismissed
    pub hide_delay_ms: u64,
    /// Repository base URL, e.g. `http://localhost:8080/repository`
    pub base_url: String,
    /// Id of the shared popup node
    pub popup_id: String,
    /// Content of the affordance shown in `LinkShown`
    pub link_label: String,
    /// Popup content while a fetch is outstanding
    pub loading_text: String,
    pub content_kind: ContentKind,
    pub fetch_policy: FetchPolicy,
    /// Offset from the pointer when the target has no measurable geometry
    pub pointer_offset: (f32, f32),
    /// Horizontal gap between the affordance and the target's left edge
    pub link_gap: f32,
}

impl Default for TooltipConfig {
    fn default() -> Self {
        Self {
            show_delay_ms: 500,
            hide_delay_ms: 1000,
            base_url: String::new(),
            popup_id: "tooltipdiv".to_string(),
            link_label: "Info".to_string(),
            loading_text: "Loading...".to_string(),
            content_kind: ContentKind::Metadata,
            fetch_policy: FetchPolicy::ApplyAlways,
            pointer_offset: (-20.0, -5.0),
            link_gap: 24.0,
        }
    }
}

impl TooltipConfig {
    /// Parses a configuration from JSON, filling in defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: TooltipConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects delays that would make the state machine degenerate.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.show_delay_ms == 0 {
            return Err(ConfigError::NonPositive { field: "show_delay_ms" });
        }
        if self.hide_delay_ms == 0 {
            return Err(ConfigError::NonPositive { field: "hide_delay_ms" });
        }
        Ok(())
    }

    pub fn show_delay(&self) -> Duration {
        Duration::from_millis(self.show_delay_ms)
    }

    pub fn hide_delay(&self) -> Duration {
        Duration::from_millis(self.hide_delay_ms)
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_fetch_policy(mut self, policy: FetchPolicy) -> Self {
        self.fetch_policy = policy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TooltipConfig::default();
        assert_eq!(config.show_delay(), Duration::from_millis(500));
        assert_eq!(config.hide_delay(), Duration::from_millis(1000));
        assert_eq!(config.popup_id, "tooltipdiv");
        assert_eq!(config.fetch_policy, FetchPolicy::ApplyAlways);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = TooltipConfig::from_json(
            r#"{"show_delay_ms": 250, "fetch_policy": "fence_by_generation"}"#,
        )
        .unwrap();

        assert_eq!(config.show_delay_ms, 250);
        assert_eq!(config.hide_delay_ms, 1000);
        assert_eq!(config.fetch_policy, FetchPolicy::FenceByGeneration);
        assert_eq!(config.content_kind, ContentKind::Metadata);
    }

    #[test]
    fn test_zero_delay_rejected() {
        let err = TooltipConfig::from_json(r#"{"hide_delay_ms": 0}"#).unwrap_err();
        assert!(matches!(err, ConfigError::NonPositive { field: "hide_delay_ms" }));
    }

    #[test]
    fn test_malformed_json_rejected() {
        assert!(matches!(
            TooltipConfig::from_json("{not json"),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn test_round_trip_through_json() {
        let config = TooltipConfig::default().with_base_url("http://repo/repository");
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(TooltipConfig::from_json(&json).unwrap(), config);
    }
}
