use serde::{Deserialize, Serialize};

use crate::core::{ScaleTuning, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::interaction::HoverTuning;

use super::{ChartStyle, Theme};

pub const ENGINE_CONFIG_JSON_SCHEMA_V1: u32 = 1;

/// Public engine bootstrap configuration.
///
/// This type is serializable so host applications can persist/load chart setup
/// without inventing their own ad-hoc format.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartEngineConfig {
    pub viewport: Viewport,
    #[serde(default)]
    pub theme: Theme,
    #[serde(default)]
    pub style: ChartStyle,
    #[serde(default)]
    pub scale_tuning: ScaleTuning,
    #[serde(default)]
    pub hover_tuning: HoverTuning,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
struct ChartEngineConfigJsonContractV1 {
    schema_version: u32,
    config: ChartEngineConfig,
}

impl ChartEngineConfig {
    /// Creates a config with default theme, style and tuning.
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            theme: Theme::default(),
            style: ChartStyle::default(),
            scale_tuning: ScaleTuning::default(),
            hover_tuning: HoverTuning::default(),
        }
    }

    #[must_use]
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: ChartStyle) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn with_scale_tuning(mut self, tuning: ScaleTuning) -> Self {
        self.scale_tuning = tuning;
        self
    }

    #[must_use]
    pub fn with_hover_tuning(mut self, tuning: HoverTuning) -> Self {
        self.hover_tuning = tuning;
        self
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        self.style.validate()?;
        self.scale_tuning.validate()?;
        let max_distance_sq = self.hover_tuning.max_distance_sq;
        if !max_distance_sq.is_finite() || max_distance_sq <= 0.0 {
            return Err(ChartError::InvalidData(
                "hover max distance must be finite and > 0".to_owned(),
            ));
        }
        Ok(())
    }

    pub fn to_json_pretty(self) -> ChartResult<String> {
        let payload = ChartEngineConfigJsonContractV1 {
            schema_version: ENGINE_CONFIG_JSON_SCHEMA_V1,
            config: self,
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize engine config: {e}"))
        })
    }

    /// Parses either a bare config object or the versioned contract.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config = match serde_json::from_str::<ChartEngineConfig>(input) {
            Ok(config) => config,
            Err(_) => {
                let payload: ChartEngineConfigJsonContractV1 = serde_json::from_str(input)
                    .map_err(|e| {
                        ChartError::InvalidData(format!("failed to parse engine config json: {e}"))
                    })?;
                if payload.schema_version != ENGINE_CONFIG_JSON_SCHEMA_V1 {
                    return Err(ChartError::InvalidData(format!(
                        "unsupported engine config schema version: {}",
                        payload.schema_version
                    )));
                }
                payload.config
            }
        };
        config.validate()?;
        Ok(config)
    }
}
