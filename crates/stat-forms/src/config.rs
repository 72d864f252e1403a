//! Workflow configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::kinds::FormKind;

/// Delays applied between a successful submission and the redirect.
///
/// These only shape perceived latency; nothing depends on them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkflowConfig {
    pub sign_in_delay_ms: u64,
    pub sign_up_delay_ms: u64,
    pub post_create_delay_ms: u64,
}

impl Default for WorkflowConfig {
    fn default() -> Self {
        Self {
            sign_in_delay_ms: 1500,
            sign_up_delay_ms: 1500,
            post_create_delay_ms: 1000,
        }
    }
}

impl WorkflowConfig {
    /// Configuration that redirects without waiting.
    pub const fn immediate() -> Self {
        Self {
            sign_in_delay_ms: 0,
            sign_up_delay_ms: 0,
            post_create_delay_ms: 0,
        }
    }

    /// Parses a JSON document; missing keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`crate::FormError::Config`] if the document is malformed.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Returns the redirect delay for a form kind.
    pub const fn delay_for(&self, kind: FormKind) -> Duration {
        let ms = match kind {
            FormKind::SignIn => self.sign_in_delay_ms,
            FormKind::SignUp => self.sign_up_delay_ms,
            FormKind::PostCreate => self.post_create_delay_ms,
        };
        Duration::from_millis(ms)
    }
}
