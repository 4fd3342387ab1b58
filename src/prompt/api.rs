//! Rendering of user-configured API descriptions into the `{apis}` text.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One API the generated code may call.
///
/// `env` maps environment variable names to what they hold. Only the names
/// and meanings reach the prompt; the model is told to read the values
/// through `runtime.get_env`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiSpec {
    pub name: String,
    #[serde(default)]
    pub desc: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub env: BTreeMap<String, String>,
}

impl ApiSpec {
    pub fn new(name: impl Into<String>, desc: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            desc: desc.into(),
            env: BTreeMap::new(),
        }
    }

    pub fn with_env(mut self, var: impl Into<String>, meaning: impl Into<String>) -> Self {
        self.env.insert(var.into(), meaning.into());
        self
    }

    fn render(&self) -> String {
        let mut out = format!("## {} API\n### API 描述\n{}", self.name, self.desc.trim_end());
        if !self.env.is_empty() {
            out.push_str("\n### 环境变量名称和意义");
            for (var, meaning) in &self.env {
                out.push_str(&format!("\n- {}: {}", var, meaning));
            }
        }
        out
    }
}

/// Render API descriptions, separated by blank lines. No APIs renders as "".
pub fn render_api_info(apis: &[ApiSpec]) -> String {
    apis.iter()
        .map(ApiSpec::render)
        .collect::<Vec<_>>()
        .join("\n\n")
}
