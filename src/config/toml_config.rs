use crate::core::formatter::DEFAULT_PRECISION;
use crate::core::linalg::DEFAULT_SINGULAR_TOLERANCE;
use crate::domain::model::{OperandSpec, OperationKind, OperationRequest};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{MatrixError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_range, validate_tolerance, validate_unique_names, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchConfig {
    pub batch: Option<BatchInfo>,
    pub engine: Option<EngineConfig>,
    pub output: Option<OutputConfig>,
    #[serde(default)]
    pub requests: Vec<RequestConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchInfo {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    pub precision: Option<usize>,
    pub singular_tolerance: Option<f64>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: Option<OutputFormat>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestConfig {
    pub name: String,
    pub operation: OperationKind,
    pub a: OperandSpec,
    pub b: OperandSpec,
}

impl RequestConfig {
    pub fn to_request(&self) -> OperationRequest {
        OperationRequest {
            operation: self.operation,
            a: self.a.clone(),
            b: self.b.clone(),
        }
    }
}

impl BatchConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(MatrixError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| MatrixError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${MATRIX_A})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| MatrixError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        if let Some(precision) = self.engine.as_ref().and_then(|e| e.precision) {
            validate_range("engine.precision", precision, 1, 17)?;
        }
        if let Some(tolerance) = self.engine.as_ref().and_then(|e| e.singular_tolerance) {
            validate_tolerance("engine.singular_tolerance", tolerance)?;
        }

        if self.requests.is_empty() {
            return Err(MatrixError::ConfigError {
                message: "No [[requests]] defined".to_string(),
            });
        }

        for request in &self.requests {
            validate_non_empty_string("requests.name", &request.name)?;
        }
        validate_unique_names(
            "requests.name",
            self.requests.iter().map(|r| r.name.as_str()),
        )?;

        Ok(())
    }

    pub fn batch_name(&self) -> &str {
        self.batch.as_ref().map(|b| b.name.as_str()).unwrap_or("unnamed")
    }

    pub fn output_format(&self) -> OutputFormat {
        self.output
            .as_ref()
            .and_then(|o| o.format)
            .unwrap_or_default()
    }
}

impl ConfigProvider for BatchConfig {
    fn precision(&self) -> usize {
        self.engine
            .as_ref()
            .and_then(|e| e.precision)
            .unwrap_or(DEFAULT_PRECISION)
    }

    fn singular_tolerance(&self) -> f64 {
        self.engine
            .as_ref()
            .and_then(|e| e.singular_tolerance)
            .unwrap_or(DEFAULT_SINGULAR_TOLERANCE)
    }
}

impl Validate for BatchConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
