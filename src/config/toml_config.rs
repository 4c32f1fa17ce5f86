use crate::config::ContactSettings;
use crate::utils::error::{ContactError, Result};
use crate::utils::validation::{validate_required_field, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub endpoint: EndpointConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EndpointConfig {
    pub url: Option<String>,
    pub headers: Option<HashMap<String, String>>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ContactError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// 替換環境變數 (例如 ${SUPABASE_KEY})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ContactError::InvalidConfigValueError {
            field: "env_substitution".to_string(),
            value: String::new(),
            reason: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn into_settings(self) -> Result<ContactSettings> {
        let url = validate_required_field("endpoint.url", &self.endpoint.url)?;
        let settings = ContactSettings::new(url.clone(), self.endpoint.headers.unwrap_or_default());
        settings.validate()?;
        Ok(settings)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        let url = validate_required_field("endpoint.url", &self.endpoint.url)?;
        crate::utils::validation::validate_url("endpoint.url", url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::ConfigProvider;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_endpoint_with_headers() {
        let toml_content = r#"
[endpoint]
url = "https://db.example.com/rest/v1/contact_messages"

[endpoint.headers]
apikey = "public-anon-key"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_ok());

        let settings = config.into_settings().unwrap();
        assert_eq!(
            settings.endpoint(),
            "https://db.example.com/rest/v1/contact_messages"
        );
        assert_eq!(
            settings.headers().get("apikey").map(String::as_str),
            Some("public-anon-key")
        );
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("PORTFOLIO_TEST_ENDPOINT", "https://hooks.example.com/contact");

        let toml_content = r#"
[endpoint]
url = "${PORTFOLIO_TEST_ENDPOINT}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(
            config.endpoint.url.as_deref(),
            Some("https://hooks.example.com/contact")
        );

        std::env::remove_var("PORTFOLIO_TEST_ENDPOINT");
    }

    #[test]
    fn test_missing_url_fails_fast() {
        let config = TomlConfig::from_toml_str("[endpoint]\n").unwrap();
        assert!(matches!(
            config.into_settings(),
            Err(ContactError::MissingConfigError { .. })
        ));
    }

    #[test]
    fn test_unset_env_var_is_left_and_rejected() {
        let toml_content = r#"
[endpoint]
url = "${PORTFOLIO_TEST_SURELY_UNSET}"
"#;
        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[endpoint]\nurl = \"http://localhost:9000/hook\"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.endpoint.url.as_deref(), Some("http://localhost:9000/hook"));
    }
}
