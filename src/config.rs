use std::path::PathBuf;

use anyhow::Result;
use serde::Deserialize;

static CONFIG_FILE: &str = "config";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// 命令日志文件，每次运行追加一行
    #[serde(default = "default_log_file")]
    pub log_file: PathBuf,
    /// 请求和保存文件使用的扩展名
    #[serde(default = "default_extension")]
    pub extension: String,
    #[serde(default)]
    pub proxy: ProxyConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_file: default_log_file(),
            extension: default_extension(),
            proxy: ProxyConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ProxyConfig {
    pub enabled: bool,
    pub host: String,
    pub port: u16,
    /// 为 true 时 http 请求也走代理，请求行携带完整 URI
    pub request_full_uri: bool,
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            host: "127.0.0.1".to_owned(),
            port: 1087,
            request_full_uri: true,
        }
    }
}

impl ProxyConfig {
    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

fn default_log_file() -> PathBuf {
    PathBuf::from("./cmd.txt")
}

fn default_extension() -> String {
    "htm".to_owned()
}

impl Settings {
    /// 读取工作目录下可选的 config.toml
    pub fn load() -> Result<Self> {
        config::Config::builder()
            .add_source(
                config::File::with_name(CONFIG_FILE)
                    .format(config::FileFormat::Toml)
                    .required(false),
            )
            .build()?
            .try_deserialize::<Self>()
            .map_err(|e| anyhow::anyhow!("配置文件反序列化失败: {}", e))?
            .validated()
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        config::Config::builder()
            .add_source(config::File::from_str(content, config::FileFormat::Toml))
            .build()?
            .try_deserialize::<Self>()
            .map_err(|e| anyhow::anyhow!("配置反序列化失败: {}", e))?
            .validated()
    }

    // 代理开启时请求行只能携带完整 URI
    fn validated(self) -> Result<Self> {
        if self.proxy.enabled && !self.proxy.request_full_uri {
            anyhow::bail!(
                "代理 {} 已开启，但 request_full_uri = false 不受支持",
                self.proxy.url()
            );
        }
        Ok(self)
    }
}
