use anyhow::Result;
use bytes::Bytes;
use reqwest::{Client, Proxy};
use tracing::{debug, info, instrument};

use crate::config::ProxyConfig;
use crate::error::BoxError;

/// 按 URI 取回原始字节，失败即返回错误
#[allow(async_fn_in_trait)]
pub trait Fetch {
    async fn fetch(&self, uri: &str) -> Result<Bytes, BoxError>;
}

pub struct Downloader {
    client: Client,
}

impl Downloader {
    pub fn new(proxy: &ProxyConfig) -> Result<Self> {
        let builder = Client::builder();
        let builder = if proxy.enabled {
            let proxy_url = proxy.url();
            info!("使用代理: {}", proxy_url);
            // reqwest 经 http 代理时总是发送完整 URI，无法退回 origin-form
            if !proxy.request_full_uri {
                anyhow::bail!("代理 {} 不支持 request_full_uri = false", proxy_url);
            }
            builder.proxy(Proxy::all(&proxy_url)?)
        } else {
            builder.no_proxy()
        };

        Ok(Self {
            client: builder.build()?,
        })
    }
}

impl Fetch for Downloader {
    #[instrument(skip(self))]
    async fn fetch(&self, uri: &str) -> Result<Bytes, BoxError> {
        let response = self.client.get(uri).send().await?.error_for_status()?;
        let body = response.bytes().await?;
        debug!("收到 {} 字节", body.len());
        Ok(body)
    }
}
