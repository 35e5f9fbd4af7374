use std::io;
use std::path::Path;

use bytes::Bytes;
use tokio::fs;
use tracing::{info, instrument, warn};

use crate::error::{Error, Result};

/// 检查文件夹是否存在，不存在则创建（只创建一层）
#[instrument]
pub async fn ensure_dir(path: &Path) -> Result<()> {
    let dir_create_failed = |source| Error::DirCreateFailed {
        path: path.to_path_buf(),
        source,
    };

    match fs::metadata(path).await {
        Ok(meta) if meta.is_dir() => return Ok(()),
        Ok(_) => {
            return Err(dir_create_failed(io::Error::new(
                io::ErrorKind::AlreadyExists,
                "路径已存在且不是文件夹",
            )));
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => return Err(dir_create_failed(e)),
    }

    match fs::create_dir(path).await {
        Ok(()) => {
            info!("已创建文件夹: {}", path.display());
            Ok(())
        }
        Err(e) => {
            warn!("创建文件夹失败: {}: {}", path.display(), e);
            Err(dir_create_failed(e))
        }
    }
}

/// 原样写入响应内容，已存在则覆盖
#[instrument(skip_all, fields(path = %path.display()))]
pub async fn write_page(path: &Path, body: &Bytes) -> Result<()> {
    fs::write(path, body)
        .await
        .map_err(|source| Error::SaveFailed {
            path: path.to_path_buf(),
            source,
        })?;
    info!("已保存 {} 字节", body.len());
    Ok(())
}
