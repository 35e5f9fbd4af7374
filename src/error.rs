use std::io;
use std::path::PathBuf;

/// 传输层错误，由 `Fetch` 实现返回
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("参数错误: {0}")]
    Usage(String),

    #[error("无法创建目录 {path}: {source}")]
    DirCreateFailed { path: PathBuf, source: io::Error },

    #[error("Can't open file {path}: {source}")]
    LogOpenFailed { path: PathBuf, source: io::Error },

    #[error("Can't write cmd({line}) to file({path}): {source}")]
    LogWriteFailed {
        path: PathBuf,
        line: String,
        source: io::Error,
    },

    #[error("第 {index} 章下载失败 {uri}: {source}")]
    FetchFailed {
        index: i64,
        uri: String,
        source: BoxError,
    },

    #[error("保存文件失败 {path}: {source}")]
    SaveFailed { path: PathBuf, source: io::Error },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
