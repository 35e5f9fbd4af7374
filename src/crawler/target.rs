use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::range::FetchRange;

/// 请求地址前缀、保存目录和扩展名
#[derive(Debug, Clone)]
pub struct FetchTarget {
    url_base: String,
    save_dir: PathBuf,
    extension: String,
}

impl FetchTarget {
    pub fn new(
        url_base: impl Into<String>,
        save_dir: impl Into<PathBuf>,
        extension: impl Into<String>,
    ) -> Result<Self> {
        let url_base = url_base.into();
        if url_base.is_empty() {
            return Err(Error::Usage("url 不能为空".to_owned()));
        }
        Ok(Self {
            url_base,
            save_dir: save_dir.into(),
            extension: extension.into(),
        })
    }

    pub fn save_dir(&self) -> &Path {
        &self.save_dir
    }

    // 直接拼接，不插入 '/'
    pub fn uri(&self, range: &FetchRange, index: i64) -> String {
        format!("{}{}.{}", self.url_base, range.label(index), self.extension)
    }

    /// 文件名总是使用原始编号，不受格式影响
    pub fn save_path(&self, index: i64) -> PathBuf {
        self.save_dir.join(format!("{}.{}", index, self.extension))
    }
}
