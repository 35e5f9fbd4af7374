pub mod downloader;
pub mod processor;
pub mod target;

use std::io::Write;

use tracing::{error, info, instrument, warn};

pub use downloader::{Downloader, Fetch};
pub use processor::{ensure_dir, write_page};
pub use target::FetchTarget;

use crate::error::Error;
use crate::range::FetchRange;

/// 一次运行的结果：成功保存的章节数，以及中断运行的错误
#[derive(Debug)]
pub struct RunSummary {
    pub succeeded: usize,
    pub failure: Option<Error>,
}

impl RunSummary {
    pub fn into_result(self) -> Result<usize, Error> {
        match self.failure {
            Some(e) => Err(e),
            None => Ok(self.succeeded),
        }
    }
}

/// 按编号顺序逐章下载，任何一章失败都立即终止
pub struct RangeCrawler<D: Fetch> {
    downloader: D,
    target: FetchTarget,
}

impl<D: Fetch> RangeCrawler<D> {
    pub fn new(downloader: D, target: FetchTarget) -> Self {
        Self { downloader, target }
    }

    /// 进度行写入 `progress`，格式为 `{percent}% {uri} Finished.`
    #[instrument(skip_all, fields(begin = range.begin, end = range.end))]
    pub async fn run<W: Write>(&self, range: &FetchRange, progress: &mut W) -> RunSummary {
        info!("开始下载，共 {} 章", range.count());
        let mut succeeded = 0;

        for index in range.indices() {
            if let Err(e) = self.fetch_one(range, index, progress).await {
                error!("{}", e);
                return RunSummary {
                    succeeded,
                    failure: Some(e),
                };
            }
            succeeded += 1;
        }

        info!("下载完成，共保存 {} 章", succeeded);
        RunSummary {
            succeeded,
            failure: None,
        }
    }

    async fn fetch_one<W: Write>(
        &self,
        range: &FetchRange,
        index: i64,
        progress: &mut W,
    ) -> Result<(), Error> {
        let uri = self.target.uri(range, index);
        let save_path = self.target.save_path(index);

        let body = self
            .downloader
            .fetch(&uri)
            .await
            .map_err(|source| Error::FetchFailed {
                index,
                uri: uri.clone(),
                source,
            })?;

        write_page(&save_path, &body).await?;

        // 进度输出失败不影响下载本身
        if let Err(e) = writeln!(progress, "{}% {} Finished.", range.percent(index), uri)
            .and_then(|()| progress.flush())
        {
            warn!("进度输出失败: {}", e);
        }
        Ok(())
    }
}
