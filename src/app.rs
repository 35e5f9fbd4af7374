use std::ffi::OsString;
use std::io::Write;
use std::time::Instant;

use anyhow::Result;
use tracing::{info, instrument};

use crate::cli::Args;
use crate::config::Settings;
use crate::crawler::{self, Downloader, FetchTarget, RangeCrawler};
use crate::{invocation, utils};

/// 建目录、记录命令、逐章下载，返回保存的章节数
///
/// `argv` 只用于写入命令日志，非 UTF-8 参数在日志里做有损转换，
/// 实际使用的路径来自 `args`。
#[instrument(skip_all, fields(url = %args.url))]
pub async fn run<W: Write>(
    args: Args,
    argv: &[OsString],
    settings: &Settings,
    progress: &mut W,
) -> Result<usize> {
    let target = FetchTarget::new(args.url, &args.save_dir, &settings.extension)?;

    crawler::ensure_dir(target.save_dir()).await?;

    let logged: Vec<String> = argv
        .iter()
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();
    invocation::log_invocation(&logged, &settings.log_file).await?;

    let downloader = Downloader::new(&settings.proxy)?;
    let crawler = RangeCrawler::new(downloader, target);

    let start = Instant::now();
    let saved = crawler.run(&args.range, progress).await.into_result()?;

    info!(
        "✅ 下载完成！共 {} 章，耗时: {}",
        saved,
        utils::format_elapsed(start.elapsed())
    );
    Ok(saved)
}
