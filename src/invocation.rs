use std::path::Path;

use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;
use tracing::{debug, instrument};

use crate::error::{Error, Result};

/// 程序名原样保留，其余参数逐个用单引号包裹
pub fn format_invocation<S: AsRef<str>>(args: &[S]) -> String {
    let mut line = String::new();
    let mut iter = args.iter();
    if let Some(program) = iter.next() {
        line.push_str(program.as_ref());
    }
    for arg in iter {
        line.push(' ');
        line.push_str(&quote(arg.as_ref()));
    }
    line.push('\n');
    line
}

fn quote(arg: &str) -> String {
    format!("'{}'", arg.replace('\'', r"'\''"))
}

/// 把本次命令追加写入日志文件
#[instrument(skip(args))]
pub async fn log_invocation<S: AsRef<str>>(args: &[S], log_file: &Path) -> Result<()> {
    let line = format_invocation(args);

    let mut file = OpenOptions::new()
        .append(true)
        .create(true)
        .open(log_file)
        .await
        .map_err(|source| Error::LogOpenFailed {
            path: log_file.to_path_buf(),
            source,
        })?;

    let write_failed = |source| Error::LogWriteFailed {
        path: log_file.to_path_buf(),
        line: line.trim_end().to_owned(),
        source,
    };
    file.write_all(line.as_bytes()).await.map_err(write_failed)?;
    file.flush().await.map_err(write_failed)?;

    debug!("命令已记录: {}", line.trim_end());
    Ok(())
}
