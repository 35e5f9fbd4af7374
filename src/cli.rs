use std::path::PathBuf;

use clap::Parser;
use clap::builder::NonEmptyStringValueParser;

use crate::range::FetchRange;

static EXAMPLE: &str = "Example:
  chapter-fetch 'https://xbookcn.net/book/tiandi/' '1,200' './小说/天地/'
Params:
  begin,end,fmt: 1,102,%03d => 001,002...102";

/// 按编号顺序下载小说章节页面
#[derive(Parser, Debug)]
#[command(version, about, after_help = EXAMPLE)]
pub struct Args {
    /// 章节地址前缀，直接与编号拼接
    #[arg(value_parser = NonEmptyStringValueParser::new())]
    pub url: String,
    /// 章节范围 begin,end[,fmt]
    #[arg(allow_hyphen_values = true)]
    pub range: FetchRange,
    /// 保存目录
    pub save_dir: PathBuf,
}
