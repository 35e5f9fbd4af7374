pub mod format;

use std::ops::RangeInclusive;
use std::str::FromStr;

pub use format::IndexFormat;

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    #[error("章节范围应为 begin,end 或 begin,end,fmt，实际为 '{0}'")]
    FieldCount(String),

    #[error("无效的章节编号 '{0}'")]
    InvalidIndex(String),

    #[error("起始章节 {begin} 大于结束章节 {end}")]
    Reversed { begin: i64, end: i64 },

    #[error("无效的编号格式 '{0}'")]
    InvalidFormat(String),

    #[error("编号格式 '{0}' 只能包含一个整数占位符")]
    TooManyConversions(String),
}

/// 要下载的章节范围，两端都包含
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRange {
    pub begin: i64,
    pub end: i64,
    pub format: Option<IndexFormat>,
}

impl FetchRange {
    pub fn new(begin: i64, end: i64, format: Option<IndexFormat>) -> Result<Self, RangeError> {
        if begin > end {
            return Err(RangeError::Reversed { begin, end });
        }
        Ok(Self { begin, end, format })
    }

    pub fn indices(&self) -> RangeInclusive<i64> {
        self.begin..=self.end
    }

    pub fn count(&self) -> u64 {
        self.end.abs_diff(self.begin).saturating_add(1)
    }

    /// URL 中使用的编号，有格式时按格式渲染
    pub fn label(&self, index: i64) -> String {
        match &self.format {
            Some(format) => format.render(index),
            None => index.to_string(),
        }
    }

    /// floor(100 * index / end)，end 为 0 时视为已完成
    pub fn percent(&self, index: i64) -> i64 {
        if self.end == 0 {
            return 100;
        }
        let num = i128::from(index) * 100;
        let den = i128::from(self.end);
        let quotient = num / den;
        let floored = if num % den != 0 && ((num < 0) != (den < 0)) {
            quotient - 1
        } else {
            quotient
        };
        i64::try_from(floored).unwrap_or(if floored < 0 { i64::MIN } else { i64::MAX })
    }
}

impl FromStr for FetchRange {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = s.split(',').collect();
        let (begin, end, format) = match fields.as_slice() {
            [begin, end] => (*begin, *end, None),
            [begin, end, format] => (*begin, *end, Some(format.parse::<IndexFormat>()?)),
            _ => return Err(RangeError::FieldCount(s.to_owned())),
        };

        let parse_index = |field: &str| {
            field
                .trim()
                .parse::<i64>()
                .map_err(|_| RangeError::InvalidIndex(field.to_owned()))
        };

        Self::new(parse_index(begin)?, parse_index(end)?, format)
    }
}
