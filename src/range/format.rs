use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use super::RangeError;

// %[flags][width]conv，或者 %% 转义
static CONVERSION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"%(?:(%)|([-+ 0]*)(\d*)([diuxXob]))").expect("格式正则编译失败")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Radix {
    Decimal,
    LowerHex,
    UpperHex,
    Octal,
    Binary,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Conversion {
    left_align: bool,
    zero_pad: bool,
    plus_sign: bool,
    space_sign: bool,
    width: usize,
    radix: Radix,
}

impl Conversion {
    fn render(&self, value: i64) -> String {
        let magnitude = value.unsigned_abs();
        let digits = match self.radix {
            Radix::Decimal => magnitude.to_string(),
            Radix::LowerHex => format!("{:x}", magnitude),
            Radix::UpperHex => format!("{:X}", magnitude),
            Radix::Octal => format!("{:o}", magnitude),
            Radix::Binary => format!("{:b}", magnitude),
        };

        let sign = if value < 0 {
            "-"
        } else if self.plus_sign && self.radix == Radix::Decimal {
            "+"
        } else if self.space_sign && self.radix == Radix::Decimal {
            " "
        } else {
            ""
        };

        let len = sign.len() + digits.len();
        let pad = self.width.saturating_sub(len);
        if self.left_align {
            format!("{}{}{}", sign, digits, " ".repeat(pad))
        } else if self.zero_pad {
            format!("{}{}{}", sign, "0".repeat(pad), digits)
        } else {
            format!("{}{}{}", " ".repeat(pad), sign, digits)
        }
    }
}

/// printf 风格的章节编号格式，例如 `%03d` => 001,002...
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexFormat {
    pattern: String,
    prefix: String,
    suffix: String,
    conversion: Option<Conversion>,
}

impl IndexFormat {
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn render(&self, index: i64) -> String {
        match &self.conversion {
            Some(conversion) => {
                format!("{}{}{}", self.prefix, conversion.render(index), self.suffix)
            }
            None => self.prefix.clone(),
        }
    }
}

impl FromStr for IndexFormat {
    type Err = RangeError;

    fn from_str(pattern: &str) -> Result<Self, Self::Err> {
        let mut prefix = String::new();
        let mut suffix = String::new();
        let mut conversion = None;
        let mut last = 0;

        for caps in CONVERSION.captures_iter(pattern) {
            let Some(whole) = caps.get(0) else {
                continue;
            };
            let literal = &pattern[last..whole.start()];
            if literal.contains('%') {
                return Err(RangeError::InvalidFormat(pattern.to_owned()));
            }
            last = whole.end();

            let out = if conversion.is_some() {
                &mut suffix
            } else {
                &mut prefix
            };
            out.push_str(literal);

            if caps.get(1).is_some() {
                out.push('%');
                continue;
            }

            if conversion.is_some() {
                return Err(RangeError::TooManyConversions(pattern.to_owned()));
            }

            let flags = caps.get(2).map_or("", |m| m.as_str());
            let width = match caps.get(3).map_or("", |m| m.as_str()) {
                "" => 0,
                w => w
                    .parse()
                    .map_err(|_| RangeError::InvalidFormat(pattern.to_owned()))?,
            };
            let radix = match caps.get(4).map_or("d", |m| m.as_str()) {
                "x" => Radix::LowerHex,
                "X" => Radix::UpperHex,
                "o" => Radix::Octal,
                "b" => Radix::Binary,
                _ => Radix::Decimal,
            };

            conversion = Some(Conversion {
                left_align: flags.contains('-'),
                zero_pad: flags.contains('0'),
                plus_sign: flags.contains('+'),
                space_sign: flags.contains(' '),
                width,
                radix,
            });
        }

        let tail = &pattern[last..];
        if tail.contains('%') {
            return Err(RangeError::InvalidFormat(pattern.to_owned()));
        }
        if conversion.is_some() {
            suffix.push_str(tail);
        } else {
            prefix.push_str(tail);
        }

        Ok(Self {
            pattern: pattern.to_owned(),
            prefix,
            suffix,
            conversion,
        })
    }
}
