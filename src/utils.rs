use std::time::Duration;

/// 把耗时格式化为 `N分N秒N毫秒`，为零的毫秒部分省略
pub fn format_elapsed(duration: Duration) -> String {
    let total_ms = duration.as_millis();

    // 少于1秒：只显示毫秒
    if total_ms < 1000 {
        return format!("{}毫秒", total_ms);
    }

    let mins = total_ms / 60000;
    let secs = (total_ms % 60000) / 1000;
    let ms_remaining = total_ms % 1000;

    let mut text = String::new();
    if mins > 0 {
        text.push_str(&format!("{}分", mins));
    }
    text.push_str(&format!("{}秒", secs));
    if ms_remaining > 0 {
        text.push_str(&format!("{}毫秒", ms_remaining));
    }
    text
}
