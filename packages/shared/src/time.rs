//! JST time helpers.

use chrono::{DateTime, FixedOffset, Offset, Utc};
use tracing_subscriber::fmt::{format::Writer, time::FormatTime};

/// JST offset in seconds (UTC+9)
const JST_OFFSET_SECS: i32 = 9 * 3600;

fn jst_offset() -> FixedOffset {
    // 9 * 3600 is always within the valid offset range
    FixedOffset::east_opt(JST_OFFSET_SECS).unwrap_or_else(|| Utc.fix())
}

/// Get current time in JST
pub fn now_jst() -> DateTime<FixedOffset> {
    Utc::now().with_timezone(&jst_offset())
}

/// Log line timer printing JST timestamps.
#[derive(Debug, Clone, Copy, Default)]
pub struct JstTimer;

impl FormatTime for JstTimer {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        write!(w, "{}", now_jst().format("%Y-%m-%dT%H:%M:%S%.3f%:z"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jst_timer_writes_offset() {
        // テスト項目: ログのタイムスタンプに +09:00 が含まれる
        // given (前提条件):
        let mut buf = String::new();

        // when (操作):
        JstTimer.format_time(&mut Writer::new(&mut buf)).unwrap();

        // then (期待する結果):
        assert!(buf.ends_with("+09:00"));
    }

    #[test]
    fn test_now_jst_has_jst_offset() {
        // テスト項目: 現在時刻のオフセットが +09:00 である
        // when (操作):
        let now = now_jst();

        // then (期待する結果):
        assert_eq!(now.offset().local_minus_utc(), JST_OFFSET_SECS);
    }
}
