use std::fmt::Display;

/// 將數值轉為字串並在左側補 `'0'`，直到長度至少為 `width`。
///
/// 已經夠長的字串原樣返回，不會截斷：`pad(123, 2)` 仍是 `"123"`。
/// 負號被當作一般字元處理（`pad(-5, 3)` 得到 `"0-5"`）。
pub fn pad<T: Display>(value: T, width: usize) -> String {
    let text = value.to_string();
    let len = text.chars().count();
    if len >= width {
        return text;
    }

    let mut padded = "0".repeat(width - len);
    padded.push_str(&text);
    padded
}
