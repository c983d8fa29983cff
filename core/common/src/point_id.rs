//! ポイントID生成: 固定長ASCII・辞書順＝生成順
//!
//! 形式: base62(0-9,A-Z,a-z) 8文字。値 = (ms since 2024-01-01)<<6 | seq(0..63)。
//! 保存済みポイントには生成時にこのIDを割り当て、行番号ではなくIDで同一性を扱う。

use std::sync::atomic::{AtomicU64, Ordering};

/// ID生成の Outbound ポート
///
/// 実装は `StdIdGenerator`（時刻ベース）や、テスト用の連番スタブなど。
pub trait IdGenerator: Send + Sync {
    /// 新しい不透明IDを 1 つ生成する
    fn generate(&self) -> String;
}

static LAST_ID: AtomicU64 = AtomicU64::new(0);

const EPOCH_MS: u64 = 1704067200000; // 2024-01-01 00:00:00 UTC
const SEQ_BITS: u64 = 6;
const SEQ_MASK: u64 = (1 << SEQ_BITS) - 1; // 0..63
const BASE: u64 = 62;
const WIDTH: usize = 8;
const MAX_VAL: u64 = BASE.pow(WIDTH as u32) - 1;

/// 0-9, A-Z, a-z の順で辞書順＝数値順になる base62
const ALPHABET: &[u8; 62] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// 時刻ベースの IdGenerator 実装
///
/// 同一 ms 内は seq で単調増加させるため、生成順と辞書順が一致する。
#[derive(Debug, Clone, Default)]
pub struct StdIdGenerator;

impl IdGenerator for StdIdGenerator {
    fn generate(&self) -> String {
        let ms_rel = now_ms().saturating_sub(EPOCH_MS);
        let base = (ms_rel << SEQ_BITS).min(MAX_VAL);
        loop {
            let prev = LAST_ID.load(Ordering::SeqCst);
            let next = if (prev >> SEQ_BITS) < ms_rel {
                base
            } else {
                let seq = (prev & SEQ_MASK) + 1;
                if seq > SEQ_MASK {
                    continue; // 同一 ms 内で seq 枯渇、次の ms まで回す
                }
                (prev + 1).min(MAX_VAL)
            };
            if LAST_ID
                .compare_exchange(prev, next, Ordering::SeqCst, Ordering::SeqCst)
                .is_ok()
            {
                return to_base62(next);
            }
        }
    }
}

fn to_base62(mut n: u64) -> String {
    let mut buf = [0u8; WIDTH];
    for i in (0..WIDTH).rev() {
        buf[i] = ALPHABET[(n % BASE) as usize];
        n /= BASE;
    }
    String::from_utf8_lossy(&buf).into_owned()
}

fn now_ms() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_fixed_length_ascii() {
        let id = StdIdGenerator.generate();
        assert_eq!(id.len(), 8);
        assert!(id.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_ids_unique_and_ordered() {
        let gen = StdIdGenerator;
        let ids: Vec<String> = (0..40).map(|_| gen.generate()).collect();
        let mut sorted = ids.clone();
        sorted.sort();
        assert_eq!(ids, sorted, "generation order must equal lexicographic order");
        sorted.dedup();
        assert_eq!(sorted.len(), ids.len(), "ids must be unique");
    }
}
