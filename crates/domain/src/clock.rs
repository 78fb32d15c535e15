//! # Clock（時刻プロバイダ）
//!
//! ユースケース層での `Utc::now()` 直接呼び出しを置き換え、
//! テストで固定時刻を注入可能にするための抽象化。

use chrono::{DateTime, SubsecRound, Utc};

/// 永続化する時刻の小数秒桁数（PostgreSQL `TIMESTAMPTZ` はマイクロ秒精度）
const STORED_SUBSEC_DIGITS: u16 = 6;

/// 現在時刻を提供するトレイト
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;

    /// マイクロ秒に切り詰めた現在時刻
    ///
    /// エンティティに記録する時刻はこちらを使う。保存前と読み戻し後で値が一致する。
    fn now_micros(&self) -> DateTime<Utc> {
        self.now().trunc_subsecs(STORED_SUBSEC_DIGITS)
    }
}

/// 実際のシステム時刻を返す実装
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// 固定時刻を返すテスト用実装
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    now: DateTime<Utc>,
}

impl FixedClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self { now }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.now
    }
}
