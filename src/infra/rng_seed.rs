//! RngSeed — доменный seed для воспроизводимых раздач.
//!
//! Позволяет:
//!   - хранить базовый seed ([u8;32])
//!   - делать детерминированное hash-reseeding:
//!         new = H(domain || old || session_code || round_index)
//!   - создавать DeterministicRng из seed
//!
//! Одинаковый базовый seed и контекст — одинаковая раздача; раздачи
//! разных раундов и сессий не совпадают.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::infra::rng::DeterministicRng;

/// 32-байтовый seed для RNG.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RngSeed {
    pub bytes: [u8; 32],
}

impl RngSeed {
    /// Создать seed из 32 байт.
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self { bytes }
    }

    /// Создать seed из u64 (для удобства тестов).
    pub fn from_u64(x: u64) -> Self {
        let mut b = [0u8; 32];
        b[..8].copy_from_slice(&x.to_le_bytes());
        Self { bytes: b }
    }

    /// Доменное хэш-расширение с включением контекста:
    ///   - код сессии;
    ///   - номер раунда внутри сессии.
    ///
    /// Пример вызова:
    ///     new_seed = old_seed.derive(code, round_index)
    pub fn derive(&self, session_code: &str, round_index: u64) -> Self {
        let mut hasher = Sha256::new();

        // Доменный префикс
        hasher.update(b"LOVELETTER_ENGINE_RNG_V1");

        // Старый seed
        hasher.update(self.bytes);

        // Код сессии
        hasher.update(session_code.as_bytes());

        // Номер раунда
        hasher.update(round_index.to_le_bytes());

        let hash = hasher.finalize();

        let mut out = [0u8; 32];
        out.copy_from_slice(&hash[..32]);

        Self { bytes: out }
    }

    /// Создать DeterministicRng из seed.
    pub fn to_rng(&self) -> DeterministicRng {
        DeterministicRng::from_seed_bytes(self.bytes)
    }
}
