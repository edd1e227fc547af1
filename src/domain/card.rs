use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Вид карты. Порядок объявления совпадает с номиналом 1..=8.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CardKind {
    Guard = 1,
    Priest,
    Baron,
    Handmaid,
    Prince,
    King,
    Countess,
    Princess,
}

impl CardKind {
    /// Номинал карты (1..=8).
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Каноническое имя — то, что видит клиент в логе и командах.
    pub const fn name(self) -> &'static str {
        match self {
            CardKind::Guard => "Guard",
            CardKind::Priest => "Priest",
            CardKind::Baron => "Baron",
            CardKind::Handmaid => "Handmaid",
            CardKind::Prince => "Prince",
            CardKind::King => "King",
            CardKind::Countess => "Countess",
            CardKind::Princess => "Princess",
        }
    }
}

impl fmt::Display for CardKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Парсинг строки вида "Guard", "priest" (регистр не важен).
impl FromStr for CardKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "guard" => Ok(CardKind::Guard),
            "priest" => Ok(CardKind::Priest),
            "baron" => Ok(CardKind::Baron),
            "handmaid" => Ok(CardKind::Handmaid),
            "prince" => Ok(CardKind::Prince),
            "king" => Ok(CardKind::King),
            "countess" => Ok(CardKind::Countess),
            "princess" => Ok(CardKind::Princess),
            _ => Err(format!("Invalid card kind: {s}")),
        }
    }
}

/// Карта Love Letter. Вся информация о карте — в её виде.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Card {
    pub kind: CardKind,
}

impl Card {
    pub const fn new(kind: CardKind) -> Self {
        Self { kind }
    }

    pub const fn value(self) -> u8 {
        self.kind.value()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)
    }
}
