use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Error;

/// The receipt types a user can fill in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReceiptKind {
    Life,
    Food,
    Movie,
    Game,
    Music,
    Idol,
    Reading,
    Travel,
    Fitness,
    Social,
    Sleep,
    Coffee,
    Shopping,
}

impl ReceiptKind {
    pub const ALL: [ReceiptKind; 13] = [
        ReceiptKind::Life,
        ReceiptKind::Food,
        ReceiptKind::Movie,
        ReceiptKind::Game,
        ReceiptKind::Music,
        ReceiptKind::Idol,
        ReceiptKind::Reading,
        ReceiptKind::Travel,
        ReceiptKind::Fitness,
        ReceiptKind::Social,
        ReceiptKind::Sleep,
        ReceiptKind::Coffee,
        ReceiptKind::Shopping,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            ReceiptKind::Life => "life",
            ReceiptKind::Food => "food",
            ReceiptKind::Movie => "movie",
            ReceiptKind::Game => "game",
            ReceiptKind::Music => "music",
            ReceiptKind::Idol => "idol",
            ReceiptKind::Reading => "reading",
            ReceiptKind::Travel => "travel",
            ReceiptKind::Fitness => "fitness",
            ReceiptKind::Social => "social",
            ReceiptKind::Sleep => "sleep",
            ReceiptKind::Coffee => "coffee",
            ReceiptKind::Shopping => "shopping",
        }
    }

    /// Prefix of exported file names, e.g. `SLEEP_LOG_1700000000000.png`
    pub fn file_prefix(self) -> &'static str {
        match self {
            ReceiptKind::Life => "LIFE_LOG",
            ReceiptKind::Food => "FOOD_LOG",
            ReceiptKind::Movie => "MOVIE_RECEIPT",
            ReceiptKind::Game => "GAME_RECEIPT",
            ReceiptKind::Music => "CONCERT_LOG",
            ReceiptKind::Idol => "IDOL_LOG",
            ReceiptKind::Reading => "READING_LOG",
            ReceiptKind::Travel => "BOARDING_PASS",
            ReceiptKind::Fitness => "FITNESS_LOG",
            ReceiptKind::Social => "SOCIAL_LOG",
            ReceiptKind::Sleep => "SLEEP_LOG",
            ReceiptKind::Coffee => "CAFFEINE_LOG",
            ReceiptKind::Shopping => "SPENDING_LOG",
        }
    }
}

impl fmt::Display for ReceiptKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for ReceiptKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        ReceiptKind::ALL
            .into_iter()
            .find(|k| k.slug() == wanted)
            .ok_or_else(|| Error::Other(format!("unknown receipt kind '{}'", s)))
    }
}
