use std::fmt;
use std::str::FromStr;

use crate::rules::GameRules;
use crate::{berzerk, keystone_kapers, king_kong, pacman, pitfall2, zaxxon};

/// Every supported title. The set is fixed at build time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Title {
    Berzerk,
    KeystoneKapers,
    KingKong,
    Pacman,
    Pitfall2,
    Zaxxon,
}

impl Title {
    pub const ALL: [Title; 6] = [
        Title::Berzerk,
        Title::KeystoneKapers,
        Title::KingKong,
        Title::Pacman,
        Title::Pitfall2,
        Title::Zaxxon,
    ];

    pub fn rules(self) -> &'static GameRules {
        match self {
            Title::Berzerk => &berzerk::RULES,
            Title::KeystoneKapers => &keystone_kapers::RULES,
            Title::KingKong => &king_kong::RULES,
            Title::Pacman => &pacman::RULES,
            Title::Pitfall2 => &pitfall2::RULES,
            Title::Zaxxon => &zaxxon::RULES,
        }
    }

    pub fn name(self) -> &'static str {
        self.rules().name
    }
}

impl fmt::Display for Title {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a title name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTitle(pub String);

impl fmt::Display for UnknownTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<_> = Title::ALL.iter().map(|t| t.name()).collect();
        write!(f, "unknown title: {} (available: {})", self.0, names.join(", "))
    }
}

impl std::error::Error for UnknownTitle {}

impl FromStr for Title {
    type Err = UnknownTitle;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::registry::find(s).ok_or_else(|| UnknownTitle(s.to_string()))
    }
}
