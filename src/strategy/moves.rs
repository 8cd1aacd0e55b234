/// A throw in Rock-Paper-Scissors, as sent to the harness.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Move {
    R,
    P,
    S,
}

impl Move {
    pub const fn all() -> [Self; 3] {
        [Self::R, Self::P, Self::S]
    }
    pub fn name(&self) -> &'static str {
        match self {
            Self::R => "ROCK",
            Self::P => "PAPER",
            Self::S => "SCISSORS",
        }
    }
}

/// Accepts the protocol letter or the full name, in any case.
impl TryFrom<&str> for Move {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_uppercase().as_str() {
            "R" | "ROCK" => Ok(Self::R),
            "P" | "PAPER" => Ok(Self::P),
            "S" | "SCISSORS" => Ok(Self::S),
            _ => Err(anyhow::anyhow!("unknown move {:?}", s)),
        }
    }
}

impl std::str::FromStr for Move {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}
