use serde::{Deserialize, Serialize};

/// Qualification progression state of a team, ordinal-encoded on the wire.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Qualification {
    #[default]
    None = 0,
    Regionals = 1,
    Worlds = 2,
}

impl Qualification {
    pub fn label(&self) -> &'static str {
        match self {
            Qualification::None => "none",
            Qualification::Regionals => "regionals",
            Qualification::Worlds => "worlds",
        }
    }

    /// Unknown labels map to `None`, matching the front end's select control.
    pub fn from_label(s: &str) -> Self {
        match s {
            "regionals" => Qualification::Regionals,
            "worlds" => Qualification::Worlds,
            _ => Qualification::None,
        }
    }

    pub fn ordinal(&self) -> u8 {
        *self as u8
    }

    pub fn all() -> &'static [Qualification] {
        &[
            Qualification::None,
            Qualification::Regionals,
            Qualification::Worlds,
        ]
    }
}

impl From<Qualification> for u8 {
    fn from(q: Qualification) -> u8 {
        q as u8
    }
}

impl TryFrom<u8> for Qualification {
    type Error = String;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        match v {
            0 => Ok(Qualification::None),
            1 => Ok(Qualification::Regionals),
            2 => Ok(Qualification::Worlds),
            other => Err(format!("invalid qualification ordinal: {}", other)),
        }
    }
}
