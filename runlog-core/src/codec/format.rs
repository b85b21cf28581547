use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// The container encoding of a run log.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Format {
    #[default]
    Cbor,
    MessagePack,
}

impl Format {
    /// Guesses the format from a file extension.
    ///
    /// `.cbor` and `.log` files are CBOR, `.msgpack` and `.mpk` files are
    /// MessagePack. Anything else yields `None`.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "cbor" | "log" => Some(Self::Cbor),
            "msgpack" | "mpk" => Some(Self::MessagePack),
            _ => None,
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            Self::Cbor => "cbor",
            Self::MessagePack => "msgpack",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cbor => f.write_str("CBOR"),
            Self::MessagePack => f.write_str("MessagePack"),
        }
    }
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "cbor" => Ok(Self::Cbor),
            "msgpack" | "messagepack" | "mpk" => Ok(Self::MessagePack),
            _ => Err(format!("invalid log format: {s}")),
        }
    }
}
