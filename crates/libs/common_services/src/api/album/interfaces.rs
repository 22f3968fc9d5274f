use std::fmt;
use std::fmt::Display;

/// Which albums the album overview shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlbumScope {
    #[default]
    All,
    Owned,
    Shared,
}

impl AlbumScope {
    /// Cycles all → owned → shared → all.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::All => Self::Owned,
            Self::Owned => Self::Shared,
            Self::Shared => Self::All,
        }
    }
}

impl Display for AlbumScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::All => "all",
            Self::Owned => "owned",
            Self::Shared => "shared",
        };
        f.write_str(s)
    }
}
