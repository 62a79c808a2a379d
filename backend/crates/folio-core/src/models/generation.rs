use crate::{DescriptionPair, DescriptionSource};

/// A description pair tagged with where it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generation {
    pub pair: DescriptionPair,
    pub source: DescriptionSource,
}

impl Generation {
    pub fn generated(pair: DescriptionPair) -> Self {
        Self {
            pair,
            source: DescriptionSource::Generated,
        }
    }

    pub fn canned(pair: DescriptionPair) -> Self {
        Self {
            pair,
            source: DescriptionSource::Canned,
        }
    }

    pub fn templated(pair: DescriptionPair) -> Self {
        Self {
            pair,
            source: DescriptionSource::Templated,
        }
    }

    /// Drop the provenance tag, keeping the wire payload
    pub fn into_pair(self) -> DescriptionPair {
        self.pair
    }
}
