use serde::Deserialize;

pub type RecordId = u32;

/// One record as delivered by the remote data source.
///
/// Only the fields the catalog displays are modelled; anything else in the
/// payload is ignored during deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawRecord {
    pub id: RecordId,
    pub name: String,
    pub sprites: RawSprites,
    pub types: Vec<RawTypeSlot>,
    pub stats: Vec<RawStat>,
    pub abilities: Vec<RawAbilitySlot>,
    pub height: u32,
    pub weight: u32,
    #[serde(default)]
    pub base_experience: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct RawSprites {
    #[serde(default)]
    pub front_default: Option<String>,
    #[serde(default)]
    pub other: Option<RawOtherSprites>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct RawOtherSprites {
    #[serde(rename = "official-artwork", default)]
    pub official_artwork: Option<RawArtwork>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct RawArtwork {
    #[serde(default)]
    pub front_default: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawTypeSlot {
    #[serde(rename = "type")]
    pub kind: NamedRef,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawStat {
    pub base_stat: u32,
    pub stat: NamedRef,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawAbilitySlot {
    pub ability: NamedRef,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NamedRef {
    pub name: String,
}

/// Normalized, immutable view model of one catalog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRecord {
    pub id: RecordId,
    pub name: String,
    /// Primary artwork, then the default sprite. `None` when neither exists.
    pub image: Option<String>,
    pub categories: Vec<String>,
    pub measurements: Measurements,
    pub statistics: Vec<Statistic>,
    pub traits: Vec<String>,
    pub experience: Experience,
}

impl DisplayRecord {
    pub fn statistic(&self, name: &str) -> Option<u32> {
        self.statistics
            .iter()
            .find(|stat| stat.name == name)
            .map(|stat| stat.value)
    }

    pub fn primary_category(&self) -> Option<&str> {
        self.categories.first().map(String::as_str)
    }
}

/// Height and weight as scaled integers (decimetres and hectograms).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Measurements {
    pub height: u32,
    pub weight: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statistic {
    pub name: String,
    pub value: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Experience {
    Known(u32),
    Unknown,
}
