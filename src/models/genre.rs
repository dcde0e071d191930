use serde::{Deserialize, Serialize};
use std::fmt;

/// Catalog genres, named exactly as the catalog spells them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "&'static str", try_from = "String")]
pub enum Genre {
    Action,
    Adventure,
    AwardWinning,
    Drama,
    Fantasy,
    Horror,
    Supernatural,
    Mystery,
    SliceOfLife,
    Comedy,
    SciFi,
    Suspense,
    Sports,
    Ecchi,
    Romance,
    GirlsLove,
    BoysLove,
    Gourmet,
    Erotica,
    Hentai,
    AvantGarde,
}

impl Genre {
    pub const ALL: [Genre; 21] = [
        Genre::Action,
        Genre::Adventure,
        Genre::AwardWinning,
        Genre::Drama,
        Genre::Fantasy,
        Genre::Horror,
        Genre::Supernatural,
        Genre::Mystery,
        Genre::SliceOfLife,
        Genre::Comedy,
        Genre::SciFi,
        Genre::Suspense,
        Genre::Sports,
        Genre::Ecchi,
        Genre::Romance,
        Genre::GirlsLove,
        Genre::BoysLove,
        Genre::Gourmet,
        Genre::Erotica,
        Genre::Hentai,
        Genre::AvantGarde,
    ];

    /// Name used by the catalog API.
    pub fn name(self) -> &'static str {
        match self {
            Genre::Action => "Action",
            Genre::Adventure => "Adventure",
            Genre::AwardWinning => "Award Winning",
            Genre::Drama => "Drama",
            Genre::Fantasy => "Fantasy",
            Genre::Horror => "Horror",
            Genre::Supernatural => "Supernatural",
            Genre::Mystery => "Mystery",
            Genre::SliceOfLife => "Slice of Life",
            Genre::Comedy => "Comedy",
            Genre::SciFi => "Sci-Fi",
            Genre::Suspense => "Suspense",
            Genre::Sports => "Sports",
            Genre::Ecchi => "Ecchi",
            Genre::Romance => "Romance",
            Genre::GirlsLove => "Girls Love",
            Genre::BoysLove => "Boys Love",
            Genre::Gourmet => "Gourmet",
            Genre::Erotica => "Erotica",
            Genre::Hentai => "Hentai",
            Genre::AvantGarde => "Avant Garde",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|value| value.name() == name)
    }
}

impl From<Genre> for &'static str {
    fn from(value: Genre) -> Self {
        value.name()
    }
}

impl TryFrom<String> for Genre {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_name(&value).ok_or_else(|| format!("Unknown genre: {}", value))
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Catalog themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "&'static str", try_from = "String")]
pub enum Theme {
    Gore,
    Military,
    Mythology,
    Psychological,
    Historical,
    Samurai,
    RomanticSubtext,
    School,
    AdultCast,
    Parody,
    SuperPower,
    TeamSports,
    Delinquents,
    Workplace,
    Survival,
    Childcare,
    Iyashikei,
    Reincarnation,
    Showbiz,
    Anthropomorphic,
    LovePolygon,
    Music,
    Mecha,
    CombatSports,
    Isekai,
    GagHumor,
    Crossdressing,
    ReverseHarem,
    MartialArts,
    VisualArts,
    Harem,
    OtakuCulture,
    TimeTravel,
    VideoGame,
    StrategyGame,
    Vampire,
    MahouShoujo,
    HighStakesGame,
    Cgdct,
    OrganizedCrime,
    Detective,
    PerformingArts,
    Medical,
    Space,
    Memoir,
    Villainess,
    Racing,
    Pets,
    MagicalSexShift,
    Educational,
    IdolsFemale,
    IdolsMale,
}

impl Theme {
    pub const ALL: [Theme; 52] = [
        Theme::Gore,
        Theme::Military,
        Theme::Mythology,
        Theme::Psychological,
        Theme::Historical,
        Theme::Samurai,
        Theme::RomanticSubtext,
        Theme::School,
        Theme::AdultCast,
        Theme::Parody,
        Theme::SuperPower,
        Theme::TeamSports,
        Theme::Delinquents,
        Theme::Workplace,
        Theme::Survival,
        Theme::Childcare,
        Theme::Iyashikei,
        Theme::Reincarnation,
        Theme::Showbiz,
        Theme::Anthropomorphic,
        Theme::LovePolygon,
        Theme::Music,
        Theme::Mecha,
        Theme::CombatSports,
        Theme::Isekai,
        Theme::GagHumor,
        Theme::Crossdressing,
        Theme::ReverseHarem,
        Theme::MartialArts,
        Theme::VisualArts,
        Theme::Harem,
        Theme::OtakuCulture,
        Theme::TimeTravel,
        Theme::VideoGame,
        Theme::StrategyGame,
        Theme::Vampire,
        Theme::MahouShoujo,
        Theme::HighStakesGame,
        Theme::Cgdct,
        Theme::OrganizedCrime,
        Theme::Detective,
        Theme::PerformingArts,
        Theme::Medical,
        Theme::Space,
        Theme::Memoir,
        Theme::Villainess,
        Theme::Racing,
        Theme::Pets,
        Theme::MagicalSexShift,
        Theme::Educational,
        Theme::IdolsFemale,
        Theme::IdolsMale,
    ];

    /// Name used by the catalog API.
    pub fn name(self) -> &'static str {
        match self {
            Theme::Gore => "Gore",
            Theme::Military => "Military",
            Theme::Mythology => "Mythology",
            Theme::Psychological => "Psychological",
            Theme::Historical => "Historical",
            Theme::Samurai => "Samurai",
            Theme::RomanticSubtext => "Romantic Subtext",
            Theme::School => "School",
            Theme::AdultCast => "Adult Cast",
            Theme::Parody => "Parody",
            Theme::SuperPower => "Super Power",
            Theme::TeamSports => "Team Sports",
            Theme::Delinquents => "Delinquents",
            Theme::Workplace => "Workplace",
            Theme::Survival => "Survival",
            Theme::Childcare => "Childcare",
            Theme::Iyashikei => "Iyashikei",
            Theme::Reincarnation => "Reincarnation",
            Theme::Showbiz => "Showbiz",
            Theme::Anthropomorphic => "Anthropomorphic",
            Theme::LovePolygon => "Love Polygon",
            Theme::Music => "Music",
            Theme::Mecha => "Mecha",
            Theme::CombatSports => "Combat Sports",
            Theme::Isekai => "Isekai",
            Theme::GagHumor => "Gag Humor",
            Theme::Crossdressing => "Crossdressing",
            Theme::ReverseHarem => "Reverse Harem",
            Theme::MartialArts => "Martial Arts",
            Theme::VisualArts => "Visual Arts",
            Theme::Harem => "Harem",
            Theme::OtakuCulture => "Otaku Culture",
            Theme::TimeTravel => "Time Travel",
            Theme::VideoGame => "Video Game",
            Theme::StrategyGame => "Strategy Game",
            Theme::Vampire => "Vampire",
            Theme::MahouShoujo => "Mahou Shoujo",
            Theme::HighStakesGame => "High Stakes Game",
            Theme::Cgdct => "CGDCT",
            Theme::OrganizedCrime => "Organized Crime",
            Theme::Detective => "Detective",
            Theme::PerformingArts => "Performing Arts",
            Theme::Medical => "Medical",
            Theme::Space => "Space",
            Theme::Memoir => "Memoir",
            Theme::Villainess => "Villainess",
            Theme::Racing => "Racing",
            Theme::Pets => "Pets",
            Theme::MagicalSexShift => "Magical Sex Shift",
            Theme::Educational => "Educational",
            Theme::IdolsFemale => "Idols (Female)",
            Theme::IdolsMale => "Idols (Male)",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|value| value.name() == name)
    }
}

impl From<Theme> for &'static str {
    fn from(value: Theme) -> Self {
        value.name()
    }
}

impl TryFrom<String> for Theme {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_name(&value).ok_or_else(|| format!("Unknown theme: {}", value))
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Target readership of a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "&'static str", try_from = "String")]
pub enum Demographic {
    Shounen,
    Shoujo,
    Seinen,
    Josei,
    Kids,
}

impl Demographic {
    pub const ALL: [Demographic; 5] = [
        Demographic::Shounen,
        Demographic::Shoujo,
        Demographic::Seinen,
        Demographic::Josei,
        Demographic::Kids,
    ];

    /// Name used by the catalog API.
    pub fn name(self) -> &'static str {
        match self {
            Demographic::Shounen => "Shounen",
            Demographic::Shoujo => "Shoujo",
            Demographic::Seinen => "Seinen",
            Demographic::Josei => "Josei",
            Demographic::Kids => "Kids",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|value| value.name() == name)
    }
}

impl From<Demographic> for &'static str {
    fn from(value: Demographic) -> Self {
        value.name()
    }
}

impl TryFrom<String> for Demographic {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_name(&value).ok_or_else(|| format!("Unknown demographic: {}", value))
    }
}

impl fmt::Display for Demographic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Demographic selector used by the search screen. `All` means no demographic filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DemographicFilter {
    #[default]
    All,
    Only(Demographic),
}

impl DemographicFilter {
    pub fn demographic(self) -> Option<Demographic> {
        match self {
            DemographicFilter::All => None,
            DemographicFilter::Only(demographic) => Some(demographic),
        }
    }

    pub fn matches(self, demographics: &[Demographic]) -> bool {
        match self {
            DemographicFilter::All => true,
            DemographicFilter::Only(demographic) => demographics.contains(&demographic),
        }
    }
}

impl From<Option<Demographic>> for DemographicFilter {
    fn from(value: Option<Demographic>) -> Self {
        value.map_or(DemographicFilter::All, DemographicFilter::Only)
    }
}
