//! Read-only query capability over the published cards table.
//!
//! Cards carry precomputed attribute scores; this module only filters, orders
//! and caps them the way the listing and ranking views ask for.

pub mod store;

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

pub use store::{CardSource, InMemoryCardStore};

pub const DEFAULT_LIMIT: usize = 50;
/// Filter value meaning "no filter".
pub const ALL: &str = "all";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardRow {
    pub id: String,
    pub card_id: String,
    pub player_name: String,
    #[serde(default)]
    pub season_text: Option<String>,
    #[serde(default)]
    pub season_end: Option<i32>,
    #[serde(default)]
    pub series: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub club: Option<String>,
    pub overall: f64,
    pub gol: f64,
    pub asist: f64,
    pub regate: f64,
    pub pase: f64,
    pub def: f64,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Attribute columns a ranking can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankKey {
    Overall,
    Gol,
    Asist,
    Regate,
    Pase,
    Def,
}

impl RankKey {
    pub fn label(self) -> &'static str {
        match self {
            RankKey::Overall => "Mejor calificado",
            RankKey::Gol => "Definición",
            RankKey::Asist => "Visión",
            RankKey::Regate => "Regate",
            RankKey::Pase => "Pase",
            RankKey::Def => "Defensa",
        }
    }

    pub fn column(self) -> &'static str {
        match self {
            RankKey::Overall => "overall",
            RankKey::Gol => "gol",
            RankKey::Asist => "asist",
            RankKey::Regate => "regate",
            RankKey::Pase => "pase",
            RankKey::Def => "def",
        }
    }

    pub fn value(self, card: &CardRow) -> f64 {
        match self {
            RankKey::Overall => card.overall,
            RankKey::Gol => card.gol,
            RankKey::Asist => card.asist,
            RankKey::Regate => card.regate,
            RankKey::Pase => card.pase,
            RankKey::Def => card.def,
        }
    }
}

impl fmt::Display for RankKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortColumn {
    Attribute(RankKey),
    SeasonEnd,
    PlayerName,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderBy {
    pub column: SortColumn,
    pub ascending: bool,
}

impl OrderBy {
    pub fn desc(column: SortColumn) -> Self {
        Self {
            column,
            ascending: false,
        }
    }

    pub fn asc(column: SortColumn) -> Self {
        Self {
            column,
            ascending: true,
        }
    }

    fn compare(&self, a: &CardRow, b: &CardRow) -> Ordering {
        match self.column {
            // Missing seasons go last in either direction.
            SortColumn::SeasonEnd => match (a.season_end, b.season_end) {
                (Some(x), Some(y)) => self.directed(x.cmp(&y)),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            },
            SortColumn::PlayerName => self.directed(
                a.player_name
                    .to_lowercase()
                    .cmp(&b.player_name.to_lowercase()),
            ),
            SortColumn::Attribute(key) => self.directed(key.value(a).total_cmp(&key.value(b))),
        }
    }

    fn directed(&self, ordering: Ordering) -> Ordering {
        if self.ascending {
            ordering
        } else {
            ordering.reverse()
        }
    }
}

/// Sort choices offered by the card listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortPreset {
    Recent,
    OverallDesc,
    GolDesc,
    AsistDesc,
    RegateDesc,
    PaseDesc,
    DefDesc,
    NameAsc,
}

impl SortPreset {
    /// Attribute shown alongside each row of a listing with this sort.
    pub fn rank_key(self) -> RankKey {
        match self {
            SortPreset::GolDesc => RankKey::Gol,
            SortPreset::AsistDesc => RankKey::Asist,
            SortPreset::RegateDesc => RankKey::Regate,
            SortPreset::PaseDesc => RankKey::Pase,
            SortPreset::DefDesc => RankKey::Def,
            SortPreset::Recent | SortPreset::OverallDesc | SortPreset::NameAsc => {
                RankKey::Overall
            }
        }
    }

    pub fn ordering(self) -> Vec<OrderBy> {
        let by = |key| vec![OrderBy::desc(SortColumn::Attribute(key))];
        match self {
            SortPreset::Recent => vec![
                OrderBy::desc(SortColumn::SeasonEnd),
                OrderBy::desc(SortColumn::Attribute(RankKey::Overall)),
            ],
            SortPreset::OverallDesc => by(RankKey::Overall),
            SortPreset::GolDesc => by(RankKey::Gol),
            SortPreset::AsistDesc => by(RankKey::Asist),
            SortPreset::RegateDesc => by(RankKey::Regate),
            SortPreset::PaseDesc => by(RankKey::Pase),
            SortPreset::DefDesc => by(RankKey::Def),
            SortPreset::NameAsc => vec![OrderBy::asc(SortColumn::PlayerName)],
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CardQuery {
    pub season: Option<String>,
    pub country: Option<String>,
    pub club: Option<String>,
    pub series: Option<String>,
    pub name: Option<String>,
    pub order: Vec<OrderBy>,
    pub limit: usize,
}

impl Default for CardQuery {
    fn default() -> Self {
        Self {
            season: None,
            country: None,
            club: None,
            series: None,
            name: None,
            order: Vec::new(),
            limit: DEFAULT_LIMIT,
        }
    }
}

fn filter_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(ALL) {
        None
    } else {
        Some(trimmed.to_string())
    }
}

impl CardQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Top `limit` cards by one attribute, descending.
    pub fn ranking(key: RankKey, limit: usize) -> Self {
        Self::new()
            .order_by(OrderBy::desc(SortColumn::Attribute(key)))
            .limit(limit)
    }

    pub fn season(mut self, season: &str) -> Self {
        self.season = filter_value(season);
        self
    }

    pub fn country(mut self, country: &str) -> Self {
        self.country = filter_value(country);
        self
    }

    pub fn club(mut self, club: &str) -> Self {
        self.club = filter_value(club);
        self
    }

    pub fn series(mut self, series: &str) -> Self {
        self.series = filter_value(series);
        self
    }

    pub fn name_contains(mut self, text: &str) -> Self {
        let trimmed = text.trim();
        self.name = (!trimmed.is_empty()).then(|| trimmed.to_lowercase());
        self
    }

    pub fn order_by(mut self, order: OrderBy) -> Self {
        self.order.push(order);
        self
    }

    pub fn preset(mut self, preset: SortPreset) -> Self {
        self.order.extend(preset.ordering());
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn matches(&self, card: &CardRow) -> bool {
        fn exact(filter: &Option<String>, value: &Option<String>) -> bool {
            match filter {
                Some(wanted) => value.as_deref().map(str::trim) == Some(wanted.as_str()),
                None => true,
            }
        }

        exact(&self.season, &card.season_text)
            && exact(&self.country, &card.country)
            && exact(&self.club, &card.club)
            && exact(&self.series, &card.series)
            && self
                .name
                .as_ref()
                .map_or(true, |needle| {
                    card.player_name.to_lowercase().contains(needle.as_str())
                })
    }

    pub fn compare(&self, a: &CardRow, b: &CardRow) -> Ordering {
        self.order
            .iter()
            .map(|order| order.compare(a, b))
            .find(|ordering| ordering.is_ne())
            .unwrap_or(Ordering::Equal)
    }
}
