//! Result renderer
//!
//! Maps a successful response to a typed view-model. Frontends turn the
//! view-model into markup or terminal text; nothing here builds HTML.

use crate::options::Field;
use crate::types::{RecommendationItem, UserInput};

/// Upper bound of the bass/mid/treble/soundstage scales
pub const MAX_RATING: u8 = 5;

const STATIC_ROOT: &str = "/static/";
const IEM_PLACEHOLDER: &str = "https://via.placeholder.com/300x200/667eea/ffffff?text=";
const TUNING_PLACEHOLDER: &str = "https://via.placeholder.com/400x200/764ba2/ffffff?text=";

/// Where images come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Prefix for the relative image paths sent by the backend
    pub static_root: String,
    /// Placeholder URL prefix for item images; the item name is appended
    pub iem_placeholder: String,
    /// Placeholder URL prefix for tuning graphs; the tuning label is appended
    pub tuning_placeholder: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            static_root: STATIC_ROOT.to_string(),
            iem_placeholder: IEM_PLACEHOLDER.to_string(),
            tuning_placeholder: TUNING_PLACEHOLDER.to_string(),
        }
    }
}

impl RenderConfig {
    pub fn with_static_root(mut self, root: impl Into<String>) -> Self {
        self.static_root = root.into();
        self
    }

    /// Prefix a backend-relative path with the static root
    pub fn asset_url(&self, path: &str) -> String {
        let root = self.static_root.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{}/{}", root, path)
    }

    fn placeholder(prefix: &str, text: &str) -> String {
        format!("{}{}", prefix, urlencoding::encode(text))
    }
}

/// Image with the URL to swap in when loading fails
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageView {
    pub src: String,
    pub fallback: String,
    pub alt: String,
}

impl ImageView {
    fn new(path: Option<&str>, fallback: String, alt: &str, config: &RenderConfig) -> Self {
        let src = match path {
            Some(p) if !p.is_empty() => config.asset_url(p),
            _ => fallback.clone(),
        };
        Self { src, fallback, alt: alt.to_string() }
    }

    /// URL to use after `failed_src` failed to load. `None` once the fallback itself failed.
    pub fn next_src(&self, failed_src: &str) -> Option<&str> {
        if failed_src == self.fallback {
            None
        } else {
            Some(&self.fallback)
        }
    }
}

/// `filled` full symbols followed by `empty` hollow ones
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StarBar {
    pub filled: u8,
    pub empty: u8,
}

impl StarBar {
    /// Ratings above the scale are shown as full
    pub fn new(rating: u8) -> Self {
        let filled = rating.min(MAX_RATING);
        Self { filled, empty: MAX_RATING - filled }
    }

    pub fn render(&self, full: char, hollow: char) -> String {
        let mut s = String::with_capacity(MAX_RATING as usize * 4);
        s.extend(std::iter::repeat(full).take(self.filled as usize));
        s.extend(std::iter::repeat(hollow).take(self.empty as usize));
        s
    }
}

/// Sound aspects shown on every card, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Aspect {
    Bass,
    Mid,
    Treble,
}

impl Aspect {
    pub fn label(&self) -> &'static str {
        match self {
            Aspect::Bass => "Bass",
            Aspect::Mid => "Mid",
            Aspect::Treble => "Treble",
        }
    }

    /// CSS modifier used by the web app
    pub fn as_str(&self) -> &'static str {
        match self {
            Aspect::Bass => "bass",
            Aspect::Mid => "mid",
            Aspect::Treble => "treble",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RatingView {
    pub aspect: Aspect,
    pub value: u8,
    pub stars: StarBar,
}

impl RatingView {
    fn new(aspect: Aspect, value: u8) -> Self {
        Self { aspect, value, stars: StarBar::new(value) }
    }

    /// e.g. "3/5"
    pub fn score_text(&self) -> String {
        format!("{}/{}", self.value, MAX_RATING)
    }
}

/// Badge colour tier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchTier {
    High,
    Medium,
    Low,
}

impl MatchTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchTier::High => "high",
            MatchTier::Medium => "medium",
            MatchTier::Low => "low",
        }
    }
}

/// Display-only closeness percentage, `100 - distance * 10`.
///
/// Not clamped: a large distance gives a negative score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchScore(pub f64);

impl MatchScore {
    pub fn from_distance(distance: f64) -> Self {
        MatchScore(100.0 - distance * 10.0)
    }

    /// One decimal, no percent sign. Ties round away from zero.
    pub fn value_text(&self) -> String {
        let v = self.0;
        // Only x.x25 and x.x75 are exact binary ties at one decimal
        let exact_tie = (v * 4.0).fract() == 0.0 && (v * 2.0).fract() != 0.0;
        let v = if exact_tie { (v * 10.0).round() / 10.0 } else { v };
        format!("{:.1}", v)
    }

    /// e.g. "80.0%"
    pub fn display(&self) -> String {
        format!("{}%", self.value_text())
    }

    /// Tier of the rounded value, so the badge agrees with its text
    pub fn tier(&self) -> MatchTier {
        let shown: f64 = self.value_text().parse().unwrap_or(self.0);
        if shown >= 85.0 {
            MatchTier::High
        } else if shown >= 75.0 {
            MatchTier::Medium
        } else {
            MatchTier::Low
        }
    }
}

/// One recommendation card
#[derive(Debug, Clone, PartialEq)]
pub struct CardView {
    /// 1-based position in the response
    pub rank: usize,
    pub name: String,
    pub brand: String,
    pub price: String,
    pub tuning: String,
    pub genre: String,
    pub image: ImageView,
    pub tuning_image: ImageView,
    pub ratings: [RatingView; 3],
    pub driver_type: String,
    pub soundstage: String,
    pub match_score: MatchScore,
}

impl CardView {
    pub fn new(rank: usize, item: &RecommendationItem, config: &RenderConfig) -> Self {
        let image = ImageView::new(
            item.iem_image.as_deref(),
            RenderConfig::placeholder(&config.iem_placeholder, &item.name),
            &item.name,
            config,
        );
        let tuning_image = ImageView::new(
            item.tuning_image.as_deref(),
            RenderConfig::placeholder(&config.tuning_placeholder, &item.tuning),
            &item.tuning,
            config,
        );

        Self {
            rank,
            name: item.name.clone(),
            brand: item.brand.clone(),
            price: item.price_formatted.clone(),
            tuning: item.tuning.clone(),
            genre: item.genre.clone(),
            image,
            tuning_image,
            ratings: [
                RatingView::new(Aspect::Bass, item.bass),
                RatingView::new(Aspect::Mid, item.mid),
                RatingView::new(Aspect::Treble, item.treble),
            ],
            driver_type: item.driver_type.clone(),
            soundstage: format!("{}/{}", item.soundstage, MAX_RATING),
            match_score: MatchScore::from_distance(item.distance),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryEntry {
    pub label: &'static str,
    pub value: String,
}

/// Echo of the submitted preferences
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryView {
    pub entries: Vec<SummaryEntry>,
}

impl SummaryView {
    pub fn new(input: &UserInput) -> Self {
        let value_of = |field: Field| match field {
            Field::Budget => input.budget.clone(),
            Field::Genre => input.genre.clone(),
            Field::SoundCharacter => input.sound_character.clone(),
        };

        Self {
            entries: Field::ALL
                .iter()
                .map(|&f| SummaryEntry { label: f.label(), value: value_of(f) })
                .collect(),
        }
    }
}

/// Everything the results section shows
#[derive(Debug, Clone, PartialEq)]
pub struct ResultsView {
    pub summary: SummaryView,
    pub cards: Vec<CardView>,
}

/// Build the results view. Cards keep the response order.
pub fn render_results(
    recommendations: &[RecommendationItem],
    user_input: &UserInput,
    config: &RenderConfig,
) -> ResultsView {
    ResultsView {
        summary: SummaryView::new(user_input),
        cards: recommendations
            .iter()
            .enumerate()
            .map(|(i, item)| CardView::new(i + 1, item, config))
            .collect(),
    }
}
