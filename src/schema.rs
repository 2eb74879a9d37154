//! Declarative layout of each receipt kind
//!
//! One generic renderer walks these tables instead of each kind carrying its
//! own renderer. A schema lists sections; each section lists fields and how
//! to show them. Label strings are keys into the label table, never text.

use crate::record::ReceiptKind;

/// How a field is drawn
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum View {
    /// `LABEL: value`, skipped when blank
    Row,
    /// `LABEL: value` with a unit suffix
    NumberRow { unit: &'static str },
    /// `LABEL: ¥value`, skipped when no price
    PriceRow { currency: &'static str },
    /// `LABEL: option text`, option text looked up under `options.VALUE`
    ChoiceRow { options: &'static str },
    /// Large centered text between dashed rules
    Highlight,
    /// Large centered option text between dashed rules
    HighlightChoice { options: &'static str },
    /// One bar per metric; labels looked up under `labels.KEY`
    Bars { max: f64, labels: &'static str },
    /// A single number drawn as a bar
    Bar { max: f64 },
    /// `*` per point, `-` for the rest
    Stars { max: u32 },
    /// Headed free text, skipped when blank
    Paragraph,
    /// Headed free text in quotes, skipped when blank
    Quote,
    /// Named line items with optional prices and a total line
    Items { currency: &'static str },
    /// Active toggles as chips; labels under `labels.KEY` when given
    Chips { labels: Option<&'static str> },
    /// Numbered entries, blank entries skipped
    List,
    /// Sleep duration computed from two clock fields
    SleepDuration { bedtime: &'static str, wake: &'static str },
    /// Boxed composite sleep score and tier, from a metrics field
    SleepScore,
    /// Caffeine tier line computed from a daily total
    CaffeineStatus,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSpec {
    /// Record field read by the view (unused by derived-only views)
    pub key: &'static str,
    /// Label key
    pub label: &'static str,
    pub view: View,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Section {
    /// Heading label key, drawn as `-- HEADING --`
    pub heading: Option<&'static str>,
    pub fields: &'static [FieldSpec],
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KindSchema {
    pub kind: ReceiptKind,
    pub sections: &'static [Section],
}

impl KindSchema {
    pub fn title_key(&self) -> String {
        format!("{}.title", self.kind.slug())
    }

    pub fn subtitle_key(&self) -> String {
        format!("{}.subtitle", self.kind.slug())
    }

    pub fn tagline_key(&self) -> String {
        format!("{}.tagline", self.kind.slug())
    }

    pub fn fields(&self) -> impl Iterator<Item = &'static FieldSpec> {
        self.sections.iter().flat_map(|s| s.fields.iter())
    }
}

const fn f(key: &'static str, label: &'static str, view: View) -> FieldSpec {
    FieldSpec { key, label, view }
}

const fn derived(label: &'static str, view: View) -> FieldSpec {
    FieldSpec { key: "", label, view }
}

const YEN: &str = "¥";

const LIFE: &[Section] = &[
    Section {
        heading: None,
        fields: &[
            f("date", "field.date", View::Row),
            f("location", "field.location", View::Row),
            f("weather", "field.weather", View::ChoiceRow { options: "opt.weather" }),
            f("ootd", "life.ootd", View::Highlight),
        ],
    },
    Section {
        heading: Some("life.stats"),
        fields: &[f("stats", "", View::Bars { max: 100.0, labels: "life.stat" })],
    },
    Section {
        heading: Some("life.tasks"),
        fields: &[f("tasks", "", View::Chips { labels: None })],
    },
    Section {
        heading: None,
        fields: &[
            f("note", "life.note", View::Quote),
            f("thoughts", "life.thoughts", View::Paragraph),
        ],
    },
];

const FOOD: &[Section] = &[
    Section {
        heading: None,
        fields: &[
            f("date", "field.date", View::Row),
            f("restaurant", "food.restaurant", View::Row),
            f("companion", "food.companion", View::Row),
        ],
    },
    Section {
        heading: None,
        fields: &[f("orders", "", View::Items { currency: YEN })],
    },
    Section {
        heading: Some("food.flavors"),
        fields: &[
            f("flavors", "", View::Bars { max: 100.0, labels: "food.flavor" }),
            f("satiety", "food.satiety", View::Bar { max: 100.0 }),
            f("rating", "field.rating", View::Stars { max: 5 }),
        ],
    },
    Section {
        heading: None,
        fields: &[f("notes", "field.notes", View::Paragraph)],
    },
];

const MOVIE: &[Section] = &[
    Section {
        heading: None,
        fields: &[f("title", "", View::Highlight)],
    },
    Section {
        heading: None,
        fields: &[
            f("director", "movie.director", View::Row),
            f("genre", "field.genre", View::ChoiceRow { options: "movie.genre" }),
            f("year", "movie.year", View::Row),
            f("duration", "field.duration", View::Row),
            f("cinema", "movie.cinema", View::Row),
            f("seat", "field.seat", View::Row),
            f("date", "field.date", View::Row),
        ],
    },
    Section {
        heading: Some("movie.experience"),
        fields: &[
            f("experience", "", View::Bars { max: 5.0, labels: "movie.exp" }),
            f("emotion", "movie.emotion", View::Stars { max: 5 }),
            f("immersion", "movie.immersion", View::Stars { max: 5 }),
        ],
    },
    Section {
        heading: None,
        fields: &[
            f("favoriteScene", "movie.scene", View::Quote),
            f("personalThoughts", "field.thoughts", View::Paragraph),
        ],
    },
];

const GAME: &[Section] = &[
    Section {
        heading: None,
        fields: &[f("title", "", View::Highlight)],
    },
    Section {
        heading: None,
        fields: &[
            f("developer", "game.developer", View::Row),
            f("platform", "game.platform", View::Row),
            f("genre", "field.genre", View::ChoiceRow { options: "game.genre" }),
            f("playtime", "game.playtime", View::Row),
            f("date", "field.date", View::Row),
        ],
    },
    Section {
        heading: Some("game.review"),
        fields: &[
            f("gameplay", "", View::Bars { max: 100.0, labels: "game.aspect" }),
            f("challenge", "game.challenge", View::Bar { max: 100.0 }),
            f("addiction", "game.addiction", View::Bar { max: 100.0 }),
            f("completion", "game.completion", View::Bar { max: 100.0 }),
        ],
    },
    Section {
        heading: None,
        fields: &[
            f("achievement", "game.achievement", View::Quote),
            f("memorableMoment", "game.moment", View::Paragraph),
            f("thoughts", "field.thoughts", View::Paragraph),
        ],
    },
];

const MUSIC: &[Section] = &[
    Section {
        heading: None,
        fields: &[f("artist", "", View::Highlight)],
    },
    Section {
        heading: None,
        fields: &[
            f("tour", "music.tour", View::Row),
            f("venue", "music.venue", View::ChoiceRow { options: "music.venue" }),
            f("venueName", "field.location", View::Row),
            f("genre", "field.genre", View::ChoiceRow { options: "music.genre" }),
            f("date", "field.date", View::Row),
            f("duration", "field.duration", View::Row),
            f("seat", "field.seat", View::Row),
        ],
    },
    Section {
        heading: Some("music.setlist"),
        fields: &[f("setlist", "", View::List)],
    },
    Section {
        heading: Some("music.experience"),
        fields: &[f("experience", "", View::Bars { max: 100.0, labels: "music.exp" })],
    },
    Section {
        heading: None,
        fields: &[
            f("favoriteSong", "music.favorite", View::Quote),
            f("surpriseMoment", "music.surprise", View::Paragraph),
            f("thoughts", "field.thoughts", View::Paragraph),
        ],
    },
];

const IDOL: &[Section] = &[
    Section {
        heading: None,
        fields: &[f("name", "", View::Highlight)],
    },
    Section {
        heading: None,
        fields: &[
            f("activity", "idol.activity", View::ChoiceRow { options: "idol.activity" }),
            f("identity", "idol.identity", View::ChoiceRow { options: "idol.identity" }),
            f("date", "field.date", View::Row),
        ],
    },
    Section {
        heading: None,
        fields: &[f("items", "", View::Items { currency: YEN })],
    },
    Section {
        heading: Some("idol.stats"),
        fields: &[
            f("stats", "", View::Bars { max: 100.0, labels: "idol.stat" }),
            f("scream", "idol.scream", View::Stars { max: 5 }),
        ],
    },
    Section {
        heading: None,
        fields: &[
            f("highlight", "idol.highlight", View::Quote),
            f("promise", "idol.promise", View::Paragraph),
        ],
    },
];

const READING: &[Section] = &[
    Section {
        heading: None,
        fields: &[f("title", "", View::Highlight)],
    },
    Section {
        heading: None,
        fields: &[
            f("author", "reading.author", View::Row),
            f("format", "reading.format", View::ChoiceRow { options: "reading.format" }),
            f("genre", "field.genre", View::ChoiceRow { options: "reading.genre" }),
            f("pages", "reading.pages", View::Row),
            f("date", "field.date", View::Row),
        ],
    },
    Section {
        heading: Some("reading.metrics"),
        fields: &[
            f("metrics", "", View::Bars { max: 100.0, labels: "reading.metric" }),
            f("rating", "field.rating", View::Stars { max: 5 }),
        ],
    },
    Section {
        heading: None,
        fields: &[
            f("quote", "reading.quote", View::Quote),
            f("review", "reading.review", View::Paragraph),
        ],
    },
];

const TRAVEL: &[Section] = &[
    Section {
        heading: None,
        fields: &[
            f("origin", "travel.origin", View::Row),
            f("dest", "travel.dest", View::Highlight),
        ],
    },
    Section {
        heading: None,
        fields: &[
            f("date", "field.date", View::Row),
            f("time", "field.time", View::Row),
            f("transport", "travel.transport", View::ChoiceRow { options: "travel.transport" }),
            f("classType", "travel.class", View::ChoiceRow { options: "travel.class" }),
            f("seat", "field.seat", View::Row),
            f("weather", "field.weather", View::ChoiceRow { options: "opt.weather" }),
        ],
    },
    Section {
        heading: Some("travel.stats"),
        fields: &[f("metrics", "", View::Bars { max: 100.0, labels: "travel.metric" })],
    },
    Section {
        heading: None,
        fields: &[f("memo", "travel.memo", View::Paragraph)],
    },
];

const FITNESS: &[Section] = &[
    Section {
        heading: None,
        fields: &[
            f("type", "fitness.type", View::HighlightChoice { options: "fitness.type" }),
            f("date", "field.date", View::Row),
            f("time", "field.time", View::Row),
            f("location", "field.location", View::Row),
            f("duration", "field.duration", View::NumberRow { unit: "min" }),
            f("caloriesBurned", "fitness.calories", View::NumberRow { unit: "kcal" }),
        ],
    },
    Section {
        heading: Some("fitness.exercises"),
        fields: &[f("exercises", "", View::List)],
    },
    Section {
        heading: Some("fitness.metrics"),
        fields: &[
            f("metrics", "", View::Bars { max: 100.0, labels: "fitness.metric" }),
            f("intensity", "fitness.intensity", View::Bar { max: 100.0 }),
        ],
    },
    Section {
        heading: None,
        fields: &[f("notes", "field.notes", View::Paragraph)],
    },
];

const SOCIAL: &[Section] = &[
    Section {
        heading: None,
        fields: &[
            f("event", "social.event", View::Highlight),
            f("date", "field.date", View::Row),
            f("location", "field.location", View::Row),
            f("people", "social.people", View::Row),
            f("vibe", "social.vibe", View::ChoiceRow { options: "social.vibe" }),
        ],
    },
    Section {
        heading: Some("social.metrics"),
        fields: &[f("metrics", "", View::Bars { max: 100.0, labels: "social.metric" })],
    },
    Section {
        heading: None,
        fields: &[
            f("highlight", "social.highlight", View::Quote),
            f("notes", "field.notes", View::Paragraph),
        ],
    },
];

const SLEEP: &[Section] = &[
    Section {
        heading: None,
        fields: &[
            f("date", "field.date", View::Row),
            f("bedtime", "sleep.bedtime", View::Row),
            f("wakeTime", "sleep.wake", View::Row),
            derived(
                "field.duration",
                View::SleepDuration {
                    bedtime: "bedtime",
                    wake: "wakeTime",
                },
            ),
            f("morningMood", "sleep.mood", View::HighlightChoice { options: "sleep.mood" }),
        ],
    },
    Section {
        heading: Some("sleep.presleep"),
        fields: &[f(
            "preSleepActivities",
            "",
            View::Chips {
                labels: Some("sleep.activity"),
            },
        )],
    },
    Section {
        heading: Some("sleep.metrics"),
        fields: &[f("metrics", "", View::Bars { max: 100.0, labels: "sleep.metric" })],
    },
    Section {
        heading: None,
        fields: &[
            f("dreamContent", "sleep.dream", View::Quote),
            f("notes", "field.notes", View::Paragraph),
            f("metrics", "sleep.score", View::SleepScore),
        ],
    },
];

const COFFEE: &[Section] = &[
    Section {
        heading: None,
        fields: &[
            f("date", "field.date", View::Row),
            f("time", "field.time", View::Row),
            f("shop", "coffee.shop", View::Row),
            f("drink", "coffee.drink", View::Highlight),
            f("size", "coffee.size", View::ChoiceRow { options: "coffee.size" }),
            f("method", "coffee.method", View::ChoiceRow { options: "coffee.method" }),
            f("bean", "coffee.bean", View::Row),
            f("price", "coffee.price", View::PriceRow { currency: YEN }),
        ],
    },
    Section {
        heading: Some("coffee.caffeine"),
        fields: &[
            f("caffeine", "coffee.this_cup", View::NumberRow { unit: "mg" }),
            f("todayTotal", "coffee.today", View::NumberRow { unit: "mg" }),
            f("todayTotal", "coffee.status", View::CaffeineStatus),
        ],
    },
    Section {
        heading: Some("coffee.flavor"),
        fields: &[f("metrics", "", View::Bars { max: 10.0, labels: "coffee.metric" })],
    },
    Section {
        heading: None,
        fields: &[f("notes", "field.notes", View::Paragraph)],
    },
];

const SHOPPING: &[Section] = &[
    Section {
        heading: None,
        fields: &[
            f("date", "field.date", View::Row),
            f("location", "field.location", View::Row),
            f("channel", "shopping.channel", View::ChoiceRow { options: "shopping.channel" }),
            f("category", "shopping.category", View::ChoiceRow { options: "shopping.category" }),
        ],
    },
    Section {
        heading: None,
        fields: &[f("items", "", View::Items { currency: YEN })],
    },
    Section {
        heading: Some("shopping.metrics"),
        fields: &[f("metrics", "", View::Bars { max: 10.0, labels: "shopping.metric" })],
    },
    Section {
        heading: None,
        fields: &[
            f("verdict", "shopping.verdict", View::HighlightChoice { options: "shopping.verdict" }),
            f("notes", "field.notes", View::Paragraph),
        ],
    },
];

/// Layout schema of `kind`.
pub fn schema_for(kind: ReceiptKind) -> KindSchema {
    let sections = match kind {
        ReceiptKind::Life => LIFE,
        ReceiptKind::Food => FOOD,
        ReceiptKind::Movie => MOVIE,
        ReceiptKind::Game => GAME,
        ReceiptKind::Music => MUSIC,
        ReceiptKind::Idol => IDOL,
        ReceiptKind::Reading => READING,
        ReceiptKind::Travel => TRAVEL,
        ReceiptKind::Fitness => FITNESS,
        ReceiptKind::Social => SOCIAL,
        ReceiptKind::Sleep => SLEEP,
        ReceiptKind::Coffee => COFFEE,
        ReceiptKind::Shopping => SHOPPING,
    };
    KindSchema { kind, sections }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{FieldValue, ReceiptRecord};

    fn view_accepts(view: &View, value: &FieldValue) -> bool {
        matches!(
            (view, value),
            (View::Row, FieldValue::Text(_))
                | (View::Highlight, FieldValue::Text(_))
                | (View::Paragraph, FieldValue::Text(_))
                | (View::Quote, FieldValue::Text(_))
                | (View::ChoiceRow { .. }, FieldValue::Choice(_))
                | (View::HighlightChoice { .. }, FieldValue::Choice(_))
                | (View::NumberRow { .. }, FieldValue::Number(_))
                | (View::Bar { .. }, FieldValue::Number(_))
                | (View::Stars { .. }, FieldValue::Number(_))
                | (View::CaffeineStatus, FieldValue::Number(_))
                | (View::SleepScore, FieldValue::Metrics(_))
                | (View::PriceRow { .. }, FieldValue::Price(_))
                | (View::Bars { .. }, FieldValue::Metrics(_))
                | (View::Items { .. }, FieldValue::Items(_))
                | (View::Chips { .. }, FieldValue::Toggles(_))
                | (View::List, FieldValue::List(_))
        )
    }

    #[test]
    fn every_schema_field_exists_in_seed_with_matching_type() {
        for kind in ReceiptKind::ALL {
            let record = ReceiptRecord::seeded(kind, "2025/01/01");
            for spec in schema_for(kind).fields() {
                if spec.key.is_empty() {
                    continue;
                }
                let value = record
                    .get(spec.key)
                    .unwrap_or_else(|| panic!("{}: seed lacks '{}'", kind, spec.key));
                assert!(
                    view_accepts(&spec.view, value),
                    "{}: '{}' is {} but view is {:?}",
                    kind,
                    spec.key,
                    value.type_name(),
                    spec.view
                );
            }
        }
    }

    #[test]
    fn derived_views_reference_seeded_fields() {
        let record = ReceiptRecord::seeded(ReceiptKind::Sleep, "2025/01/01");
        for spec in schema_for(ReceiptKind::Sleep).fields() {
            if let View::SleepDuration { bedtime, wake } = spec.view {
                assert!(record.get(bedtime).is_some());
                assert!(record.get(wake).is_some());
            }
        }
    }
}
