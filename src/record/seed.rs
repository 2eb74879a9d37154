//! Sample records a receipt page opens with

use std::collections::BTreeMap;

use super::{FieldValue, LineItem, ReceiptKind, ReceiptRecord};

fn text(s: &str) -> FieldValue {
    FieldValue::Text(s.to_string())
}

fn choice(s: &str) -> FieldValue {
    FieldValue::Choice(s.to_string())
}

fn num(n: f64) -> FieldValue {
    FieldValue::Number(n)
}

fn metrics(pairs: &[(&str, f64)]) -> FieldValue {
    FieldValue::Metrics(pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect())
}

fn toggles(pairs: &[(&str, bool)]) -> FieldValue {
    FieldValue::Toggles(pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect::<BTreeMap<_, _>>())
}

fn items(pairs: &[(&str, Option<f64>)]) -> FieldValue {
    FieldValue::Items(
        pairs
            .iter()
            .map(|(name, price)| LineItem {
                name: name.to_string(),
                price: *price,
            })
            .collect(),
    )
}

fn list(entries: &[&str]) -> FieldValue {
    FieldValue::List(entries.iter().map(|s| s.to_string()).collect())
}

pub(super) fn seed(kind: ReceiptKind, date: &str) -> ReceiptRecord {
    let r = ReceiptRecord::new(kind).with("date", text(date));
    match kind {
        ReceiptKind::Life => r
            .with("location", text("Home office"))
            .with("weather", choice("CLOUDY"))
            .with("ootd", text("Vintage sweater, sleepy eyes"))
            .with(
                "stats",
                metrics(&[("mood", 70.0), ("energy", 55.0), ("focus", 80.0), ("stress", 35.0)]),
            )
            .with(
                "tasks",
                toggles(&[("Water plants", true), ("Reply to emails", false), ("Evening run", false)]),
            )
            .with("note", text("Even tired, you still shine."))
            .with("thoughts", text("Idea: a receipt for every small win.")),
        ReceiptKind::Food => r
            .with("restaurant", text("Noodle place downstairs"))
            .with("companion", text("Solo"))
            .with(
                "orders",
                items(&[
                    ("Braised beef noodles, extra spicy", Some(28.0)),
                    ("Smashed cucumber", Some(12.0)),
                    ("Iced cola", Some(3.0)),
                ]),
            )
            .with(
                "flavors",
                metrics(&[
                    ("spicy", 80.0),
                    ("sour", 20.0),
                    ("sweet", 10.0),
                    ("salty", 60.0),
                    ("bitter", 0.0),
                ]),
            )
            .with("satiety", num(90.0))
            .with("rating", num(4.0))
            .with("notes", text("Big chunks of beef, noodles a bit firm. Ask for softer next time.")),
        ReceiptKind::Movie => r
            .with("title", text("Dune: Part Two"))
            .with("director", text("Denis Villeneuve"))
            .with("genre", choice("SCI_FI"))
            .with("year", text("2024"))
            .with("duration", text("2h 46m"))
            .with("cinema", text("IMAX Hall 3"))
            .with("seat", text("Row H, Seat 12"))
            .with(
                "experience",
                metrics(&[("visual", 5.0), ("story", 4.0), ("acting", 4.0), ("music", 5.0)]),
            )
            .with("emotion", num(5.0))
            .with("immersion", num(4.0))
            .with("favoriteScene", text("The Fremen charge on the sandworms."))
            .with(
                "personalThoughts",
                text("Goes deeper into politics and faith than the first part. Epic."),
            ),
        ReceiptKind::Game => r
            .with("title", text("Elden Ring"))
            .with("developer", text("FromSoftware"))
            .with("platform", text("PC"))
            .with("genre", choice("RPG"))
            .with("playtime", text("120h 35m"))
            .with(
                "gameplay",
                metrics(&[("graphics", 95.0), ("gameplay", 98.0), ("story", 85.0), ("difficulty", 90.0)]),
            )
            .with("challenge", num(92.0))
            .with("addiction", num(88.0))
            .with("completion", num(78.0))
            .with("achievement", text("Defeated the Elden Beast"))
            .with("memorableMoment", text("Riding across Limgrave at sunset toward the Erdtree."))
            .with("thoughts", text("Peak open world. Deep combat, steep learning curve.")),
        ReceiptKind::Music => r
            .with("artist", text("Jay Chou"))
            .with("tour", text("Carnival World Tour"))
            .with("venue", choice("STADIUM"))
            .with("venueName", text("Workers' Stadium"))
            .with("duration", text("3h 15m"))
            .with("seat", text("Floor A, Row 12, Seat 15"))
            .with("genre", choice("POP"))
            .with(
                "experience",
                metrics(&[
                    ("acoustic", 95.0),
                    ("visual", 88.0),
                    ("atmosphere", 92.0),
                    ("energy", 96.0),
                    ("vocals", 90.0),
                ]),
            )
            .with("favoriteSong", text("Qi Li Xiang, the whole stadium singing along"))
            .with("surpriseMoment", text("An unreleased song in the encore."))
            .with(
                "setlist",
                list(&["Can't Speak", "Qi Li Xiang", "Tornado", "Blue and White Porcelain", "Sunny Day"]),
            )
            .with("thoughts", text("Perfect sound, stunning stage, great night.")),
        ReceiptKind::Idol => r
            .with("name", text("NewJeans"))
            .with("activity", choice("COMEBACK"))
            .with("identity", choice("MOM"))
            .with(
                "items",
                items(&[
                    ("Weverse album set", Some(58.0)),
                    ("Photocards", Some(25.0)),
                    ("Streaming", Some(12.0)),
                ]),
            )
            .with("stats", metrics(&[("dopamine", 100.0), ("sanity", 10.0), ("wallet", 25.0)]))
            .with("scream", num(5.0))
            .with("highlight", text("Twin tails today. Unreal."))
            .with("promise", text("Will support the next comeback too!")),
        ReceiptKind::Reading => r
            .with("title", text("Siddhartha"))
            .with("author", text("Hermann Hesse"))
            .with("format", choice("PAPER"))
            .with("genre", choice("FICTION"))
            .with("pages", text("180 P."))
            .with(
                "metrics",
                metrics(&[("immersion", 90.0), ("intellect", 95.0), ("emotion", 85.0), ("writing", 100.0)]),
            )
            .with("rating", num(5.0))
            .with("quote", text("Wisdom cannot be passed on."))
            .with("review", text("A wandering book about finding yourself. Calm, like a river.")),
        ReceiptKind::Travel => r
            .with("origin", text("HOME"))
            .with("dest", text("TOKYO"))
            .with("time", text("09:30"))
            .with("transport", choice("FLIGHT"))
            .with("classType", choice("BUDGET"))
            .with("seat", text("12A"))
            .with("weather", choice("SUNNY"))
            .with(
                "metrics",
                metrics(&[("fatigue", 85.0), ("novelty", 100.0), ("budget", 60.0), ("mood", 70.0)]),
            )
            .with("memo", text("Got lost in Shibuya, found an amazing ramen shop.")),
        ReceiptKind::Fitness => r
            .with("type", choice("LEGS"))
            .with("duration", num(60.0))
            .with("time", text("18:30"))
            .with("location", text("Home Gym"))
            .with(
                "exercises",
                list(&["Squat 5x5 @ 100kg", "Deadlift 3x5 @ 120kg", "Leg press 4x12 @ 180kg"]),
            )
            .with(
                "metrics",
                metrics(&[("pump", 80.0), ("pain", 90.0), ("sweat", 75.0), ("focus", 85.0)]),
            )
            .with("intensity", num(70.0))
            .with("caloriesBurned", num(350.0))
            .with("notes", text("Strong core today, PRs on squat and deadlift!")),
        ReceiptKind::Social => r
            .with("event", text("Board game night"))
            .with("location", text("Cafe Meeple"))
            .with("people", text("Five friends"))
            .with("vibe", choice("CHILL"))
            .with(
                "metrics",
                metrics(&[("battery", 40.0), ("fun", 90.0), ("chatter", 75.0), ("awkward", 10.0)]),
            )
            .with("highlight", text("Won Catan with a last-minute longest road."))
            .with("notes", text("Social battery low, heart full.")),
        ReceiptKind::Sleep => r
            .with("bedtime", text("23:30"))
            .with("wakeTime", text("07:15"))
            .with(
                "metrics",
                metrics(&[
                    ("quality", 80.0),
                    ("dreamClarity", 60.0),
                    ("wakeFreshness", 70.0),
                    ("deepSleep", 75.0),
                ]),
            )
            .with("morningMood", choice("NORMAL"))
            .with("dreamContent", text("Flying above the clouds, the view was beautiful..."))
            .with("notes", text("Less phone before bed, sleep earlier."))
            .with(
                "preSleepActivities",
                toggles(&[
                    ("phone", true),
                    ("reading", false),
                    ("exercise", false),
                    ("caffeine", false),
                    ("alcohol", false),
                    ("bath", true),
                    ("work", false),
                    ("meditation", false),
                ]),
            ),
        ReceiptKind::Coffee => r
            .with("time", text("14:30"))
            .with("shop", text("Blue Bottle"))
            .with("drink", text("Iced Americano"))
            .with("size", choice("MEDIUM"))
            .with("price", FieldValue::Price(Some(38.0)))
            .with("caffeine", num(150.0))
            .with("todayTotal", num(280.0))
            .with(
                "metrics",
                metrics(&[("bitterness", 6.0), ("acidity", 4.0), ("sweetness", 2.0), ("satisfaction", 9.0)]),
            )
            .with("method", choice("AMERICANO"))
            .with("bean", text("Ethiopia Yirgacheffe"))
            .with("notes", text("Floral and citrus notes, nice beans.")),
        ReceiptKind::Shopping => r
            .with("location", text("Uniqlo"))
            .with("channel", choice("OFFLINE"))
            .with("category", choice("CLOTHING"))
            .with(
                "items",
                items(&[
                    ("Wool coat", Some(599.0)),
                    ("Basic T-shirt x2", Some(158.0)),
                    ("Sock set", None),
                ]),
            )
            .with(
                "metrics",
                metrics(&[("necessity", 7.0), ("regret", 2.0), ("joy", 8.0), ("value", 7.0)]),
            )
            .with("verdict", choice("RATIONAL"))
            .with("notes", text("Seasonal sale, picked up some basics.")),
    }
}
