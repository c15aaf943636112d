use crate::models::{Occasion, OccasionType, Recommendation};

pub fn occasion_types() -> Vec<OccasionType> {
    let entry = |occasion, name: &str, icon: &str, description: &str| OccasionType {
        occasion,
        name: name.to_string(),
        icon: icon.to_string(),
        description: description.to_string(),
    };

    vec![
        entry(Occasion::Work, "Work", "💼", "Office and meetings"),
        entry(Occasion::School, "School", "🎒", "Classes and campus"),
        entry(Occasion::Date, "Date", "🌹", "Dinner or a night out for two"),
        entry(Occasion::Party, "Party", "🎉", "Celebrations and get-togethers"),
        entry(Occasion::Casual, "Casual", "☕", "Everyday errands and hangouts"),
        entry(Occasion::Workout, "Workout", "🏋️", "Gym, yoga or a run"),
        entry(Occasion::Travel, "Travel", "✈️", "Flights and sightseeing"),
        entry(Occasion::Formal, "Formal", "🎩", "Weddings, galas and ceremonies"),
        entry(Occasion::Outdoor, "Outdoor", "🌲", "Hikes, picnics and festivals"),
        entry(Occasion::Shopping, "Shopping", "🛍️", "A day at the shops"),
    ]
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

#[allow(clippy::too_many_arguments)]
fn recommendation(
    id: &str,
    title: &str,
    description: &str,
    items: &[&str],
    colors: &[&str],
    style: &str,
    weather: &[&str],
    occasions: &[Occasion],
) -> Recommendation {
    Recommendation {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        items: strings(items),
        colors: strings(colors),
        style: style.to_string(),
        weather_suitability: strings(weather),
        occasion_types: occasions.to_vec(),
        image: None,
    }
}

pub fn outfit_recommendations() -> Vec<Recommendation> {
    vec![
        recommendation(
            "rec-1",
            "Polished Office",
            "Tailored layers that hold up from the morning commute to the last meeting",
            &["Blazer", "Silk blouse", "Straight trousers", "Loafers"],
            &["Navy", "Ivory", "Camel"],
            "classic",
            &["cloudy", "rainy", "windy"],
            &[Occasion::Work],
        ),
        recommendation(
            "rec-2",
            "Campus Comfort",
            "Relaxed pieces for long days between lectures",
            &["Hoodie", "Relaxed jeans", "Sneakers", "Backpack"],
            &["Grey", "Denim blue", "White"],
            "casual",
            &["cloudy", "windy", "sunny"],
            &[Occasion::School, Occasion::Casual],
        ),
        recommendation(
            "rec-3",
            "Evening Date",
            "A sleek silhouette with one statement accessory",
            &["Slip dress", "Cropped jacket", "Heeled sandals", "Clutch"],
            &["Black", "Burgundy", "Gold"],
            "elegant",
            &["sunny", "cloudy"],
            &[Occasion::Date],
        ),
        recommendation(
            "rec-4",
            "Party Ready",
            "Bold colors and texture for a night of celebrating",
            &["Sequin top", "Wide-leg trousers", "Platform boots"],
            &["Silver", "Black", "Fuchsia"],
            "experimental",
            &["hot", "sunny", "cloudy"],
            &[Occasion::Party],
        ),
        recommendation(
            "rec-5",
            "Studio Session",
            "Breathable activewear that moves with you",
            &["Sports bra", "Leggings", "Running shoes", "Zip jacket"],
            &["Sage", "Black"],
            "sporty",
            &["sunny", "hot", "cloudy"],
            &[Occasion::Workout, Occasion::Outdoor],
        ),
        recommendation(
            "rec-6",
            "Carry-On Chic",
            "Wrinkle-resistant layers for travel days",
            &["Knit set", "Trench coat", "Slip-on sneakers", "Tote"],
            &["Oatmeal", "Beige", "White"],
            "minimal",
            &["rainy", "cloudy", "windy"],
            &[Occasion::Travel, Occasion::Shopping],
        ),
        recommendation(
            "rec-7",
            "Black Tie",
            "Timeless formalwear for ceremonies and galas",
            &["Floor-length gown", "Wrap", "Pumps", "Drop earrings"],
            &["Black", "Emerald", "Pearl"],
            "elegant",
            &["cloudy", "snowy"],
            &[Occasion::Formal, Occasion::Date],
        ),
        recommendation(
            "rec-8",
            "Trail Layers",
            "Weatherproof layers for a day outside",
            &["Fleece", "Shell jacket", "Hiking pants", "Trail boots"],
            &["Olive", "Rust", "Charcoal"],
            "utility",
            &["windy", "snowy", "rainy"],
            &[Occasion::Outdoor],
        ),
        recommendation(
            "rec-9",
            "Summer Errands",
            "Light fabrics for running around on hot days",
            &["Linen shirt", "Shorts", "Sandals", "Sun hat"],
            &["White", "Sky blue", "Tan"],
            "simple",
            &["hot", "sunny"],
            &[Occasion::Casual, Occasion::Shopping],
        ),
    ]
}
