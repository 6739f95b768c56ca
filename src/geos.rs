// src/geos.rs

/// State-level market multipliers: (state name, multiplier, description).
/// Names match the `state` field returned by the reverse geocoder in English.
pub const STATE_ADJUSTMENTS: &[(&str, f64, &str)] = &[
    ("Alabama", 1.03, "+3% (Moderate growth, low property taxes at 0.38%)"),
    ("Alaska", 1.02, "+2% (Stable, remote market with high costs)"),
    ("Arizona", 0.98, "-2% (Oversupply, high risk of price decline)"),
    ("Arkansas", 1.03, "+3% (Moderate growth, low-cost Midwest)"),
    ("California", 1.03, "+3% (High demand, affordability issues, 7% mortgage rates)"),
    ("Colorado", 1.03, "+3% (Stable, tech-driven, moderating prices)"),
    ("Connecticut", 1.06, "+6% (Northeast strength, high property taxes at 1.81%)"),
    ("Delaware", 1.05, "+5% (Moderate growth, urban proximity)"),
    ("Florida", 0.99, "-1% (Oversupply in some markets, high insurance costs)"),
    ("Georgia", 1.05, "+5% (Sunbelt growth, strong job market)"),
    ("Hawaii", 0.97, "-3% (Price decline, high home values at $843,723)"),
    ("Idaho", 1.02, "+2% (Cooling after boom, high prices at $466,435)"),
    ("Illinois", 1.04, "+4% (Moderate growth, high property taxes at 2.11%)"),
    ("Indiana", 1.05, "+5% (Midwest growth, affordable homes)"),
    ("Iowa", 1.03, "+3% (Stable, low-cost market)"),
    ("Kansas", 1.03, "+3% (Stable, agricultural market)"),
    ("Kentucky", 1.04, "+4% (Moderate growth, affordable housing)"),
    ("Louisiana", 1.02, "+2% (Slower growth, hurricane risks)"),
    ("Maine", 1.06, "+6% (Northeast strength, high demand)"),
    ("Maryland", 1.05, "+5% (High home values at $634,548, urban proximity)"),
    ("Massachusetts", 1.06, "+6% (High home values at $247,917, strong market)"),
    ("Michigan", 1.05, "+5% (Affordable homes at $337,608, Detroit growth)"),
    ("Minnesota", 1.04, "+4% (Stable, good income-to-home-value ratio)"),
    ("Mississippi", 1.02, "+2% (Slower growth, low-cost housing)"),
    ("Missouri", 1.03, "+3% (Moderate growth, affordable Midwest)"),
    ("Montana", 1.02, "+2% (Cooling after boom, rural market)"),
    ("Nebraska", 1.04, "+4% (Stable, strong ROI potential)"),
    ("Nevada", 1.05, "+5% (Sunbelt, Vegas-driven growth)"),
    ("New Hampshire", 1.06, "+6% (Northeast strength, high property taxes)"),
    ("New Jersey", 1.07, "+7% (High demand, highest property taxes at 2.23%)"),
    ("New Mexico", 1.02, "+2% (Moderate growth, high risk of price decline)"),
    ("New York", 1.05, "+5% (Strong urban markets, high taxes)"),
    ("North Carolina", 1.06, "+6% (Hot market, Raleigh growth, strong ROI)"),
    ("North Dakota", 1.02, "+2% (Slower growth, stable economy)"),
    ("Ohio", 1.05, "+5% (Midwest growth, affordable markets)"),
    ("Oklahoma", 1.03, "+3% (Moderate growth, low-cost housing)"),
    ("Oregon", 1.02, "+2% (Cooling, high prices at $502,215)"),
    ("Pennsylvania", 1.05, "+5% (Moderate urban growth, stable market)"),
    ("Rhode Island", 1.08, "+8% (High price appreciation, small inventory)"),
    ("South Carolina", 1.06, "+6% (Sunbelt, Charleston-driven growth)"),
    ("South Dakota", 1.03, "+3% (Stable, rural market)"),
    ("Tennessee", 1.05, "+5% (Sunbelt, Nashville growth, strong ROI)"),
    // Description kept as published even though the multiplier is below 1.
    ("Texas", 0.99, "+1% (Oversupply, price fluctations expected)"),
    ("Utah", 1.02, "+2% (Cooling after boom, high prices at $544,868)"),
    ("Vermont", 1.08, "+8% (High price appreciation, low inventory)"),
    ("Virginia", 1.05, "+5% (Stable, urban proximity, strong job market)"),
    ("Washington", 1.03, "+3% (Stable, tech-driven, high prices at $595,723)"),
    ("West Virginia", 1.07, "+7% (High appreciation, lowest prices at $146,578)"),
    ("Wisconsin", 1.05, "+5% (Midwest growth, stable market)"),
    ("Wyoming", 1.02, "+2% (Slower growth, rural market)"),
    ("District of Columbia", 0.97, "-3% (Price decline, high costs at $701,895)"),
];
