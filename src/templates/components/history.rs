use crate::sessions::PredictionRecord;
use maud::{html, Markup};

pub fn history_table(records: &[PredictionRecord]) -> Markup {
    html! {
        section class="card" id="history" {
            h2 { "📜 Prediction History" }

            @if records.is_empty() {
                p { "No predictions yet." }
            } @else {
                div style="overflow-x: auto;" {
                    table {
                        thead {
                            tr {
                                th { "Time (UTC)" }
                                th { "Bedrooms" }
                                th { "Bathrooms" }
                                th { "Living Area" }
                                th { "Condition" }
                                th { "Schools" }
                                th { "ZIP Code" }
                                th { "Price" }
                            }
                        }
                        tbody {
                            @for record in records {
                                tr {
                                    td { (record.recorded_at.format("%H:%M:%S").to_string()) }
                                    td { (record.features.bedrooms) }
                                    td { (record.features.bathrooms) }
                                    td { (record.features.living_area_sqft) }
                                    td { (record.features.condition) }
                                    td { (record.features.nearby_schools) }
                                    td { (record.zip) }
                                    td { (record.adjusted_price) }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
