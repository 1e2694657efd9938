use chrono::NaiveDateTime;

#[must_use]
pub fn star_rating(rating: i32) -> String {
    let filled = rating.clamp(0, 5) as usize;
    let mut stars = "★".repeat(filled);
    stars.push_str(&"☆".repeat(5 - filled));
    stars
}

// Producer stamps are ISO with fractional seconds; anything else is shown
// verbatim.
#[must_use]
pub fn format_generated_at(raw: &str) -> String {
    match NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        Ok(stamp) => stamp.format("%d/%m/%Y %H:%M").to_string(),
        Err(_) => raw.to_string(),
    }
}
