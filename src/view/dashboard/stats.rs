use maud::{Markup, html};

use crate::model::{PlayerStats, display_number, rounded_score};

// The data-stat attributes line up with the patch selector table so page
// scripts can keep targeting the same elements.
#[must_use]
pub fn render_stat_cards(stats: &PlayerStats) -> Markup {
    html! {
        section class="stat-cards" {
            div class="stat-card" {
                span class="stat-label" { "Hándicap actual" }
                span class="stat-value" data-stat="handicap" { (display_number(stats.handicap_actual)) }
            }
            div class="stat-card" {
                span class="stat-label" { "Rondas jugadas" }
                span class="stat-value" data-stat="total-rondas" { (stats.total_rondas) }
            }
            div class="stat-card" {
                span class="stat-label" { "Mejor score" }
                span class="stat-value" data-stat="mejor-score" { (stats.mejor_score) }
            }
            div class="stat-card" {
                span class="stat-label" { "Promedio" }
                span class="stat-value" data-stat="promedio-score" { (rounded_score(stats.promedio_score)) }
            }
            div class="stat-card" {
                span class="stat-label" { "Mejora hándicap" }
                span class="stat-value" data-stat="mejora-handicap" { (display_number(stats.mejora_handicap)) }
            }
        }
    }
}
