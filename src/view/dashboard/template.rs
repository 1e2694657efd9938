use maud::{DOCTYPE, Markup, html};

use crate::model::{ClubCard, DashboardData};
use crate::view::dashboard::utils::format_generated_at;
use crate::view::dashboard::{render_club_table, render_course_table, render_stat_cards};

pub const DEFAULT_PAGE_TITLE: &str = "Golf Dashboard";

#[must_use]
pub fn render_dashboard_page(dataset: Option<&DashboardData>) -> Markup {
    html! {
        (DOCTYPE)
        head {
            meta charset="UTF-8";
            meta name="viewport" content="width=device-width, initial-scale=1.0";
            link rel="stylesheet" href="static/dashboard.css";
            title { (DEFAULT_PAGE_TITLE) }
        }
        body {
            @match dataset {
                Some(data) => {
                    header {
                        h1 { (heading(data)) }
                        @if data.metadata.phase_5_enabled {
                            span class="tier-badge" { "FlightScope" }
                        }
                    }
                    (render_stat_cards(&data.player_stats))
                    section id="clubs" {
                        h3 { "Palos" }
                        @let cards: Vec<ClubCard> =
                            data.club_statistics.iter().map(ClubCard::from).collect();
                        (render_club_table(&cards))
                    }
                    section id="courses" {
                        h3 { "Campos" }
                        (render_course_table(&data.course_statistics))
                    }
                    footer {
                        small {
                            "v" (data.metadata.version)
                            " · " (data.metadata.total_rounds) " rondas"
                            " · " (format_generated_at(&data.generated_at))
                        }
                    }
                }
                None => {
                    header { h1 { (DEFAULT_PAGE_TITLE) } }
                    p class="empty-state" { "No data available" }
                }
            }
        }
    }
}

fn heading(data: &DashboardData) -> &str {
    if data.player_stats.player_name.is_empty() {
        DEFAULT_PAGE_TITLE
    } else {
        &data.player_stats.player_name
    }
}
