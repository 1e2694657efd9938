use maud::{Markup, html};

use crate::model::ClubCard;
use crate::view::dashboard::utils::star_rating;

#[must_use]
pub fn render_club_table(clubs: &[ClubCard]) -> Markup {
    html! {
        @if !clubs.is_empty() {
            table class="styled-table" {
                thead {
                    tr {
                        th { "PALO" }
                        th { "DISTANCIA" }
                        th { "DESVIACIÓN" }
                        th { "VELOCIDAD" }
                        th { "RATING" }
                        th { "CATEGORÍA" }
                    }
                }
                tbody {
                    @for club in clubs {
                        tr {
                            td { (club.name) }
                            td { (club.distance) }
                            td { (club.deviation) }
                            td { (club.speed) }
                            td { (star_rating(club.rating)) }
                            td { (club.category) }
                        }
                    }
                }
            }
        }
        @else {
            p class="empty-state" { "No data available" }
        }
    }
}
