use maud::{Markup, html};

use crate::model::CourseStat;

#[must_use]
pub fn render_course_table(courses: &[CourseStat]) -> Markup {
    html! {
        @if !courses.is_empty() {
            table class="styled-table" {
                thead {
                    tr {
                        th { "CAMPO" }
                        th { "RONDAS" }
                        th { "PROMEDIO" }
                        th { "MEJOR" }
                        th { "PEOR" }
                        th { "PAR" }
                        th { "SLOPE" }
                    }
                }
                tbody {
                    @for course in courses {
                        tr {
                            td { (course.nombre) }
                            td { (course.rondas_jugadas) }
                            td { (format!("{:.1}", course.promedio)) }
                            td { (course.mejor_score) }
                            td { (course.peor_score) }
                            td { (course.par.map_or_else(|| "-".to_string(), |par| par.to_string())) }
                            td { (course.slope.map_or_else(|| "-".to_string(), |slope| slope.to_string())) }
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
