use scraper::node::Text;
use scraper::{Html, Node, Selector};
use tracing::debug;

use crate::model::{PlayerStats, display_number, rounded_score};

// Selector table for the stat elements a host page may carry. The average
// score is the only value rounded before display.
fn stat_values(stats: &PlayerStats) -> [(&'static str, String); 5] {
    [
        (
            r#"[data-stat="handicap"]"#,
            display_number(stats.handicap_actual),
        ),
        (
            r#"[data-stat="total-rondas"]"#,
            stats.total_rondas.to_string(),
        ),
        (r#"[data-stat="mejor-score"]"#, stats.mejor_score.to_string()),
        (
            r#"[data-stat="promedio-score"]"#,
            rounded_score(stats.promedio_score).to_string(),
        ),
        (
            r#"[data-stat="mejora-handicap"]"#,
            display_number(stats.mejora_handicap),
        ),
    ]
}

/// Rewrites the text of the five stat elements and returns the new markup.
/// Only the first match of each selector is touched; selectors with no match
/// are skipped without error.
#[must_use]
pub fn patch_stat_elements(html: &str, stats: &PlayerStats) -> String {
    let mut document = Html::parse_document(html);

    for (selector_str, value) in stat_values(stats) {
        let selector = match Selector::parse(selector_str) {
            Ok(selector) => selector,
            Err(_) => continue,
        };
        let target = document.select(&selector).next().map(|element| element.id());
        match target {
            Some(id) => {
                if let Some(mut node) = document.tree.get_mut(id) {
                    while let Some(mut child) = node.first_child() {
                        child.detach();
                    }
                    node.append(Node::Text(Text {
                        text: value.as_str().into(),
                    }));
                }
            }
            None => debug!(selector = selector_str, "stat element not present, skipped"),
        }
    }

    document.html()
}
