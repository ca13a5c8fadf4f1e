use maud::{html, Markup};

pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        div class="card" {
            h2 { (title) }
            div class="card-body" {
                (body)
            }
        }
    }
}

/// One row per bucket: label, value to scale the bar by, and the text
/// printed next to it. Bars are scaled against the largest value.
pub fn bar_chart(rows: &[(String, f64, String)]) -> Markup {
    let max = rows.iter().map(|(_, v, _)| *v).fold(0.0_f64, f64::max);

    html! {
        div class="bar-chart" {
            @for (label, value, display) in rows {
                div class="bar-row" {
                    span class="bar-label" { (label) }
                    @let pct = if max > 0.0 { value / max * 100.0 } else { 0.0 };
                    div class="bar-track" {
                        div class="bar-fill" style=(format!("width: {pct:.1}%;")) {}
                    }
                    span class="bar-value" { (display) }
                }
            }
        }
    }
}
