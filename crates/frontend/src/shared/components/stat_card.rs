use crate::shared::icons::icon;
use contracts::shared::finance::format_money;
use leptos::prelude::*;

/// How a card renders its number
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StatFormat {
    Money,
    Count,
    /// Value followed by a unit ("1 200.00 L")
    Quantity(&'static str),
}

fn format_value(value: f64, format: StatFormat) -> String {
    match format {
        StatFormat::Money => format_money(value),
        StatFormat::Count => format!("{}", value.round() as i64),
        StatFormat::Quantity(unit) => format!("{} {}", format_money(value), unit),
    }
}

#[component]
pub fn StatCard(
    /// Label displayed above the value
    label: &'static str,
    /// Icon name from the icon() helper
    icon_name: &'static str,
    /// Primary numeric value (None = loading/error)
    #[prop(into)]
    value: Signal<Option<f64>>,
    format: StatFormat,
    /// Colour negative values as a loss
    #[prop(optional)]
    signed: bool,
    #[prop(into, optional)]
    subtitle: Signal<Option<String>>,
) -> impl IntoView {
    let status_class = move || match value.get() {
        Some(v) if signed && v < 0.0 => "stat-card stat-card--error",
        Some(v) if signed && v > 0.0 => "stat-card stat-card--success",
        _ => "stat-card",
    };

    let formatted = move || match value.get() {
        Some(v) => format_value(v, format),
        None => "—".to_string(),
    };

    view! {
        <div class=status_class>
            <div class="stat-card__icon">{icon(icon_name)}</div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{formatted}</div>
                {move || subtitle.get().map(|s| view! { <div class="stat-card__subtitle">{s}</div> })}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(1250000.5, StatFormat::Money), "1 250 000.50");
        assert_eq!(format_value(12.0, StatFormat::Count), "12");
        assert_eq!(format_value(350.0, StatFormat::Quantity("L")), "350.00 L");
    }
}
