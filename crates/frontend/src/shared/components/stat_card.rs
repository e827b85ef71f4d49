use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatTone {
    Neutral,
    Good,
    Warning,
    Bad,
}

/// Group digits in threes: 12345 -> "12 345"
pub fn format_count(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push('\u{00a0}');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

#[component]
pub fn StatCard(
    /// Label displayed above the value
    label: &'static str,
    /// Icon name from the icon() helper
    icon_name: &'static str,
    /// Count to show (None while loading)
    #[prop(into)]
    value: Signal<Option<usize>>,
    tone: StatTone,
) -> impl IntoView {
    let class = match tone {
        StatTone::Good => "stat-card stat-card--success",
        StatTone::Bad => "stat-card stat-card--error",
        StatTone::Warning => "stat-card stat-card--warning",
        StatTone::Neutral => "stat-card",
    };

    let formatted = move || match value.get() {
        Some(v) => format_count(v),
        None => "\u{2014}".to_string(),
    };

    view! {
        <div class=class>
            <div class="stat-card__icon">
                {icon(icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{formatted}</div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(12345), "12\u{00a0}345");
        assert_eq!(format_count(1_000_000), "1\u{00a0}000\u{00a0}000");
    }
}
