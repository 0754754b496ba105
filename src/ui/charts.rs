use std::ops::RangeInclusive;

use eframe::egui::{Color32, Ui};
use egui_plot::{Bar, BarChart, GridMark, Plot};

use crate::data::display::format_eur;
use crate::data::view::DashboardView;

/// Single accent color shared by every chart.
const ACCENT: Color32 = Color32::from_rgb(0x90, 0xFF, 0x02);
const CHART_HEIGHT: f32 = 400.0;
const BAR_WIDTH: f64 = 0.7;
/// Club names longer than this are shortened on the axis; the tooltip
/// carries the full name.
const MAX_TICK_CHARS: usize = 12;

// ---------------------------------------------------------------------------
// Market value by position
// ---------------------------------------------------------------------------

/// Mean market value per position, bars in dataset appearance order.
pub fn market_value_by_position(ui: &mut Ui, view: &DashboardView) {
    let bars: Vec<Bar> = view
        .value_by_position
        .iter()
        .enumerate()
        .map(|(i, (position, mean))| {
            Bar::new(i as f64, *mean).name(position).width(BAR_WIDTH)
        })
        .collect();
    let labels: Vec<String> = view
        .value_by_position
        .iter()
        .map(|(position, _)| position.clone())
        .collect();

    let chart = BarChart::new(bars)
        .color(ACCENT)
        .element_formatter(Box::new(|bar: &Bar, _: &BarChart| {
            format!("{}\n{}", bar.name, format_eur(bar.value))
        }));

    Plot::new("value_by_position")
        .height(CHART_HEIGHT)
        .allow_boxed_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .x_axis_label("Position")
        .y_axis_label("Mean market value (EUR)")
        .x_axis_formatter(index_tick_formatter(labels))
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(chart);
        });
}

// ---------------------------------------------------------------------------
// Average age by club
// ---------------------------------------------------------------------------

/// Mean age per club, bars sorted oldest squad first. Axis labels are
/// shortened; hover a bar for the full club name.
pub fn average_age_by_club(ui: &mut Ui, view: &DashboardView) {
    let bars: Vec<Bar> = view
        .age_by_club
        .iter()
        .enumerate()
        .map(|(i, (club, mean))| Bar::new(i as f64, *mean).name(club).width(BAR_WIDTH))
        .collect();
    let labels: Vec<String> = view
        .age_by_club
        .iter()
        .map(|(club, _)| truncate_label(club, MAX_TICK_CHARS))
        .collect();

    let chart = BarChart::new(bars)
        .color(ACCENT)
        .element_formatter(Box::new(|bar: &Bar, _: &BarChart| {
            format!("{}\n{:.1} years", bar.name, bar.value)
        }));

    Plot::new("age_by_club")
        .height(CHART_HEIGHT)
        .allow_boxed_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .x_axis_label("Club")
        .y_axis_label("Mean age (years)")
        .x_axis_formatter(index_tick_formatter(labels))
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(chart);
        });
}

// ---------------------------------------------------------------------------
// Age distribution
// ---------------------------------------------------------------------------

/// Player count per age, ages ascending on the axis.
pub fn age_distribution(ui: &mut Ui, view: &DashboardView) {
    let bars: Vec<Bar> = view
        .age_distribution
        .iter()
        .map(|&(age, count)| {
            Bar::new(age as f64, count as f64)
                .name(format!("Age {age}"))
                .width(BAR_WIDTH)
        })
        .collect();

    let chart = BarChart::new(bars)
        .color(ACCENT)
        .element_formatter(Box::new(|bar: &Bar, _: &BarChart| {
            format!("{}\n{:.0} players", bar.name, bar.value)
        }));

    Plot::new("age_distribution")
        .height(CHART_HEIGHT)
        .allow_boxed_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .x_axis_label("Age")
        .y_axis_label("Players")
        .x_axis_formatter(integer_tick_formatter())
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(chart);
        });
}

// ---------------------------------------------------------------------------
// Axis helpers
// ---------------------------------------------------------------------------

/// Tick formatter for charts whose bars sit at 0, 1, 2, …: prints the label
/// for whole-number marks and blanks everything else.
fn index_tick_formatter(
    labels: Vec<String>,
) -> impl Fn(GridMark, &RangeInclusive<f64>) -> String {
    move |mark, _range| {
        let idx = mark.value.round();
        if (mark.value - idx).abs() > 1e-6 || idx < 0.0 {
            return String::new();
        }
        labels.get(idx as usize).cloned().unwrap_or_default()
    }
}

/// Tick formatter that only labels whole numbers, for axes over integer
/// quantities such as age.
fn integer_tick_formatter() -> impl Fn(GridMark, &RangeInclusive<f64>) -> String {
    move |mark, _range| {
        let v = mark.value.round();
        if (mark.value - v).abs() > 1e-6 {
            String::new()
        } else {
            format!("{v:.0}")
        }
    }
}

/// Shorten a label to `max_chars`, appending an ellipsis when cut.
fn truncate_label(label: &str, max_chars: usize) -> String {
    if label.chars().count() <= max_chars {
        return label.to_string();
    }
    let head: String = label.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{head}\u{2026}")
}
