// src/render/chart.rs
use eframe::egui::{self, Color32};
use egui_plot::{Bar, BarChart, Plot};
use std::collections::HashMap;

use crate::model::{RiskLevel, SentimentAnalysis};
use crate::render::bands::{DANGER_RED, SUCCESS_GREEN};
use crate::render::gauge;

/// A named rendering target. Each slot holds at most one live chart instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartSlot {
    SentimentBreakdown,
    AttritionGauge,
}

impl ChartSlot {
    fn plot_id(self) -> &'static str {
        match self {
            ChartSlot::SentimentBreakdown => "sentiment_breakdown",
            ChartSlot::AttritionGauge => "attrition_gauge",
        }
    }
}

/// One aggregated bar: a label, a fill color, and the underlying items the
/// count was derived from. The items are only revealed on hover; the chart
/// dataset itself stays the aggregate count.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryBar {
    pub label: String,
    pub color: Color32,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ChartSpec {
    CategoryBars(Vec<CategoryBar>),
    RiskGauge(RiskLevel),
}

#[derive(Debug)]
pub struct ChartInstance {
    spec: ChartSpec,
    disposed: bool,
}

impl ChartInstance {
    fn new(spec: ChartSpec) -> Self {
        Self { spec, disposed: false }
    }

    /// Releases the instance's data and marks it dead. A disposed instance
    /// never draws again.
    fn dispose(&mut self) {
        self.spec = ChartSpec::CategoryBars(Vec::new());
        self.disposed = true;
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }
}

/// Owns the live chart instances, keyed by slot. Replacing a slot's chart
/// disposes the previous instance before the new one is constructed; that
/// ordering is what prevents ghost overlays and leaked hover bindings across
/// repeated renders.
#[derive(Debug, Default)]
pub struct ChartManager {
    slots: HashMap<ChartSlot, ChartInstance>,
    created: u64,
    disposed: u64,
}

impl ChartManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(&mut self, slot: ChartSlot, spec: ChartSpec) {
        if let Some(mut previous) = self.slots.remove(&slot) {
            previous.dispose();
            self.disposed += 1;
        }
        self.created += 1;
        self.slots.insert(slot, ChartInstance::new(spec));
    }

    /// Disposes every live instance. Used on form reset.
    pub fn clear(&mut self) {
        for (_, mut instance) in self.slots.drain() {
            instance.dispose();
            self.disposed += 1;
        }
    }

    pub fn live_instances(&self) -> u64 {
        self.created - self.disposed
    }

    pub fn instance(&self, slot: ChartSlot) -> Option<&ChartInstance> {
        self.slots.get(&slot)
    }

    /// Draws the slot's current chart. No-op when the slot is empty.
    pub fn draw(&self, slot: ChartSlot, ui: &mut egui::Ui) {
        let Some(instance) = self.slots.get(&slot) else {
            return;
        };
        if instance.disposed {
            return;
        }

        match &instance.spec {
            ChartSpec::CategoryBars(categories) => {
                draw_category_bars(ui, slot.plot_id(), categories);
            }
            ChartSpec::RiskGauge(level) => {
                gauge::draw_risk_gauge(ui, *level, 220.0);
            }
        }
    }
}

fn draw_category_bars(ui: &mut egui::Ui, plot_id: &str, categories: &[CategoryBar]) {
    let bars: Vec<Bar> = categories
        .iter()
        .enumerate()
        .map(|(i, category)| {
            Bar::new(i as f64, category.items.len() as f64)
                .width(0.5)
                .fill(category.color)
                .name(&category.label)
        })
        .collect();

    let details = categories.to_vec();
    let chart = BarChart::new(bars).element_formatter(Box::new(move |bar, _chart| {
        category_detail(&details, bar.argument.round() as usize)
    }));

    Plot::new(plot_id)
        .height(200.0)
        .allow_zoom(false)
        .allow_drag(false)
        .show_background(false)
        .show_axes([false, true])
        .include_y(0.0)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(chart);
        });
}

/// Hover text for one bar: the aggregate count followed by the underlying
/// items, in source order. Read-only over the category data.
pub fn category_detail(categories: &[CategoryBar], index: usize) -> String {
    let Some(category) = categories.get(index) else {
        return String::new();
    };
    let mut text = format!("{}: {}", category.label, category.items.len());
    for item in &category.items {
        text.push_str("\n• ");
        text.push_str(item);
    }
    text
}

/// Derives the positive-vs-concerns breakdown from a sentiment result.
pub fn sentiment_breakdown(result: &SentimentAnalysis) -> ChartSpec {
    ChartSpec::CategoryBars(vec![
        CategoryBar {
            label: "Positive Aspects".to_string(),
            color: SUCCESS_GREEN,
            items: result.positive_aspects.clone(),
        },
        CategoryBar {
            label: "Concerns".to_string(),
            color: DANGER_RED,
            items: result.concerns.clone(),
        },
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bars_spec(items: &[&str]) -> ChartSpec {
        ChartSpec::CategoryBars(vec![CategoryBar {
            label: "Concerns".to_string(),
            color: DANGER_RED,
            items: items.iter().map(|s| s.to_string()).collect(),
        }])
    }

    #[test]
    fn test_render_twice_leaves_one_live_instance() {
        let mut manager = ChartManager::new();
        manager.render(ChartSlot::SentimentBreakdown, bars_spec(&["A"]));
        manager.render(ChartSlot::SentimentBreakdown, bars_spec(&["B"]));
        assert_eq!(manager.live_instances(), 1);

        // The surviving instance is the replacement, not the original.
        let instance = manager.instance(ChartSlot::SentimentBreakdown).unwrap();
        assert!(!instance.is_disposed());
        assert_eq!(instance.spec, bars_spec(&["B"]));
    }

    #[test]
    fn test_slots_are_independent() {
        let mut manager = ChartManager::new();
        manager.render(ChartSlot::SentimentBreakdown, bars_spec(&[]));
        manager.render(ChartSlot::AttritionGauge, ChartSpec::RiskGauge(RiskLevel::High));
        assert_eq!(manager.live_instances(), 2);

        manager.render(ChartSlot::AttritionGauge, ChartSpec::RiskGauge(RiskLevel::Low));
        assert_eq!(manager.live_instances(), 2);
    }

    #[test]
    fn test_clear_disposes_everything() {
        let mut manager = ChartManager::new();
        manager.render(ChartSlot::SentimentBreakdown, bars_spec(&["A"]));
        manager.render(ChartSlot::AttritionGauge, ChartSpec::RiskGauge(RiskLevel::Medium));
        manager.clear();
        assert_eq!(manager.live_instances(), 0);
        assert!(manager.instance(ChartSlot::SentimentBreakdown).is_none());
    }

    #[test]
    fn test_sentiment_breakdown_derives_counts() {
        let result = SentimentAnalysis {
            positive_aspects: vec!["Good team".to_string(), "Flexible hours".to_string()],
            concerns: vec!["Pay".to_string()],
            ..Default::default()
        };
        let ChartSpec::CategoryBars(categories) = sentiment_breakdown(&result) else {
            panic!("expected category bars");
        };
        assert_eq!(categories.len(), 2);
        assert_eq!(categories[0].label, "Positive Aspects");
        assert_eq!(categories[0].items.len(), 2);
        assert_eq!(categories[1].label, "Concerns");
        assert_eq!(categories[1].items, vec!["Pay".to_string()]);
    }

    #[test]
    fn test_category_detail_reveals_items_in_order() {
        let ChartSpec::CategoryBars(categories) = bars_spec(&["A", "B"]) else {
            unreachable!();
        };
        assert_eq!(category_detail(&categories, 0), "Concerns: 2\n• A\n• B");
        assert_eq!(category_detail(&categories, 5), "");
    }
}
