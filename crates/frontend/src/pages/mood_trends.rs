use moodlog_frontend_common::mood;
use moodlog_frontend_common::services::JournalService;
use moodlog_frontend_common::{Spinner, use_toasts};
use moodlog_http::types::{ImprovementTrend, MoodPoint, MoodTrendsResponse};
use web_sys::HtmlSelectElement;
use yew::prelude::*;

const DAY_OPTIONS: [u32; 5] = [7, 14, 30, 60, 90];

const CHART_WIDTH: f64 = 600.0;
const CHART_HEIGHT: f64 = 240.0;
const CHART_PAD: f64 = 24.0;

const MOOD_COLORS: [(u8, &str); 5] = [
    (1, "#ef4444"),
    (2, "#f97316"),
    (3, "#eab308"),
    (4, "#22c55e"),
    (5, "#3b82f6"),
];

#[derive(Clone, Copy, PartialEq, Eq)]
enum ChartKind {
    Line,
    Bar,
}

#[function_component(MoodTrendsPage)]
pub fn mood_trends_page() -> Html {
    let toasts = use_toasts();

    let loading = use_state(|| true);
    let days = use_state(|| 30u32);
    let chart_kind = use_state(|| ChartKind::Line);
    let data = use_state(|| Option::<MoodTrendsResponse>::None);

    {
        let loading = loading.clone();
        let data = data.clone();
        let toasts = toasts.clone();
        use_effect_with(*days, move |days| {
            let days = *days;
            loading.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                match JournalService::new().mood_trends(days).await {
                    Ok(trends) => data.set(Some(trends)),
                    Err(error) => {
                        tracing::debug!(%error, "failed to load mood trends");
                        toasts.error("Failed to load mood trends");
                        data.set(None);
                    }
                }
                loading.set(false);
            });
        });
    }

    let on_days = {
        let days = days.clone();
        Callback::from(move |e: Event| {
            let value = e.target_unchecked_into::<HtmlSelectElement>().value();
            if let Ok(parsed) = value.parse::<u32>() {
                days.set(parsed);
            }
        })
    };

    let set_chart = |kind: ChartKind| {
        let chart_kind = chart_kind.clone();
        Callback::from(move |_: MouseEvent| chart_kind.set(kind))
    };

    if *loading {
        return html! { <Spinner /> };
    }

    let Some(trends) = (*data).clone() else {
        return html! {
            <div class="text-center py-12">
                <p class="text-gray-500">{"No mood data available yet."}</p>
                <p class="text-sm text-gray-400 mt-2">{"Start journaling to see your mood trends!"}</p>
            </div>
        };
    };

    let stats = &trends.statistics;
    let trend_color = match stats.improvement_trend {
        ImprovementTrend::Improving => "text-green-600",
        ImprovementTrend::Declining => "text-red-600",
        ImprovementTrend::Stable => "text-gray-600",
    };
    let trend_icon = match stats.improvement_trend {
        ImprovementTrend::Improving => "📈",
        ImprovementTrend::Declining => "📉",
        ImprovementTrend::Stable => "➡️",
    };
    let total_in_distribution: u32 = stats.mood_distribution.values().sum();

    html! {
        <div class="max-w-6xl mx-auto space-y-4">
            <div class="bg-white rounded-lg shadow-sm p-4">
                <h1 class="text-xl font-bold text-gray-900">{"Mood Trends"}</h1>
                <p class="text-sm text-gray-600 mt-1">{"Track your emotional journey over time"}</p>
            </div>

            <div class="bg-white rounded-lg shadow-sm p-4">
                <div class="flex flex-wrap items-center justify-between gap-3">
                    <div class="flex items-center space-x-3">
                        <label class="text-xs font-medium text-gray-700">{"Time Period:"}</label>
                        <select
                            onchange={on_days}
                            class="border border-gray-300 rounded-md px-2 py-1 text-xs focus:outline-none focus:ring-blue-500 focus:border-blue-500"
                        >
                            {for DAY_OPTIONS.iter().map(|option| html! {
                                <option
                                    key={*option}
                                    value={option.to_string()}
                                    selected={*days == *option}
                                >
                                    {format!("Last {option} days")}
                                </option>
                            })}
                        </select>
                    </div>

                    <div class="flex items-center space-x-1.5">
                        <button
                            onclick={set_chart(ChartKind::Line)}
                            class={if *chart_kind == ChartKind::Line { "px-2 py-1 text-xs rounded-md bg-blue-100 text-blue-600" } else { "px-2 py-1 text-xs rounded-md text-gray-400 hover:text-gray-600" }}
                            title="Line Chart"
                        >
                            {"Line"}
                        </button>
                        <button
                            onclick={set_chart(ChartKind::Bar)}
                            class={if *chart_kind == ChartKind::Bar { "px-2 py-1 text-xs rounded-md bg-blue-100 text-blue-600" } else { "px-2 py-1 text-xs rounded-md text-gray-400 hover:text-gray-600" }}
                            title="Bar Chart"
                        >
                            {"Bars"}
                        </button>
                    </div>
                </div>
            </div>

            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-4">
                <div class="bg-white rounded-lg shadow-sm p-4">
                    <p class="text-xs font-medium text-gray-600">{"Total Entries"}</p>
                    <p class="text-lg font-bold text-gray-900">{stats.total_entries}</p>
                </div>
                <div class="bg-white rounded-lg shadow-sm p-4">
                    <p class="text-xs font-medium text-gray-600">{"Average Mood"}</p>
                    <p class="text-lg font-bold text-gray-900">{format!("{:.1}", stats.average_mood)}</p>
                </div>
                <div class="bg-white rounded-lg shadow-sm p-4">
                    <p class="text-xs font-medium text-gray-600">{"Most Common"}</p>
                    <p class="text-lg font-bold text-gray-900">{mood::label(stats.most_frequent_mood)}</p>
                </div>
                <div class="bg-white rounded-lg shadow-sm p-4">
                    <p class="text-xs font-medium text-gray-600">{format!("Trend {trend_icon}")}</p>
                    <p class={format!("text-lg font-bold {trend_color}")}>{stats.improvement_trend.label()}</p>
                </div>
            </div>

            <div class="grid grid-cols-1 lg:grid-cols-3 gap-4">
                <div class="lg:col-span-2 bg-white rounded-lg shadow-sm p-4">
                    <h3 class="text-base font-semibold text-gray-900 mb-3">{"Mood Over Time"}</h3>
                    {mood_chart(&trends.mood_trend, *chart_kind)}
                </div>

                <div class="bg-white rounded-lg shadow-sm p-4">
                    <h3 class="text-base font-semibold text-gray-900 mb-3">{"Mood Distribution"}</h3>
                    <div class="space-y-2">
                        {for MOOD_COLORS.iter().map(|(score, color)| {
                            let count = stats
                                .mood_distribution
                                .get(&score.to_string())
                                .copied()
                                .unwrap_or(0);
                            let percent = if total_in_distribution > 0 {
                                f64::from(count) * 100.0 / f64::from(total_in_distribution)
                            } else {
                                0.0
                            };
                            html! {
                                <div key={*score} class="flex items-center gap-2 text-xs">
                                    <span class="w-16 text-gray-600">{mood::label(*score)}</span>
                                    <div class="flex-1 bg-gray-100 rounded-full h-3 overflow-hidden">
                                        <div
                                            class="h-3 rounded-full"
                                            style={format!("width: {percent:.0}%; background-color: {color};")}
                                        ></div>
                                    </div>
                                    <span class="w-8 text-right text-gray-700">{count}</span>
                                </div>
                            }
                        })}
                    </div>
                </div>
            </div>

            <div class="bg-white rounded-lg shadow-sm p-4 text-center">
                <p class="text-xs text-gray-600">
                    {format!("Data from {} to {}", short_date(&trends.date_range.start), short_date(&trends.date_range.end))}
                </p>
            </div>
        </div>
    }
}

fn mood_chart(points: &[MoodPoint], kind: ChartKind) -> Html {
    if points.is_empty() {
        return html! { <p class="text-sm text-gray-400 py-16 text-center">{"No entries in this period."}</p> };
    }

    let view_box = format!("0 0 {CHART_WIDTH} {CHART_HEIGHT}");
    let grid = (1..=5u8).map(|score| {
        let y = mood_y(score);
        html! {
            <g key={score}>
                <line x1={CHART_PAD.to_string()} y1={y.to_string()} x2={(CHART_WIDTH - CHART_PAD).to_string()} y2={y.to_string()} stroke="#e5e7eb" stroke-dasharray="3 3" />
                <text x="0" y={(y + 4.0).to_string()} font-size="10" fill="#6b7280">{mood::emoji(score)}</text>
            </g>
        }
    });

    let marks = match kind {
        ChartKind::Line => html! {
            <>
                <polyline
                    points={polyline_points(points)}
                    fill="none"
                    stroke="#3b82f6"
                    stroke-width="3"
                    stroke-linejoin="round"
                />
                {for points.iter().enumerate().map(|(index, point)| {
                    let (x, y) = point_coords(index, points.len(), point.mood);
                    html! {
                        <circle key={point.date.clone()} cx={x.to_string()} cy={y.to_string()} r="4" fill="#3b82f6">
                            <title>{format!("{}: {}", short_date(&point.date), mood::label(point.mood))}</title>
                        </circle>
                    }
                })}
            </>
        },
        ChartKind::Bar => html! {
            <>
                {for points.iter().enumerate().map(|(index, point)| {
                    let (x, y) = point_coords(index, points.len(), point.mood);
                    let width = bar_width(points.len());
                    html! {
                        <rect
                            key={point.date.clone()}
                            x={(x - width / 2.0).to_string()}
                            y={y.to_string()}
                            width={width.to_string()}
                            height={(CHART_HEIGHT - CHART_PAD - y).to_string()}
                            rx="2"
                            fill="#3b82f6"
                        >
                            <title>{format!("{}: {}", short_date(&point.date), mood::label(point.mood))}</title>
                        </rect>
                    }
                })}
            </>
        },
    };

    html! {
        <svg viewBox={view_box} class="w-full h-64" role="img" aria-label="Mood over time">
            {for grid}
            {marks}
        </svg>
    }
}

/// Chart coordinates for the `index`-th of `count` points at a mood score.
fn point_coords(index: usize, count: usize, mood: u8) -> (f64, f64) {
    let span = CHART_WIDTH - 2.0 * CHART_PAD;
    let x = if count <= 1 {
        CHART_WIDTH / 2.0
    } else {
        CHART_PAD + span * index as f64 / (count - 1) as f64
    };
    (x, mood_y(mood))
}

fn mood_y(mood: u8) -> f64 {
    let clamped = mood.clamp(1, 5);
    let span = CHART_HEIGHT - 2.0 * CHART_PAD;
    CHART_PAD + span * f64::from(5 - clamped) / 4.0
}

fn polyline_points(points: &[MoodPoint]) -> String {
    points
        .iter()
        .enumerate()
        .map(|(index, point)| {
            let (x, y) = point_coords(index, points.len(), point.mood);
            format!("{x:.1},{y:.1}")
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn bar_width(count: usize) -> f64 {
    let span = CHART_WIDTH - 2.0 * CHART_PAD;
    (span / count as f64 * 0.6).min(24.0)
}

/// "Jun 3"-style label from an ISO date or timestamp.
fn short_date(date_iso: &str) -> String {
    let day: String = date_iso.chars().take(10).collect();
    chrono::NaiveDate::parse_from_str(&day, "%Y-%m-%d")
        .map(|date| date.format("%b %-d").to_string())
        .unwrap_or_else(|_| date_iso.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(date: &str, mood: u8) -> MoodPoint {
        MoodPoint {
            date: date.into(),
            mood,
            mood_emoji: None,
        }
    }

    #[test]
    fn extreme_moods_map_to_the_chart_edges() {
        let (_, top) = point_coords(0, 2, 5);
        let (_, bottom) = point_coords(1, 2, 1);
        assert_eq!(top, CHART_PAD);
        assert_eq!(bottom, CHART_HEIGHT - CHART_PAD);
    }

    #[test]
    fn single_points_are_centered() {
        let (x, _) = point_coords(0, 1, 3);
        assert_eq!(x, CHART_WIDTH / 2.0);
    }

    #[test]
    fn polyline_spans_the_padded_area() {
        let points = vec![point("2025-06-01", 1), point("2025-06-02", 3), point("2025-06-03", 5)];
        let rendered = polyline_points(&points);
        let coords: Vec<&str> = rendered.split(' ').collect();
        assert_eq!(coords.len(), 3);
        assert!(coords[0].starts_with("24.0,"));
        assert!(coords[2].starts_with("576.0,"));
    }

    #[test]
    fn out_of_range_scores_are_clamped() {
        assert_eq!(mood_y(0), mood_y(1));
        assert_eq!(mood_y(9), mood_y(5));
    }

    #[test]
    fn short_date_handles_timestamps_and_garbage() {
        assert_eq!(short_date("2025-06-03T00:00:00.000Z"), "Jun 3");
        assert_eq!(short_date("???"), "???");
    }
}
