use dioxus::prelude::*;

use super::carousel::Carousel;
use super::driver::CarouselEvent;
use super::state::{View, Widget};
use super::style::{category_style, handle_font_class, rank_style, RankBadge};
use crate::model::{Category, Record};

pub const PLACEHOLDER_IMAGE: &str = "/assets/placeholder.jpg";
pub const CAPTION_LINES: u8 = 3;

const TITLE: &str = "크리투스에선 매주 새로운 성과자가 쏟아지고 있습니다";
const LOADING_TEXT: &str = "리더보드를 불러오는 중...";
const ERROR_TITLE: &str = "데이터를 불러오는 중 오류가 발생했습니다";
const RETRY_LABEL: &str = "다시 시도";
const EMPTY_TEXT: &str = "리더보드 데이터가 없습니다.";

/// Everything one card displays, resolved from a record and its rank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub rank: usize,
    pub badge: RankBadge,
    pub rank_class: &'static str,
    pub thumbnail: String,
    pub date: String,
    pub views: String,
    pub handle: String,
    pub handle_class: &'static str,
    pub category: String,
    pub category_class: &'static str,
    pub caption: String,
    pub link: String,
}

impl CardView {
    /// `rank` is 1-based.
    pub fn new(rank: usize, record: &Record) -> Self {
        Self {
            rank,
            badge: RankBadge::for_rank(rank),
            rank_class: rank_style(rank),
            thumbnail: record
                .primary_thumbnail()
                .map(|t| t.url.as_str())
                .filter(|u| !u.is_empty())
                .unwrap_or(PLACEHOLDER_IMAGE)
                .to_string(),
            date: record.date.clone(),
            views: record.views_label.clone(),
            handle: record.handle.clone(),
            handle_class: handle_font_class(&record.handle),
            category: record.category.clone(),
            category_class: category_style(Category::from_label(&record.category)),
            caption: record.caption.clone(),
            link: record.link(),
        }
    }
}

/// Cards for `records` in rank order.
pub fn cards(records: &[Record]) -> Vec<CardView> {
    records
        .iter()
        .enumerate()
        .map(|(i, record)| CardView::new(i + 1, record))
        .collect()
}

/// A user interaction raised by the rendered widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetAction {
    Retry,
    Carousel(CarouselEvent),
}

impl WidgetAction {
    /// The driver event this action maps to, if any.
    pub fn carousel_event(self) -> Option<CarouselEvent> {
        match self {
            WidgetAction::Carousel(event) => Some(event),
            WidgetAction::Retry => None,
        }
    }
}

/// Render the widget's current display state as static HTML.
pub fn render_widget(widget: &Widget) -> String {
    dioxus_ssr::render_element(rsx! {
        Leaderboard { widget: widget.clone() }
    })
}

/// The whole widget in whichever display state `widget` is in.
///
/// Interactions are reported through `on_action`; a host forwards
/// [`WidgetAction::Carousel`] events to its [`CarouselHandle`] and calls
/// [`Widget::retry`] on [`WidgetAction::Retry`].
///
/// [`CarouselHandle`]: super::driver::CarouselHandle
#[component]
pub fn Leaderboard(widget: Widget, on_action: Option<EventHandler<WidgetAction>>) -> Element {
    match widget.view() {
        View::Loading => rsx! {
            div { class: "leaderboard leaderboard-loading", "data-state": "loading",
                div { class: "spinner" }
                p { {LOADING_TEXT} }
            }
        },
        View::Error(message) => rsx! {
            div { class: "leaderboard leaderboard-error", "data-state": "error",
                h2 { {ERROR_TITLE} }
                p { class: "error-message", "{message}" }
                button {
                    r#type: "button",
                    "data-action": "retry",
                    onclick: move |_| emit(on_action, WidgetAction::Retry),
                    {RETRY_LABEL}
                }
            }
        },
        View::Empty => rsx! {
            div { class: "leaderboard leaderboard-empty", "data-state": "empty",
                p { {EMPTY_TEXT} }
            }
        },
        View::Ready(snapshot) => render_ready(cards(&snapshot.data), widget.carousel(), on_action),
    }
}

/// One ranked card linking out to the reel or profile.
#[component]
pub fn LeaderboardCard(card: CardView) -> Element {
    let mut thumbnail = use_signal(|| card.thumbnail.clone());

    rsx! {
        a {
            class: "card",
            href: "{card.link}",
            target: "_blank",
            rel: "noopener noreferrer",
            "data-rank": "{card.rank}",
            div { class: "card-media",
                img {
                    src: "{thumbnail}",
                    alt: "{card.handle} 썸네일",
                    "data-fallback": PLACEHOLDER_IMAGE,
                    onerror: move |_| thumbnail.set(PLACEHOLDER_IMAGE.to_string()),
                }
                span { class: "rank-badge {card.rank_class}", "{card.badge}" }
                span { class: "card-date", "📅 {card.date}" }
                div { class: "card-views", "{card.views}" }
            }
            div { class: "card-body",
                h3 { class: "card-handle {card.handle_class}", "{card.handle}" }
                span { class: "category-badge {card.category_class}", "{card.category}" }
                p { class: "card-caption line-clamp-{CAPTION_LINES}", "{card.caption}" }
            }
        }
    }
}

fn render_ready(
    cards: Vec<CardView>,
    carousel: Carousel,
    on_action: Option<EventHandler<WidgetAction>>,
) -> Element {
    let shift = carousel.offset() as f64 * 100.0 / carousel.page_size() as f64;
    let controls = carousel.has_controls();
    let nav = move |event| emit(on_action, WidgetAction::Carousel(event));

    rsx! {
        div { class: "leaderboard", "data-state": "ready", "data-page-size": "{carousel.page_size()}",
            h1 { class: "title-text", {TITLE} }
            div {
                class: "slider",
                onmouseenter: move |_| nav(CarouselEvent::Hover(true)),
                onmouseleave: move |_| nav(CarouselEvent::Hover(false)),
                div { class: "slider-track", style: "transform: translateX(-{shift}%)",
                    for card in cards {
                        LeaderboardCard { key: "{card.rank}", card: card.clone() }
                    }
                }
                if controls {
                    button {
                        r#type: "button",
                        class: "slider-prev",
                        "data-action": "previous",
                        aria_label: "previous",
                        onclick: move |_| nav(CarouselEvent::Previous),
                        "‹"
                    }
                    button {
                        r#type: "button",
                        class: "slider-next",
                        "data-action": "next",
                        aria_label: "next",
                        onclick: move |_| nav(CarouselEvent::Next),
                        "›"
                    }
                }
            }
            if controls {
                div { class: "indicators",
                    for page in 0..carousel.page_count() {
                        {render_indicator(page, page == carousel.page(), on_action)}
                    }
                }
            }
        }
    }
}

fn render_indicator(
    page: usize,
    current: bool,
    on_action: Option<EventHandler<WidgetAction>>,
) -> Element {
    rsx! {
        button {
            key: "{page}",
            r#type: "button",
            class: if current { "indicator active" } else { "indicator" },
            "data-action": "go-to",
            "data-page": "{page}",
            aria_current: if current { "true" } else { "false" },
            onclick: move |_| emit(on_action, WidgetAction::Carousel(CarouselEvent::GoTo(page))),
        }
    }
}

fn emit(handler: Option<EventHandler<WidgetAction>>, action: WidgetAction) {
    if let Some(handler) = handler {
        handler.call(action);
    }
}
