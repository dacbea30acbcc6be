use glassmap_shared::colors;
use glassmap_shared::country;
use glassmap_shared::interaction::{MapEvent, MapInteraction, Point, PointerTarget};
use glassmap_shared::navigation::navigation_for;
use glassmap_shared::projection::{MapShape, Mercator, VIEW_BOX_HEIGHT, VIEW_BOX_WIDTH, map_shapes};
use glassmap_shared::topology::detect_unmapped;
use glassmap_shared::{CountryIndex, CountryStatistic, GeoFeature, NavigationRequest, ViewMode};
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{KeyboardEvent, MouseEvent, PointerEvent};

use crate::map_controls::MapControls;
use crate::mount_guard::MountGuard;
use crate::topology;
use crate::unmapped::UnmappedCountries;

const BASE_STROKE: f64 = 0.5;
const TOOLTIP_OFFSET: (f64, f64) = (15.0, 10.0);
const DATA_ATTR: &str = "data-country";

pub fn glass_label(count: usize) -> String {
    if count == 1 {
        format!("{count} glass")
    } else {
        format!("{count} glasses")
    }
}

fn country_aria_label(name: &str, count: usize) -> String {
    format!("{name}: {}", glass_label(count))
}

/// Client pixels → viewbox units for an SVG box at `(left, top, width, height)`.
///
/// The SVG keeps its aspect ratio, so one factor covers both axes.
pub fn view_box_point(client_x: f64, client_y: f64, rect: (f64, f64, f64, f64)) -> Point {
    let (left, top, width, _) = rect;
    let factor = if width > 0.0 { VIEW_BOX_WIDTH / width } else { 1.0 };
    Point::new((client_x - left) * factor, (client_y - top) * factor)
}

/// Map-level keyboard shortcuts.
pub fn key_event(key: &str) -> Option<MapEvent> {
    match key {
        "+" | "=" => Some(MapEvent::ZoomIn),
        "-" => Some(MapEvent::ZoomOut),
        "0" => Some(MapEvent::Reset),
        _ => None,
    }
}

fn element_rect(el: &web_sys::Element) -> (f64, f64, f64, f64) {
    let rect = el.get_bounding_client_rect();
    (rect.left(), rect.top(), rect.width(), rect.height())
}

/// Choropleth world map with hover tooltip, pan/zoom and click-to-filter.
#[component]
pub fn WorldMap(
    #[prop(into)] country_data: Signal<Vec<CountryStatistic>>,
    #[prop(into)] view_mode: Signal<ViewMode>,
    on_navigate: Callback<NavigationRequest>,
) -> impl IntoView {
    let features: RwSignal<Option<Vec<GeoFeature>>> = RwSignal::new(None);
    let interaction: RwSignal<MapInteraction> = RwSignal::new(MapInteraction::default());
    let container_ref: NodeRef<leptos::html::Div> = NodeRef::new();

    let guard = MountGuard::new();
    topology::load(features, guard.clone());
    on_cleanup(move || guard.release());

    let index = Memo::new(move |_| country_data.with(|data| CountryIndex::build(data)));
    let max_count = Memo::new(move |_| country_data.with(|data| colors::max_count(data)));
    let shapes: Memo<Option<Vec<MapShape>>> = Memo::new(move |_| {
        features.with(|loaded| {
            loaded
                .as_deref()
                .map(|f| map_shapes(f, &Mercator::default()))
        })
    });
    let unmapped = Memo::new(move |_| {
        features.with(|loaded| {
            let Some(loaded) = loaded else {
                return Vec::new();
            };
            country_data.with(|data| detect_unmapped(loaded.iter().map(|f| f.name.as_str()), data))
        })
    });
    let viewport = Memo::new(move |_| interaction.with(|state| state.viewport));
    let hovered = Memo::new(move |_| interaction.with(|state| state.hovered_country.clone()));
    let panning = Memo::new(move |_| interaction.with(|state| state.is_panning));

    let dispatch = Callback::new(move |event: MapEvent| {
        index.with_untracked(|idx| interaction.update(|state| state.apply(event, idx)));
    });

    // Tooltip coordinates are pixels relative to the map container.
    let container_point = move |e: &MouseEvent| -> Point {
        container_ref
            .get_untracked()
            .map(|el| {
                let rect = el.get_bounding_client_rect();
                Point::new(
                    e.client_x() as f64 - rect.left(),
                    e.client_y() as f64 - rect.top(),
                )
            })
            .unwrap_or_else(|| Point::new(e.offset_x() as f64, e.offset_y() as f64))
    };

    let navigate_to = move |name: &str| {
        let request =
            index.with_untracked(|idx| navigation_for(name, idx, view_mode.get_untracked()));
        if let Some(request) = request {
            on_navigate.run(request);
        }
    };

    let on_pointer_down = move |e: PointerEvent| {
        let Some(svg) = e
            .current_target()
            .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
        else {
            return;
        };
        let on_feature = e
            .target()
            .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
            .is_some_and(|el| el.has_attribute(DATA_ATTR));
        let target = if on_feature {
            PointerTarget::Feature
        } else {
            PointerTarget::Background
        };
        let at = view_box_point(e.client_x() as f64, e.client_y() as f64, element_rect(&svg));
        dispatch.run(MapEvent::PanStart { at, target });
    };

    let on_pointer_move = move |e: PointerEvent| {
        if !interaction.with_untracked(|state| state.is_panning) {
            return;
        }
        let Some(svg) = e
            .current_target()
            .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
        else {
            return;
        };
        let at = view_box_point(e.client_x() as f64, e.client_y() as f64, element_rect(&svg));
        dispatch.run(MapEvent::PanMove { at });
    };

    let on_pointer_end = move |_: PointerEvent| {
        if interaction.with_untracked(|state| state.is_panning) {
            dispatch.run(MapEvent::PanEnd);
        }
    };

    let on_key_down = move |e: KeyboardEvent| {
        if let Some(event) = key_event(&e.key()) {
            e.prevent_default();
            dispatch.run(event);
        }
    };

    let render_shape = move |shape: MapShape| {
        let MapShape { name, path, .. } = shape;
        let has_data = {
            let name = name.clone();
            move || index.with(|idx| idx.contains(&name))
        };
        let fill = {
            let name = name.clone();
            move || index.with(|idx| colors::color_for(&name, idx, max_count.get()))
        };
        let aria_label = {
            let name = name.clone();
            move || {
                index.with(|idx| {
                    idx.get(&name)
                        .map(|entry| country_aria_label(&name, entry.count))
                })
            }
        };
        let opacity = {
            let name = name.clone();
            move || {
                if hovered.with(|h| h.as_deref() == Some(name.as_str())) {
                    "0.8"
                } else {
                    "1"
                }
            }
        };
        let on_enter = {
            let name = name.clone();
            move |e: MouseEvent| {
                dispatch.run(MapEvent::HoverStart {
                    country: name.clone(),
                    at: container_point(&e),
                })
            }
        };
        let on_click = {
            let name = name.clone();
            move |_: MouseEvent| navigate_to(&name)
        };
        let on_key = {
            let name = name.clone();
            move |e: KeyboardEvent| {
                let key = e.key();
                if key == "Enter" || key == " " {
                    e.prevent_default();
                    e.stop_propagation();
                    navigate_to(&name);
                }
            }
        };
        let has_data_role = has_data.clone();
        let has_data_tab = has_data.clone();

        view! {
            <path
                d=path
                data-country=name
                fill=fill
                stroke="#ffffff"
                stroke-width=move || viewport.with(|vp| vp.stroke_width(BASE_STROKE))
                style:opacity=opacity
                style:cursor=move || if has_data() { "pointer" } else { "inherit" }
                style:transition="opacity 0.2s"
                role=move || has_data_role().then_some("button")
                tabindex=move || has_data_tab().then_some("0")
                aria-label=aria_label
                on:mouseenter=on_enter
                on:mousemove=move |e: MouseEvent| dispatch.run(MapEvent::HoverMove { at: container_point(&e) })
                on:mouseleave=move |_: MouseEvent| dispatch.run(MapEvent::HoverEnd)
                on:click=on_click
                on:keydown=on_key
            />
        }
    };

    let tooltip = move || {
        let tip = interaction.with(|state| state.tooltip.clone())?;
        let flag = country::flag_glyph(tip.code);
        Some(view! {
            <div
                style:left=format!("{}px", tip.x + TOOLTIP_OFFSET.0)
                style:top=format!("{}px", tip.y + TOOLTIP_OFFSET.1)
                style="position: absolute; pointer-events: none; z-index: 50; background: #1e293b; color: #ffffff; padding: 8px 12px; border-radius: 8px; box-shadow: 0 4px 16px rgba(15,23,42,0.35); font-size: 0.85rem; white-space: nowrap;"
            >
                <p style="margin: 0; font-weight: 600;">
                    {(!flag.is_empty()).then(|| format!("{flag} "))}
                    {tip.country}
                </p>
                <p style="margin: 0; font-size: 0.75rem;">{glass_label(tip.count)}</p>
            </div>
        })
    };

    let legend = colors::legend_swatches()
        .into_iter()
        .map(|color| {
            view! {
                <div style=format!("width: 32px; height: 16px; border-radius: 4px; background: {color}; box-shadow: 0 1px 3px rgba(15,23,42,0.15);") />
            }
        })
        .collect_view();

    let map = move || {
        let Some(shapes) = shapes.get() else {
            return view! {
                <div style="display: flex; align-items: center; justify-content: center; height: 500px; background: rgba(255,255,255,0.6); border-radius: 12px;">
                    <p style="color: #475569;">"Loading map..."</p>
                </div>
            }
            .into_any();
        };
        let paths = shapes.into_iter().map(render_shape).collect_view();
        view! {
            <svg
                viewBox=format!("0 0 {VIEW_BOX_WIDTH} {VIEW_BOX_HEIGHT}")
                style="display: block; width: 100%; height: auto; background: rgba(255,255,255,0.6); border-radius: 12px; touch-action: none;"
                style:cursor=move || if panning.get() { "grabbing" } else { "grab" }
                on:pointerdown=on_pointer_down
                on:pointermove=on_pointer_move
                on:pointerup=on_pointer_end
                on:pointerleave=on_pointer_end
            >
                <g transform=move || viewport.with(|vp| vp.transform())>{paths}</g>
            </svg>
        }
        .into_any()
    };

    view! {
        <div
            node_ref=container_ref
            tabindex="0"
            aria-label="World map"
            style="position: relative; outline: none;"
            on:keydown=on_key_down
        >
            {move || {
                shapes.with(Option::is_some).then(|| view! { <MapControls viewport=viewport dispatch=dispatch /> })
            }}
            {map}
            {tooltip}
            <div style="margin-top: 16px; display: flex; align-items: center; justify-content: center; gap: 8px; font-size: 0.85rem; color: #475569;">
                <span>"Less"</span>
                <div style="display: flex; gap: 4px;">{legend}</div>
                <span>"More"</span>
            </div>
            <div style="margin-top: 8px; text-align: center; font-size: 0.75rem; color: #64748b;">
                "Use +/\u{2212} buttons to zoom \u{2022} Drag to pan \u{2022} Click country to filter"
            </div>
            <UnmappedCountries countries=unmapped />
        </div>
    }
}
