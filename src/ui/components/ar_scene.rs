// src/ui/components/ar_scene.rs - 2D overlay rendering of the AR scene

//! In-app rendering of the anchored scene description. The external 3D
//! renderer consumes the same [`build_scene`] output; this overlay maps
//! each prop onto an absolutely positioned element so the selection
//! binding stays exercised end to end.

use dioxus::prelude::*;

use crate::ar::{build_scene, Animation, Material, PropShape, PropTag, SceneProp, Selection};
use crate::inventory::InventoryRecord;

fn animation_class(animation: Animation) -> &'static str {
    match animation {
        Animation::Pulse => "animate-pulse",
        Animation::Float => "animate-bounce",
        Animation::Rotate => "animate-spin",
        Animation::Still => "",
    }
}

/// Maps scene coordinates (x in [-1.5, 1.5], y in [0, 2]) onto the overlay.
fn position_style(position: [f32; 3]) -> String {
    let left = (position[0] / 3.0 + 0.5) * 100.0;
    let bottom = (position[1] + 0.8) / 3.0 * 100.0;
    format!("left: {left:.1}%; bottom: {bottom:.1}%; transform: translate(-50%, 50%);")
}

#[component]
pub fn ArSceneOverlay(
    record: InventoryRecord,
    selection: Selection,
    on_select: EventHandler<PropTag>,
) -> Element {
    let props = build_scene(&record, selection);

    rsx! {
        div {
            class: "relative h-96 rounded-2xl overflow-hidden bg-gradient-to-b from-gray-900 to-gray-700",
            for (i, prop) in props.into_iter().enumerate() {
                SceneNode { key: "{i}", prop, on_select }
            }
        }
    }
}

#[component]
fn SceneNode(prop: SceneProp, on_select: EventHandler<PropTag>) -> Element {
    let position = position_style(prop.position);
    let animation = animation_class(prop.animation);

    match prop.shape {
        PropShape::Panel { width, height } => {
            let w = width * 90.0;
            let h = height * 60.0;
            rsx! {
                div {
                    class: "absolute rounded-xl bg-white/10 border border-white/20",
                    style: "{position} width: {w}px; height: {h}px;",
                }
            }
        }
        PropShape::Sphere { radius } => {
            let size = radius * 160.0;
            let color = material_color(prop.material);
            if let Some(tag) = prop.tag {
                rsx! {
                    button {
                        r#type: "button",
                        class: "absolute rounded-full shadow-lg {animation}",
                        style: "{position} width: {size}px; height: {size}px; background-color: {color};",
                        onclick: move |_| on_select.call(tag),
                    }
                }
            } else {
                rsx! {
                    div {
                        class: "absolute rounded-full {animation}",
                        style: "{position} width: {size}px; height: {size}px; background-color: {color};",
                    }
                }
            }
        }
        PropShape::Cube { scale } => {
            let size = scale * 160.0;
            let color = material_color(prop.material);
            if let Some(tag) = prop.tag {
                rsx! {
                    button {
                        r#type: "button",
                        class: "absolute rounded-md shadow-lg {animation}",
                        style: "{position} width: {size}px; height: {size}px; background-color: {color};",
                        onclick: move |_| on_select.call(tag),
                    }
                }
            } else {
                rsx! {
                    div {
                        class: "absolute rounded-md {animation}",
                        style: "{position} width: {size}px; height: {size}px; background-color: {color};",
                    }
                }
            }
        }
        PropShape::Label { text } => {
            let color = material_color(prop.material);
            rsx! {
                p {
                    class: "absolute text-xs font-bold text-center whitespace-pre-line pointer-events-none",
                    style: "{position} color: {color};",
                    "{text}"
                }
            }
        }
    }
}

fn material_color(material: Material) -> &'static str {
    match material {
        Material::Status(color) => color.hex(),
        Material::Glass => "rgba(255, 255, 255, 0.7)",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_animation_classes_are_distinct() {
        assert_eq!(animation_class(Animation::Pulse), "animate-pulse");
        assert_eq!(animation_class(Animation::Float), "animate-bounce");
        assert_eq!(animation_class(Animation::Rotate), "animate-spin");
        assert_eq!(animation_class(Animation::Still), "");
    }

    #[test]
    fn test_position_style_maps_origin_to_center() {
        let style = position_style([0.0, 0.0, 0.0]);
        assert!(style.contains("left: 50.0%"));
    }
}
