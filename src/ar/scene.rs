// src/ar/scene.rs - Scene description for the AR overlay

//! Pure description of the anchored inventory scene
//!
//! The scene is data: a list of props derived from a record and the current
//! selection. Renderers (the external 3D scene graph, or the in-app 2D
//! overlay) consume this description; none of the derivation depends on a
//! rendering framework.

use serde::{Deserialize, Serialize};

use crate::ar::selection::{PropAnimation, PropTag, Selection};
use crate::inventory::record::InventoryRecord;
use crate::inventory::status::{classify_record, ColorToken};

/// How many recent movements the anchored panel lists.
const MOVEMENT_LINES: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PropShape {
    Sphere { radius: f32 },
    Cube { scale: f32 },
    Panel { width: f32, height: f32 },
    Label { text: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Material {
    Status(ColorToken),
    Glass,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Animation {
    Pulse,
    Float,
    Rotate,
    Still,
}

/// One node of the anchored scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneProp {
    /// Set for the three activatable stock props; `None` for decoration.
    pub tag: Option<PropTag>,
    pub shape: PropShape,
    pub position: [f32; 3],
    pub material: Material,
    pub animation: Animation,
}

fn idle_animation(tag: PropTag) -> Animation {
    match tag {
        PropTag::Current => Animation::Float,
        PropTag::Min | PropTag::Max => Animation::Rotate,
    }
}

fn animation(selection: Selection, tag: PropTag) -> Animation {
    match selection.animation_for(tag) {
        PropAnimation::Emphasized => Animation::Pulse,
        PropAnimation::Idle => idle_animation(tag),
    }
}

fn label(text: impl Into<String>, position: [f32; 3], color: ColorToken) -> SceneProp {
    SceneProp {
        tag: None,
        shape: PropShape::Label { text: text.into() },
        position,
        material: Material::Status(color),
        animation: Animation::Still,
    }
}

/// Derives the anchored scene for a record and the current selection.
pub fn build_scene(record: &InventoryRecord, selection: Selection) -> Vec<SceneProp> {
    let status_color = classify_record(record).color();

    let mut props = vec![
        SceneProp {
            tag: None,
            shape: PropShape::Panel {
                width: 3.0,
                height: 2.0,
            },
            position: [0.0, 0.1, 0.0],
            material: Material::Glass,
            animation: Animation::Still,
        },
        label(record.item_name.clone(), [0.0, 1.8, 0.0], ColorToken::Blue),
        // Current stock: the central sphere, colored by derived status.
        SceneProp {
            tag: Some(PropTag::Current),
            shape: PropShape::Sphere { radius: 0.4 },
            position: [0.0, 1.0, 0.0],
            material: Material::Status(status_color),
            animation: animation(selection, PropTag::Current),
        },
        label(
            format!("Current Stock\n{} units", record.current_stock),
            [0.0, 0.4, 0.0],
            ColorToken::Blue,
        ),
        SceneProp {
            tag: Some(PropTag::Min),
            shape: PropShape::Cube { scale: 0.3 },
            position: [-1.2, 0.6, 0.0],
            material: Material::Status(ColorToken::Red),
            animation: animation(selection, PropTag::Min),
        },
        label(
            format!("Minimum Stock\n{}", record.min_stock),
            [-1.2, 0.1, 0.0],
            ColorToken::Red,
        ),
        SceneProp {
            tag: Some(PropTag::Max),
            shape: PropShape::Cube { scale: 0.3 },
            position: [1.2, 0.6, 0.0],
            material: Material::Status(ColorToken::Green),
            animation: animation(selection, PropTag::Max),
        },
        label(
            format!("Maximum Stock\n{}", record.max_stock),
            [1.2, 0.1, 0.0],
            ColorToken::Green,
        ),
        // Status beacon above the title, always pulsing.
        SceneProp {
            tag: None,
            shape: PropShape::Sphere { radius: 0.1 },
            position: [0.0, 1.5, 0.0],
            material: Material::Status(status_color),
            animation: Animation::Pulse,
        },
        label("Recent Movements:", [0.0, -0.3, 0.0], ColorToken::Blue),
    ];

    for (i, movement) in record.movements.iter().take(MOVEMENT_LINES).enumerate() {
        props.push(label(
            format!(
                "{} {} · {}",
                movement.kind.label(),
                movement.quantity,
                movement.date
            ),
            [0.0, -0.55 - 0.2 * i as f32, 0.0],
            movement.kind.color(),
        ));
    }

    props
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LookupConfig;
    use crate::inventory::lookup::{InventoryLookup, MockInventoryLookup};

    async fn record() -> InventoryRecord {
        let config = LookupConfig {
            latency_ms: 0,
            latency_jitter_ms: 0,
            ..Default::default()
        };
        MockInventoryLookup::new(config).lookup(None).await.unwrap()
    }

    fn prop_for(props: &[SceneProp], tag: PropTag) -> &SceneProp {
        props
            .iter()
            .find(|p| p.tag == Some(tag))
            .expect("prop present")
    }

    #[tokio::test]
    async fn test_scene_has_three_activatable_props() {
        let props = build_scene(&record().await, Selection::none());
        let tagged: Vec<_> = props.iter().filter(|p| p.tag.is_some()).collect();
        assert_eq!(tagged.len(), 3);
    }

    #[tokio::test]
    async fn test_selection_emphasizes_only_matching_prop() {
        let mut selection = Selection::none();
        selection.select(PropTag::Min);
        let props = build_scene(&record().await, selection);

        assert_eq!(prop_for(&props, PropTag::Min).animation, Animation::Pulse);
        assert_eq!(prop_for(&props, PropTag::Current).animation, Animation::Float);
        assert_eq!(prop_for(&props, PropTag::Max).animation, Animation::Rotate);
    }

    #[tokio::test]
    async fn test_current_prop_color_follows_status() {
        let mut rec = record().await;
        // 45/100 with min 20: normal, blue.
        let props = build_scene(&rec, Selection::none());
        assert_eq!(
            prop_for(&props, PropTag::Current).material,
            Material::Status(ColorToken::Blue)
        );

        rec.current_stock = 10;
        let props = build_scene(&rec, Selection::none());
        assert_eq!(
            prop_for(&props, PropTag::Current).material,
            Material::Status(ColorToken::Red)
        );
    }

    #[tokio::test]
    async fn test_movement_lines_are_capped() {
        let rec = record().await;
        assert!(rec.movements.len() > MOVEMENT_LINES);

        let props = build_scene(&rec, Selection::none());
        let movement_labels = props
            .iter()
            .filter(|p| matches!(&p.shape, PropShape::Label { text } if text.contains('·')))
            .count();
        assert_eq!(movement_labels, MOVEMENT_LINES);
    }
}
