#![cfg(feature = "serde")]

use tatter::{AnchorLayout, Cloth, ClothConfig, InteractionConfig, Vec2};

fn assert_serde<T: serde::Serialize + serde::de::DeserializeOwned>() {}

#[test]
fn config_types_are_serializable() {
    assert_serde::<ClothConfig<f32>>();
    assert_serde::<ClothConfig<f64>>();
    assert_serde::<InteractionConfig<f64>>();
    assert_serde::<Vec2<f32>>();
    assert_serde::<AnchorLayout>();
}

#[test]
fn cloth_config_survives_json() {
    let config: ClothConfig<f64> = ClothConfig::new()
        .with_grid(12, 7)
        .with_rest_length(9.5)
        .with_gravity(Vec2::new(0.5, -3.0))
        .with_anchors(AnchorLayout::TopRow);

    let json = serde_json::to_string(&config).unwrap();
    let back: ClothConfig<f64> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, config);

    let cloth: Cloth<f64> = Cloth::new(back).unwrap();
    assert_eq!(cloth.anchor_count(), 12);
}

#[test]
fn interaction_config_from_hand_written_json() {
    let json = r#"{"pick_radius":20.0,"tear_extent":null,"tear_on_press":true}"#;
    let config: InteractionConfig<f32> = serde_json::from_str(json).unwrap();
    assert_eq!(config, InteractionConfig::new().with_pick_radius(20.0).with_tear_on_press(true));
}

#[test]
fn anchor_layout_uses_variant_names() {
    let json = serde_json::to_string(&AnchorLayout::TopCornersAndCenter).unwrap();
    assert_eq!(json, "\"TopCornersAndCenter\"");
}
