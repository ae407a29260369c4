use bevy::color::Color;
use bevy::prelude::*;

/// Cyan used for text, borders and ripples
pub const ACCENT: Color = Color::srgb(0.0, 212.0 / 255.0, 1.0);

/// Panel background, a near-opaque version of the water colour
const PANEL_BACKGROUND: Color = Color::srgba(10.0 / 255.0, 14.0 / 255.0, 26.0 / 255.0, 0.9);

#[derive(Bundle)]
pub struct LabelBundle {
    pub text: Text,
    pub font: TextFont,
    pub color: TextColor,
    pub node: Node,
}

impl LabelBundle {
    pub fn new(text: &str, font_size: f32, color: Color) -> Self {
        Self {
            text: Text::new(text),
            font: TextFont {
                font_size,
                ..default()
            },
            color: TextColor(color),
            node: Node::default(),
        }
    }

    pub fn with_margin(mut self, margin: UiRect) -> Self {
        self.node.margin = margin;
        self
    }
}

/// Bordered card pinned to the top-right corner of the window
#[derive(Bundle)]
pub struct PanelBundle {
    pub node: Node,
    pub background: BackgroundColor,
    pub border_color: BorderColor,
    pub border_radius: BorderRadius,
    pub z_index: GlobalZIndex,
}

impl PanelBundle {
    pub fn new(accent: Color) -> Self {
        Self {
            node: Node {
                position_type: PositionType::Absolute,
                top: Val::Px(20.0),
                right: Val::Px(20.0),
                max_width: Val::Px(250.0),
                padding: UiRect::all(Val::Px(15.0)),
                border: UiRect::all(Val::Px(1.0)),
                flex_direction: FlexDirection::Column,
                ..default()
            },
            background: BackgroundColor(PANEL_BACKGROUND),
            border_color: BorderColor::all(accent),
            border_radius: BorderRadius::all(Val::Px(10.0)),
            z_index: GlobalZIndex(1000),
        }
    }
}

/// Full-window cover drawn above everything else
#[derive(Bundle)]
pub struct OverlayBundle {
    pub node: Node,
    pub background: BackgroundColor,
    pub z_index: GlobalZIndex,
}

impl OverlayBundle {
    pub fn new(color: Color) -> Self {
        Self {
            node: Node {
                position_type: PositionType::Absolute,
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            background: BackgroundColor(color),
            z_index: GlobalZIndex(2000),
        }
    }
}
