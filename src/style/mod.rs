//! The host surface the picker serves: the map style being edited.

use bevy::prelude::*;

/// The style property sheet shown in the side panel. `image` is the marker
/// image url the picker fills in; empty means the style has no image yet.
#[derive(Resource, Debug, Clone)]
pub struct StyleProperty {
    pub name: String,
    pub image: String,
    pub kind: String,
}

impl Default for StyleProperty {
    fn default() -> Self {
        Self {
            name: "Untitled style".to_string(),
            image: String::new(),
            kind: String::new(),
        }
    }
}

/// Open/closed state of the picker dialog. Opened by the orchestrator when
/// the panel requests the picker, closed on confirm or cancel.
#[derive(Resource, Default)]
pub struct PickerWindow {
    pub is_open: bool,
}

/// Emitted by the picker when the user confirms a selection.
#[derive(Message)]
pub struct SetStyleImage {
    pub url: String,
    pub kind: String,
}

/// Emitted by the inline name editor on commit.
#[derive(Message)]
pub struct RenameStyle {
    pub name: String,
}

fn apply_style_image(
    mut events: MessageReader<SetStyleImage>,
    mut style: ResMut<StyleProperty>,
) {
    for event in events.read() {
        info!("style image set to {} ({})", event.url, event.kind);
        style.image = event.url.clone();
        style.kind = event.kind.clone();
    }
}

fn apply_style_rename(mut events: MessageReader<RenameStyle>, mut style: ResMut<StyleProperty>) {
    for event in events.read() {
        info!("style renamed to {:?}", event.name);
        style.name = event.name.clone();
    }
}

pub struct StylePlugin;

impl Plugin for StylePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<StyleProperty>()
            .init_resource::<PickerWindow>()
            .add_message::<SetStyleImage>()
            .add_message::<RenameStyle>()
            .add_systems(
                Update,
                (
                    apply_style_image.run_if(on_message::<SetStyleImage>),
                    apply_style_rename.run_if(on_message::<RenameStyle>),
                ),
            );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_property_default() {
        let style = StyleProperty::default();
        assert_eq!(style.name, "Untitled style");
        assert!(style.image.is_empty());
        assert!(style.kind.is_empty());
    }

    #[test]
    fn test_picker_window_starts_closed() {
        assert!(!PickerWindow::default().is_open);
    }
}
