use eframe::egui;

use qrpanel_core::InputEvent;

/// The six physical controls of the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DeviceKey {
    Up,
    Down,
    Left,
    Right,
    Ok,
    Back,
}

/// Delivery phase of a key event, as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum KeyPhase {
    Press,
    Repeat,
    Release,
}

/// One element of the input stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct KeyInput {
    pub(crate) key: DeviceKey,
    pub(crate) phase: KeyPhase,
}

/// Map a host key to a device control.
pub(crate) fn map_key(key: egui::Key) -> Option<DeviceKey> {
    match key {
        egui::Key::ArrowUp => Some(DeviceKey::Up),
        egui::Key::ArrowDown => Some(DeviceKey::Down),
        egui::Key::ArrowLeft => Some(DeviceKey::Left),
        egui::Key::ArrowRight => Some(DeviceKey::Right),
        egui::Key::Enter => Some(DeviceKey::Ok),
        egui::Key::Escape => Some(DeviceKey::Back),
        _ => None,
    }
}

/// Drain this frame's raw key events into device key inputs, preserving
/// their order and delivery phase.
pub(crate) fn collect_key_inputs(ctx: &egui::Context) -> Vec<KeyInput> {
    ctx.input(|input| {
        input
            .events
            .iter()
            .filter_map(|event| {
                let egui::Event::Key {
                    key,
                    pressed,
                    repeat,
                    ..
                } = event
                else {
                    return None;
                };
                let key = map_key(*key)?;
                let phase = match (*pressed, *repeat) {
                    (true, false) => KeyPhase::Press,
                    (true, true) => KeyPhase::Repeat,
                    (false, _) => KeyPhase::Release,
                };
                Some(KeyInput { key, phase })
            })
            .collect()
    })
}

/// Semantic meaning of a device key: vertical keys move the selection,
/// horizontal keys adjust the selected value.
pub(crate) fn to_input_event(key: DeviceKey) -> InputEvent {
    match key {
        DeviceKey::Up => InputEvent::SelectPrevious,
        DeviceKey::Down => InputEvent::SelectNext,
        DeviceKey::Left => InputEvent::Decrease,
        DeviceKey::Right => InputEvent::Increase,
        DeviceKey::Ok => InputEvent::Confirm,
        DeviceKey::Back => InputEvent::Exit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrows_map_to_panel_controls() {
        assert_eq!(map_key(egui::Key::ArrowUp), Some(DeviceKey::Up));
        assert_eq!(map_key(egui::Key::ArrowDown), Some(DeviceKey::Down));
        assert_eq!(map_key(egui::Key::ArrowLeft), Some(DeviceKey::Left));
        assert_eq!(map_key(egui::Key::ArrowRight), Some(DeviceKey::Right));
        assert_eq!(map_key(egui::Key::Enter), Some(DeviceKey::Ok));
        assert_eq!(map_key(egui::Key::Escape), Some(DeviceKey::Back));
    }

    #[test]
    fn unmapped_keys_are_ignored() {
        assert_eq!(map_key(egui::Key::A), None);
        assert_eq!(map_key(egui::Key::Space), None);
    }

    #[test]
    fn vertical_keys_select_and_horizontal_keys_edit() {
        assert_eq!(to_input_event(DeviceKey::Up), InputEvent::SelectPrevious);
        assert_eq!(to_input_event(DeviceKey::Down), InputEvent::SelectNext);
        assert_eq!(to_input_event(DeviceKey::Left), InputEvent::Decrease);
        assert_eq!(to_input_event(DeviceKey::Right), InputEvent::Increase);
        assert_eq!(to_input_event(DeviceKey::Ok), InputEvent::Confirm);
        assert_eq!(to_input_event(DeviceKey::Back), InputEvent::Exit);
    }
}
