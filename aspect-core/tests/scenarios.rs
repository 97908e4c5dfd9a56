use aspect_core::{
    DEFAULT_PREVIEW_MAX, DimensionState, Deriver, Dimensions, Field, LayoutConfig, PLACEHOLDER,
};

fn deriver() -> Deriver {
    Deriver::new(LayoutConfig::default(), DEFAULT_PREVIEW_MAX as f64)
}

#[test]
fn default_page_then_target_width_edit() {
    let mut deriver = deriver();
    let mut state = DimensionState::default();

    let derived = deriver.derive(&state);
    assert_eq!(derived.ratio_label, "16:9");
    assert_eq!(derived.preview.map(|p| p.to_pixels()), Some((226, 127)));
    assert_eq!(derived.layout.len(), 4);

    state.edit_text(Field::TargetWidth, "1280");
    assert_eq!(state.target(), Dimensions::new(1280, 720));
    assert_eq!(deriver.derive(&state).ratio_label, "16:9");
    assert_eq!(deriver.computations(), 1);
}

#[test]
fn cleared_source_width_shows_placeholder_and_no_preview() {
    let mut deriver = deriver();
    let mut state = DimensionState::default();

    state.edit_text(Field::SourceWidth, "");
    let derived = deriver.derive(&state);
    assert_eq!(derived.ratio_label, PLACEHOLDER);
    assert!(derived.preview.is_none());
    assert!(derived.layout.is_empty());

    // 源不完整时编辑目标不联动
    state.edit_text(Field::TargetWidth, "1000");
    assert_eq!(state.target_height, Some(810));
}

#[test]
fn switching_to_portrait_source_tracks_target() {
    let mut state = DimensionState::default();
    state.edit_text(Field::SourceHeight, "1920");
    // 1920×1920 → 目标以高为锚点：810×810
    assert_eq!(state.target(), Dimensions::new(810, 810));
    state.edit_text(Field::SourceWidth, "1080");
    // 1080×1920 → 目标以宽为锚点：810×1440
    assert_eq!(state.target(), Dimensions::new(810, 1440));

    let mut deriver = deriver();
    let derived = deriver.derive(&state);
    assert_eq!(derived.ratio_label, "9:16");
    let preview = derived.preview.unwrap();
    assert_eq!(preview.height, DEFAULT_PREVIEW_MAX as f64);
    assert_eq!(derived.layout[0].columns[0].to_string(), "640×1138");
}
