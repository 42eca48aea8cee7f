//! Slot overlay rules.
//!
//! Both overlays read the pairs as they were before any overlay ran, so
//! `large_use = language` together with `small_use = editor` swaps the slots.

use presence_types::SlotUse;

/// One image/text display pair.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Slot {
    pub image: String,
    pub text: String,
}

impl Slot {
    pub(crate) fn new(image: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            image: image.into(),
            text: text.into(),
        }
    }
}

/// Returns the `(large, small)` pairs to display.
pub(crate) fn apply_overlays(
    large_use: SlotUse,
    small_use: SlotUse,
    editor: Slot,
    language: Slot,
) -> (Slot, Slot) {
    let large = match large_use {
        SlotUse::Language => language.clone(),
        SlotUse::Editor | SlotUse::None => editor.clone(),
    };
    let small = match small_use {
        SlotUse::Editor => editor,
        SlotUse::Language | SlotUse::None => language,
    };
    (large, small)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn editor() -> Slot {
        Slot::new("editor.png", "helix")
    }

    fn language() -> Slot {
        Slot::new("go.png", "Coding in go")
    }

    #[test]
    fn test_none_keeps_both_slots() {
        let (large, small) = apply_overlays(SlotUse::None, SlotUse::None, editor(), language());
        assert_eq!(large, editor());
        assert_eq!(small, language());
    }

    #[test]
    fn test_editor_and_language_are_identity() {
        let (large, small) =
            apply_overlays(SlotUse::Editor, SlotUse::Language, editor(), language());
        assert_eq!(large, editor());
        assert_eq!(small, language());
    }

    #[test]
    fn test_language_and_editor_swap() {
        let (large, small) =
            apply_overlays(SlotUse::Language, SlotUse::Editor, editor(), language());
        assert_eq!(large, language());
        assert_eq!(small, editor());
    }

    #[test]
    fn test_same_source_in_both_slots() {
        let (large, small) =
            apply_overlays(SlotUse::Language, SlotUse::Language, editor(), language());
        assert_eq!(large, language());
        assert_eq!(small, language());

        let (large, small) = apply_overlays(SlotUse::None, SlotUse::Editor, editor(), language());
        assert_eq!(large, editor());
        assert_eq!(small, editor());
    }
}
