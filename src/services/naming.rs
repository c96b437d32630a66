//! Bidirectional transform between internal slot names and the host
//! toolkit's constant naming. The two functions are exact inverses for
//! every slot name defined by the color-group variants.

/// `frame_bg_active` -> `FrameBgActive`.
pub fn toolkit_name(internal: &str) -> String {
    let mut out = String::with_capacity(internal.len());
    let mut upper_next = true;
    for ch in internal.chars() {
        if ch == '_' {
            upper_next = true;
            continue;
        }
        if upper_next {
            out.extend(ch.to_uppercase());
            upper_next = false;
        } else {
            out.push(ch);
        }
    }
    out
}

/// `FrameBgActive` -> `frame_bg_active`.
pub fn internal_name(toolkit: &str) -> String {
    let mut out = String::with_capacity(toolkit.len() + 4);
    for (i, ch) in toolkit.chars().enumerate() {
        if ch.is_uppercase() && i != 0 {
            out.push('_');
        }
        out.extend(ch.to_lowercase());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::groups::{CoreColors, NodeColors, PlotColors};

    #[test]
    fn known_examples() {
        assert_eq!(toolkit_name("text"), "Text");
        assert_eq!(toolkit_name("frame_bg_active"), "FrameBgActive");
        assert_eq!(internal_name("Text"), "text");
        assert_eq!(internal_name("FrameBgActive"), "frame_bg_active");
    }

    #[test]
    fn transforms_round_trip_for_every_slot() {
        let all_slots = CoreColors::SLOTS
            .iter()
            .chain(PlotColors::SLOTS)
            .chain(NodeColors::SLOTS);
        for slot in all_slots {
            let toolkit = toolkit_name(slot);
            assert_eq!(internal_name(&toolkit), *slot, "slot {slot}");
            assert_eq!(toolkit_name(&internal_name(&toolkit)), toolkit);
        }
    }
}
