//! Board header generation (serialization).
//!
//! Output is byte-compatible with the `DEFAULT_BOARD_LAYOUT_*` blocks found
//! in GP2040 `BoardConfig.h` files and is the exact inverse of
//! [`crate::parser::parse`].

use crate::models::{Element, Layout, Side};
use crate::parser::layout::MacroNames;
use crate::parser::macro_block;

/// Generates header text for a layout using the default macro names.
pub fn serialize(layout: &Layout) -> String {
    serialize_with(layout, &MacroNames::default())
}

/// Generates header text for a layout with custom macro names.
///
/// ```text
/// #define DEFAULT_BOARD_LAYOUT_A {\
///     {GP_ELEMENT_LEVER, {8, 20, 8, 8, 1, 0, 0, GP_SHAPE_ELLIPSE}},\
/// }
///
/// #define DEFAULT_BOARD_LAYOUT_B {\
///     {GP_ELEMENT_BTN_BUTTON, {30, 20, 34, 24, 1, 1, 3, GP_SHAPE_SQUARE,45}},\
/// }
/// ```
pub fn serialize_with(layout: &Layout, names: &MacroNames) -> String {
    Side::BOTH
        .iter()
        .map(|side| generate_block(names.for_side(*side), layout.side(*side)))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Rewrites the layout blocks inside existing header text.
///
/// Blocks found in `text` are replaced in place and everything around them is
/// kept byte for byte. This includes blocks the parser ignores because other
/// code follows them, such as a closing `#endif`. A block that is not present
/// at all is appended at the end, separated by a blank line. Splicing into
/// empty text is the same as [`serialize_with`].
pub fn splice(text: &str, layout: &Layout, names: &MacroNames) -> String {
    let blocks = macro_block::locate_macro_blocks(text);
    let mut replacements = Vec::new();
    let mut appended = Vec::new();

    for side in Side::BOTH {
        let name = names.for_side(side);
        let generated = generate_block(name, layout.side(side));
        // The parser reads the last terminated block with a given name
        let target = blocks
            .iter()
            .rev()
            .find(|block| block.name == name && block.terminated)
            .or_else(|| blocks.iter().rev().find(|block| block.name == name));
        match target {
            Some(block) => replacements.push((block.start, block.end, generated)),
            None => appended.push(generated),
        }
    }
    replacements.sort_by_key(|(start, _, _)| *start);

    let mut output = String::with_capacity(text.len());
    let mut cursor = 0;
    for (start, end, generated) in replacements {
        output.push_str(&text[cursor..start]);
        output.push_str(&generated);
        cursor = end;
    }
    output.push_str(&text[cursor..]);

    for generated in appended {
        output.truncate(output.trim_end().len());
        if !output.is_empty() {
            output.push_str("\n\n");
        }
        output.push_str(&generated);
    }

    output
}

/// Generates one `#define NAME {\ ... }` block.
pub fn generate_block(name: &str, elements: &[Element]) -> String {
    let lines = elements
        .iter()
        .map(generate_entry_line)
        .collect::<Vec<_>>()
        .join("\n");

    format!("#define {name} {{\\\n{lines}\n}}")
}

/// Generates one indented entry line with its trailing continuation.
fn generate_entry_line(element: &Element) -> String {
    format!("    {},\\", generate_entry(element))
}

/// Generates the `{TYPE, {values...}}` text of one element.
pub fn generate_entry(element: &Element) -> String {
    // Rotation is a trailing extra value, written without a space
    let rotation = element
        .emitted_rotation()
        .map(|degrees| format!(",{degrees}"))
        .unwrap_or_default();

    format!(
        "{{{}, {{{}, {}, {}, {}, {}, {}, {}, {}{}}}}}",
        element.element_type.symbol(),
        element.x1,
        element.y1,
        element.x2,
        element.y2,
        element.stroke,
        element.fill,
        element.value,
        element.shape.symbol(),
        rotation
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ElementShape, ElementType};
    use crate::parser::layout::parse;

    fn sample_layout() -> Layout {
        Layout::new(
            vec![
                Element::new(ElementType::Lever, ElementShape::Ellipse, 8, 20, 8, 8).with_style(1, 0),
                Element::new(ElementType::BtnButton, ElementShape::Square, 30, 20, 34, 24)
                    .with_style(1, 1)
                    .with_value(3)
                    .with_rotation(45),
            ],
            vec![
                Element::new(ElementType::DirButton, ElementShape::Line, 60, 10, 70, 10)
                    .with_style(1, 1)
                    .with_value(-2),
                Element::default(),
            ],
        )
    }

    #[test]
    fn test_exact_format() {
        let expected = "#define DEFAULT_BOARD_LAYOUT_A {\\\n\
            \x20   {GP_ELEMENT_LEVER, {8, 20, 8, 8, 1, 0, 0, GP_SHAPE_ELLIPSE}},\\\n\
            \x20   {GP_ELEMENT_BTN_BUTTON, {30, 20, 34, 24, 1, 1, 3, GP_SHAPE_SQUARE,45}},\\\n\
            }\n\
            \n\
            #define DEFAULT_BOARD_LAYOUT_B {\\\n\
            \x20   {GP_ELEMENT_DIR_BUTTON, {60, 10, 70, 10, 1, 1, -2, GP_SHAPE_LINE}},\\\n\
            \x20   {GP_ELEMENT_PIN_BUTTON, {4, 4, 4, 4, 1, 1, 0, GP_SHAPE_ELLIPSE}},\\\n\
            }";
        assert_eq!(serialize(&sample_layout()), expected);
    }

    #[test]
    fn test_empty_layout() {
        assert_eq!(
            serialize(&Layout::default()),
            "#define DEFAULT_BOARD_LAYOUT_A {\\\n\n}\n\n#define DEFAULT_BOARD_LAYOUT_B {\\\n\n}"
        );
        assert!(parse(&serialize(&Layout::default())).is_empty());
    }

    #[test]
    fn test_rotation_omission() {
        let base = Element::new(ElementType::BtnButton, ElementShape::Square, 0, 0, 10, 10);

        let zero = generate_entry(&base.with_rotation(0));
        let absent = generate_entry(&base);
        assert_eq!(zero, absent);
        assert_eq!(zero, "{GP_ELEMENT_BTN_BUTTON, {0, 0, 10, 10, 0, 0, 0, GP_SHAPE_SQUARE}}");

        let rotated = generate_entry(&base.with_rotation(45));
        assert_eq!(rotated, "{GP_ELEMENT_BTN_BUTTON, {0, 0, 10, 10, 0, 0, 0, GP_SHAPE_SQUARE,45}}");
    }

    #[test]
    fn test_round_trip() {
        let layout = sample_layout();
        assert_eq!(parse(&serialize(&layout)), layout);
    }

    #[test]
    fn test_round_trip_treats_zero_rotation_as_absent() {
        let layout = Layout::new(
            vec![Element::new(ElementType::BtnButton, ElementShape::Square, 1, 2, 3, 4).with_rotation(0)],
            vec![],
        );
        let reparsed = parse(&serialize(&layout));
        assert_eq!(reparsed, layout);
        assert_eq!(reparsed.a[0].rotation, None);
    }

    #[test]
    fn test_serialization_is_idempotent() {
        let once = serialize(&sample_layout());
        let twice = serialize(&parse(&once));
        assert_eq!(once, twice);
    }

    #[test]
    fn test_negative_rotation_round_trips() {
        let layout = Layout::new(
            vec![],
            vec![Element::new(ElementType::BtnButton, ElementShape::Square, 1, 2, 3, 4).with_rotation(-30)],
        );
        let text = serialize(&layout);
        assert!(text.contains("GP_SHAPE_SQUARE,-30}}"));
        assert_eq!(parse(&text), layout);
    }

    #[test]
    fn test_splice_into_empty_text() {
        let names = MacroNames::default();
        assert_eq!(splice("", &sample_layout(), &names), serialize(&sample_layout()));
    }

    #[test]
    fn test_splice_replaces_serialized_text() {
        let names = MacroNames::default();
        let before = serialize(&Layout::default());
        assert_eq!(splice(&before, &sample_layout(), &names), serialize(&sample_layout()));
    }

    #[test]
    fn test_splice_keeps_surrounding_text() {
        let names = MacroNames::default();
        let text = format!(
            "#ifndef BOARD_CONFIG_H_\n#define BOARD_CONFIG_H_\n\n#define BOARD_LEDS_PIN 28\n\n{}\n",
            serialize(&Layout::default())
        );
        let spliced = splice(&text, &sample_layout(), &names);

        assert!(spliced.starts_with("#ifndef BOARD_CONFIG_H_\n#define BOARD_CONFIG_H_\n\n#define BOARD_LEDS_PIN 28\n\n"));
        assert!(spliced.ends_with("}\n"));
        assert_eq!(parse(&spliced), sample_layout());
    }

    #[test]
    fn test_splice_appends_missing_block() {
        let names = MacroNames::default();
        let text = "#define DEFAULT_BOARD_LAYOUT_A {\\\n}\n";
        let spliced = splice(text, &sample_layout(), &names);

        assert_eq!(spliced, serialize(&sample_layout()));
    }

    #[test]
    fn test_splice_replaces_block_before_endif() {
        let names = MacroNames::default();
        let text = format!(
            "#ifndef BOARD_CONFIG_H_\n#define BOARD_CONFIG_H_\n\n{}\n\n#endif\n",
            serialize(&Layout::default())
        );
        let spliced = splice(&text, &sample_layout(), &names);

        assert_eq!(spliced.matches("#define DEFAULT_BOARD_LAYOUT_A").count(), 1);
        assert_eq!(spliced.matches("#define DEFAULT_BOARD_LAYOUT_B").count(), 1);
        assert!(spliced.ends_with("}\n\n#endif\n"));
        assert_eq!(
            spliced,
            format!(
                "#ifndef BOARD_CONFIG_H_\n#define BOARD_CONFIG_H_\n\n{}\n\n#endif\n",
                serialize(&sample_layout())
            )
        );
    }

    #[test]
    fn test_splice_prefers_block_the_parser_reads() {
        let names = MacroNames::default();
        let text = "#define DEFAULT_BOARD_LAYOUT_A {\\\n}\n\n#define DEFAULT_BOARD_LAYOUT_B {\\\n}\n\n#define DEFAULT_BOARD_LAYOUT_A {\\\n}\nint x;\n";
        let spliced = splice(text, &sample_layout(), &names);

        // The first A block is terminated by the B block and stays the target
        assert!(spliced.ends_with("#define DEFAULT_BOARD_LAYOUT_A {\\\n}\nint x;\n"));
        assert_eq!(parse(&spliced), sample_layout());
    }

    #[test]
    fn test_custom_names() {
        let names = MacroNames::new("LEFT", "RIGHT");
        let text = serialize_with(&sample_layout(), &names);
        assert!(text.starts_with("#define LEFT {\\\n"));
        assert!(text.contains("\n\n#define RIGHT {\\\n"));
        assert_eq!(
            crate::parser::layout::parse_with_report(&text, &names).layout,
            sample_layout()
        );
    }
}
