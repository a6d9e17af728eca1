use promptline::*;

#[test]
fn visible_width_strips_ansi_sequences() {
    assert_eq!(visible_width("abc"), 3);
    assert_eq!(visible_width("\x1b[48;2;1;2;3mabc\x1b[0m"), 3);
    assert_eq!(visible_width("\x1b[31mred\x1b[0m \x1b[32mgreen\x1b[0m"), 9);
    assert_eq!(visible_width(""), 0);
}

#[test]
fn visible_width_counts_wide_glyphs_as_two_cells() {
    assert_eq!(visible_width("日本"), 4);
    assert_eq!(visible_width("\x1b[31m日本\x1b[0m go"), 7);

    // right-align math follows the cell count, not the char count
    let writer = AnsiWriter::new(80, true, true);
    assert_eq!(writer.cursor_for_right_align("日本", 0), "\x1b[76C");
}

#[test]
fn writer_emits_rgb_escapes_when_supported() {
    let mut writer = AnsiWriter::new(80, true, true);
    writer.write(&Color::Hex("#ff0000".into()), &Color::Hex("#00ff00".into()), "x");
    let out = writer.as_string();
    assert!(out.contains("\x1b[48;2;255;0;0m"));
    assert!(out.contains("\x1b[38;2;0;255;0m"));
    assert!(out.ends_with("x\x1b[0m"));
}

#[test]
fn writer_falls_back_to_8bit_colors() {
    let mut writer = AnsiWriter::new(80, true, false);
    writer.write(&Color::Hex("#ff0000".into()), &Color::Transparent, "x");
    let out = writer.as_string();
    assert!(out.contains("\x1b[48;5;"));
    assert!(!out.contains("48;2;"));
}

#[test]
fn transparent_colors_emit_no_escapes() {
    let mut writer = AnsiWriter::new(80, true, true);
    writer.write(&Color::Transparent, &Color::Transparent, "plain");
    assert_eq!(writer.as_string(), "plain");
}

#[test]
fn disabled_colors_pass_text_through() {
    let mut writer = AnsiWriter::new(80, false, true);
    writer.write(&Color::Hex("#ff0000".into()), &Color::Hex("#00ff00".into()), "x");
    assert_eq!(writer.as_string(), "x");
}

#[test]
fn reset_clears_accumulated_content() {
    let mut writer = AnsiWriter::new(80, false, false);
    writer.write(&Color::Transparent, &Color::Transparent, "x");
    writer.reset();
    assert_eq!(writer.as_string(), "");
}

#[test]
fn right_align_move_accounts_for_visible_width() {
    let writer = AnsiWriter::new(80, true, true);
    // 5 visible cells in 80 columns: move 75 to land flush right
    assert_eq!(
        writer.cursor_for_right_align("\x1b[31mhello\x1b[0m", 0),
        "\x1b[75C"
    );
    // text wider than the terminal: no move at all
    let wide = "x".repeat(100);
    assert_eq!(writer.cursor_for_right_align(&wide, 0), "");
    assert_eq!(writer.cursor_for_right_align("", 0), "");
}

#[test]
fn change_line_direction_follows_offset_sign() {
    let writer = AnsiWriter::new(80, true, true);
    assert_eq!(writer.change_line(2), "\x1b[2B");
    assert_eq!(writer.change_line(-3), "\x1b[3A");
    assert_eq!(writer.change_line(0), "");
}

#[test]
fn color_parsing_round_trips() {
    assert_eq!(Color::from("transparent"), Color::Transparent);
    assert_eq!(Color::from(""), Color::Transparent);
    assert_eq!(Color::from("#aabbcc"), Color::Hex("#aabbcc".to_string()));
    assert_eq!(String::from(Color::Transparent), "transparent");
    assert_eq!(parse_color("#ff8000"), (255, 128, 0));
    assert_eq!(parse_color("bogus"), (255, 255, 255));
}

#[test]
fn multibyte_color_values_fall_back_to_white() {
    // seven bytes but not seven ascii chars; must not panic on a byte slice
    assert_eq!(parse_color("#\u{20ac}abc"), (255, 255, 255));

    let mut writer = AnsiWriter::new(80, true, true);
    writer.write(&Color::Hex("#\u{20ac}abc".into()), &Color::Transparent, "x");
    assert!(writer.as_string().contains("\x1b[48;2;255;255;255m"));
}

#[test]
fn rgb_to_8bit_covers_cube_and_grayscale() {
    assert_eq!(rgb_to_8bit((0, 0, 0)), 16);
    assert_eq!(rgb_to_8bit((255, 255, 255)), 255);
    // pure red lands in the color cube
    assert_eq!(rgb_to_8bit((255, 0, 0)), 16 + 36 * 5);
}
